//! Profile slice: the identity card with its animated metrics, and the
//! experience timeline that fades in entry by entry.

#[cfg(feature = "client")]
mod client;
mod counter;
mod timeline;

#[cfg(feature = "client")]
pub use crate::client::{ExecutiveProfile, ExperienceTimeline};
pub use crate::counter::{COUNT_DURATION, Counter, ease_out_quart, run_counter};
pub use crate::timeline::{Reveal, Side, side_for};

/// Maximum profile card tilt in degrees.
pub const PROFILE_TILT: f64 = 15.0;

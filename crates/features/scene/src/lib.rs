//! Decorative scenes.
//!
//! Everything here is pure geometry stepped once per frame: the client views
//! project the current state through a [`Camera`] into SVG. No scene has inputs
//! beyond time and randomness, and none can fail.

mod camera;
#[cfg(feature = "client")]
mod client;
mod field;
mod float;
mod math;
mod stars;
mod threat;
mod tilt;

pub use crate::camera::{Camera, Projected, Viewport};
#[cfg(feature = "client")]
pub use crate::client::{AmbientBackdrop, HeroScene, TiltCard};
pub use crate::field::{DataField, DataNode, FloatShape, STRATEGIC_SHAPES, ShapeKind, grid_lines};
pub use crate::float::{Float, float_offset};
pub use crate::math::{MAP_HEIGHT, MAP_WIDTH, Vec3, bezier, lat_lng_to_map};
pub use crate::stars::{HERO_STARS, Star, Starfield};
pub use crate::threat::{ARC_COLORS, Arc, CITIES, City, FeedEntry, MAX_ARCS, ThreatMap};
pub use crate::tilt::Tilt;

//! Navigation feature slice: a fixed bar that turns solid once the page scrolls,
//! plus the collapsible menu used on narrow screens.

#[cfg(feature = "client")]
mod client;
mod model;

#[cfg(feature = "client")]
pub use crate::client::{NavBar, ScrollSubscription};
pub use crate::model::{NavLink, NAV_LINKS, NavState};

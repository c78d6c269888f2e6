//! Common imports for feature slices.

pub use crate::entropy::{Entropy, SeededEntropy};
pub use crate::state::StateCell;
pub use crate::time::{FRAME, sleep, sleep_until};
pub use folio_domain::config::SiteConfig;
pub use folio_domain::content::{PortfolioContent, Skill, SkillCategory};

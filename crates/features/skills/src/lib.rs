//! Skills slice: the tabbed capabilities matrix and the knowledge-graph cloud.

#[cfg(feature = "client")]
mod client;
mod cloud;
mod grid;

#[cfg(feature = "client")]
pub use crate::client::{KnowledgeGraph, SkillMatrix};
pub use crate::cloud::{
    CONNECTION_DISTANCE, CLOUD_RADIUS, CloudWord, ROTATION_PER_FRAME, SkillCloud, category_color,
};
pub use crate::grid::{ANIMATION, Selection, SkillGrid, SkillTab, load_level};

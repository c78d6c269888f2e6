//! # Domain Models
//!
//! This crate contains pure site types with minimal dependencies (`serde`, `strum`).
//! Keep it lean: data and simple helpers only, no I/O.

pub mod config;
pub mod constants;
pub mod content;

//! Kernel utilities shared across slices.
//! Keep this crate lightweight: it loads the content record and configuration,
//! and provides the few runtime seams every animated sequence needs (timers,
//! randomness, shared state).
//!
//! ## Content
//! ```rust
//! # use folio_kernel::content::embedded;
//! let content = embedded().unwrap();
//! assert!(!content.skills.is_empty());
//! ```
//!
//! ## Config loading (non-wasm)
//! ```rust,ignore
//! #[cfg(not(target_arch = "wasm32"))]
//! # {
//!     use folio_kernel::config::load_config;
//!     let cfg: folio_domain::config::SiteConfig = load_config(Some("folio.toml")).unwrap();
//! # }
//! ```
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
pub mod content;
pub mod entropy;
pub mod prelude;
pub mod state;
pub mod time;

pub use folio_domain as domain;

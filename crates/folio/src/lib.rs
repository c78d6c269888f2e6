//! Facade crate for the portfolio site.
//! Re-exports domain/kernel primitives and composes the feature slices into the page.
//! Keep this crate thin: it should compose other crates, not implement behavior.
//!
//! ## Usage
//! - Add `folio` with the `client` feature to get [`App`](crate::App).
//! - Provide a `SiteConfig` context before launch, or let `App` fall back to defaults.

#[cfg(feature = "client")]
mod app;
mod page;

#[cfg(feature = "client")]
pub use crate::app::App;
pub use crate::page::{copyright, section_title};
pub use folio_domain as domain;
pub use folio_kernel as kernel;

/// Feature registry for runtime introspection.
pub mod features {
    pub use folio_credentials as credentials;
    pub use folio_download as download;
    pub use folio_navigation as navigation;
    pub use folio_profile as profile;
    pub use folio_scene as scene;
    pub use folio_skills as skills;
    pub use folio_transmission as transmission;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "client")]
        "client",
        "navigation",
        "download",
        "transmission",
        "skills",
        "profile",
        "credentials",
        "scene",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

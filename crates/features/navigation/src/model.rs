use folio_domain::config::NavigationConfig;
use folio_domain::constants::{ABOUT, CERTIFICATIONS, CONTACT, EXPERIENCE, SKILLS};

/// One in-page anchor in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavLink {
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

/// Links in section order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", anchor: ABOUT },
    NavLink { label: "Experience", anchor: EXPERIENCE },
    NavLink { label: "Skills", anchor: SKILLS },
    NavLink { label: "Certifications", anchor: CERTIFICATIONS },
    NavLink { label: "Contact", anchor: CONTACT },
];

/// Transient navigation state: solid-bar flag and mobile menu.
#[derive(Debug, Clone, PartialEq)]
pub struct NavState {
    threshold: f64,
    scrolled: bool,
    menu_open: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(&NavigationConfig::default())
    }
}

impl NavState {
    #[must_use]
    pub const fn new(config: &NavigationConfig) -> Self {
        Self { threshold: config.scroll_threshold, scrolled: false, menu_open: false }
    }

    /// Records a new vertical scroll offset. Returns `true` when the bar style flips.
    pub fn observe_scroll(&mut self, offset: f64) -> bool {
        let changed = self.would_flip(offset);
        self.scrolled = offset > self.threshold;
        changed
    }

    /// Whether `offset` lands on the other side of the threshold.
    #[must_use]
    pub fn would_flip(&self, offset: f64) -> bool {
        (offset > self.threshold) != self.scrolled
    }

    pub const fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Selecting a link always collapses the menu.
    pub const fn close_menu(&mut self) {
        self.menu_open = false;
    }

    #[must_use]
    pub const fn scrolled(&self) -> bool {
        self.scrolled
    }

    #[must_use]
    pub const fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// CSS modifier for the bar.
    #[must_use]
    pub const fn bar_class(&self) -> &'static str {
        if self.scrolled { "nav nav--solid" } else { "nav nav--clear" }
    }
}

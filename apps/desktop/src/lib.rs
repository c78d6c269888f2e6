use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use folio::domain::config::SiteConfig;

#[derive(Debug)]
pub struct DesktopApp {
    title: String,
    width: f64,
    height: f64,
    config: SiteConfig,
}

impl Default for DesktopApp {
    fn default() -> Self {
        Self { title: "Folio".to_owned(), width: 1280.0, height: 860.0, config: SiteConfig::default() }
    }
}

impl DesktopApp {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Site configuration handed to every component through context.
    #[must_use]
    pub fn with_config(mut self, config: SiteConfig) -> Self {
        self.config = config;
        self
    }

    /// The entry point for launching the app
    pub fn launch(self, root: fn() -> Element) {
        let window = WindowBuilder::new().with_title(&self.title).with_inner_size(
            dioxus::desktop::LogicalSize { width: self.width, height: self.height },
        );

        let cfg = Config::default().with_window(window).with_custom_head(
            r#"<meta name="viewport" content="width=device-width, initial-scale=1.0">"#.into(),
        );

        let config = self.config;
        LaunchBuilder::desktop()
            .with_cfg(cfg)
            .with_context_provider(move || Box::new(config.clone()))
            .launch(root);
    }
}

//! Browser build. Config is not loaded here; the page runs on `SiteConfig` defaults.

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(folio::App);
}

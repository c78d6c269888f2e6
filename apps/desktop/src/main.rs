#![windows_subsystem = "windows"]

use folio::domain::config::SiteConfig;
use folio::kernel::config::load_config;
use folio_desktop::DesktopApp;
use folio_logger::Logger;

fn main() -> anyhow::Result<()> {
    let config: SiteConfig = load_config(None::<&str>)?;
    let _logger = Logger::from_config(env!("CARGO_PKG_NAME"), &config.log)?;

    if config.relay.is_placeholder() {
        tracing::warn!("Relay endpoint is the placeholder; set FOLIO__RELAY__ENDPOINT");
    }

    let content = folio::kernel::content::embedded()?;
    tracing::info!(owner = %content.name, "Launching desktop shell");

    DesktopApp::new().with_title(content.name.clone()).with_config(config).launch(folio::App);

    Ok(())
}

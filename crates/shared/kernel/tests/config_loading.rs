use folio_domain::config::SiteConfig;
use folio_kernel::config::load_config;
use std::io::Write;

#[test]
fn explicit_file_overrides_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "[relay]\nendpoint = \"https://relay.example.com/ajax/me@example.com\"")?;
    writeln!(file, "[transmission]\ntick_ms = 50")?;

    let cfg: SiteConfig = load_config(Some(file.path()))?;

    assert_eq!(cfg.relay.endpoint, "https://relay.example.com/ajax/me@example.com");
    assert_eq!(cfg.transmission.tick_ms, 50);
    assert_eq!(cfg.transmission.encrypt_ms, 1_500);
    Ok(())
}

#[test]
fn missing_explicit_file_is_an_error() {
    let result = load_config::<SiteConfig>(Some("/definitely/not/here/folio.toml"));
    assert!(result.is_err());
}

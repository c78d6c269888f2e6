use folio_domain::config::{
    LogRotation, NavigationConfig, PLACEHOLDER_RELAY_ENDPOINT, RelayConfig, ResumeConfig,
    SiteConfig, TransmissionConfig,
};
use serde_json::json;
use std::time::Duration;

#[test]
fn config_defaults_are_sane() {
    assert!((NavigationConfig::default().scroll_threshold - 50.0).abs() < f64::EPSILON);

    let resume = ResumeConfig::default();
    assert_eq!(resume.href, None);
    assert_eq!(resume.prepare(), Duration::from_millis(1_500));
    assert_eq!(resume.linger(), Duration::from_secs(3));

    let relay = RelayConfig::default();
    assert_eq!(relay.endpoint, PLACEHOLDER_RELAY_ENDPOINT);
    assert!(relay.is_placeholder());

    let transmission = TransmissionConfig::default();
    assert_eq!(transmission.tick_ms, 100);
    assert_eq!(transmission.success_ms, 4_000);
}

#[test]
fn site_config_deserializes_partial_sections() {
    let raw = json!({
        "navigation": { "scroll_threshold": 80.0 },
        "relay": { "endpoint": "https://relay.example.com/ajax/me@example.com" },
        "resume": { "href": "https://cdn.example.com/cv.pdf" },
        "log": { "level": "debug", "directory": "/tmp/folio", "rotation": "hourly" }
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert!((cfg.navigation.scroll_threshold - 80.0).abs() < f64::EPSILON);
    assert!(!cfg.relay.is_placeholder());
    assert_eq!(cfg.relay.subject_prefix, "New Mission Request from");
    assert_eq!(cfg.resume.file_name, "Diksha_Sharma_Resume.pdf");
    assert_eq!(cfg.resume.href.as_deref(), Some("https://cdn.example.com/cv.pdf"));
    assert_eq!(cfg.log.level, "debug");
    assert_eq!(cfg.log.directory, Some(std::path::PathBuf::from("/tmp/folio")));
    assert_eq!(cfg.log.rotation, LogRotation::Hourly);
}

#[test]
fn site_config_clones_on_write() {
    let original = SiteConfig::default();
    let mut edited = original.clone();
    edited.relay.endpoint = "https://relay.example.com".to_owned();

    assert!(original.relay.is_placeholder());
    assert!(!edited.relay.is_placeholder());
}

use folio_domain::config::LogConfig;
use folio_logger::Logger;

#[test]
fn config_without_directory_logs_to_console_only() {
    let log = LogConfig { directory: None, filter: Some("folio=trace".to_owned()), ..LogConfig::default() };
    let logger = Logger::from_config("folio-console", &log).expect("logger should initialize");

    assert!(!logger.writes_files());
}

#[test]
fn unknown_level_is_reported_before_install() {
    let log = LogConfig { level: "verbose".to_owned(), ..LogConfig::default() };
    let err = Logger::from_config("folio-console", &log).expect_err("bad level");

    assert_eq!(err.kind(), "setting");
    assert!(err.to_string().contains("log.level"));
}

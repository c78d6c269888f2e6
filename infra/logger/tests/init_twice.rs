use folio_domain::config::LogConfig;
use folio_logger::Logger;

#[test]
fn second_install_from_config_is_refused() {
    let log = LogConfig { level: "debug".to_owned(), ..LogConfig::default() };
    let _first = Logger::from_config("folio-desktop", &log).expect("first install");

    let err = Logger::from_config("folio-desktop", &log).expect_err("second install");

    assert_eq!(err.kind(), "already_installed");
    tracing::debug!("still logging through the first subscriber");
}

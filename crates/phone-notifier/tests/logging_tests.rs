//! Global subscriber installation

use rvoip_phone_notifier::config::LogSettings;
use rvoip_phone_notifier::{setup_logging, LoggingConfig, NotifierError};

#[test]
fn test_setup_logging_installs_once() {
    let settings = LogSettings {
        level: "debug".to_string(),
        json: false,
        file_info: true,
    };
    let config = LoggingConfig::from_settings(&settings).unwrap().with_spans();

    setup_logging(config.clone()).unwrap();
    tracing::debug!("logger installed");

    let second = setup_logging(config);
    assert!(matches!(second, Err(NotifierError::Config(_))));
}

#[test]
fn test_invalid_level_is_config_error() {
    let settings = LogSettings {
        level: "chatty".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        LoggingConfig::from_settings(&settings),
        Err(NotifierError::Config(_))
    ));
}

//! Tests for configuration system

use ccswing::Config;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.database.url, "sqlite:ccswing.db");
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.format, "pretty");
    assert_eq!(config.studio.timezone, "America/Chicago");
    assert_eq!(config.signup.store_timeout_secs, 10);
}

#[test]
fn test_default_config_is_valid() {
    let config = Config::load(None).expect("Failed to load config");

    assert!(config.validate().is_ok());
}

#[test]
fn test_missing_file_uses_defaults() {
    let config = Config::load(Some("config/does-not-exist.toml".to_string()))
        .expect("Failed to load config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.email.prayer_address, "prayers.ccs@gmail.com");
    assert_eq!(config.media.api_base, "https://www.googleapis.com/drive/v3");
}

#[cfg(test)]
mod config_tests {
    use crate::config::enums::configuration_error::ConfigurationError;
    use crate::config::structs::configuration::Configuration;

    #[test]
    fn test_default_configuration_is_valid() {
        let config = Configuration::init();
        assert!(config.validate().is_ok());
        assert_eq!(config.tracker_config.sweep_interval, 10);
        assert!(config.tracker_config.snapshot_on_update);
        assert!(config.tracker_config.atomic_snapshots);
        assert_eq!(config.http_server.len(), 1);
    }

    #[test]
    fn test_configuration_toml_roundtrip() {
        let config = Configuration::init();
        let serialized = toml::to_string(&config).unwrap();
        let parsed = Configuration::load(serialized.as_bytes()).unwrap();
        assert_eq!(parsed.log_level, config.log_level);
        assert_eq!(parsed.directory.tracker_db_dir, config.directory.tracker_db_dir);
        assert_eq!(parsed.http_server[0].bind_address, config.http_server[0].bind_address);
    }

    #[test]
    fn test_configuration_rejects_zero_sweep_interval() {
        let mut config = Configuration::init();
        config.tracker_config.sweep_interval = 0;
        assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
    }

    #[test]
    fn test_configuration_rejects_unknown_log_level() {
        let mut config = Configuration::init();
        config.log_level = String::from("chatty");
        assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
    }

    #[test]
    fn test_configuration_rejects_bad_bind_address() {
        let mut config = Configuration::init();
        config.http_server[0].bind_address = String::from("localhost");
        assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
    }

    #[test]
    fn test_configuration_requires_enabled_server() {
        let mut config = Configuration::init();
        config.http_server[0].enabled = false;
        assert!(matches!(config.validate(), Err(ConfigurationError::ValidationError(_))));
    }

    #[test]
    fn test_configuration_parse_error() {
        let result = Configuration::load(b"log_level = ");
        assert!(result.is_err());
    }

    #[test]
    fn test_configuration_error_display() {
        let error = ConfigurationError::ValidationError(String::from("nope"));
        assert_eq!(format!("{error}"), "invalid configuration: nope");
    }
}

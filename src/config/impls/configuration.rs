use std::fs::File;
use std::io::Write;
use std::net::SocketAddr;
use std::thread::available_parallelism;
use crate::common::common::parse_log_level;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::directory_config::DirectoryConfig;
use crate::config::structs::http_trackers_config::HttpTrackersConfig;
use crate::config::structs::tracker_config::TrackerConfig;

impl Default for Configuration {
    fn default() -> Self {
        Self::init()
    }
}

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            log_console_interval: 60,
            tracker_config: TrackerConfig {
                sweep_interval: 10,
                snapshot_on_update: true,
                atomic_snapshots: true,
            },
            directory: DirectoryConfig {
                tracker_db_dir: String::from("tracker_db/"),
                logs_dir: String::from("logs/"),
            },
            http_server: vec!(
                HttpTrackersConfig {
                    enabled: true,
                    bind_address: String::from("0.0.0.0:6969"),
                    keep_alive: 60,
                    request_timeout: 15,
                    disconnect_timeout: 15,
                    max_connections: 25000,
                    threads: available_parallelism().map(|threads| threads.get() as u64).unwrap_or(4),
                }
            )
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        match std::fs::read(path) {
            Err(e) => Err(ConfigurationError::IOError(e)),
            Ok(data) => {
                match Self::load(data.as_slice()) {
                    Ok(cfg) => {
                        Ok(cfg)
                    }
                    Err(e) => Err(ConfigurationError::ParseError(e)),
                }
            }
        }
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        match File::create(path) {
            Ok(mut file) => {
                match file.write_all(data.as_ref()) {
                    Ok(_) => Ok(()),
                    Err(e) => Err(ConfigurationError::IOError(e))
                }
            }
            Err(e) => Err(ConfigurationError::IOError(e))
        }
    }

    /// Loads and validates `path`. When the file is missing or broken and `create` is set,
    /// a default configuration is written in its place and an error is still returned so
    /// the operator gets a chance to edit it.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(error);
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init()).map_err(ConfigurationError::SerializeError)?;
                return match Configuration::save_file(path, config_toml) {
                    Ok(_) => {
                        eprintln!("Please edit {path} and restart, exiting now...");
                        Err(error)
                    }
                    Err(e) => {
                        eprintln!("{path} could not be created, check permissions...");
                        Err(e)
                    }
                };
            }
        };

        println!("[VALIDATE] Validating configuration...");
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if parse_log_level(self.log_level.as_str()).is_none() {
            return Err(ConfigurationError::ValidationError(format!("unknown log level '{}'", self.log_level)));
        }
        if self.tracker_config.sweep_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("tracker_config.sweep_interval must be greater than 0")));
        }
        if self.log_console_interval == 0 {
            return Err(ConfigurationError::ValidationError(String::from("log_console_interval must be greater than 0")));
        }
        if self.directory.tracker_db_dir.is_empty() || self.directory.logs_dir.is_empty() {
            return Err(ConfigurationError::ValidationError(String::from("directory paths must not be empty")));
        }

        let mut enabled = 0usize;
        for http_server in self.http_server.iter().filter(|server| server.enabled) {
            if http_server.bind_address.parse::<SocketAddr>().is_err() {
                return Err(ConfigurationError::ValidationError(format!("invalid bind address '{}'", http_server.bind_address)));
            }
            if http_server.threads == 0 {
                return Err(ConfigurationError::ValidationError(format!("http server {} needs at least one thread", http_server.bind_address)));
            }
            enabled += 1;
        }
        if enabled == 0 {
            return Err(ConfigurationError::ValidationError(String::from("no enabled http_server configured")));
        }

        Ok(())
    }
}

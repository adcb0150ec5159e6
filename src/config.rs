use ccswing_media::MediaConfig;
use ccswing_notification::EmailConfig;
use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
    pub email: EmailConfig,
    pub studio: StudioConfig,
    pub signup: SignupConfig,
    pub media: MediaConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StudioConfig {
    pub name: String,
    /// IANA name used to decide what "today" is for signups.
    pub timezone: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SignupConfig {
    pub store_timeout_secs: u64,
    pub notify_timeout_secs: u64,
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (CCSWING__DATABASE__URL, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("database.url", "sqlite:ccswing.db")?
            .set_default("database.max_connections", 5)?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "pretty")?
            .set_default("email.smtp_host", "localhost")?
            .set_default("email.smtp_port", 1025)?
            .set_default("email.smtp_username", "")?
            .set_default("email.smtp_password", "")?
            .set_default("email.from_address", "noreply@countrycityswing.com")?
            .set_default("email.prayer_address", "prayers.ccs@gmail.com")?
            .set_default("studio.name", "Country City Swing")?
            .set_default("studio.timezone", "America/Chicago")?
            .set_default("signup.store_timeout_secs", 10)?
            .set_default("signup.notify_timeout_secs", 10)?
            .set_default("media.api_key", "")?
            .set_default("media.folder_id", "")?
            .set_default("media.weekly_folder_id", "")?
            .set_default("media.api_base", "https://www.googleapis.com/drive/v3")?
            .set_default("media.download_base", "https://drive.google.com/uc")?
            .set_default("media.timeout_secs", 15)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional, defaults and env are enough to boot.
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("CCSWING")
                .separator("__")
                .try_parsing(true),
        );

        // Unprefixed names used by older deployments
        if let Ok(database_url) = env::var("DATABASE_URL") {
            builder = builder.set_override("database.url", database_url)?;
        }
        if let Ok(api_key) = env::var("GOOGLE_DRIVE_API_KEY") {
            builder = builder.set_override("media.api_key", api_key)?;
        }
        if let Ok(folder_id) = env::var("GOOGLE_DRIVE_FOLDER_ID") {
            builder = builder.set_override("media.folder_id", folder_id)?;
        }
        if let Ok(folder_id) = env::var("GOOGLE_DRIVE_WEEKLY_PHOTO_FOLDER_ID") {
            builder = builder.set_override("media.weekly_folder_id", folder_id)?;
        }

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.database.max_connections < 1 {
            return Err("Database max_connections must be at least 1".to_string());
        }
        if self.signup.store_timeout_secs == 0 || self.signup.notify_timeout_secs == 0 {
            return Err("Signup timeouts must be at least 1 second".to_string());
        }
        if self.media.timeout_secs == 0 {
            return Err("Media timeout must be at least 1 second".to_string());
        }
        if !ccswing_shared::is_known_timezone(&self.studio.timezone) {
            return Err(format!("Unknown studio timezone: {}", self.studio.timezone));
        }
        if !matches!(self.logging.format.as_str(), "pretty" | "json") {
            return Err(format!("Unknown logging format: {}", self.logging.format));
        }
        Ok(())
    }
}

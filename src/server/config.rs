use crate::server::error::{config::ConfigError, AppError};

const DATABASE_URL: &str = "DATABASE_URL";

pub struct Config {
    /// Sqlite connection string, e.g. `sqlite://westcoast.db?mode=rwc`
    pub database_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var(DATABASE_URL)
            .map_err(|_| ConfigError::MissingEnvVar(DATABASE_URL.to_string()))?;

        Ok(Self::new(database_url)?)
    }

    /// Builds the configuration from an explicit database url.
    ///
    /// Only Sqlite urls are accepted since the server is built with the Sqlite driver alone.
    pub fn new(database_url: String) -> Result<Self, ConfigError> {
        if !database_url.starts_with("sqlite:") {
            return Err(ConfigError::UnsupportedDatabaseUrl(database_url));
        }

        Ok(Self { database_url })
    }
}

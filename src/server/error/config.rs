use thiserror::Error;

/// Problems with the environment the server is started in
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    /// Required environment variable is not set. See `.env.example`.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// `DATABASE_URL` does not point at a Sqlite database.
    #[error("DATABASE_URL must be a sqlite connection string, got {0}")]
    UnsupportedDatabaseUrl(String),
}

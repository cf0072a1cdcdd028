/// Database connection settings, loaded once at startup and handed to
/// [`crate::create_pool`].
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Postgres connection string (`DATABASE_URL`, required).
    pub url: String,
    /// Pool size (`DATABASE_MAX_CONNECTIONS`, default `20`).
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Load configuration from environment variables.
    ///
    /// Panics if `DATABASE_URL` is missing or the pool size is not a
    /// number; the server cannot start without a database.
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "20".into())
            .parse()
            .expect("DATABASE_MAX_CONNECTIONS must be a valid u32");

        Self {
            url,
            max_connections,
        }
    }
}

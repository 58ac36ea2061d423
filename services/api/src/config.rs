/// API service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// MongoDB connection string. Env var: `DATABASE_URL`.
    pub database_url: Option<String>,
    /// MongoDB database name. Env var: `DATABASE_NAME`.
    pub database_name: Option<String>,
    /// TCP port for the HTTP server (default 8000). Env var: `PORT`.
    pub port: u16,
}

impl ApiConfig {
    /// Missing store settings are not an error: the service then runs
    /// without a store and read endpoints return fallback data.
    pub fn from_env() -> Self {
        Self {
            database_url: non_empty_var("DATABASE_URL"),
            database_name: non_empty_var("DATABASE_NAME"),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
        }
    }

    /// Connection string and database name, when both are configured.
    pub fn store_settings(&self) -> Option<(&str, &str)> {
        Some((self.database_url.as_deref()?, self.database_name.as_deref()?))
    }

    pub fn env_flags(&self) -> StoreEnvFlags {
        StoreEnvFlags {
            database_url_set: self.database_url.is_some(),
            database_name_set: self.database_name.is_some(),
        }
    }
}

/// Which store settings were present at startup, reported by `GET /test`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreEnvFlags {
    pub database_url_set: bool,
    pub database_name_set: bool,
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

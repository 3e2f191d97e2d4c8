//! Application configuration loaded from environment variables.

use std::env;

use blogzone_infra::JwtConfig;
use blogzone_infra::database::DatabaseConfig;

/// Origins allowed to call the API with credentials.
pub const DEFAULT_CORS_ORIGINS: [&str; 3] = [
    "http://localhost:5173",
    "https://blog-zone-8a6a4.web.app",
    "https://blog-zone-8a6a4.firebaseapp.com",
];

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    pub cors_origins: Vec<String>,
    pub jwt: JwtConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = Self::database_url().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            database,
            cors_origins: parse_origins(env::var("CORS_ORIGINS").ok().as_deref()),
            jwt: JwtConfig::from_env(),
        }
    }

    /// `DATABASE_URL` wins; otherwise `DB_user`/`DB_pass` against the fixed host.
    fn database_url() -> Option<String> {
        if let Ok(url) = env::var("DATABASE_URL") {
            return Some(url);
        }

        match (env::var("DB_user"), env::var("DB_pass")) {
            (Ok(user), Ok(pass)) => Some(DatabaseConfig::from_credentials(&user, &pass)),
            _ => None,
        }
    }
}

/// Parse a comma-separated origin list, falling back to the defaults.
fn parse_origins(raw: Option<&str>) -> Vec<String> {
    let parsed: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect();

    if parsed.is_empty() {
        DEFAULT_CORS_ORIGINS.iter().map(|o| o.to_string()).collect()
    } else {
        parsed
    }
}

use railops_core::identity::DEFAULT_FALLBACK_USER_ID;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT verification settings.
    pub jwt: JwtConfig,
    /// Identity used for sessions whose token has no `sub` claim.
    /// `None` rejects such sessions with 401.
    pub fallback_user_id: Option<String>,
    /// Load demo alerts, activities, and metric samples at startup.
    pub seed_demo_data: bool,
    /// Build identifier reported by `/api/dashboard/version`.
    pub build_id: String,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `FALLBACK_USER_ID`     | `1` (empty disables)       |
    /// | `SEED_DEMO_DATA`       | `true`                     |
    /// | `BUILD_ID`             | crate version              |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let fallback_user_id = parse_fallback_user_id(std::env::var("FALLBACK_USER_ID").ok());
        if let Some(fallback) = &fallback_user_id {
            tracing::warn!(
                fallback_user_id = %fallback,
                "Sessions without a user id will act as the fallback identity"
            );
        }

        let seed_demo_data = std::env::var("SEED_DEMO_DATA")
            .map(|v| parse_bool(&v).expect("SEED_DEMO_DATA must be true/false"))
            .unwrap_or(true);

        let build_id =
            std::env::var("BUILD_ID").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            fallback_user_id,
            seed_demo_data,
            build_id,
        }
    }
}

/// Unset means the default fallback; an empty value disables it.
fn parse_fallback_user_id(raw: Option<String>) -> Option<String> {
    match raw {
        None => Some(DEFAULT_FALLBACK_USER_ID.to_string()),
        Some(v) if v.trim().is_empty() => None,
        Some(v) => Some(v.trim().to_string()),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
impl ServerConfig {
    /// Minimal config for handler and extractor unit tests.
    pub(crate) fn for_tests(fallback_user_id: Option<&str>) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            cors_origins: vec![],
            request_timeout_secs: 30,
            jwt: JwtConfig {
                secret: "unit-test-secret".to_string(),
                access_token_expiry_mins: 15,
            },
            fallback_user_id: fallback_user_id.map(str::to_string),
            seed_demo_data: false,
            build_id: "test".to_string(),
        }
    }
}

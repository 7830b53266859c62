use axum::http::HeaderValue;
use holonet_core::favorites::FavoritePolicy;

use crate::auth::gate::GateCredentials;
use crate::auth::jwt::JwtConfig;

/// SQLite file used when `DATABASE_URL` is unset.
pub const DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/holonet.db";

/// A configuration value that could not be used.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}': {reason}")]
    InvalidVar {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("unsupported DATABASE_URL '{0}': expected a sqlite: or postgres:// URL")]
    UnsupportedDatabase(String),
}

/// Which origins the CORS layer accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum CorsOrigins {
    /// `*`: any origin, without credentials.
    Any,
    /// An explicit allow-list; credentials are allowed.
    List(Vec<HeaderValue>),
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Database URL (default: [`DEFAULT_DATABASE_URL`]). Its scheme picks
    /// the backend; `postgres://` is normalized to `postgresql://`.
    pub database_url: String,
    pub cors_origins: CorsOrigins,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// The single credential pair accepted by `POST /auth/login`.
    pub gate: GateCredentials,
    /// Cascade and ownership switches for favorites.
    pub favorites: FavoritePolicy,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                     | Default                    |
    /// |-----------------------------|----------------------------|
    /// | `HOST`                      | `0.0.0.0`                  |
    /// | `PORT`                      | `3000`                     |
    /// | `DATABASE_URL`              | `sqlite:///tmp/holonet.db` |
    /// | `CORS_ORIGINS`              | `*`                        |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`                       |
    /// | `JWT_SECRET`                | development secret         |
    /// | `JWT_ACCESS_EXPIRY_MINS`    | `15`                       |
    /// | `AUTH_USERNAME`             | `usuario`                  |
    /// | `AUTH_PASSWORD`             | `contraseña`               |
    /// | `FAVORITES_CASCADE_DELETE`  | `false`                    |
    /// | `FAVORITES_CHECK_OWNERSHIP` | `false`                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_var(&lookup, "PORT", 3000u16)?;

        let database_url = lookup("DATABASE_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .map(|url| holonet_db::normalize_database_url(&url))
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        if holonet_db::Backend::from_url(&database_url).is_none() {
            return Err(ConfigError::UnsupportedDatabase(database_url));
        }

        let cors_origins = parse_cors_origins(lookup("CORS_ORIGINS"))?;
        let request_timeout_secs = parse_var(&lookup, "REQUEST_TIMEOUT_SECS", 30u64)?;

        let jwt = JwtConfig::from_lookup(&lookup)?;
        let gate = GateCredentials::from_lookup(&lookup);

        let favorites = FavoritePolicy {
            cascade_delete: parse_bool(&lookup, "FAVORITES_CASCADE_DELETE")?,
            check_ownership: parse_bool(&lookup, "FAVORITES_CHECK_OWNERSHIP")?,
        };

        Ok(Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            jwt,
            gate,
            favorites,
        })
    }
}

/// Parse an optional variable with `FromStr`, falling back to `default`.
pub(crate) fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::InvalidVar {
            name,
            reason: e.to_string(),
            value,
        }),
    }
}

fn parse_bool(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<bool, ConfigError> {
    let Some(value) = lookup(name) else {
        return Ok(false);
    };
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidVar {
            name,
            value,
            reason: "expected true or false".into(),
        }),
    }
}

fn parse_cors_origins(raw: Option<String>) -> Result<CorsOrigins, ConfigError> {
    let raw = raw.unwrap_or_else(|| "*".into());
    if raw.trim() == "*" {
        return Ok(CorsOrigins::Any);
    }

    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidVar {
                name: "CORS_ORIGINS",
                value: origin.to_string(),
                reason: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(CorsOrigins::List)
}

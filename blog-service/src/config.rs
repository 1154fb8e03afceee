/// Configuration management for the blog service.
///
/// All settings come from environment variables with development defaults;
/// production refuses to start without an explicit JWT secret.
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

/// Main application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Authentication configuration
    pub auth: AuthConfig,
    /// Post listing configuration
    pub posts: PostsConfig,
}

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// CORS configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

/// Database configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
}

/// Authentication configuration. Token issuance is external; this service
/// only validates bearer tokens and knows where to send anonymous callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// HS256 secret used to validate bearer tokens
    pub jwt_secret: String,
    /// Login page an unauthenticated mutation is redirected to
    pub login_url: String,
}

/// Post listing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsConfig {
    /// Number of posts per listing page
    pub page_size: i64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let production = app_env.eq_ignore_ascii_case("production");

        let jwt_secret = match std::env::var("JWT_SECRET") {
            Ok(value) if !value.trim().is_empty() => value,
            _ if production => bail!("JWT_SECRET must be set in production"),
            _ => "insecure-dev-secret".to_string(),
        };

        let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
            Ok(value) => value,
            Err(_) if production => bail!("CORS_ALLOWED_ORIGINS must be set in production"),
            Err(_) => "http://localhost:3000".to_string(),
        };
        if production && allowed_origins.trim() == "*" {
            bail!("CORS_ALLOWED_ORIGINS cannot be '*' in production");
        }

        let page_size: i64 = match std::env::var("POSTS_PAGE_SIZE") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("failed to parse POSTS_PAGE_SIZE='{value}'"))?,
            Err(_) => 10,
        };
        if page_size < 1 {
            bail!("POSTS_PAGE_SIZE must be at least 1");
        }

        Ok(Config {
            app: AppConfig {
                env: app_env,
                host: std::env::var("BLOG_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: std::env::var("BLOG_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
            },
            cors: CorsConfig { allowed_origins },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgresql://localhost/blog".to_string()),
                max_connections: std::env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(10),
            },
            auth: AuthConfig {
                jwt_secret,
                login_url: std::env::var("LOGIN_URL").unwrap_or_else(|_| "/auth/login".to_string()),
            },
            posts: PostsConfig { page_size },
        })
    }
}

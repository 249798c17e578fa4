use once_cell::sync::Lazy;
use std::env;

/// Application configuration, sourced from the environment once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub security: SecurityConfig,
}

/// Connection parameters for the subject store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct SecurityConfig {
    pub secret_key: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig {
                host: env_or("DB_HOST", "localhost"),
                port: env_or("DB_PORT", "5432").parse().unwrap_or(5432),
                user: env_or("DB_USER", "postgres"),
                password: env_or("DB_PASSWORD", "pgpassword"),
                name: env_or("DB_NAME", "generate"),
            },
            security: SecurityConfig {
                secret_key: env_or("SECRET_KEY", "secretkey"),
            },
        }
    }
}

impl DatabaseConfig {
    /// Connection URL in the form sqlx expects. sslmode=disable matches the
    /// deployment this service targets.
    pub fn connection_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}:{}/{}?sslmode=disable",
            self.user, self.password, self.host, self.port, self.name
        )
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

// Global singleton config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}

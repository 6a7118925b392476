use std::net::{IpAddr, SocketAddr};

use crate::error::ConfigError;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8081;
const DEFAULT_DB_PATH: &str = "sqlite:data/portfolio.db";
const DEFAULT_SITE_URL: &str = "http://localhost:8081";
const DEFAULT_SITE_NAME: &str = "Holistic Future";
const DEFAULT_ADMIN_SECRET: &str = "admin";

/// Site configuration loaded from environment variables.
///
/// | Env Var        | Default                    |
/// |----------------|----------------------------|
/// | `HOST`         | `0.0.0.0`                  |
/// | `PORT`         | `8081`                     |
/// | `DATABASE_URL` | `sqlite:data/portfolio.db` |
/// | `SITE_URL`     | `http://localhost:8081`    |
/// | `SITE_NAME`    | `Holistic Future`          |
/// | `ADMIN_SECRET` | `admin`                    |
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub host: IpAddr,
    pub port: u16,
    pub database_url: String,
    /// Absolute origin used for canonical and Open Graph URLs, without a trailing slash.
    pub site_url: String,
    pub site_name: String,
    pub admin_secret: String,
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host_raw = env_or("HOST", DEFAULT_HOST);
        let host = host_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "HOST",
            expected: "IP address",
            value: host_raw.clone(),
        })?;

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                expected: "port number",
                value: raw.clone(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            host,
            port,
            database_url: env_or("DATABASE_URL", DEFAULT_DB_PATH),
            site_url: env_or("SITE_URL", DEFAULT_SITE_URL)
                .trim_end_matches('/')
                .to_string(),
            site_name: env_or("SITE_NAME", DEFAULT_SITE_NAME),
            admin_secret: env_or("ADMIN_SECRET", DEFAULT_ADMIN_SECRET),
        })
    }

    pub fn server_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            database_url: DEFAULT_DB_PATH.to_string(),
            site_url: DEFAULT_SITE_URL.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            admin_secret: DEFAULT_ADMIN_SECRET.to_string(),
        }
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

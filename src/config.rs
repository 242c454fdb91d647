use anyhow::{Context, Result};
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct CatsConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub frontend_path: PathBuf,
    pub host: IpAddr,
    pub port: u16,
}

impl CatsConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    // every setting has a default, only malformed values are an error
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| "sqlite://cats.db".to_string());

        let max_connections = match lookup("MAX_CONNECTIONS") {
            Some(val) => val
                .parse::<u32>()
                .with_context(|| format!("MAX_CONNECTIONS must be a positive integer, got {val:?}"))?,
            None => 10,
        };

        let frontend_path =
            PathBuf::from(lookup("FRONTEND_PATH").unwrap_or_else(|| "./public".to_string()));

        let host = lookup("HOST")
            .unwrap_or_else(|| "0.0.0.0".to_string())
            .parse::<IpAddr>()
            .context("HOST must be an IP address")?;

        let port = match lookup("PORT") {
            Some(val) => val
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got {val:?}"))?,
            None => 3000,
        };

        Ok(Self {
            database_url,
            max_connections,
            frontend_path,
            host,
            port,
        })
    }
}

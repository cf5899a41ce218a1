use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub database: Database,
    #[serde(default)]
    pub web: Web,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Database {
    #[serde(default = "default_database_url")]
    pub url: String,
    #[serde(default = "default_pool_size")]
    pub pool_size: u32,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            pool_size: default_pool_size(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Web {
    #[serde(default = "default_address")]
    pub address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub enable_cors: bool,
    #[serde(default = "default_instance_name")]
    pub instance_name: String,
}

impl Default for Web {
    fn default() -> Self {
        Self {
            address: default_address(),
            port: default_port(),
            enable_cors: false,
            instance_name: default_instance_name(),
        }
    }
}

fn default_database_url() -> String {
    "askforge.sqlite".to_string()
}

fn default_pool_size() -> u32 {
    8
}

fn default_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_instance_name() -> String {
    "askforge".to_string()
}

pub fn load(path: &Path) -> Result<Config> {
    if !path.exists() {
        log::info!(
            "No configuration file found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Unable to read configuration file {}", path.display()))?;
    toml::from_str(&contents)
        .with_context(|| format!("Unable to parse configuration file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_config() {
        let cfg: Config = toml::from_str("").unwrap();
        assert_eq!(cfg.database.url, "askforge.sqlite");
        assert_eq!(cfg.database.pool_size, 8);
        assert_eq!(cfg.web.port, 8000);
        assert!(!cfg.web.enable_cors);
    }

    #[test]
    fn parse_partial_config() {
        let cfg: Config = toml::from_str(
            r#"
            [database]
            url = "/var/lib/askforge/db.sqlite"

            [web]
            port = 6767
            enable_cors = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.database.url, "/var/lib/askforge/db.sqlite");
        assert_eq!(cfg.database.pool_size, 8);
        assert_eq!(cfg.web.port, 6767);
        assert!(cfg.web.enable_cors);
    }

    #[test]
    fn reject_unknown_fields() {
        assert!(toml::from_str::<Config>("[databse]\nurl = \"x\"").is_err());
    }
}

// src/config.rs
use crate::cli::Cli;
use crate::connection::build_uri;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 27017;
pub const DEFAULT_DATABASE: &str = "test";
pub const DEFAULT_COLLECTION: &str = "trainers";

const REDACTED: &str = "***";

/// Connection and target settings, fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    pub collection: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            username: String::new(),
            password: String::new(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileConfig {
    net: NetSection,
    db: DbSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct NetSection {
    host: Option<String>,
    port: Option<u16>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DbSection {
    username: Option<String>,
    password: Option<String>,
    name: Option<String>,
    collection: Option<String>,
}

impl Config {
    /// Defaults, then the config file named by `--config`, then the flags.
    pub fn load(cli: &Cli) -> Result<Self> {
        let base = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(base.with_overrides(cli))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_yaml(&text)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_yaml(text: &str) -> Result<Self> {
        let file: FileConfig = serde_yaml::from_str(text)?;
        if file.net.port == Some(0) {
            bail!("net.port must be between 1 and 65535");
        }

        let defaults = Self::default();
        Ok(Self {
            host: file.net.host.unwrap_or(defaults.host),
            port: file.net.port.unwrap_or(defaults.port),
            username: file.db.username.unwrap_or(defaults.username),
            password: file.db.password.unwrap_or(defaults.password),
            database: file.db.name.unwrap_or(defaults.database),
            collection: file.db.collection.unwrap_or(defaults.collection),
        })
    }

    pub fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(host) = &cli.host {
            self.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(username) = &cli.username {
            self.username = username.clone();
        }
        if let Some(password) = &cli.password {
            self.password = password.clone();
        }
        if let Some(database) = &cli.database {
            self.database = database.clone();
        }
        if let Some(collection) = &cli.collection {
            self.collection = collection.clone();
        }
        self
    }

    pub fn uri(&self) -> String {
        build_uri(&self.host, &self.username, &self.password, self.port)
    }

    /// Same shape as [`Config::uri`] with any password masked, for logs and errors.
    pub fn redacted_uri(&self) -> String {
        let password = if self.password.is_empty() { "" } else { REDACTED };
        build_uri(&self.host, &self.username, password, self.port)
    }
}

use anyhow::Result;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::time::Duration;

const CONFIG_FILE: &str = "config/default.toml";
const ENV_PREFIX: &str = "INVENTORY__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub load: LoadConfig,
    pub fault: FaultConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Runtime worker threads. `1` serializes every request behind a burn.
    #[serde(default)]
    pub worker_threads: Option<usize>,
    #[serde(default)]
    pub enable_cors: bool,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            worker_threads: None,
            enable_cors: false,
            request_timeout_secs: None,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoadConfig {
    #[serde(default)]
    pub max_burn_ms: Option<u64>,
}

impl LoadConfig {
    pub fn max_burn(&self) -> Option<Duration> {
        self.max_burn_ms.map(Duration::from_millis)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FaultConfig {
    #[serde(default)]
    pub fail_even_ids: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        let figment = Self::figment()
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        Ok(figment.extract()?)
    }

    /// Built-in defaults, before any file or environment overrides.
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
    }
}

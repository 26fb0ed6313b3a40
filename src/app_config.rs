use config::{Config, ConfigError, Environment};
use serde::{Deserialize, Deserializer};
use std::str::FromStr;
use tracing::Level;

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    log: Log,
    #[serde(default)]
    demos: Demos,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    pub fn log(&self) -> &Log {
        &self.log
    }

    pub fn demos(&self) -> &Demos {
        &self.demos
    }
}

// `HOMEHUB__DEMOS__ENABLED=adapter,weather` selects demos without a config file
fn environment() -> Environment {
    Environment::with_prefix("HOMEHUB")
        .separator("__")
        .list_separator(",")
        .with_list_parse_key("demos.enabled")
        .try_parsing(true)
}

#[derive(Debug, Deserialize)]
pub struct Log {
    #[serde(default = "default_level", deserialize_with = "deserialize_level")]
    level: Level,
}

impl Log {
    pub fn level(&self) -> Level {
        self.level
    }
}

impl Default for Log {
    fn default() -> Self {
        Log { level: default_level() }
    }
}

fn default_level() -> Level {
    Level::INFO
}

fn deserialize_level<'de, D>(deserializer: D) -> Result<Level, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Level::from_str(&value).map_err(|_| serde::de::Error::custom(format!("invalid log level: {}", value)))
}

#[derive(Debug, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Demo {
    SmartHome,
    Adapter,
    Decorator,
    Weather,
    Singleton,
}

impl Demo {
    pub fn all() -> [Demo; 5] {
        [Demo::SmartHome, Demo::Adapter, Demo::Decorator, Demo::Weather, Demo::Singleton]
    }
}

#[derive(Debug, Deserialize)]
pub struct Demos {
    enabled: Vec<Demo>,
}

impl Demos {
    pub fn enabled(&self) -> &[Demo] {
        &self.enabled
    }
}

impl Default for Demos {
    fn default() -> Self {
        Demos { enabled: Demo::all().to_vec() }
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder { config: AppConfig::default() }
    }

    pub fn log_level(mut self, level: Level) -> Self {
        self.config.log.level = level;
        self
    }

    pub fn demos(mut self, demos: Vec<Demo>) -> Self {
        self.config.demos.enabled = demos;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

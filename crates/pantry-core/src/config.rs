//! Configuration loader for the recommender.
//!
//! Uses Figment to merge `config.toml` + `config.<env>.toml` + `APP_*` env vars.
//! Recommender settings live under the `recommender` table and fall back to
//! defaults for any key left unset.
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

use crate::error::{Error, Result};

pub struct Config {
    figment: Figment,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "dev".to_string());

        let mut figment = Figment::new().merge(Toml::file("config.toml"));
        match env_name.as_str() {
            "dev" | "development" => figment = figment.merge(Toml::file("config.dev.toml")),
            "prod" | "production" => figment = figment.merge(Toml::file("config.prod.toml")),
            "test" | "testing" => figment = figment.merge(Toml::file("config.test.toml")),
            _ => {}
        }
        figment = figment.merge(Env::prefixed("APP_").split("__"));

        let config = Self { figment };
        config.recommender()?;
        Ok(config)
    }

    pub fn from_figment(figment: Figment) -> Self {
        Self { figment }
    }

    pub fn get<T>(&self, key: &str) -> anyhow::Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        self.figment
            .extract_inner(key)
            .map_err(|e| anyhow::anyhow!("Failed to get '{}': {}", key, e))
    }

    /// Settings under `recommender`, defaults filled in, validated.
    pub fn recommender(&self) -> Result<RecommenderSettings> {
        let settings = match self.figment.find_value("recommender") {
            Ok(value) => value
                .deserialize::<RecommenderSettings>()
                .map_err(|e| Error::InvalidConfig(format!("recommender: {}", e)))?,
            Err(_) => RecommenderSettings::default(),
        };
        settings.validate()?;
        Ok(settings)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderSettings {
    /// Result count used when a request does not name one.
    pub default_count: usize,
    /// Placeholder identity sent to the rating predictor on every request.
    pub user_identity: String,
    /// Upper bound on one predictor call. `None` waits indefinitely.
    pub predictor_timeout_ms: Option<u64>,
    /// Predictor worker threads alive at once when a timeout is set.
    pub predictor_max_in_flight: usize,
}

impl Default for RecommenderSettings {
    fn default() -> Self {
        Self { default_count: 5, user_identity: "user".to_string(), predictor_timeout_ms: None, predictor_max_in_flight: 4 }
    }
}

impl RecommenderSettings {
    pub fn validate(&self) -> Result<()> {
        if self.default_count == 0 {
            return Err(Error::InvalidConfig("recommender.default_count must be at least 1".into()));
        }
        if self.predictor_max_in_flight == 0 {
            return Err(Error::InvalidConfig("recommender.predictor_max_in_flight must be at least 1".into()));
        }
        if self.user_identity.trim().is_empty() {
            return Err(Error::InvalidConfig("recommender.user_identity must not be empty".into()));
        }
        Ok(())
    }

    pub fn predictor_timeout(&self) -> Option<Duration> {
        self.predictor_timeout_ms.map(Duration::from_millis)
    }
}

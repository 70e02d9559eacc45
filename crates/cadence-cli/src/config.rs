use chrono::NaiveDate;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::Deserialize;

use cadence_core::recurrence::MAX_REPEAT_COUNT;

pub const CONFIG_FILE: &str = "cadence.toml";

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    /// Cap on generated occurrences, anchor included
    #[serde(default = "default_max_count")]
    pub max_count: usize,
    /// Latest end date the pre-flight check accepts
    #[serde(default = "default_max_end_date")]
    pub max_end_date: NaiveDate,
    /// Log filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_max_count() -> usize {
    MAX_REPEAT_COUNT
}

fn default_max_end_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or(NaiveDate::MAX)
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_count: default_max_count(),
            max_end_date: default_max_end_date(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file(CONFIG_FILE))
                .merge(Env::prefixed("CADENCE_")),
        )
    }

    fn from_figment(figment: Figment) -> Result<Self, figment::Error> {
        figment.extract()
    }
}

use std::{path::Path, time::Duration};

use anyhow::Context;
use client_core::{
    api::{DEFAULT_ORDERS_URL, DEFAULT_ORDER_STATUS_URL},
    ApiEndpoints,
};
use ::config::{Config, Environment, File};
use serde::Deserialize;

/// Looked up in the working directory as `order_desk.toml` (or any format `config` knows).
pub const DEFAULT_CONFIG_NAME: &str = "order_desk";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub orders_url: String,
    pub order_status_url: String,
    pub request_timeout_secs: u64,
    pub banner_dismiss_ms: u64,
    pub progress_stage_ms: u64,
    pub poll_secs: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            orders_url: DEFAULT_ORDERS_URL.into(),
            order_status_url: DEFAULT_ORDER_STATUS_URL.into(),
            request_timeout_secs: 10,
            banner_dismiss_ms: 3_000,
            progress_stage_ms: 2_000,
            poll_secs: None,
        }
    }
}

impl Settings {
    pub fn endpoints(&self) -> anyhow::Result<ApiEndpoints> {
        ApiEndpoints::parse(
            &self.orders_url,
            &self.order_status_url,
            Duration::from_secs(self.request_timeout_secs),
        )
        .context("invalid service endpoint in settings")
    }

    pub fn banner_dismiss(&self) -> Duration {
        Duration::from_millis(self.banner_dismiss_ms)
    }

    pub fn progress_stage(&self) -> Duration {
        Duration::from_millis(self.progress_stage_ms)
    }
}

/// Defaults, then the config file, then `APP__*` environment variables.
///
/// An explicit `path` must exist; the default file is optional.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
    };

    Config::builder()
        .add_source(file)
        .add_source(Environment::with_prefix("APP").separator("__"))
        .build()
        .with_context(|| match path {
            Some(path) => format!("failed to read settings from '{}'", path.display()),
            None => "failed to read settings".to_string(),
        })?
        .try_deserialize()
        .context("invalid order desk settings")
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;

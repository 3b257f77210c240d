//! Server Configuration

use std::path::PathBuf;

use mab_core::site::DEFAULT_SITE_URL;
use mab_leads::config::non_blank;
use mab_leads::{MailConfig, Result, Webform3Config};

/// Everything the server reads from the environment
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address, `BIND_ADDR`
    pub bind_addr: String,

    /// Compiled web frontend, `STATIC_DIR`
    pub static_dir: PathBuf,

    /// Public site URL, `APP_URL`
    pub site_url: String,

    /// GA4 measurement ID, `GA_MEASUREMENT_ID`. Analytics are a no-op without it.
    pub ga_measurement_id: Option<String>,

    pub leads: Webform3Config,
    pub mail: MailConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            bind_addr: non_blank(&lookup, "BIND_ADDR").unwrap_or_else(|| "0.0.0.0:3000".into()),
            static_dir: non_blank(&lookup, "STATIC_DIR").map_or_else(|| PathBuf::from("static"), PathBuf::from),
            site_url: non_blank(&lookup, "APP_URL").unwrap_or_else(|| DEFAULT_SITE_URL.into()),
            ga_measurement_id: non_blank(&lookup, "GA_MEASUREMENT_ID"),
            leads: Webform3Config::from_lookup(&lookup)?,
            mail: MailConfig::from_lookup(&lookup)?,
        })
    }
}

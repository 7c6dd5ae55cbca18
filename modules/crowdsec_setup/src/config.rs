//! Configuration for the setup module

use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable prefix for overrides
pub const ENV_PREFIX: &str = "CROWDSEC_SETUP_";

/// Setup module configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Splunk app identifier
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// Realm of the API key secret
    #[serde(default = "default_secret_realm")]
    pub secret_realm: String,

    /// Name of the API key secret
    #[serde(default = "default_secret_name")]
    pub secret_name: String,

    /// Configuration file holding the settings stanza
    #[serde(default = "default_conf_file")]
    pub conf_file: String,

    /// Settings stanza name
    #[serde(default = "default_stanza")]
    pub stanza: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: default_app_name(),
            secret_realm: default_secret_realm(),
            secret_name: default_secret_name(),
            conf_file: default_conf_file(),
            stanza: default_stanza(),
        }
    }
}

impl Config {
    /// Layer defaults, an optional YAML file and `CROWDSEC_SETUP_*` variables
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::from(Serialized::defaults(Config::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        let config = figment.merge(Env::prefixed(ENV_PREFIX)).extract()?;
        Ok(config)
    }
}

fn default_app_name() -> String {
    "crowdsec-splunk-app".to_string()
}

fn default_secret_realm() -> String {
    "crowdsec-splunk-app_realm".to_string()
}

fn default_secret_name() -> String {
    "api_key".to_string()
}

fn default_conf_file() -> String {
    "crowdsec_settings".to_string()
}

fn default_stanza() -> String {
    "settings".to_string()
}

use flyover_core::Endpoints;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_ip_echo_url")]
    pub ip_echo_url: String,

    #[serde(default = "default_geo_url")]
    pub geo_url: String,

    #[serde(default = "default_pass_url")]
    pub pass_url: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_ip_echo_url() -> String {
    Endpoints::default().ip_echo
}

fn default_geo_url() -> String {
    Endpoints::default().geo
}

fn default_pass_url() -> String {
    Endpoints::default().passes
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            ip_echo_url: default_ip_echo_url(),
            geo_url: default_geo_url(),
            pass_url: default_pass_url(),
        }
    }
}

impl CliConfig {
    pub fn from_file(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CliConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Read the config file if it exists, otherwise fall back to the
    /// built-in defaults.
    pub fn load_or_default(path: &str) -> anyhow::Result<Self> {
        if std::path::Path::new(path).exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn endpoints(&self) -> Endpoints {
        Endpoints {
            ip_echo: self.ip_echo_url.clone(),
            geo: self.geo_url.clone(),
            passes: self.pass_url.clone(),
        }
    }
}

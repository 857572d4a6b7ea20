//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::DEFAULT_PAGE_SIZE;

#[derive(Clone, Debug, Deserialize)]
/// Settings shared by every console view.
pub struct ConsoleConfig {
    /// Base address of the REST backend, e.g. `http://localhost:8080`.
    pub backend_url: String,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_request_timeout_secs() -> u64 {
    10
}

impl ConsoleConfig {
    /// Loads configuration from an optional YAML file, then applies
    /// `CONSOLE_`-prefixed environment variable overrides.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path));
        }
        builder
            .add_source(config::Environment::with_prefix("CONSOLE"))
            .build()?
            .try_deserialize()
    }
}

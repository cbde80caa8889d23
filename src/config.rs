use config::{Config, ConfigError};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub output_dir: String,
    pub request_timeout_secs: u64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let builder = Config::builder()
            .set_default("output_dir", "data")?
            .set_default("request_timeout_secs", 30i64)?
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("APP"));

        let config = builder.build()?;
        config.try_deserialize()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: "data".to_string(),
            request_timeout_secs: 30,
        }
    }
}

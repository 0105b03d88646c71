//! Runtime settings, loaded from `LINKSCOUT_`-prefixed environment variables.
//!
//! Only the API key is mandatory; everything else defaults to the layout a
//! checkout of this repo expects (`data/` under the working directory).
//! Batch size is deliberately not configurable at runtime — it is a
//! compile-time constant in `linkscout_enrich::batch`.

use config::{Config, ConfigError, Environment};
use linkscout_browser::api::DEFAULT_API_BASE;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    /// Bearer token for the browser-automation service. Required.
    pub api_key: String,
    /// Service base URL; override for self-hosted or mock endpoints.
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Input CSV (`email,first_name,last_name` with a header row).
    #[serde(default = "default_input_path")]
    pub input_path: String,
    /// Output CSV; truncated on every run.
    #[serde(default = "default_output_path")]
    pub output_path: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_input_path() -> String {
    "data/profiles.csv".to_string()
}

fn default_output_path() -> String {
    "data/enriched_profiles.csv".to_string()
}

impl Settings {
    /// Load settings from the environment (`LINKSCOUT_API_KEY` etc).
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(Environment::with_prefix("LINKSCOUT"))
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn loads_key_and_defaults() {
        temp_env::with_var("LINKSCOUT_API_KEY", Some("sk-test"), || {
            let settings = Settings::load().expect("settings load");
            assert_eq!(settings.api_key, "sk-test");
            assert_eq!(settings.api_base, DEFAULT_API_BASE);
            assert_eq!(settings.input_path, "data/profiles.csv");
            assert_eq!(settings.output_path, "data/enriched_profiles.csv");
        });
    }

    #[test]
    #[serial]
    fn env_overrides_paths() {
        temp_env::with_vars(
            [
                ("LINKSCOUT_API_KEY", Some("sk-test")),
                ("LINKSCOUT_INPUT_PATH", Some("in.csv")),
                ("LINKSCOUT_OUTPUT_PATH", Some("out.csv")),
                ("LINKSCOUT_API_BASE", Some("http://localhost:9000/v1/")),
            ],
            || {
                let settings = Settings::load().expect("settings load");
                assert_eq!(settings.input_path, "in.csv");
                assert_eq!(settings.output_path, "out.csv");
                assert_eq!(settings.api_base, "http://localhost:9000/v1/");
            },
        );
    }

    #[test]
    #[serial]
    fn missing_api_key_is_fatal() {
        temp_env::with_var("LINKSCOUT_API_KEY", None::<&str>, || {
            assert!(Settings::load().is_err());
        });
    }
}

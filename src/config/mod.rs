pub mod toml_config;

pub use toml_config::{
    ClientConfig, ClientSection, LogFormat, LoggingSection, DEFAULT_REGION, ENDPOINT_PREFIX,
};

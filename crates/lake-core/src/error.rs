use thiserror::Error;

/// Problems found while reading or validating a configuration override.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("unknown config key `{0}`")]
    UnknownKey(String),

    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },

    #[error("`{key}` = {value} is out of range ({expected})")]
    OutOfRange {
        key: &'static str,
        value: f64,
        expected: &'static str,
    },
}

impl ConfigError {
    pub fn invalid(key: &str, value: &str) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}

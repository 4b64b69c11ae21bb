use thiserror::Error;

/// Errors raised while building or writing a BIND configuration set.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("invalid zone list: no 'zones' section")]
    NoZonesSection,

    #[error("invalid zone list: no zones found")]
    NoZonesFound,

    #[error("duplicate zone name: {0}")]
    DuplicateZone(String),

    #[error("unsupported TSIG algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("malformed TSIG key file: {0}")]
    MalformedKeyFile(String),

    #[error("zone list parse error: {0}")]
    Yaml(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Yaml(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;

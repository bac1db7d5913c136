use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrellisError {
    #[error("invalid group dimension '{0}' (expected Status, User or Priority)")]
    InvalidGroupDimension(String),

    #[error("invalid order dimension '{0}' (expected Priority or Title)")]
    InvalidOrderDimension(String),

    #[error("unknown config key '{0}' (expected api_url or timeout)")]
    InvalidConfigKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

impl TrellisError {
    pub fn invalid_group_dimension(value: String) -> Self {
        TrellisError::InvalidGroupDimension(value)
    }

    pub fn invalid_order_dimension(value: String) -> Self {
        TrellisError::InvalidOrderDimension(value)
    }
}

pub type Result<T> = std::result::Result<T, TrellisError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Empty method/operation name (operationId) not allowed: {raw:?}")]
    EmptyOperationId { raw: String },

    #[error("failed to build template context: {0}")]
    Context(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum OptionError {
    #[error("unknown generation option: {0}")]
    UnknownKey(String),

    #[error("invalid option assignment {0:?}, expected key=value")]
    MalformedPair(String),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// Dataset absent, or one of its collections missing, not a list, or empty.
    #[error("malformed input data: {0}")]
    MalformedData(String),
    /// A required policy function was not supplied.
    #[error("missing required policy function: {0}")]
    MissingPolicy(String),
    /// TOML parse / deserialization error.
    #[error("config parse error: {0}")]
    ConfigParse(String),
    /// Config value out of range.
    #[error("config validation error: {0}")]
    ConfigValidation(String),
    /// Dataset JSON could not be parsed.
    #[error("dataset parse error: {0}")]
    Parse(String),
    #[error("IO error: {0}")]
    Io(String),
}

impl ReportError {
    /// True for the two validation failures raised before any aggregation.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MalformedData(_) | Self::MissingPolicy(_))
    }
}

use serde::Deserialize;

/// Errors raised while loading named objects or reading input at the
/// boundary of the crate. The holiday arithmetic itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum ManagerError {
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    #[error(transparent)]
    JsonParseError(#[from] serde_json::Error),

    #[error("key '{0}' not found")]
    NameNotFoundError(String),

    #[error("invalid date '{input}' (expected YYYY-MM-DD): {source}")]
    DateParseError {
        input: String,
        source: chrono::ParseError
    }
}

impl ManagerError {
    pub fn map_elem_not_found(name: &str) -> ManagerError {
        ManagerError::NameNotFoundError(name.to_owned())
    }
}

pub fn parse_json_value<T>(json_value: serde_json::Value) -> Result<T, ManagerError>
    where T: for<'a> Deserialize<'a> {
    serde_json::from_value(json_value).map_err(ManagerError::JsonParseError)
}

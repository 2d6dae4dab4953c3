use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("Malformed resource: {0}")]
    MalformedResource(String),

    #[error("Invalid query name: {0}")]
    InvalidQueryName(String),
}

impl ResourceError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        ResourceError::MalformedResource(reason.into())
    }
}

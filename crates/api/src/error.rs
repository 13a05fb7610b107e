#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid label: {0}")]
    InvalidLabel(String),
    #[error("Unknown kind: {0}")]
    UnknownKind(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

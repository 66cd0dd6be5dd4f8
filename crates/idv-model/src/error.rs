use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unsupported validation kind: {0}")]
    UnsupportedKind(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

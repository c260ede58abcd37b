use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid synonym flag '{0}' (expected TRUE or FALSE)")]
    InvalidSynonymFlag(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

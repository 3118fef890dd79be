use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown sheet name: {name}")]
    UnknownSheet { name: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;

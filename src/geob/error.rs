use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeobError {
    #[error("Payload is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}

pub type GeobResult<T> = Result<T, GeobError>;

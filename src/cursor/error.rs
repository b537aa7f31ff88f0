use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CursorError {
    #[error("Unexpected end of buffer at position {position}: needed {needed} bytes, {available} available")]
    UnexpectedEnd {
        position: usize,
        needed: usize,
        available: usize,
    },
}

pub type CursorResult<T> = Result<T, CursorError>;

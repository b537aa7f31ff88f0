use std::result;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CueConvertoError {
    #[error("{failed} of {total} files failed")]
    BatchFailed { failed: usize, total: usize },
}

pub type CueConvertoResult<T> = result::Result<T, CueConvertoError>;

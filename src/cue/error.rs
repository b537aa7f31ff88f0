use crate::cue::models::CueFormatVersion;
use crate::cursor::error::CursorError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CueError {
    #[error(transparent)]
    Cursor(#[from] CursorError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("Unsupported cue data version: {0}")]
    UnsupportedVersion(u8),

    #[error("Cue {index} has a name that is not valid UTF-16")]
    InvalidName { index: i32 },

    #[error("Cue {index} has a name of {length} code units, at most 65534 fit")]
    NameTooLong { index: i32, length: usize },

    #[error("Cue {index} uses the {found:?} layout in a {expected:?} cue set")]
    MixedVersions {
        index: i32,
        expected: CueFormatVersion,
        found: CueFormatVersion,
    },
}

pub type CueResult<T> = Result<T, CueError>;

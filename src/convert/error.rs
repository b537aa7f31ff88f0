use crate::cue::error::CueError;
use crate::geob::error::GeobError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    JoinError(#[from] tokio::task::JoinError),

    #[error(transparent)]
    CueError(#[from] CueError),

    #[error(transparent)]
    GeobError(#[from] GeobError),

    #[error("No MPEG Layer 3 frames found in the audio stream")]
    NoFramesFound,

    #[error("Cue \"{name}\" at {time}s lies before the first audio frame")]
    CueBeforeStreamStart { name: String, time: f64 },

    #[error("No {0} payload found, expected it in {1}")]
    MissingPayload(&'static str, PathBuf),

    #[error("Output file {0} already exists, use --force to overwrite")]
    OutputAlreadyExists(PathBuf),
}

pub type ConvertResult<T> = Result<T, ConvertError>;

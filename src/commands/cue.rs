use cue_converto::convert::ConvertOptions;
use clap::{Args, Parser};
use std::path::PathBuf;

/// Inputs and settings shared by every batch command
#[derive(Args, Debug, Clone)]
pub struct BatchArgs {
    /// Audio files; cue payloads are read from and written to `<AUDIO>.<GEOB description>`
    #[arg(value_name = "AUDIO", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Number of files processed concurrently, defaults to the number of CPUs
    #[arg(long, short = 'j', value_name = "JOBS")]
    pub jobs: Option<usize>,
}

impl BatchArgs {
    pub fn jobs(&self) -> usize {
        self.jobs.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        })
    }
}

/// Converts CuePoints JSON payloads to DJUCED_CUE_DATA binary payloads.
#[derive(Parser, Debug, Clone)]
pub struct EncodeCommand {
    #[command(flatten)]
    pub batch: BatchArgs,

    /// Payload sidecars are raw bytes instead of base64 text
    #[arg(long, default_value_t = false)]
    pub plain: bool,

    /// Force overwrite of existing DJUCED_CUE_DATA sidecars
    #[arg(long, short = 'f', default_value_t = false)]
    pub force: bool,
}

impl From<&EncodeCommand> for ConvertOptions {
    fn from(cmd: &EncodeCommand) -> Self {
        ConvertOptions {
            plain: cmd.plain,
            force: cmd.force,
        }
    }
}

/// Checks the byte offsets stored in DJUCED_CUE_DATA payloads against the audio stream.
#[derive(Parser, Debug, Clone)]
pub struct ReconcileCommand {
    #[command(flatten)]
    pub batch: BatchArgs,

    /// Payload sidecars are raw bytes instead of base64 text
    #[arg(long, default_value_t = false)]
    pub plain: bool,
}

/// Prints the decoded contents of all cue payloads next to each audio file.
#[derive(Parser, Debug, Clone)]
pub struct InspectCommand {
    #[command(flatten)]
    pub batch: BatchArgs,

    /// Payload sidecars are raw bytes instead of base64 text
    #[arg(long, default_value_t = false)]
    pub plain: bool,
}

/// Prints a summary of the MPEG frames found in each audio file.
#[derive(Parser, Debug, Clone)]
pub struct FramesCommand {
    #[command(flatten)]
    pub batch: BatchArgs,
}

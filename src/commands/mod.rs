use crate::commands::cue::{EncodeCommand, FramesCommand, InspectCommand, ReconcileCommand};
use clap::{Parser, Subcommand};

pub mod cue;

/// CLI for converting MP3 cue points between time-indexed JSON and offset-indexed binary cue data.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Encode(EncodeCommand),
    Reconcile(ReconcileCommand),
    Inspect(InspectCommand),
    Frames(FramesCommand),
}

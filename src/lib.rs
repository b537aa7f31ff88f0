//! Cue point conversion between time-indexed JSON cue sheets and
//! offset-indexed binary cue data for MP3 files.

pub mod convert;
pub mod cue;
pub mod cursor;
pub mod error;
pub mod geob;
pub mod mpeg;

pub mod binary;
pub mod error;
pub mod models;
pub mod sheet;

pub use binary::{decode_cue_data, encode_cue_data};
pub use models::{BinaryCue, CueExtras, CueFormatVersion, CueSet, LogicalCue};
pub use sheet::CueSheet;

use crate::cue::error::{CueError, CueResult};

/// Cues with an index at or above this belong to the secondary cue set.
pub const SECONDARY_CUE_INDEX_BASE: i32 = 1000;

/// Layout version of a binary cue blob, stored in its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum CueFormatVersion {
    /// index, time, offset, name
    V1 = 1,
    /// adds loop length
    V2 = 2,
    /// adds color
    V3 = 3,
}

impl TryFrom<u8> for CueFormatVersion {
    type Error = CueError;

    fn try_from(value: u8) -> CueResult<Self> {
        match value {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            3 => Ok(Self::V3),
            other => Err(CueError::UnsupportedVersion(other)),
        }
    }
}

/// Version-dependent record fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CueExtras {
    V1,
    V2 { loop_length: f32 },
    V3 { loop_length: f32, color: i32 },
}

impl CueExtras {
    pub fn version(&self) -> CueFormatVersion {
        match self {
            Self::V1 => CueFormatVersion::V1,
            Self::V2 { .. } => CueFormatVersion::V2,
            Self::V3 { .. } => CueFormatVersion::V3,
        }
    }

    pub fn loop_length(&self) -> Option<f32> {
        match self {
            Self::V1 => None,
            Self::V2 { loop_length } | Self::V3 { loop_length, .. } => Some(*loop_length),
        }
    }

    pub fn color(&self) -> Option<i32> {
        match self {
            Self::V3 { color, .. } => Some(*color),
            _ => None,
        }
    }
}

/// A time-indexed cue.
#[derive(Debug, Clone, PartialEq)]
pub struct LogicalCue {
    /// Seconds from the start of the audio.
    pub time: f64,
    pub name: String,
    pub index: Option<i32>,
}

/// An offset-indexed cue record.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryCue {
    pub index: i32,
    /// Seconds, carried for diagnostics only.
    pub time: f64,
    /// Byte offset of the frame the cue falls in.
    pub offset: u64,
    pub extras: CueExtras,
    pub name: String,
}

impl BinaryCue {
    pub fn is_secondary(&self) -> bool {
        self.index >= SECONDARY_CUE_INDEX_BASE
    }
}

/// Binary cue records sharing one layout version.
#[derive(Debug, Clone, PartialEq)]
pub struct CueSet {
    version: CueFormatVersion,
    cues: Vec<BinaryCue>,
}

impl CueSet {
    /// Fails if a cue's extras do not match `version`.
    pub fn new(version: CueFormatVersion, cues: Vec<BinaryCue>) -> CueResult<Self> {
        if let Some(cue) = cues.iter().find(|cue| cue.extras.version() != version) {
            return Err(CueError::MixedVersions {
                index: cue.index,
                expected: version,
                found: cue.extras.version(),
            });
        }

        Ok(Self { version, cues })
    }

    pub fn version(&self) -> CueFormatVersion {
        self.version
    }

    pub fn cues(&self) -> &[BinaryCue] {
        &self.cues
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn primary(&self) -> impl Iterator<Item = &BinaryCue> {
        self.cues.iter().filter(|cue| !cue.is_secondary())
    }

    pub fn secondary(&self) -> impl Iterator<Item = &BinaryCue> {
        self.cues.iter().filter(|cue| cue.is_secondary())
    }
}

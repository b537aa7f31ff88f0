use crate::convert::error::{ConvertError, ConvertResult};
use crate::cue::{BinaryCue, CueExtras, CueFormatVersion, CueSet, LogicalCue, encode_cue_data};
use crate::mpeg::FrameIndex;
use log::{debug, warn};

/// Resolves each logical cue to the frame it falls in. Records are numbered
/// from 1 in input order.
pub fn build_cue_set(index: &FrameIndex, cues: &[LogicalCue]) -> ConvertResult<CueSet> {
    if index.is_empty() {
        return Err(ConvertError::NoFramesFound);
    }

    let mut records = Vec::with_capacity(cues.len());
    for (position, cue) in cues.iter().enumerate() {
        let frame = index
            .locate(cue.time)
            .ok_or_else(|| ConvertError::CueBeforeStreamStart {
                name: cue.name.clone(),
                time: cue.time,
            })?;

        debug!(
            "Cue \"{}\" at {:.3}s -> frame at {:.3}s, offset {:#x}",
            cue.name, cue.time, frame.time, frame.offset
        );
        records.push(BinaryCue {
            index: position as i32 + 1,
            time: cue.time,
            offset: frame.offset,
            extras: CueExtras::V1,
            name: cue.name.clone(),
        });
    }

    Ok(CueSet::new(CueFormatVersion::V1, records)?)
}

/// [`build_cue_set`] followed by binary encoding.
pub fn encode_cues(index: &FrameIndex, cues: &[LogicalCue]) -> ConvertResult<Vec<u8>> {
    let set = build_cue_set(index, cues)?;
    Ok(encode_cue_data(&set)?)
}

/// Stored vs. recomputed position of one binary cue.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    pub index: i32,
    pub name: String,
    pub stored_time: f64,
    pub stored_offset: u64,
    /// Offset of the frame active at `stored_time`.
    pub located_offset: Option<u64>,
    /// Start time of the frame containing `stored_offset`.
    pub located_time: Option<f64>,
}

impl Reconciliation {
    pub fn is_consistent(&self) -> bool {
        self.located_offset == Some(self.stored_offset)
    }

    pub fn offset_delta(&self) -> Option<i64> {
        self.located_offset
            .map(|located| located as i64 - self.stored_offset as i64)
    }

    pub fn time_delta(&self) -> Option<f64> {
        self.located_time.map(|located| located - self.stored_time)
    }
}

/// Checks every stored offset against the frame index. Mismatches are logged,
/// never fatal.
pub fn reconcile(index: &FrameIndex, set: &CueSet) -> Vec<Reconciliation> {
    set.cues()
        .iter()
        .map(|cue| {
            let row = Reconciliation {
                index: cue.index,
                name: cue.name.clone(),
                stored_time: cue.time,
                stored_offset: cue.offset,
                located_offset: index.locate(cue.time).map(|frame| frame.offset),
                located_time: index.locate_offset(cue.offset).map(|frame| frame.time),
            };

            if !row.is_consistent() {
                warn!(
                    "Cue {} \"{}\" at {:.3}s stores offset {:#x}, frame index has {}",
                    row.index,
                    row.name,
                    row.stored_time,
                    row.stored_offset,
                    row.located_offset
                        .map_or_else(|| "no frame".to_string(), |o| format!("{o:#x}")),
                );
            }
            row
        })
        .collect()
}

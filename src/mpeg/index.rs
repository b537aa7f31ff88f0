use crate::mpeg::header::FrameHeader;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameEntry {
    /// Playback time at the start of the frame, in seconds.
    pub time: f64,
    /// Byte offset of the frame header in the scanned buffer.
    pub offset: u64,
    pub header: FrameHeader,
}

/// Ordered time/offset index of the Layer 3 frames of one stream.
///
/// Entries are non-decreasing in both time and offset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameIndex {
    entries: Vec<FrameEntry>,
    duration: f64,
}

impl FrameIndex {
    pub(crate) fn new(entries: Vec<FrameEntry>, duration: f64) -> Self {
        Self { entries, duration }
    }

    pub fn entries(&self) -> &[FrameEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first(&self) -> Option<&FrameEntry> {
        self.entries.first()
    }

    pub fn last(&self) -> Option<&FrameEntry> {
        self.entries.last()
    }

    /// Total decoded duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

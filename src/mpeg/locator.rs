use crate::mpeg::index::{FrameEntry, FrameIndex};
use std::cmp::Ordering;

/// Floor binary search: the position of the last element for which `compare`
/// returns `Less` or `Equal`.
///
/// `compare` orders an element against the query. `None` means the query lies
/// below the first element (or the slice is empty).
pub fn floor_search<T>(items: &[T], compare: impl FnMut(&T) -> Ordering) -> Option<usize> {
    match items.binary_search_by(compare) {
        Ok(exact) => Some(exact),
        Err(insertion) => insertion.checked_sub(1),
    }
}

impl FrameIndex {
    /// Returns the frame active at `time`: the latest entry starting at or
    /// before it.
    ///
    /// `None` when `time` precedes the stream start, the index is empty, or
    /// `time` is NaN.
    pub fn locate(&self, time: f64) -> Option<&FrameEntry> {
        if time.is_nan() {
            return None;
        }
        floor_search(self.entries(), |entry| {
            entry.time.partial_cmp(&time).unwrap_or(Ordering::Less)
        })
            .map(|position| &self.entries()[position])
    }

    /// Returns the frame containing byte `offset`, or `None` below the first
    /// frame.
    pub fn locate_offset(&self, offset: u64) -> Option<&FrameEntry> {
        floor_search(self.entries(), |entry| entry.offset.cmp(&offset))
            .map(|position| &self.entries()[position])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mpeg::test_util::synth_stream;
    use crate::mpeg::walker::walk;

    #[test]
    fn floor_search_on_plain_slices() {
        let items = [10, 20, 30];
        assert_eq!(floor_search(&items, |v| v.cmp(&20)), Some(1));
        assert_eq!(floor_search(&items, |v| v.cmp(&25)), Some(1));
        assert_eq!(floor_search(&items, |v| v.cmp(&99)), Some(2));
        assert_eq!(floor_search(&items, |v| v.cmp(&5)), None);
        let empty: [i32; 0] = [];
        assert_eq!(floor_search(&empty, |v| v.cmp(&5)), None);
    }

    #[test]
    fn exact_time_returns_that_frame() {
        let index = walk(&synth_stream(4));
        for entry in index.entries() {
            assert_eq!(index.locate(entry.time), Some(entry));
        }
    }

    #[test]
    fn time_between_frames_returns_earlier_frame() {
        let index = walk(&synth_stream(4));
        let entries = index.entries();
        let between = (entries[1].time + entries[2].time) / 2.0;
        assert_eq!(index.locate(between), Some(&entries[1]));
    }

    #[test]
    fn time_after_last_frame_returns_last_frame() {
        let index = walk(&synth_stream(3));
        assert_eq!(index.locate(3600.0), index.last());
    }

    #[test]
    fn time_before_stream_start_has_no_match() {
        let index = walk(&synth_stream(3));
        assert_eq!(index.locate(-0.001), None);
        assert_eq!(index.locate(f64::NAN), None);
        assert_eq!(FrameIndex::default().locate(1.0), None);
    }

    #[test]
    fn negative_zero_matches_first_frame() {
        let index = walk(&synth_stream(3));
        assert_eq!(index.locate(-0.0), index.first());
    }

    #[test]
    fn offset_lookup_finds_containing_frame() {
        let index = walk(&synth_stream(3));
        let entries = index.entries();
        assert_eq!(index.locate_offset(0), Some(&entries[0]));
        assert_eq!(index.locate_offset(416), Some(&entries[0]));
        assert_eq!(index.locate_offset(417), Some(&entries[1]));
        assert_eq!(index.locate_offset(10_000), Some(&entries[2]));
    }

    #[test]
    fn offset_lookup_below_first_frame_has_no_match() {
        let mut data = vec![0u8; 10];
        data.extend(synth_stream(2));
        let index = walk(&data);
        assert_eq!(index.locate_offset(9), None);
        assert_eq!(index.locate_offset(10).map(|e| e.offset), Some(10));
    }
}

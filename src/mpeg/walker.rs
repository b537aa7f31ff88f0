use crate::cursor::ByteReader;
use crate::mpeg::constants::{GARBAGE_REPORT_THRESHOLD, HEADER_SIZE, SYNC_BYTE, SYNC_MASK};
use crate::mpeg::header::{FrameHeader, Layer};
use crate::mpeg::index::{FrameEntry, FrameIndex};
use log::{debug, trace};

/// Scans an MPEG audio elementary stream and indexes its Layer 3 frames.
///
/// Leading and interleaved non-audio bytes (ID3 tags, junk) are skipped.
/// Never fails: anything that does not validate as a frame header is treated
/// as non-frame data.
pub fn walk(data: &[u8]) -> FrameIndex {
    let mut reader = ByteReader::new(data);
    let mut entries = Vec::new();
    let mut time = 0.0f64;
    let mut expect_sync = false;

    while reader.remaining() >= HEADER_SIZE {
        let offset = reader.position();
        let Ok(byte) = reader.read_u8() else {
            break;
        };

        if byte != SYNC_BYTE {
            if expect_sync && reader.remaining() > GARBAGE_REPORT_THRESHOLD {
                debug!("Unexpected garbage at offset {offset:#x} after frame");
            }
            expect_sync = false;
            continue;
        }
        expect_sync = false;

        reader.seek_relative(-1);
        let Ok(raw) = reader.read_u32_be() else {
            break;
        };

        if raw & SYNC_MASK != SYNC_MASK {
            // Not a sync pattern, resume one byte after the 0xFF.
            reader.seek_relative(-3);
            continue;
        }

        // A rejected candidate is not rewound, the scan resumes 4 bytes on.
        let header = match FrameHeader::parse(raw) {
            Ok(header) => header,
            Err(rejection) => {
                trace!("Skipping header candidate {raw:#010x} at {offset:#x}: {rejection}");
                continue;
            }
        };

        let frame_length = header.frame_length();
        if header.layer != Layer::Layer3 || frame_length as usize <= HEADER_SIZE {
            trace!(
                "Skipping {:?} frame of {frame_length} bytes at {offset:#x}",
                header.layer
            );
            continue;
        }

        entries.push(FrameEntry {
            time,
            offset: offset as u64,
            header,
        });
        reader.seek_relative(frame_length as i64 - HEADER_SIZE as i64);
        time += header.duration();
        expect_sync = true;
    }

    if reader.position() > data.len() {
        debug!(
            "Last frame is truncated by {} bytes",
            reader.position() - data.len()
        );
    }
    debug!(
        "Indexed {} frames, {:.3}s of audio in {} bytes",
        entries.len(),
        time,
        data.len()
    );

    FrameIndex::new(entries, time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mpeg::test_util::{MPEG1_L3_128K_HEADER, synth_frame, synth_stream};

    #[test]
    fn two_frame_stream_offsets_and_times() {
        let index = walk(&synth_stream(2));
        let entries = index.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].offset, 0);
        assert_eq!(entries[1].offset, 417);
        assert_eq!(entries[0].time, 0.0);
        assert!((entries[1].time - 1152.0 / 44100.0).abs() < 1e-12);
        assert!((entries[1].time - 0.02612).abs() < 1e-5);
        assert!((index.duration() - 2.0 * 1152.0 / 44100.0).abs() < 1e-12);
    }

    #[test]
    fn skips_leading_tag_bytes() {
        let mut data = b"ID3\x04\x00\x00\x00\x00\x00\x10".to_vec();
        data.extend_from_slice(&[0x11; 16]);
        let lead = data.len() as u64;
        data.extend(synth_stream(3));

        let index = walk(&data);
        let offsets: Vec<u64> = index.entries().iter().map(|e| e.offset).collect();
        assert_eq!(offsets, vec![lead, lead + 417, lead + 834]);
    }

    #[test]
    fn entries_are_layer3_and_monotonic() {
        let mut data = synth_stream(5);
        data.extend_from_slice(&[0xAB; 300]);
        data.extend(synth_stream(5));

        let index = walk(&data);
        assert_eq!(index.len(), 10);
        for entry in index.entries() {
            assert_eq!(entry.header.layer, Layer::Layer3);
            assert!(entry.header.frame_length() > 4);
        }
        for pair in index.entries().windows(2) {
            assert!(pair[0].time <= pair[1].time);
            assert!(pair[0].offset <= pair[1].offset);
        }
    }

    #[test]
    fn false_sync_rewinds_to_next_byte() {
        // 0xFF 0x00 is not a sync pattern, the scan steps one byte at a time.
        let mut data = vec![0xFF, 0x00];
        data.extend(synth_stream(1));
        let index = walk(&data);
        assert_eq!(index.len(), 1);
        assert_eq!(index.entries()[0].offset, 2);
    }

    #[test]
    fn rejected_header_skips_four_bytes() {
        // Bad-bitrate candidate overlapping a real frame at offset 2: the
        // 4-byte jump lands inside it and the frame is missed.
        let mut data = vec![0xFF, 0xFB];
        data.extend(synth_stream(1));
        let index = walk(&data);
        assert!(index.is_empty());

        // A free-bitrate candidate followed by a frame at offset 4.
        let mut data = vec![0xFF, 0xFB, 0x00, 0x00];
        data.extend(synth_stream(1));
        let index = walk(&data);
        assert_eq!(index.len(), 1);
        assert_eq!(index.entries()[0].offset, 4);
    }

    #[test]
    fn non_layer3_frames_are_not_indexed() {
        // Mpeg1 Layer2
        let mut data = synth_frame(0xFFFD9000, 417);
        data.extend(synth_stream(1));
        let index = walk(&data);
        assert_eq!(index.len(), 1);
        assert_eq!(index.entries()[0].header.layer, Layer::Layer3);
    }

    #[test]
    fn garbage_after_frame_does_not_stop_the_scan() {
        let mut data = synth_stream(1);
        data.extend_from_slice(&[0x42; 512]);
        data.extend(synth_stream(1));
        let index = walk(&data);
        assert_eq!(index.len(), 2);
        assert_eq!(index.entries()[1].offset, 417 + 512);
    }

    #[test]
    fn truncated_last_frame_is_still_indexed() {
        let mut data = synth_stream(2);
        data.truncate(417 + 100);
        let index = walk(&data);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn empty_and_tiny_inputs_yield_empty_index() {
        assert!(walk(&[]).is_empty());
        assert!(walk(&[0xFF, 0xFB, 0x90]).is_empty());
        assert_eq!(walk(&[]).duration(), 0.0);
    }

    #[test]
    fn header_constant_matches_parser() {
        let header = FrameHeader::parse(MPEG1_L3_128K_HEADER).unwrap();
        assert_eq!(header.frame_length(), 417);
    }
}

pub mod constants;
pub mod header;
pub mod index;
pub mod locator;
pub mod walker;

pub use index::{FrameEntry, FrameIndex};
pub use walker::walk;

#[cfg(test)]
pub(crate) mod test_util {
    /// Mpeg1 Layer3, 128 kbps, 44100 Hz, no padding: 417-byte frames.
    pub const MPEG1_L3_128K_HEADER: u32 = 0xFFFB9000;
    pub const MPEG1_L3_128K_FRAME_LENGTH: usize = 417;

    pub fn synth_frame(header: u32, length: usize) -> Vec<u8> {
        let mut frame = header.to_be_bytes().to_vec();
        frame.resize(length, 0);
        frame
    }

    pub fn synth_stream(frames: usize) -> Vec<u8> {
        (0..frames)
            .flat_map(|_| synth_frame(MPEG1_L3_128K_HEADER, MPEG1_L3_128K_FRAME_LENGTH))
            .collect()
    }
}

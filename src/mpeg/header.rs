use crate::mpeg::constants::{
    BIT_RATES_KBPS, BITRATE_BAD, BITRATE_FREE, SAMPLE_RATES_HZ, SAMPLES_PER_FRAME, SYNC_MASK,
};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    Mpeg1,
    Mpeg2,
    Mpeg25,
}

impl Version {
    fn table_index(self) -> usize {
        match self {
            Self::Mpeg1 => 0,
            Self::Mpeg2 => 1,
            Self::Mpeg25 => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Layer1,
    Layer2,
    Layer3,
}

impl Layer {
    fn table_index(self) -> usize {
        match self {
            Self::Layer1 => 0,
            Self::Layer2 => 1,
            Self::Layer3 => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMode {
    Stereo,
    JointStereo,
    DualChannel,
    Mono,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    None,
    /// 50/15 ms
    Ms50_15,
    Reserved,
    /// CCITT J.17
    CcittJ17,
}

/// Why a 4-byte candidate was not accepted as a frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeaderRejection {
    #[error("missing frame sync")]
    NoSync,

    #[error("reserved version")]
    ReservedVersion,

    #[error("reserved layer")]
    ReservedLayer,

    #[error("free bitrate")]
    FreeBitrate,

    #[error("bad bitrate")]
    BadBitrate,

    #[error("reserved sample rate")]
    ReservedSampleRate,
}

/// A decoded MPEG audio frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    pub version: Version,
    pub layer: Layer,
    /// A 16-bit CRC follows the header.
    pub crc_protected: bool,
    pub bitrate_kbps: u16,
    pub sample_rate: u32,
    pub padding: bool,
    pub private: bool,
    pub channel_mode: ChannelMode,
    pub mode_extension: u8,
    pub copyright: bool,
    pub original: bool,
    pub emphasis: Emphasis,
}

impl FrameHeader {
    /// Decodes a big-endian header word, sync bits included.
    pub fn parse(raw: u32) -> Result<Self, HeaderRejection> {
        if raw & SYNC_MASK != SYNC_MASK {
            return Err(HeaderRejection::NoSync);
        }

        let version = match (raw >> 19) & 0b11 {
            0b00 => Version::Mpeg25,
            0b10 => Version::Mpeg2,
            0b11 => Version::Mpeg1,
            _ => return Err(HeaderRejection::ReservedVersion),
        };

        let layer = match (raw >> 17) & 0b11 {
            0b01 => Layer::Layer3,
            0b10 => Layer::Layer2,
            0b11 => Layer::Layer1,
            _ => return Err(HeaderRejection::ReservedLayer),
        };

        let bitrate_code = ((raw >> 12) & 0xF) as u8;
        let bitrate_kbps = match bitrate_code {
            BITRATE_FREE => return Err(HeaderRejection::FreeBitrate),
            BITRATE_BAD => return Err(HeaderRejection::BadBitrate),
            code => BIT_RATES_KBPS[version.table_index()][layer.table_index()][code as usize],
        };

        let sample_rate = match ((raw >> 10) & 0b11) as usize {
            0b11 => return Err(HeaderRejection::ReservedSampleRate),
            code => SAMPLE_RATES_HZ[version.table_index()][code],
        };

        let channel_mode = match (raw >> 6) & 0b11 {
            0b00 => ChannelMode::Stereo,
            0b01 => ChannelMode::JointStereo,
            0b10 => ChannelMode::DualChannel,
            _ => ChannelMode::Mono,
        };

        let emphasis = match raw & 0b11 {
            0b00 => Emphasis::None,
            0b01 => Emphasis::Ms50_15,
            0b10 => Emphasis::Reserved,
            _ => Emphasis::CcittJ17,
        };

        Ok(Self {
            version,
            layer,
            crc_protected: (raw >> 16) & 1 == 0,
            bitrate_kbps,
            sample_rate,
            padding: (raw >> 9) & 1 == 1,
            private: (raw >> 8) & 1 == 1,
            channel_mode,
            mode_extension: ((raw >> 4) & 0b11) as u8,
            copyright: (raw >> 3) & 1 == 1,
            original: (raw >> 2) & 1 == 1,
            emphasis,
        })
    }

    pub fn samples_per_frame(&self) -> u32 {
        SAMPLES_PER_FRAME[self.version.table_index()][self.layer.table_index()]
    }

    /// Frame length in bytes, header included.
    pub fn frame_length(&self) -> u32 {
        let bitrate = self.bitrate_kbps as u32 * 1000;
        let padding = self.padding as u32;

        match self.layer {
            // Layer 1 counts in 4-byte slots
            Layer::Layer1 => (12 * bitrate / self.sample_rate + padding) * 4,
            // 144 bytes per kbps for every version, MPEG-2/2.5 included
            Layer::Layer2 | Layer::Layer3 => 144 * bitrate / self.sample_rate + padding,
        }
    }

    /// Playback duration of one frame in seconds.
    pub fn duration(&self) -> f64 {
        self.samples_per_frame() as f64 / self.sample_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mpeg1_layer3_128kbps() {
        let header = FrameHeader::parse(0xFFFB9000).unwrap();
        assert_eq!(header.version, Version::Mpeg1);
        assert_eq!(header.layer, Layer::Layer3);
        assert!(!header.crc_protected);
        assert_eq!(header.bitrate_kbps, 128);
        assert_eq!(header.sample_rate, 44100);
        assert!(!header.padding);
        assert_eq!(header.channel_mode, ChannelMode::Stereo);
        assert_eq!(header.samples_per_frame(), 1152);
        assert_eq!(header.frame_length(), 417);
    }

    #[test]
    fn padding_adds_one_byte() {
        let header = FrameHeader::parse(0xFFFB9200).unwrap();
        assert!(header.padding);
        assert_eq!(header.frame_length(), 418);
    }

    #[test]
    fn decodes_trailing_flags() {
        let header = FrameHeader::parse(0xFFFB91C5).unwrap();
        assert!(header.private);
        assert_eq!(header.channel_mode, ChannelMode::Mono);
        assert_eq!(header.mode_extension, 0);
        assert!(!header.copyright);
        assert!(header.original);
        assert_eq!(header.emphasis, Emphasis::Ms50_15);
    }

    #[test]
    fn mpeg2_layer3_uses_mpeg1_slot_size() {
        let header = FrameHeader::parse(0xFFF39000).unwrap();
        assert_eq!(header.version, Version::Mpeg2);
        assert_eq!(header.layer, Layer::Layer3);
        assert_eq!(header.bitrate_kbps, 80);
        assert_eq!(header.sample_rate, 22050);
        assert_eq!(header.samples_per_frame(), 576);
        assert_eq!(header.frame_length(), 522);
    }

    #[test]
    fn mpeg25_sample_rates() {
        let header = FrameHeader::parse(0xFFE39000).unwrap();
        assert_eq!(header.version, Version::Mpeg25);
        assert_eq!(header.sample_rate, 11025);
    }

    #[test]
    fn layer1_frame_length_counts_slots() {
        // Mpeg1 Layer1, code 4 = 128 kbps, 44100 Hz
        let header = FrameHeader::parse(0xFFFF4000).unwrap();
        assert_eq!(header.layer, Layer::Layer1);
        assert_eq!(header.bitrate_kbps, 128);
        assert_eq!(header.frame_length(), 34 * 4);
    }

    #[test]
    fn rejects_invalid_fields() {
        assert_eq!(
            FrameHeader::parse(0x7FFB9000),
            Err(HeaderRejection::NoSync)
        );
        assert_eq!(
            FrameHeader::parse(0xFFEB9000),
            Err(HeaderRejection::ReservedVersion)
        );
        assert_eq!(
            FrameHeader::parse(0xFFF99000),
            Err(HeaderRejection::ReservedLayer)
        );
        assert_eq!(
            FrameHeader::parse(0xFFFB0000),
            Err(HeaderRejection::FreeBitrate)
        );
        assert_eq!(
            FrameHeader::parse(0xFFFBF000),
            Err(HeaderRejection::BadBitrate)
        );
        assert_eq!(
            FrameHeader::parse(0xFFFB9C00),
            Err(HeaderRejection::ReservedSampleRate)
        );
    }

    #[test]
    fn frame_duration_at_44100() {
        let header = FrameHeader::parse(0xFFFB9000).unwrap();
        assert!((header.duration() - 1152.0 / 44100.0).abs() < 1e-12);
    }
}

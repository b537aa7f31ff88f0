pub const SYNC_BYTE: u8 = 0xFF;

/// 11 set bits: 0xFF followed by a byte with its top three bits set.
pub const SYNC_MASK: u32 = 0xFFE0_0000;

pub const HEADER_SIZE: usize = 4;

/// A non-sync byte right after a frame is only reported while more than this
/// many bytes are left, trailing tags are not worth a diagnostic.
pub const GARBAGE_REPORT_THRESHOLD: usize = 256;

pub const BITRATE_FREE: u8 = 0;
pub const BITRATE_BAD: u8 = 15;

/// Bitrates in kbps, indexed by `[version][layer][code]`.
/// Codes 0 (free) and 15 (bad) are never looked up.
pub static BIT_RATES_KBPS: [[[u16; 16]; 3]; 3] = [
    [
        // Mpeg1 Layer1
        [
            0, 32, 64, 96, 128, 160, 192, 224, 256, 288, 320, 352, 384, 416, 448, 0,
        ],
        // Mpeg1 Layer2
        [
            0, 32, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 384, 0,
        ],
        // Mpeg1 Layer3
        [
            0, 32, 40, 48, 56, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320, 0,
        ],
    ],
    [
        // Mpeg2 Layer1
        [
            0, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256, 0,
        ],
        // Mpeg2 Layer2
        [
            0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0,
        ],
        // Mpeg2 Layer3
        [
            0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0,
        ],
    ],
    [
        // Mpeg25 Layer1
        [
            0, 32, 48, 56, 64, 80, 96, 112, 128, 144, 160, 176, 192, 224, 256, 0,
        ],
        // Mpeg25 Layer2
        [
            0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0,
        ],
        // Mpeg25 Layer3
        [
            0, 8, 16, 24, 32, 40, 48, 56, 64, 80, 96, 112, 128, 144, 160, 0,
        ],
    ],
];

/// Sample rates in Hz, indexed by `[version][code]`; code 3 is reserved.
pub static SAMPLE_RATES_HZ: [[u32; 3]; 3] = [
    [44100, 48000, 32000], // Mpeg1
    [22050, 24000, 16000], // Mpeg2
    [11025, 12000, 8000],  // Mpeg25
];

/// Indexed by `[version][layer]`.
pub static SAMPLES_PER_FRAME: [[u32; 3]; 3] = [
    [384, 1152, 1152], // Mpeg1
    [384, 1152, 576],  // Mpeg2
    [384, 1152, 576],  // Mpeg25
];

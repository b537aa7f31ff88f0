use crate::cue::error::{CueError, CueResult};
use crate::cue::models::{BinaryCue, CueExtras, CueFormatVersion, CueSet};
use crate::cursor::{ByteBuilder, ByteReader};
use log::debug;

/// Decodes a binary cue blob: one version byte followed by records up to the
/// end of the buffer.
pub fn decode_cue_data(data: &[u8]) -> CueResult<CueSet> {
    let mut reader = ByteReader::new(data);
    let version = CueFormatVersion::try_from(reader.read_u8()?)?;

    let mut cues = Vec::new();
    while !reader.is_eof() {
        cues.push(read_record(&mut reader, version)?);
    }

    debug!("Decoded {} cues with layout {version:?}", cues.len());
    CueSet::new(version, cues)
}

fn read_record(reader: &mut ByteReader, version: CueFormatVersion) -> CueResult<BinaryCue> {
    let index = reader.read_i32()?;
    let time = reader.read_f64()?;
    let offset = reader.read_offset()?;

    let extras = match version {
        CueFormatVersion::V1 => CueExtras::V1,
        CueFormatVersion::V2 => CueExtras::V2 {
            loop_length: reader.read_f32()?,
        },
        CueFormatVersion::V3 => {
            let loop_length = reader.read_f32()?;
            let color = reader.read_i32()?;
            CueExtras::V3 { loop_length, color }
        }
    };

    // Length counts the terminating NUL.
    let name_length = reader.read_u16()? as usize;
    let mut units = reader.read_u16_units(name_length)?;
    if units.last() == Some(&0) {
        units.pop();
    }
    let name = String::from_utf16(&units).map_err(|_| CueError::InvalidName { index })?;

    Ok(BinaryCue {
        index,
        time,
        offset,
        extras,
        name,
    })
}

/// Encodes a cue set. The output is always a version 1 blob; loop lengths and
/// colors are dropped.
pub fn encode_cue_data(set: &CueSet) -> CueResult<Vec<u8>> {
    if set.version() != CueFormatVersion::V1 {
        debug!("Writing {:?} cue set with the V1 layout", set.version());
    }

    let mut builder = ByteBuilder::with_capacity(1 + set.len() * 32);
    builder.write_u8(CueFormatVersion::V1 as u8);
    for cue in set.cues() {
        write_record(&mut builder, cue)?;
    }

    Ok(builder.into_inner())
}

fn write_record(builder: &mut ByteBuilder, cue: &BinaryCue) -> CueResult<()> {
    let mut units: Vec<u16> = cue.name.encode_utf16().collect();
    units.push(0);
    let name_length = u16::try_from(units.len()).map_err(|_| CueError::NameTooLong {
        index: cue.index,
        length: units.len() - 1,
    })?;

    builder.write_i32(cue.index);
    builder.write_f64(cue.time);
    builder.write_offset(cue.offset);
    builder.write_u16(name_length);
    builder.write_u16_units(&units);

    Ok(())
}

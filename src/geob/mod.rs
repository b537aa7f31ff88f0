pub mod error;

use crate::geob::error::GeobResult;
use base64::{Engine as _, engine::general_purpose};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Description of the GEOB object holding the JSON cue sheet.
pub const CUE_POINTS: &str = "CuePoints";

/// Description of the GEOB object holding the binary cue blob.
pub const CUE_DATA: &str = "DJUCED_CUE_DATA";

/// A generic encapsulated object as handed over by the tag reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeobObject {
    pub description: String,
    pub data: Vec<u8>,
}

pub fn find<'a>(objects: &'a [GeobObject], description: &str) -> Option<&'a GeobObject> {
    objects.iter().find(|object| object.description == description)
}

/// Unwraps a base64 text payload. ASCII whitespace (line breaks included) and
/// trailing NULs are ignored.
pub fn unwrap_payload(data: &[u8]) -> GeobResult<Vec<u8>> {
    let text: Vec<u8> = data
        .iter()
        .copied()
        .filter(|byte| !byte.is_ascii_whitespace())
        .collect();
    let end = text.iter().rposition(|byte| *byte != 0).map_or(0, |i| i + 1);

    Ok(general_purpose::STANDARD.decode(&text[..end])?)
}

pub fn wrap_payload(payload: &[u8]) -> Vec<u8> {
    general_purpose::STANDARD.encode(payload).into_bytes()
}

/// `track.mp3` + `CuePoints` -> `track.mp3.CuePoints`
pub fn sidecar_path(audio: &Path, description: &str) -> PathBuf {
    let mut name = audio
        .file_name()
        .map(OsString::from)
        .unwrap_or_default();
    name.push(".");
    name.push(description);
    audio.with_file_name(name)
}

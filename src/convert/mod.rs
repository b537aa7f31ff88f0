use crate::convert::error::{ConvertError, ConvertResult};
use crate::convert::pipeline::{encode_cues, reconcile};
use crate::cue::{CueSet, CueSheet, decode_cue_data};
use crate::geob::{
    CUE_DATA, CUE_POINTS, GeobObject, find, sidecar_path, unwrap_payload, wrap_payload,
};
use crate::mpeg::{FrameIndex, walk};
use log::{debug, info};
use std::path::{Path, PathBuf};
use tokio::{fs, task};

pub mod batch;
pub mod error;
pub mod pipeline;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    /// Sidecars hold raw payloads instead of base64 text.
    pub plain: bool,
    /// Overwrite existing output sidecars.
    pub force: bool,
}

/// An audio file and the GEOB payloads exported next to it.
#[derive(Debug)]
struct Track {
    path: PathBuf,
    audio: Vec<u8>,
    objects: Vec<GeobObject>,
}

impl Track {
    async fn load(path: &Path, descriptions: &[&str]) -> ConvertResult<Self> {
        debug!("Reading audio file: {:?}", path);
        let audio = fs::read(path).await?;

        let mut objects = Vec::new();
        for description in descriptions {
            let sidecar = sidecar_path(path, description);
            if fs::try_exists(&sidecar).await? {
                debug!("Reading {description} payload: {:?}", sidecar);
                objects.push(GeobObject {
                    description: description.to_string(),
                    data: fs::read(&sidecar).await?,
                });
            }
        }

        Ok(Self {
            path: path.to_path_buf(),
            audio,
            objects,
        })
    }

    fn payload(&self, description: &'static str, plain: bool) -> ConvertResult<Option<Vec<u8>>> {
        match find(&self.objects, description) {
            Some(object) if plain => Ok(Some(object.data.clone())),
            Some(object) => Ok(Some(unwrap_payload(&object.data)?)),
            None => Ok(None),
        }
    }

    fn require_payload(&self, description: &'static str, plain: bool) -> ConvertResult<Vec<u8>> {
        self.payload(description, plain)?.ok_or_else(|| {
            ConvertError::MissingPayload(description, sidecar_path(&self.path, description))
        })
    }
}

async fn index_audio(audio: Vec<u8>) -> ConvertResult<FrameIndex> {
    Ok(task::spawn_blocking(move || walk(&audio)).await?)
}

/// Converts `<audio>.CuePoints` into `<audio>.DJUCED_CUE_DATA`.
pub async fn encode_track(path: PathBuf, options: ConvertOptions) -> ConvertResult<String> {
    let output_path = sidecar_path(&path, CUE_DATA);
    if fs::try_exists(&output_path).await? && !options.force {
        return Err(ConvertError::OutputAlreadyExists(output_path));
    }

    let track = Track::load(&path, &[CUE_POINTS]).await?;
    let sheet = CueSheet::parse(&track.require_payload(CUE_POINTS, options.plain)?)?;
    let cues = sheet.logical_cues();
    debug!(
        "Parsed {} cues from {}",
        cues.len(),
        sheet.source.as_deref().unwrap_or("unknown source")
    );

    let audio = track.audio;
    let blob = task::spawn_blocking(move || {
        let index = walk(&audio);
        encode_cues(&index, &cues)
    })
    .await??;

    let output = if options.plain {
        blob
    } else {
        wrap_payload(&blob)
    };
    fs::write(&output_path, output).await?;

    Ok(format!(
        "wrote {} cues to {}",
        sheet.cues.len(),
        output_path.display()
    ))
}

/// Checks the offsets stored in `<audio>.DJUCED_CUE_DATA` against the audio.
pub async fn reconcile_track(path: PathBuf, options: ConvertOptions) -> ConvertResult<String> {
    let track = Track::load(&path, &[CUE_DATA]).await?;
    let set = decode_cue_data(&track.require_payload(CUE_DATA, options.plain)?)?;
    let index = index_audio(track.audio).await?;

    let rows = reconcile(&index, &set);
    for row in &rows {
        info!(
            "{}: cue {:>4} {:>10.3}s stored {:#010x} located {} time at offset {}",
            path.display(),
            row.index,
            row.stored_time,
            row.stored_offset,
            row.located_offset
                .map_or_else(|| "-".to_string(), |o| format!("{o:#010x}")),
            row.time_delta()
                .map_or_else(|| "-".to_string(), |d| format!("{d:+.3}s")),
        );
    }

    let mismatched = rows.iter().filter(|row| !row.is_consistent()).count();
    Ok(format!(
        "{} cues checked, {} mismatched",
        rows.len(),
        mismatched
    ))
}

/// Logs the decoded contents of every cue payload next to `<audio>`.
pub async fn inspect_track(path: PathBuf, options: ConvertOptions) -> ConvertResult<String> {
    let track = Track::load(&path, &[CUE_POINTS, CUE_DATA]).await?;
    let descriptions: Vec<&str> = track
        .objects
        .iter()
        .map(|object| object.description.as_str())
        .collect();
    info!("{}: GEOBs: {:?}", path.display(), descriptions);

    if let Some(payload) = track.payload(CUE_POINTS, options.plain)? {
        let sheet = CueSheet::parse(&payload)?;
        info!("{}: {CUE_POINTS}: {}", path.display(), sheet.to_json()?);
    }

    if let Some(payload) = track.payload(CUE_DATA, options.plain)? {
        let set = decode_cue_data(&payload)?;
        log_cue_set(&path, &set);
    }

    Ok(format!("{} cue payloads", descriptions.len()))
}

fn log_cue_set(path: &Path, set: &CueSet) {
    info!(
        "{}: {CUE_DATA}: {:?} layout, {} primary and {} secondary cues",
        path.display(),
        set.version(),
        set.primary().count(),
        set.secondary().count()
    );
    for cue in set.cues() {
        let mut line = format!(
            "{}:   {:>4} {:>10.3}s {:#010x} \"{}\"",
            path.display(),
            cue.index,
            cue.time,
            cue.offset,
            cue.name
        );
        if let Some(loop_length) = cue.extras.loop_length() {
            line.push_str(&format!(" loop {loop_length}"));
        }
        if let Some(color) = cue.extras.color() {
            line.push_str(&format!(" color #{color:06X}"));
        }
        info!("{line}");
    }
}

/// Logs a summary of the audio stream's frame index.
pub async fn describe_frames(path: PathBuf) -> ConvertResult<String> {
    let audio = fs::read(&path).await?;
    let size = audio.len();
    let index = index_audio(audio).await?;
    let first = index.first().ok_or(ConvertError::NoFramesFound)?;
    let header = first.header;

    info!(
        "{}: first frame at {:#x}: {:?} {:?} {} kbps {} Hz {:?}",
        path.display(),
        first.offset,
        header.version,
        header.layer,
        header.bitrate_kbps,
        header.sample_rate,
        header.channel_mode
    );

    Ok(format!(
        "{} frames, {:.3}s in {} bytes",
        index.len(),
        index.duration(),
        size
    ))
}

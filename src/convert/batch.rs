use crate::convert::error::{ConvertError, ConvertResult};
use crate::error::{CueConvertoError, CueConvertoResult};
use futures::{StreamExt, stream};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use log::{error, info};
use std::future::Future;
use std::path::PathBuf;

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub succeeded: usize,
    pub failed: Vec<(PathBuf, ConvertError)>,
}

impl BatchOutcome {
    pub fn total(&self) -> usize {
        self.succeeded + self.failed.len()
    }

    pub fn into_result(self) -> CueConvertoResult<()> {
        if self.failed.is_empty() {
            Ok(())
        } else {
            Err(CueConvertoError::BatchFailed {
                failed: self.failed.len(),
                total: self.total(),
            })
        }
    }
}

/// Runs `job` for every input, at most `jobs` at a time. A failing file is
/// logged and does not stop the others.
pub async fn run_batch<F, Fut>(
    progress: MultiProgress,
    inputs: Vec<PathBuf>,
    jobs: usize,
    job: F,
) -> BatchOutcome
where
    F: Fn(PathBuf) -> Fut,
    Fut: Future<Output = ConvertResult<String>>,
{
    let bar = progress.add(ProgressBar::new(inputs.len() as u64));
    if let Ok(style) = ProgressStyle::with_template("{bar:40.cyan/blue} {pos}/{len} {wide_msg}") {
        bar.set_style(style);
    }

    let results: Vec<(PathBuf, ConvertResult<String>)> = stream::iter(inputs)
        .map(|path| {
            let run = job(path.clone());
            async move { (path, run.await) }
        })
        .buffer_unordered(jobs.max(1))
        .inspect(|(path, _)| {
            bar.set_message(path.display().to_string());
            bar.inc(1);
        })
        .collect()
        .await;
    bar.finish_and_clear();

    let mut outcome = BatchOutcome::default();
    for (path, result) in results {
        match result {
            Ok(summary) => {
                info!("{}: {summary}", path.display());
                outcome.succeeded += 1;
            }
            Err(err) => {
                error!("{}: {err}", path.display());
                outcome.failed.push((path, err));
            }
        }
    }

    outcome
}

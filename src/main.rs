use crate::commands::{Cli, Commands};
use anyhow::Result;
use clap::Parser;
use cue_converto::convert::batch::run_batch;
use cue_converto::convert::{
    ConvertOptions, describe_frames, encode_track, inspect_track, reconcile_track,
};
use indicatif::MultiProgress;
use indicatif_log_bridge::LogWrapper;

mod commands;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let logger = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .build();

    let level = logger.filter();
    let pb = MultiProgress::new();

    LogWrapper::new(pb.clone(), logger).try_init()?;
    log::set_max_level(level);

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Encode(cmd) => {
            let options = ConvertOptions::from(&cmd);
            run_batch(pb, cmd.batch.inputs.clone(), cmd.batch.jobs(), |path| {
                encode_track(path, options)
            })
            .await
        }
        Commands::Reconcile(cmd) => {
            let options = ConvertOptions {
                plain: cmd.plain,
                force: false,
            };
            run_batch(pb, cmd.batch.inputs.clone(), cmd.batch.jobs(), |path| {
                reconcile_track(path, options)
            })
            .await
        }
        Commands::Inspect(cmd) => {
            let options = ConvertOptions {
                plain: cmd.plain,
                force: false,
            };
            run_batch(pb, cmd.batch.inputs.clone(), cmd.batch.jobs(), |path| {
                inspect_track(path, options)
            })
            .await
        }
        Commands::Frames(cmd) => {
            run_batch(pb, cmd.batch.inputs.clone(), cmd.batch.jobs(), describe_frames).await
        }
    };

    outcome.into_result()?;

    Ok(())
}

//! Merge linked videos from a text file into one loudness-normalized video.

use std::path::PathBuf;

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lecmerge_cli::{run, PipelineConfig};
use lecmerge_models::DEFAULT_VOLUME_SCALE;

#[derive(Parser, Debug)]
#[command(
    name = "lecmerge",
    about = "Download the videos linked in a text file, boost their audio, and merge them into one normalized video"
)]
struct Cli {
    /// Text file to scan for video links
    input: PathBuf,

    /// Path of the merged output video
    output: PathBuf,

    /// Amplitude multiplier applied to each video before merging
    #[arg(long, default_value_t = DEFAULT_VOLUME_SCALE)]
    volume: u32,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let env_filter = EnvFilter::from_default_env()
        .add_directive("lecmerge=info".parse().unwrap());

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(true)
                .with_target(true)
                .with_file(false)
                .with_line_number(false),
        )
        .with(env_filter)
        .init();

    let config = PipelineConfig {
        volume_scale: cli.volume,
        ..PipelineConfig::default()
    };

    if let Err(e) = run(&cli.input, &cli.output, &config).await {
        error!("{}", e);
        std::process::exit(1);
    }

    println!("Successfully created output file: {}", cli.output.display());
}

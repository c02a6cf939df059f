//! submerge binary entry point

use anyhow::Result;
use clap::Parser;
use submerge::cli::Args;
use submerge::core::config::MergeConfig;
use submerge::core::io::read_subtitle_file;
use submerge::core::subtitles::{merge, srt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "submerge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let mut config = MergeConfig::load_or_default()?;
    args.apply_to(&mut config);
    config.validate()?;

    let first = srt::parse_srt(&read_subtitle_file(&args.first)?)?;
    let second = srt::parse_srt(&read_subtitle_file(&args.second)?)?;
    tracing::info!(
        "loaded {} cues from {} and {} cues from {}",
        first.len(),
        args.first.display(),
        second.len(),
        args.second.display()
    );

    let mut merged = merge::merge_sequences(&first, &second, &config);
    merge::renumber(&mut merged);
    tracing::info!("merged into {} cues", merged.len());

    std::fs::write(&args.output, srt::serialize_srt(&merged))?;
    tracing::info!("wrote {}", args.output.display());

    Ok(())
}

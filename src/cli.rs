//! Command-line arguments

use crate::core::config::MergeConfig;
use clap::Parser;
use std::path::PathBuf;

/// Merge two SRT subtitle tracks into a single file
#[derive(Parser, Debug)]
#[command(name = "submerge", version, about)]
pub struct Args {
    /// First subtitle file (its timing wins when cues fully match)
    pub first: PathBuf,

    /// Second subtitle file
    pub second: PathBuf,

    /// Output file
    #[arg(short, long, default_value = "merged.srt")]
    pub output: PathBuf,

    /// Matching tolerance in milliseconds
    #[arg(long)]
    pub slack_ms: Option<i64>,

    /// Keep internal line breaks instead of flattening each track's cue
    #[arg(long)]
    pub keep_line_breaks: bool,
}

impl Args {
    /// Fold CLI overrides into a loaded configuration
    pub fn apply_to(&self, config: &mut MergeConfig) {
        if let Some(slack_ms) = self.slack_ms {
            config.slack_ms = slack_ms;
        }
        if self.keep_line_breaks {
            config.join_lines = false;
        }
    }
}

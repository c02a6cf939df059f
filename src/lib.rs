//! submerge
//!
//! Aligns and merges two independently-timed SubRip subtitle tracks of the
//! same media (for example two language tracks) into one combined track.
//! Cues whose timing windows coincide within a configurable tolerance are
//! paired and their texts stacked; everything else passes through unchanged.

// CLI arguments
pub mod cli;

// Core modules
pub mod core;

// Re-exports
pub use crate::core::config::MergeConfig;
pub use crate::core::models::{CoreError, CoreResult, Cue};

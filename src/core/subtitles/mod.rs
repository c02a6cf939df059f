//! Subtitle processing
//!
//! SRT parsing/serialization and the two-track merge engine:
//! - Time-tolerant comparison
//! - Text combination
//! - Sequential merge with one-step lookahead
//! - Output renumbering

pub mod compare;
pub mod join;
pub mod merge;
pub mod srt;

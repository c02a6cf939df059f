//! Core data models
//!
//! - Subtitle cues and the SRT timestamp codec
//! - Result and error types

pub mod cue;
pub mod results;

// Re-exports for convenience
pub use cue::Cue;
pub use results::{CoreError, CoreResult};

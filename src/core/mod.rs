//! Core engine modules
//!
//! This module contains all headless merge functionality:
//! - Configuration management
//! - Models (cues, results)
//! - File reading with encoding fallback
//! - Subtitle parsing, comparison, and merging

pub mod config;
pub mod models;
pub mod io;

// Subtitles
pub mod subtitles;

//! File input

pub mod reader;

pub use reader::read_subtitle_file;

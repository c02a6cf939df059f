//! Cue text combination

use crate::core::config::MergeConfig;

/// Combine cue texts into one block, one input per output line.
///
/// With `join_lines` enabled, each input is first flattened to a single
/// physical line (internal line breaks become spaces). Argument order is
/// preserved.
pub fn join_texts(config: &MergeConfig, texts: &[&str]) -> String {
    let mut lines = Vec::with_capacity(texts.len());
    for text in texts {
        if config.join_lines {
            lines.push(text.replace('\n', " "));
        } else {
            lines.push((*text).to_string());
        }
    }
    lines.join("\n")
}

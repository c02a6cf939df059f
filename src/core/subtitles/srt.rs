//! SubRip (SRT) parsing and serialization
//!
//! Blocks are separated by blank lines: an optional integer index line, a
//! `HH:MM:SS,mmm --> HH:MM:SS,mmm` timing line, then the text lines.
//! Internal line breaks within a cue's text are preserved.

use crate::core::models::cue::{format_timestamp, parse_timestamp, Cue};
use crate::core::models::results::{CoreError, CoreResult};

/// Parse SRT text into a cue list sorted ascending by start time.
///
/// Tolerates CRLF endings, missing or misnumbered index lines, and a BOM
/// left on the first line. A malformed timing line is a fatal parse error.
pub fn parse_srt(content: &str) -> CoreResult<Vec<Cue>> {
    let mut cues = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in content.lines() {
        if line.trim().is_empty() {
            if !block.is_empty() {
                cues.push(parse_block(&block)?);
                block.clear();
            }
        } else {
            block.push(line);
        }
    }
    if !block.is_empty() {
        cues.push(parse_block(&block)?);
    }

    // downstream merging assumes chronological order
    cues.sort_by_key(|c| c.start_ms);
    Ok(cues)
}

fn parse_block(lines: &[&str]) -> CoreResult<Cue> {
    let mut pos = 0;
    let mut index = 0;

    // index line is optional; some files omit or misnumber it
    let head = lines[0].trim().trim_start_matches('\u{feff}');
    if let Ok(n) = head.parse::<usize>() {
        index = n;
        pos = 1;
    }

    let timing = lines
        .get(pos)
        .ok_or_else(|| CoreError::ParseError("cue block missing timing line".to_string()))?;
    let (start_ms, end_ms) = parse_timing_line(timing)?;
    let text = lines[pos + 1..].join("\n");

    Ok(Cue {
        index,
        start_ms,
        end_ms,
        text,
    })
}

fn parse_timing_line(line: &str) -> CoreResult<(i64, i64)> {
    let (start, end) = line
        .split_once("-->")
        .ok_or_else(|| CoreError::ParseError(format!("bad timing line: {}", line)))?;
    Ok((parse_timestamp(start)?, parse_timestamp(end)?))
}

/// Serialize cues as SRT text, one blank-line-separated block per cue.
pub fn serialize_srt(cues: &[Cue]) -> String {
    let mut out = String::new();
    for cue in cues {
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            cue.index,
            format_timestamp(cue.start_ms),
            format_timestamp(cue.end_ms),
            cue.text
        ));
    }
    out
}

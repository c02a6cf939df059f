//! Time-tolerant cue comparison

use crate::core::config::MergeConfig;
use crate::core::models::cue::Cue;

/// Relative position of one time boundary after tolerance is applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOrder {
    Before,
    Within,
    After,
}

/// Classify a time delta against the slack window
pub fn indicator(delta_ms: i64, slack_ms: i64) -> TimeOrder {
    if delta_ms.abs() < slack_ms {
        TimeOrder::Within
    } else if delta_ms > 0 {
        TimeOrder::After
    } else {
        TimeOrder::Before
    }
}

/// Compare two cues to determine precedence.
///
/// Returns the orderings of `a`'s start and end relative to `b`'s.
/// Independently authored tracks drift unevenly at cue edges (one track's
/// cue often ends later over trailing punctuation), so two cues whose
/// combined boundary drift stays under twice the slack count as a match
/// even when a single boundary exceeds the slack on its own.
pub fn compare(a: &Cue, b: &Cue, config: &MergeConfig) -> (TimeOrder, TimeOrder) {
    // perfect match
    if a.start_ms == b.start_ms && a.end_ms == b.end_ms {
        return (TimeOrder::Within, TimeOrder::Within);
    }

    let start_delta = a.start_ms - b.start_ms;
    let end_delta = a.end_ms - b.end_ms;

    // aggregate override
    if start_delta.abs() + end_delta.abs() < 2 * config.slack_ms {
        return (TimeOrder::Within, TimeOrder::Within);
    }

    (
        indicator(start_delta, config.slack_ms),
        indicator(end_delta, config.slack_ms),
    )
}

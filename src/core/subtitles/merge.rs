//! Two-track sequential merge
//!
//! Walks two time-sorted cue sequences with independent cursors, pairing
//! cues whose timing windows coincide within the configured slack and
//! passing unmatched cues through unchanged. A one-step lookahead catches
//! the case where a single cue in one track spans two consecutive cues in
//! the other (a long line split across two cues by one authoring tool).

use crate::core::config::MergeConfig;
use crate::core::models::cue::Cue;
use crate::core::subtitles::compare::{compare, TimeOrder};
use crate::core::subtitles::join::join_texts;

/// Merge two time-sorted, internally non-overlapping cue sequences.
///
/// Output timings are always copied from one input cue, never synthesized
/// or averaged. When either sequence runs out, the remainder of the other
/// is appended unchanged in its original order.
pub fn merge_sequences(first: &[Cue], second: &[Cue], config: &MergeConfig) -> Vec<Cue> {
    let n1 = first.len();
    let n2 = second.len();
    let mut merged = Vec::with_capacity(n1.max(n2));
    let mut i = 0;
    let mut j = 0;

    while i < n1 && j < n2 {
        let a = &first[i];
        let b = &second[j];
        match compare(a, b, config) {
            (TimeOrder::Within, TimeOrder::Within) => {
                merged.push(Cue::new(
                    a.start_ms,
                    a.end_ms,
                    join_texts(config, &[&a.text, &b.text]),
                ));
                i += 1;
                j += 1;
            }
            (TimeOrder::Within, TimeOrder::Before) => {
                // `b` may span this cue and the next one of `first`; the
                // bounds check doubles as the no-match path at sequence end
                if i + 1 < n1 && compare(&first[i + 1], b, config).1 == TimeOrder::Within {
                    let spanned = format!("{} {}", a.text, first[i + 1].text);
                    merged.push(Cue::new(
                        b.start_ms,
                        b.end_ms,
                        join_texts(config, &[&spanned, &b.text]),
                    ));
                    i += 2;
                    j += 1;
                } else {
                    // emit `a` alone; `b` stays pending for the next cue of `first`
                    merged.push(a.clone());
                    i += 1;
                }
            }
            (TimeOrder::Within, TimeOrder::After) => {
                if j + 1 < n2 && compare(a, &second[j + 1], config).1 == TimeOrder::Within {
                    let spanned = format!("{} {}", b.text, second[j + 1].text);
                    merged.push(Cue::new(
                        a.start_ms,
                        a.end_ms,
                        join_texts(config, &[&a.text, &spanned]),
                    ));
                    i += 1;
                    j += 2;
                } else {
                    merged.push(b.clone());
                    j += 1;
                }
            }
            (TimeOrder::Before, _) => {
                merged.push(a.clone());
                i += 1;
            }
            (TimeOrder::After, _) => {
                merged.push(b.clone());
                j += 1;
            }
        }
    }

    // add any cues left
    merged.extend_from_slice(&first[i..]);
    merged.extend_from_slice(&second[j..]);

    merged
}

/// Assign sequential 1-based indexes in output order
pub fn renumber(cues: &mut [Cue]) {
    for (n, cue) in cues.iter_mut().enumerate() {
        cue.index = n + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cue(start_ms: i64, end_ms: i64, text: &str) -> Cue {
        Cue::new(start_ms, end_ms, text)
    }

    fn config(slack_ms: i64) -> MergeConfig {
        MergeConfig {
            slack_ms,
            ..Default::default()
        }
    }

    #[test]
    fn test_perfect_overlap() {
        let a = vec![cue(0, 1000, "Hello")];
        let b = vec![cue(0, 1000, "Bonjour")];
        let merged = merge_sequences(&a, &b, &config(500));
        assert_eq!(merged, vec![cue(0, 1000, "Hello\nBonjour")]);
    }

    #[test]
    fn test_fuzzy_match_within_slack() {
        let a = vec![cue(0, 1000, "Hi")];
        let b = vec![cue(300, 1000, "Salut")];
        let merged = merge_sequences(&a, &b, &config(500));
        // anchored at the first track's timing
        assert_eq!(merged, vec![cue(0, 1000, "Hi\nSalut")]);
    }

    #[test]
    fn test_split_cue_combine() {
        let a = vec![cue(0, 500, "Hi"), cue(500, 1000, "there")];
        let b = vec![cue(0, 1000, "Bonjour")];
        let merged = merge_sequences(&a, &b, &config(200));
        assert_eq!(merged, vec![cue(0, 1000, "Hi there\nBonjour")]);
    }

    #[test]
    fn test_split_cue_combine_second_track() {
        let a = vec![cue(0, 1000, "Bonjour")];
        let b = vec![cue(0, 500, "Hi"), cue(500, 1000, "there")];
        let merged = merge_sequences(&a, &b, &config(200));
        // anchored at the single cue's timing, its text first
        assert_eq!(merged, vec![cue(0, 1000, "Bonjour\nHi there")]);
    }

    #[test]
    fn test_disjoint_cues_pass_through() {
        let a = vec![cue(0, 400, "Early")];
        let b = vec![cue(2000, 2400, "Late")];
        let merged = merge_sequences(&a, &b, &config(500));
        assert_eq!(merged, vec![cue(0, 400, "Early"), cue(2000, 2400, "Late")]);
    }

    #[test]
    fn test_lookahead_at_sequence_end() {
        // no first[1] exists: must emit first[0] unchanged, never panic
        let a = vec![cue(0, 500, "Only")];
        let b = vec![cue(0, 1000, "Wide")];
        let merged = merge_sequences(&a, &b, &config(200));
        assert_eq!(merged, vec![cue(0, 500, "Only"), cue(0, 1000, "Wide")]);
    }

    #[test]
    fn test_lookahead_rejected_keeps_pending_cue() {
        // first[0] matches b's start but not its end, and first[1] doesn't
        // close the gap either: first[0] is emitted alone and b stays
        // pending, to be re-compared against first[1] on the next pass
        let a = vec![cue(0, 300, "one"), cue(4000, 6000, "two")];
        let b = vec![cue(0, 5000, "wide")];
        let merged = merge_sequences(&a, &b, &config(200));
        assert_eq!(
            merged,
            vec![cue(0, 300, "one"), cue(0, 5000, "wide"), cue(4000, 6000, "two")]
        );
    }

    #[test]
    fn test_leftovers_appended_in_order() {
        let a = vec![cue(0, 1000, "one")];
        let b = vec![
            cue(0, 1000, "uno"),
            cue(2000, 3000, "dos"),
            cue(4000, 5000, "tres"),
        ];
        let merged = merge_sequences(&a, &b, &config(500));
        assert_eq!(merged.len(), 3);
        assert_eq!(merged[0].text, "one\nuno");
        assert_eq!(merged[1].text, "dos");
        assert_eq!(merged[2].text, "tres");
    }

    #[test]
    fn test_all_text_survives_exactly_once() {
        let a = vec![
            cue(0, 900, "a0"),
            cue(1000, 1900, "a1"),
            cue(5000, 5400, "a2"),
        ];
        let b = vec![
            cue(100, 950, "b0"),
            cue(3000, 3800, "b1"),
            cue(5050, 5450, "b2"),
        ];
        let merged = merge_sequences(&a, &b, &config(500));
        let all_text: String = merged
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");
        for fragment in ["a0", "a1", "a2", "b0", "b1", "b2"] {
            assert_eq!(all_text.matches(fragment).count(), 1, "{}", fragment);
        }
    }

    #[test]
    fn test_output_ordered_and_timings_anchored() {
        let a = vec![cue(0, 900, "a0"), cue(2000, 2900, "a1")];
        let b = vec![cue(100, 950, "b0"), cue(4000, 4900, "b1")];
        let merged = merge_sequences(&a, &b, &config(500));
        let inputs: Vec<(i64, i64)> = a
            .iter()
            .chain(b.iter())
            .map(|c| (c.start_ms, c.end_ms))
            .collect();
        let mut last_start = i64::MIN;
        for cue in &merged {
            assert!(cue.start_ms >= last_start);
            last_start = cue.start_ms;
            assert!(inputs.contains(&(cue.start_ms, cue.end_ms)));
        }
    }

    #[test]
    fn test_empty_inputs() {
        let a = vec![cue(0, 1000, "solo")];
        assert_eq!(merge_sequences(&a, &[], &config(500)), a);
        assert_eq!(merge_sequences(&[], &a, &config(500)), a);
        assert!(merge_sequences(&[], &[], &config(500)).is_empty());
    }

    #[test]
    fn test_renumber() {
        let mut cues = vec![cue(0, 1, "a"), cue(2, 3, "b"), cue(4, 5, "c")];
        cues[0].index = 42;
        renumber(&mut cues);
        let indexes: Vec<usize> = cues.iter().map(|c| c.index).collect();
        assert_eq!(indexes, vec![1, 2, 3]);
    }
}

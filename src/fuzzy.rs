//! Subsequence fuzzy matching with a lower-is-better penalty score.
//!
//! A pattern matches a subject when its characters appear in order, not
//! necessarily adjacent. The penalty counts subject characters skipped
//! strictly between chosen matches; characters before the first match and
//! after the last are free. Among all ways to place the pattern, the
//! cheapest one wins.
//!
//! The implementation is dependency-free to keep `pathpick` self-contained.

/// One partial alignment: how many pattern chars are consumed, and the
/// filler penalty accumulated while the match was in progress.
#[derive(Clone, Copy)]
struct MatchState {
    index: usize,
    score: u32,
}

/// Fuzzy-match `pattern` against `subject` and return the minimum penalty.
///
/// Returns `None` if `pattern` is not a subsequence of `subject`. An empty
/// pattern matches anything with penalty 0. Callers are expected to have
/// case-normalized both strings; no folding happens here.
///
/// A single greedy pass would pick the first occurrence of each pattern
/// character and overpay on inputs like pattern `system` against subject
/// `sys_system`, where the contiguous suffix is free. Instead we keep a set
/// of live partial alignments: on every character match we both consume the
/// occurrence and decline it, so a later, better-aligned occurrence can win.
pub fn fuzzy_match(subject: &str, pattern: &str) -> Option<u32> {
    let pattern: Vec<char> = pattern.chars().collect();
    if pattern.is_empty() {
        return Some(0);
    }

    let mut live = vec![MatchState { index: 0, score: 0 }];
    let mut completed: Vec<u32> = Vec::new();

    for c in subject.chars() {
        let mut next = Vec::with_capacity(live.len() + 1);

        for mut state in live {
            // Finished alignments cannot advance further; park their score.
            if state.index == pattern.len() {
                completed.push(state.score);
                continue;
            }

            if c == pattern[state.index] {
                let advanced = MatchState {
                    index: state.index + 1,
                    score: state.score,
                };
                if advanced.index == pattern.len() {
                    completed.push(advanced.score);
                } else {
                    next.push(advanced);
                }
                // Keep the unconsumed branch alive too.
                next.push(state);
            } else {
                // Filler only costs once a match is in progress.
                if state.index > 0 {
                    state.score += 1;
                }
                next.push(state);
            }
        }

        live = next;
    }

    completed.into_iter().min()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_matches_anything_for_free() {
        assert_eq!(fuzzy_match("anything", ""), Some(0));
        assert_eq!(fuzzy_match("", ""), Some(0));
    }

    #[test]
    fn empty_subject_rejects_nonempty_pattern() {
        assert_eq!(fuzzy_match("", "a"), None);
        assert_eq!(fuzzy_match("", "system"), None);
    }

    #[test]
    fn exact_contiguous_match_is_free() {
        assert_eq!(fuzzy_match("system", "system"), Some(0));
    }

    #[test]
    fn prefers_later_contiguous_occurrence() {
        // Greedy matching from the first 's' would scatter the pattern and
        // pay for fillers; the contiguous "system" suffix costs nothing.
        assert_eq!(fuzzy_match("sys_system", "system"), Some(0));
    }

    #[test]
    fn counts_fillers_between_matches() {
        assert_eq!(fuzzy_match("abc", "ac"), Some(1));
        assert_eq!(fuzzy_match("axxxc", "ac"), Some(3));
    }

    #[test]
    fn leading_and_trailing_chars_are_free() {
        assert_eq!(fuzzy_match("xxabcxx", "abc"), Some(0));
    }

    #[test]
    fn rejects_out_of_order_characters() {
        assert_eq!(fuzzy_match("acb", "abc"), None);
    }

    #[test]
    fn rejects_missing_characters() {
        assert_eq!(fuzzy_match("main", "mains"), None);
    }

    #[test]
    fn picks_cheapest_of_many_placements() {
        // "ab" can close immediately at (0,1) or stretch to a later 'b';
        // the minimum must win either way.
        assert_eq!(fuzzy_match("abxab", "ab"), Some(0));
        assert_eq!(fuzzy_match("a_x_b_ab", "ab"), Some(0));
    }

    #[test]
    fn matching_is_idempotent() {
        let a = fuzzy_match("fuzzy.rs", "fzy");
        let b = fuzzy_match("fuzzy.rs", "fzy");
        assert_eq!(a, b);
        assert_eq!(a, Some(2));
    }
}

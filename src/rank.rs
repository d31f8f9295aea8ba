//! Ranking of matched candidates.

use serde::Serialize;

/// A candidate that matched, with its summed per-component penalty.
/// `path` keeps the original casing for display; matching happened on a
/// lowercased copy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoredPath {
    pub score: u32,
    pub path: String,
}

/// Sort candidates ascending by score and keep at most `limit` of them.
///
/// The sort is stable, so candidates with equal scores come out in discovery
/// order. That is observed behavior, not a contract. `limit` is validated as
/// positive by the CLI layer.
pub fn rank(mut scored: Vec<ScoredPath>, limit: usize) -> Vec<ScoredPath> {
    scored.sort_by_key(|s| s.score);
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(pairs: &[(&str, u32)]) -> Vec<ScoredPath> {
        pairs
            .iter()
            .map(|(path, score)| ScoredPath {
                score: *score,
                path: path.to_string(),
            })
            .collect()
    }

    #[test]
    fn sorts_ascending_and_truncates() {
        let input = scored(&[("a", 3), ("b", 1), ("c", 2)]);
        let ranked = rank(input, 2);
        assert_eq!(ranked, scored(&[("b", 1), ("c", 2)]));
    }

    #[test]
    fn returns_everything_when_under_limit() {
        let input = scored(&[("a", 3), ("b", 1)]);
        let ranked = rank(input, 10);
        assert_eq!(ranked, scored(&[("b", 1), ("a", 3)]));
    }

    #[test]
    fn equal_scores_keep_discovery_order() {
        let input = scored(&[("later", 0), ("earlier", 1), ("also", 0)]);
        let ranked = rank(input, 3);
        assert_eq!(ranked, scored(&[("later", 0), ("also", 0), ("earlier", 1)]));
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(rank(Vec::new(), 5).is_empty());
    }
}

//! Per-component path matching.
//!
//! A pattern like `src/fz/mat` is split on separators and aligned against
//! the tail of each candidate path, component by component. Each aligned
//! pair either contributes a fuzzy penalty (see [`crate::fuzzy`]), is
//! satisfied for free by an anchor or wildcard, or rejects the candidate
//! outright. Costs sum into the candidate's total score.

use crate::fuzzy;

/// Match one pattern component against one path component.
///
/// Returns the component's cost, or `None` on rejection:
/// - an empty pattern component is a wildcard: it pins hierarchy depth but
///   accepts any component at cost 0, even in exact mode;
/// - in exact mode, or when the trimmed component is just `^`, `$`, or `^$`
///   (anchors with no text would otherwise mean match-anything), the anchor
///   markers are stripped and the remainder must equal the path component
///   verbatim;
/// - a leading `^` requires a prefix match, a trailing `$` a suffix match,
///   both together exact equality of the inner text, all at cost 0;
/// - with no anchors, the component is fuzzy-matched.
pub fn match_component(pattern: &str, component: &str, exact: bool) -> Option<u32> {
    if pattern.is_empty() {
        return Some(0);
    }

    // Trimming applies only to detecting the degenerate anchors; the
    // comparison itself strips markers from the component verbatim.
    if exact || matches!(pattern.trim(), "^" | "$" | "^$") {
        let literal = strip_anchors(pattern).2;
        return if component == literal { Some(0) } else { None };
    }

    let (prefix, suffix, literal) = strip_anchors(pattern);
    match (prefix, suffix) {
        (true, true) => (component == literal).then_some(0),
        (true, false) => component.starts_with(literal).then_some(0),
        (false, true) => component.ends_with(literal).then_some(0),
        (false, false) => fuzzy::fuzzy_match(component, pattern),
    }
}

/// Strip at most one leading `^` and one trailing `$`, reporting which were
/// present alongside the inner literal.
fn strip_anchors(pattern: &str) -> (bool, bool, &str) {
    let (prefix, rest) = match pattern.strip_prefix('^') {
        Some(rest) => (true, rest),
        None => (false, pattern),
    };
    let (suffix, literal) = match rest.strip_suffix('$') {
        Some(literal) => (true, literal),
        None => (false, rest),
    };
    (prefix, suffix, literal)
}

/// Match a whole pattern path against a candidate path.
///
/// Both are split on `/` and `\` (either separator works on any platform).
/// A pattern with more components than the candidate is rejected: it asks
/// for more hierarchy levels than exist. Otherwise the component sequences
/// are aligned at their tails and each pair is matched; any rejection
/// rejects the candidate, otherwise the costs sum. Leading candidate
/// components with no pattern counterpart are ignored, which is what lets a
/// short pattern like `c` match deep inside `tmp/a/b/c`.
pub fn match_path(pattern: &str, candidate: &str, exact: bool) -> Option<u32> {
    let pattern_components: Vec<&str> = split_components(pattern);
    let candidate_components: Vec<&str> = split_components(candidate);

    if pattern_components.len() > candidate_components.len() {
        return None;
    }

    let mut total = 0u32;
    for (pat, comp) in pattern_components
        .iter()
        .rev()
        .zip(candidate_components.iter().rev())
    {
        total += match_component(pat, comp, exact)?;
    }
    Some(total)
}

fn split_components(path: &str) -> Vec<&str> {
    path.split(['/', '\\']).collect()
}

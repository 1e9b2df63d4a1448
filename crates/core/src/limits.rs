//! Row-count and vote-threshold defaults for list queries.
//!
//! This module lives in `core` (zero internal deps) so the repository layer
//! owns the defaulting rule while handlers only forward what the client sent.
//! Neither value has an upper bound.

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Row cap applied to the movie and people listings when none is given.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Minimum vote count a rating needs to appear in the per-year ranking.
pub const DEFAULT_MIN_VOTES: i64 = 1000;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Return `value` when it is present and strictly positive, else `default`.
///
/// # Examples
///
/// ```
/// use flickfinder_core::limits::positive_or;
/// assert_eq!(positive_or(Some(7), 50), 7);
/// assert_eq!(positive_or(Some(0), 50), 50);
/// assert_eq!(positive_or(None, 50), 50);
/// ```
pub fn positive_or(value: Option<i64>, default: i64) -> i64 {
    match value {
        Some(v) if v > 0 => v,
        _ => default,
    }
}

/// Effective row cap for a list query.
pub fn list_limit(limit: Option<i64>) -> i64 {
    positive_or(limit, DEFAULT_LIST_LIMIT)
}

/// Effective vote threshold for the ratings query.
pub fn min_votes(votes: Option<i64>) -> i64 {
    positive_or(votes, DEFAULT_MIN_VOTES)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- list_limit ----------------------------------------------------------

    #[test]
    fn list_limit_uses_default_when_none() {
        assert_eq!(list_limit(None), DEFAULT_LIST_LIMIT);
    }

    #[test]
    fn list_limit_replaces_non_positive_values() {
        for raw in [0, -1, -50, i64::MIN] {
            assert_eq!(list_limit(Some(raw)), 50, "limit {raw}");
        }
    }

    #[test]
    fn list_limit_passes_through_small_value() {
        assert_eq!(list_limit(Some(1)), 1);
        assert_eq!(list_limit(Some(3)), 3);
    }

    #[test]
    fn list_limit_has_no_upper_bound() {
        assert_eq!(list_limit(Some(10_000)), 10_000);
    }

    // -- min_votes -----------------------------------------------------------

    #[test]
    fn min_votes_uses_default_when_none() {
        assert_eq!(min_votes(None), 1000);
    }

    #[test]
    fn min_votes_replaces_non_positive_values() {
        assert_eq!(min_votes(Some(0)), DEFAULT_MIN_VOTES);
        assert_eq!(min_votes(Some(-2000)), DEFAULT_MIN_VOTES);
    }

    #[test]
    fn min_votes_keeps_explicit_threshold() {
        assert_eq!(min_votes(Some(2000)), 2000);
        assert_eq!(min_votes(Some(1)), 1);
    }
}

//! Shared query parameter types for API handlers.
//!
//! Numeric query parameters arrive as raw strings and are parsed leniently:
//! an absent, empty, or malformed value means "use the default", and the
//! repository layer decides what that default is.

use serde::Deserialize;

/// `?limit=` for list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<String>,
}

impl LimitParams {
    pub fn limit(&self) -> Option<i64> {
        lenient_int(self.limit.as_deref())
    }
}

/// `?limit=&votes=` for the per-year ratings endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct RatingParams {
    pub limit: Option<String>,
    pub votes: Option<String>,
}

impl RatingParams {
    pub fn limit(&self) -> Option<i64> {
        lenient_int(self.limit.as_deref())
    }

    pub fn votes(&self) -> Option<i64> {
        lenient_int(self.votes.as_deref())
    }
}

/// Parse an optional integer, mapping anything unparsable to `None`.
pub fn lenient_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|s| s.trim().parse().ok())
}

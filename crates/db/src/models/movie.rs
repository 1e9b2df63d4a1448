//! Movie records and the per-year ratings view.

use flickfinder_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub year: i32,
}

/// A movie joined with its `ratings` row.
///
/// Serializes flat: `id, title, year, rating, votes`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct MovieRating {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub movie: Movie,
    pub rating: f64,
    pub votes: i64,
}

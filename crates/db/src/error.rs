use flickfinder_core::types::DbId;

/// Outcome of a failed repository call.
///
/// Collection queries only ever fail with [`DbError::DataAccess`]; an empty
/// result is a success. Single-entity lookups report a missing row as
/// [`DbError::NotFound`] so callers can tell absence apart from failure.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Data access failed: {0}")]
    DataAccess(#[from] sqlx::Error),
}

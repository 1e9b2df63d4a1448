use flickfinder_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `people` table. `birth` is the birth year.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Person {
    pub id: DbId,
    pub name: String,
    pub birth: i32,
}

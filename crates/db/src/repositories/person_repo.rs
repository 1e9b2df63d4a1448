//! Repository for the `people` table.

use flickfinder_core::limits;
use flickfinder_core::types::DbId;

use crate::error::DbError;
use crate::models::movie::Movie;
use crate::models::person::Person;
use crate::DbPool;

const COLUMNS: &str = "id, name, birth";

/// Read operations over people and the movies they star in.
pub struct PersonRepo;

impl PersonRepo {
    /// List people in storage order, capped at `limit` rows (default 50).
    pub async fn list(pool: &DbPool, limit: Option<i64>) -> Result<Vec<Person>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM people LIMIT ?");
        let people = sqlx::query_as::<_, Person>(&query)
            .bind(limits::list_limit(limit))
            .fetch_all(pool)
            .await?;
        Ok(people)
    }

    /// Find a person by ID, or [`DbError::NotFound`].
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Person, DbError> {
        let query = format!("SELECT {COLUMNS} FROM people WHERE id = ?");
        sqlx::query_as::<_, Person>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| {
                tracing::debug!(person_id = id, "Person lookup matched no row");
                DbError::NotFound {
                    entity: "Person",
                    id,
                }
            })
    }

    /// List the movies a person stars in. Empty when the person has none.
    pub async fn list_movies(pool: &DbPool, person_id: DbId) -> Result<Vec<Movie>, DbError> {
        let movies = sqlx::query_as::<_, Movie>(
            "SELECT m.id, m.title, m.year FROM movies m \
             INNER JOIN stars s ON m.id = s.movie_id \
             INNER JOIN people p ON s.person_id = p.id \
             WHERE p.id = ?",
        )
        .bind(person_id)
        .fetch_all(pool)
        .await?;
        Ok(movies)
    }
}

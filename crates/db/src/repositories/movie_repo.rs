//! Repository for the `movies` table and its joins.

use flickfinder_core::limits;
use flickfinder_core::types::DbId;

use crate::error::DbError;
use crate::models::movie::{Movie, MovieRating};
use crate::models::person::Person;
use crate::DbPool;

/// Column list shared across movie queries.
const COLUMNS: &str = "id, title, year";

/// Read operations over movies, their stars, and their ratings.
pub struct MovieRepo;

impl MovieRepo {
    /// List movies in storage order, capped at `limit` rows.
    ///
    /// A missing or non-positive `limit` falls back to
    /// [`limits::DEFAULT_LIST_LIMIT`].
    pub async fn list(pool: &DbPool, limit: Option<i64>) -> Result<Vec<Movie>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM movies LIMIT ?");
        let movies = sqlx::query_as::<_, Movie>(&query)
            .bind(limits::list_limit(limit))
            .fetch_all(pool)
            .await?;
        Ok(movies)
    }

    /// Find a movie by its ID.
    ///
    /// Returns [`DbError::NotFound`] when no row matches.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Movie, DbError> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = ?");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| {
                tracing::debug!(movie_id = id, "Movie lookup matched no row");
                DbError::NotFound {
                    entity: "Movie",
                    id,
                }
            })
    }

    /// List the people starring in a movie.
    ///
    /// Does not check that the movie exists; an unknown ID yields an empty list.
    pub async fn list_stars(pool: &DbPool, movie_id: DbId) -> Result<Vec<Person>, DbError> {
        let people = sqlx::query_as::<_, Person>(
            "SELECT p.id, p.name, p.birth FROM people p \
             INNER JOIN stars s ON p.id = s.person_id \
             INNER JOIN movies m ON s.movie_id = m.id \
             WHERE m.id = ?",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await?;
        Ok(people)
    }

    /// Highest rated movies released in `year` with at least `min_votes` votes.
    ///
    /// Ordered by rating descending; ties keep storage order. `limit` and
    /// `min_votes` fall back to 50 and 1000 when missing or non-positive.
    pub async fn top_rated_by_year(
        pool: &DbPool,
        limit: Option<i64>,
        min_votes: Option<i64>,
        year: i32,
    ) -> Result<Vec<MovieRating>, DbError> {
        let limit = limits::list_limit(limit);
        let min_votes = limits::min_votes(min_votes);
        tracing::debug!(year, limit, min_votes, "Querying top rated movies");

        let ratings = sqlx::query_as::<_, MovieRating>(
            "SELECT m.id, m.title, m.year, r.rating, r.votes FROM movies m \
             INNER JOIN ratings r ON m.id = r.movie_id \
             WHERE r.votes >= ? AND m.year = ? \
             ORDER BY r.rating DESC \
             LIMIT ?",
        )
        .bind(min_votes)
        .bind(year)
        .bind(limit)
        .fetch_all(pool)
        .await?;
        Ok(ratings)
    }
}

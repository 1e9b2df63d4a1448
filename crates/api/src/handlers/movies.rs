//! Handlers for the `/movies` resource.

use axum::extract::State;
use axum::Json;
use flickfinder_core::types::DbId;
use flickfinder_db::models::movie::{Movie, MovieRating};
use flickfinder_db::models::person::Person;
use flickfinder_db::repositories::MovieRepo;

use crate::error::AppResult;
use crate::extract::{PathParam, QueryParam};
use crate::query::{LimitParams, RatingParams};
use crate::state::AppState;

/// GET /api/v1/movies
///
/// List movies, capped at `?limit=` rows (default 50).
pub async fn list_movies(
    State(state): State<AppState>,
    QueryParam(params): QueryParam<LimitParams>,
) -> AppResult<Json<Vec<Movie>>> {
    let movies = MovieRepo::list(&state.pool, params.limit()).await?;

    tracing::debug!(count = movies.len(), "Listed movies");

    Ok(Json(movies))
}

/// GET /api/v1/movies/{id}
pub async fn get_movie(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(movie))
}

/// GET /api/v1/movies/{id}/stars
///
/// People starring in the movie. Responds 404 when the movie itself does not
/// exist, so an empty list always means "exists, but no stars".
pub async fn list_stars(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Vec<Person>>> {
    MovieRepo::find_by_id(&state.pool, id).await?;

    let people = MovieRepo::list_stars(&state.pool, id).await?;

    tracing::debug!(movie_id = id, count = people.len(), "Listed movie stars");

    Ok(Json(people))
}

/// GET /api/v1/movies/ratings/{year}
///
/// Highest rated movies of `year`, sorted by rating descending. Accepts
/// `?limit=` (default 50) and `?votes=` (minimum vote count, default 1000).
pub async fn top_rated_by_year(
    State(state): State<AppState>,
    PathParam(year): PathParam<i32>,
    QueryParam(params): QueryParam<RatingParams>,
) -> AppResult<Json<Vec<MovieRating>>> {
    let ratings =
        MovieRepo::top_rated_by_year(&state.pool, params.limit(), params.votes(), year).await?;

    tracing::debug!(year, count = ratings.len(), "Listed top rated movies");

    Ok(Json(ratings))
}

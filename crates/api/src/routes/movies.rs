//! Route definitions for the `/movies` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::movies;
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET /                    -> list_movies
/// GET /ratings/{year}      -> top_rated_by_year
/// GET /{id}                -> get_movie
/// GET /{id}/stars          -> list_stars
/// ```
///
/// The static `ratings` segment takes priority over `{id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::list_movies))
        .route("/ratings/{year}", get(movies::top_rated_by_year))
        .route("/{id}", get(movies::get_movie))
        .route("/{id}/stars", get(movies::list_stars))
}

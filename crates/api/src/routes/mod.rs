pub mod health;
pub mod movies;
pub mod people;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /movies                                          list (?limit)
/// /movies/{id}                                     get by id
/// /movies/{id}/stars                               people starring in the movie
/// /movies/ratings/{year}                           top rated for a year (?limit, ?votes)
///
/// /people                                          list (?limit)
/// /people/{id}                                     get by id
/// /people/{id}/movies                              movies the person stars in
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/movies", movies::router())
        .nest("/people", people::router())
}

//! Route definitions for the `/people` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::people;
use crate::state::AppState;

/// Routes mounted at `/people`.
///
/// ```text
/// GET /                    -> list_people
/// GET /{id}                -> get_person
/// GET /{id}/movies         -> list_movies
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(people::list_people))
        .route("/{id}", get(people::get_person))
        .route("/{id}/movies", get(people::list_movies))
}

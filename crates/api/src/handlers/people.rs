//! Handlers for the `/people` resource.

use axum::extract::State;
use axum::Json;
use flickfinder_core::types::DbId;
use flickfinder_db::models::movie::Movie;
use flickfinder_db::models::person::Person;
use flickfinder_db::repositories::PersonRepo;

use crate::error::AppResult;
use crate::extract::{PathParam, QueryParam};
use crate::query::LimitParams;
use crate::state::AppState;

/// GET /api/v1/people
pub async fn list_people(
    State(state): State<AppState>,
    QueryParam(params): QueryParam<LimitParams>,
) -> AppResult<Json<Vec<Person>>> {
    let people = PersonRepo::list(&state.pool, params.limit()).await?;

    tracing::debug!(count = people.len(), "Listed people");

    Ok(Json(people))
}

/// GET /api/v1/people/{id}
pub async fn get_person(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Person>> {
    let person = PersonRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(person))
}

/// GET /api/v1/people/{id}/movies
///
/// Movies the person stars in; 404 when the person does not exist.
pub async fn list_movies(
    State(state): State<AppState>,
    PathParam(id): PathParam<DbId>,
) -> AppResult<Json<Vec<Movie>>> {
    PersonRepo::find_by_id(&state.pool, id).await?;

    let movies = PersonRepo::list_movies(&state.pool, id).await?;

    tracing::debug!(person_id = id, count = movies.len(), "Listed movies for person");

    Ok(Json(movies))
}

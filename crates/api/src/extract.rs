//! Request extractors for path and query parameters.
//!
//! Path parameters are strict: a malformed `{id}` or `{year}` is a client
//! error reported through [`AppError`]. Query parameters are lenient: they
//! never reject a request, the handler always gets a value.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Path, Query};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::AppError;

/// Like [`Path`], but a value that fails to deserialize (e.g. `/movies/abc`)
/// becomes a JSON `400 BAD_REQUEST` instead of axum's plain-text rejection.
///
/// ```ignore
/// async fn get_movie(PathParam(id): PathParam<DbId>) -> AppResult<Json<Movie>> { ... }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Query string extractor that cannot fail.
///
/// Unlike [`Query`], a repeated key keeps its last value (`?limit=2&limit=3`
/// reads as `limit=3`) and a query string that does not fit `T` yields
/// `T::default()`. `T` is expected to hold `Option<String>` fields that the
/// handler parses itself (see [`crate::query`]).
#[derive(Debug, Clone, Default)]
pub struct QueryParam<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryParam<T>
where
    T: DeserializeOwned + Default + Send,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(decode_query(&parts.uri)))
    }
}

/// Decode a URI's query into `T`, last value wins per key.
pub fn decode_query<T>(uri: &axum::http::Uri) -> T
where
    T: DeserializeOwned + Default,
{
    let pairs = Query::<Vec<(String, String)>>::try_from_uri(uri)
        .map(|Query(pairs)| pairs)
        .unwrap_or_default();

    let fields: Map<String, Value> = pairs
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect();

    serde_json::from_value(Value::Object(fields)).unwrap_or_default()
}

//! Request handlers for movies and people.
//!
//! Each submodule provides async handler functions for a single entity type.
//! Handlers delegate to the corresponding repository in `flickfinder_db` and
//! map errors via [`AppError`](crate::error::AppError).

pub mod movies;
pub mod people;

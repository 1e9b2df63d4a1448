//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&DbPool` as the first argument. Every method issues exactly
//! one parameterized statement.

pub mod movie_repo;
pub mod person_repo;

pub use movie_repo::MovieRepo;
pub use person_repo::PersonRepo;

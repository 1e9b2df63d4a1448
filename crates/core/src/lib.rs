//! Shared primitives for the FlickFinder query service.
//!
//! Pure logic only: no I/O, no database or HTTP types.

pub mod limits;
pub mod types;

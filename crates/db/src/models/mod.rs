//! Record structs mapped from query rows.
//!
//! Each struct derives `FromRow` for row mapping and `Serialize` for the
//! response body; field names are the wire contract.

pub mod movie;
pub mod person;

//! Service layer owning the course catalog state and its CRUD operations.
//! - Keeps business rules (presence validation, first-match semantics) out of the HTTP layer.
//! - Provides clear error types that map one-to-one onto wire responses.

pub mod courses;
pub mod errors;

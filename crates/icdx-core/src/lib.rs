//! icdx-core
//!
//! Pure domain types: the interpretation request, the response-contract
//! schemas, and the validator that gates every model payload.
//! No AWS SDK dependency; this is the shared vocabulary of the icdx system.

pub mod error;
pub mod models;
pub mod schema;
pub mod validate;

//! icdx-bedrock
//!
//! Bedrock model discovery, the Converse completion provider, and the
//! interpretation pipeline that turns an ICD-10 code or diagnostic phrase
//! into a contract-validated record.

pub mod converse;
pub mod error;
pub mod interpret;
pub mod models;
pub mod prompt;
pub mod provider;
pub mod tokens;

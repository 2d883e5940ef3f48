pub mod cost;
pub mod interpretation;
pub mod profile;
pub mod request;
pub mod summary;
pub mod token_count;

//! Core domain concepts.
//!
//! - [`query::Query`]: the validated, fixed question posed to the model

pub mod query;

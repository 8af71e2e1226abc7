//! REST API for the issue registry

pub mod error;
pub mod extractors;
pub mod issues;

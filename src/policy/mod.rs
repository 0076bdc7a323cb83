//! Search policy definitions.

pub mod search;

pub use search::{SearchPolicy, PolicyError, MAX_PATHS_ENV, MAX_DEPTH_ENV};

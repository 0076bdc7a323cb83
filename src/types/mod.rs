//! Core types for the courier network.

pub mod node;
pub mod edge;
pub mod path;

pub use node::{NodeId, Node};
pub use edge::Edge;
pub use path::Path;

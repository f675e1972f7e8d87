//! SocialGraph — in-memory social network graph engine.
//!
//! Models people as nodes and their relationships as undirected, unweighted
//! edges, and answers structural queries over the network: shortest paths,
//! influence ranking by degree, and clusters of connected people. The engine
//! is synchronous and pure; the `sgraph` binary is a thin shell over it.

pub mod cli;
pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::QueryEngine;
pub use graph::{GraphBuilder, IdentityTable, RenderData, Snapshot, SocialGraph};
pub use types::{Edge, GraphError, GraphResult, NodeId, Person};

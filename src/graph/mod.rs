//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod identity;
pub mod snapshot;
pub mod social_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use identity::IdentityTable;
pub use snapshot::{RenderData, Snapshot};
pub use social_graph::SocialGraph;

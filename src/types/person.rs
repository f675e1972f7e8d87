//! The node record — a person identified by display name.

use serde::Serialize;

use super::NodeId;

/// A person in the network.
///
/// The display name is the unique, case-sensitive public key; the id is the
/// stable internal identifier assigned by the graph and kept for the node's
/// whole lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    /// Stable identifier, assigned on insertion and never reused.
    pub id: NodeId,
    /// Unique display name.
    pub name: String,
}

impl Person {
    /// Create a person record with a pre-assigned id (builder path).
    pub fn new(id: NodeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

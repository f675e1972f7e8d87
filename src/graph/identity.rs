//! Name resolution — maps display names to stable node identifiers.

use std::collections::HashMap;

use crate::types::{GraphError, GraphResult, NodeId, Person};

/// Maps each display name to its stable id and allocates new ids.
///
/// The table is a derived index owned alongside the graph: a name is
/// registered here iff its node is present in the node set. Identifiers are
/// allocated monotonically and never reused, so removing one person leaves
/// every other id intact.
pub struct IdentityTable {
    names: HashMap<String, NodeId>,
    next_id: NodeId,
}

impl IdentityTable {
    /// Create a new, empty table.
    pub fn new() -> Self {
        Self {
            names: HashMap::new(),
            next_id: 0,
        }
    }

    /// Register a new name, allocating the next stable id.
    pub fn register(&mut self, name: &str) -> GraphResult<NodeId> {
        if name.is_empty() {
            return Err(GraphError::EmptyName);
        }
        if self.names.contains_key(name) {
            return Err(GraphError::AlreadyExists(name.to_string()));
        }
        let id = self.next_id;
        self.next_id += 1;
        self.names.insert(name.to_string(), id);
        Ok(id)
    }

    /// Look up the id registered for a name.
    pub fn resolve(&self, name: &str) -> GraphResult<NodeId> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::PersonNotFound(name.to_string()))
    }

    /// Remove a name mapping, returning the retired id. The id is not
    /// reallocated afterwards.
    pub fn unregister(&mut self, name: &str) -> GraphResult<NodeId> {
        self.names
            .remove(name)
            .ok_or_else(|| GraphError::PersonNotFound(name.to_string()))
    }

    /// Whether a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Rebuild the mapping from a slice of people with pre-assigned ids.
    /// The id counter resumes past the highest id seen.
    pub fn rebuild(&mut self, people: &[Person]) -> GraphResult<()> {
        self.names.clear();
        for person in people {
            if person.name.is_empty() {
                return Err(GraphError::EmptyName);
            }
            if self
                .names
                .insert(person.name.clone(), person.id)
                .is_some()
            {
                return Err(GraphError::AlreadyExists(person.name.clone()));
            }
        }
        self.next_id = people.iter().map(|p| p.id + 1).max().unwrap_or(0);
        Ok(())
    }

    /// Get a reference to the underlying map (for snapshotting).
    pub fn inner(&self) -> &HashMap<String, NodeId> {
        &self.names
    }
}

impl Default for IdentityTable {
    fn default() -> Self {
        Self::new()
    }
}

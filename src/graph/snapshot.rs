//! Immutable point-in-time view of the graph, used by queries and rendering.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::{Edge, NodeId, Person};

/// An owned, read-only copy of the graph state at a point in time.
///
/// Queries run against snapshots rather than the live store, so they can
/// never observe a mutation in progress; the external visualizer consumes
/// the same view through [`Snapshot::render`].
#[derive(Debug, Clone)]
pub struct Snapshot {
    people: Vec<Person>,
    edges: Vec<Edge>,
    adjacency: HashMap<NodeId, Vec<NodeId>>,
    names: HashMap<String, NodeId>,
}

/// Plain node/edge name lists for an external visualization collaborator.
/// The engine imposes no layout or styling.
#[derive(Debug, Clone, Serialize)]
pub struct RenderData {
    /// Display names, in creation order.
    pub nodes: Vec<String>,
    /// Connections as name pairs, one per undirected edge.
    pub edges: Vec<(String, String)>,
}

impl Snapshot {
    pub(crate) fn new(
        people: Vec<Person>,
        edges: Vec<Edge>,
        adjacency: HashMap<NodeId, Vec<NodeId>>,
        names: HashMap<String, NodeId>,
    ) -> Self {
        Self {
            people,
            edges,
            adjacency,
            names,
        }
    }

    /// Number of people.
    pub fn node_count(&self) -> usize {
        self.people.len()
    }

    /// Number of connections.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Whether the network has no people.
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// All people, in creation order.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// All connections, in canonical order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Get a person by id.
    pub fn person(&self, id: NodeId) -> Option<&Person> {
        // Fast path: before any removal, people[id] has id == id
        let idx = id as usize;
        if idx < self.people.len() && self.people[idx].id == id {
            return Some(&self.people[idx]);
        }
        self.people.iter().find(|p| p.id == id)
    }

    /// Resolve a name to its id.
    pub fn resolve(&self, name: &str) -> Option<NodeId> {
        self.names.get(name).copied()
    }

    /// The display name for an id.
    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        self.person(id).map(|p| p.name.as_str())
    }

    /// Nodes adjacent to `id`, in ascending id order (= creation order).
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.adjacency.get(&id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Number of connections incident to a node.
    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).len()
    }

    /// Export plain name lists for rendering.
    pub fn render(&self) -> RenderData {
        let nodes = self.people.iter().map(|p| p.name.clone()).collect();
        let edges = self
            .edges
            .iter()
            .filter_map(|e| {
                let (lo, hi) = e.endpoints();
                Some((self.name_of(lo)?.to_string(), self.name_of(hi)?.to_string()))
            })
            .collect();
        RenderData { nodes, edges }
    }
}

//! Core graph store — the node set, edge set, and adjacency relation.

use std::collections::HashMap;

use log::debug;

use crate::types::{Edge, GraphError, GraphResult, NodeId, Person};

use super::identity::IdentityTable;
use super::snapshot::Snapshot;

/// The in-memory social graph: people and the undirected connections
/// between them.
///
/// People are held in creation order and keep their ids for life. Every
/// mutation either fully succeeds, leaving all invariants intact, or fails
/// with no state change.
pub struct SocialGraph {
    /// All people, in creation order.
    people: Vec<Person>,
    /// All connections as canonical pairs, kept sorted.
    edges: Vec<Edge>,
    /// Adjacency: node id -> sorted neighbor ids.
    adjacency: HashMap<NodeId, Vec<NodeId>>,
    /// Name -> id index, kept in lockstep with `people`.
    identity: IdentityTable,
}

impl SocialGraph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            people: Vec::new(),
            edges: Vec::new(),
            adjacency: HashMap::new(),
            identity: IdentityTable::new(),
        }
    }

    /// Create from pre-existing records (used by the builder).
    ///
    /// Validates the full invariant set: unique non-empty names, no
    /// self-loops, no duplicate pairs, and every edge endpoint present.
    pub fn from_parts(people: Vec<Person>, edges: Vec<Edge>) -> GraphResult<Self> {
        let mut identity = IdentityTable::new();
        identity.rebuild(&people)?;

        let mut graph = Self {
            people,
            edges: Vec::new(),
            adjacency: HashMap::new(),
            identity,
        };
        graph.people.sort_by_key(|p| p.id);

        let mut sorted = edges;
        sorted.sort_unstable();
        for pair in sorted.windows(2) {
            if pair[0] == pair[1] {
                let (lo, hi) = pair[0].endpoints();
                return Err(GraphError::DuplicateEdge(graph.label(lo), graph.label(hi)));
            }
        }
        for edge in &sorted {
            let (lo, hi) = edge.endpoints();
            if lo == hi {
                return Err(GraphError::SelfLoop(graph.label(lo)));
            }
            if graph.person(lo).is_none() || graph.person(hi).is_none() {
                return Err(GraphError::EndpointsNotFound(
                    graph.label(lo),
                    graph.label(hi),
                ));
            }
        }

        graph.edges = sorted;
        graph.rebuild_adjacency();
        Ok(graph)
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

    /// The display name for an id.
    pub fn name_of(&self, id: NodeId) -> Option<&str> {
        self.person(id).map(|p| p.name.as_str())
    }

    /// Whether a name is in the network.
    pub fn contains(&self, name: &str) -> bool {
        self.identity.contains(name)
    }

    /// Resolve a name to its stable id.
    pub fn resolve(&self, name: &str) -> GraphResult<NodeId> {
        self.identity.resolve(name)
    }

    /// Number of connections incident to a node.
    pub fn degree(&self, id: NodeId) -> usize {
        self.neighbors(id).len()
    }

    /// Nodes adjacent to `id`, in ascending id order (= creation order).
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.adjacency.get(&id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Add a person to the network.
    pub fn add_person(&mut self, name: &str) -> GraphResult<NodeId> {
        let id = self.identity.register(name)?;
        self.people.push(Person::new(id, name));
        debug!("added '{}' as node {}", name, id);
        Ok(id)
    }

    /// Remove a person and every connection touching them.
    pub fn remove_person(&mut self, name: &str) -> GraphResult<Person> {
        let id = self.identity.resolve(name)?;
        let pos = self
            .people
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| GraphError::PersonNotFound(name.to_string()))?;

        self.identity.unregister(name)?;
        let removed = self.people.remove(pos);

        // Cascade: drop every edge incident to the removed node
        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(id));
        self.rebuild_adjacency();
        debug!(
            "removed '{}' and {} incident connections",
            name,
            before - self.edges.len()
        );

        Ok(removed)
    }

    /// Add a connection between two named people.
    pub fn add_connection(&mut self, a: &str, b: &str) -> GraphResult<()> {
        let (first, second) = match (self.identity.resolve(a), self.identity.resolve(b)) {
            (Ok(x), Ok(y)) => (x, y),
            _ => {
                return Err(GraphError::EndpointsNotFound(
                    a.to_string(),
                    b.to_string(),
                ))
            }
        };
        if first == second {
            return Err(GraphError::SelfLoop(a.to_string()));
        }

        let edge = Edge::new(first, second);
        if self.edges.binary_search(&edge).is_ok() {
            return Err(GraphError::DuplicateEdge(a.to_string(), b.to_string()));
        }

        self.edges.push(edge);
        self.rebuild_adjacency();
        debug!("connected '{}' and '{}'", a, b);
        Ok(())
    }

    /// Remove the connection between two named people.
    ///
    /// A pair with a vanished endpoint has no edge, so it reports the same
    /// not-found condition as a never-connected pair.
    pub fn remove_connection(&mut self, a: &str, b: &str) -> GraphResult<()> {
        let (first, second) = match (self.identity.resolve(a), self.identity.resolve(b)) {
            (Ok(x), Ok(y)) => (x, y),
            _ => return Err(GraphError::EdgeNotFound(a.to_string(), b.to_string())),
        };
        if first == second {
            return Err(GraphError::EdgeNotFound(a.to_string(), b.to_string()));
        }

        match self.edges.binary_search(&Edge::new(first, second)) {
            Ok(pos) => {
                self.edges.remove(pos);
                self.rebuild_adjacency();
                debug!("disconnected '{}' and '{}'", a, b);
                Ok(())
            }
            Err(_) => Err(GraphError::EdgeNotFound(a.to_string(), b.to_string())),
        }
    }

    /// Whether two named people are directly connected. Symmetric in its
    /// arguments.
    pub fn has_connection(&self, a: &str, b: &str) -> bool {
        match (self.identity.resolve(a), self.identity.resolve(b)) {
            (Ok(x), Ok(y)) if x != y => self.edges.binary_search(&Edge::new(x, y)).is_ok(),
            _ => false,
        }
    }

    /// Take an immutable point-in-time copy for queries and rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(
            self.people.clone(),
            self.edges.clone(),
            self.adjacency.clone(),
            self.identity.inner().clone(),
        )
    }

    /// Rebuild the adjacency map from the current edge list.
    fn rebuild_adjacency(&mut self) {
        self.adjacency.clear();
        self.edges.sort_unstable();

        for edge in &self.edges {
            let (lo, hi) = edge.endpoints();
            self.adjacency.entry(lo).or_default().push(hi);
            self.adjacency.entry(hi).or_default().push(lo);
        }

        for list in self.adjacency.values_mut() {
            list.sort_unstable();
        }
    }

    /// Display label for an id, for error payloads during bulk validation.
    fn label(&self, id: NodeId) -> String {
        self.name_of(id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{id}"))
    }
}

impl Default for SocialGraph {
    fn default() -> Self {
        Self::new()
    }
}

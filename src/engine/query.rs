//! Query executor — structural queries over a snapshot.

use std::collections::HashSet;

use crate::graph::traversal::{bfs_component, bfs_path};
use crate::graph::Snapshot;
use crate::types::{GraphError, GraphResult, NodeId};

/// The query engine supports all structural queries.
///
/// Stateless: every query is a pure function of the snapshot it is given —
/// no mutation, no hidden state.
pub struct QueryEngine;

impl QueryEngine {
    /// Create a new query engine.
    pub fn new() -> Self {
        Self
    }

    /// Shortest path by hop count between two named people.
    ///
    /// Returns the full name sequence from `from` to `to` inclusive, the
    /// single-element path when both endpoints are the same person. An
    /// unreachable target is a normal outcome for a disconnected network,
    /// reported as [`GraphError::NoPathExists`].
    pub fn shortest_path(
        &self,
        snapshot: &Snapshot,
        from: &str,
        to: &str,
    ) -> GraphResult<Vec<String>> {
        let source = snapshot
            .resolve(from)
            .ok_or_else(|| GraphError::PersonNotFound(from.to_string()))?;
        let target = snapshot
            .resolve(to)
            .ok_or_else(|| GraphError::PersonNotFound(to.to_string()))?;

        let ids = bfs_path(snapshot, source, target)
            .ok_or_else(|| GraphError::NoPathExists(from.to_string(), to.to_string()))?;

        Ok(self.names(snapshot, &ids))
    }

    /// The person with the most connections and their degree.
    ///
    /// Ties break to the earliest-created person. An empty network is a
    /// legitimate, handleable state reported as [`GraphError::EmptyNetwork`].
    pub fn max_degree(&self, snapshot: &Snapshot) -> GraphResult<(String, usize)> {
        let mut best: Option<(&str, usize)> = None;
        for person in snapshot.people() {
            let degree = snapshot.degree(person.id);
            match best {
                Some((_, max)) if degree <= max => {}
                _ => best = Some((person.name.as_str(), degree)),
            }
        }
        best.map(|(name, degree)| (name.to_string(), degree))
            .ok_or(GraphError::EmptyNetwork)
    }

    /// Partition the network into clusters of connected people.
    ///
    /// Sweeps people in creation order, collecting each unvisited person's
    /// whole component; cluster order is first-visit order and members are
    /// listed in creation order. Every person lands in exactly one cluster;
    /// isolated people form singletons.
    pub fn components(&self, snapshot: &Snapshot) -> Vec<Vec<String>> {
        let mut visited: HashSet<NodeId> = HashSet::new();
        let mut clusters = Vec::new();

        for person in snapshot.people() {
            if visited.contains(&person.id) {
                continue;
            }
            let members = bfs_component(snapshot, person.id, &mut visited);
            clusters.push(self.names(snapshot, &members));
        }

        clusters
    }

    /// Direct connections of a named person, in creation order.
    pub fn neighbors_of(&self, snapshot: &Snapshot, name: &str) -> GraphResult<Vec<String>> {
        let id = snapshot
            .resolve(name)
            .ok_or_else(|| GraphError::PersonNotFound(name.to_string()))?;
        Ok(self.names(snapshot, snapshot.neighbors(id)))
    }

    /// Map ids back to display names, skipping any id the snapshot no
    /// longer knows (cannot happen for ids the snapshot itself produced).
    fn names(&self, snapshot: &Snapshot, ids: &[NodeId]) -> Vec<String> {
        ids.iter()
            .filter_map(|&id| snapshot.name_of(id).map(str::to_string))
            .collect()
    }
}

impl Default for QueryEngine {
    fn default() -> Self {
        Self::new()
    }
}

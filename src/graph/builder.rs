//! Fluent API for building SocialGraph instances.

use crate::types::{Edge, GraphResult, NodeId, Person};

use super::SocialGraph;

/// Fluent builder for constructing a SocialGraph.
///
/// People get ids in the order they are added; `build` validates the full
/// invariant set through [`SocialGraph::from_parts`].
pub struct GraphBuilder {
    people: Vec<Person>,
    edges: Vec<Edge>,
    next_id: NodeId,
}

impl GraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            people: Vec::new(),
            edges: Vec::new(),
            next_id: 0,
        }
    }

    /// Add a person, returning their id.
    pub fn person(&mut self, name: &str) -> NodeId {
        let id = self.next_id;
        self.next_id += 1;
        self.people.push(Person::new(id, name));
        id
    }

    /// Add a connection between two ids.
    pub fn connect(&mut self, a: NodeId, b: NodeId) -> &mut Self {
        self.edges.push(Edge::new(a, b));
        self
    }

    /// Build the final graph.
    pub fn build(self) -> GraphResult<SocialGraph> {
        SocialGraph::from_parts(self.people, self.edges)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Error types for the social-graph library.

use thiserror::Error;

/// All errors that can occur in the social-graph library.
///
/// Every variant is an expected, recoverable condition reported to the
/// caller; none terminates an interactive session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A person with this name is already registered.
    #[error("'{0}' already exists in the network")]
    AlreadyExists(String),

    /// The named person is not in the network.
    #[error("'{0}' not found in the network")]
    PersonNotFound(String),

    /// A connection was requested where at least one endpoint is missing.
    #[error("Both '{0}' and '{1}' need to be in the network")]
    EndpointsNotFound(String, String),

    /// No connection exists between the two named people.
    #[error("No connection found between '{0}' and '{1}'")]
    EdgeNotFound(String, String),

    /// A connection from a person to themselves was requested.
    #[error("Cannot connect '{0}' to themselves")]
    SelfLoop(String),

    /// The two people are already connected.
    #[error("'{0}' and '{1}' are already connected")]
    DuplicateEdge(String, String),

    /// Search exhausted the component without reaching the target.
    #[error("No path found between '{0}' and '{1}'")]
    NoPathExists(String, String),

    /// A ranking query was run against a network with no people.
    #[error("The network is empty")]
    EmptyNetwork,

    /// A person name must be a non-empty string.
    #[error("Person name cannot be empty")]
    EmptyName,
}

/// Convenience result type for social-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

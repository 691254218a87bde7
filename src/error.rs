//! Errors raised while building a [`Graph`](crate::graph::Graph), searching it or presenting the
//! results.

use thiserror::Error;

use crate::NodeID;

/// The topology handed to the [`GraphBuilder`](crate::graph::GraphBuilder) is not a valid graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StructuralError {
    /// An Edge names a Node that was never added
    #[error("edge {a} -- {b} references node {missing}, which is not part of the graph")]
    MissingEndpoint {
        /// the first endpoint of the Edge
        a: NodeID,
        /// the second endpoint of the Edge
        b: NodeID,
        /// the endpoint that does not exist
        missing: NodeID,
    },

    /// An Edge connects a Node to itself
    #[error("edge {0} -- {0} connects a node to itself")]
    SelfLoop(NodeID),

    /// A second Edge between the same two Nodes, in either direction
    #[error("edge {a} -- {b} is declared more than once")]
    DuplicateEdge {
        /// the first endpoint of the repeated Edge
        a: NodeID,
        /// the second endpoint of the repeated Edge
        b: NodeID,
    },

    /// Two Nodes with the same id
    #[error("node {0} is declared more than once")]
    DuplicateNode(NodeID),
}

/// Errors of the graph construction and the shortest path search.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The topology is not a valid graph
    #[error("structural error: {0}")]
    Structural(#[from] StructuralError),

    /// An Edge weight is zero, negative or not finite
    #[error("edge {a} -- {b} has weight {weight}, but weights must be positive and finite")]
    InvalidWeight {
        /// the first endpoint of the Edge
        a: NodeID,
        /// the second endpoint of the Edge
        b: NodeID,
        /// the rejected weight
        weight: f64,
    },

    /// A requested Node is not part of the Graph
    #[error("node {0} does not exist in the graph")]
    UnknownNode(NodeID),

    /// The route of the destination to itself was requested
    #[error("node {0} is the destination and has no route to itself")]
    SourceIsDestination(NodeID),

    /// The interrupt flag of the search was set
    #[error("the search was interrupted")]
    Interrupted,

    /// The search ran longer than its time limit
    #[error("the search exceeded its time limit")]
    TimeLimitExceeded,
}

impl GraphError {
    /// `true` if the error is caused by the described site or the requested Nodes, `false` if the
    /// search itself was stopped.
    /// ```
    /// # use site_routing::error::{GraphError, StructuralError};
    /// assert!(GraphError::from(StructuralError::SelfLoop(1)).is_input_error());
    /// assert!(GraphError::UnknownNode(12).is_input_error());
    /// assert!(!GraphError::Interrupted.is_input_error());
    /// ```
    pub fn is_input_error(&self) -> bool {
        match self {
            GraphError::Structural(_)
            | GraphError::InvalidWeight { .. }
            | GraphError::UnknownNode(_)
            | GraphError::SourceIsDestination(_) => true,
            GraphError::Interrupted | GraphError::TimeLimitExceeded => false,
        }
    }
}

/// Errors while writing a [`RouteDocument`](crate::document::RouteDocument).
#[derive(Error, Debug)]
pub enum ExportError {
    /// The document could not be serialized
    #[error("failed to serialize the route document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The document could not be written
    #[error("failed to write the route document: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors of a [`Renderer`](crate::render::Renderer).
#[derive(Error, Debug)]
pub enum RenderError {
    /// No Node has a position, so there is no layout to draw
    #[error("no node in the scene has a position")]
    NothingToDraw,

    /// The positions span a larger grid than a renderer is willing to allocate
    #[error("the site layout needs more than {limit} grid cells")]
    TooLarge {
        /// the largest number of cells a renderer will allocate
        limit: usize,
    },

    /// The output could not be written
    #[error("failed to write the rendering: {0}")]
    Io(#[from] std::io::Error),
}

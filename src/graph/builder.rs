use super::{Edge, Graph, Node, WeightPolicy, WeightTier};
use crate::{
    error::{GraphError, StructuralError},
    path::Cost,
    NodeID, Point,
};

use hashbrown::HashSet;

/// Collects Nodes and Edges and validates them into a [`Graph`].
///
/// Nothing is checked until [`build`](GraphBuilder::build) is called.
///
/// ## Examples
/// ```
/// use site_routing::graph::{GraphBuilder, WeightPolicy, WeightTier};
///
/// let graph = GraphBuilder::new()
///     .node(0, Some((1, 0)))
///     .node(1, Some((0, 0)))
///     .node(2, None)
///     .edge(0, 1, 0.5)
///     .tier_edge(1, 2, WeightTier::Long, &WeightPolicy::DEFAULT)
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_between(2, 1).unwrap().weight(), 2.0);
/// ```
///
/// An Edge to a missing Node is rejected:
/// ```
/// # use site_routing::graph::GraphBuilder;
/// # use site_routing::error::{GraphError, StructuralError};
/// let result = GraphBuilder::new().node(0, None).edge(0, 1, 1.0).build();
///
/// assert_eq!(
///     result.unwrap_err(),
///     GraphError::Structural(StructuralError::MissingEndpoint { a: 0, b: 1, missing: 1 })
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Creates an empty GraphBuilder
    pub fn new() -> GraphBuilder {
        GraphBuilder::default()
    }

    /// Adds a Node with an optional layout position
    pub fn node(mut self, id: NodeID, pos: Option<Point>) -> GraphBuilder {
        self.nodes.push(Node::new(id, pos));
        self
    }

    /// Adds several Nodes at once
    pub fn nodes(mut self, nodes: impl IntoIterator<Item = (NodeID, Option<Point>)>) -> GraphBuilder {
        self.nodes
            .extend(nodes.into_iter().map(|(id, pos)| Node::new(id, pos)));
        self
    }

    /// Adds an undirected Edge with an explicit weight
    pub fn edge(mut self, a: NodeID, b: NodeID, weight: Cost) -> GraphBuilder {
        self.edges.push(Edge::new(a, b, weight, None));
        self
    }

    /// Adds an undirected Edge whose weight is looked up from `policy`
    pub fn tier_edge(
        mut self,
        a: NodeID,
        b: NodeID,
        tier: WeightTier,
        policy: &WeightPolicy,
    ) -> GraphBuilder {
        self.edges
            .push(Edge::new(a, b, policy.weight(tier), Some(tier)));
        self
    }

    /// Validates the collected Nodes and Edges and creates the Graph.
    ///
    /// Nodes are checked first, then every Edge in the order it was added.
    /// The first violation is returned.
    ///
    /// ## Errors
    /// - [`StructuralError::DuplicateNode`] if an id was added twice
    /// - [`StructuralError::MissingEndpoint`] if an Edge references an unknown Node
    /// - [`StructuralError::SelfLoop`] if an Edge connects a Node to itself
    /// - [`StructuralError::DuplicateEdge`] if two Edges connect the same pair of Nodes
    /// - [`GraphError::InvalidWeight`] if a weight is not positive or not finite
    pub fn build(self) -> Result<Graph, GraphError> {
        let mut ids = HashSet::with_capacity(self.nodes.len());
        for node in self.nodes.iter() {
            if !ids.insert(node.id()) {
                return Err(StructuralError::DuplicateNode(node.id()).into());
            }
        }

        let mut seen = HashSet::with_capacity(self.edges.len());
        for edge in self.edges.iter() {
            validate_edge(edge, &ids)?;
            if !seen.insert(edge.key()) {
                let (a, b) = edge.endpoints();
                return Err(StructuralError::DuplicateEdge { a, b }.into());
            }
        }

        let graph = Graph::new(self.nodes, self.edges);
        log::debug!(
            "built graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

fn validate_edge(edge: &Edge, ids: &HashSet<NodeID>) -> Result<(), GraphError> {
    let (a, b) = edge.endpoints();
    for missing in [a, b] {
        if !ids.contains(&missing) {
            return Err(StructuralError::MissingEndpoint { a, b, missing }.into());
        }
    }
    if a == b {
        return Err(StructuralError::SelfLoop(a).into());
    }
    let weight = edge.weight();
    if !(weight.is_finite() && weight > 0.0) {
        return Err(GraphError::InvalidWeight { a, b, weight });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> GraphBuilder {
        GraphBuilder::new().nodes([(0, None), (1, None), (2, None)])
    }

    #[test]
    fn valid() {
        let graph = line().edge(0, 1, 1.0).edge(1, 2, 0.5).build().unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges()[0].tier(), None);
    }

    #[test]
    fn tier_edges_remember_their_tier() {
        let policy = WeightPolicy::DEFAULT;
        let graph = line()
            .tier_edge(0, 1, WeightTier::Medium, &policy)
            .build()
            .unwrap();
        let edge = graph.edge_between(0, 1).unwrap();
        assert_eq!(edge.weight(), 1.0);
        assert_eq!(edge.tier(), Some(WeightTier::Medium));
    }

    #[test]
    fn missing_endpoint() {
        let err = line().edge(2, 5, 1.0).build().unwrap_err();
        assert_eq!(
            err,
            GraphError::Structural(StructuralError::MissingEndpoint {
                a: 2,
                b: 5,
                missing: 5
            })
        );
    }

    #[test]
    fn structure_is_checked_before_weight() {
        let err = line().edge(7, 1, -1.0).build().unwrap_err();
        assert!(matches!(
            err,
            GraphError::Structural(StructuralError::MissingEndpoint { missing: 7, .. })
        ));
    }

    #[test]
    fn self_loop() {
        let err = line().edge(1, 1, 1.0).build().unwrap_err();
        assert_eq!(err, GraphError::from(StructuralError::SelfLoop(1)));
    }

    #[test]
    fn duplicate_edge_in_either_direction() {
        let err = line().edge(0, 1, 1.0).edge(1, 0, 2.0).build().unwrap_err();
        assert_eq!(err, GraphError::from(StructuralError::DuplicateEdge { a: 1, b: 0 }));
    }

    #[test]
    fn duplicate_node() {
        let err = line().node(1, Some((3, 3))).build().unwrap_err();
        assert_eq!(err, GraphError::from(StructuralError::DuplicateNode(1)));
    }

    #[test]
    fn invalid_weights() {
        for weight in [0.0, -0.5, f64::INFINITY, f64::NEG_INFINITY] {
            let err = line().edge(0, 1, weight).build().unwrap_err();
            assert_eq!(err, GraphError::InvalidWeight { a: 0, b: 1, weight });
        }

        let err = line().edge(0, 1, f64::NAN).build().unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { a: 0, b: 1, .. }));
    }

    #[test]
    fn invalid_policy_weight() {
        let policy = WeightPolicy {
            short: 0.0,
            ..WeightPolicy::DEFAULT
        };
        let err = line()
            .tier_edge(0, 1, WeightTier::Short, &policy)
            .build()
            .unwrap_err();
        assert!(matches!(err, GraphError::InvalidWeight { weight, .. } if weight == 0.0));
    }

    #[test]
    fn empty() {
        let graph = GraphBuilder::new().build().unwrap();
        assert_eq!(graph.node_count(), 0);
    }
}

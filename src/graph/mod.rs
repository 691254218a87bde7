//! The immutable site Graph and the means to build it.

mod node;
pub use node::Node;

mod edge;
pub use edge::Edge;

mod weight;
pub use weight::{WeightPolicy, WeightTier};

mod builder;
pub use builder::GraphBuilder;

use crate::{path::Cost, NodeID, Point};

use hashbrown::HashMap;

/// A validated, undirected, weighted Graph.
///
/// Created through a [`GraphBuilder`], which guarantees that
/// - every Edge connects two distinct Nodes of the Graph
/// - no two Edges connect the same pair of Nodes
/// - every weight is positive and finite
///
/// A Graph is never modified after it was built.
///
/// Nodes are stored sorted by id, so the dense index of a Node orders the same way as its id.
#[derive(Clone, Debug)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    index: HashMap<NodeID, usize>,
    /// for every Node (by index): `(neighbor index, edge index)`
    adj: Vec<Vec<(usize, usize)>>,
}

impl Graph {
    /// `nodes` and `edges` must already be validated
    pub(crate) fn new(mut nodes: Vec<Node>, edges: Vec<Edge>) -> Graph {
        nodes.sort_by_key(Node::id);

        let index: HashMap<NodeID, usize> = nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (node.id(), i))
            .collect();

        let mut adj = vec![Vec::new(); nodes.len()];
        for (e, edge) in edges.iter().enumerate() {
            let (a, b) = edge.endpoints();
            let (ia, ib) = (index[&a], index[&b]);
            adj[ia].push((ib, e));
            adj[ib].push((ia, e));
        }

        Graph {
            nodes,
            edges,
            index,
            adj,
        }
    }

    /// All Nodes, ordered by id
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All Edges, in the order they were declared
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The ids of all Nodes, ascending
    pub fn node_ids(&self) -> impl Iterator<Item = NodeID> + '_ {
        self.nodes.iter().map(Node::id)
    }

    /// Returns the Node with the given id
    pub fn node(&self, id: NodeID) -> Option<&Node> {
        self.index_of(id).map(|i| &self.nodes[i])
    }

    /// `true` if a Node with that id exists
    pub fn contains(&self, id: NodeID) -> bool {
        self.index.contains_key(&id)
    }

    /// The position of a Node, if the Node exists and has one
    pub fn position(&self, id: NodeID) -> Option<Point> {
        self.node(id).and_then(Node::pos)
    }

    /// All neighbors of `id` together with the weight of the connecting Edge.
    ///
    /// Empty if `id` is not part of the Graph.
    pub fn neighbors(&self, id: NodeID) -> impl Iterator<Item = (NodeID, Cost)> + '_ {
        let adjacent = self.index_of(id).map_or(&[][..], |i| &self.adj[i][..]);
        adjacent
            .iter()
            .map(move |&(n, e)| (self.nodes[n].id(), self.edges[e].weight()))
    }

    /// The Edge between `a` and `b`, if any
    pub fn edge_between(&self, a: NodeID, b: NodeID) -> Option<&Edge> {
        let i = self.index_of(a)?;
        self.adj[i]
            .iter()
            .map(|&(_, e)| &self.edges[e])
            .find(|edge| edge.connects(a, b))
    }

    /// The number of Nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The number of Edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The dense index of a Node: its position in [`nodes`](Graph::nodes)
    pub(crate) fn index_of(&self, id: NodeID) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// The neighbors of the Node at `index` as `(neighbor index, weight)`
    pub(crate) fn adjacent(&self, index: usize) -> impl Iterator<Item = (usize, Cost)> + '_ {
        self.adj[index]
            .iter()
            .map(move |&(n, e)| (n, self.edges[e].weight()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        GraphBuilder::new()
            .node(2, Some((0, 0)))
            .node(0, Some((1, 0)))
            .node(1, None)
            .edge(0, 1, 1.0)
            .edge(1, 2, 0.5)
            .edge(2, 0, 2.0)
            .build()
            .unwrap()
    }

    #[test]
    fn nodes_sorted() {
        let graph = triangle();
        assert_eq!(graph.node_ids().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn positions() {
        let graph = triangle();
        assert_eq!(graph.position(0), Some((1, 0)));
        assert_eq!(graph.position(1), None);
        assert_eq!(graph.position(5), None);
    }

    #[test]
    fn neighbors_in_both_directions() {
        let graph = triangle();

        let mut of_zero: Vec<_> = graph.neighbors(0).collect();
        of_zero.sort_by_key(|&(id, _)| id);
        assert_eq!(of_zero, vec![(1, 1.0), (2, 2.0)]);

        let mut of_two: Vec<_> = graph.neighbors(2).collect();
        of_two.sort_by_key(|&(id, _)| id);
        assert_eq!(of_two, vec![(0, 2.0), (1, 0.5)]);

        assert_eq!(graph.neighbors(9).count(), 0);
    }

    #[test]
    fn edge_lookup() {
        let graph = triangle();
        assert_eq!(graph.edge_between(2, 1).map(Edge::weight), Some(0.5));
        assert_eq!(graph.edge_between(1, 2).map(Edge::weight), Some(0.5));
        assert!(graph.edge_between(1, 7).is_none());
    }

    #[test]
    fn dense_indices_follow_ids() {
        let graph = triangle();
        assert_eq!(graph.index_of(0), Some(0));
        assert_eq!(graph.index_of(2), Some(2));
        assert_eq!(graph.index_of(3), None);

        let mut of_two: Vec<_> = graph.adjacent(2).collect();
        of_two.sort_by_key(|&(n, _)| n);
        assert_eq!(of_two, vec![(0, 2.0), (1, 0.5)]);
    }
}

use super::limit::SearchLimits;
use crate::{
    error::GraphError,
    graph::Graph,
    path::{Cost, Path},
    NodeID,
};

use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An entry of the frontier: a Node index and its tentative Cost. Ordered so that the
/// `BinaryHeap` pops the lowest Cost first and, among equal Costs, the lowest index.
#[derive(PartialEq, Eq)]
pub(crate) struct Element(pub usize, pub OrderedFloat<Cost>);
impl PartialOrd for Element {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        Some(self.cmp(rhs))
    }
}
impl Ord for Element {
    fn cmp(&self, rhs: &Self) -> Ordering {
        rhs.1.cmp(&self.1).then_with(|| rhs.0.cmp(&self.0))
    }
}

/// The result of a search: for every Node (by index) the Cost to get there from the origin and
/// the index of the previous Node on that Path, or `None` if it was never reached.
#[derive(Debug, Clone)]
pub(crate) struct ShortestPathTree<'g> {
    graph: &'g Graph,
    origin: usize,
    visited: Vec<Option<(Cost, usize)>>,
}

impl ShortestPathTree<'_> {
    #[cfg(test)]
    pub fn cost(&self, id: NodeID) -> Option<Cost> {
        let index = self.graph.index_of(id)?;
        self.visited[index].map(|(cost, _)| cost)
    }

    #[cfg(test)]
    pub fn path_to_origin(&self, id: NodeID) -> Option<Path<NodeID>> {
        self.path_from(self.graph.index_of(id)?)
    }

    /// Walks the previous-Node pointers from the Node at `index` back to the origin.
    ///
    /// Since Edges are undirected, the result is the Path from that Node to the origin.
    pub fn path_from(&self, index: usize) -> Option<Path<NodeID>> {
        let (cost, _) = self.visited[index]?;
        let nodes = self.graph.nodes();
        let mut steps = vec![nodes[index].id()];
        let mut current = index;
        while current != self.origin {
            // every reached Node except the origin points to a reached Node with a lower Cost
            current = self.visited[current].map_or(self.origin, |(_, prev)| prev);
            steps.push(nodes[current].id());
        }
        Some(Path::new(steps, cost))
    }

    pub fn reached(&self) -> usize {
        self.visited.iter().filter(|v| v.is_some()).count()
    }
}

/// Searches the Graph from the Node at index `origin` using
/// [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) until every
/// reachable Node is expanded.
///
/// If several Paths to a Node have the same Cost, the one whose previous Node has the lowest id
/// is kept, which makes the result independent of Edge order. Node indices are ordered like
/// their ids, so comparing indices is enough.
pub(crate) fn dijkstra_search<'g>(
    graph: &'g Graph,
    origin: usize,
    limits: &mut SearchLimits,
) -> Result<ShortestPathTree<'g>, GraphError> {
    let mut visited: Vec<Option<(Cost, usize)>> = vec![None; graph.node_count()];
    let mut next = BinaryHeap::with_capacity(graph.node_count());
    next.push(Element(origin, OrderedFloat(0.0)));
    visited[origin] = Some((0.0, origin));

    while let Some(Element(current, OrderedFloat(current_cost))) = next.pop() {
        limits.step()?;

        if visited[current].map_or(false, |(cost, _)| current_cost > cost) {
            // stale entry, the Node was already expanded with a lower Cost
            continue;
        }

        for (other, weight) in graph.adjacent(current) {
            let other_cost = current_cost + weight;

            let needs_visit = match visited[other] {
                Some((prev_cost, _)) if prev_cost < other_cost => false,
                Some((prev_cost, prev)) if prev_cost == other_cost => {
                    if current < prev {
                        visited[other] = Some((prev_cost, current));
                    }
                    false
                }
                _ => {
                    visited[other] = Some((other_cost, current));
                    true
                }
            };

            if needs_visit {
                next.push(Element(other, OrderedFloat(other_cost)));
            }
        }
    }

    Ok(ShortestPathTree {
        graph,
        origin,
        visited,
    })
}

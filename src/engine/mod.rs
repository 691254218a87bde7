//! The single-destination shortest path search.
//!
//! Since every Edge is undirected, the shortest route from any Node to the destination is the
//! reverse of the shortest route from the destination to that Node. A single search that starts
//! at the destination therefore yields the routes of all Nodes at once.

mod dijkstra;
use self::dijkstra::{dijkstra_search, ShortestPathTree};

mod limit;
use self::limit::SearchLimits;

use crate::{
    error::GraphError,
    graph::Graph,
    route::{RouteResult, RouteTable},
    NodeID,
};

use std::sync::{atomic::AtomicBool, Arc};
use std::time::{Duration, Instant};

/// Computes the shortest route from every Node of `graph` to `destination`.
///
/// Shorthand for [`ShortestPathEngine::new().compute(graph, destination)`](ShortestPathEngine::compute).
///
/// ## Examples
/// ```
/// use site_routing::{engine::compute_shortest_paths, graph::GraphBuilder};
///
/// // 0 --0.5-- 1 --1.0-- 2     3
/// let graph = GraphBuilder::new()
///     .nodes([(0, None), (1, None), (2, None), (3, None)])
///     .edge(0, 1, 0.5)
///     .edge(1, 2, 1.0)
///     .build()
///     .unwrap();
///
/// let routes = compute_shortest_paths(&graph, 0).unwrap();
///
/// let from_two = routes.get(2).unwrap();
/// assert_eq!(from_two.nodes(), &[2, 1, 0]);
/// assert_eq!(from_two.total_distance(), 1.5);
///
/// // 3 is not connected, which is not an error
/// let from_three = routes.get(3).unwrap();
/// assert!(!from_three.is_reachable());
/// assert_eq!(from_three.description(), "No path found");
///
/// // the destination has no entry
/// assert!(routes.get(0).is_none());
/// ```
pub fn compute_shortest_paths(graph: &Graph, destination: NodeID) -> Result<RouteTable, GraphError> {
    ShortestPathEngine::new().compute(graph, destination)
}

/// Runs the shortest path search, optionally bounded by a time limit or an interrupt flag.
///
/// The limits are checked before every step of the search. A search that hits a limit returns
/// an error and no partial results.
///
/// ## Examples
/// ```
/// use site_routing::prelude::*;
/// use std::time::Duration;
///
/// let graph = SiteTopology::reference().build_graph(&WeightPolicy::DEFAULT).unwrap();
/// let engine = ShortestPathEngine::new().with_time_limit(Duration::from_secs(1));
///
/// let routes = engine.compute(&graph, 0).unwrap();
/// assert_eq!(routes.len(), 11);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ShortestPathEngine {
    time_limit: Option<Duration>,
    interrupt: Option<Arc<AtomicBool>>,
}

impl ShortestPathEngine {
    /// Creates an engine without any limits
    pub fn new() -> ShortestPathEngine {
        ShortestPathEngine::default()
    }

    /// Aborts a search with [`GraphError::TimeLimitExceeded`] once it ran for `limit`
    pub fn with_time_limit(mut self, limit: Duration) -> ShortestPathEngine {
        self.time_limit = Some(limit);
        self
    }

    /// Aborts a search with [`GraphError::Interrupted`] as soon as `flag` is set
    pub fn with_interrupt(mut self, flag: Arc<AtomicBool>) -> ShortestPathEngine {
        self.interrupt = Some(flag);
        self
    }

    /// Computes the shortest route from every Node of `graph` to `destination`.
    ///
    /// The returned table contains an entry for every Node except `destination`. Nodes that
    /// cannot reach `destination` get an entry without a route.
    ///
    /// Among several routes of equal length, every Node continues to the neighbor with the
    /// lowest id.
    ///
    /// ## Errors
    /// - [`GraphError::UnknownNode`] if `destination` is not part of `graph`
    /// - [`GraphError::Interrupted`] or [`GraphError::TimeLimitExceeded`] if a limit was hit
    pub fn compute(&self, graph: &Graph, destination: NodeID) -> Result<RouteTable, GraphError> {
        let origin = graph
            .index_of(destination)
            .ok_or(GraphError::UnknownNode(destination))?;

        let start_time = Instant::now();
        let mut limits = SearchLimits::new(self.time_limit, self.interrupt.as_deref());
        let tree = dijkstra_search(graph, origin, &mut limits)?;
        log::trace!(
            "searched from {} in {} steps, reached {} of {} nodes",
            destination,
            limits.steps(),
            tree.reached(),
            graph.node_count()
        );

        let routes = collect_routes(graph, destination, &tree);
        log::debug!(
            "computed routes to {} in {:?}",
            destination,
            start_time.elapsed()
        );
        Ok(RouteTable::new(destination, routes))
    }
}

/// One result per Node except the destination, in the order of the Nodes (ascending id)
#[cfg(feature = "parallel")]
fn collect_routes(graph: &Graph, destination: NodeID, tree: &ShortestPathTree<'_>) -> Vec<RouteResult> {
    use rayon::prelude::*;

    graph
        .nodes()
        .par_iter()
        .enumerate()
        .filter(|(_, node)| node.id() != destination)
        .map(|(i, node)| RouteResult::new(node.id(), destination, tree.path_from(i)))
        .collect()
}

/// One result per Node except the destination, in the order of the Nodes (ascending id)
#[cfg(not(feature = "parallel"))]
fn collect_routes(graph: &Graph, destination: NodeID, tree: &ShortestPathTree<'_>) -> Vec<RouteResult> {
    graph
        .nodes()
        .iter()
        .enumerate()
        .filter(|(_, node)| node.id() != destination)
        .map(|(i, node)| RouteResult::new(node.id(), destination, tree.path_from(i)))
        .collect()
}

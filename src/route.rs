//! The results of a shortest path computation.

use crate::{
    error::GraphError,
    path::{Cost, Path},
    NodeID,
};

/// The description of a [`RouteResult`] without a route
pub const NO_PATH: &str = "No path found";

/// The shortest route from one Node (`start`) to the destination (`goal`).
///
/// A `start` that cannot reach the `goal` is not an error: it simply has no route and an
/// infinite distance.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteResult {
    start: NodeID,
    goal: NodeID,
    route: Option<Path<NodeID>>,
}

impl RouteResult {
    pub(crate) fn new(start: NodeID, goal: NodeID, route: Option<Path<NodeID>>) -> RouteResult {
        RouteResult { start, goal, route }
    }

    /// The Node this route starts at
    pub fn start(&self) -> NodeID {
        self.start
    }

    /// The destination of this route
    pub fn goal(&self) -> NodeID {
        self.goal
    }

    /// The route from `start` to `goal`, both included, or `None` if `goal` is unreachable
    pub fn route(&self) -> Option<&Path<NodeID>> {
        self.route.as_ref()
    }

    /// The Nodes of the route, empty if `goal` is unreachable
    pub fn nodes(&self) -> &[NodeID] {
        self.route.as_ref().map_or(&[][..], |path| &path.path[..])
    }

    /// `true` if a route exists
    pub fn is_reachable(&self) -> bool {
        self.route.is_some()
    }

    /// The summed weight of the route, or [`f64::INFINITY`] if `goal` is unreachable
    pub fn total_distance(&self) -> Cost {
        self.route.as_ref().map_or(Cost::INFINITY, |path| path.cost)
    }

    /// The route as `"3 -> 4 -> 0"`, or [`NO_PATH`]
    pub fn description(&self) -> String {
        match &self.route {
            Some(path) => path.describe(),
            None => NO_PATH.to_string(),
        }
    }
}

use std::fmt;
impl fmt::Display for RouteResult {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "node {} -> node {}: {} (distance: {})",
            self.start,
            self.goal,
            self.description(),
            self.total_distance()
        )
    }
}

/// The shortest routes from every Node of a Graph to one destination.
///
/// The destination itself has no entry. A RouteTable is never modified after it was computed.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteTable {
    destination: NodeID,
    /// sorted by start Node
    routes: Vec<RouteResult>,
}

impl RouteTable {
    pub(crate) fn new(destination: NodeID, mut routes: Vec<RouteResult>) -> RouteTable {
        routes.sort_unstable_by_key(|r| r.start);
        RouteTable {
            destination,
            routes,
        }
    }

    /// The Node all routes lead to
    pub fn destination(&self) -> NodeID {
        self.destination
    }

    /// The route starting at `source`, if `source` is part of the table
    pub fn get(&self, source: NodeID) -> Option<&RouteResult> {
        let i = self.routes.binary_search_by_key(&source, |r| r.start).ok()?;
        Some(&self.routes[i])
    }

    /// The route starting at `source`.
    ///
    /// ## Errors
    /// - [`GraphError::SourceIsDestination`] if `source` is the destination
    /// - [`GraphError::UnknownNode`] if `source` is not part of the Graph
    pub fn route_from(&self, source: NodeID) -> Result<&RouteResult, GraphError> {
        if source == self.destination {
            return Err(GraphError::SourceIsDestination(source));
        }
        self.get(source).ok_or(GraphError::UnknownNode(source))
    }

    /// The distance from `source` to the destination, if `source` is part of the table
    pub fn distance(&self, source: NodeID) -> Option<Cost> {
        self.get(source).map(RouteResult::total_distance)
    }

    /// The number of routes, one for every Node except the destination
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// `true` if the Graph only consists of the destination
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// The number of Nodes that can reach the destination
    pub fn reachable_count(&self) -> usize {
        self.routes.iter().filter(|r| r.is_reachable()).count()
    }

    /// The ids of all Nodes that cannot reach the destination, ascending
    pub fn unreachable(&self) -> Vec<NodeID> {
        self.routes
            .iter()
            .filter(|r| !r.is_reachable())
            .map(RouteResult::start)
            .collect()
    }

    /// All routes, ordered by their start Node
    pub fn iter(&self) -> std::slice::Iter<'_, RouteResult> {
        self.routes.iter()
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteResult;
    type IntoIter = std::slice::Iter<'a, RouteResult>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

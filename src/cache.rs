//! A cache of [`RouteTable`]s for one Graph, keyed by destination.

use std::sync::{Arc, Mutex, PoisonError};

use hashbrown::HashMap;

use crate::{
    engine::ShortestPathEngine,
    error::GraphError,
    graph::Graph,
    route::RouteTable,
    NodeID,
};

/// Computes [`RouteTable`]s on demand and keeps them for later requests.
///
/// The Graph is immutable, so a cached table never goes stale. The cache itself may be shared
/// between threads; every access goes through a Mutex.
///
/// ## Examples
/// ```
/// use site_routing::prelude::*;
/// use std::sync::Arc;
///
/// let graph = SiteTopology::reference().build_graph(&WeightPolicy::DEFAULT).unwrap();
/// let cache = RouteCache::new(&graph);
///
/// let first = cache.get_or_compute(0).unwrap();
/// let second = cache.get_or_compute(0).unwrap();
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
#[derive(Debug)]
pub struct RouteCache<'a> {
    graph: &'a Graph,
    engine: ShortestPathEngine,
    tables: Mutex<HashMap<NodeID, Arc<RouteTable>>>,
}

impl<'a> RouteCache<'a> {
    /// Creates an empty cache for `graph`
    pub fn new(graph: &'a Graph) -> RouteCache<'a> {
        RouteCache::with_engine(graph, ShortestPathEngine::new())
    }

    /// Creates an empty cache that computes its tables with `engine`
    pub fn with_engine(graph: &'a Graph, engine: ShortestPathEngine) -> RouteCache<'a> {
        RouteCache {
            graph,
            engine,
            tables: Mutex::new(HashMap::new()),
        }
    }

    /// The Graph the tables are computed for
    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    /// Returns the cached table for `destination`, computing it first if necessary.
    ///
    /// Failed computations are not cached.
    pub fn get_or_compute(&self, destination: NodeID) -> Result<Arc<RouteTable>, GraphError> {
        let mut tables = self.tables.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(table) = tables.get(&destination) {
            log::trace!("route table for {} taken from the cache", destination);
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(self.engine.compute(self.graph, destination)?);
        tables.insert(destination, Arc::clone(&table));
        Ok(table)
    }

    /// The cached table for `destination`, without computing it
    pub fn get(&self, destination: NodeID) -> Option<Arc<RouteTable>> {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&destination)
            .cloned()
    }

    /// The number of cached tables
    pub fn len(&self) -> usize {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// `true` if nothing is cached
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached table
    pub fn clear(&self) {
        self.tables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphBuilder;

    fn graph() -> Graph {
        GraphBuilder::new()
            .nodes([(0, None), (1, None), (2, None)])
            .edge(0, 1, 1.0)
            .edge(1, 2, 2.0)
            .build()
            .unwrap()
    }

    #[test]
    fn computes_once() {
        let graph = graph();
        let cache = RouteCache::new(&graph);
        assert!(cache.is_empty());
        assert!(cache.get(2).is_none());

        let table = cache.get_or_compute(2).unwrap();
        assert_eq!(table.distance(0), Some(3.0));
        assert_eq!(cache.len(), 1);

        let again = cache.get(2).unwrap();
        assert!(Arc::ptr_eq(&table, &again));
    }

    #[test]
    fn errors_are_not_cached() {
        let graph = graph();
        let cache = RouteCache::new(&graph);

        assert_eq!(
            cache.get_or_compute(8).unwrap_err(),
            GraphError::UnknownNode(8)
        );
        assert!(cache.is_empty());
    }

    #[test]
    fn clear() {
        let graph = graph();
        let cache = RouteCache::new(&graph);
        cache.get_or_compute(0).unwrap();
        cache.get_or_compute(1).unwrap();
        assert_eq!(cache.len(), 2);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn shared_between_threads() {
        let graph = graph();
        let cache = RouteCache::new(&graph);

        std::thread::scope(|scope| {
            for destination in [0, 1, 2, 0, 1, 2] {
                let cache = &cache;
                scope.spawn(move || cache.get_or_compute(destination).unwrap());
            }
        });

        assert_eq!(cache.len(), 3);
        assert_eq!(cache.get(0).unwrap().distance(2), Some(3.0));
    }
}

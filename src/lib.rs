#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find the way home on a small site.
//!
//! ## Introduction
//! A site is a handful of locations laid out on a grid, some of them separated by obstacles like
//! a solar panel field. Every location is a Node of an undirected Graph, and every way between two
//! locations is an Edge weighted by its length. One location is special: the home location (for
//! example a Safety Charging Area), which every vehicle on the site has to be able to return to.
//!
//! This crate builds such a Graph from a static description, validates it, and computes the
//! shortest route from every location back home with a single run of Dijkstra's Algorithm. The
//! result is a [`RouteTable`](route::RouteTable) that can be exported as a YAML document.
//!
//! ## Examples
//! Computing the routes of the reference site:
//! ```
//! use site_routing::prelude::*;
//!
//! let site = SiteTopology::reference();
//! let policy = WeightPolicy::default();
//! let graph = site.build_graph(&policy).unwrap();
//!
//! let routes = compute_shortest_paths(&graph, site.home).unwrap();
//!
//! // node 1 is right next to home
//! let from_one = routes.get(1).unwrap();
//! assert_eq!(from_one.nodes(), &[1, 0]);
//! assert_eq!(from_one.total_distance(), 0.5);
//!
//! // node 9 has to cross the panel field
//! assert_eq!(routes.get(9).unwrap().description(), "9 -> 10 -> 1 -> 0");
//! ```
//!
//! Blocked connections are not an error, the affected locations are just unreachable:
//! ```
//! # use site_routing::prelude::*;
//! let site = SiteTopology::reference().without_tier(WeightTier::Long);
//! let graph = site.build_graph(&WeightPolicy::DEFAULT).unwrap();
//!
//! let routes = compute_shortest_paths(&graph, 0).unwrap();
//! assert_eq!(routes.unreachable(), vec![6, 7, 8, 9, 10, 11]);
//! ```
//!
//! ### Exporting
//! ```
//! # use site_routing::prelude::*;
//! # let site = SiteTopology::reference();
//! # let policy = WeightPolicy::default();
//! # let graph = site.build_graph(&policy).unwrap();
//! # let routes = compute_shortest_paths(&graph, site.home).unwrap();
//! let document = RouteDocument::for_site(&site, &policy, &routes);
//! let yaml = document.to_yaml().unwrap();
//!
//! assert!(yaml.starts_with("graph_info:\n  description: Grid graph with Safety Charging Area as node 0\n"));
//! ```
//!
//! ### Configuration
//! The numeric weight of every [`WeightTier`](graph::WeightTier) is taken from a
//! [`WeightPolicy`](graph::WeightPolicy). Invalid weights are rejected when the Graph is built:
//! ```
//! # use site_routing::prelude::*;
//! let policy = WeightPolicy { long: -1.0, ..WeightPolicy::DEFAULT };
//! let result = SiteTopology::reference().build_graph(&policy);
//!
//! assert!(matches!(result, Err(GraphError::InvalidWeight { .. })));
//! ```

/// The Type used to reference a Node in the Graph
pub type NodeID = u32;

/// A shorthand for positions on the site grid: `(column, row)`
pub type Point = (usize, usize);

pub mod cache;
pub mod cli;
pub mod document;
pub mod engine;
pub mod error;
pub mod graph;
pub mod path;
pub mod render;
pub mod route;
pub mod topology;

/// The most commonly used types
pub mod prelude {
    pub use crate::{
        cache::RouteCache,
        document::RouteDocument,
        engine::{compute_shortest_paths, ShortestPathEngine},
        error::{ExportError, GraphError, RenderError, StructuralError},
        graph::{Graph, GraphBuilder, WeightPolicy, WeightTier},
        path::{Cost, Path},
        render::{Renderer, SceneView, TextRenderer},
        route::{RouteResult, RouteTable},
        topology::SiteTopology,
        NodeID, Point,
    };
}

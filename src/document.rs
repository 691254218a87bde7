//! The exported description of a [`RouteTable`].
//!
//! A document looks like this:
//! ```yaml
//! graph_info:
//!   description: Grid graph with Safety Charging Area as node 0
//!   weight_rules:
//!     long_distance: 2.0
//!     medium_distance: 1.0
//!     short_distance: 0.5
//! shortest_paths:
//!   from_node_1:
//!     start_node: 1
//!     goal_node: 0
//!     route:
//!     - 1
//!     - 0
//!     total_distance: 0.5
//!     description: 1 -> 0
//! ```
//! Unreachable Nodes have `route: null`, `total_distance: .inf` and the description
//! `No path found`.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::{
    error::ExportError,
    graph::WeightPolicy,
    path::Cost,
    route::{RouteResult, RouteTable},
    topology::SiteTopology,
    NodeID,
};

/// Everything that is exported after a computation
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct RouteDocument {
    graph_info: GraphInfo,
    shortest_paths: ShortestPaths,
}

/// Metadata about the Graph the routes were computed on
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct GraphInfo {
    description: String,
    weight_rules: WeightRules,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct WeightRules(WeightPolicy);

impl Serialize for WeightRules {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3))?;
        for (tier, weight) in self.0.rules() {
            map.serialize_entry(tier.rule_name(), &weight)?;
        }
        map.end()
    }
}

/// The exported form of one [`RouteResult`]
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PathEntry {
    start_node: NodeID,
    goal_node: NodeID,
    route: Option<Vec<NodeID>>,
    total_distance: Cost,
    description: String,
}

impl From<&RouteResult> for PathEntry {
    fn from(result: &RouteResult) -> PathEntry {
        PathEntry {
            start_node: result.start(),
            goal_node: result.goal(),
            route: result.route().map(|path| path.path.clone()),
            total_distance: result.total_distance(),
            description: result.description(),
        }
    }
}

/// Entries ordered by start Node, exported as a map keyed `from_node_<id>`
#[derive(Clone, Debug, PartialEq)]
struct ShortestPaths(Vec<PathEntry>);

impl Serialize for ShortestPaths {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for entry in self.0.iter() {
            map.serialize_entry(&format!("from_node_{}", entry.start_node), entry)?;
        }
        map.end()
    }
}

impl RouteDocument {
    /// Creates a document with a custom description
    pub fn new(description: impl Into<String>, policy: &WeightPolicy, table: &RouteTable) -> RouteDocument {
        RouteDocument {
            graph_info: GraphInfo {
                description: description.into(),
                weight_rules: WeightRules(*policy),
            },
            shortest_paths: ShortestPaths(table.iter().map(PathEntry::from).collect()),
        }
    }

    /// Creates a document for routes on `site`.
    ///
    /// The description names the home location of the site if the routes lead there.
    pub fn for_site(site: &SiteTopology, policy: &WeightPolicy, table: &RouteTable) -> RouteDocument {
        let description = if table.destination() == site.home {
            format!("Grid graph with {} as node {}", site.description, site.home)
        } else {
            format!("Grid graph with node {} as destination", table.destination())
        };
        RouteDocument::new(description, policy, table)
    }

    /// The description of the Graph
    pub fn description(&self) -> &str {
        &self.graph_info.description
    }

    /// One entry per start Node, ascending
    pub fn entries(&self) -> &[PathEntry] {
        &self.shortest_paths.0
    }

    /// Serializes the document to YAML
    pub fn to_yaml(&self) -> Result<String, ExportError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Writes the document as YAML to `path`, replacing any existing file
    pub fn write_to(&self, path: impl AsRef<std::path::Path>) -> Result<(), ExportError> {
        let yaml = self.to_yaml()?;
        std::fs::write(path.as_ref(), yaml)?;
        log::debug!("wrote route document to {}", path.as_ref().display());
        Ok(())
    }
}

impl PathEntry {
    /// The start Node
    pub fn start_node(&self) -> NodeID {
        self.start_node
    }

    /// The exported route, `None` if unreachable
    pub fn route(&self) -> Option<&[NodeID]> {
        self.route.as_deref()
    }

    /// The exported distance, infinite if unreachable
    pub fn total_distance(&self) -> Cost {
        self.total_distance
    }
}

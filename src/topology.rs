//! Declarative descriptions of a site.
//!
//! A [`SiteTopology`] is plain data: a list of Node records and a list of Edge records, where
//! every Edge names a [`WeightTier`] instead of a number. Turning it into a [`Graph`] resolves the
//! tiers through a [`WeightPolicy`] and validates the result.
//!
//! The reference site is a 5 by 3 grid with a solar panel field in the middle column:
//! ```no_code
//! row 2:  7   6   -   5   4
//! row 1:  8  11   -   2   3
//! row 0:  9  10   -   1   0   <- Safety Charging Area (home)
//! ```
//! Every row crosses the panel field with a long Edge.

use serde::{Deserialize, Serialize};

use crate::{
    error::GraphError,
    graph::{Graph, GraphBuilder, WeightPolicy, WeightTier},
    NodeID, Point,
};

/// A location of the site
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeRecord {
    /// unique id of the location
    pub id: NodeID,
    /// grid position `(column, row)`, for layout only
    #[serde(default)]
    pub pos: Option<Point>,
}

/// A connection between two locations of the site
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    /// one endpoint
    pub a: NodeID,
    /// the other endpoint
    pub b: NodeID,
    /// the distance category of the connection
    pub tier: WeightTier,
}

/// The static description of a site: its locations, their connections and its home location.
///
/// ## Examples
/// ```
/// use site_routing::{graph::WeightPolicy, topology::SiteTopology};
///
/// let yaml = "
/// description: Two bays
/// home: 0
/// nodes:
///   - { id: 0, pos: [0, 0] }
///   - { id: 1 }
/// edges:
///   - { a: 0, b: 1, tier: long }
/// ";
/// let site = SiteTopology::from_yaml_str(yaml).unwrap();
/// let graph = site.build_graph(&WeightPolicy::DEFAULT).unwrap();
///
/// assert_eq!(graph.edge_between(1, 0).unwrap().weight(), 2.0);
/// assert_eq!(graph.position(0), Some((0, 0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteTopology {
    /// a human readable name of the home location
    pub description: String,
    /// the location every route leads back to
    pub home: NodeID,
    /// all locations
    pub nodes: Vec<NodeRecord>,
    /// all connections
    pub edges: Vec<EdgeRecord>,
}

const REFERENCE_NODES: [(NodeID, Point); 12] = [
    (0, (4, 0)),
    (1, (3, 0)),
    (2, (3, 1)),
    (3, (4, 1)),
    (4, (4, 2)),
    (5, (3, 2)),
    (6, (1, 2)),
    (7, (0, 2)),
    (8, (0, 1)),
    (9, (0, 0)),
    (10, (1, 0)),
    (11, (1, 1)),
];

const REFERENCE_EDGES: [(NodeID, NodeID, WeightTier); 17] = {
    use WeightTier::*;
    [
        // east of the panels
        (0, 1, Short),
        (0, 3, Medium),
        (1, 2, Medium),
        (2, 3, Short),
        (2, 5, Medium),
        (3, 4, Medium),
        (4, 5, Short),
        // west of the panels
        (7, 6, Long),
        (7, 8, Medium),
        (6, 11, Medium),
        (8, 9, Medium),
        (8, 11, Long),
        (9, 10, Long),
        (10, 11, Medium),
        // across the panels
        (5, 6, Long),
        (2, 11, Long),
        (1, 10, Long),
    ]
};

impl SiteTopology {
    /// The reference site with the Safety Charging Area as node `0`
    pub fn reference() -> SiteTopology {
        SiteTopology {
            description: String::from("Safety Charging Area"),
            home: 0,
            nodes: REFERENCE_NODES
                .iter()
                .map(|&(id, pos)| NodeRecord { id, pos: Some(pos) })
                .collect(),
            edges: REFERENCE_EDGES
                .iter()
                .map(|&(a, b, tier)| EdgeRecord { a, b, tier })
                .collect(),
        }
    }

    /// Parses a SiteTopology from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<SiteTopology, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Resolves every Edge tier through `policy` and builds the validated Graph
    pub fn build_graph(&self, policy: &WeightPolicy) -> Result<Graph, GraphError> {
        let builder = GraphBuilder::new().nodes(self.nodes.iter().map(|n| (n.id, n.pos)));
        self.edges
            .iter()
            .fold(builder, |builder, e| builder.tier_edge(e.a, e.b, e.tier, policy))
            .build()
    }

    /// Returns a copy of this site in which every connection of `tier` is blocked
    pub fn without_tier(&self, tier: WeightTier) -> SiteTopology {
        SiteTopology {
            edges: self
                .edges
                .iter()
                .filter(|e| e.tier != tier)
                .copied()
                .collect(),
            ..self.clone()
        }
    }
}

impl Default for SiteTopology {
    fn default() -> SiteTopology {
        SiteTopology::reference()
    }
}

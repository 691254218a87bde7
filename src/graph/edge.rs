use super::WeightTier;
use crate::{path::Cost, NodeID};

/// An undirected, weighted connection between two Nodes
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    a: NodeID,
    b: NodeID,
    /// weight > 0.0 and finite
    weight: Cost,
    tier: Option<WeightTier>,
}

impl Edge {
    pub(crate) fn new(a: NodeID, b: NodeID, weight: Cost, tier: Option<WeightTier>) -> Edge {
        Edge { a, b, weight, tier }
    }

    /// The two endpoints, in the order they were declared
    pub fn endpoints(&self) -> (NodeID, NodeID) {
        (self.a, self.b)
    }

    /// The cost of traversing this Edge in either direction
    pub fn weight(&self) -> Cost {
        self.weight
    }

    /// The tier this Edge was declared with, if it was declared through a
    /// [`WeightPolicy`](super::WeightPolicy)
    pub fn tier(&self) -> Option<WeightTier> {
        self.tier
    }

    /// Returns the endpoint opposite of `id`, or `None` if `id` is not an endpoint
    pub fn other(&self, id: NodeID) -> Option<NodeID> {
        if id == self.a {
            Some(self.b)
        } else if id == self.b {
            Some(self.a)
        } else {
            None
        }
    }

    /// `true` if this Edge connects `x` and `y`, in any order
    pub fn connects(&self, x: NodeID, y: NodeID) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    /// The endpoints ordered so that the smaller id comes first
    pub(crate) fn key(&self) -> (NodeID, NodeID) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected() {
        let edge = Edge::new(7, 6, 2.0, Some(WeightTier::Long));

        assert!(edge.connects(6, 7));
        assert!(edge.connects(7, 6));
        assert!(!edge.connects(6, 8));
        assert_eq!(edge.other(7), Some(6));
        assert_eq!(edge.other(6), Some(7));
        assert_eq!(edge.other(5), None);
        assert_eq!(edge.key(), (6, 7));
        assert_eq!(edge.endpoints(), (7, 6));
    }
}

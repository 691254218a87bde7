use crate::{NodeID, Point};

/// A location on the site
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Node {
    id: NodeID,
    pos: Option<Point>,
}

impl Node {
    pub(crate) fn new(id: NodeID, pos: Option<Point>) -> Node {
        Node { id, pos }
    }

    /// The unique id of this Node
    pub fn id(&self) -> NodeID {
        self.id
    }

    /// The grid position of this Node. Only used for layout, never for pathfinding.
    pub fn pos(&self) -> Option<Point> {
        self.pos
    }
}

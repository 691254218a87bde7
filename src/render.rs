//! Read-only views of a Graph for visualization.
//!
//! Rendering is not needed for computing or exporting routes. A [`Renderer`] receives a
//! [`SceneView`] and may fail without affecting anything else.

use std::io::Write;

use hashbrown::HashSet;

use crate::{
    error::RenderError,
    graph::{Edge, Graph, WeightPolicy, WeightTier},
    path::Cost,
    route::RouteTable,
    NodeID, Point,
};

/// How an Edge should be drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeStyle {
    /// a color name
    pub color: &'static str,
    /// the line width
    pub width: f32,
}

impl EdgeStyle {
    /// The style of an Edge without a known tier
    pub const UNCLASSIFIED: EdgeStyle = EdgeStyle {
        color: "gray",
        width: 1.0,
    };

    /// Long Edges are red and wide, medium ones orange, short ones green and thin
    pub fn for_tier(tier: WeightTier) -> EdgeStyle {
        match tier {
            WeightTier::Long => EdgeStyle {
                color: "red",
                width: 2.0,
            },
            WeightTier::Medium => EdgeStyle {
                color: "orange",
                width: 1.5,
            },
            WeightTier::Short => EdgeStyle {
                color: "green",
                width: 1.0,
            },
        }
    }
}

/// An Edge as seen by a [`Renderer`]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneEdge {
    /// one endpoint
    pub a: NodeID,
    /// the other endpoint
    pub b: NodeID,
    /// the weight of the Edge
    pub weight: Cost,
    /// the tier of the Edge, if it is known or can be derived from the default weights
    pub tier: Option<WeightTier>,
    /// `true` if any route of the scene uses this Edge
    pub highlighted: bool,
}

impl SceneEdge {
    /// The style for drawing this Edge
    pub fn style(&self) -> EdgeStyle {
        self.tier.map_or(EdgeStyle::UNCLASSIFIED, EdgeStyle::for_tier)
    }
}

/// A read-only view of a Graph and, optionally, the routes computed on it
#[derive(Clone, Debug)]
pub struct SceneView<'a> {
    graph: &'a Graph,
    routes: Option<&'a RouteTable>,
    /// every step of a route as `(lower id, higher id)`
    used: HashSet<(NodeID, NodeID)>,
}

impl<'a> SceneView<'a> {
    /// The largest layout grid a scene may span, in cells
    pub const MAX_GRID_CELLS: usize = 1 << 16;

    /// Creates a view of `graph`, highlighting the routes of `routes` if given
    pub fn new(graph: &'a Graph, routes: Option<&'a RouteTable>) -> SceneView<'a> {
        let used = routes
            .into_iter()
            .flat_map(RouteTable::iter)
            .flat_map(|result| result.nodes().windows(2))
            .map(|step| (step[0].min(step[1]), step[0].max(step[1])))
            .collect();
        SceneView {
            graph,
            routes,
            used,
        }
    }

    /// The Graph
    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    /// The routes, if any were given
    pub fn routes(&self) -> Option<&'a RouteTable> {
        self.routes
    }

    /// The destination of the routes, if any were given
    pub fn destination(&self) -> Option<NodeID> {
        self.routes.map(RouteTable::destination)
    }

    /// All Nodes that have a position, ordered by id
    pub fn positioned_nodes(&self) -> impl Iterator<Item = (NodeID, Point)> + 'a {
        self.graph
            .nodes()
            .iter()
            .filter_map(|node| node.pos().map(|pos| (node.id(), pos)))
    }

    /// The number of columns and rows needed to place every positioned Node.
    ///
    /// ## Errors
    /// - [`RenderError::NothingToDraw`] if no Node has a position
    /// - [`RenderError::TooLarge`] if the grid would have more than
    ///   [`MAX_GRID_CELLS`](SceneView::MAX_GRID_CELLS) cells
    pub fn bounds(&self) -> Result<(usize, usize), RenderError> {
        let too_large = || RenderError::TooLarge {
            limit: SceneView::MAX_GRID_CELLS,
        };
        let mut bounds = None;
        for (_, (x, y)) in self.positioned_nodes() {
            let size = x.checked_add(1).zip(y.checked_add(1));
            let (w, h) = size.ok_or_else(too_large)?;
            let (width, height) = bounds.unwrap_or((0, 0));
            bounds = Some((w.max(width), h.max(height)));
        }
        let (width, height) = bounds.ok_or(RenderError::NothingToDraw)?;
        match width.checked_mul(height) {
            Some(cells) if cells <= SceneView::MAX_GRID_CELLS => Ok((width, height)),
            _ => Err(too_large()),
        }
    }

    /// All Edges in declaration order
    pub fn edges(&self) -> impl Iterator<Item = SceneEdge> + '_ {
        self.graph.edges().iter().map(move |edge| self.scene_edge(edge))
    }

    fn scene_edge(&self, edge: &Edge) -> SceneEdge {
        let (a, b) = edge.endpoints();
        SceneEdge {
            a,
            b,
            weight: edge.weight(),
            tier: edge
                .tier()
                .or_else(|| WeightPolicy::DEFAULT.classify(edge.weight())),
            highlighted: self.used.contains(&edge.key()),
        }
    }
}

/// Something that can visualize a [`SceneView`]
pub trait Renderer {
    /// Draws the scene
    fn render(&mut self, scene: &SceneView<'_>) -> Result<(), RenderError>;
}

/// Draws the grid layout and the Edge list as plain text.
///
/// ```no_code
///   7   6   -   5   4
///   8  11   -   2   3
///   9  10   -   1   0*
/// ```
/// The destination is marked with `*`, grid cells without a Node with `-`.
/// Edges used by a route are marked with `*` in the Edge list.
#[derive(Debug)]
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    /// Creates a renderer that writes to `out`
    pub fn new(out: W) -> TextRenderer<W> {
        TextRenderer { out }
    }

    /// Returns the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TextRenderer<W> {
    fn render(&mut self, scene: &SceneView<'_>) -> Result<(), RenderError> {
        let (width, height) = scene.bounds()?;

        let mut grid = vec![vec![None; width]; height];
        for (id, (x, y)) in scene.positioned_nodes() {
            grid[y][x] = Some(id);
        }

        for row in grid.iter().rev() {
            let mut line = String::new();
            for cell in row {
                match cell {
                    Some(id) => {
                        let marker = if scene.destination() == Some(*id) { '*' } else { ' ' };
                        line.push_str(&format!("{:>3}{}", id, marker));
                    }
                    None => line.push_str("  - "),
                }
            }
            writeln!(self.out, "{}", line.trim_end())?;
        }

        writeln!(self.out)?;
        for edge in scene.edges() {
            let style = edge.style();
            writeln!(
                self.out,
                "{:>3} -- {:<3}: {} ({}){}",
                edge.a,
                edge.b,
                edge.weight,
                style.color,
                if edge.highlighted { " *" } else { "" }
            )?;
        }
        self.out.flush()?;
        Ok(())
    }
}

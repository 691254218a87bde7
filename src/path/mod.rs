//! Paths through the Graph and their Cost.

mod generic_path;
pub use generic_path::Path;

/// a Type to represent the Cost of traversing an Edge, or a sequence of Edges
pub type Cost = f64;

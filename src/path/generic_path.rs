use super::Cost;
use std::fmt;

/// A sequence of Nodes together with the total Cost of traversing them.
///
/// The individual costs of the steps within the Path are not stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
    /// the Nodes, from start to goal
    pub path: Vec<P>,
    /// the total Cost of the Path
    pub cost: Cost,
}

impl<P> Path<P> {
    /// creates a new Path with the given sequence of Nodes and total Cost
    /// ## Examples
    /// Basic usage:
    /// ```
    /// # use site_routing::path::Path;
    /// let path = Path::new(vec![3, 4, 0], 2.5);
    ///
    /// assert_eq!(path.path, vec![3, 4, 0]);
    /// assert_eq!(path.cost, 2.5);
    /// ```
    pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
        Path { path, cost }
    }
}

impl<P: fmt::Display> Path<P> {
    /// Joins the Nodes of the Path with `" -> "`
    /// ```
    /// # use site_routing::path::Path;
    /// let path = Path::new(vec![3, 4, 0], 1.5);
    /// assert_eq!(path.describe(), "3 -> 4 -> 0");
    /// ```
    pub fn describe(&self) -> String {
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

impl<P: fmt::Display> fmt::Display for Path<P> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        if self.path.is_empty() {
            write!(fmt, "Path[Cost = {}]: <empty>", self.cost)
        } else {
            write!(fmt, "Path[Cost = {}]: {}", self.cost, self.describe())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Path;

    #[test]
    fn display() {
        let path = Path::new(vec![4, 2, 0], 2.5);

        assert_eq!(&format!("{}", path), "Path[Cost = 2.5]: 4 -> 2 -> 0");
    }

    #[test]
    fn display_empty() {
        let path = Path::new(Vec::<i32>::new(), 0.0);

        assert_eq!(&format!("{}", path), "Path[Cost = 0]: <empty>");
        assert_eq!(path.describe(), "");
    }
}

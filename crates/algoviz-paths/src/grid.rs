//! The grid model: [`Node`] and the arena-backed [`Grid`].
//!
//! Nodes live in a flat row-major `Vec`; the search tree link
//! [`Node::previous`] is an index into that arena rather than a reference,
//! so resetting between runs is a plain loop.

use std::fmt;

use algoviz_core::{Config, Error, Point, Result};

use crate::path::Path;

/// Sentinel distance of a node not (yet) reached by a search.
pub const UNREACHABLE: i32 = i32::MAX;

/// One grid cell.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub pos: Point,
    pub is_wall: bool,
    /// Cost from the start found by the last search.
    pub distance: i32,
    /// Arena index of the node this one was reached from.
    pub previous: Option<usize>,
    /// Cost of entering this node. Always at least 1.
    pub weight: i32,
}

impl Node {
    fn new(pos: Point) -> Self {
        Self {
            pos,
            is_wall: false,
            distance: UNREACHABLE,
            previous: None,
            weight: 1,
        }
    }
}

/// A fixed-size grid of [`Node`]s with optional start and end markers.
///
/// Invariants: dimensions never change, start and end are distinct, and
/// neither is ever a wall. Deserialized grids are checked against the same
/// invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "GridRepr"))]
pub struct Grid {
    rows: usize,
    cols: usize,
    nodes: Vec<Node>,
    start: Option<usize>,
    end: Option<usize>,
}

impl Grid {
    /// Create an open grid with no start or end.
    ///
    /// Dimensions must fit in an `i32` coordinate.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let (Ok(max_row), Ok(max_col)) = (i32::try_from(rows), i32::try_from(cols)) else {
            return Err(Error::InvalidInput(format!(
                "grid of {rows}x{cols} is too large"
            )));
        };
        let len = rows.checked_mul(cols).ok_or_else(|| {
            Error::InvalidInput(format!("grid of {rows}x{cols} is too large"))
        })?;

        let mut nodes = Vec::with_capacity(len);
        for row in 0..max_row {
            for col in 0..max_col {
                nodes.push(Node::new(Point::new(row, col)));
            }
        }
        Ok(Self {
            rows,
            cols,
            nodes,
            start: None,
            end: None,
        })
    }

    /// Create a grid sized by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.grid_rows, config.grid_cols)
    }

    /// Parse a grid from ASCII art: `.` open, `#` wall, `S` start, `E` end.
    ///
    /// Surrounding whitespace is trimmed; every line must have the same
    /// width.
    pub fn from_ascii(s: &str) -> Result<Self> {
        let lines: Vec<&str> = s.trim().lines().map(str::trim).collect();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        if lines.iter().any(|l| l.chars().count() != cols) {
            return Err(Error::InvalidInput("grid lines differ in width".into()));
        }

        let mut grid = Self::new(lines.len(), cols)?;
        for (row, line) in lines.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                let p = Point::new(row as i32, col as i32);
                match ch {
                    '.' => {}
                    '#' => grid.set_wall(p, true)?,
                    'S' => grid.set_start(p)?,
                    'E' => grid.set_end(p)?,
                    _ => {
                        return Err(Error::InvalidInput(format!(
                            "unexpected {ch:?} at {p}"
                        )));
                    }
                }
            }
        }
        Ok(grid)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.row >= 0 && p.col >= 0 && (p.row as usize) < self.rows && (p.col as usize) < self.cols
    }

    /// Convert a `Point` to an arena index. Returns `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Point) -> Option<usize> {
        self.contains(p)
            .then(|| p.row as usize * self.cols + p.col as usize)
    }

    /// Convert an arena index back to a `Point`. `idx` must be in range.
    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.nodes[idx].pos
    }

    fn checked_idx(&self, p: Point) -> Result<usize> {
        self.idx(p).ok_or(Error::OutOfBounds(p))
    }

    /// The node at `p`, if in bounds.
    pub fn node(&self, p: Point) -> Option<&Node> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    /// All nodes in row-major order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn start(&self) -> Option<Point> {
        self.start.map(|i| self.point(i))
    }

    pub fn end(&self) -> Option<Point> {
        self.end.map(|i| self.point(i))
    }

    pub fn is_start(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.start == Some(i))
    }

    pub fn is_end(&self, p: Point) -> bool {
        self.idx(p).is_some_and(|i| self.end == Some(i))
    }

    pub fn is_wall(&self, p: Point) -> bool {
        self.node(p).is_some_and(|n| n.is_wall)
    }

    /// Move the start marker to `p`, clearing any wall there. If `p` was the
    /// end, the end marker is removed.
    pub fn set_start(&mut self, p: Point) -> Result<()> {
        let i = self.checked_idx(p)?;
        self.nodes[i].is_wall = false;
        if self.end == Some(i) {
            self.end = None;
        }
        self.start = Some(i);
        Ok(())
    }

    /// Move the end marker to `p`, clearing any wall there. If `p` was the
    /// start, the start marker is removed.
    pub fn set_end(&mut self, p: Point) -> Result<()> {
        let i = self.checked_idx(p)?;
        self.nodes[i].is_wall = false;
        if self.start == Some(i) {
            self.start = None;
        }
        self.end = Some(i);
        Ok(())
    }

    /// Flip the wall at `p`. Start and end cannot become walls; toggling them
    /// does nothing. Returns whether `p` is now a wall.
    pub fn toggle_wall(&mut self, p: Point) -> Result<bool> {
        let wall = !self.is_wall(p);
        self.set_wall(p, wall)?;
        Ok(self.is_wall(p))
    }

    /// Set or clear the wall at `p`. Ignored on start and end.
    pub fn set_wall(&mut self, p: Point, wall: bool) -> Result<()> {
        let i = self.checked_idx(p)?;
        if self.start == Some(i) || self.end == Some(i) {
            return Ok(());
        }
        self.nodes[i].is_wall = wall;
        Ok(())
    }

    /// Set the cost of entering `p`. Must be at least 1.
    pub fn set_weight(&mut self, p: Point, weight: i32) -> Result<()> {
        if weight < 1 {
            return Err(Error::InvalidInput(format!(
                "weight must be positive, got {weight}"
            )));
        }
        let i = self.checked_idx(p)?;
        self.nodes[i].weight = weight;
        Ok(())
    }

    /// Forget the results of the last search.
    pub fn reset_search(&mut self) {
        for n in &mut self.nodes {
            n.distance = UNREACHABLE;
            n.previous = None;
        }
    }

    /// Start and end arena indices, or [`Error::PreconditionUnmet`].
    pub(crate) fn endpoints(&self) -> Result<(usize, usize)> {
        match (self.start, self.end) {
            (Some(s), Some(e)) => Ok((s, e)),
            (None, _) => Err(Error::PreconditionUnmet("start node is not set")),
            (_, None) => Err(Error::PreconditionUnmet("end node is not set")),
        }
    }

    /// Check the preconditions and clear the previous search.
    pub(crate) fn begin_search(&mut self) -> Result<(usize, usize)> {
        let ends = self.endpoints()?;
        self.reset_search();
        Ok(ends)
    }

    /// Walk `previous` links back from `end` and return the path from the
    /// start.
    pub(crate) fn trace_path(&self, end: usize) -> Path {
        let mut nodes = Vec::new();
        let mut cur = Some(end);
        while let Some(i) = cur {
            nodes.push(self.point(i));
            cur = self.nodes[i].previous;
        }
        nodes.reverse();
        Path::new(nodes)
    }
}

impl fmt::Display for Grid {
    /// ASCII art in the format accepted by [`Grid::from_ascii`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let i = row * self.cols + col;
                let ch = if self.start == Some(i) {
                    'S'
                } else if self.end == Some(i) {
                    'E'
                } else if self.nodes[i].is_wall {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Unchecked wire form of a [`Grid`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct GridRepr {
    rows: usize,
    cols: usize,
    nodes: Vec<Node>,
    start: Option<usize>,
    end: Option<usize>,
}

#[cfg(feature = "serde")]
impl TryFrom<GridRepr> for Grid {
    type Error = Error;

    fn try_from(repr: GridRepr) -> Result<Self> {
        let GridRepr {
            rows,
            cols,
            nodes,
            start,
            end,
        } = repr;
        let invalid = |msg: String| Err(Error::InvalidInput(msg));

        let fits = i32::try_from(rows).is_ok() && i32::try_from(cols).is_ok();
        if !fits || rows.checked_mul(cols) != Some(nodes.len()) {
            return invalid(format!(
                "{} nodes do not fill a {rows}x{cols} grid",
                nodes.len()
            ));
        }

        let len = nodes.len();
        for (i, n) in nodes.iter().enumerate() {
            // Fits: i / cols < rows and i % cols < cols, both checked above.
            let want = Point::new((i / cols) as i32, (i % cols) as i32);
            if n.pos != want {
                return invalid(format!("node {i} is at {}, expected {want}", n.pos));
            }
            if n.weight < 1 {
                return invalid(format!("node at {want} has weight {}", n.weight));
            }
            if n.previous.is_some_and(|prev| prev >= len) {
                return invalid(format!("node at {want} links outside the grid"));
            }
        }

        for (what, idx) in [("start", start), ("end", end)] {
            let Some(i) = idx else { continue };
            match nodes.get(i) {
                None => return invalid(format!("{what} index {i} is outside the grid")),
                Some(n) if n.is_wall => return invalid(format!("{what} {} is a wall", n.pos)),
                Some(_) => {}
            }
        }
        if start.is_some() && start == end {
            return invalid("start and end are the same node".into());
        }

        Ok(Self {
            rows,
            cols,
            nodes,
            start,
            end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_open() {
        let g = Grid::new(3, 4).unwrap();
        assert_eq!(g.len(), 12);
        assert_eq!(g.idx(Point::new(1, 2)), Some(6));
        assert_eq!(g.point(6), Point::new(1, 2));
        assert_eq!(g.idx(Point::new(3, 0)), None);
        assert_eq!(g.idx(Point::new(0, -1)), None);
        assert!(g.nodes().iter().all(|n| !n.is_wall && n.weight == 1));
        assert!(g.nodes().iter().all(|n| n.distance == UNREACHABLE));
    }

    #[test]
    fn start_and_end_displace_each_other() {
        let mut g = Grid::new(2, 2).unwrap();
        let p = Point::new(0, 1);
        g.set_end(p).unwrap();
        g.set_start(p).unwrap();
        assert_eq!(g.start(), Some(p));
        assert_eq!(g.end(), None);
        g.set_end(p).unwrap();
        assert_eq!(g.start(), None);
        assert!(g.is_end(p));
    }

    #[test]
    fn markers_clear_walls_and_resist_toggling() {
        let mut g = Grid::new(2, 2).unwrap();
        let p = Point::new(1, 1);
        assert!(g.toggle_wall(p).unwrap());
        g.set_start(p).unwrap();
        assert!(!g.is_wall(p));
        assert!(!g.toggle_wall(p).unwrap());
        assert!(!g.is_wall(p));
    }

    #[test]
    fn edits_outside_are_rejected() {
        let mut g = Grid::new(2, 2).unwrap();
        let out = Point::new(5, 0);
        assert_eq!(g.set_start(out), Err(Error::OutOfBounds(out)));
        assert_eq!(g.toggle_wall(out), Err(Error::OutOfBounds(out)));
        assert!(g.set_weight(Point::ZERO, 0).is_err());
        assert!(g.set_weight(Point::ZERO, 3).is_ok());
    }

    #[test]
    fn endpoints_require_both_markers() {
        let mut g = Grid::new(2, 2).unwrap();
        assert!(matches!(g.endpoints(), Err(Error::PreconditionUnmet(_))));
        g.set_start(Point::ZERO).unwrap();
        assert!(matches!(g.endpoints(), Err(Error::PreconditionUnmet(_))));
        g.set_end(Point::new(1, 1)).unwrap();
        assert_eq!(g.endpoints(), Ok((0, 3)));
    }

    #[test]
    fn ascii_round_trip() {
        let art = "S.#\n.#.\n..E\n";
        let g = Grid::from_ascii(art).unwrap();
        assert_eq!(g.rows(), 3);
        assert_eq!(g.cols(), 3);
        assert_eq!(g.start(), Some(Point::new(0, 0)));
        assert_eq!(g.end(), Some(Point::new(2, 2)));
        assert!(g.is_wall(Point::new(1, 1)));
        assert_eq!(g.to_string(), art);
    }

    #[test]
    fn ascii_rejects_bad_input() {
        assert!(Grid::from_ascii("..\n.").is_err());
        assert!(Grid::from_ascii(".x").is_err());
    }

    #[test]
    fn oversized_dimensions_are_rejected() {
        let too_big = i32::MAX as usize + 1;
        assert!(matches!(Grid::new(too_big, 1), Err(Error::InvalidInput(_))));
        assert!(matches!(Grid::new(2, too_big), Err(Error::InvalidInput(_))));
        assert!(Grid::new(0, 0).unwrap().is_empty());
    }

    #[test]
    fn from_config_uses_dimensions() {
        let g = Grid::from_config(&Config::default()).unwrap();
        assert_eq!((g.rows(), g.cols()), (25, 50));
    }
}

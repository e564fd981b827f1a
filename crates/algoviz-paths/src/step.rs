use algoviz_core::Point;

/// An observable event of a pathfinding run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathStep {
    /// The search expanded this node. Each node is visited at most once per
    /// run.
    Visit(Point),
    /// This node is on the found path. Emitted in start-to-end order,
    /// excluding the start itself.
    Path(Point),
}

impl PathStep {
    /// The node the event refers to.
    pub fn point(self) -> Point {
        match self {
            Self::Visit(p) | Self::Path(p) => p,
        }
    }
}

use std::fmt;

/// Dimension by which the children of a stack are arranged.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Children are arranged in a row.
    #[default]
    Horizontal,
    /// Children are arranged in a column.
    Vertical,
}
impl Orientation {
    /// If is [`Horizontal`].
    ///
    /// [`Horizontal`]: Self::Horizontal
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }

    /// If is [`Vertical`].
    ///
    /// [`Vertical`]: Self::Vertical
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Vertical)
    }
}
impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// Space in-between the children of a stack.
///
/// The actual size of each level is defined by the renderer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spacing {
    /// No space.
    None,
    /// Small space.
    #[default]
    Small,
    /// Medium space.
    Medium,
    /// Large space.
    Large,
}
impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Spacing::None => write!(f, "none"),
            Spacing::Small => write!(f, "small"),
            Spacing::Medium => write!(f, "medium"),
            Spacing::Large => write!(f, "large"),
        }
    }
}

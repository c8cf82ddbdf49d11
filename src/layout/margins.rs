use crate::units::Px;

/// Margins are the clear space kept around laid out content when it is composed into
/// a document. They are added outside the tight bounding box of the glyph outlines,
/// so the outermost ink always sits exactly `left` / `top` / ... pixels from the
/// document edges.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: Px,
    pub right: Px,
    pub bottom: Px,
    pub left: Px,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(top: Px, right: Px, bottom: Px, left: Px) -> Margins {
        Margins {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create margins where all values are equal
    pub fn all<D: Into<Px>>(value: D) -> Margins {
        let value: Px = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: Px, horizontal: Px) -> Margins {
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::all(Px::ZERO)
    }

    /// Total horizontal clear space (left + right)
    pub fn horizontal(&self) -> Px {
        self.left + self.right
    }

    /// Total vertical clear space (top + bottom)
    pub fn vertical(&self) -> Px {
        self.top + self.bottom
    }
}

use std::ops::Add;

/// A cell coordinate on the board.  Coordinates are signed so that a position
/// one step past an edge can still be represented and rejected.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub(crate) struct GridPos {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl GridPos {
    pub(crate) const fn new(x: i32, y: i32) -> GridPos {
        GridPos { x, y }
    }
}

impl Add for GridPos {
    type Output = GridPos;

    fn add(self, rhs: GridPos) -> GridPos {
        GridPos {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

/// The rectangular playing field.  Cell `(0, 0)` is the top-left corner.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    width: u16,
    height: u16,
}

impl Board {
    /// Create a board of the given size.  Callers are responsible for keeping
    /// both dimensions at least 3.
    pub(crate) fn new(width: u16, height: u16) -> Board {
        Board { width, height }
    }

    pub(crate) fn width(self) -> u16 {
        self.width
    }

    pub(crate) fn height(self) -> u16 {
        self.height
    }

    /// Is `pos` within the bounds of the board?
    pub(crate) fn inside(self, pos: GridPos) -> bool {
        (0..i32::from(self.width)).contains(&pos.x) && (0..i32::from(self.height)).contains(&pos.y)
    }

    /// Iterate over every cell of the board in row-major order: increasing
    /// `y`, then increasing `x`.
    pub(crate) fn positions(self) -> impl Iterator<Item = GridPos> {
        let width = i32::from(self.width);
        (0..i32::from(self.height)).flat_map(move |y| (0..width).map(move |x| GridPos::new(x, y)))
    }
}

use super::board::GridPos;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The change in position produced by one step in this direction
    pub(crate) fn offset(self) -> GridPos {
        match self {
            Direction::Up => GridPos::new(0, -1),
            Direction::Down => GridPos::new(0, 1),
            Direction::Left => GridPos::new(-1, 0),
            Direction::Right => GridPos::new(1, 0),
        }
    }

    pub(crate) fn reverse(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub(crate) fn is_opposite(self, other: Direction) -> bool {
        self.reverse() == other
    }
}

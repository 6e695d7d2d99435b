use super::board::{Board, GridPos};
use super::snake::Snake;
use crate::random::RandomSource;

/// The single piece of food on the board.  It has no position until the
/// first call to [`Food::respawn()`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Food {
    pub(super) position: Option<GridPos>,
}

impl Food {
    pub(crate) fn position(&self) -> Option<GridPos> {
        self.position
    }

    /// Move the food to a cell chosen uniformly among those on `board` that
    /// are not occupied by `snake`.  Returns `false` and leaves the food where
    /// it was if the snake fills the board.
    pub(crate) fn respawn<R: RandomSource + ?Sized>(
        &mut self,
        board: Board,
        snake: &Snake,
        random: &mut R,
    ) -> bool {
        let free = board
            .positions()
            .filter(|&p| !snake.occupies(p))
            .collect::<Vec<_>>();
        let Some(last) = free.len().checked_sub(1) else {
            log::warn!(
                "No free cell left for food; keeping it at {:?}",
                self.position
            );
            return false;
        };
        let Some(&pos) = free.get(random.uniform_int(0, last)) else {
            return false;
        };
        log::debug!("Placed food at ({}, {})", pos.x, pos.y);
        self.position = Some(pos);
        true
    }
}

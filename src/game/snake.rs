use super::board::GridPos;
use super::direction::Direction;
use crate::consts;
use std::collections::VecDeque;
use std::num::NonZeroUsize;

/// Snake state.  Snate.
///
/// All positions are relative to the top-left corner of the board the snake
/// is on.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Snake {
    /// The position of the snake's head
    head: GridPos,

    /// The cells behind the head, from the neck to the tip of the tail
    trail: VecDeque<GridPos>,

    /// The direction committed on the most recent tick
    direction: Direction,
}

impl Snake {
    /// Create a snake laid out by [`Snake::reset()`]
    pub(crate) fn new(start: GridPos, length: NonZeroUsize, direction: Direction) -> Snake {
        let mut snake = Snake {
            head: start,
            trail: VecDeque::new(),
            direction,
        };
        snake.reset(start, length, direction);
        snake
    }

    /// Rebuild the snake as a straight line of `length` cells with its head
    /// at `start` and its tail extending towards decreasing `x`.  No bounds
    /// checking is done.
    pub(crate) fn reset(&mut self, start: GridPos, length: NonZeroUsize, direction: Direction) {
        self.head = start;
        self.direction = direction;
        self.trail.clear();
        self.trail.extend(
            std::iter::successors(Some(start), |p| Some(GridPos::new(p.x - 1, p.y)))
                .skip(1)
                .take(length.get() - 1),
        );
    }

    /// Return the position of the snake's head
    pub(crate) fn head(&self) -> GridPos {
        self.head
    }

    /// Iterate over the cells of the snake from head to tail
    pub(crate) fn body(&self) -> impl Iterator<Item = GridPos> + '_ {
        std::iter::once(self.head).chain(self.trail.iter().copied())
    }

    pub(crate) fn len(&self) -> usize {
        self.trail.len() + 1
    }

    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    /// Commit `direction` as the direction of travel for the next move.
    /// Reversals are not filtered here.
    pub(crate) fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// Return the cell the head would occupy after the next move
    pub(crate) fn next_head_position(&self) -> GridPos {
        self.head + self.direction.offset()
    }

    /// Move the snake forwards one cell in its current direction.  If `grow`
    /// is `true`, the tail stays put and the snake becomes one cell longer.
    pub(crate) fn advance(&mut self, grow: bool) {
        let next = self.next_head_position();
        self.trail.push_front(self.head);
        self.head = next;
        if !grow {
            let _ = self.trail.pop_back();
        }
    }

    /// Does any part of the snake occupy `pos`?
    pub(crate) fn occupies(&self, pos: GridPos) -> bool {
        self.head == pos || self.trail.contains(&pos)
    }

    /// Has the head run into the rest of the body?  Only meaningful after a
    /// call to [`Snake::advance()`].
    pub(crate) fn self_collision(&self) -> bool {
        self.trail.contains(&self.head)
    }

    /// Return the glyph to use for drawing the snake's head
    pub(crate) fn head_symbol(&self) -> char {
        match self.direction {
            Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
            Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
            Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
            Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn length(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn reset_lays_out_along_negative_x() {
        let snake = Snake::new(GridPos::new(5, 5), length(3), Direction::Right);
        assert_eq!(
            snake.body().collect::<Vec<_>>(),
            [GridPos::new(5, 5), GridPos::new(4, 5), GridPos::new(3, 5)]
        );
        assert_eq!(snake.head(), GridPos::new(5, 5));
        assert_eq!(snake.direction(), Direction::Right);
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn reset_replaces_previous_body() {
        let mut snake = Snake::new(GridPos::new(5, 5), length(4), Direction::Right);
        snake.set_direction(Direction::Down);
        snake.advance(true);
        snake.reset(GridPos::new(2, 1), length(2), Direction::Up);
        assert_eq!(
            snake.body().collect::<Vec<_>>(),
            [GridPos::new(2, 1), GridPos::new(1, 1)]
        );
        assert_eq!(snake.direction(), Direction::Up);
    }

    #[test]
    fn reset_does_not_check_bounds() {
        let snake = Snake::new(GridPos::new(0, 0), length(3), Direction::Right);
        assert_eq!(
            snake.body().collect::<Vec<_>>(),
            [GridPos::new(0, 0), GridPos::new(-1, 0), GridPos::new(-2, 0)]
        );
    }

    #[rstest]
    #[case(Direction::Up, GridPos::new(5, 4))]
    #[case(Direction::Down, GridPos::new(5, 6))]
    #[case(Direction::Right, GridPos::new(6, 5))]
    #[case(Direction::Left, GridPos::new(4, 5))]
    fn next_head_is_pure(#[case] d: Direction, #[case] next: GridPos) {
        let mut snake = Snake::new(GridPos::new(5, 5), length(3), Direction::Right);
        snake.set_direction(d);
        let before = snake.clone();
        assert_eq!(snake.next_head_position(), next);
        assert_eq!(snake, before);
    }

    #[rstest]
    #[case(1, Direction::Right)]
    #[case(1, Direction::Up)]
    #[case(3, Direction::Down)]
    #[case(6, Direction::Right)]
    fn advance_without_growth_keeps_length(#[case] n: usize, #[case] d: Direction) {
        let mut snake = Snake::new(GridPos::new(5, 5), length(n), Direction::Right);
        snake.set_direction(d);
        let old_head = snake.head();
        snake.advance(false);
        assert_eq!(snake.len(), n);
        assert_eq!(snake.head(), old_head + d.offset());
    }

    #[rstest]
    #[case(1)]
    #[case(3)]
    #[case(6)]
    fn advance_with_growth_adds_one(#[case] n: usize) {
        let mut snake = Snake::new(GridPos::new(5, 5), length(n), Direction::Right);
        snake.set_direction(Direction::Down);
        snake.advance(true);
        assert_eq!(snake.len(), n + 1);
        assert_eq!(snake.head(), GridPos::new(5, 6));
        assert_eq!(
            snake.body().last(),
            Some(GridPos::new(6 - i32::try_from(n).unwrap(), 5))
        );
    }

    #[test]
    fn advance_drops_tail() {
        let mut snake = Snake::new(GridPos::new(5, 5), length(3), Direction::Right);
        snake.advance(false);
        assert_eq!(
            snake.body().collect::<Vec<_>>(),
            [GridPos::new(6, 5), GridPos::new(5, 5), GridPos::new(4, 5)]
        );
    }

    #[test]
    fn occupies_every_body_cell() {
        let snake = Snake::new(GridPos::new(5, 5), length(3), Direction::Right);
        assert!(snake.occupies(GridPos::new(5, 5)));
        assert!(snake.occupies(GridPos::new(4, 5)));
        assert!(snake.occupies(GridPos::new(3, 5)));
        assert!(!snake.occupies(GridPos::new(2, 5)));
        assert!(!snake.occupies(GridPos::new(5, 4)));
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(5)]
    #[case(20)]
    fn no_collision_after_reset(#[case] n: usize) {
        let snake = Snake::new(GridPos::new(5, 5), length(n), Direction::Right);
        assert!(!snake.self_collision());
    }

    #[rstest]
    #[case(Direction::Up)]
    #[case(Direction::Down)]
    #[case(Direction::Left)]
    #[case(Direction::Right)]
    fn single_cell_never_collides(#[case] d: Direction) {
        let mut snake = Snake::new(GridPos::new(5, 5), length(1), Direction::Right);
        snake.set_direction(d);
        snake.advance(false);
        assert!(!snake.self_collision());
    }

    #[test]
    fn reversing_onto_vacated_tail_does_not_collide() {
        let mut snake = Snake::new(GridPos::new(5, 5), length(2), Direction::Right);
        snake.set_direction(Direction::Left);
        snake.advance(false);
        assert_eq!(
            snake.body().collect::<Vec<_>>(),
            [GridPos::new(4, 5), GridPos::new(5, 5)]
        );
        assert!(!snake.self_collision());
    }

    #[test]
    fn reversing_into_body_collides() {
        let mut snake = Snake::new(GridPos::new(5, 5), length(3), Direction::Right);
        snake.set_direction(Direction::Left);
        snake.advance(false);
        assert!(snake.self_collision());
    }

    #[test]
    fn curling_into_body_collides() {
        let mut snake = Snake::new(GridPos::new(5, 5), length(5), Direction::Right);
        for d in [Direction::Down, Direction::Left] {
            snake.set_direction(d);
            snake.advance(false);
            assert!(!snake.self_collision());
        }
        snake.set_direction(Direction::Up);
        snake.advance(false);
        assert!(snake.self_collision());
        assert_eq!(snake.head(), GridPos::new(4, 5));
    }

    #[test]
    fn chasing_tail_does_not_collide() {
        // A 2x2 loop of four cells: the tail leaves the cell the head enters.
        let mut snake = Snake::new(GridPos::new(5, 5), length(4), Direction::Right);
        for d in [Direction::Down, Direction::Left, Direction::Up] {
            snake.set_direction(d);
            snake.advance(false);
        }
        assert!(!snake.self_collision());
    }

    #[rstest]
    #[case(Direction::Up, 'v')]
    #[case(Direction::Down, '^')]
    #[case(Direction::Left, '>')]
    #[case(Direction::Right, '<')]
    fn head_symbol(#[case] d: Direction, #[case] sym: char) {
        let mut snake = Snake::new(GridPos::new(5, 5), length(3), Direction::Right);
        snake.set_direction(d);
        assert_eq!(snake.head_symbol(), sym);
    }
}

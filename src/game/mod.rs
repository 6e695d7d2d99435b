mod board;
mod direction;
mod food;
mod snake;
mod view;
pub(crate) use self::board::{Board, GridPos};
pub(crate) use self::direction::Direction;
use self::food::Food;
pub(crate) use self::snake::Snake;
pub(crate) use self::view::GameView;
use crate::consts;
use crate::highscores::{HighscoreFile, HighscoreTable, SaveError, ScoreSink};
use crate::random::RandomSource;
use std::time::Duration;

/// The simulation: board, snake, food, score and leaderboard, advanced in
/// fixed-length ticks.
#[derive(Clone, Debug)]
pub(crate) struct Engine<R = rand::rngs::ThreadRng, S = HighscoreFile> {
    rng: R,
    sink: S,
    board: Board,
    snake: Snake,
    food: Food,
    highscores: HighscoreTable,
    state: GameState,
    score: u32,
    /// Direction requested by input, committed to the snake on the next tick
    pending_direction: Direction,
    /// Set once the current run's score has been written to the leaderboard
    highscore_recorded: bool,
    /// Elapsed time not yet consumed by ticks
    accumulator: Duration,
    tick_period: Duration,
    player_name: String,
    name_input: String,
}

impl<R: RandomSource, S: ScoreSink> Engine<R, S> {
    /// Create an engine waiting for the player's name.  `tick_period` must be
    /// nonzero.
    pub(crate) fn new(
        board: Board,
        tick_period: Duration,
        highscores: HighscoreTable,
        sink: S,
        rng: R,
    ) -> Engine<R, S> {
        let mut engine = Engine {
            rng,
            sink,
            board,
            snake: Snake::new(
                start_position(board),
                consts::INITIAL_SNAKE_LENGTH,
                Direction::Right,
            ),
            food: Food::default(),
            highscores,
            state: GameState::AwaitingName,
            score: 0,
            pending_direction: Direction::Right,
            highscore_recorded: false,
            accumulator: Duration::ZERO,
            tick_period,
            player_name: String::new(),
            name_input: String::new(),
        };
        engine.spawn_food();
        engine
    }

    /// Apply an input signal.  Signals that mean nothing in the current state
    /// are ignored.
    pub(crate) fn handle(&mut self, signal: Signal) {
        match (self.state, signal) {
            (GameState::AwaitingName, Signal::EditName(ch)) => self.edit_name(ch),
            (GameState::AwaitingName, Signal::EraseName) => {
                let _ = self.name_input.pop();
            }
            (GameState::AwaitingName, Signal::ConfirmName) => self.confirm_name(),
            (GameState::AwaitingName, _) => (),
            (GameState::Running | GameState::Paused, Signal::Turn(d)) => self.request_direction(d),
            (GameState::Running | GameState::Paused, Signal::TogglePause) => self.toggle_pause(),
            (_, Signal::Restart) => self.restart(),
            _ => (),
        }
    }

    /// Advance the simulation by `dt` of real time, running as many ticks as
    /// have come due.  When a run ends, its score is recorded on the
    /// leaderboard and saved exactly once.
    pub(crate) fn update(&mut self, dt: Duration) -> Result<(), SaveError> {
        if self.state == GameState::Running {
            self.accumulator = self.accumulator.saturating_add(dt);
            while self.state == GameState::Running && self.accumulator >= self.tick_period {
                self.process_tick();
                self.accumulator -= self.tick_period;
            }
        }
        if self.state == GameState::Ended && !self.highscore_recorded {
            self.record_highscore()?;
        }
        Ok(())
    }

    fn process_tick(&mut self) {
        self.snake.set_direction(self.pending_direction);
        let next_head = self.snake.next_head_position();
        if !self.board.inside(next_head) {
            self.end("hit the wall");
            return;
        }
        let grow = self.food.position() == Some(next_head);
        self.snake.advance(grow);
        if self.snake.self_collision() {
            self.end("ran into itself");
            return;
        }
        if grow {
            self.score += 1;
            self.spawn_food();
        }
    }

    fn end(&mut self, reason: &str) {
        log::info!(
            "Run ended for {}: snake of length {} {reason} with score {}",
            self.player_name,
            self.snake.len(),
            self.score
        );
        self.state = GameState::Ended;
    }

    fn record_highscore(&mut self) -> Result<(), SaveError> {
        self.highscores
            .record_or_update(&self.player_name, self.score);
        self.highscores.normalize(consts::HIGHSCORE_CAPACITY);
        self.highscore_recorded = true;
        self.sink.save(&self.highscores)
    }

    fn spawn_food(&mut self) {
        let _ = self.food.respawn(self.board, &self.snake, &mut self.rng);
    }

    fn restart(&mut self) {
        log::info!("Restarting");
        self.snake.reset(
            start_position(self.board),
            consts::INITIAL_SNAKE_LENGTH,
            Direction::Right,
        );
        self.pending_direction = Direction::Right;
        self.score = 0;
        self.accumulator = Duration::ZERO;
        self.state = GameState::Running;
        self.highscore_recorded = false;
        self.spawn_food();
    }
}

impl<R, S> Engine<R, S> {
    pub(crate) fn board(&self) -> Board {
        self.board
    }

    pub(crate) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(crate) fn food(&self) -> Option<GridPos> {
        self.food.position()
    }

    pub(crate) fn state(&self) -> GameState {
        self.state
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn highscores(&self) -> &HighscoreTable {
        &self.highscores
    }

    pub(crate) fn player_name(&self) -> &str {
        &self.player_name
    }

    /// The name typed so far while awaiting the player's name
    pub(crate) fn name_input(&self) -> &str {
        &self.name_input
    }

    /// Queue a turn for the next tick.  A request to reverse the direction
    /// committed on the last tick is dropped.
    fn request_direction(&mut self, direction: Direction) {
        if !self.snake.direction().is_opposite(direction) {
            self.pending_direction = direction;
        }
    }

    fn toggle_pause(&mut self) {
        match self.state {
            GameState::Running => {
                self.state = GameState::Paused;
                self.accumulator = Duration::ZERO;
                log::debug!("Paused");
            }
            GameState::Paused => {
                self.state = GameState::Running;
                log::debug!("Resumed");
            }
            GameState::AwaitingName | GameState::Ended => (),
        }
    }

    fn edit_name(&mut self, ch: char) {
        let ch = ch.to_ascii_uppercase();
        if (ch.is_ascii_alphanumeric() || ch == '_')
            && self.name_input.chars().count() < consts::MAX_NAME_LENGTH
        {
            self.name_input.push(ch);
        }
    }

    fn confirm_name(&mut self) {
        self.player_name = if self.name_input.is_empty() {
            String::from(consts::PLACEHOLDER_NAME)
        } else {
            self.name_input.clone()
        };
        self.accumulator = Duration::ZERO;
        self.state = GameState::Running;
        log::info!("Starting run for {}", self.player_name);
    }
}

/// Where the snake's head starts: the middle of the board, nudged right if
/// needed so that the whole initial body fits
fn start_position(board: Board) -> GridPos {
    let width = i32::from(board.width());
    let min_x = i32::try_from(consts::INITIAL_SNAKE_LENGTH.get() - 1).unwrap_or(i32::MAX);
    GridPos::new(
        (width / 2).max(min_x).min(width - 1),
        i32::from(board.height()) / 2,
    )
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum GameState {
    /// The player is typing their name
    AwaitingName,
    Running,
    Paused,
    /// The snake has hit a wall or itself
    Ended,
}

/// Abstract input understood by the engine
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Signal {
    Turn(Direction),
    TogglePause,
    Restart,
    ConfirmName,
    EditName(char),
    EraseName,
}

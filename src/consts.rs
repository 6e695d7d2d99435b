//! Assorted constants & hard-coded configuration
use ratatui::style::{Color, Modifier, Style};
use std::num::NonZeroUsize;
use std::time::Duration;

/// How long the host loop waits for input before running another frame
pub(crate) const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Length of the snake at the start of every run
pub(crate) const INITIAL_SNAKE_LENGTH: NonZeroUsize = match NonZeroUsize::new(3) {
    Some(n) => n,
    None => unreachable!(),
};

/// Maximum number of entries kept on the leaderboard
pub(crate) const HIGHSCORE_CAPACITY: usize = 3;

/// Name recorded for a player who did not enter one
pub(crate) const PLACEHOLDER_NAME: &str = "PLAYER";

/// Maximum number of characters in a player name
pub(crate) const MAX_NAME_LENGTH: usize = 12;

/// Name of the directory under the platform config/data directories
pub(crate) const APP_DIR_NAME: &str = "gridsnake";

/// Default leaderboard file name inside the data directory
pub(crate) const HIGHSCORES_FILE_NAME: &str = "highscores.txt";

/// Log file name inside the data directory
pub(crate) const LOG_FILE_NAME: &str = "gridsnake.log";

/// Minimum width of the area the game screen is drawn in, so that the score
/// bar and key help fit around small boards
pub(crate) const MIN_DISPLAY_WIDTH: u16 = 36;

/// Glyph for the snake's head when it is moving up
pub(crate) const SNAKE_HEAD_UP_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving down
pub(crate) const SNAKE_HEAD_DOWN_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving right
pub(crate) const SNAKE_HEAD_RIGHT_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving left
pub(crate) const SNAKE_HEAD_LEFT_SYMBOL: char = '>';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '⚬';

/// Glyph for the food
pub(crate) const FOOD_SYMBOL: char = '●';

/// Glyph for the snake's head once the run has ended
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for the food
pub(crate) const FOOD_STYLE: Style = Style::new().fg(Color::LightRed);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Style for the score bar at the top of the game screen
pub(crate) const SCORE_BAR_STYLE: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Style for the player name while it is being typed
pub(crate) const NAME_INPUT_STYLE: Style = Style::new().fg(Color::LightGreen);

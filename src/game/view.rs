use super::{Engine, GameState, GridPos};
use crate::consts;
use crate::highscores::HighscoreTable;
use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Position, Rect, Size},
    style::Style,
    text::Line,
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// Read-only rendering of an [`Engine`].  Each board cell is drawn
/// `tile_size` columns wide.
#[derive(Debug)]
pub(crate) struct GameView<'a, R, S> {
    engine: &'a Engine<R, S>,
    tile_size: u16,
}

impl<'a, R, S> GameView<'a, R, S> {
    pub(crate) fn new(engine: &'a Engine<R, S>, tile_size: u16) -> Self {
        GameView { engine, tile_size }
    }
}

impl<R, S> Widget for GameView<'_, R, S> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let engine = self.engine;
        if engine.state() == GameState::AwaitingName {
            let prompt = NamePrompt {
                input: engine.name_input(),
            };
            prompt.render(center_rect(area, NamePrompt::SIZE), buf);
            return;
        }

        let board = engine.board();
        let block_size = Size {
            width: board
                .width()
                .saturating_mul(self.tile_size)
                .saturating_add(2),
            height: board.height().saturating_add(2),
        };
        let display = center_rect(
            area,
            Size {
                width: block_size.width.max(consts::MIN_DISPLAY_WIDTH),
                height: block_size.height.saturating_add(2),
            },
        );
        let [score_area, block_row, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(block_size.height),
            Constraint::Length(1),
        ])
        .areas(display);

        Line::styled(
            format!(
                " {}  Score: {}  Best: {}",
                engine.player_name(),
                engine.score(),
                engine.highscores().best()
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let block_area = center_rect(block_row, block_size);
        Block::bordered().render(block_area, buf);
        let mut level = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            tile_size: self.tile_size,
            buf,
        };
        // Food first so that, if it has nowhere left to go and sits under the
        // snake, the snake is what's shown
        if let Some(pos) = engine.food() {
            level.draw_cell(pos, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        let snake = engine.snake();
        for pos in snake.body().skip(1) {
            level.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if engine.state() == GameState::Ended {
            level.draw_cell(
                snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
        } else {
            level.draw_cell(snake.head(), snake.head_symbol(), consts::SNAKE_STYLE);
        }

        match engine.state() {
            GameState::AwaitingName => (),
            GameState::Running => {
                Line::from(" p: pause  r: restart  Esc: quit").render(help_area, buf);
            }
            GameState::Paused => {
                Line::from(" p: pause  r: restart  Esc: quit").render(help_area, buf);
                Paused.render(center_rect(display, Paused::SIZE), buf);
            }
            GameState::Ended => {
                Line::from(" r: restart  Esc: quit").render(help_area, buf);
                let popup = GameOver {
                    score: engine.score(),
                    highscores: engine.highscores(),
                };
                let size = popup.size();
                popup.render(center_rect(display, size), buf);
            }
        }
    }
}

#[derive(Debug)]
struct Canvas<'a> {
    area: Rect,
    tile_size: u16,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: GridPos, symbol: char, style: Style) {
        let (Ok(x), Ok(y)) = (u16::try_from(pos.x), u16::try_from(pos.y)) else {
            return;
        };
        let Some(x) = x
            .checked_mul(self.tile_size)
            .and_then(|x| x.checked_add(self.area.x))
        else {
            return;
        };
        let Some(y) = y.checked_add(self.area.y) else {
            return;
        };
        for dx in 0..self.tile_size {
            let Some(x) = x.checked_add(dx) else {
                return;
            };
            let p = Position::new(x, y);
            if !self.area.contains(p) {
                return;
            }
            if let Some(cell) = self.buf.cell_mut(p) {
                cell.set_char(symbol);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}

/// Render `lines` inside a bordered pop-up titled `title`
fn render_popup<I>(title: &str, lines: I, area: Rect, buf: &mut Buffer)
where
    I: IntoIterator<Item = Line<'static>>,
{
    let block = Block::bordered()
        .title(title)
        .title_alignment(Alignment::Center)
        .padding(Padding::horizontal(1))
        .style(Style::reset());
    let inner = block.inner(area);
    Clear.render(area, buf);
    block.render(area, buf);
    for (line, row) in lines.into_iter().zip(inner.rows()) {
        line.render(row, buf);
    }
}

/*
 * ┌── ENTER YOUR NAME ───┐
 * │ AL_                  │
 * │                      │
 * │ Enter: start         │
 * │ Esc: quit            │
 * └──────────────────────┘
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct NamePrompt<'a> {
    input: &'a str,
}

impl NamePrompt<'_> {
    const SIZE: Size = Size {
        width: 24,
        height: 6,
    };
}

impl Widget for NamePrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_popup(
            " ENTER YOUR NAME ",
            [
                Line::styled(format!("{}_", self.input), consts::NAME_INPUT_STYLE),
                Line::default(),
                Line::from("Enter: start"),
                Line::from("Esc: quit"),
            ],
            area,
            buf,
        );
    }
}

/*
 * ┌───── PAUSED ─────┐
 * │ p: resume        │
 * └──────────────────┘
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Paused;

impl Paused {
    const SIZE: Size = Size {
        width: 20,
        height: 3,
    };
}

impl Widget for Paused {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_popup(" PAUSED ", [Line::from("p: resume")], area, buf);
    }
}

/*
 * ┌───── GAME OVER ──────┐
 * │ Score: 3             │
 * │                      │
 * │ SCOREBOARD:          │
 * │ ANN 4                │
 * └──────────────────────┘
 */
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct GameOver<'a> {
    score: u32,
    highscores: &'a HighscoreTable,
}

impl GameOver<'_> {
    const WIDTH: u16 = 24;

    fn size(&self) -> Size {
        let rows = self
            .highscores
            .top(consts::HIGHSCORE_CAPACITY)
            .count()
            .max(1);
        Size {
            width: Self::WIDTH,
            height: u16::try_from(rows).unwrap_or(u16::MAX).saturating_add(5),
        }
    }
}

impl Widget for GameOver<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(format!("Score: {}", self.score)),
            Line::default(),
            Line::from("SCOREBOARD:"),
        ];
        if self.highscores.is_empty() {
            lines.push(Line::from("NONE"));
        } else {
            lines.extend(
                self.highscores
                    .top(consts::HIGHSCORE_CAPACITY)
                    .map(|e| Line::from(format!("{} {}", e.name, e.score))),
            );
        }
        render_popup(" GAME OVER ", lines, area, buf);
    }
}

use crate::command::{Action, Command};
use crate::consts;
use crate::game::{Engine, GameState, GameView};
use crate::highscores::{HighscoreFile, ScoreSink};
use crate::random::RandomSource;
use crossterm::event::{poll, read, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::{Duration, Instant};

/// Drives an [`Engine`] from the terminal: draw, read input, advance the
/// simulation by the real time elapsed, repeat
#[derive(Clone, Debug)]
pub(crate) struct App<R = rand::rngs::ThreadRng, S = HighscoreFile> {
    engine: Engine<R, S>,
    tile_size: u16,
    quitting: bool,
}

impl<R: RandomSource, S: ScoreSink> App<R, S> {
    pub(crate) fn new(engine: Engine<R, S>, tile_size: u16) -> App<R, S> {
        App {
            engine,
            tile_size,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> anyhow::Result<()> {
        let mut last = Instant::now();
        while !self.quitting {
            terminal.draw(|frame| {
                frame.render_widget(GameView::new(&self.engine, self.tile_size), frame.area());
            })?;
            self.process_input()?;
            let now = Instant::now();
            self.engine.update(now.duration_since(last))?;
            last = now;
        }
        Ok(())
    }

    /// Wait up to one frame for input, then handle everything that has
    /// arrived
    fn process_input(&mut self) -> io::Result<()> {
        let mut wait = consts::FRAME_PERIOD;
        while !self.quitting && poll(wait)? {
            if let Some(ev) = read()?.as_key_press_event() {
                self.handle_key(ev);
            }
            wait = Duration::ZERO;
        }
        Ok(())
    }

    fn handle_key(&mut self, ev: KeyEvent) {
        let awaiting_name = self.engine.state() == GameState::AwaitingName;
        match Command::from_key_event(ev).and_then(|cmd| cmd.action(awaiting_name)) {
            Some(Action::Quit) => self.quitting = true,
            Some(Action::Signal(signal)) => self.engine.handle(signal),
            None => (),
        }
    }
}

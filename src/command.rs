use crate::game::{Direction, Signal};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A key press, reduced to what the game cares about
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    /// Ctrl-C
    Quit,
    Esc,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Backspace,
    Char(char),
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (_, KeyCode::Esc) => Some(Command::Esc),
            (KeyModifiers::NONE, KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Enter) => Some(Command::Enter),
            (_, KeyCode::Backspace) => Some(Command::Backspace),
            (KeyModifiers::NONE | KeyModifiers::SHIFT, KeyCode::Char(ch)) => {
                Some(Command::Char(ch))
            }
            _ => None,
        }
    }

    /// Interpret the command.  While the engine is waiting for a name,
    /// characters edit the name instead of steering; otherwise letter keys
    /// work regardless of case.
    pub(crate) fn action(self, awaiting_name: bool) -> Option<Action> {
        match self {
            Command::Quit | Command::Esc => Some(Action::Quit),
            Command::Enter if awaiting_name => Some(Action::Signal(Signal::ConfirmName)),
            Command::Backspace if awaiting_name => Some(Action::Signal(Signal::EraseName)),
            Command::Char(ch) if awaiting_name => Some(Action::Signal(Signal::EditName(ch))),
            _ if awaiting_name => None,
            Command::Char(ch) if ch.is_ascii_uppercase() => {
                Command::Char(ch.to_ascii_lowercase()).action(false)
            }
            Command::Up | Command::Char('w' | 'k') => Some(turn(Direction::Up)),
            Command::Down | Command::Char('s' | 'j') => Some(turn(Direction::Down)),
            Command::Left | Command::Char('a' | 'h') => Some(turn(Direction::Left)),
            Command::Right | Command::Char('d' | 'l') => Some(turn(Direction::Right)),
            Command::Char('p') => Some(Action::Signal(Signal::TogglePause)),
            Command::Char('r') => Some(Action::Signal(Signal::Restart)),
            _ => None,
        }
    }
}

fn turn(direction: Direction) -> Action {
    Action::Signal(Signal::Turn(direction))
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Action {
    Quit,
    Signal(Signal),
}

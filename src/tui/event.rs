//! Event handling module
//!
//! Uses crossterm for terminal event handling. Key events are translated
//! once into a small event set, then resolved against a fixed binding table.

use crate::error::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Event type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Character input
    Char(char),
    /// Ctrl+C exit
    CtrlC,
    /// Window resize
    Resize(u16, u16),
    /// Anything else
    None,
}

impl From<Event> for TuiEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key_event) => key_event.into(),
            Event::Resize(width, height) => TuiEvent::Resize(width, height),
            _ => TuiEvent::None,
        }
    }
}

impl From<KeyEvent> for TuiEvent {
    fn from(key: KeyEvent) -> Self {
        // Ignore non-press events
        if key.kind != KeyEventKind::Press {
            return TuiEvent::None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return TuiEvent::CtrlC;
        }

        match key.code {
            KeyCode::Esc => TuiEvent::Escape,
            KeyCode::Enter => TuiEvent::Enter,
            KeyCode::Up => TuiEvent::Up,
            KeyCode::Down => TuiEvent::Down,
            KeyCode::Char(c) => TuiEvent::Char(c),
            _ => TuiEvent::None,
        }
    }
}

/// What a key press does in the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Leave the menu
    Terminate,
    /// Move the selection up
    SelectPrevious,
    /// Move the selection down
    SelectNext,
    /// Run the selected item's action
    Activate,
}

/// Key bindings of the menu
const KEY_BINDINGS: [(TuiEvent, MenuAction); 8] = [
    (TuiEvent::Escape, MenuAction::Terminate),
    (TuiEvent::Char('q'), MenuAction::Terminate),
    (TuiEvent::CtrlC, MenuAction::Terminate),
    (TuiEvent::Up, MenuAction::SelectPrevious),
    (TuiEvent::Char('k'), MenuAction::SelectPrevious),
    (TuiEvent::Down, MenuAction::SelectNext),
    (TuiEvent::Char('j'), MenuAction::SelectNext),
    (TuiEvent::Enter, MenuAction::Activate),
];

impl MenuAction {
    /// Action bound to `event`; unbound events are ignored by the menu
    pub fn from_event(event: TuiEvent) -> Option<Self> {
        KEY_BINDINGS
            .iter()
            .find(|(bound, _)| *bound == event)
            .map(|(_, action)| *action)
    }
}

/// Source of input events
pub trait KeySource {
    /// Block until the next event arrives
    fn next_event(&mut self) -> Result<TuiEvent>;
}

/// Blocking reader over the terminal's event stream
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_event(&mut self) -> Result<TuiEvent> {
        Ok(event::read()?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> TuiEvent {
        KeyEvent::new(code, KeyModifiers::NONE).into()
    }

    #[test]
    fn test_key_translation() {
        assert_eq!(press(KeyCode::Esc), TuiEvent::Escape);
        assert_eq!(press(KeyCode::Enter), TuiEvent::Enter);
        assert_eq!(press(KeyCode::Up), TuiEvent::Up);
        assert_eq!(press(KeyCode::Char('j')), TuiEvent::Char('j'));
        assert_eq!(press(KeyCode::F(1)), TuiEvent::None);
        assert_eq!(
            TuiEvent::from(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            TuiEvent::CtrlC
        );
    }

    #[test]
    fn test_only_ctrl_c_terminates() {
        let ctrl_d = TuiEvent::from(KeyEvent::new(KeyCode::Char('d'), KeyModifiers::CONTROL));
        assert_eq!(ctrl_d, TuiEvent::Char('d'));
        assert_eq!(MenuAction::from_event(ctrl_d), None);
        assert_eq!(MenuAction::from_event(TuiEvent::CtrlC), Some(MenuAction::Terminate));
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(TuiEvent::from(release), TuiEvent::None);
    }

    #[test]
    fn test_bindings() {
        assert_eq!(MenuAction::from_event(TuiEvent::Escape), Some(MenuAction::Terminate));
        assert_eq!(MenuAction::from_event(TuiEvent::Char('q')), Some(MenuAction::Terminate));
        assert_eq!(MenuAction::from_event(TuiEvent::Up), Some(MenuAction::SelectPrevious));
        assert_eq!(MenuAction::from_event(TuiEvent::Char('k')), Some(MenuAction::SelectPrevious));
        assert_eq!(MenuAction::from_event(TuiEvent::Down), Some(MenuAction::SelectNext));
        assert_eq!(MenuAction::from_event(TuiEvent::Char('j')), Some(MenuAction::SelectNext));
        assert_eq!(MenuAction::from_event(TuiEvent::Enter), Some(MenuAction::Activate));
    }

    #[test]
    fn test_unbound_keys_ignored() {
        assert_eq!(MenuAction::from_event(TuiEvent::Char('x')), None);
        assert_eq!(MenuAction::from_event(TuiEvent::Char('Q')), None);
        assert_eq!(MenuAction::from_event(TuiEvent::Resize(80, 24)), None);
        assert_eq!(MenuAction::from_event(TuiEvent::None), None);
    }
}

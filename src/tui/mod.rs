//! Terminal menu
//!
//! Levels of items drawn with ratatui, navigated with crossterm key events.

pub mod app;
pub mod components;
pub mod event;
pub mod host;
pub mod item;
pub mod labels;
pub mod level;
pub mod render;
pub mod screens;
pub mod stack;
pub mod theme;

#[cfg(test)]
pub(crate) mod testing;

pub use app::{Menu, MenuExit, MenuStatus};
pub use event::{KeySource, MenuAction, TerminalKeys, TuiEvent};
pub use host::{ContentEntry, ContentProvider, HelpHandler, LocaleProvider, MenuHost};
pub use item::{Command, Deferred, Effect, Item, ItemKind};
pub use level::Level;
pub use render::{LevelView, PanelLayout, render};
pub use stack::NavigationStack;
pub use theme::{Theme, theme};

//! Services the menu relies on
//!
//! The menu never reads lesson files, progress or translations catalogs on
//! its own; everything it needs comes through these traits.

use crate::error::Result;
use crate::i18n::LocaleOption;

/// Lesson shown in the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    /// Unique identifier
    pub name: String,
    /// Display title
    pub title: String,
    /// Whether the learner already completed it
    pub completed: bool,
}

/// Source of menu content and its activation callbacks
pub trait ContentProvider {
    /// Entries in display order
    fn entries(&self) -> Vec<ContentEntry>;

    /// Record `name` as the current selection
    fn mark_selected(&mut self, name: &str) -> Result<()>;

    /// Print the formatted content of `name`
    fn print_formatted_content(&mut self, name: &str) -> Result<()>;
}

/// Interface language selection
pub trait LocaleProvider {
    /// Active language code
    fn locale(&self) -> &str;

    /// Languages offered in the language chooser
    fn locales(&self) -> Vec<LocaleOption>;

    /// Switch the active language
    fn set_locale(&mut self, code: &str) -> Result<()>;
}

/// Usage help printer
pub trait HelpHandler {
    /// Print usage help
    fn show_help(&mut self) -> Result<()>;
}

/// Everything the menu needs from its host
pub trait MenuHost: ContentProvider + LocaleProvider + HelpHandler {
    /// Title shown at the top of every level
    fn title(&self) -> String;
}

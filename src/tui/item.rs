//! Menu items
//!
//! An item is one row (or block of rows) of a level. Capabilities are
//! answered per variant: every item renders, only some are selectable, and
//! only selectable items carry an action.

use crate::error::{Error, Result};
use crate::i18n::LocaleOption;
use crate::tui::components::{fit, justify};
use crate::tui::host::{ContentEntry, MenuHost};
use crate::tui::labels::{Label, badge};
use crate::tui::level::Level;
use crate::tui::screens;
use crate::tui::theme::{Theme, config::ENTRY_MARKER, config::SEPARATOR};
use ratatui::style::Style;

/// Fixed-label commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the menu and print usage help
    Help,
    /// Leave the menu
    Exit,
    /// Return to the previous level
    Back,
}

impl Command {
    fn label_key(self) -> &'static str {
        match self {
            Command::Help => "menu.help",
            Command::Exit => "menu.exit",
            Command::Back => "menu.back",
        }
    }
}

/// Item variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// Blank rows
    Space { rows: u16 },
    /// Plain text
    Text(Label),
    /// Separator rule spanning the row
    Line,
    /// Upper-cased, emphasized text
    Title(Label),
    /// Help / Exit / Back
    Command(Command),
    /// A lesson, with a completion badge
    Content(ContentEntry),
    /// A language, with a badge when it is the active one
    Language(LocaleOption),
    /// Opens the language level
    ChooseLanguage,
}

/// Work to run once the terminal has been restored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deferred {
    /// Print the formatted content of a lesson
    PrintContent(String),
    /// Print usage help
    Help,
}

/// Outcome of activating an item
#[derive(Debug)]
pub enum Effect {
    /// Show a new level on top of the current one
    Push(Level),
    /// Return to the previous level
    Pop,
    /// Leave the menu, then run the deferred work if any
    Stop(Option<Deferred>),
}

/// One row or block of a level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    kind: ItemKind,
    selected: bool,
}

impl Item {
    pub fn new(kind: ItemKind) -> Self {
        Self {
            kind,
            selected: false,
        }
    }

    pub fn space() -> Self {
        Self::new(ItemKind::Space { rows: 1 })
    }

    pub fn plain(label: Label) -> Self {
        Self::new(ItemKind::Text(label))
    }

    pub fn line() -> Self {
        Self::new(ItemKind::Line)
    }

    pub fn title(label: Label) -> Self {
        Self::new(ItemKind::Title(label))
    }

    pub fn command(command: Command) -> Self {
        Self::new(ItemKind::Command(command))
    }

    pub fn content(entry: ContentEntry) -> Self {
        Self::new(ItemKind::Content(entry))
    }

    pub fn language(option: LocaleOption) -> Self {
        Self::new(ItemKind::Language(option))
    }

    pub fn choose_language() -> Self {
        Self::new(ItemKind::ChooseLanguage)
    }

    pub fn kind(&self) -> &ItemKind {
        &self.kind
    }

    /// Rows occupied in the viewport
    pub fn size(&self) -> u16 {
        match self.kind {
            ItemKind::Space { rows } => rows.max(1),
            _ => 1,
        }
    }

    /// Whether the item takes part in the selection cycle
    pub fn is_selectable(&self) -> bool {
        matches!(
            self.kind,
            ItemKind::Command(_)
                | ItemKind::Content(_)
                | ItemKind::Language(_)
                | ItemKind::ChooseLanguage
        )
    }

    /// Whether the item is highlighted; always false for non-selectable items
    pub fn is_selected(&self) -> bool {
        self.selected && self.is_selectable()
    }

    pub(crate) fn set_selected(&mut self, selected: bool) {
        self.selected = selected && self.is_selectable();
    }

    /// Short identifier used in logs and errors
    pub fn describe(&self) -> String {
        match &self.kind {
            ItemKind::Space { .. } => "space".to_string(),
            ItemKind::Text(_) => "text".to_string(),
            ItemKind::Line => "line".to_string(),
            ItemKind::Title(_) => "title".to_string(),
            ItemKind::Command(command) => format!("{:?}", command).to_lowercase(),
            ItemKind::Content(entry) => entry.name.clone(),
            ItemKind::Language(option) => option.code.to_string(),
            ItemKind::ChooseLanguage => "choose-language".to_string(),
        }
    }

    /// Row text laid out to `width` columns, labels resolved in `locale`
    ///
    /// Space renders nothing; every other variant returns exactly `width`
    /// columns. Labels longer than the row are cut, never wrapped.
    pub fn text(&self, width: usize, locale: &str) -> String {
        match &self.kind {
            ItemKind::Space { .. } => String::new(),
            ItemKind::Text(label) => fit(&label.resolve(locale), width),
            ItemKind::Line => SEPARATOR.to_string().repeat(width),
            ItemKind::Title(label) => fit(&label.resolve(locale).to_uppercase(), width),
            ItemKind::Command(command) => {
                fit(&Label::key(command.label_key()).resolve(locale).to_uppercase(), width)
            }
            ItemKind::ChooseLanguage => fit(
                &Label::key("menu.choose_language").resolve(locale).to_uppercase(),
                width,
            ),
            ItemKind::Content(entry) => {
                let left = format!("{}{}", ENTRY_MARKER, entry.title.to_uppercase());
                if entry.completed {
                    justify(&left, &badge("menu.completed", locale), width)
                } else {
                    fit(&left, width)
                }
            }
            ItemKind::Language(option) => {
                let name = Label::key(option.name_key).resolve(locale).to_uppercase();
                let left = format!("{}{}", ENTRY_MARKER, name);
                if option.code == locale {
                    justify(&left, &badge("menu.current", locale), width)
                } else {
                    fit(&left, width)
                }
            }
        }
    }

    /// Style of the row
    pub fn style(&self, theme: &Theme) -> Style {
        match self.kind {
            ItemKind::Title(_) => theme.title(),
            _ if self.is_selected() => theme.selected(),
            _ => theme.normal(),
        }
    }

    /// Run the item's action
    ///
    /// Items without an action fail loudly with `UnimplementedAction`.
    pub fn activate(&self, host: &mut dyn MenuHost) -> Result<Effect> {
        match &self.kind {
            ItemKind::Command(Command::Help) => Ok(Effect::Stop(Some(Deferred::Help))),
            ItemKind::Command(Command::Exit) => Ok(Effect::Stop(None)),
            ItemKind::Command(Command::Back) => Ok(Effect::Pop),
            ItemKind::Content(entry) => {
                host.mark_selected(&entry.name)?;
                Ok(Effect::Stop(Some(Deferred::PrintContent(entry.name.clone()))))
            }
            ItemKind::Language(option) => {
                host.set_locale(option.code)?;
                Ok(Effect::Pop)
            }
            ItemKind::ChooseLanguage => Ok(Effect::Push(screens::language::level(&*host))),
            ItemKind::Space { .. } | ItemKind::Text(_) | ItemKind::Line | ItemKind::Title(_) => {
                Err(Error::UnimplementedAction {
                    item: self.describe(),
                })
            }
        }
    }
}

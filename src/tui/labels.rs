//! Menu labels
//!
//! Labels are resolved against an explicit locale at render time, so a
//! language change shows up on the next frame without rebuilding levels.

use rust_i18n::t;

/// Text of a menu row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    /// Translation key
    Key(&'static str),
    /// Text shown as is
    Literal(String),
}

impl Label {
    /// Translated label
    pub fn key(key: &'static str) -> Self {
        Label::Key(key)
    }

    /// Untranslated label
    pub fn literal(text: impl Into<String>) -> Self {
        Label::Literal(text.into())
    }

    /// Text of the label in `locale`
    pub fn resolve(&self, locale: &str) -> String {
        match self {
            Label::Key(key) => t!(*key, locale = locale).into_owned(),
            Label::Literal(text) => text.clone(),
        }
    }
}

/// Badge text such as `[COMPLETED]`
pub fn badge(key: &'static str, locale: &str) -> String {
    format!("[{}]", t!(key, locale = locale))
}

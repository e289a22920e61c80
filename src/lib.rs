//! Story - interactive terminal lessons
//!
//! This library provides:
//! - A keyboard-driven terminal menu built from stacked levels of items
//! - Story manifests (TOML) describing ordered lessons
//! - Per-story learner progress persisted as JSON
//! - Lesson texts localized per language with placeholder substitution
//! - Commands to select, print, run and verify lessons

// Initialize i18n with locale files
rust_i18n::i18n!("locales", fallback = "en");

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod i18n;
pub mod lesson;
pub mod progress;
pub mod story;
pub mod tui;

pub use cli::{Cli, Commands};
pub use commands::{Outcome, error_message, execute};
pub use config::StoryConfig;
pub use error::{Error, Result};
pub use lesson::{Lesson, LessonCatalog};
pub use progress::ProgressStore;
pub use story::Story;
pub use tui::{Menu, MenuExit};

//! Test doubles for the menu's host and input

use crate::error::{Error, Result};
use crate::i18n::{LOCALES, LocaleOption};
use crate::tui::event::{KeySource, TuiEvent};
use crate::tui::host::{ContentEntry, ContentProvider, HelpHandler, LocaleProvider, MenuHost};
use std::collections::VecDeque;

/// Host recording every callback the menu makes
#[derive(Debug)]
pub struct RecordingHost {
    pub entries: Vec<ContentEntry>,
    pub locale: String,
    pub marked: Vec<String>,
    pub printed: Vec<String>,
    pub help_shown: usize,
}

impl Default for RecordingHost {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            locale: "en".to_string(),
            marked: Vec::new(),
            printed: Vec::new(),
            help_shown: 0,
        }
    }
}

impl RecordingHost {
    pub fn with_entries(entries: &[(&str, bool)]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(name, completed)| ContentEntry {
                    name: name.to_string(),
                    title: name.to_string(),
                    completed: *completed,
                })
                .collect(),
            ..Self::default()
        }
    }
}

impl ContentProvider for RecordingHost {
    fn entries(&self) -> Vec<ContentEntry> {
        self.entries.clone()
    }

    fn mark_selected(&mut self, name: &str) -> Result<()> {
        self.marked.push(name.to_string());
        Ok(())
    }

    fn print_formatted_content(&mut self, name: &str) -> Result<()> {
        self.printed.push(name.to_string());
        Ok(())
    }
}

impl LocaleProvider for RecordingHost {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn locales(&self) -> Vec<LocaleOption> {
        LOCALES.to_vec()
    }

    fn set_locale(&mut self, code: &str) -> Result<()> {
        self.locale = code.to_string();
        Ok(())
    }
}

impl HelpHandler for RecordingHost {
    fn show_help(&mut self) -> Result<()> {
        self.help_shown += 1;
        Ok(())
    }
}

impl MenuHost for RecordingHost {
    fn title(&self) -> String {
        "Test Story".to_string()
    }
}

/// Replays a fixed list of events, failing once it runs dry
#[derive(Debug, Default)]
pub struct ScriptedKeys {
    events: VecDeque<TuiEvent>,
    pub consumed: usize,
}

impl ScriptedKeys {
    pub fn new(events: &[TuiEvent]) -> Self {
        Self {
            events: events.iter().copied().collect(),
            consumed: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_event(&mut self) -> Result<TuiEvent> {
        let event = self
            .events
            .pop_front()
            .ok_or_else(|| Error::Terminal("scripted input exhausted".to_string()))?;
        self.consumed += 1;
        Ok(event)
    }
}

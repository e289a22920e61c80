//! Story: a lesson catalog bound to a learner's progress
//!
//! `Story` is the host the menu runs against and the state every command
//! operates on. It owns the active interface language; nothing else keeps a
//! global one.

use crate::cli::Cli;
use crate::config::StoryConfig;
use crate::error::{Error, Result};
use crate::i18n::{self, LOCALES, LocaleOption};
use crate::lesson::{Lesson, LessonCatalog};
use crate::progress::ProgressStore;
use crate::tui::host::{ContentEntry, ContentProvider, HelpHandler, LocaleProvider, MenuHost};
use clap::CommandFactory;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, info};

/// A loaded story
#[derive(Debug)]
pub struct Story {
    catalog: LessonCatalog,
    interpreter: Option<String>,
    progress: ProgressStore,
    locale: String,
}

impl Story {
    /// Bind a manifest to a progress store
    ///
    /// The interface language is `language` when given (and then persisted),
    /// else the stored choice, else the system language.
    pub fn new(config: &StoryConfig, mut progress: ProgressStore, language: Option<&str>) -> Result<Self> {
        let locale = match language {
            Some(code) => {
                let code = i18n::parse_locale(code)?;
                if progress.language().as_deref() != Some(code) {
                    progress.set_language(code)?;
                }
                code
            }
            None => progress
                .language()
                .as_deref()
                .and_then(i18n::normalize)
                .unwrap_or_else(i18n::detect_locale),
        };

        let catalog = LessonCatalog::from_config(config);
        info!(
            story = catalog.name(),
            lessons = catalog.lessons().len(),
            locale,
            data_file = %progress.path().display(),
            "Story loaded"
        );

        Ok(Self {
            catalog,
            interpreter: config.interpreter.clone(),
            progress,
            locale: locale.to_string(),
        })
    }

    /// Load the manifest and the progress file
    ///
    /// Without `data_file` progress goes to `$HOME/.<story>.json`.
    pub fn open(manifest: &Path, data_file: Option<&Path>, language: Option<&str>) -> Result<Self> {
        let config = StoryConfig::load_from_file(manifest)?;
        let data_path = data_file
            .map(Path::to_path_buf)
            .unwrap_or_else(|| ProgressStore::default_path(&config.name));
        let progress = ProgressStore::load(&data_path, &config.name)?;
        Self::new(&config, progress, language)
    }

    pub fn catalog(&self) -> &LessonCatalog {
        &self.catalog
    }

    pub fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    /// Program used to run learner solutions
    pub fn interpreter(&self) -> Result<&str> {
        self.interpreter.as_deref().ok_or(Error::NoInterpreter)
    }

    /// The selected lesson
    ///
    /// Fails with `NoCurrentLesson` when nothing is selected and with
    /// `UnknownLesson` when the stored selection left the manifest.
    pub fn current_lesson(&self) -> Result<&Lesson> {
        let name = self.progress.current().ok_or(Error::NoCurrentLesson)?;
        self.catalog.require(&name)
    }

    /// Make `name` the current lesson
    pub fn select(&mut self, name: &str) -> Result<&Lesson> {
        let lesson = self.catalog.require(name)?;
        self.progress.set_current(Some(&lesson.name))?;
        debug!(lesson = %lesson.name, "Lesson selected");
        Ok(lesson)
    }

    /// Select the first incomplete lesson after the current one
    ///
    /// Returns `None` once every lesson is completed.
    pub fn select_next(&mut self) -> Result<Option<&Lesson>> {
        let current = self.progress.current();
        let progress = &self.progress;
        let Some(lesson) = self
            .catalog
            .next_pending(current.as_deref(), |l| !progress.is_completed(&l.name))
        else {
            return Ok(None);
        };

        self.progress.set_current(Some(&lesson.name))?;
        debug!(lesson = %lesson.name, "Next lesson selected");
        Ok(Some(lesson))
    }

    /// Record `name` as completed and clear the selection
    pub fn complete(&mut self, name: &str) -> Result<()> {
        self.progress.mark_completed(name)?;
        self.progress.set_current(None)?;
        info!(lesson = name, "Lesson completed");
        Ok(())
    }

    /// Forget all progress except the language
    pub fn reset(&mut self) -> Result<()> {
        self.progress.reset()?;
        info!(story = self.catalog.name(), "Progress reset");
        Ok(())
    }

    /// Formatted problem statement of `lesson`
    pub fn problem_text(&self, lesson: &Lesson) -> Result<String> {
        self.catalog.problem_formatted(lesson, &self.locale)
    }

    /// Formatted solution of `lesson`
    pub fn solution_text(&self, lesson: &Lesson) -> Result<String> {
        self.catalog.solution_formatted(lesson, &self.locale)
    }
}

impl ContentProvider for Story {
    fn entries(&self) -> Vec<ContentEntry> {
        self.catalog
            .lessons()
            .iter()
            .map(|l| ContentEntry {
                name: l.name.clone(),
                title: l.title.clone(),
                completed: self.progress.is_completed(&l.name),
            })
            .collect()
    }

    fn mark_selected(&mut self, name: &str) -> Result<()> {
        self.select(name).map(|_| ())
    }

    fn print_formatted_content(&mut self, name: &str) -> Result<()> {
        let lesson = self.catalog.require(name)?;
        let text = self.problem_text(lesson)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}

impl LocaleProvider for Story {
    fn locale(&self) -> &str {
        &self.locale
    }

    fn locales(&self) -> Vec<LocaleOption> {
        LOCALES.to_vec()
    }

    fn set_locale(&mut self, code: &str) -> Result<()> {
        let code = i18n::parse_locale(code)?;
        self.progress.set_language(code)?;
        self.locale = code.to_string();
        info!(locale = code, "Language changed");
        Ok(())
    }
}

impl HelpHandler for Story {
    fn show_help(&mut self) -> Result<()> {
        Cli::command().print_help()?;
        Ok(())
    }
}

impl MenuHost for Story {
    fn title(&self) -> String {
        self.catalog.title().to_string()
    }
}

//! Learner progress persistence
//!
//! Progress for every story lives in a single JSON file keyed by story name,
//! so several workshops can share one data file. Each entry records the
//! chosen language, the currently selected lesson and the completed lessons.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Progress recorded for one story
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryProgress {
    /// Chosen interface language
    #[serde(default)]
    pub language: Option<String>,

    /// Currently selected lesson
    #[serde(default)]
    pub current: Option<String>,

    /// Completed lesson names
    #[serde(default)]
    pub completed: BTreeSet<String>,

    /// Last modification time
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// On-disk layout of the progress file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ProgressFile {
    version: u32,
    stories: HashMap<String, StoryProgress>,
}

/// Progress store bound to a single story inside a shared data file
#[derive(Debug)]
pub struct ProgressStore {
    path: PathBuf,
    story: String,
    stories: HashMap<String, StoryProgress>,
}

impl ProgressStore {
    /// Current progress file format version
    const VERSION: u32 = 1;

    /// Default data file location: `$HOME/.<story>.json`
    pub fn default_path(story: &str) -> PathBuf {
        let home = std::env::var_os("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        home.join(format!(".{}.json", story))
    }

    /// Load progress for `story` from `path`
    ///
    /// A missing file yields empty progress; a file written by another
    /// format version is discarded with a warning.
    pub fn load(path: &Path, story: &str) -> Result<Self> {
        let mut store = Self {
            path: path.to_path_buf(),
            story: story.to_string(),
            stories: HashMap::new(),
        };

        if !path.exists() {
            debug!(?path, "Progress file does not exist, starting fresh");
            return Ok(store);
        }

        let file = File::open(path)
            .map_err(|e| Error::ProgressFile(format!("Failed to open progress file: {}", e)))?;
        let reader = BufReader::new(file);

        let data: ProgressFile = serde_json::from_reader(reader)
            .map_err(|e| Error::ProgressFile(format!("Failed to parse progress file: {}", e)))?;

        if data.version != Self::VERSION {
            warn!(
                file_version = data.version,
                current_version = Self::VERSION,
                "Progress file version mismatch, starting fresh"
            );
            return Ok(store);
        }

        store.stories = data.stories;
        info!(
            story,
            completed = store.progress().completed.len(),
            "Loaded progress"
        );

        Ok(store)
    }

    /// Path of the backing data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Progress of the bound story
    pub fn progress(&self) -> StoryProgress {
        self.stories.get(&self.story).cloned().unwrap_or_default()
    }

    /// Chosen language, if any
    pub fn language(&self) -> Option<String> {
        self.stories.get(&self.story).and_then(|p| p.language.clone())
    }

    /// Currently selected lesson, if any
    pub fn current(&self) -> Option<String> {
        self.stories.get(&self.story).and_then(|p| p.current.clone())
    }

    /// Whether `lesson` has been completed
    pub fn is_completed(&self, lesson: &str) -> bool {
        self.stories
            .get(&self.story)
            .is_some_and(|p| p.completed.contains(lesson))
    }

    /// Persist the chosen language
    pub fn set_language(&mut self, language: &str) -> Result<()> {
        self.entry().language = Some(language.to_string());
        self.save()
    }

    /// Persist the current lesson (`None` clears it)
    pub fn set_current(&mut self, lesson: Option<&str>) -> Result<()> {
        self.entry().current = lesson.map(str::to_string);
        self.save()
    }

    /// Mark `lesson` as completed
    pub fn mark_completed(&mut self, lesson: &str) -> Result<()> {
        self.entry().completed.insert(lesson.to_string());
        self.save()
    }

    /// Forget the current lesson and all completions, keeping the language
    pub fn reset(&mut self) -> Result<()> {
        let entry = self.entry();
        entry.current = None;
        entry.completed.clear();
        self.save()
    }

    fn entry(&mut self) -> &mut StoryProgress {
        let entry = self.stories.entry(self.story.clone()).or_default();
        entry.updated_at = Some(Utc::now());
        entry
    }

    /// Write the data file atomically
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let temp_path = self.path.with_extension("tmp");

        let file = File::create(&temp_path).map_err(|e| {
            Error::ProgressFile(format!("Failed to create temp progress file: {}", e))
        })?;
        let mut writer = BufWriter::new(file);

        let data = ProgressFile {
            version: Self::VERSION,
            stories: self.stories.clone(),
        };
        serde_json::to_writer_pretty(&mut writer, &data)
            .map_err(|e| Error::ProgressFile(format!("Failed to write progress file: {}", e)))?;

        // The temp file must be complete on disk before it replaces the data file
        writer
            .into_inner()
            .map_err(|e| e.into_error())
            .and_then(|file| file.sync_all())
            .map_err(|e| Error::ProgressFile(format!("Failed to flush progress file: {}", e)))?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            Error::ProgressFile(format!("Failed to rename temp progress file: {}", e))
        })?;

        debug!(path = %self.path.display(), story = %self.story, "Saved progress");
        Ok(())
    }
}

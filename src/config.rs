//! Story manifest
//!
//! A story is described by a TOML manifest listing its lessons in the order
//! they are presented. Lesson directories are resolved relative to the
//! directory holding the manifest.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default manifest file name looked up in the working directory
pub const DEFAULT_MANIFEST: &str = "story.toml";

/// One lesson entry of the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LessonConfig {
    /// Unique lesson identifier
    pub name: String,

    /// Display title (defaults to the name)
    #[serde(default)]
    pub title: Option<String>,

    /// Directory holding README/SOLUTION files (defaults to the name)
    #[serde(default)]
    pub dir: Option<PathBuf>,

    /// Output a solution must print to pass `verify`
    #[serde(default)]
    pub expected_output: Option<String>,
}

/// Story manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryConfig {
    /// Story identifier, also used as the command name in hints
    pub name: String,

    /// Display title (defaults to the name)
    #[serde(default)]
    pub title: Option<String>,

    /// Program used to run learner solutions, e.g. `python3`
    #[serde(default)]
    pub interpreter: Option<String>,

    /// Lessons in presentation order
    #[serde(default)]
    pub lessons: Vec<LessonConfig>,

    /// Directory of the manifest file
    #[serde(skip)]
    pub root: PathBuf,
}

impl StoryConfig {
    /// Load a manifest from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::Manifest {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let mut config = Self::from_toml(&content).map_err(|e| match e {
            Error::Manifest { message, .. } => Error::Manifest {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;
        config.root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(config)
    }

    /// Parse a manifest from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: StoryConfig = toml::from_str(content).map_err(|e| Error::Manifest {
            path: PathBuf::new(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Display title of the story
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(Error::Manifest {
                path: PathBuf::new(),
                message: "story name must not be empty".to_string(),
            });
        }

        for (i, lesson) in self.lessons.iter().enumerate() {
            if self.lessons[..i].iter().any(|l| l.name == lesson.name) {
                return Err(Error::Manifest {
                    path: PathBuf::new(),
                    message: format!("duplicate lesson name '{}'", lesson.name),
                });
            }
        }

        Ok(())
    }
}

//! Lessons and their texts
//!
//! Lesson texts are looked up per language with a language-neutral
//! fallback: `README.<locale>.md`, then `README.md` (likewise for
//! `SOLUTION`). Texts may reference story and lesson properties through
//! `{placeholder}` markers.

use crate::config::StoryConfig;
use crate::error::{Error, Result};
use regex::Regex;
use rust_i18n::t;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::LazyLock;
use tracing::debug;

/// Matches `{placeholder}` markers in lesson text
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\{([a-z_]+)\}").unwrap());

/// Which text of a lesson to read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    /// Problem statement
    Problem,
    /// Reference solution
    Solution,
}

impl TextKind {
    fn stem(self) -> &'static str {
        match self {
            TextKind::Problem => "README",
            TextKind::Solution => "SOLUTION",
        }
    }
}

/// A lesson of a story
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lesson {
    /// Unique identifier
    pub name: String,
    /// Display title
    pub title: String,
    /// Directory holding the lesson texts
    pub dir: PathBuf,
    /// Output a solution must print to pass verification
    pub expected_output: Option<String>,
}

impl Lesson {
    /// Candidate files for `kind` in lookup order
    pub fn candidates(&self, kind: TextKind, locale: &str) -> [PathBuf; 2] {
        [
            self.dir.join(format!("{}.{}.md", kind.stem(), locale)),
            self.dir.join(format!("{}.md", kind.stem())),
        ]
    }

    /// Read the raw text of `kind`, `None` when no candidate exists
    pub fn read_text(&self, kind: TextKind, locale: &str) -> Result<Option<String>> {
        for path in self.candidates(kind, locale) {
            if path.exists() {
                debug!(lesson = %self.name, path = %path.display(), "Reading lesson text");
                return Ok(Some(fs::read_to_string(&path)?));
            }
        }
        Ok(None)
    }
}

/// Ordered lessons of a story together with the story's identity
#[derive(Debug, Clone)]
pub struct LessonCatalog {
    name: String,
    title: String,
    lessons: Vec<Lesson>,
}

impl LessonCatalog {
    /// Build the catalog from a manifest
    pub fn from_config(config: &StoryConfig) -> Self {
        let lessons = config
            .lessons
            .iter()
            .map(|l| Lesson {
                name: l.name.clone(),
                title: l.title.clone().unwrap_or_else(|| l.name.clone()),
                dir: config
                    .root
                    .join(l.dir.clone().unwrap_or_else(|| PathBuf::from(&l.name))),
                expected_output: l.expected_output.clone(),
            })
            .collect();

        Self {
            name: config.name.clone(),
            title: config.title().to_string(),
            lessons,
        }
    }

    /// Story identifier
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Story title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// All lessons in order
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    /// Find a lesson by name
    pub fn get(&self, name: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.name == name)
    }

    /// Find a lesson by name or fail with `UnknownLesson`
    pub fn require(&self, name: &str) -> Result<&Lesson> {
        self.get(name)
            .ok_or_else(|| Error::UnknownLesson(name.to_string()))
    }

    /// Zero-based position of a lesson
    pub fn position(&self, name: &str) -> Option<usize> {
        self.lessons.iter().position(|l| l.name == name)
    }

    /// First lesson after `current` (wrapping) accepted by `pending`
    ///
    /// Without a current lesson the search starts at the beginning.
    pub fn next_pending<F>(&self, current: Option<&str>, pending: F) -> Option<&Lesson>
    where
        F: Fn(&Lesson) -> bool,
    {
        let count = self.lessons.len();
        let start = current
            .and_then(|c| self.position(c))
            .map(|p| p + 1)
            .unwrap_or(0);

        (0..count)
            .map(|offset| &self.lessons[(start + offset) % count])
            .find(|l| pending(l))
    }

    fn context(&self, lesson: &Lesson) -> HashMap<&'static str, String> {
        let position = self.position(&lesson.name).map(|p| p + 1).unwrap_or(0);
        HashMap::from([
            ("script", self.name.clone()),
            ("story_name", self.name.clone()),
            ("story_title", self.title.clone()),
            ("story_lessons", self.lessons.len().to_string()),
            ("lesson_title", lesson.title.clone()),
            ("lesson_position", position.to_string()),
        ])
    }

    /// Replace known placeholders in `text`; unknown ones are kept verbatim
    pub fn fill_placeholders(&self, lesson: &Lesson, text: &str) -> String {
        let context = self.context(lesson);
        PLACEHOLDER
            .replace_all(text, |caps: &regex::Captures| {
                context
                    .get(&caps[1])
                    .cloned()
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }

    /// Problem statement wrapped with the story header and command hints
    pub fn problem_formatted(&self, lesson: &Lesson, locale: &str) -> Result<String> {
        let body = lesson
            .read_text(TextKind::Problem, locale)?
            .unwrap_or_else(|| t!("lesson.description_not_found", locale = locale).into_owned());
        Ok(self.wrap(lesson, &body, TextKind::Problem, locale))
    }

    /// Reference solution wrapped with the story header and command hints
    pub fn solution_formatted(&self, lesson: &Lesson, locale: &str) -> Result<String> {
        let body = lesson
            .read_text(TextKind::Solution, locale)?
            .ok_or_else(|| Error::LessonText {
                path: lesson.dir.join(format!("{}.md", TextKind::Solution.stem())),
            })?;
        Ok(self.wrap(lesson, &body, TextKind::Solution, locale))
    }

    fn wrap(&self, lesson: &Lesson, body: &str, kind: TextKind, locale: &str) -> String {
        let body = self.fill_placeholders(lesson, body.trim_end());
        let wrapped = match kind {
            TextKind::Problem => t!(
                "lesson.problem_wrapper",
                locale = locale,
                story_title = self.title,
                lesson_title = lesson.title,
                body = body,
                script = self.name
            ),
            TextKind::Solution => t!(
                "lesson.solution_wrapper",
                locale = locale,
                story_title = self.title,
                lesson_title = lesson.title,
                body = body,
                script = self.name
            ),
        };
        format!("\n{}\n", wrapped.trim_end())
    }
}

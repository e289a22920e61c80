//! Error types for the story runner

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for story operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the story runner
#[derive(Error, Debug)]
pub enum Error {
    #[error("Navigation stack would become empty: the root level cannot be popped")]
    EmptyStack,

    #[error("Level has no selectable item")]
    NoSelection,

    #[error("Item '{item}' has no action")]
    UnimplementedAction { item: String },

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Progress file error: {0}")]
    ProgressFile(String),

    #[error("Failed to load story manifest {path}: {message}")]
    Manifest { path: PathBuf, message: String },

    #[error("Invalid lesson: {0}")]
    UnknownLesson(String),

    #[error("No lesson is selected")]
    NoCurrentLesson,

    #[error("Lesson text not found: {path}")]
    LessonText { path: PathBuf },

    #[error("Unsupported language: {0}")]
    UnsupportedLocale(String),

    #[error("The story manifest does not declare an interpreter")]
    NoInterpreter,
}

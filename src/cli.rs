//! CLI argument parsing with clap

use crate::config::DEFAULT_MANIFEST;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Story - interactive terminal lessons
///
/// Pick a lesson from the menu, read its instructions, then run and verify
/// your solution from the command line.
#[derive(Parser, Debug)]
#[command(name = "story")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Interface language (en, es); the choice is remembered
    #[arg(short, long, global = true)]
    pub language: Option<String>,

    /// Path to the story manifest (TOML format)
    #[arg(long, global = true, env = "STORY_MANIFEST", default_value = DEFAULT_MANIFEST)]
    pub story: PathBuf,

    /// Progress file (defaults to ~/.<story>.json)
    #[arg(long, global = true, env = "STORY_DATA")]
    pub data_file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output log format as JSON
    #[arg(long, global = true)]
    pub json_log: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Story commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show a menu to interactively select a lesson (default)
    Menu,

    /// Show a newline-separated list of all the lessons
    List,

    /// Select a lesson
    Select {
        /// Lesson name as shown by `list`
        name: String,
    },

    /// Show the currently selected lesson
    Current,

    /// Print the instructions of the current lesson
    Print,

    /// Print the solution of the current lesson
    Solution,

    /// Select and print the next incomplete lesson
    Next,

    /// Reset completed lesson progress
    Reset,

    /// Run your program
    Run {
        /// Program to run
        file: PathBuf,
    },

    /// Verify your program against the current lesson
    Verify {
        /// Program to verify
        file: PathBuf,
    },
}

impl Cli {
    /// The command to run, `menu` when none was given
    pub fn selected_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Menu)
    }

    /// Whether the interactive menu takes over the terminal
    pub fn is_menu(&self) -> bool {
        self.selected_command() == Commands::Menu
    }
}

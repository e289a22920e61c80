//! Story - interactive terminal lessons
//!
//! Without a subcommand the lesson menu takes over the terminal; every other
//! command prints its result and exits.

use anyhow::{Result, anyhow};
use chrono::Local;
use clap::Parser;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::PathBuf;
use story::tui::LocaleProvider;
use story::{Cli, Outcome, Story, error_message, execute, i18n};
use tracing::{Level, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

// CLI Output Module
mod cli_output {
    //! Colored status lines for command output

    use crossterm::{
        ExecutableCommand,
        style::{Color, Print, Stylize, style},
    };
    use std::io::{stderr, stdout};

    /// CLI theme colors
    pub struct CliTheme;

    impl CliTheme {
        /// Errors (red)
        pub const ERROR: Color = Color::Red;
        /// Warnings (yellow)
        pub const WARNING: Color = Color::Yellow;
        /// Hints (dark grey)
        pub const HINT: Color = Color::DarkGrey;
        /// Accents (cyan)
        pub const ACCENT: Color = Color::Cyan;
    }

    /// Print an error message to stderr
    pub fn print_error(msg: &str) {
        let _ = stderr().execute(Print(style("✗ ").with(CliTheme::ERROR).bold()));
        let _ = stderr().execute(Print(format!("{}\n", msg)));
    }

    /// Print a warning to stderr
    pub fn print_warning(msg: &str) {
        let _ = stderr().execute(Print(style("! ").with(CliTheme::WARNING).bold()));
        let _ = stderr().execute(Print(format!("{}\n", msg)));
    }

    /// Print the log file path
    pub fn print_log_path(path: &str) {
        let _ = stdout().execute(Print("\n"));
        let _ = stdout().execute(Print(style("  » ").with(CliTheme::ACCENT)));
        let _ = stdout().execute(Print(style("Log file: ").with(CliTheme::HINT)));
        let _ = stdout().execute(Print(format!("{}\n", path)));
    }
}

fn main() {
    let cli = Cli::parse();

    let code = match run(&cli) {
        Ok(outcome) => outcome.exit_code(),
        Err(e) => {
            cli_output::print_error(&format!("{:#}", e));
            Outcome::Failure.exit_code()
        }
    };

    std::process::exit(code);
}

/// Set up logging, load the story and run the requested command
///
/// The logging guard lives until this returns so buffered log lines are
/// flushed before the process exits.
fn run(cli: &Cli) -> Result<Outcome> {
    let mut log_warning = None;
    let (menu_log, _guard) = if cli.is_menu() {
        // The terminal belongs to the menu, so logs go to a file only
        match open_log_file(&menu_log_dirs(), &menu_log_name()) {
            Ok((path, file)) => (Some(path), Some(setup_file_only_logging(cli, file))),
            Err(e) => {
                log_warning = Some(format!("Logging disabled, no writable log directory: {}", e));
                (None, None)
            }
        }
    } else {
        setup_logging(cli);
        (None, None)
    };

    info!(
        version = env!("CARGO_PKG_VERSION"),
        manifest = %cli.story.display(),
        "Story starting"
    );

    let opened = Story::open(&cli.story, cli.data_file.as_deref(), cli.language.as_deref());
    let result = opened.map(|mut story| {
        let command = cli.selected_command();
        let result = execute(&mut story, &command, &mut io::stdout());
        (story, command, result)
    });

    // The menu has released the terminal by now
    if let Some(warning) = &log_warning {
        cli_output::print_warning(warning);
    }

    let (story, command, result) = result.map_err(|e| {
        error!(error = %e, "Failed to load story");
        anyhow!(error_message(&e, fallback_locale(cli)))
    })?;

    let outcome = result.map_err(|e| {
        error!(error = %e, ?command, "Command failed");
        anyhow!(error_message(&e, story.locale()))
    })?;

    if let Some(path) = menu_log
        && cli.verbose
    {
        cli_output::print_log_path(&path.display().to_string());
    }

    info!(?outcome, "Story finished");
    Ok(outcome)
}

/// Language for messages printed before a story is loaded
fn fallback_locale(cli: &Cli) -> &'static str {
    cli.language
        .as_deref()
        .and_then(i18n::normalize)
        .unwrap_or_else(i18n::detect_locale)
}

/// Get the directory where the executable is located
fn get_executable_dir() -> Result<PathBuf> {
    let exe_path = std::env::current_exe()?;
    Ok(exe_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".")))
}

/// Log file name for a menu session
fn menu_log_name() -> String {
    format!("Menu_{}.log", Local::now().format("%Y%m%d_%H%M%S"))
}

/// Directories tried for menu logs: `Log/` beside the executable, then a temp dir
fn menu_log_dirs() -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Ok(dir) = get_executable_dir() {
        dirs.push(dir.join("Log"));
    }
    dirs.push(std::env::temp_dir().join("story").join("Log"));
    dirs
}

/// Create `file_name` in the first of `dirs` that accepts it
fn open_log_file(dirs: &[PathBuf], file_name: &str) -> io::Result<(PathBuf, File)> {
    let mut last_error = io::Error::new(io::ErrorKind::NotFound, "no log directory");
    for dir in dirs {
        let path = dir.join(file_name);
        let opened = fs::create_dir_all(dir).and_then(|_| {
            OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&path)
        });
        match opened {
            Ok(file) => return Ok((path, file)),
            Err(e) => last_error = e,
        }
    }
    Err(last_error)
}

fn log_level(cli: &Cli, default: Level) -> Level {
    if cli.verbose { Level::DEBUG } else { default }
}

/// Setup logging for command mode (stderr)
fn setup_logging(cli: &Cli) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level(cli, Level::WARN).into())
        .from_env_lossy();

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if cli.json_log {
        subscriber
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_writer(io::stderr))
            .init();
    }
}

/// Setup logging for menu mode (file only, no console)
fn setup_file_only_logging(cli: &Cli, file: File) -> WorkerGuard {
    let env_filter = EnvFilter::builder()
        .with_default_directive(log_level(cli, Level::INFO).into())
        .from_env_lossy();

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if cli.json_log {
        subscriber
            .with(fmt::layer().json().with_ansi(false).with_writer(non_blocking))
            .init();
    } else {
        subscriber
            .with(fmt::layer().with_ansi(false).with_writer(non_blocking))
            .init();
    }

    guard
}

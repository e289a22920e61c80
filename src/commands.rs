//! Story commands
//!
//! Each command works on a loaded [`Story`] and writes its user-facing
//! output to the given writer in the story's language.

use crate::cli::Commands;
use crate::error::{Error, Result};
use crate::story::Story;
use crate::tui::{LocaleProvider, Menu, MenuExit};
use rust_i18n::t;
use std::io::Write;
use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::{debug, info, warn};

/// Result of a command as seen by the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Success => 0,
            Outcome::Failure => 1,
        }
    }
}

/// Run `command` against `story`
pub fn execute<W: Write>(story: &mut Story, command: &Commands, out: &mut W) -> Result<Outcome> {
    debug!(?command, "Executing command");

    match command {
        Commands::Menu => {
            let exit = Menu::new(story).show()?;
            if exit == MenuExit::Exited {
                debug!("Menu left without a selection");
            }
            Ok(Outcome::Success)
        }
        Commands::List => list(story, out),
        Commands::Select { name } => {
            let name = story.select(name)?.name.clone();
            writeln!(out, "{}", t!("cli.selected", locale = story.locale(), name = name))?;
            Ok(Outcome::Success)
        }
        Commands::Current => {
            writeln!(out, "{}", story.current_lesson()?.name)?;
            Ok(Outcome::Success)
        }
        Commands::Print => {
            let text = story.problem_text(story.current_lesson()?)?;
            out.write_all(text.as_bytes())?;
            Ok(Outcome::Success)
        }
        Commands::Solution => {
            let text = story.solution_text(story.current_lesson()?)?;
            out.write_all(text.as_bytes())?;
            Ok(Outcome::Success)
        }
        Commands::Next => next(story, out),
        Commands::Reset => {
            story.reset()?;
            writeln!(out, "{}", t!("cli.reset_done", locale = story.locale()))?;
            Ok(Outcome::Success)
        }
        Commands::Run { file } => run(story, file, out),
        Commands::Verify { file } => verify(story, file, out),
    }
}

/// User-facing text for `err` in `locale`
pub fn error_message(err: &Error, locale: &str) -> String {
    match err {
        Error::NoCurrentLesson => t!("cli.select_first", locale = locale).into_owned(),
        Error::UnknownLesson(name) => {
            t!("cli.invalid_lesson", locale = locale, name = name).into_owned()
        }
        other => other.to_string(),
    }
}

fn list<W: Write>(story: &Story, out: &mut W) -> Result<Outcome> {
    for lesson in story.catalog().lessons() {
        let mark = if story.progress().is_completed(&lesson.name) {
            '*'
        } else {
            ' '
        };
        writeln!(out, "[{}] {}", mark, lesson.name)?;
    }
    Ok(Outcome::Success)
}

fn next<W: Write>(story: &mut Story, out: &mut W) -> Result<Outcome> {
    let Some(lesson) = story.select_next()?.cloned() else {
        writeln!(out, "{}", t!("cli.all_completed", locale = story.locale()))?;
        return Ok(Outcome::Success);
    };

    out.write_all(story.problem_text(&lesson)?.as_bytes())?;
    Ok(Outcome::Success)
}

/// Interpreter command line for `file`
fn interpreter_command(story: &Story, file: &Path) -> Result<Command> {
    let mut parts = story.interpreter()?.split_whitespace();
    let program = parts.next().ok_or(Error::NoInterpreter)?;

    let mut command = Command::new(program);
    command.args(parts).arg(file);
    Ok(command)
}

fn status_text(status: ExitStatus) -> String {
    status
        .code()
        .map(|code| code.to_string())
        .unwrap_or_else(|| status.to_string())
}

fn run<W: Write>(story: &Story, file: &Path, out: &mut W) -> Result<Outcome> {
    let lesson = story.current_lesson()?;
    info!(lesson = %lesson.name, file = %file.display(), "Running program");

    let status = interpreter_command(story, file)?.status()?;
    if status.success() {
        return Ok(Outcome::Success);
    }

    warn!(%status, "Program failed");
    writeln!(
        out,
        "{}",
        t!("cli.run_failed", locale = story.locale(), status = status_text(status))
    )?;
    Ok(Outcome::Failure)
}

fn verify<W: Write>(story: &mut Story, file: &Path, out: &mut W) -> Result<Outcome> {
    let lesson = story.current_lesson()?.clone();
    info!(lesson = %lesson.name, file = %file.display(), "Verifying program");

    let output = interpreter_command(story, file)?.output()?;
    let stdout = String::from_utf8_lossy(&output.stdout);
    let output_matches = lesson
        .expected_output
        .as_deref()
        .is_none_or(|expected| stdout.trim() == expected.trim());

    if output.status.success() && output_matches {
        story.complete(&lesson.name)?;
        writeln!(out, "{}", t!("cli.verify_passed", locale = story.locale(), name = lesson.name))?;
        return Ok(Outcome::Success);
    }

    warn!(
        lesson = %lesson.name,
        status = %output.status,
        output_matches,
        "Verification failed"
    );
    if !output.status.success() {
        writeln!(
            out,
            "{}",
            t!("cli.run_failed", locale = story.locale(), status = status_text(output.status))
        )?;
    }
    writeln!(out, "{}", t!("cli.verify_failed", locale = story.locale(), name = lesson.name))?;
    Ok(Outcome::Failure)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::{TempDir, tempdir};

    const MANIFEST: &str = r#"
name = "shschool"
title = "Shell School"
interpreter = "sh"

[[lessons]]
name = "echo"
title = "Echo"
expected_output = "hello"

[[lessons]]
name = "exit"
title = "Exit Codes"
"#;

    fn setup() -> (TempDir, Story) {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("story.toml"), MANIFEST).unwrap();
        fs::create_dir(dir.path().join("echo")).unwrap();
        fs::write(dir.path().join("echo/README.md"), "Print hello in {story_title}.").unwrap();
        fs::write(dir.path().join("echo/SOLUTION.md"), "echo hello").unwrap();

        let story = Story::open(
            &dir.path().join("story.toml"),
            Some(&dir.path().join("progress.json")),
            Some("en"),
        )
        .unwrap();
        (dir, story)
    }

    fn exec(story: &mut Story, command: Commands) -> (Result<Outcome>, String) {
        let mut out = Vec::new();
        let result = execute(story, &command, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    fn script(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_list_marks_completed() {
        let (_dir, mut story) = setup();
        story.complete("exit").unwrap();

        let (result, out) = exec(&mut story, Commands::List);
        assert_eq!(result.unwrap(), Outcome::Success);
        assert_eq!(out, "[ ] echo\n[*] exit\n");
    }

    #[test]
    fn test_select_and_current() {
        let (_dir, mut story) = setup();
        let (result, out) = exec(
            &mut story,
            Commands::Select {
                name: "exit".to_string(),
            },
        );
        assert_eq!(result.unwrap(), Outcome::Success);
        assert_eq!(out, "Selected lesson: exit\n");

        let (_, out) = exec(&mut story, Commands::Current);
        assert_eq!(out, "exit\n");
    }

    #[test]
    fn test_commands_require_selection() {
        let (_dir, mut story) = setup();
        for command in [Commands::Current, Commands::Print, Commands::Solution] {
            let (result, out) = exec(&mut story, command);
            let err = result.unwrap_err();
            assert!(matches!(err, Error::NoCurrentLesson));
            assert_eq!(error_message(&err, "en"), "Please select a lesson first.");
            assert!(out.is_empty());
        }
    }

    #[test]
    fn test_unknown_lesson_message() {
        let (_dir, mut story) = setup();
        let (result, _) = exec(
            &mut story,
            Commands::Select {
                name: "nope".to_string(),
            },
        );
        let err = result.unwrap_err();
        assert_eq!(error_message(&err, "en"), "Invalid lesson: nope.");
    }

    #[test]
    fn test_print_and_solution() {
        let (_dir, mut story) = setup();
        story.select("echo").unwrap();

        let (_, out) = exec(&mut story, Commands::Print);
        assert!(out.contains("Shell School: Echo"));
        assert!(out.contains("Print hello in Shell School."));
        assert!(out.contains("shschool verify program.py"));

        let (_, out) = exec(&mut story, Commands::Solution);
        assert!(out.contains("[SOLUTION]"));
        assert!(out.contains("echo hello"));
    }

    #[test]
    fn test_missing_solution() {
        let (_dir, mut story) = setup();
        story.select("exit").unwrap();
        let (result, _) = exec(&mut story, Commands::Solution);
        assert!(matches!(result, Err(Error::LessonText { .. })));
    }

    #[test]
    fn test_next_then_all_completed() {
        let (_dir, mut story) = setup();
        let (_, out) = exec(&mut story, Commands::Next);
        assert!(out.contains("Shell School: Echo"));
        assert_eq!(story.current_lesson().unwrap().name, "echo");

        story.complete("echo").unwrap();
        story.complete("exit").unwrap();
        let (result, out) = exec(&mut story, Commands::Next);
        assert_eq!(result.unwrap(), Outcome::Success);
        assert_eq!(out, "All lessons are completed. Well done!\n");
    }

    #[test]
    fn test_reset() {
        let (_dir, mut story) = setup();
        story.complete("echo").unwrap();
        let (_, out) = exec(&mut story, Commands::Reset);
        assert_eq!(out, "Progress has been reset.\n");
        assert!(!story.progress().is_completed("echo"));
    }

    #[cfg(unix)]
    #[test]
    fn test_verify_passes_and_completes() {
        let (dir, mut story) = setup();
        story.select("echo").unwrap();
        let file = script(&dir, "good.sh", "echo hello\n");

        let (result, out) = exec(&mut story, Commands::Verify { file });
        assert_eq!(result.unwrap(), Outcome::Success);
        assert_eq!(out, "Congratulations! Lesson echo is complete.\n");
        assert!(story.progress().is_completed("echo"));
        assert!(story.progress().current().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_verify_wrong_output_fails() {
        let (dir, mut story) = setup();
        story.select("echo").unwrap();
        let file = script(&dir, "bad.sh", "echo goodbye\n");

        let (result, out) = exec(&mut story, Commands::Verify { file });
        assert_eq!(result.unwrap(), Outcome::Failure);
        assert!(out.contains("did not pass"));
        assert!(!story.progress().is_completed("echo"));
        assert_eq!(story.current_lesson().unwrap().name, "echo");
    }

    #[cfg(unix)]
    #[test]
    fn test_verify_without_expected_output_uses_status() {
        let (dir, mut story) = setup();
        story.select("exit").unwrap();
        let failing = script(&dir, "fail.sh", "exit 3\n");

        let (result, out) = exec(&mut story, Commands::Verify { file: failing });
        assert_eq!(result.unwrap(), Outcome::Failure);
        assert!(out.contains("exited with status 3"));

        let passing = script(&dir, "pass.sh", "exit 0\n");
        let (result, _) = exec(&mut story, Commands::Verify { file: passing });
        assert_eq!(result.unwrap(), Outcome::Success);
    }

    #[cfg(unix)]
    #[test]
    fn test_run_reports_status() {
        let (dir, mut story) = setup();
        story.select("exit").unwrap();

        let file = script(&dir, "ok.sh", "true\n");
        let (result, out) = exec(&mut story, Commands::Run { file });
        assert_eq!(result.unwrap(), Outcome::Success);
        assert!(out.is_empty());

        let file = script(&dir, "fail.sh", "exit 2\n");
        let (result, out) = exec(&mut story, Commands::Run { file });
        assert_eq!(result.unwrap(), Outcome::Failure);
        assert_eq!(out, "Your program exited with status 2.\n");
    }

    #[test]
    fn test_outcome_exit_codes() {
        assert_eq!(Outcome::Success.exit_code(), 0);
        assert_eq!(Outcome::Failure.exit_code(), 1);
    }
}

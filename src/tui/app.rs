//! Menu application
//!
//! Runs the render / read-key / dispatch loop over the navigation stack.
//! The terminal is owned for the whole of `Menu::show` and restored on
//! every exit path before any deferred output is printed.

use crate::error::Result;
use crate::tui::event::{KeySource, MenuAction, TerminalKeys};
use crate::tui::host::MenuHost;
use crate::tui::item::{Deferred, Effect};
use crate::tui::render::render;
use crate::tui::screens;
use crate::tui::stack::NavigationStack;
use ratatui::{DefaultTerminal, Terminal, backend::Backend};
use std::io;
use tracing::{debug, info};

/// Dispatcher state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStatus {
    Running,
    Stopped,
}

/// How the menu ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuExit {
    /// The user left without choosing anything
    Exited,
    /// A lesson was chosen and its content printed
    ContentShown(String),
    /// Usage help was printed
    HelpShown,
}

/// Terminal held for the duration of a menu session
struct TerminalSession {
    terminal: DefaultTerminal,
}

impl TerminalSession {
    fn acquire() -> Result<Self> {
        let terminal = init_or_restore(ratatui::try_init, ratatui::restore)?;
        debug!("Terminal acquired");
        Ok(Self { terminal })
    }
}

/// Run `init`, undoing any partial setup with `restore` if it fails
///
/// `ratatui::try_init` enables raw mode before entering the alternate
/// screen, so a failure part way through still leaves the terminal dirty.
fn init_or_restore<T>(
    init: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce(),
) -> Result<T> {
    init().map_err(|e| {
        restore();
        debug!(error = %e, "Terminal setup failed, restored");
        e.into()
    })
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        ratatui::restore();
        debug!("Terminal restored");
    }
}

/// Interactive menu
pub struct Menu<'h> {
    host: &'h mut dyn MenuHost,
    stack: NavigationStack,
    status: MenuStatus,
}

impl<'h> Menu<'h> {
    /// Create a menu showing the root level
    pub fn new(host: &'h mut dyn MenuHost) -> Self {
        let mut stack = NavigationStack::new();
        stack.push(screens::main_menu::level(&*host));
        Self {
            host,
            stack,
            status: MenuStatus::Running,
        }
    }

    pub fn status(&self) -> MenuStatus {
        self.status
    }

    pub fn stack(&self) -> &NavigationStack {
        &self.stack
    }

    /// Take over the terminal and run until the user leaves
    pub fn show(mut self) -> Result<MenuExit> {
        info!("Showing menu");
        let deferred = {
            let mut session = TerminalSession::acquire()?;
            self.run(&mut session.terminal, &mut TerminalKeys)?
        };
        self.finish(deferred)
    }

    /// Run on a caller-provided terminal and input source
    pub fn run_with<B: Backend, K: KeySource>(
        mut self,
        terminal: &mut Terminal<B>,
        keys: &mut K,
    ) -> Result<MenuExit> {
        let deferred = self.run(terminal, keys)?;
        self.finish(deferred)
    }

    fn run<B: Backend, K: KeySource>(
        &mut self,
        terminal: &mut Terminal<B>,
        keys: &mut K,
    ) -> Result<Option<Deferred>> {
        let mut deferred = None;

        while self.status == MenuStatus::Running {
            render(terminal, self.stack.active()?, self.host.locale())?;

            let event = keys.next_event()?;
            let Some(action) = MenuAction::from_event(event) else {
                continue;
            };

            if let Some(work) = self.dispatch(action)? {
                deferred = Some(work);
            }
        }

        Ok(deferred)
    }

    /// Apply one action to the active level
    pub fn dispatch(&mut self, action: MenuAction) -> Result<Option<Deferred>> {
        debug!(?action, depth = self.stack.depth(), "Dispatching");

        match action {
            MenuAction::Terminate => {
                self.status = MenuStatus::Stopped;
                Ok(None)
            }
            MenuAction::SelectPrevious => {
                self.stack.active_mut()?.select_previous();
                Ok(None)
            }
            MenuAction::SelectNext => {
                self.stack.active_mut()?.select_next();
                Ok(None)
            }
            MenuAction::Activate => {
                let level = self.stack.active()?;
                if !level.has_selectable() {
                    return Ok(None);
                }

                let item = level.selected()?;
                debug!(item = %item.describe(), "Activating item");
                match item.activate(&mut *self.host)? {
                    Effect::Push(level) => {
                        self.stack.push(level);
                        Ok(None)
                    }
                    Effect::Pop => {
                        self.stack.pop()?;
                        Ok(None)
                    }
                    Effect::Stop(deferred) => {
                        self.status = MenuStatus::Stopped;
                        Ok(deferred)
                    }
                }
            }
        }
    }

    fn finish(&mut self, deferred: Option<Deferred>) -> Result<MenuExit> {
        let exit = match deferred {
            None => MenuExit::Exited,
            Some(Deferred::PrintContent(name)) => {
                self.host.print_formatted_content(&name)?;
                MenuExit::ContentShown(name)
            }
            Some(Deferred::Help) => {
                self.host.show_help()?;
                MenuExit::HelpShown
            }
        };
        info!(?exit, "Menu closed");
        Ok(exit)
    }
}

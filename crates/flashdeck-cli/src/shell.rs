//! The interactive command loop.

use std::path::PathBuf;

use anyhow::Result;

use flashdeck_core::command::Command;
use flashdeck_core::config::FlashdeckConfig;
use flashdeck_core::console::{expect_line, Console};
use flashdeck_core::{Deck, DeckError};

use crate::commands;

/// Whether the loop keeps reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Session state shared by every command.
pub struct Shell<C> {
    pub deck: Deck,
    pub console: C,
    pub config: FlashdeckConfig,
    /// Written on `exit` when the process was started with `--export-to`.
    pub export_on_exit: Option<PathBuf>,
}

impl<C: Console> Shell<C> {
    pub fn new(console: C, config: FlashdeckConfig) -> Self {
        Self {
            deck: Deck::new(),
            console,
            config,
            export_on_exit: None,
        }
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        self.console.write_line(line)?;
        Ok(())
    }

    /// Run until `exit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let flow = match self.read_command() {
                Ok(command) => self.dispatch(command),
                Err(e) => Err(e),
            };

            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => return Ok(()),
                Err(e) if is_input_closed(&e) => {
                    tracing::debug!("input closed, leaving");
                    commands::exit::execute(self)?;
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Show the menu and read until a valid token arrives.
    fn read_command(&mut self) -> Result<Command> {
        self.say(&Command::menu())?;
        loop {
            let line = expect_line(&mut self.console)?;
            match line.parse::<Command>() {
                Ok(command) => return Ok(command),
                Err(e) => {
                    tracing::debug!("{e}");
                    self.say("Invalid Choice. Try again.")?;
                }
            }
        }
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Flow> {
        tracing::debug!(%command, "dispatching");
        match command {
            Command::Add => commands::add::execute(self)?,
            Command::Remove => commands::remove::execute(self)?,
            Command::Import => commands::import::execute(self, None)?,
            Command::Export => commands::export::execute(self, None)?,
            Command::Ask => commands::ask::execute(self)?,
            Command::Log => commands::log::execute(self)?,
            Command::HardestCard => commands::hardest::execute(self)?,
            Command::ResetStats => commands::reset::execute(self)?,
            Command::Exit => {
                commands::exit::execute(self)?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }
}

fn is_input_closed(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<DeckError>(), Some(DeckError::InputClosed))
}

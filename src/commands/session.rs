//! Interactive read-eval-print session.
//!
//! The session loads the book from its store, answers commands line by line,
//! and saves the book when the user exits or input ends.

use super::clock::Clock;
use super::handler::CommandHandler;
use super::parser::Command;
use crate::error::SessionResult;
use crate::models::AddressBook;
use crate::storage::BookStore;
use std::io::{BufRead, Write};

pub const GREETING: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const EMPTY_INPUT: &str = "Please enter a command.";
pub const FAREWELL: &str = "Good bye!";

/// One run of the assistant over a store.
pub struct Session<S: BookStore, C: Clock> {
    store: S,
    handler: CommandHandler<C>,
    book: AddressBook,
}

impl<S: BookStore, C: Clock> Session<S, C> {
    /// Load the book from `store`.
    pub fn open(store: S, handler: CommandHandler<C>) -> SessionResult<Self> {
        let book = store.load()?;
        Ok(Self {
            store,
            handler,
            book,
        })
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Run the command loop until `close`/`exit` or end of input, then save.
    ///
    /// Command failures are printed and the loop continues. Input that is not
    /// valid UTF-8 is decoded lossily. The book is saved even when terminal I/O
    /// fails; the I/O error is returned after the save.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: &mut W) -> SessionResult<()> {
        let outcome = self.command_loop(input, output);
        if let Err(e) = &outcome {
            tracing::error!(error = %e, "Session ended on terminal I/O failure");
        }

        self.store.save(&self.book)?;
        outcome
    }

    fn command_loop<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        output: &mut W,
    ) -> SessionResult<()> {
        writeln!(output, "{}", GREETING)?;

        let mut buf = Vec::new();
        loop {
            write!(output, "{}", PROMPT)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                tracing::debug!("End of input, closing session");
                writeln!(output)?;
                writeln!(output, "{}", FAREWELL)?;
                return Ok(());
            }
            let line = String::from_utf8_lossy(&buf);

            let command = match Command::parse(&line) {
                None => {
                    writeln!(output, "{}", EMPTY_INPUT)?;
                    continue;
                }
                Some(Err(e)) => {
                    tracing::debug!(error = %e, "Rejected input");
                    writeln!(output, "{}", e)?;
                    continue;
                }
                Some(Ok(command)) => command,
            };

            let exit = command.is_exit();
            match self.handler.execute(&mut self.book, command) {
                Ok(reply) => writeln!(output, "{}", reply)?,
                Err(e) => {
                    tracing::debug!(error = %e, "Command failed");
                    writeln!(output, "{}", e)?;
                }
            }

            if exit {
                return Ok(());
            }
        }
    }
}

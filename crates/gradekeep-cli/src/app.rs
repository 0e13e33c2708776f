//! The interactive session: menu loop and prompt helpers.
//!
//! `App` owns the store, the persistence adapter, and both ends of the
//! console. It is generic over reader, writer, and adapter so tests can
//! script a whole session against in-memory buffers.
//!
//! Every prompt helper returns `Ok(None)` once input is exhausted, which
//! unwinds the current flow and ends the menu loop cleanly. Invalid input
//! never errors; it re-prompts.

use std::io::{self, BufRead, Write};

use gradekeep_core::{model, Store};
use gradekeep_persist::PersistenceAdapter;

use crate::flows;

pub struct App<R, W, P> {
    pub(crate) store: Store,
    pub(crate) adapter: P,
    pub(crate) input: R,
    pub(crate) out: W,
}

impl<R: BufRead, W: Write, P: PersistenceAdapter> App<R, W, P> {
    pub fn new(store: Store, adapter: P, input: R, out: W) -> Self {
        Self {
            store,
            adapter,
            input,
            out,
        }
    }

    /// Run the menu loop until the user picks Exit or input runs out.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            writeln!(self.out, "\n--- Student Grade Tracker ---")?;
            writeln!(self.out, "1. Add Students")?;
            writeln!(self.out, "2. View Grade Summary")?;
            writeln!(self.out, "3. Edit Student Grade")?;
            writeln!(self.out, "4. Delete Student")?;
            writeln!(self.out, "5. Search Student")?;
            writeln!(self.out, "6. Exit\n")?;

            let Some(choice) = self.prompt_int("Enter your choice: ")? else {
                break;
            };

            match choice {
                1 => flows::add::execute(self)?,
                2 => flows::summary::execute(self)?,
                3 => flows::edit::execute(self)?,
                4 => flows::delete::execute(self)?,
                5 => flows::search::execute(self)?,
                6 => {
                    writeln!(self.out, "Exiting application.")?;
                    break;
                }
                _ => writeln!(
                    self.out,
                    "\nInvalid choice. Please enter a number between 1 and 6.\n"
                )?,
            }
        }

        Ok(())
    }

    /// Print a prompt and read one trimmed line. `None` at end of input.
    pub(crate) fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Re-prompt until the line parses as an integer.
    pub(crate) fn prompt_int(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<i64>() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.out, "Please enter a valid number.\n")?,
            }
        }
    }

    /// Re-prompt until the line is a number in `[0, 100]`.
    pub(crate) fn prompt_grade(&mut self, prompt: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            match line.parse::<f64>() {
                Ok(grade) if model::is_valid_grade(grade) => return Ok(Some(grade)),
                Ok(_) => writeln!(self.out, "Grade must be between 0 and 100.\n")?,
                Err(_) => writeln!(
                    self.out,
                    "Invalid input. Please enter a number between 0 and 100.\n"
                )?,
            }
        }
    }

    /// Re-prompt until the line is a valid student name.
    pub(crate) fn prompt_name(&mut self, prompt: &str) -> io::Result<Option<String>> {
        loop {
            let Some(line) = self.prompt_line(prompt)? else {
                return Ok(None);
            };
            if model::is_valid_name(&line) {
                return Ok(Some(line));
            }
            writeln!(
                self.out,
                "Invalid name. Name must start with a letter and contain only letters, numbers, and spaces.\n"
            )?;
        }
    }
}

use std::io::{BufRead, Write};
use crate::compiler::compiler::{self, Compilation};
use crate::error::{Error, Result};

/// Line-oriented front end. Each line is compiled and evaluated on its own.
pub struct Repl {
    show_tree: bool,
    show_bound_tree: bool,
    prompt: bool,
}

impl Repl {
    pub fn new(show_tree: bool, show_bound_tree: bool, prompt: bool) -> Repl {
        Repl { show_tree, show_bound_tree, prompt }
    }

    /// Runs until EOF or an empty line.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write, err: &mut impl Write) -> Result<()> {
        let mut lines = input.lines();

        loop {
            if self.prompt {
                write!(out, "> ")?;
                out.flush()?;
            }

            let line = match lines.next() {
                Some(line) => line?,
                None => return Ok(()),
            };

            if line.trim().is_empty() {
                return Ok(());
            }

            if !self.run_command(line.trim(), out)? {
                self.process_line(&line, out, err)?;
            }
        }
    }

    /// Compiles and evaluates one line, printing trees, diagnostics and the result.
    /// Returns `false` if anything was reported or evaluation failed.
    pub fn process_line(&self, line: &str, out: &mut impl Write, err: &mut impl Write) -> Result<bool> {
        let compilation = match compiler::compile(line) {
            Ok(compilation) => compilation,
            Err(error) => return Self::report_fatal(error.into(), err),
        };

        self.print_trees(&compilation, out)?;

        if compilation.had_error() {
            for message in &compilation.diagnostics {
                writeln!(err, "{}", message)?;
            }

            return Ok(false);
        }

        match compilation.evaluate() {
            Ok(Some(value)) => {
                writeln!(out, "{}", value)?;
                Ok(true)
            },
            Ok(None) => Ok(false),
            Err(error) => Self::report_fatal(error.into(), err),
        }
    }

    fn run_command(&mut self, line: &str, out: &mut impl Write) -> Result<bool> {
        match line {
            "#showTree" => {
                self.show_tree = !self.show_tree;
                writeln!(out, "{}", if self.show_tree { "Showing parse trees." } else { "Not showing parse trees." })?;
            },
            "#showBoundTree" => {
                self.show_bound_tree = !self.show_bound_tree;
                writeln!(out, "{}", if self.show_bound_tree { "Showing bound trees." } else { "Not showing bound trees." })?;
            },
            "#cls" => {
                write!(out, "\x1b[2J\x1b[1;1H")?;
            },
            _ => return Ok(false),
        }

        Ok(true)
    }

    fn print_trees(&self, compilation: &Compilation, out: &mut impl Write) -> Result<()> {
        if self.show_tree {
            writeln!(out, "{:?}", compilation.syntax)?;
        }

        if self.show_bound_tree {
            if let Some(bound) = &compilation.bound {
                writeln!(out, "{:?}", bound)?;
            }
        }

        Ok(())
    }

    fn report_fatal(error: Error, err: &mut impl Write) -> Result<bool> {
        writeln!(err, "Error: {}", error)?;
        Ok(false)
    }
}

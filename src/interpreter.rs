//! The read-evaluate loop and per-line dispatch.

use crate::builtin::Registry;
use crate::command::ExitCode;
use crate::env::Environment;
use crate::external::{Spawner, SystemSpawner, find_command_path};
use crate::lexer;
use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, Write};

/// What a single evaluated line asks the loop to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading. Carries the exit code of whatever ran, for callers that
    /// care; the loop itself does not.
    Continue(ExitCode),
    /// Terminate the interpreter with the given code.
    Exit(ExitCode),
}

/// The interpreter: owns the shell state, the builtin registry, and the
/// spawner used for external commands.
///
/// One line is processed at a time, and an external command blocks the
/// interpreter until it terminates. [`eval_line`](Interpreter::eval_line)
/// exposes the engine to callers that bring their own streams;
/// [`repl`](Interpreter::repl) wraps it in prompt-driven line reading.
pub struct Interpreter {
    env: Environment,
    builtins: Registry,
    spawner: Box<dyn Spawner>,
}

impl Interpreter {
    /// Build an interpreter over the calling process environment, running
    /// external commands as real child processes.
    pub fn new() -> Result<Self> {
        Ok(Self::with_parts(
            Environment::new()?,
            Box::new(SystemSpawner),
        ))
    }

    /// Build an interpreter from an explicit state and spawner.
    pub fn with_parts(env: Environment, spawner: Box<dyn Spawner>) -> Self {
        Interpreter {
            env,
            builtins: Registry::new(),
            spawner,
        }
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Evaluate one input line.
    ///
    /// Tokenizes the line, dispatches the first argument to a builtin or to
    /// the external launcher, and reports failures on `stderr` without
    /// giving up the loop. A blank line is a no-op. An unresolvable command
    /// name is reported on `stdout` as `<name>: command not found`. The
    /// returned error covers only the streams themselves failing.
    pub fn eval_line(
        &mut self,
        line: &str,
        stdout: &mut dyn Write,
        stderr: &mut dyn Write,
    ) -> Result<Outcome> {
        let args = lexer::tokenize(line);
        let Some((name, rest)) = args.split_first() else {
            return Ok(Outcome::Continue(0));
        };

        if let Some(cmd) = self.builtins.lookup(name) {
            let code = match cmd.execute(rest, stdout, &mut self.env) {
                Ok(code) => code,
                Err(err) => {
                    writeln!(stderr, "{:#}", err)?;
                    1
                }
            };
            if let Some(code) = self.env.take_exit_request() {
                return Ok(Outcome::Exit(code));
            }
            return Ok(Outcome::Continue(code));
        }

        match find_command_path(&self.env, name) {
            Some(program) => {
                // The child writes to the same streams; flush so its output
                // cannot overtake ours.
                stdout.flush()?;
                stderr.flush()?;
                match self.spawner.run(&program, rest, &self.env) {
                    Ok(code) => Ok(Outcome::Continue(code)),
                    Err(err) => {
                        writeln!(stderr, "{:#}", err)?;
                        Ok(Outcome::Continue(1))
                    }
                }
            }
            None => {
                writeln!(stdout, "{}: command not found", name)?;
                Ok(Outcome::Continue(127))
            }
        }
    }

    /// Read lines from the terminal until end of input or an `exit` request,
    /// returning the interpreter's exit code.
    pub fn repl(&mut self) -> Result<ExitCode> {
        let mut editor = DefaultEditor::new()?;

        loop {
            match editor.readline("$ ") {
                Ok(line) => {
                    let outcome = {
                        let mut stdout = io::stdout().lock();
                        let mut stderr = io::stderr().lock();
                        let outcome = self.eval_line(&line, &mut stdout, &mut stderr);
                        stdout.flush()?;
                        outcome
                    };
                    match outcome {
                        Ok(Outcome::Exit(code)) => return Ok(code),
                        Ok(Outcome::Continue(_)) => {}
                        Err(err) => eprintln!("{:#}", err),
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => return Ok(0),
                Err(err) => return Err(err.into()),
            }
        }
    }
}

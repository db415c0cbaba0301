use crate::env::Environment;
use anyhow::Result;
use std::io::Write;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
pub type ExitCode = i32;

/// A command implemented inside the interpreter, executed without spawning
/// a child process.
///
/// Normal output goes to `stdout`. Failures are returned as errors and the
/// caller reports them on its diagnostic stream, so a failing builtin never
/// tears down the interpreter.
pub trait ShellCommand {
    /// Canonical name the dispatcher matches on, e.g. "cd".
    fn name(&self) -> &'static str;

    /// Executes the command against the interpreter state.
    fn execute(
        &self,
        args: &[String],
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode>;
}

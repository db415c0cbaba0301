//! The fixed builtin set and its dispatcher.

use crate::command::{ExitCode, ShellCommand};
use crate::env::Environment;
use crate::expand::expand_tilde;
use crate::external::find_command_path;
use anyhow::{Context, Result, anyhow, bail};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// The closed set of builtin command names.
pub const BUILTIN_NAMES: &[&str] = &["echo", "exit", "type", "pwd", "cd"];

/// Returns whether `name` belongs to the builtin set.
pub fn is_builtin(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}

/// Registry of builtin commands, dispatched by exact match on the command
/// name. No abbreviation or prefix matching.
pub struct Registry {
    commands: Vec<Box<dyn ShellCommand>>,
}

impl Registry {
    pub fn new() -> Self {
        Registry {
            commands: vec![
                Box::new(Echo),
                Box::new(Exit),
                Box::new(Type),
                Box::new(Pwd),
                Box::new(Cd),
            ],
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&dyn ShellCommand> {
        self.commands
            .iter()
            .find(|cmd| cmd.name() == name)
            .map(|cmd| cmd.as_ref())
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

/// Write the arguments to standard output separated by single spaces, with a
/// trailing newline. With no arguments, just the newline. Arguments arrive
/// with quotes already stripped by the tokenizer and are printed verbatim.
pub struct Echo;

impl ShellCommand for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(
        &self,
        args: &[String],
        stdout: &mut dyn Write,
        _env: &mut Environment,
    ) -> Result<ExitCode> {
        writeln!(stdout, "{}", args.join(" "))?;
        Ok(0)
    }
}

/// Request termination of the interpreter loop. Without an argument the exit
/// code is 0; a numeric argument becomes the exit code; anything else is a
/// usage error and the loop keeps running.
pub struct Exit;

impl ShellCommand for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(
        &self,
        args: &[String],
        _stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let code = match args.first() {
            None => 0,
            Some(arg) => arg
                .parse::<ExitCode>()
                .map_err(|_| anyhow!("exit: {}: numeric argument required", arg))?,
        };
        env.request_exit(code);
        Ok(code)
    }
}

/// Report how a name would be interpreted: as a builtin, as an executable on
/// the search path, or not at all.
pub struct Type;

impl ShellCommand for Type {
    fn name(&self) -> &'static str {
        "type"
    }

    fn execute(
        &self,
        args: &[String],
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let Some(target) = args.first() else {
            bail!("type: missing argument");
        };
        if is_builtin(target) {
            writeln!(stdout, "{} is a shell builtin", target)?;
        } else if let Some(path) = find_command_path(env, target) {
            writeln!(stdout, "{} is {}", target, path.display())?;
        } else {
            writeln!(stdout, "{}: not found", target)?;
        }
        Ok(0)
    }
}

/// Print the interpreter's working directory.
pub struct Pwd;

impl ShellCommand for Pwd {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(
        &self,
        _args: &[String],
        stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        writeln!(stdout, "{}", env.current_dir().display())?;
        Ok(0)
    }
}

/// Change the interpreter's working directory.
///
/// Without an argument the target is the `HOME` variable. A `~` argument is
/// expanded first, a relative one is joined against the current directory,
/// and the result must canonicalize to an existing directory before the
/// state is touched, so a failed change leaves the directory as it was.
pub struct Cd;

impl ShellCommand for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(
        &self,
        args: &[String],
        _stdout: &mut dyn Write,
        env: &mut Environment,
    ) -> Result<ExitCode> {
        let target = match args.first() {
            Some(raw) => expand_tilde(env, raw).with_context(|| format!("cd: {}", raw))?,
            None => PathBuf::from(env.get_var("HOME").context("cd: HOME not set")?),
        };

        let dest = if target.is_absolute() {
            target
        } else {
            env.current_dir().join(target)
        };

        let canonical =
            fs::canonicalize(&dest).with_context(|| format!("cd: {}", dest.display()))?;
        if !canonical.is_dir() {
            bail!("cd: {}: not a directory", dest.display());
        }

        env.set_current_dir(canonical);
        Ok(0)
    }
}

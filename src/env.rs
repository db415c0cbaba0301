use crate::command::ExitCode;
use anyhow::{Context, Result};
use std::collections::HashMap;
use std::env as stdenv;
use std::path::{Path, PathBuf};

/// Mutable working state of the interpreter: the variable mapping and the
/// working directory every command sees, plus any pending exit request.
///
/// The working directory lives here instead of in the process-global state so
/// the engine can be exercised against a fabricated environment. Invariant:
/// `current_dir` always names an existing directory; it is only replaced
/// after a change has been validated (see the `cd` builtin).
#[derive(Debug, Clone)]
pub struct Environment {
    vars: HashMap<String, String>,
    current_dir: PathBuf,
    exit: Option<ExitCode>,
}

impl Environment {
    /// Capture the variables and working directory of the calling process.
    pub fn new() -> Result<Self> {
        let current_dir =
            stdenv::current_dir().context("cannot determine the working directory")?;
        Ok(Self {
            vars: stdenv::vars().collect(),
            current_dir,
            exit: None,
        })
    }

    /// Build a state from explicit parts, e.g. for embedding or tests.
    pub fn from_parts(vars: HashMap<String, String>, current_dir: PathBuf) -> Self {
        Self {
            vars,
            current_dir,
            exit: None,
        }
    }

    /// Look up a variable. The interpreter itself only consults `PATH` and
    /// `HOME`; the full mapping is what child processes inherit.
    pub fn get_var(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// All variables, in the form `std::process::Command::envs` accepts.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub(crate) fn set_current_dir(&mut self, dir: PathBuf) {
        self.current_dir = dir;
    }

    /// Ask the interpreter loop to terminate with `code` once the current
    /// command finishes.
    pub fn request_exit(&mut self, code: ExitCode) {
        self.exit = Some(code);
    }

    pub(crate) fn take_exit_request(&mut self) -> Option<ExitCode> {
        self.exit.take()
    }
}

//! Locating and running executables outside the builtin set.

use crate::command::ExitCode;
use crate::env::Environment;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

/// Resolve a command name to an executable.
///
/// Behavior:
/// - Absolute path: returned if it names an executable file.
/// - A name containing a separator (`./tool`, `bin/tool`): taken relative to
///   the interpreter's working directory, returned if executable.
/// - Bare name: the directories of the `PATH` variable are scanned in listed
///   order and the first executable candidate wins. The scan is repeated on
///   every call; nothing is cached.
/// - Unset `PATH`, empty name, or no executable candidate: `None`.
pub fn find_command_path(env: &Environment, name: &str) -> Option<PathBuf> {
    if name.is_empty() {
        return None;
    }

    let path = Path::new(name);
    if path.is_absolute() {
        return is_executable(path).then(|| path.to_path_buf());
    }
    if name.contains('/') {
        let candidate = env.current_dir().join(path);
        return is_executable(&candidate).then_some(candidate);
    }

    let search_paths = env.get_var("PATH")?;
    std::env::split_paths(search_paths)
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Capability interface for running a resolved executable to completion.
///
/// The interpreter holds exactly one spawner and never has more than one
/// child in flight: `run` blocks until the child terminates, so external
/// side effects are fully serialized with respect to later interpreter work.
pub trait Spawner {
    fn run(&mut self, program: &Path, args: &[String], env: &Environment) -> Result<ExitCode>;
}

/// [`Spawner`] backed by real OS processes with inherited stdio.
pub struct SystemSpawner;

impl Spawner for SystemSpawner {
    fn run(&mut self, program: &Path, args: &[String], env: &Environment) -> Result<ExitCode> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .env_clear()
            .envs(env.vars())
            .current_dir(env.current_dir())
            .spawn()
            .with_context(|| format!("{}: cannot start process", program.display()))?;
        let status = child
            .wait()
            .with_context(|| format!("{}: lost track of process", program.display()))?;
        Ok(exit_code(status))
    }
}

fn exit_code(status: ExitStatus) -> ExitCode {
    match status.code() {
        Some(code) => code,
        None => terminated_by_signal(status),
    }
}

#[cfg(unix)]
fn terminated_by_signal(status: ExitStatus) -> ExitCode {
    use std::os::unix::process::ExitStatusExt;
    match status.signal() {
        Some(signal) => 128 + signal,
        None => -1,
    }
}

#[cfg(not(unix))]
fn terminated_by_signal(_status: ExitStatus) -> ExitCode {
    -1
}

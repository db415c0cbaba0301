use crate::env::Environment;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Expand a leading `~` to the home directory.
///
/// Only a bare `~` or a `~/` prefix is rewritten; anything else, `~user`
/// forms included, comes back verbatim. The home directory is taken from the
/// `HOME` variable, falling back to the account record of the invoking user.
pub(crate) fn expand_tilde(env: &Environment, raw: &str) -> Result<PathBuf> {
    if raw == "~" {
        return home_dir(env);
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        return Ok(home_dir(env)?.join(rest));
    }
    Ok(PathBuf::from(raw))
}

fn home_dir(env: &Environment) -> Result<PathBuf> {
    env.get_var("HOME")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .context("cannot determine the home directory")
}

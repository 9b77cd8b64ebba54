//! Running-command overlay.
//!
//! The shell exports the command line it is about to run; when enabled, the
//! overlay appends it to the short title. Shell bookkeeping commands and
//! anything that would recurse into the title machinery are filtered out.

use std::collections::HashSet;
use std::env;

use once_cell::sync::Lazy;

/// Env carrying the command line the shell is currently executing.
pub const CURRENT_COMMAND_ENV: &str = "BASH_COMMAND";

/// Env carrying the last command recorded in shell history; preferred over
/// the raw command line when present, since it reflects what was actually
/// typed.
pub const HISTORY_COMMAND_ENV: &str = "HIST_LAST_COMMAND";

/// Start of the OSC escape that sets a terminal title. A command line that
/// already contains one is almost always $PROMPT_COMMAND itself, and nested
/// escapes confuse the terminal.
const TITLE_ESCAPE_MARKER: &str = "\x1b]0";

/// Shell built-ins that run constantly and carry no information.
static SHELL_NOISE: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [".", "source", "test", "[", "cd", "export", "eval", "printf"]
        .into_iter()
        .collect()
});

/// Snapshot of the command-related environment.
#[derive(Debug, Clone, Default)]
pub struct CommandEnv {
    pub current: Option<String>,
    pub history: Option<String>,
}

impl CommandEnv {
    pub fn from_env() -> Self {
        Self {
            current: env::var(CURRENT_COMMAND_ENV).ok(),
            history: env::var(HISTORY_COMMAND_ENV).ok(),
        }
    }

    /// Snapshot from explicit values (tests, embedding).
    pub fn with_parts(current: Option<&str>, history: Option<&str>) -> Self {
        Self {
            current: current.map(str::to_owned),
            history: history.map(str::to_owned),
        }
    }
}

/// Returns the command to overlay onto a short title, if any.
///
/// `extra_ignored` extends the built-in first-token noise set. The substring
/// guards are fixed and case-sensitive; shell integrations depend on the
/// exact matches.
pub fn running_command(commands: &CommandEnv, extra_ignored: &[String]) -> Option<String> {
    let cmd = commands.current.as_deref().filter(|cmd| !cmd.is_empty())?;

    let first = cmd.split(' ').next().unwrap_or_default();
    if SHELL_NOISE.contains(first) {
        return None;
    }
    if extra_ignored.iter().any(|ignored| ignored == first) {
        return None;
    }

    if cmd.contains(TITLE_ESCAPE_MARKER)
        || cmd.contains("direnv")
        || cmd.starts_with('[')
        || cmd.contains("dirtitle")
        || cmd.contains("dir-title")
    {
        return None;
    }

    if let Some(history) = commands.history.as_deref().filter(|hist| !hist.is_empty()) {
        return Some(history.to_string());
    }
    Some(cmd.to_string())
}

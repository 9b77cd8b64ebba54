//! Title derivation: the ancestor walk, stop rules, and breadcrumb assembly.
//!
//! A short title covers exactly one path level. A long title walks toward the
//! root, collecting short titles innermost-first until a level says stop or
//! the depth cap is reached, then joins them with the separator.

use std::io;

use crate::command::{running_command, CommandEnv};
use crate::error::{Result, TitleError};
use crate::identity::UserIdentity;
use crate::overrides::OverrideStore;
use crate::ownership::{DirOwner, FsOwnerProbe, OwnerProbe};
use crate::settings::Settings;

/// Title shown for levels that must not leak a name (filesystem root,
/// dot-directories). A single space keeps the breadcrumb slot non-empty.
pub const PLACEHOLDER_TITLE: &str = " ";

/// Ancestor levels examined beyond the innermost segment.
const MAX_ANCESTOR_LEVELS: usize = 3;

/// Outcome of resolving one path level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Use this title and keep walking toward the root.
    Continue(String),
    /// Use this title and stop; nothing above this level may appear.
    Stop(String),
}

impl Resolution {
    pub fn title(&self) -> &str {
        match self {
            Resolution::Continue(title) | Resolution::Stop(title) => title,
        }
    }

    pub fn into_title(self) -> String {
        match self {
            Resolution::Continue(title) | Resolution::Stop(title) => title,
        }
    }

    pub fn stops(&self) -> bool {
        matches!(self, Resolution::Stop(_))
    }
}

/// Output selection for [`TitleResolver::title`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleOptions {
    /// Emit the breadcrumb form instead of a single level.
    pub long: bool,
    /// Overlay the currently running shell command onto the short title.
    pub show_command: bool,
}

/// Derives titles for directory paths.
///
/// Holds the process-lifetime state (identity, override store, settings),
/// resolved once at startup and never mutated. Tests inject fixed identities,
/// temp config directories, and fake owner probes.
pub struct TitleResolver {
    identity: UserIdentity,
    overrides: OverrideStore,
    settings: Settings,
    probe: Box<dyn OwnerProbe>,
}

impl TitleResolver {
    pub fn new(identity: UserIdentity, overrides: OverrideStore, settings: Settings) -> Self {
        Self::with_probe(identity, overrides, settings, Box::new(FsOwnerProbe))
    }

    /// Resolver with an injected owner probe (tests, exotic platforms).
    pub fn with_probe(
        identity: UserIdentity,
        overrides: OverrideStore,
        settings: Settings,
        probe: Box<dyn OwnerProbe>,
    ) -> Self {
        Self {
            identity,
            overrides,
            settings,
            probe,
        }
    }

    /// Computes the title for exactly one path level.
    ///
    /// Precedence: home anchor, then override, then the placeholder rule for
    /// the root and dot-directories, then stat fallbacks, then ownership,
    /// then the bare segment. Reordering these changes breadcrumb output for
    /// ambiguous paths.
    pub fn short_title(&self, dpath: &str) -> Result<Resolution> {
        if dpath == self.identity.home_dir {
            return Ok(Resolution::Stop("~".to_string()));
        }

        if let Some(title) = self.overrides.lookup(dpath)? {
            return Ok(Resolution::Stop(title));
        }

        let Some(slash) = dpath.rfind('/') else {
            return Err(TitleError::MalformedPath(dpath.to_string()));
        };
        let dname = &dpath[slash + 1..];
        if dname.is_empty() || dname.starts_with('.') {
            return Ok(Resolution::Stop(PLACEHOLDER_TITLE.to_string()));
        }

        match self.probe.owner(dpath) {
            Ok(DirOwner::Uid(owner)) => {
                if !self.identity.is_privileged() && owner != self.identity.uid {
                    // Past an ownership boundary, show the path rather than
                    // leaking segment names of directories we do not own.
                    return Ok(Resolution::Stop(dpath.to_string()));
                }
            }
            Ok(DirOwner::Unsupported) => {}
            Err(err)
                if matches!(
                    err.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::PermissionDenied
                ) =>
            {
                // Show something rather than fail.
                return Ok(Resolution::Stop(dpath.to_string()));
            }
            Err(err) => {
                return Err(TitleError::Inspect {
                    path: dpath.to_string(),
                    source: err,
                });
            }
        }

        Ok(Resolution::Continue(dname.to_string()))
    }

    /// Computes the breadcrumb title for a path and its nearest ancestors.
    pub fn long_title(&self, dpath: &str) -> Result<String> {
        if dpath == self.identity.home_dir {
            return Ok("~".to_string());
        }

        // An override for the exact path is authoritative and bypasses
        // breadcrumb assembly entirely.
        if let Some(title) = self.overrides.lookup(dpath)? {
            return Ok(title);
        }

        let parts: Vec<&str> = dpath.split('/').collect();
        if parts.is_empty() {
            return Err(TitleError::MalformedPath(dpath.to_string()));
        }

        let stop_index = parts.len().saturating_sub(MAX_ANCESTOR_LEVELS).max(1);
        let mut titles = Vec::new();
        for end in (stop_index + 1..=parts.len()).rev() {
            let partial = parts[..end].join("/");
            let resolution = self.short_title(&partial)?;
            let stops = resolution.stops();
            titles.push(resolution.into_title());
            if stops {
                break;
            }
        }

        Ok(titles.join(&self.settings.separator))
    }

    /// Top-level orchestration: command overlay, then long or short form.
    ///
    /// A non-empty overlay is combined as `<shortTitle>: <command>` and wins
    /// over the long form.
    pub fn title(
        &self,
        dpath: &str,
        options: TitleOptions,
        commands: &CommandEnv,
    ) -> Result<String> {
        if options.show_command {
            if let Some(command) = running_command(commands, &self.settings.ignored_commands) {
                let short = self.short_title(dpath)?;
                return Ok(format!("{}: {}", short.title(), command));
            }
        }

        if options.long {
            return self.long_title(dpath);
        }
        Ok(self.short_title(dpath)?.into_title())
    }
}

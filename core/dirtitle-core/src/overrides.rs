//! Per-directory title override files.
//!
//! Overrides live under a configuration directory resolved once per process.
//! The override for an absolute directory path `P` is the file
//! `<configDir>P.title`, so override files nest in a mirror of the real tree.
//! The existence of an override is itself a stop signal for the ancestor
//! walk, independent of its content.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, TitleError};
use crate::identity::UserIdentity;

/// Directory name used under both the tmpfs root and the home directory.
pub const CONFIG_DIR_NAME: &str = ".dirtitle";

/// Env override for the configuration directory.
pub const CONFIG_DIR_ENV: &str = "DIRTITLE_CONFIG_DIR";

/// Title substituted for an override file with no content.
pub const EMPTY_OVERRIDE_TITLE: &str = "Terminal";

/// Tmpfs root probed for a per-user configuration directory.
const SHM_ROOT: &str = "/run/shm";

/// Resolves and reads override files for one configuration directory.
#[derive(Debug, Clone)]
pub struct OverrideStore {
    config_dir: PathBuf,
}

impl OverrideStore {
    /// Resolves the configuration directory for this process.
    ///
    /// Preference order: `DIRTITLE_CONFIG_DIR`, then
    /// `/run/shm/<username>/.dirtitle` when it already exists as a directory,
    /// then `<home>/.dirtitle`.
    pub fn resolve(identity: &UserIdentity) -> Self {
        if let Some(dir) = env::var_os(CONFIG_DIR_ENV) {
            if !dir.is_empty() {
                return Self {
                    config_dir: PathBuf::from(dir),
                };
            }
        }

        let shm_dir = Path::new(SHM_ROOT)
            .join(&identity.username)
            .join(CONFIG_DIR_NAME);
        if let Ok(metadata) = fs_err::metadata(&shm_dir) {
            if metadata.is_dir() {
                tracing::debug!(dir = %shm_dir.display(), "using tmpfs config dir");
                return Self {
                    config_dir: shm_dir,
                };
            }
        }

        Self {
            config_dir: Path::new(&identity.home_dir).join(CONFIG_DIR_NAME),
        }
    }

    /// Store rooted at an explicit directory (tests, embedding).
    pub fn with_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Looks up the override title for an absolute directory path.
    ///
    /// `Ok(None)` means no override exists, which is not an error. Content is
    /// whitespace-trimmed; an empty result maps to [`EMPTY_OVERRIDE_TITLE`].
    /// Read failures other than not-found abort the whole computation.
    pub fn lookup(&self, dpath: &str) -> Result<Option<String>> {
        // String concatenation, not Path::join: dpath is absolute, and join
        // would discard the configuration directory entirely.
        let file = format!("{}{}.title", self.config_dir.display(), dpath);
        match fs_err::read(&file) {
            Ok(bytes) => {
                let title = String::from_utf8_lossy(&bytes).trim().to_string();
                if title.is_empty() {
                    Ok(Some(EMPTY_OVERRIDE_TITLE.to_string()))
                } else {
                    Ok(Some(title))
                }
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(TitleError::OverrideRead {
                path: file,
                source: err,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_override(config_dir: &Path, dpath: &str, content: &str) {
        let file = PathBuf::from(format!("{}{}.title", config_dir.display(), dpath));
        fs::create_dir_all(file.parent().expect("parent")).expect("create override dirs");
        fs::write(&file, content).expect("write override");
    }

    #[test]
    fn absent_override_is_none() {
        let temp = tempdir().expect("temp dir");
        let store = OverrideStore::with_dir(temp.path());
        assert_eq!(store.lookup("/srv/app").expect("lookup"), None);
    }

    #[test]
    fn override_content_is_trimmed() {
        let temp = tempdir().expect("temp dir");
        write_override(temp.path(), "/srv/app", "  Websites \n");
        let store = OverrideStore::with_dir(temp.path());
        assert_eq!(
            store.lookup("/srv/app").expect("lookup").as_deref(),
            Some("Websites")
        );
    }

    #[test]
    fn whitespace_only_override_falls_back_to_terminal() {
        let temp = tempdir().expect("temp dir");
        write_override(temp.path(), "/srv/app", " \n\t ");
        let store = OverrideStore::with_dir(temp.path());
        assert_eq!(
            store.lookup("/srv/app").expect("lookup").as_deref(),
            Some(EMPTY_OVERRIDE_TITLE)
        );
    }

    #[test]
    fn unreadable_override_is_fatal() {
        let temp = tempdir().expect("temp dir");
        // A file where a directory component should be makes the read fail
        // with something other than not-found.
        write_override(temp.path(), "/srv/app", "Websites");
        let store = OverrideStore::with_dir(temp.path());
        let err = store
            .lookup("/srv/app.title/nested")
            .expect_err("expected read failure");
        assert!(matches!(err, TitleError::OverrideRead { .. }));
    }

    #[test]
    fn resolve_falls_back_to_home_config_dir() {
        if env::var_os(CONFIG_DIR_ENV).is_some() {
            return;
        }
        let identity =
            crate::identity::UserIdentity::with_parts(1000, "no-such-user-52314", "/home/alice");
        let store = OverrideStore::resolve(&identity);
        assert_eq!(
            store.config_dir(),
            Path::new("/home/alice").join(CONFIG_DIR_NAME)
        );
    }
}

//! Invoking-user identity.
//!
//! Resolved once in `main` and passed into the resolver; failure to resolve
//! is fatal before any title logic runs.

use std::env;

use crate::error::{Result, TitleError};

/// Identity of the invoking user.
#[derive(Debug, Clone)]
pub struct UserIdentity {
    pub uid: u32,
    pub username: String,
    /// Home directory as an absolute path string, no trailing slash.
    pub home_dir: String,
}

impl UserIdentity {
    /// Resolves the identity of the user running this process.
    pub fn current() -> Result<Self> {
        let uid = current_uid();
        let home_dir = dirs::home_dir()
            .ok_or(TitleError::HomeDirUnavailable)?
            .to_string_lossy()
            .into_owned();
        let username = lookup_username(uid)
            .or_else(|| env_username("USER"))
            .or_else(|| env_username("LOGNAME"))
            .ok_or(TitleError::UsernameUnavailable(uid))?;
        Ok(Self {
            uid,
            username,
            home_dir,
        })
    }

    /// Fixed identity for tests and embedding.
    pub fn with_parts(uid: u32, username: impl Into<String>, home_dir: impl Into<String>) -> Self {
        Self {
            uid,
            username: username.into(),
            home_dir: home_dir.into(),
        }
    }

    /// uid 0 bypasses the ownership stop rule.
    pub fn is_privileged(&self) -> bool {
        self.uid == 0
    }
}

fn env_username(key: &str) -> Option<String> {
    env::var(key).ok().filter(|name| !name.is_empty())
}

#[cfg(unix)]
fn current_uid() -> u32 {
    // SAFETY: getuid never fails and touches no memory.
    unsafe { libc::getuid() as u32 }
}

#[cfg(not(unix))]
fn current_uid() -> u32 {
    // No uid concept; ownership checks are skipped via DirOwner::Unsupported,
    // so the value is never compared.
    0
}

#[cfg(unix)]
fn lookup_username(uid: u32) -> Option<String> {
    use std::ffi::CStr;

    // SAFETY: getpwuid returns null or a pointer into static storage. The
    // process is single-threaded when identity is resolved at startup, so the
    // storage cannot be overwritten while we read it.
    let pw = unsafe { libc::getpwuid(uid as libc::uid_t) };
    if pw.is_null() {
        return None;
    }
    let name = unsafe { CStr::from_ptr((*pw).pw_name) };
    name.to_str()
        .ok()
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
}

#[cfg(not(unix))]
fn lookup_username(_uid: u32) -> Option<String> {
    None
}

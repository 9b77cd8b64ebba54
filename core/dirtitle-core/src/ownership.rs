//! Directory-ownership probing.
//!
//! Ownership is platform metadata, so the resolver consults it through a
//! capability trait and the walk logic stays platform-neutral.

use std::io;

/// Owner of a directory, as far as the platform can tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirOwner {
    /// Unix owner uid.
    Uid(u32),
    /// The platform has no ownership concept; the check is skipped.
    Unsupported,
}

/// Capability for answering "which uid owns this directory".
pub trait OwnerProbe {
    /// Stats `path` and reports its owner.
    ///
    /// Not-found and permission-denied errors pass through untouched; the
    /// resolver downgrades them to a fallback title rather than failing.
    fn owner(&self, path: &str) -> io::Result<DirOwner>;
}

/// Probe backed by the real filesystem.
#[derive(Debug, Default)]
pub struct FsOwnerProbe;

impl OwnerProbe for FsOwnerProbe {
    fn owner(&self, path: &str) -> io::Result<DirOwner> {
        let metadata = fs_err::metadata(path)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::MetadataExt;
            Ok(DirOwner::Uid(metadata.uid()))
        }
        #[cfg(not(unix))]
        {
            let _ = metadata;
            Ok(DirOwner::Unsupported)
        }
    }
}

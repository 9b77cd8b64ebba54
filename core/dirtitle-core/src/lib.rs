//! # dirtitle-core
//!
//! Core library for dirtitle: derives a human-readable title for a directory
//! path, for display in a terminal window or tab title. Supports a short form
//! (innermost meaningful segment), a long breadcrumb form, per-directory
//! override files, ownership-based truncation, and an optional overlay of the
//! currently running shell command.
//!
//! ## Design Principles
//!
//! - **Synchronous**: one invocation computes one title; no async runtime.
//! - **Write-once state**: user identity, configuration directory, and
//!   settings are resolved at startup and passed into the resolver, never
//!   mutated afterwards.
//! - **Graceful degradation**: unreadable or foreign-owned directories yield
//!   a visible fallback title, not an error.
//! - **Platform-neutral walk**: ownership metadata is consulted through the
//!   [`OwnerProbe`] capability; platforms without the concept skip the check.

pub mod command;
pub mod error;
pub mod identity;
pub mod overrides;
pub mod ownership;
pub mod resolve;
pub mod settings;

pub use command::{running_command, CommandEnv};
pub use error::{Result, TitleError};
pub use identity::UserIdentity;
pub use overrides::{OverrideStore, EMPTY_OVERRIDE_TITLE};
pub use ownership::{DirOwner, FsOwnerProbe, OwnerProbe};
pub use resolve::{Resolution, TitleOptions, TitleResolver, PLACEHOLDER_TITLE};
pub use settings::Settings;

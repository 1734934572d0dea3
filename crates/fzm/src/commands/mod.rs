//! Command handlers.
//!
//! `help` and `version` are the built-ins every fzm binary carries; the
//! toolchain module registers the version-management operations behind the
//! same handler interface.

pub mod help;
pub mod toolchain;
pub mod version;

//! Interface stubs for the version-management operations.
//!
//! The machinery behind these commands (network fetch, archive extraction,
//! symlink switching) lives outside this core and is not linked into this
//! build. The stubs keep every operation present in the registry, and
//! therefore in the help table, and fail with a clear message when invoked.

use anyhow::{bail, Result};

use crate::app::{AppBuilder, CommandContext};

/// Name and help line for every toolchain operation.
pub const COMMANDS: &[(&str, &str)] = &[
    ("current", "Print the active toolchain version"),
    ("install", "Download and install a toolchain version"),
    ("list", "List installed toolchain versions"),
    ("list-remote", "List toolchain versions available to install"),
    ("uninstall", "Remove an installed toolchain version"),
    ("use", "Switch the active toolchain version"),
];

/// Registers every toolchain operation on the builder.
pub fn register(mut builder: AppBuilder) -> AppBuilder {
    for (name, about) in COMMANDS.iter().copied() {
        builder = builder.command(name, about, unavailable(name));
    }
    builder
}

fn unavailable(name: &'static str) -> impl FnMut(&mut CommandContext<'_>) -> Result<()> {
    move |_ctx: &mut CommandContext<'_>| {
        bail!("the '{}' command is not available in this build", name)
    }
}

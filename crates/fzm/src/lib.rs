//! fzm — command dispatch and console rendering for a toolchain version
//! manager.
//!
//! This crate is the composition root: it owns the sub-command registry
//! (from `fzm-dispatch`), the two colour-aware output streams (from
//! `fzm-render`), and the identity metadata rendered by the built-in
//! `help` and `version` commands.
//!
//! The flow is: collect the argument vector, resolve the first positional
//! token against the registry (falling back to `help` for an absent or
//! unknown command), invoke the handler with a [`CommandContext`], then
//! flush both streams and hand the exit status back to `main`.
//!
//! The version-management operations themselves (`install`, `use`, ...)
//! sit behind the same handler interface as the built-ins; this build
//! registers them as interface stubs (see [`commands::toolchain`]).

pub mod app;
pub mod commands;

pub use app::{no_color_requested, App, AppBuilder, CommandContext, Handler, Identity};
pub use fzm_render::{ColorChoice, ColorStream};

/// The production fzm configuration: identity metadata plus the toolchain
/// command set. `help` and `version` are registered by
/// [`AppBuilder::build`] itself.
pub fn default_app() -> AppBuilder {
    let builder = App::builder()
        .name("fzm")
        .version(env!("CARGO_PKG_VERSION"))
        .description("Fast toolchain version manager")
        .author("The fzm authors")
        .copyright("Copyright (c) 2026 The fzm authors. MIT license.");
    commands::toolchain::register(builder)
}

//! Error types for command registration.

use thiserror::Error;

/// Errors raised by [`CommandRegistry::register`](crate::CommandRegistry::register).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A command with this name is already registered.
    ///
    /// Names must be unique: resolution is by exact name match and help
    /// output lists each command once, so a second registration is a
    /// wiring bug, not something to silently tolerate.
    #[error("duplicate command name: {0}")]
    DuplicateCommand(String),
}

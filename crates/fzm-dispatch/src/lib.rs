//! Sub-command registry and argument resolution for fzm.
//!
//! This crate owns the routing side of the CLI: an ordered collection of
//! command descriptors kept sorted by name, and the resolution step that
//! turns a process argument vector into an index into that collection.
//!
//! The handler type is generic so this crate stays decoupled from the
//! application's execution context; the composition root instantiates
//! [`CommandRegistry`] with its own boxed handler type.
//!
//! # Example
//!
//! ```rust
//! use fzm_dispatch::{Command, CommandRegistry};
//!
//! let mut registry = CommandRegistry::new();
//! registry.register(Command::new("list", "List installed versions", ())).unwrap();
//! registry.register(Command::new("help", "Show help", ())).unwrap();
//!
//! // Kept sorted after every insertion.
//! assert_eq!(registry.names().collect::<Vec<_>>(), ["help", "list"]);
//!
//! // argv resolution: first positional token, "help" when absent.
//! let args = vec!["fzm".to_string(), "list".to_string()];
//! let index = registry.resolve(&args).unwrap();
//! assert_eq!(registry.get(index).name(), "list");
//! ```

mod command;
mod error;
mod resolve;

pub use command::{Command, CommandHelp, CommandRegistry};
pub use error::RegistryError;
pub use resolve::{requested_command, DEFAULT_COMMAND};

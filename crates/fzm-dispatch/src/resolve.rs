//! Argument-vector resolution.
//!
//! Resolution consumes only the first positional token: the zeroth argument
//! is the program path, the next one (if any) names the command. Flags and
//! everything after the command name belong to the invoked handler, not to
//! dispatch.

use crate::command::CommandRegistry;

/// Command assumed when the argument vector names none.
///
/// Also the fallback the composition root invokes when resolution fails:
/// an unknown command shows the help screen, it is not an error.
pub const DEFAULT_COMMAND: &str = "help";

/// Extracts the requested command name from a process argument vector.
///
/// `args[0]` is discarded as the program path; an absent second argument
/// yields [`DEFAULT_COMMAND`].
pub fn requested_command(args: &[String]) -> &str {
    args.get(1).map(String::as_str).unwrap_or(DEFAULT_COMMAND)
}

impl<H> CommandRegistry<H> {
    /// Resolves an argument vector to a command index.
    ///
    /// Returns `None` when the requested name matches nothing; the caller
    /// falls back to the `help` handler (defined behavior, not an error
    /// surfaced to the user).
    pub fn resolve(&self, args: &[String]) -> Option<usize> {
        self.find(requested_command(args))
    }
}

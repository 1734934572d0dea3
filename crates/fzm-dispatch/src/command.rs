//! Command descriptors and the sorted registry.

use serde::Serialize;

use crate::error::RegistryError;

/// Minimum run of spaces between the longest command name and its
/// description in help output.
const HELP_GUTTER: usize = 3;

/// A named sub-command bound to a handler.
///
/// The handler type is generic; the registry never inspects it, it only
/// stores and hands it back at dispatch time.
#[derive(Debug, Clone)]
pub struct Command<H> {
    name: String,
    about: String,
    handler: H,
}

impl<H> Command<H> {
    /// Creates a command descriptor.
    pub fn new(name: impl Into<String>, about: impl Into<String>, handler: H) -> Self {
        Self {
            name: name.into(),
            about: about.into(),
            handler,
        }
    }

    /// The name users type to select this command.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// One-line description shown in help output.
    pub fn about(&self) -> &str {
        &self.about
    }

    /// Borrows the handler for invocation.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }
}

/// Help-rendering projection of a [`Command`].
///
/// `padding` carries the run of spaces that aligns every description into
/// one column: width is `(longest name + gutter) - this name`. Serializable
/// so a registry snapshot feeds the template renderer directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandHelp {
    pub name: String,
    pub padding: String,
    pub about: String,
}

/// An ordered collection of commands, kept sorted ascending by name.
///
/// Registry sizes are single-digit to low tens, so linear scans and a full
/// re-sort per insertion are fine; what matters is that help output and
/// resolution are deterministic.
#[derive(Debug, Default)]
pub struct CommandRegistry<H> {
    commands: Vec<Command<H>>,
}

impl<H> CommandRegistry<H> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Registers a command, keeping the collection sorted by name.
    ///
    /// Rejects a name that is already present with
    /// [`RegistryError::DuplicateCommand`]. Re-sorting shifts positions, so
    /// any index obtained before this call is invalidated.
    pub fn register(&mut self, command: Command<H>) -> Result<(), RegistryError> {
        if self.find(command.name()).is_some() {
            return Err(RegistryError::DuplicateCommand(command.name.clone()));
        }
        self.commands.push(command);
        self.commands.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(())
    }

    /// Linear scan for an exact byte-wise name match.
    pub fn find(&self, name: &str) -> Option<usize> {
        self.commands.iter().position(|c| c.name == name)
    }

    /// Returns the command at `index`.
    ///
    /// Indices come from [`find`](Self::find) or
    /// [`resolve`](Self::resolve) against the current snapshot; anything
    /// else is a caller bug and panics.
    pub fn get(&self, index: usize) -> &Command<H> {
        &self.commands[index]
    }

    /// Mutable variant of [`get`](Self::get), used to invoke the handler.
    pub fn get_mut(&mut self, index: usize) -> &mut Command<H> {
        &mut self.commands[index]
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true when nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Command names in registry (sorted) order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|c| c.name.as_str())
    }

    /// Builds the help projection for the current snapshot.
    ///
    /// Padding aligns every description into one column:
    /// `(max name length + 3) - name length` spaces per entry.
    pub fn help_entries(&self) -> Vec<CommandHelp> {
        let column = self
            .commands
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(0)
            + HELP_GUTTER;

        self.commands
            .iter()
            .map(|c| CommandHelp {
                name: c.name.clone(),
                padding: " ".repeat(column - c.name.len()),
                about: c.about.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn registry_of(names: &[&str]) -> CommandRegistry<()> {
        let mut registry = CommandRegistry::new();
        for name in names {
            registry.register(Command::new(*name, "", ())).unwrap();
        }
        registry
    }

    #[test]
    fn test_register_keeps_names_sorted() {
        let registry = registry_of(&["use", "install", "current", "list-remote", "list"]);
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, ["current", "install", "list", "list-remote", "use"]);
    }

    #[test]
    fn test_sort_is_bytewise() {
        // '-' (0x2d) sorts before any lowercase letter, so "list-remote"
        // comes before "listx" byte-wise.
        let registry = registry_of(&["listx", "list-remote"]);
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, ["list-remote", "listx"]);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = registry_of(&["install"]);
        let err = registry
            .register(Command::new("install", "again", ()))
            .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateCommand("install".to_string()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_find_exact_match_only() {
        let registry = registry_of(&["list", "list-remote"]);
        assert_eq!(registry.find("list"), Some(0));
        assert_eq!(registry.find("list-remote"), Some(1));
        assert_eq!(registry.find("lis"), None);
        assert_eq!(registry.find("List"), None);
    }

    #[test]
    fn test_indices_shift_after_register() {
        let mut registry = registry_of(&["list"]);
        let before = registry.find("list").unwrap();
        registry.register(Command::new("help", "", ())).unwrap();
        // "help" sorts before "list", pushing it to index 1.
        assert_eq!(before, 0);
        assert_eq!(registry.find("list"), Some(1));
    }

    #[test]
    fn test_get_returns_registered_command() {
        let registry = registry_of(&["help", "version"]);
        let index = registry.find("version").unwrap();
        assert_eq!(registry.get(index).name(), "version");
    }

    #[test]
    fn test_help_entries_padding_alignment() {
        // max name length 11 ("list-remote") + 3 = column 14.
        let registry = registry_of(&["a", "list-remote"]);
        let entries = registry.help_entries();
        assert_eq!(entries[0].name, "a");
        assert_eq!(entries[0].padding.len(), 13);
        assert_eq!(entries[1].name, "list-remote");
        assert_eq!(entries[1].padding.len(), 3);
    }

    #[test]
    fn test_help_entries_align_into_one_column() {
        let registry = registry_of(&["use", "install", "current"]);
        let widths: Vec<usize> = registry
            .help_entries()
            .iter()
            .map(|e| e.name.len() + e.padding.len())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_help_entries_serialize_for_templates() {
        let registry = registry_of(&["help"]);
        let value = serde_json::to_value(registry.help_entries()).unwrap();
        assert_eq!(value[0]["name"], "help");
        assert_eq!(value[0]["padding"], "   ");
    }

    #[test]
    fn test_empty_registry() {
        let registry: CommandRegistry<()> = CommandRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.help_entries().is_empty());
        assert_eq!(registry.find("anything"), None);
    }

    proptest! {
        /// After every successful registration the name list is
        /// non-decreasing in byte-wise order.
        #[test]
        fn prop_sorted_after_every_register(names in proptest::collection::vec("[a-z-]{1,12}", 1..24)) {
            let mut registry = CommandRegistry::new();
            for name in names {
                // Duplicates are rejected; that must not disturb the order.
                let _ = registry.register(Command::new(name, "", ()));
                let listed: Vec<_> = registry.names().map(str::to_owned).collect();
                prop_assert!(listed.windows(2).all(|w| w[0] <= w[1]));
            }
        }

        /// find() agrees with a naive scan over the sorted list.
        #[test]
        fn prop_find_matches_position(names in proptest::collection::vec("[a-z]{1,8}", 1..12), probe in "[a-z]{1,8}") {
            let mut registry = CommandRegistry::new();
            for name in &names {
                let _ = registry.register(Command::new(name.clone(), "", ()));
            }
            let expected = registry.names().position(|n| n == probe);
            prop_assert_eq!(registry.find(&probe), expected);
        }
    }
}

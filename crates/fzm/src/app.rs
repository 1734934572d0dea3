//! The application composition root.
//!
//! [`App`] holds the one registry, the two output streams, and the identity
//! metadata for the whole process. It is only obtainable through
//! [`AppBuilder::build`], which registers the built-in commands and
//! constructs the streams before handing anything back, so a half-initialized
//! application is unrepresentable.
//!
//! # Exit discipline
//!
//! Handlers render and return a `Result`; they never terminate the process.
//! [`App::run`] maps the result to an exit status, flushes stdout then
//! stderr exactly once, and returns the status for `main` to pass to
//! `process::exit`. A broken pipe anywhere in the handler's error chain is
//! silent success: the consumer closing its end of the stream early is a
//! normal way for terminal output to end.

use std::env;
use std::io::{self, Write};

use anyhow::{Context as _, Result};
use serde::Serialize;
use serde_json::Value;

use fzm_dispatch::{Command, CommandHelp, CommandRegistry, RegistryError, DEFAULT_COMMAND};
use fzm_render::{ansi, ColorChoice, ColorStream};

use crate::commands;

/// Identity metadata embedded in the binary, rendered verbatim by the
/// `help` and `version` commands. Write-once at bootstrap.
#[derive(Debug, Clone, Serialize)]
pub struct Identity {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
    pub copyright: String,
    pub arch: String,
    pub os: String,
}

/// Everything a handler gets to see.
///
/// `commands` is the help projection of the registry snapshot taken at
/// dispatch time; `args` is the full argument vector, of which dispatch
/// consumed only the first positional token.
pub struct CommandContext<'a> {
    pub identity: &'a Identity,
    pub commands: Vec<CommandHelp>,
    pub args: &'a [String],
    pub out: &'a mut ColorStream,
    pub err: &'a mut ColorStream,
}

impl CommandContext<'_> {
    /// Template bindings for this invocation: the identity fields, the ANSI
    /// palette keyed to the out stream's colour flag, and the command table
    /// under `commands`.
    pub fn bindings(&self) -> Result<Value> {
        let mut map = serde_json::Map::new();
        if let Value::Object(identity) = serde_json::to_value(self.identity)? {
            map.extend(identity);
        }
        if let Value::Object(palette) = ansi::palette(self.out.colors_enabled()) {
            map.extend(palette);
        }
        map.insert(
            "commands".to_string(),
            serde_json::to_value(&self.commands)?,
        );
        Ok(Value::Object(map))
    }
}

/// Boxed handler stored in the registry.
///
/// Built-ins and injected commands go through the same type, so dispatch
/// never special-cases anything.
pub type Handler = Box<dyn FnMut(&mut CommandContext<'_>) -> Result<()>>;

/// Returns true when a non-empty `NO_COLOR` is present in the environment.
///
/// Read once at stream construction, never re-evaluated per write.
pub fn no_color_requested() -> bool {
    env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// The assembled application. See the module docs for the run/exit
/// discipline.
pub struct App {
    identity: Identity,
    registry: CommandRegistry<Handler>,
    out: ColorStream,
    err: ColorStream,
}

impl App {
    /// Starts building an application.
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    /// Resolves and runs one command, then flushes both streams.
    ///
    /// Returns the process exit status: 0 for success (including the
    /// unknown-command help fallback and a broken output pipe), 1 when the
    /// handler failed.
    pub fn run(mut self, args: &[String]) -> u8 {
        let status = match self.dispatch(args) {
            Ok(()) => 0,
            Err(err) if is_broken_pipe(&err) => 0,
            Err(err) => {
                let _ = writeln!(self.err, "{}: {:#}", self.identity.name, err);
                1
            }
        };
        // stdout before stderr, declaration order.
        self.out.flush_quiet();
        self.err.flush_quiet();
        status
    }

    fn dispatch(&mut self, args: &[String]) -> Result<()> {
        let index = self
            .registry
            .resolve(args)
            .or_else(|| self.registry.find(DEFAULT_COMMAND))
            .context("no help command registered")?;
        let commands = self.registry.help_entries();
        let Self {
            identity,
            registry,
            out,
            err,
        } = self;
        let mut ctx = CommandContext {
            identity,
            commands,
            args,
            out,
            err,
        };
        (registry.get_mut(index).handler_mut())(&mut ctx)
    }
}

/// Walks an error chain looking for a broken-pipe I/O error.
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
    })
}

/// Builder for [`App`].
///
/// `build` registers the `help` and `version` built-ins, then the injected
/// commands, and only then constructs the streams; duplicate names fail the
/// build rather than producing an ambiguous registry.
pub struct AppBuilder {
    name: String,
    version: String,
    description: String,
    author: String,
    copyright: String,
    color_choice: ColorChoice,
    commands: Vec<Command<Handler>>,
    streams: Option<(ColorStream, ColorStream)>,
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AppBuilder {
    /// Creates a builder with empty identity, `Auto` colour, and no
    /// commands beyond the built-ins.
    pub fn new() -> Self {
        Self {
            name: String::new(),
            version: String::new(),
            description: String::new(),
            author: String::new(),
            copyright: String::new(),
            color_choice: ColorChoice::Auto,
            commands: Vec::new(),
            streams: None,
        }
    }

    /// Sets the binary name used in usage lines and error prefixes.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the version string, trimmed of surrounding whitespace (embedded
    /// version data often carries a trailing newline).
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into().trim().to_string();
        self
    }

    /// Sets the one-line description shown at the top of the help screen.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the author string for the version banner.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the copyright line closing the help screen.
    pub fn copyright(mut self, copyright: impl Into<String>) -> Self {
        self.copyright = copyright.into();
        self
    }

    /// Sets the colour activation policy for both streams.
    pub fn color_choice(mut self, choice: ColorChoice) -> Self {
        self.color_choice = choice;
        self
    }

    /// Registers a command through the same interface the built-ins use.
    pub fn command(
        mut self,
        name: impl Into<String>,
        about: impl Into<String>,
        handler: impl FnMut(&mut CommandContext<'_>) -> Result<()> + 'static,
    ) -> Self {
        self.commands
            .push(Command::new(name, about, Box::new(handler) as Handler));
        self
    }

    /// Replaces the default stdout/stderr streams, for tests that capture
    /// output.
    pub fn streams(mut self, out: ColorStream, err: ColorStream) -> Self {
        self.streams = Some((out, err));
        self
    }

    /// Assembles the application.
    ///
    /// Fails on a duplicate command name, including a caller-supplied
    /// command colliding with a built-in.
    pub fn build(self) -> Result<App, RegistryError> {
        let mut registry = CommandRegistry::new();
        registry.register(Command::new(
            "help",
            "Show help for fzm and its commands",
            Box::new(commands::help::run) as Handler,
        ))?;
        registry.register(Command::new(
            "version",
            "Print the fzm version banner",
            Box::new(commands::version::run) as Handler,
        ))?;
        for command in self.commands {
            registry.register(command)?;
        }

        let (out, err) = match self.streams {
            Some(pair) => pair,
            None => {
                let no_color = no_color_requested();
                (
                    ColorStream::stdout(self.color_choice, no_color),
                    ColorStream::stderr(self.color_choice, no_color),
                )
            }
        };

        Ok(App {
            identity: Identity {
                name: self.name,
                version: self.version,
                description: self.description,
                author: self.author,
                copyright: self.copyright,
                arch: env::consts::ARCH.to_string(),
                os: env::consts::OS.to_string(),
            },
            registry,
            out,
            err,
        })
    }
}

//! Colour-aware terminal output and logic-less template rendering for fzm.
//!
//! This crate owns the output side of the CLI: a buffered, colour-aware
//! stream bound to stdout or stderr, an ANSI escape table usable as template
//! data, and a small mustache-style template renderer.
//!
//! # Layers
//!
//! - [`ColorStream`]: buffered writer with a colour flag fixed at
//!   construction by an activation policy ([`ColorChoice`] × TTY × NO_COLOR).
//! - [`ansi`]: named escape sequences, plus [`ansi::palette`] which turns the
//!   table into template bindings (real codes or empty strings).
//! - [`Template`]: `{{path.to.value}}` interpolation and `{{#list}}...{{/list}}`
//!   iteration over `serde_json::Value` bindings, streamed into any
//!   `io::Write`.
//!
//! # Example
//!
//! ```rust
//! use fzm_render::Template;
//! use serde_json::json;
//!
//! let template = Template::parse("{{greeting}}, {{who}}!").unwrap();
//! let output = template.render(&json!({"greeting": "hello", "who": "world"}));
//! assert_eq!(output, "hello, world!");
//! ```
//!
//! Colour never changes what is rendered, only which escape sequences are
//! interpolated: handlers pick bindings from `ansi::palette(stream.colors_enabled())`
//! and the template stays identical either way.

pub mod ansi;
mod error;
mod stream;
mod template;

pub use error::RenderError;
pub use stream::{colors_active, ColorChoice, ColorStream};
pub use template::Template;

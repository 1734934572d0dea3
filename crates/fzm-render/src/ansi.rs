//! ANSI escape sequences for terminal styling.
//!
//! The table is deliberately exposed as plain string constants rather than a
//! stateful styling API: escape codes enter output as interpolated template
//! data, so the same template renders styled or plain depending on which
//! bindings it receives. Use [`palette`] to build those bindings from a
//! stream's colour flag.

use serde_json::Value;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const ITALIC: &str = "\x1b[3m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const STRIKE: &str = "\x1b[9m";

pub const BLACK: &str = "\x1b[30m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";
pub const WHITE: &str = "\x1b[37m";

pub const BRIGHT_BLACK: &str = "\x1b[90m";
pub const BRIGHT_RED: &str = "\x1b[91m";
pub const BRIGHT_GREEN: &str = "\x1b[92m";
pub const BRIGHT_YELLOW: &str = "\x1b[93m";
pub const BRIGHT_BLUE: &str = "\x1b[94m";
pub const BRIGHT_MAGENTA: &str = "\x1b[95m";
pub const BRIGHT_CYAN: &str = "\x1b[96m";
pub const BRIGHT_WHITE: &str = "\x1b[97m";

/// Every named sequence, keyed by the name templates use.
const TABLE: &[(&str, &str)] = &[
    ("reset", RESET),
    ("bold", BOLD),
    ("dim", DIM),
    ("italic", ITALIC),
    ("underline", UNDERLINE),
    ("strike", STRIKE),
    ("black", BLACK),
    ("red", RED),
    ("green", GREEN),
    ("yellow", YELLOW),
    ("blue", BLUE),
    ("magenta", MAGENTA),
    ("cyan", CYAN),
    ("white", WHITE),
    ("bright_black", BRIGHT_BLACK),
    ("bright_red", BRIGHT_RED),
    ("bright_green", BRIGHT_GREEN),
    ("bright_yellow", BRIGHT_YELLOW),
    ("bright_blue", BRIGHT_BLUE),
    ("bright_magenta", BRIGHT_MAGENTA),
    ("bright_cyan", BRIGHT_CYAN),
    ("bright_white", BRIGHT_WHITE),
];

/// Builds template bindings for the escape table.
///
/// When `enabled` is true every name maps to its escape sequence; otherwise
/// every name maps to the empty string, so templates degrade to plain text
/// without any change to the template source.
///
/// # Example
///
/// ```rust
/// use fzm_render::ansi;
///
/// let styled = ansi::palette(true);
/// assert_eq!(styled["bold"], "\x1b[1m");
///
/// let plain = ansi::palette(false);
/// assert_eq!(plain["bold"], "");
/// ```
pub fn palette(enabled: bool) -> Value {
    let mut map = serde_json::Map::with_capacity(TABLE.len());
    for (name, code) in TABLE {
        let value = if enabled { *code } else { "" };
        map.insert((*name).to_string(), Value::String(value.to_string()));
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_enabled_maps_codes() {
        let palette = palette(true);
        assert_eq!(palette["reset"], RESET);
        assert_eq!(palette["bright_cyan"], BRIGHT_CYAN);
    }

    #[test]
    fn test_palette_disabled_maps_empty() {
        let palette = palette(false);
        for (name, _) in TABLE {
            assert_eq!(palette[*name], "", "{} should be empty", name);
        }
    }

    #[test]
    fn test_palette_covers_whole_table() {
        let palette = palette(true);
        let map = palette.as_object().unwrap();
        assert_eq!(map.len(), TABLE.len());
    }

    #[test]
    fn test_codes_are_csi_sequences() {
        for (_, code) in TABLE {
            assert!(code.starts_with("\x1b["));
            assert!(code.ends_with('m'));
        }
    }
}

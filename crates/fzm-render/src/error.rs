//! Error type for template parsing and rendering.

use std::fmt;

/// Error type for rendering operations.
///
/// Template syntax errors are construction-time failures: templates are fixed
/// literals owned by the built-in command handlers, so a `TemplateError`
/// indicates a bug in the template, not bad runtime input.
#[derive(Debug)]
pub enum RenderError {
    /// Template syntax error (unterminated placeholder, unclosed section,
    /// mismatched close tag).
    TemplateError(String),

    /// I/O error while writing rendered output.
    Io(std::io::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::TemplateError(msg) => write!(f, "template error: {}", msg),
            RenderError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(err) => Some(err),
            RenderError::TemplateError(_) => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RenderError::TemplateError("unclosed section 'items'".to_string());
        assert!(err.to_string().contains("template error"));
        assert!(err.to_string().contains("items"));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: RenderError = io_err.into();
        assert!(matches!(err, RenderError::Io(_)));
    }
}

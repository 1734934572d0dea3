//! Buffered, colour-aware output streams.
//!
//! [`ColorStream`] wraps a destination (stdout, stderr, or anything `Write`)
//! in a buffer and carries a colour flag computed once at construction by
//! [`colors_active`]. Nothing here interprets escape codes: the flag only
//! tells callers which bindings to feed their templates.
//!
//! # Activation policy
//!
//! | choice   | is_tty | no_color | colours |
//! |----------|--------|----------|---------|
//! | `Always` | *      | *        | yes     |
//! | `Never`  | *      | *        | no      |
//! | `Auto`   | yes    | no       | yes     |
//! | `Auto`   | yes    | yes      | no      |
//! | `Auto`   | no     | *        | no      |
//!
//! The `no_color` bit is derived by the caller from the `NO_COLOR`
//! environment variable, read once at bootstrap; the stream only receives
//! the boolean.

use std::io::{self, BufWriter, Write};

/// User-facing colour policy, typically wired to a `--color` style setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Emit colour unconditionally.
    Always,
    /// Never emit colour.
    Never,
    /// Emit colour only on an interactive terminal, unless suppressed.
    #[default]
    Auto,
}

/// Resolves the activation policy to a concrete on/off decision.
///
/// Pure function of its inputs so the whole policy matrix is testable
/// without a terminal.
pub fn colors_active(choice: ColorChoice, is_tty: bool, no_color: bool) -> bool {
    match choice {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => is_tty && !no_color,
    }
}

/// A buffered output sink with a colour flag fixed for its lifetime.
///
/// Implements [`io::Write`], so both raw byte writes and the standard
/// formatting mini-language (`write!`, argument indices, width/precision)
/// work against it. Writes land in the buffer; nothing reaches the
/// destination until [`flush`](Write::flush) or [`flush_quiet`](Self::flush_quiet).
///
/// Dropping the stream flushes whatever remains, ignoring errors, so the
/// "released exactly once on every exit path" contract holds without any
/// calling convention.
pub struct ColorStream {
    inner: BufWriter<Box<dyn Write + Send>>,
    colors: bool,
}

impl ColorStream {
    /// Creates a stream over an arbitrary destination.
    ///
    /// `is_tty` and `no_color` are supplied by the caller; see
    /// [`colors_active`] for how they combine with `choice`.
    pub fn new(
        dest: Box<dyn Write + Send>,
        choice: ColorChoice,
        is_tty: bool,
        no_color: bool,
    ) -> Self {
        Self {
            inner: BufWriter::new(dest),
            colors: colors_active(choice, is_tty, no_color),
        }
    }

    /// Creates a stream bound to standard output, probing for a TTY.
    pub fn stdout(choice: ColorChoice, no_color: bool) -> Self {
        Self::new(
            Box::new(io::stdout()),
            choice,
            atty::is(atty::Stream::Stdout),
            no_color,
        )
    }

    /// Creates a stream bound to standard error, probing for a TTY.
    pub fn stderr(choice: ColorChoice, no_color: bool) -> Self {
        Self::new(
            Box::new(io::stderr()),
            choice,
            atty::is(atty::Stream::Stderr),
            no_color,
        )
    }

    /// Returns whether this stream emits colour.
    pub fn colors_enabled(&self) -> bool {
        self.colors
    }

    /// Returns `code` when colour is enabled, the empty string otherwise.
    ///
    /// Convenience for imperative writes outside the template path.
    pub fn paint(&self, code: &'static str) -> &'static str {
        if self.colors {
            code
        } else {
            ""
        }
    }

    /// Flushes buffered output, swallowing failures.
    ///
    /// Terminal output failures (including a consumer that closed the pipe)
    /// must never abort the program; this is the one place that swallow
    /// happens.
    pub fn flush_quiet(&mut self) {
        let _ = self.inner.flush();
    }
}

impl Write for ColorStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Write end that appends into a shared buffer the test can inspect.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl SharedBuf {
        fn contents(&self) -> Vec<u8> {
            self.0.lock().unwrap().clone()
        }
    }

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Write end that fails every write with `BrokenPipe`.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "consumer gone"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "consumer gone"))
        }
    }

    #[test]
    fn test_activation_matrix() {
        use ColorChoice::*;
        assert!(colors_active(Always, true, false));
        assert!(colors_active(Always, false, true));
        assert!(!colors_active(Never, true, false));
        assert!(!colors_active(Never, false, true));
        assert!(colors_active(Auto, true, false));
        assert!(!colors_active(Auto, true, true));
        assert!(!colors_active(Auto, false, false));
        assert!(!colors_active(Auto, false, true));
    }

    #[test]
    fn test_default_choice_is_auto() {
        assert_eq!(ColorChoice::default(), ColorChoice::Auto);
    }

    #[test]
    fn test_writes_are_buffered_until_flush() {
        let buf = SharedBuf::default();
        let mut stream = ColorStream::new(Box::new(buf.clone()), ColorChoice::Never, false, false);

        stream.write_all(b"hello").unwrap();
        assert!(buf.contents().is_empty(), "write must not reach the destination yet");

        stream.flush().unwrap();
        assert_eq!(buf.contents(), b"hello");
    }

    #[test]
    fn test_write_fmt_supports_width_and_precision() {
        let buf = SharedBuf::default();
        let mut stream = ColorStream::new(Box::new(buf.clone()), ColorChoice::Never, false, false);

        write!(stream, "{:>5}|{:.2}", "ab", 3.14159).unwrap();
        stream.flush().unwrap();
        assert_eq!(buf.contents(), b"   ab|3.14");
    }

    #[test]
    fn test_paint_respects_colour_flag() {
        let on = ColorStream::new(
            Box::new(SharedBuf::default()),
            ColorChoice::Always,
            false,
            false,
        );
        let off = ColorStream::new(
            Box::new(SharedBuf::default()),
            ColorChoice::Never,
            true,
            false,
        );
        assert_eq!(on.paint(crate::ansi::BOLD), crate::ansi::BOLD);
        assert_eq!(off.paint(crate::ansi::BOLD), "");
    }

    #[test]
    fn test_flush_quiet_swallows_broken_pipe() {
        let mut stream = ColorStream::new(Box::new(BrokenPipe), ColorChoice::Never, false, false);
        stream.write_all(b"anything").unwrap();
        // Must not panic and must not surface the error.
        stream.flush_quiet();
    }

    #[test]
    fn test_drop_flushes_remaining_output() {
        let buf = SharedBuf::default();
        {
            let mut stream =
                ColorStream::new(Box::new(buf.clone()), ColorChoice::Never, false, false);
            stream.write_all(b"tail").unwrap();
        }
        assert_eq!(buf.contents(), b"tail");
    }
}

//! Writing escape sequences to the terminal.
//!
//! This module is the only part of ansicolor that performs I/O. [`Terminal`]
//! wraps any [`std::io::Write`] together with the format that
//! [`Terminal::reset`] restores. The free functions write to standard output
//! and restore the process-wide default format, which starts out as
//! [`Format::terminal_default`] and can be replaced with
//! [`set_default_format`].
//!
//! ```
//! # use ansicolor::style::{Attribute, Format};
//! # use ansicolor::term::Terminal;
//! # use ansicolor::termco::AnsiColor;
//! let mut terminal = Terminal::new(Vec::new(), Format::terminal_default());
//! terminal.apply(&Format::new().with_option(Attribute::Bold))?;
//! terminal.set_foreground(AnsiColor::Cyan)?;
//! terminal.clear_all()?;
//!
//! assert_eq!(terminal.into_inner(), b"\x1b[1m\x1b[36m\x1b[0m");
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{Stdout, Write};
use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;
use tracing::{debug, trace};

use crate::error::AttributeError;
use crate::style::{Format, Layer, CLEAR_STYLES, CSI, RESET};
use crate::termco::Colorant;

static DEFAULT_FORMAT: Lazy<RwLock<Format>> =
    Lazy::new(|| RwLock::new(Format::terminal_default()));

/// Get the process-wide default format.
pub fn default_format() -> Format {
    *DEFAULT_FORMAT.read().unwrap_or_else(PoisonError::into_inner)
}

/// Replace the process-wide default format.
///
/// The new default only affects terminals created afterwards as well as the
/// free functions in this module.
pub fn set_default_format(format: Format) {
    debug!(?format, "replacing default format");
    *DEFAULT_FORMAT.write().unwrap_or_else(PoisonError::into_inner) = format;
}

/// Write the escape sequence to the output and flush it.
pub(crate) fn write_escape<W: Write + ?Sized>(output: &mut W, sgr: &str) -> std::io::Result<()> {
    trace!(sgr = %sgr.escape_debug(), "writing escape sequence");
    output.write_all(sgr.as_bytes())?;
    output.flush()
}

// ----------------------------------------------------------------------------------------------------------

/// A terminal.
///
/// A terminal combines an output sink with the format restored by
/// [`Terminal::reset`]. Every method writes exactly one escape sequence and
/// then flushes the sink.
#[derive(Debug)]
pub struct Terminal<W> {
    output: W,
    default: Format,
}

impl Terminal<Stdout> {
    /// Create a new terminal for standard output with the process-wide
    /// default format.
    pub fn stdout() -> Self {
        Self::new(std::io::stdout(), default_format())
    }
}

impl<W: Write> Terminal<W> {
    /// Create a new terminal.
    pub fn new(output: W, default: Format) -> Self {
        Self { output, default }
    }

    /// Get this terminal's default format.
    pub fn default_format(&self) -> Format {
        self.default
    }

    /// Replace this terminal's default format.
    pub fn set_default_format(&mut self, format: Format) {
        self.default = format;
    }

    /// Get a reference to the output sink.
    pub fn get_ref(&self) -> &W {
        &self.output
    }

    /// Consume this terminal and return the output sink.
    pub fn into_inner(self) -> W {
        self.output
    }

    fn write_sgr(&mut self, sgr: &str) -> std::io::Result<()> {
        write_escape(&mut self.output, sgr)
    }

    fn write_params(&mut self, params: &str) -> std::io::Result<()> {
        let sgr = format!("{}{}m", CSI, params);
        self.write_sgr(&sgr)
    }

    fn write_color(&mut self, layer: Layer, color: Colorant) -> std::io::Result<()> {
        let Some(code) = color.sgr(layer) else {
            debug!(?color, ?layer, "refusing to write invalid color");
            return Err(AttributeError::NotFound.into());
        };
        self.write_params(&code.to_string())
    }

    /// Apply the format.
    pub fn apply(&mut self, format: &Format) -> std::io::Result<()> {
        self.write_sgr(format.render())
    }

    /// Set the foreground color.
    ///
    /// This method fails with an error of kind
    /// [`InvalidInput`](std::io::ErrorKind::InvalidInput) wrapping
    /// [`AttributeError::NotFound`] for invalid colorants. It writes nothing
    /// in that case.
    pub fn set_foreground<C: Into<Colorant>>(&mut self, color: C) -> std::io::Result<()> {
        self.write_color(Layer::Foreground, color.into())
    }

    /// Set the background color.
    ///
    /// This method fails for invalid colorants, just like
    /// [`Terminal::set_foreground`].
    pub fn set_background<C: Into<Colorant>>(&mut self, color: C) -> std::io::Result<()> {
        self.write_color(Layer::Background, color.into())
    }

    /// Restore the default foreground color.
    pub fn reset_foreground(&mut self) -> std::io::Result<()> {
        self.write_color(Layer::Foreground, Colorant::Default)
    }

    /// Restore the default background color.
    pub fn reset_background(&mut self) -> std::io::Result<()> {
        self.write_color(Layer::Background, Colorant::Default)
    }

    /// Restore the default foreground and background colors.
    pub fn clear_colors(&mut self) -> std::io::Result<()> {
        self.write_params("39;49")
    }

    /// Disable all text attributes while leaving colors untouched.
    pub fn clear_styles(&mut self) -> std::io::Result<()> {
        self.write_params(CLEAR_STYLES)
    }

    /// Perform a full reset.
    pub fn clear_all(&mut self) -> std::io::Result<()> {
        self.write_sgr(RESET)
    }

    /// Apply this terminal's default format.
    pub fn reset(&mut self) -> std::io::Result<()> {
        let default = self.default;
        self.apply(&default)
    }
}

// ----------------------------------------------------------------------------------------------------------

/// Apply the process-wide default format to standard output.
pub fn reset() -> std::io::Result<()> {
    Terminal::stdout().reset()
}

/// Set the foreground color on standard output.
pub fn set_foreground<C: Into<Colorant>>(color: C) -> std::io::Result<()> {
    Terminal::stdout().set_foreground(color)
}

/// Set the background color on standard output.
pub fn set_background<C: Into<Colorant>>(color: C) -> std::io::Result<()> {
    Terminal::stdout().set_background(color)
}

/// Restore the default foreground color on standard output.
pub fn reset_foreground() -> std::io::Result<()> {
    Terminal::stdout().reset_foreground()
}

/// Restore the default background color on standard output.
pub fn reset_background() -> std::io::Result<()> {
    Terminal::stdout().reset_background()
}

/// Restore the default colors on standard output.
pub fn clear_colors() -> std::io::Result<()> {
    Terminal::stdout().clear_colors()
}

/// Disable all text attributes on standard output.
pub fn clear_styles() -> std::io::Result<()> {
    Terminal::stdout().clear_styles()
}

/// Perform a full reset on standard output.
pub fn clear_all() -> std::io::Result<()> {
    Terminal::stdout().clear_all()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::style::Attribute;
    use crate::termco::AnsiColor;

    fn written(terminal: Terminal<Vec<u8>>) -> String {
        String::from_utf8_lossy(&terminal.into_inner()).into_owned()
    }

    #[test]
    fn test_terminal() -> std::io::Result<()> {
        let mut terminal = Terminal::new(Vec::new(), Format::terminal_default());
        terminal.set_foreground(AnsiColor::Red)?;
        terminal.set_background(AnsiColor::BrightWhite)?;
        terminal.reset_foreground()?;
        terminal.reset_background()?;
        assert_eq!(written(terminal), "\x1b[31m\x1b[107m\x1b[39m\x1b[49m");

        let mut terminal = Terminal::new(Vec::new(), Format::terminal_default());
        terminal.clear_colors()?;
        terminal.clear_styles()?;
        terminal.clear_all()?;
        terminal.reset()?;
        assert_eq!(
            written(terminal),
            "\x1b[39;49m\x1b[22;23;24;25;27;28;29m\x1b[0m\x1b[39;49;22;23;24;25;27;28;29m"
        );
        Ok(())
    }

    #[test]
    fn test_format_output_matches_terminal() -> std::io::Result<()> {
        let format = Format::new()
            .with_foreground(AnsiColor::Yellow)
            .with_option(Attribute::Blink);

        let mut terminal = Terminal::new(Vec::new(), Format::new());
        terminal.apply(&format)?;

        let mut buffer = Vec::new();
        format.write_to(&mut buffer)?;

        assert_eq!(buffer, terminal.into_inner());
        assert_eq!(buffer, b"\x1b[33;5m");
        Ok(())
    }

    #[test]
    fn test_invalid_color() {
        let mut terminal = Terminal::new(Vec::new(), Format::new());
        let result = terminal.set_foreground(Colorant::Invalid(200));
        assert_eq!(
            result.map_err(|e| e.kind()),
            Err(std::io::ErrorKind::InvalidInput)
        );
        assert!(terminal.get_ref().is_empty());
    }

    #[test]
    fn test_custom_default() -> std::io::Result<()> {
        let default = Format::new()
            .with_foreground(AnsiColor::White)
            .with_background(AnsiColor::Black);
        let mut terminal = Terminal::new(Vec::new(), Format::new());
        terminal.set_default_format(default);
        terminal.apply(&default.with_option(Attribute::Bold))?;
        terminal.reset()?;
        assert_eq!(written(terminal), "\x1b[37;40;1m\x1b[37;40;22;23;24;25;27;28;29m");
        Ok(())
    }

    #[test]
    fn test_process_default() {
        // The only test touching the process-wide default restores it again.
        let original = default_format();
        assert_eq!(original, Format::terminal_default());

        let replacement = original.with_option(Attribute::Italic);
        set_default_format(replacement);
        assert_eq!(default_format(), replacement);
        assert_eq!(Terminal::stdout().default_format(), replacement);

        set_default_format(original);
        assert_eq!(default_format(), Format::terminal_default());
    }
}

use std::fmt::Write as _;

use super::{Layer, Styles, CLEAR_STYLES, CSI, RESET};
use crate::termco::Colorant;

// The longest possible sequence is `\x1b[97;107;1;2;3;4;5;6;7;8;9;21m` with
// 32 bytes.
const CAPACITY: usize = 40;

/// An inline buffer holding an ANSI escape sequence.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
struct Sequence {
    bytes: [u8; CAPACITY],
    len: u8,
}

impl Sequence {
    const fn new() -> Self {
        Self {
            bytes: [0; CAPACITY],
            len: 0,
        }
    }

    fn as_str(&self) -> &str {
        self.bytes
            .get(..self.len as usize)
            .and_then(|bytes| std::str::from_utf8(bytes).ok())
            .unwrap_or_default()
    }
}

impl std::fmt::Write for Sequence {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        let start = self.len as usize;
        let end = start + s.len();
        let target = self.bytes.get_mut(start..end).ok_or(std::fmt::Error)?;
        target.copy_from_slice(s.as_bytes());
        self.len = end as u8;
        Ok(())
    }
}

impl std::fmt::Debug for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Debug::fmt(self.as_str(), f)
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A terminal format.
///
/// A format combines an optional foreground color, an optional background
/// color, and a set of text attributes into a single ANSI escape sequence.
/// Formats are immutable: Every `with_` and `without_` method returns a new
/// format and leaves the original untouched. Each new format assembles its
/// escape sequence right away and caches it inline, so that
/// [`Format::render`] is a plain accessor and formats are cheap to copy.
///
/// The escape sequence lists the foreground color, the background color, and
/// then the enabled attributes. If no attributes are enabled, it lists the
/// clearers for all attributes instead, so that applying the format also
/// cancels attributes still active in the terminal.
///
/// ```
/// # use ansicolor::style::{Attribute, Format};
/// # use ansicolor::termco::{AnsiColor, Colorant};
/// let format = Format::new()
///     .with_foreground(AnsiColor::Red)
///     .with_background(Colorant::Default);
/// assert_eq!(format.render(), "\x1b[31;49;22;23;24;25;27;28;29m");
///
/// let bold = format.with_option(Attribute::Bold);
/// assert_eq!(bold.render(), "\x1b[31;49;1m");
/// assert_eq!(bold.wrap("hi", true), "\x1b[31;49;1mhi\x1b[0m");
///
/// // The original format is unchanged.
/// assert_eq!(format.render(), "\x1b[31;49;22;23;24;25;27;28;29m");
/// ```
///
/// Invalid colorants render as nothing, i.e., neither their parameter nor its
/// separator appear in the escape sequence.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Format {
    foreground: Option<Colorant>,
    background: Option<Colorant>,
    styles: Styles,
    sgr: Sequence,
}

impl Format {
    /// Create a new format without colors and attributes.
    ///
    /// Unlike all other formats, the new format renders as the empty string.
    pub const fn new() -> Self {
        Self {
            foreground: None,
            background: None,
            styles: Styles::EMPTY,
            sgr: Sequence::new(),
        }
    }

    /// Create the format for the terminal's default appearance.
    ///
    /// This format uses the default foreground and background colors without
    /// any attributes.
    pub fn terminal_default() -> Self {
        Self::derive(Some(Colorant::Default), Some(Colorant::Default), Styles::EMPTY)
    }

    fn derive(foreground: Option<Colorant>, background: Option<Colorant>, styles: Styles) -> Self {
        let mut sgr = Sequence::new();
        if write_sgr(&mut sgr, foreground, background, styles).is_err() {
            sgr = Sequence::new();
        }

        Self {
            foreground,
            background,
            styles,
            sgr,
        }
    }

    /// Create a new format with the given foreground color.
    #[must_use]
    pub fn with_foreground<C: Into<Colorant>>(&self, color: C) -> Self {
        Self::derive(Some(color.into()), self.background, self.styles)
    }

    /// Create a new format with the given background color.
    #[must_use]
    pub fn with_background<C: Into<Colorant>>(&self, color: C) -> Self {
        Self::derive(self.foreground, Some(color.into()), self.styles)
    }

    /// Create a new format without foreground color.
    #[must_use]
    pub fn without_foreground(&self) -> Self {
        Self::derive(None, self.background, self.styles)
    }

    /// Create a new format without background color.
    #[must_use]
    pub fn without_background(&self) -> Self {
        Self::derive(self.foreground, None, self.styles)
    }

    /// Create a new format that also enables the given attributes.
    #[must_use]
    pub fn with_option<S: Into<Styles>>(&self, flags: S) -> Self {
        let mut styles = self.styles;
        styles.set(flags);
        Self::derive(self.foreground, self.background, styles)
    }

    /// Create a new format that does not enable the given attributes.
    #[must_use]
    pub fn without_option<S: Into<Styles>>(&self, flags: S) -> Self {
        let mut styles = self.styles;
        styles.clear(flags);
        Self::derive(self.foreground, self.background, styles)
    }

    /// Determine whether this format enables all of the given attributes.
    pub fn has_option<S: Into<Styles>>(&self, flags: S) -> bool {
        self.styles.has(flags)
    }

    /// Determine whether this format enables any of the given attributes.
    pub fn has_any_option<S: Into<Styles>>(&self, flags: S) -> bool {
        self.styles.has_any(flags)
    }

    /// Get this format's foreground color.
    pub fn foreground(&self) -> Option<Colorant> {
        self.foreground
    }

    /// Get this format's background color.
    pub fn background(&self) -> Option<Colorant> {
        self.background
    }

    /// Get this format's text attributes.
    pub fn styles(&self) -> Styles {
        self.styles
    }

    /// Get this format's escape sequence.
    pub fn render(&self) -> &str {
        self.sgr.as_str()
    }

    /// Get the escape sequence undoing this format.
    ///
    /// The sequence restores the default foreground and background colors and
    /// disables this format's attributes with their clearers. It does not
    /// perform a full reset.
    pub fn render_clear(&self) -> String {
        let mut s = String::with_capacity(CAPACITY);
        s.push_str(CSI);
        for layer in [Layer::Foreground, Layer::Background] {
            if let Some(code) = Colorant::Default.sgr(layer) {
                // Writing to a string cannot fail.
                let _ = write!(s, "{};", code);
            }
        }
        if self.styles.is_empty() {
            s.pop();
        } else {
            // Writing to a string cannot fail.
            let _ = self.styles.write_clearers(&mut s);
        }
        s.push('m');
        s
    }

    /// Write this format's escape sequence to standard output.
    pub fn apply(&self) -> std::io::Result<()> {
        self.write_to(&mut std::io::stdout().lock())
    }

    /// Write this format's escape sequence to the given writer and flush it.
    pub fn write_to<W: std::io::Write>(&self, out: &mut W) -> std::io::Result<()> {
        crate::term::write_escape(out, self.render())
    }

    /// Wrap the text in this format.
    ///
    /// The result starts with this format's escape sequence, followed by the
    /// text. If `reset` is `true`, the result ends with a full reset, restoring
    /// the terminal's default appearance. Otherwise, this format remains in
    /// effect after the text.
    pub fn wrap(&self, text: &str, reset: bool) -> String {
        let render = self.render();
        let mut s = String::with_capacity(render.len() + text.len() + RESET.len());
        s.push_str(render);
        s.push_str(text);
        if reset {
            s.push_str(RESET);
        }
        s
    }

    /// Clear this format before the text.
    ///
    /// The result starts with [`Format::render_clear`], followed by the text.
    /// If `reapply` is `true`, the result ends with this format's escape
    /// sequence, i.e., the text appears as an unformatted hole.
    pub fn clear_to(&self, text: &str, reapply: bool) -> String {
        let mut s = self.render_clear();
        s.push_str(text);
        if reapply {
            s.push_str(self.render());
        }
        s
    }
}

impl Default for Format {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Format")
            .field("foreground", &self.foreground)
            .field("background", &self.background)
            .field("styles", &self.styles)
            .field("sgr", &self.sgr)
            .finish()
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.render())
    }
}

fn write_sgr<W: std::fmt::Write>(
    out: &mut W,
    foreground: Option<Colorant>,
    background: Option<Colorant>,
    styles: Styles,
) -> std::fmt::Result {
    out.write_str(CSI)?;
    if let Some(code) = foreground.and_then(|c| c.sgr(Layer::Foreground)) {
        write!(out, "{};", code)?;
    }
    if let Some(code) = background.and_then(|c| c.sgr(Layer::Background)) {
        write!(out, "{};", code)?;
    }
    if styles.is_empty() {
        out.write_str(CLEAR_STYLES)?;
    } else {
        styles.write_setters(out)?;
    }
    out.write_char('m')
}

// ----------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::style::Attribute::*;
    use crate::termco::AnsiColor;
    use proptest::prelude::*;

    #[test]
    fn test_new() {
        let format = Format::new();
        assert_eq!(format.render(), "");
        assert_eq!(format.foreground(), None);
        assert_eq!(format.background(), None);
        assert!(format.styles().is_empty());
        assert_eq!(format, Format::default());
        assert_eq!(format.wrap("hi", false), "hi");
        assert_eq!(format.wrap("hi", true), "hi\x1b[0m");
    }

    #[test]
    fn test_assembly() {
        let format = Format::new()
            .with_foreground(AnsiColor::Red)
            .with_background(Colorant::Default);
        assert_eq!(format.render(), "\x1b[31;49;22;23;24;25;27;28;29m");

        let format = Format::new().with_option(Bold);
        assert_eq!(format.render(), "\x1b[1m");
        assert_eq!(format.wrap("hi", true), "\x1b[1mhi\x1b[0m");
        assert_eq!(format.wrap("hi", false), "\x1b[1mhi");

        let format = format
            .with_background(AnsiColor::BrightWhite)
            .with_foreground(AnsiColor::Red)
            .with_option(Underline);
        assert_eq!(format.render(), "\x1b[31;107;1;4m");
        assert_eq!(format!("{}", format), "\x1b[31;107;1;4m");

        let format = format.without_foreground().without_option(Bold | Underline);
        assert_eq!(format.render(), "\x1b[107;22;23;24;25;27;28;29m");

        assert_eq!(
            Format::terminal_default().render(),
            "\x1b[39;49;22;23;24;25;27;28;29m"
        );
    }

    #[test]
    fn test_longest_sequence() {
        let format = Format::new()
            .with_foreground(AnsiColor::BrightWhite)
            .with_background(AnsiColor::BrightWhite)
            .with_option(Styles::from_bits(0x3ff));
        assert_eq!(format.render(), "\x1b[97;107;1;2;3;4;5;6;7;8;9;21m");
    }

    #[test]
    fn test_derive_on_write() {
        let base = Format::new().with_foreground(AnsiColor::Green);
        let bold = base.with_option(Bold);
        let italic = base.with_option(Italic);

        assert!(!base.has_any_option(Bold | Italic));
        assert!(bold.has_option(Bold));
        assert!(!bold.has_option(Italic));
        assert!(italic.has_option(Italic));
        assert_eq!(base.render(), "\x1b[32;22;23;24;25;27;28;29m");
        assert_eq!(bold.render(), "\x1b[32;1m");
        assert_eq!(italic.render(), "\x1b[32;3m");
    }

    #[test]
    fn test_idempotent_option() {
        let once = Format::new().with_option(Bold);
        let twice = once.with_option(Bold);
        assert_eq!(once, twice);
        assert_eq!(twice.styles().len(), 1);
        assert_eq!(once.render(), twice.render());
    }

    #[test]
    fn test_invalid_color() {
        let format = Format::new()
            .with_foreground(Colorant::Invalid(200))
            .with_background(Colorant::Invalid(31));
        assert_eq!(format.render(), "\x1b[22;23;24;25;27;28;29m");

        let format = format.with_option(Strike);
        assert_eq!(format.render(), "\x1b[9m");
        assert_eq!(format.foreground(), Some(Colorant::Invalid(200)));
    }

    #[test]
    fn test_clear_to() {
        let format = Format::new()
            .with_foreground(AnsiColor::Blue)
            .with_option(Bold | Underline);
        assert_eq!(format.render_clear(), "\x1b[39;49;22;24m");
        assert_eq!(format.clear_to("gap", false), "\x1b[39;49;22;24mgap");
        assert_eq!(
            format.clear_to("gap", true),
            "\x1b[39;49;22;24mgap\x1b[34;1;4m"
        );

        let plain = Format::new().with_foreground(AnsiColor::Blue);
        assert_eq!(plain.clear_to("", false), "\x1b[39;49m");
    }

    #[test]
    fn test_write_to() {
        let format = Format::new().with_option(Reverse);
        let mut buffer = Vec::new();
        assert!(format.write_to(&mut buffer).is_ok());
        assert_eq!(buffer, b"\x1b[7m");
    }

    fn colorant() -> impl Strategy<Value = Colorant> {
        prop_oneof![
            Just(Colorant::Default),
            (0u8..16).prop_map(|index| Colorant::Ansi(
                AnsiColor::try_from(index).unwrap_or_default()
            )),
            any::<u8>().prop_map(Colorant::Invalid),
        ]
    }

    proptest! {
        #[test]
        fn render_is_well_formed(
            foreground in proptest::option::of(colorant()),
            background in proptest::option::of(colorant()),
            bits in 0u16..0x400,
        ) {
            let mut format = Format::new().with_option(Styles::from_bits(bits));
            if let Some(color) = foreground {
                format = format.with_foreground(color);
            }
            if let Some(color) = background {
                format = format.with_background(color);
            }

            let sgr = format.render();
            prop_assert!(sgr.starts_with("\x1b["));
            prop_assert!(sgr.ends_with('m'));
            prop_assert!(!sgr.contains(";;"));
            prop_assert!(!sgr.contains(";m"));
            prop_assert!(!sgr.contains("[;"));
        }

        #[test]
        fn with_option_has_option(bits in 0u16..0x400, flags in 0u16..0x400) {
            let flags = Styles::from_bits(flags);
            let format = Format::new().with_option(Styles::from_bits(bits)).with_option(flags);
            prop_assert!(format.has_option(flags));
            prop_assert!(!format.without_option(flags).has_any_option(flags));
        }
    }
}

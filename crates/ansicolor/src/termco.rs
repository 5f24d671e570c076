//! Terminal-specific color formats.
//!
//! This module defines the sixteen [`AnsiColor`]s and the wrapper
//! [`Colorant`], which adds the terminal's default color as well as an
//! explicit invalid case for SGR parameters outside the color bands. A
//! colorant only turns into a numeric SGR parameter in combination with a
//! [`Layer`], since foreground and background colors use different bands.
//!
//! ```
//! # use ansicolor::style::Layer;
//! # use ansicolor::termco::{AnsiColor, Colorant};
//! let red = Colorant::from(AnsiColor::Red);
//! assert_eq!(red.sgr(Layer::Foreground), Some(31));
//! assert_eq!(red.sgr(Layer::Background), Some(41));
//!
//! let bright = Colorant::from(AnsiColor::BrightRed);
//! assert_eq!(bright.sgr(Layer::Background), Some(101));
//!
//! assert_eq!(Colorant::Default.sgr(Layer::Foreground), Some(39));
//! assert_eq!(Colorant::Invalid(200).sgr(Layer::Foreground), None);
//! ```

use crate::error::{AttributeError, OutOfBoundsError};
use crate::style::Layer;

/// The 16 extended ANSI colors.
///
/// The discriminant of each color is its index in the usual 16-color
/// ordering, with the eight bright colors following the eight regular
/// colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnsiColor {
    #[default]
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl AnsiColor {
    /// Get an iterator over all ANSI colors in order.
    pub fn all() -> AnsiColorIterator {
        AnsiColorIterator::new()
    }

    /// Determine whether this ANSI color is bright.
    pub fn is_bright(&self) -> bool {
        8 <= *self as u8
    }

    /// Get the base version of this ANSI color.
    ///
    /// If this color is bright, this method returns its non-bright version.
    /// Otherwise, it returns the same color.
    pub fn to_base(&self) -> AnsiColor {
        let index = *self as u8;
        AnsiColor::from_index(index % 8)
    }

    /// Get the bright version of this ANSI color.
    ///
    /// If the color is not bright, this method returns its bright version.
    /// Otherwise, it returns the same color.
    pub fn to_bright(&self) -> AnsiColor {
        let index = *self as u8;
        AnsiColor::from_index(index % 8 + 8)
    }

    /// Get this ANSI color's name.
    ///
    /// This method returns the human-readable name, e.g., `"bright green"` for
    /// [`AnsiColor::BrightGreen`].
    pub fn name(&self) -> &'static str {
        use AnsiColor::*;

        match self {
            Black => "black",
            Red => "red",
            Green => "green",
            Yellow => "yellow",
            Blue => "blue",
            Magenta => "magenta",
            Cyan => "cyan",
            White => "white",
            BrightBlack => "bright black",
            BrightRed => "bright red",
            BrightGreen => "bright green",
            BrightYellow => "bright yellow",
            BrightBlue => "bright blue",
            BrightMagenta => "bright magenta",
            BrightCyan => "bright cyan",
            BrightWhite => "bright white",
        }
    }

    /// Look up an ANSI color by name.
    ///
    /// Names are case-sensitive. Bright colors may be spelled with a space or
    /// an underscore after `bright`, i.e., `bright red` and `bright_red` both
    /// denote [`AnsiColor::BrightRed`].
    pub fn from_name(name: &str) -> Result<Self, AttributeError> {
        if name.is_empty() {
            return Err(AttributeError::Empty);
        }

        let (bright, base) = match name.strip_prefix("bright_") {
            Some(base) => (true, base),
            None => match name.strip_prefix("bright ") {
                Some(base) => (true, base),
                None => (false, name),
            },
        };

        AnsiColor::all()
            .take(8)
            .find(|color| color.name() == base)
            .map(|color| if bright { color.to_bright() } else { color })
            .ok_or(AttributeError::NotFound)
    }

    // Index must be less than 16.
    const fn from_index(index: u8) -> Self {
        use AnsiColor::*;

        match index {
            0 => Black,
            1 => Red,
            2 => Green,
            3 => Yellow,
            4 => Blue,
            5 => Magenta,
            6 => Cyan,
            7 => White,
            8 => BrightBlack,
            9 => BrightRed,
            10 => BrightGreen,
            11 => BrightYellow,
            12 => BrightBlue,
            13 => BrightMagenta,
            14 => BrightCyan,
            _ => BrightWhite,
        }
    }
}

impl TryFrom<u8> for AnsiColor {
    type Error = OutOfBoundsError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < 16 {
            Ok(AnsiColor::from_index(value))
        } else {
            Err(OutOfBoundsError::new(value, 0..=15))
        }
    }
}

impl From<AnsiColor> for u8 {
    fn from(value: AnsiColor) -> u8 {
        value as u8
    }
}

impl std::str::FromStr for AnsiColor {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AnsiColor::from_name(s)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A helper for iterating over ANSI colors.
///
/// This iterator is fused, i.e., after returning `None` once, it will keep
/// returning `None`. This iterator also is exact, i.e., its `size_hint()`
/// returns the exact number of remaining items.
#[derive(Debug)]
pub struct AnsiColorIterator {
    index: u8,
}

impl AnsiColorIterator {
    fn new() -> Self {
        Self { index: 0 }
    }
}

impl Iterator for AnsiColorIterator {
    type Item = AnsiColor;

    fn next(&mut self) -> Option<Self::Item> {
        if 16 <= self.index {
            None
        } else {
            let index = self.index;
            self.index += 1;
            Some(AnsiColor::from_index(index))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = 16 - self.index as usize;
        (remaining, Some(remaining))
    }
}

impl std::iter::ExactSizeIterator for AnsiColorIterator {
    fn len(&self) -> usize {
        16 - self.index as usize
    }
}

impl std::iter::FusedIterator for AnsiColorIterator {}

// --------------------------------------------------------------------------------------------------------------------

/// A terminal color.
///
/// A colorant is either the terminal's default color, one of the 16 ANSI
/// colors, or an invalid SGR parameter. The latter exists so that numeric
/// codes from untrusted sources can flow through formats without panicking:
/// An invalid colorant renders as nothing at all.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Colorant {
    /// The terminal's default color.
    #[default]
    Default,
    /// One of the 16 ANSI colors.
    Ansi(AnsiColor),
    /// An SGR parameter that is not a color for the layer it was decoded for.
    Invalid(u8),
}

impl Colorant {
    /// Decode a colorant from its SGR parameter for the given layer.
    ///
    /// This method never fails. Parameters outside the layer's bands produce
    /// [`Colorant::Invalid`].
    ///
    /// ```
    /// # use ansicolor::style::Layer;
    /// # use ansicolor::termco::{AnsiColor, Colorant};
    /// assert_eq!(
    ///     Colorant::from_sgr(Layer::Background, 103),
    ///     Colorant::Ansi(AnsiColor::BrightYellow)
    /// );
    /// assert_eq!(Colorant::from_sgr(Layer::Foreground, 49), Colorant::Invalid(49));
    /// ```
    pub fn from_sgr(layer: Layer, code: u8) -> Self {
        let Some(base) = code.checked_sub(layer.offset()) else {
            return Colorant::Invalid(code);
        };

        match base {
            30..=37 => Colorant::Ansi(AnsiColor::from_index(base - 30)),
            39 => Colorant::Default,
            90..=97 => Colorant::Ansi(AnsiColor::from_index(base - 90 + 8)),
            _ => Colorant::Invalid(code),
        }
    }

    /// Determine whether this colorant is the default color.
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default)
    }

    /// Determine whether this colorant can be rendered.
    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }

    /// Get the SGR parameter for this colorant on the given layer.
    ///
    /// This method returns `None` for invalid colorants.
    pub fn sgr(&self, layer: Layer) -> Option<u8> {
        let base = match self {
            Self::Default => 39,
            Self::Ansi(color) => {
                let index = *color as u8;
                if index < 8 {
                    30 + index
                } else {
                    90 + index - 8
                }
            }
            Self::Invalid(_) => return None,
        };

        Some(base + layer.offset())
    }

    /// Get this colorant's name.
    ///
    /// The default color is named `default`. Invalid colorants have the empty
    /// name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ansi(color) => color.name(),
            Self::Invalid(_) => "",
        }
    }

    /// Look up a colorant by name.
    ///
    /// This method recognizes the names of all ANSI colors as well as
    /// `default`.
    pub fn from_name(name: &str) -> Result<Self, AttributeError> {
        if name == "default" {
            Ok(Self::Default)
        } else {
            AnsiColor::from_name(name).map(Self::Ansi)
        }
    }
}

impl From<AnsiColor> for Colorant {
    fn from(value: AnsiColor) -> Self {
        Self::Ansi(value)
    }
}

impl std::str::FromStr for Colorant {
    type Err = AttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Colorant::from_name(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_ansi_color() {
        assert_eq!(AnsiColor::all().len(), 16);
        assert_eq!(AnsiColor::all().last(), Some(AnsiColor::BrightWhite));

        for color in AnsiColor::all() {
            assert_eq!(AnsiColor::try_from(color as u8), Ok(color));
            assert_eq!(AnsiColor::from_name(color.name()), Ok(color));
            assert_eq!(color.to_base().to_bright(), color.to_bright());
            assert!(color.to_bright().is_bright());
            assert!(!color.to_base().is_bright());
        }

        assert_eq!(
            AnsiColor::try_from(16_u8),
            Err(OutOfBoundsError::new(16_u8, 0..=15))
        );
    }

    #[test]
    fn test_names() {
        assert_eq!(AnsiColor::from_name("red"), Ok(AnsiColor::Red));
        assert_eq!(AnsiColor::from_name("bright red"), Ok(AnsiColor::BrightRed));
        assert_eq!(AnsiColor::from_name("bright_cyan"), Ok(AnsiColor::BrightCyan));
        assert_eq!(AnsiColor::from_name(""), Err(AttributeError::Empty));
        assert_eq!(AnsiColor::from_name("Red"), Err(AttributeError::NotFound));
        assert_eq!(AnsiColor::from_name("bright "), Err(AttributeError::NotFound));
        assert_eq!(
            AnsiColor::from_name("chartreuse"),
            Err(AttributeError::NotFound)
        );

        assert_eq!("default".parse::<Colorant>(), Ok(Colorant::Default));
        assert_eq!(
            "magenta".parse::<Colorant>(),
            Ok(Colorant::Ansi(AnsiColor::Magenta))
        );
        assert_eq!("".parse::<Colorant>(), Err(AttributeError::Empty));
        assert_eq!(Colorant::Invalid(7).name(), "");
    }

    #[test]
    fn test_sgr() {
        for layer in [Layer::Foreground, Layer::Background] {
            for color in AnsiColor::all() {
                let colorant = Colorant::from(color);
                assert!(!colorant.is_default());
                let code = colorant.sgr(layer);
                assert!(code.is_some());
                assert_eq!(Colorant::from_sgr(layer, code.unwrap_or(0)), colorant);
            }

            let code = Colorant::Default.sgr(layer).unwrap_or(0);
            assert!(Colorant::from_sgr(layer, code).is_default());
        }

        assert_eq!(Colorant::from_sgr(Layer::Foreground, 38), Colorant::Invalid(38));
        assert_eq!(Colorant::from_sgr(Layer::Background, 37), Colorant::Invalid(37));
        assert_eq!(Colorant::from_sgr(Layer::Background, 5), Colorant::Invalid(5));
        assert_eq!(Colorant::from_sgr(Layer::Foreground, 200), Colorant::Invalid(200));
        assert_eq!(Colorant::Invalid(200).sgr(Layer::Background), None);
        assert!(!Colorant::Invalid(31).is_valid());
        assert!(!Colorant::Invalid(39).is_default());
    }
}

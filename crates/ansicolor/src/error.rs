//! Utility module with ansicolor's errors.

/// An out-of-bounds error.
///
/// This error indicates a numeric SGR parameter that falls outside the bands
/// reserved for some attribute family. The bands used by this crate include:
///
///   * `0..=15` for index values of [`AnsiColor`](crate::termco::AnsiColor);
///   * `30..=37`, `39`, and `90..=97` for foreground colors;
///   * `40..=47`, `49`, and `100..=107` for background colors;
///   * `1..=9` and `21` for [`Attribute`](crate::style::Attribute) setters;
///   * `22..=25` and `27..=29` for [`Clearer`](crate::style::Clearer)s.
///
/// For families with more than one band, `expected` covers the smallest
/// inclusive range spanning all of them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: std::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new<V: Into<usize>>(value: V, expected: std::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} is not a valid code in range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

// ====================================================================================================================

/// An erroneous attribute name.
///
/// Looking up colors, style setters, or style clearers by name fails with one
/// of these two kinds. Both are recoverable: The caller decides whether to
/// fall back onto a default or report the name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AttributeError {
    /// The name is the empty string.
    Empty,

    /// The name is not empty but does not denote an attribute of the
    /// requested family. Lookup is case-sensitive, so `Red` is not found
    /// whereas `red` is.
    NotFound,
}

impl std::fmt::Display for AttributeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str("attribute name is empty"),
            Self::NotFound => f.write_str("attribute not found"),
        }
    }
}

impl std::error::Error for AttributeError {}

impl From<AttributeError> for std::io::Error {
    fn from(value: AttributeError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, value)
    }
}

//! Lookup between attribute names and numeric SGR parameters.
//!
//! SGR parameters fall into four [`Family`]s: foreground colors, background
//! colors, style setters, and style clearers. Each family occupies one or more
//! fixed numeric bands. [`code_for`] maps a symbolic name to its parameter
//! and [`name_for`] maps the parameter back to its name.
//!
//! ```
//! # use ansicolor::code::{code_for, name_for, Family};
//! # use ansicolor::error::AttributeError;
//! assert_eq!(code_for(Family::Foreground, "red"), Ok(31));
//! assert_eq!(code_for(Family::Background, "bright red"), Ok(101));
//! assert_eq!(code_for(Family::Setter, "double underline"), Ok(21));
//! assert_eq!(code_for(Family::Foreground, ""), Err(AttributeError::Empty));
//! assert_eq!(
//!     code_for(Family::Foreground, "chartreuse"),
//!     Err(AttributeError::NotFound)
//! );
//!
//! assert_eq!(name_for(Family::Clearer, 24), "remove underline");
//! assert_eq!(name_for(Family::Clearer, 26), "");
//! ```

use tracing::debug;

use crate::error::AttributeError;
use crate::style::{Attribute, Clearer, Layer};
use crate::termco::Colorant;

/// A family of SGR parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// Foreground colors `30..=37`, `90..=97`, and the default `39`.
    Foreground,
    /// Background colors `40..=47`, `100..=107`, and the default `49`.
    Background,
    /// Style setters `1..=9` and `21`.
    Setter,
    /// Style clearers `22..=25` and `27..=29`.
    Clearer,
}

impl Family {
    /// All families.
    pub const ALL: [Family; 4] = [
        Family::Foreground,
        Family::Background,
        Family::Setter,
        Family::Clearer,
    ];

    /// Determine whether the SGR parameter belongs to this family.
    pub const fn contains(&self, code: u8) -> bool {
        match self {
            Self::Foreground => matches!(code, 30..=37 | 39 | 90..=97),
            Self::Background => matches!(code, 40..=47 | 49 | 100..=107),
            Self::Setter => matches!(code, 1..=9 | 21),
            Self::Clearer => matches!(code, 22..=25 | 27..=29),
        }
    }

    /// Get an iterator over this family's SGR parameters in ascending order.
    pub fn codes(self) -> impl Iterator<Item = u8> {
        (0..=u8::MAX).filter(move |code| self.contains(*code))
    }

    /// Get this family's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Foreground => "foreground",
            Self::Background => "background",
            Self::Setter => "setter",
            Self::Clearer => "clearer",
        }
    }

    fn layer(&self) -> Option<Layer> {
        match self {
            Self::Foreground => Some(Layer::Foreground),
            Self::Background => Some(Layer::Background),
            Self::Setter | Self::Clearer => None,
        }
    }
}

/// Look up the SGR parameter for the name in the given family.
///
/// Color families recognize the 16 ANSI color names as well as `default`.
/// The setter family recognizes attribute names such as `bold` or `fast
/// blink`. The clearer family recognizes names such as `remove intensity`.
pub fn code_for(family: Family, name: &str) -> Result<u8, AttributeError> {
    let result = match family.layer() {
        Some(layer) => Colorant::from_name(name)
            .and_then(|colorant| colorant.sgr(layer).ok_or(AttributeError::NotFound)),
        None if family == Family::Setter => Attribute::from_name(name).map(|a| a.enable_sgr()),
        None => Clearer::from_name(name).map(|c| c.sgr()),
    };

    if let Err(error) = result {
        debug!(family = family.name(), name, %error, "attribute lookup failed");
    }
    result
}

/// Look up the name for the SGR parameter in the given family.
///
/// This function returns the empty string if the parameter does not belong to
/// the family.
pub fn name_for(family: Family, code: u8) -> &'static str {
    if !family.contains(code) {
        return "";
    }

    match family.layer() {
        Some(layer) => Colorant::from_sgr(layer, code).name(),
        None if family == Family::Setter => Attribute::try_from(code).map_or("", |a| a.name()),
        None => Clearer::try_from(code).map_or("", |c| c.name()),
    }
}

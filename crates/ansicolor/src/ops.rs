//! String operators for adding and stripping styles.
//!
//! The `add_` functions prefix text with a single-purpose escape sequence and
//! optionally suffix it with a full reset. The `strip_` functions remove
//! escape sequences again. The family-specific variants only remove escape
//! sequences with a single parameter of that family, which are exactly the
//! sequences written by the `add_` functions and by [`Terminal`]'s setters.
//!
//! ```
//! # use ansicolor::ops::{add_foreground, strip_all, strip_foreground};
//! # use ansicolor::termco::AnsiColor;
//! let s = add_foreground(AnsiColor::Green, "ok", true)?;
//! assert_eq!(s, "\x1b[32mok\x1b[0m");
//! assert_eq!(strip_foreground(&s), "ok\x1b[0m");
//! assert_eq!(strip_all(&s), "ok");
//! # Ok::<(), ansicolor::error::AttributeError>(())
//! ```
//!
//! [`Terminal`]: crate::term::Terminal

use crate::code::Family;
use crate::error::AttributeError;
use crate::style::{Layer, Styles, CSI, RESET};
use crate::termco::Colorant;

fn add_color(
    layer: Layer,
    color: Colorant,
    text: &str,
    reset: bool,
) -> Result<String, AttributeError> {
    let code = color.sgr(layer).ok_or(AttributeError::NotFound)?;
    Ok(assemble(&code.to_string(), text, reset))
}

fn assemble(params: &str, text: &str, reset: bool) -> String {
    let mut s = String::with_capacity(CSI.len() + params.len() + 1 + text.len() + RESET.len());
    if !params.is_empty() {
        s.push_str(CSI);
        s.push_str(params);
        s.push('m');
    }
    s.push_str(text);
    if reset {
        s.push_str(RESET);
    }
    s
}

/// Color the text's foreground.
///
/// This function fails with [`AttributeError::NotFound`] for invalid
/// colorants.
pub fn add_foreground<C: Into<Colorant>>(
    color: C,
    text: &str,
    reset: bool,
) -> Result<String, AttributeError> {
    add_color(Layer::Foreground, color.into(), text, reset)
}

/// Color the text's background.
///
/// This function fails with [`AttributeError::NotFound`] for invalid
/// colorants.
pub fn add_background<C: Into<Colorant>>(
    color: C,
    text: &str,
    reset: bool,
) -> Result<String, AttributeError> {
    add_color(Layer::Background, color.into(), text, reset)
}

/// Enable the text attributes for the text.
///
/// Unlike [`Format`](crate::style::Format), an empty set of attributes adds
/// no escape sequence at all.
pub fn add_styles<S: Into<Styles>>(styles: S, text: &str, reset: bool) -> String {
    assemble(&styles.into().render(), text, reset)
}

/// Remove the escape sequences matching the predicate.
///
/// The predicate receives the parameter string between `ESC[` and `m`.
fn strip_where<P: Fn(&str) -> bool>(text: &str, predicate: P) -> String {
    let mut result = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(start) = rest.find(CSI) {
        let after = &rest[start + CSI.len()..];
        let length = after
            .bytes()
            .take_while(|b| b.is_ascii_digit() || *b == b';')
            .count();
        let params = &after[..length];

        if after[length..].starts_with('m') && predicate(params) {
            result.push_str(&rest[..start]);
            rest = &after[length + 1..];
        } else {
            result.push_str(&rest[..start + CSI.len()]);
            rest = after;
        }
    }

    result.push_str(rest);
    result
}

fn strip_family(text: &str, families: &[Family]) -> String {
    strip_where(text, |params| {
        params
            .parse::<u8>()
            .is_ok_and(|code| families.iter().any(|family| family.contains(code)))
    })
}

/// Remove single-parameter escape sequences with foreground colors.
pub fn strip_foreground(text: &str) -> String {
    strip_family(text, &[Family::Foreground])
}

/// Remove single-parameter escape sequences with background colors.
pub fn strip_background(text: &str) -> String {
    strip_family(text, &[Family::Background])
}

/// Remove single-parameter escape sequences with style setters or clearers.
pub fn strip_styles(text: &str) -> String {
    strip_family(text, &[Family::Setter, Family::Clearer])
}

/// Remove all SGR escape sequences.
pub fn strip_all(text: &str) -> String {
    strip_where(text, |_| true)
}

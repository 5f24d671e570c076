//! Terminal-specific text formats and styles.
//!
//! This module supports styling terminal appearance with ANSI SGR escape
//! sequences through [`Format`]s, which combine a set of text [`Attribute`]s,
//! i.e., [`Styles`], with an optional foreground
//! [`Colorant`](crate::termco::Colorant) and an optional background
//! [`Colorant`](crate::termco::Colorant).
//!
//! It also defines [`Layer`] to distinguish between foreground and background
//! colors as well as [`Clearer`] for the SGR parameters that disable
//! attributes again.
//!
//!
//! # The One-Two-Three of Formats
//!
//! The three steps for using formats are:
//!
//!  1. Fluently assemble a format by modifying the empty [`Format::new`].
//!  2. Derive variations from the format. Since formats are immutable, each
//!     variation is a new format and the original remains usable.
//!  3. Apply the format by writing it to the terminal or by wrapping text in
//!     it, and restore default appearance again with a reset or a clear.
//!
//!
//! # Examples
//!
//! ## Fluently Assemble Format
//!
//! Fluently assemble a format for bold, underlined red text:
//! ```
//! # use ansicolor::style::{Attribute, Format};
//! # use ansicolor::termco::{AnsiColor, Colorant};
//! let format = Format::new()
//!     .with_option(Attribute::Bold)
//!     .with_foreground(AnsiColor::Red)
//!     .with_option(Attribute::Underline);
//!
//! assert!(format.has_option(Attribute::Bold | Attribute::Underline));
//! assert_eq!(format.foreground(), Some(Colorant::Ansi(AnsiColor::Red)));
//! assert_eq!(format.background(), None);
//! ```
//!
//! As demonstrated above, the order of method invocations does not matter when
//! assembling formats. If you set a color more than once, the most recent
//! invocation wins.
//!
//!
//! ## Derive Variations
//!
//! ```
//! # use ansicolor::style::{Attribute, Format};
//! # use ansicolor::termco::AnsiColor;
//! let base = Format::new()
//!     .with_foreground(AnsiColor::Red)
//!     .with_background(AnsiColor::BrightWhite)
//!     .with_option(Attribute::Bold);
//! let reversed = base.with_option(Attribute::Reverse);
//!
//! assert_eq!(base.render(), "\x1b[31;107;1m");
//! assert_eq!(reversed.render(), "\x1b[31;107;1;7m");
//! ```
//!
//!
//! ## Apply Format to Text
//!
//! ```
//! # use ansicolor::style::{Attribute, Format};
//! # use ansicolor::termco::AnsiColor;
//! let format = Format::new()
//!     .with_foreground(AnsiColor::Red)
//!     .with_option(Attribute::Underline);
//!
//! let s = format!("You can also {} text.", format.wrap("wrap", true));
//! assert_eq!(s, "You can also \x1b[31;4mwrap\x1b[0m text.");
//!
//! let s = format.clear_to("plain", true);
//! assert_eq!(s, "\x1b[39;49;24mplain\x1b[31;4m");
//! ```

mod attribute;
mod context;
mod format;

pub use attribute::{Attribute, AttributeIter, Clearer, Styles};
pub use context::Layer;
pub use format::Format;

/// The control sequence introducer starting every SGR escape sequence.
pub const CSI: &str = "\x1b[";

/// The full reset, which restores the terminal's default appearance.
pub const RESET: &str = "\x1b[0m";

/// The SGR parameters for disabling all text attributes.
pub const CLEAR_STYLES: &str = "22;23;24;25;27;28;29";

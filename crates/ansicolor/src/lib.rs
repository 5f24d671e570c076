//! # ansicolor
//!
//! Ansicolor turns symbolic color and style names into ANSI SGR escape
//! sequences, composes several attributes into a single escape sequence, and
//! applies, wraps, or strips them for terminal output.
//!
//!
//! ## 1. Overview
//!
//! Ansicolor's main abstractions are:
//!
//!   * The [`termco`] module defines the 16 [`AnsiColor`]s and the wrapper
//!     [`Colorant`], which adds the terminal's default color and an explicit
//!     invalid case.
//!   * The [`style`] module defines text [`Attribute`]s, the attribute set
//!     [`Styles`], and [`Format`], which combines attributes with foreground
//!     and background colors into one cached escape sequence.
//!   * The [`code`] module looks up SGR parameters by name and vice versa for
//!     foreground colors, background colors, style setters, and style
//!     clearers.
//!   * The [`ops`] module offers string helpers for adding colors and styles
//!     to text and stripping them again.
//!   * The [`term`] module writes escape sequences to a [`Terminal`] or
//!     standard output and holds the process-wide default format.
//!
//!
//! ## 2. One-Two-Three: Formats!
//!
//! First, assemble a format from the empty [`Format::new`]. Each method
//! returns a new format, so intermediate formats remain usable.
//!
//! ```
//! # use ansicolor::{AnsiColor, Attribute, Format};
//! let formatted = Format::new()
//!     .with_foreground(AnsiColor::Red)
//!     .with_background(AnsiColor::BrightWhite)
//!     .with_option(Attribute::Bold);
//! let underlined = formatted.with_option(Attribute::Underline);
//! ```
//!
//! Second, check the escape sequence. Formats assemble it once, when they
//! are created, so rendering is just an accessor.
//!
//! ```
//! # use ansicolor::{AnsiColor, Attribute, Format};
//! # let formatted = Format::new()
//! #     .with_foreground(AnsiColor::Red)
//! #     .with_background(AnsiColor::BrightWhite)
//! #     .with_option(Attribute::Bold);
//! # let underlined = formatted.with_option(Attribute::Underline);
//! assert_eq!(formatted.render(), "\x1b[31;107;1m");
//! assert_eq!(underlined.render(), "\x1b[31;107;1;4m");
//! ```
//!
//! Third, apply the format. Either write it to the terminal with
//! [`Format::apply`] and undo it with [`term::reset`] or [`term::clear_all`],
//! or wrap text in it.
//!
//! ```
//! # use ansicolor::{AnsiColor, Attribute, Format};
//! # let underlined = Format::new()
//! #     .with_foreground(AnsiColor::Red)
//! #     .with_background(AnsiColor::BrightWhite)
//! #     .with_option(Attribute::Bold | Attribute::Underline);
//! let s = format!("You can also {} text.", underlined.wrap("wrap", true));
//! assert_eq!(s, "You can also \x1b[31;107;1;4mwrap\x1b[0m text.");
//! ```
//!
//!
//! ## 3. Names and Codes
//!
//! Applications that read colors from configuration files can look them up
//! by name. Lookup fails with an [`AttributeError`](error::AttributeError)
//! but never panics.
//!
//! ```
//! # use ansicolor::code::{code_for, Family};
//! # use ansicolor::{Colorant, Format};
//! let code = code_for(Family::Foreground, "bright green")?;
//! assert_eq!(code, 92);
//!
//! let color: Colorant = "magenta".parse()?;
//! assert_eq!(Format::new().with_foreground(color).render(),
//!     "\x1b[35;22;23;24;25;27;28;29m");
//! # Ok::<(), ansicolor::error::AttributeError>(())
//! ```
//!
//!
//! ## 4. Diagnostics
//!
//! Ansicolor emits [`tracing`](https://docs.rs/tracing) events for failed
//! lookups, changes to the default format, and terminal writes. It never
//! installs a subscriber.

pub mod code;
pub mod error;
pub mod ops;
pub mod style;
pub mod term;
pub mod termco;

pub use style::{Attribute, Format, Styles};
pub use term::Terminal;
pub use termco::{AnsiColor, Colorant};

use std::io::{Result, Write};

use ansicolor::{term, AnsiColor, Attribute, Format};

fn main() -> Result<()> {
    // 1. Assemble a format and two variations
    let formatted = Format::new()
        .with_foreground(AnsiColor::Red)
        .with_background(AnsiColor::BrightWhite)
        .with_option(Attribute::Bold);
    let underlined = formatted.with_option(Attribute::Underline);
    let reversed = formatted.with_option(Attribute::Reverse);

    let mut stdout = std::io::stdout();

    // 2. Apply them
    formatted.apply()?;
    writeln!(stdout, "Hello, World!")?;

    underlined.apply()?;
    writeln!(stdout, "Goodbye, World!")?;

    reversed.apply()?;
    writeln!(stdout, "reversed colors")?;

    // 3. Clear styles but keep colors, then reset everything
    term::clear_styles()?;
    writeln!(stdout, "reset styles")?;

    term::reset()?;
    writeln!(stdout, "clear all formatting")?;

    writeln!(
        stdout,
        "You can also {} text.",
        underlined.wrap("wrap", true)
    )?;

    Ok(())
}

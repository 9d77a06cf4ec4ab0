//! Terminal styling for command output
//!
//! Semantic styles through the [`Stylize`] trait. Color support detection
//! (`NO_COLOR`, `CLICOLOR`, TTY) is delegated to `owo-colors`.
//!
//! | Method        | Color | Stream | Use                          |
//! |---------------|-------|--------|------------------------------|
//! | `.accent()`   | Cyan  | stdout | Branch names, keys, lines    |
//! | `.error()`    | Red   | stderr | Validation messages          |
//! | `.muted()`    | Dim   | stdout | Field labels, absent values  |
//! | `.emphasis()` | Bold  | stdout | Headers                      |

use std::fmt::{self, Display};

use owo_colors::{OwoColorize, Stream, Style};

const ACCENT: Style = Style::new().cyan();
const SUCCESS: Style = Style::new().green();
const ERROR: Style = Style::new().red();
const MUTED: Style = Style::new().dimmed();
const EMPHASIS: Style = Style::new().bold();

/// A value rendered with a style when the target stream supports color
#[derive(Clone, Debug)]
pub struct Styled<T> {
    value: T,
    style: Style,
    stream: Stream,
}

impl<T> Styled<T> {
    const fn new(value: T, style: Style, stream: Stream) -> Self {
        Self {
            value,
            style,
            stream,
        }
    }
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.value
                .if_supports_color(self.stream, |v| v.style(self.style))
        )
    }
}

/// Semantic styling for anything displayable
pub trait Stylize: Display {
    /// Primary values
    fn accent(&self) -> Styled<&Self> {
        Styled::new(self, ACCENT, Stream::Stdout)
    }

    /// Failures, rendered for stderr
    fn error(&self) -> Styled<&Self> {
        Styled::new(self, ERROR, Stream::Stderr)
    }

    /// Secondary information
    fn muted(&self) -> Styled<&Self> {
        Styled::new(self, MUTED, Stream::Stdout)
    }

    /// Headers
    fn emphasis(&self) -> Styled<&Self> {
        Styled::new(self, EMPHASIS, Stream::Stdout)
    }
}

impl<T: Display + ?Sized> Stylize for T {}

/// Green checkmark
pub const fn check() -> Styled<&'static str> {
    Styled::new("✓", SUCCESS, Stream::Stdout)
}

/// Red cross, rendered for stderr
pub const fn cross() -> Styled<&'static str> {
    Styled::new("✗", ERROR, Stream::Stderr)
}

/// Cyan arrow
pub const fn arrow() -> Styled<&'static str> {
    Styled::new("→", ACCENT, Stream::Stdout)
}

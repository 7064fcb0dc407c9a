//! ANSI styling for grid tokens.
//!
//! Escape sequences come from crossterm's style commands, rendered into a
//! `String` instead of being queued on a writer, so the grid can store a
//! styled token like any other cell value.

use std::fmt;

use crossterm::{
    style::{self, Attribute, SetAttribute, SetBackgroundColor, SetForegroundColor},
    Command,
};

use crate::core::Decorate;
use crate::types::{Color, Intensity, TokenStyle};

/// Styles tokens with ANSI escape sequences
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiDecorator;

impl Decorate for AnsiDecorator {
    fn decorate(&self, token: char, style: &TokenStyle) -> String {
        let mut out = String::new();
        wrap_into(&mut out, style, |out| out.push(token));
        out
    }
}

/// A string with one style applied to all of it.
///
/// Concatenation and repetition produce plain `String`s with a single
/// prefix/reset pair around the styled part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    pub value: String,
    pub style: TokenStyle,
}

impl StyledText {
    pub fn new(value: impl Into<String>, style: TokenStyle) -> Self {
        Self {
            value: value.into(),
            style,
        }
    }

    /// Escaped form: `fore + back + intensity + value + reset`
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.value.len() + 32);
        wrap_into(&mut out, &self.style, |out| out.push_str(&self.value));
        out
    }

    /// Rendered text followed by `tail`
    pub fn concat(&self, tail: &str) -> String {
        let mut out = self.render();
        out.push_str(tail);
        out
    }

    /// `head` followed by the rendered text
    pub fn prepend(&self, head: &str) -> String {
        let mut out = String::from(head);
        out.push_str(&self.render());
        out
    }

    /// The value repeated `n` times inside one style span
    pub fn repeat(&self, n: usize) -> String {
        StyledText::new(self.value.repeat(n), self.style).render()
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn wrap_into(out: &mut String, style: &TokenStyle, body: impl FnOnce(&mut String)) {
    if style.is_plain() {
        body(out);
        return;
    }
    if let Some(fore) = style.fore {
        push_command(out, SetForegroundColor(to_crossterm(fore)));
    }
    if let Some(back) = style.back {
        push_command(out, SetBackgroundColor(to_crossterm(back)));
    }
    if let Some(intensity) = style.intensity {
        push_command(out, SetAttribute(to_attribute(intensity)));
    }
    body(out);
    push_command(out, SetAttribute(Attribute::Reset));
}

fn push_command(out: &mut String, command: impl Command) {
    // fmt::Write for String never fails
    let _ = command.write_ansi(out);
}

/// Map a palette color to crossterm's naming.
///
/// crossterm calls the normal-intensity colors `Dark*` and the bright ones
/// by their plain name.
pub fn to_crossterm(color: Color) -> style::Color {
    match color {
        Color::Black => style::Color::Black,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
        Color::LightBlack => style::Color::DarkGrey,
        Color::LightRed => style::Color::Red,
        Color::LightGreen => style::Color::Green,
        Color::LightYellow => style::Color::Yellow,
        Color::LightBlue => style::Color::Blue,
        Color::LightMagenta => style::Color::Magenta,
        Color::LightCyan => style::Color::Cyan,
        Color::LightWhite => style::Color::White,
        Color::Reset => style::Color::Reset,
    }
}

fn to_attribute(intensity: Intensity) -> Attribute {
    match intensity {
        Intensity::Bright => Attribute::Bold,
        Intensity::Dim => Attribute::Dim,
        Intensity::Normal => Attribute::NormalIntensity,
    }
}

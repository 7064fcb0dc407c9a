//! The styled-token seam.
//!
//! The grid never interprets colors itself. When a decorated point is placed
//! it hands the token and its style to a [`Decorate`] implementation and
//! stores whatever string comes back. The terminal crate provides the ANSI
//! implementation; [`PlainDecorator`] ignores styling altogether.

use crate::types::TokenStyle;

/// Turns a token and its style into the string stored in a grid cell.
///
/// Implementations must return something that renders as exactly one
/// terminal cell once escape sequences are stripped.
pub trait Decorate {
    fn decorate(&self, token: char, style: &TokenStyle) -> String;
}

/// Drops all styling and stores the bare token
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDecorator;

impl Decorate for PlainDecorator {
    fn decorate(&self, token: char, _style: &TokenStyle) -> String {
        token.to_string()
    }
}

//! `#RRGGBB` color literals.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color must start with `#`")]
    MissingHash,

    #[error("expected 6 hex digits after `#`, found {0}")]
    Length(usize),

    #[error("`{0}` is not a hex digit")]
    NotHex(char),
}

/// An sRGB color written as `#` followed by exactly 6 hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (digits in either case).
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let digits = s.strip_prefix('#').ok_or(ColorError::MissingHash)?;

        if let Some(c) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColorError::NotHex(c));
        }
        if digits.len() != 6 {
            return Err(ColorError::Length(digits.len()));
        }

        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        match (channel(0), channel(2), channel(4)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Self::new(r, g, b)),
            // unreachable after the digit check above
            _ => Err(ColorError::Length(digits.len())),
        }
    }

    /// Expand CSS shorthand `#rgb` to `#rrggbb`, if `s` is one.
    pub fn expand_shorthand(s: &str) -> Option<String> {
        let digits = s.strip_prefix('#')?;
        if digits.len() != 3 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let mut out = String::with_capacity(7);
        out.push('#');
        for c in digits.chars() {
            out.push(c);
            out.push(c);
        }
        Some(out)
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for HexColor {
    type Error = ColorError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

use std::{fmt, str::FromStr};

use crate::error::EditorError;

/// A single cell colour. Colours are opaque characters; no palette is enforced.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color(pub char);

impl Color {
    /// Background colour every cell starts with.
    pub const WHITE: Color = Color('O');

    pub fn ch(self) -> char {
        self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

impl From<char> for Color {
    fn from(ch: char) -> Self {
        Color(ch)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Color {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(Color(ch)),
            (None, _) => Err(EditorError::malformed(s, "missing color")),
            _ => Err(EditorError::malformed(
                s,
                "color must be a single character",
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_char() {
        assert_eq!("A".parse::<Color>().unwrap(), Color('A'));
        assert_eq!("é".parse::<Color>().unwrap(), Color('é'));
    }

    #[test]
    fn rejects_multi_char_tokens() {
        assert!(matches!(
            "AB".parse::<Color>(),
            Err(EditorError::MalformedCommand { .. })
        ));
        assert!("".parse::<Color>().is_err());
    }

    #[test]
    fn default_is_white() {
        assert_eq!(Color::default(), Color('O'));
    }
}

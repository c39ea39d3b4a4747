use serde::{Deserialize, Serialize};

/// Angular unit selected by the format-specifier prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    Radians,
    Degrees,
    Gradians,
    /// Degrees-minutes-seconds; always rendered with its fixed punctuation
    Dms,
}

impl Unit {
    /// Unit used when a specifier carries no unit prefix
    pub const DEFAULT: Unit = Unit::Radians;

    /// Map a specifier tag character to its unit
    pub fn from_tag(tag: char) -> Option<Unit> {
        match tag {
            'r' => Some(Unit::Radians),
            'd' => Some(Unit::Degrees),
            'g' => Some(Unit::Gradians),
            'D' => Some(Unit::Dms),
            _ => None,
        }
    }

    /// Letter form appended by the `u` display mode
    pub fn letter(self) -> &'static str {
        match self {
            Unit::Radians => "r",
            Unit::Degrees => "d",
            Unit::Gradians => "g",
            Unit::Dms => "D",
        }
    }

    /// Symbol glyph appended by the `U` display mode
    ///
    /// DMS has no single symbol; its layout carries the degree, minute and
    /// second marks itself.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            Unit::Radians => Some("rad"),
            Unit::Degrees => Some("\u{00B0}"),
            Unit::Gradians => Some("gon"),
            Unit::Dms => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_lookup() {
        assert_eq!(Unit::from_tag('r'), Some(Unit::Radians));
        assert_eq!(Unit::from_tag('d'), Some(Unit::Degrees));
        assert_eq!(Unit::from_tag('g'), Some(Unit::Gradians));
        assert_eq!(Unit::from_tag('D'), Some(Unit::Dms));
        assert_eq!(Unit::from_tag('x'), None);
        assert_eq!(Unit::from_tag('R'), None);
    }

    #[test]
    fn test_symbol_table() {
        assert_eq!(Unit::Radians.symbol(), Some("rad"));
        assert_eq!(Unit::Degrees.symbol(), Some("°"));
        assert_eq!(Unit::Gradians.symbol(), Some("gon"));
        assert_eq!(Unit::Dms.symbol(), None);
    }
}

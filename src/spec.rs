use crate::error::{Error, Result};
use crate::unit::Unit;

/// How the unit marker is appended after the rendered number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitDisplay {
    /// No unit text
    #[default]
    None,
    /// Letter form, e.g. `d`
    Letter,
    /// Symbol form, e.g. `°`
    Symbol,
}

/// A parsed angle format specifier
///
/// Holds borrowed views into the specifier text. A specifier is parsed fresh
/// on every render call and never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatSpec<'a> {
    /// Unit to render in
    pub unit: Unit,
    /// Whether and how to append a unit marker
    pub display: UnitDisplay,
    /// Outer fill/align/width spec applied to the composed output
    pub alignment: &'a str,
    /// Numeric sub-spec applied to the value (seconds only, for DMS)
    pub number: &'a str,
}

impl<'a> FormatSpec<'a> {
    /// Parse a specifier left to right
    ///
    /// Fixed field order: unit prefix, unit-display suffix, alignment paren
    /// block, remainder as the numeric sub-spec. The display suffix is
    /// stripped before the paren scan, so a trailing `u`/`U` after the
    /// closing paren is found and the alignment text itself is never
    /// scanned for display characters. Absent fields fall back to defaults;
    /// only a bad unit tag or an unmatched `(` is an error.
    pub fn parse(spec: &'a str) -> Result<FormatSpec<'a>> {
        let mut rest = spec;

        let mut unit = Unit::DEFAULT;
        let mut chars = rest.chars();
        if let Some(tag) = chars.next()
            && chars.next() == Some(':')
        {
            unit = Unit::from_tag(tag).ok_or_else(|| Error::InvalidUnit {
                tag,
                spec: spec.to_string(),
            })?;
            rest = &rest[tag.len_utf8() + 1..];
        }

        let mut display = UnitDisplay::None;
        match rest.chars().next_back() {
            Some('u') => {
                display = UnitDisplay::Letter;
                rest = &rest[..rest.len() - 1];
            }
            Some('U') => {
                display = UnitDisplay::Symbol;
                rest = &rest[..rest.len() - 1];
            }
            _ => {}
        }

        let mut alignment = "";
        if let Some(inner) = rest.strip_prefix('(') {
            let end = inner.find(')').ok_or_else(|| Error::UnmatchedAlignment {
                spec: spec.to_string(),
            })?;
            alignment = &inner[..end];
            rest = &inner[end + 1..];
        }

        Ok(FormatSpec {
            unit,
            display,
            alignment,
            number: rest,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_spec_defaults() {
        let spec = FormatSpec::parse("").unwrap();
        assert_eq!(spec.unit, Unit::Radians);
        assert_eq!(spec.display, UnitDisplay::None);
        assert_eq!(spec.alignment, "");
        assert_eq!(spec.number, "");
    }

    #[test]
    fn test_unit_prefix() {
        assert_eq!(FormatSpec::parse("r:").unwrap().unit, Unit::Radians);
        assert_eq!(FormatSpec::parse("d:").unwrap().unit, Unit::Degrees);
        assert_eq!(FormatSpec::parse("g:").unwrap().unit, Unit::Gradians);
        assert_eq!(FormatSpec::parse("D:").unwrap().unit, Unit::Dms);
    }

    #[test]
    fn test_missing_unit_prefix_defaults_to_radians() {
        let spec = FormatSpec::parse(".2f").unwrap();
        assert_eq!(spec.unit, Unit::Radians);
        assert_eq!(spec.number, ".2f");
    }

    #[test]
    fn test_display_suffix() {
        assert_eq!(FormatSpec::parse("u").unwrap().display, UnitDisplay::Letter);
        assert_eq!(FormatSpec::parse("U").unwrap().display, UnitDisplay::Symbol);
        let spec = FormatSpec::parse("d:.3U").unwrap();
        assert_eq!(spec.display, UnitDisplay::Symbol);
        assert_eq!(spec.number, ".3");
    }

    #[test]
    fn test_alignment_block() {
        let spec = FormatSpec::parse("d:(>10).2U").unwrap();
        assert_eq!(spec.unit, Unit::Degrees);
        assert_eq!(spec.alignment, ">10");
        assert_eq!(spec.number, ".2");
        assert_eq!(spec.display, UnitDisplay::Symbol);
    }

    #[test]
    fn test_display_found_after_closing_paren() {
        // the alignment text is consumed as a block, not scanned for u/U
        let spec = FormatSpec::parse("(^12)u").unwrap();
        assert_eq!(spec.alignment, "^12");
        assert_eq!(spec.display, UnitDisplay::Letter);
        assert_eq!(spec.number, "");
    }

    #[test]
    fn test_invalid_unit_tag() {
        let err = FormatSpec::parse("x:").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidUnit {
                tag: 'x',
                spec: "x:".to_string()
            }
        );
        assert!(err.to_string().contains("x:"));
    }

    #[test]
    fn test_unmatched_alignment_paren() {
        let err = FormatSpec::parse("d:(>10").unwrap_err();
        assert_eq!(
            err,
            Error::UnmatchedAlignment {
                spec: "d:(>10".to_string()
            }
        );
        assert!(err.to_string().contains("d:(>10"));
    }

    #[test]
    fn test_single_char_spec_is_not_a_unit_prefix() {
        // no ":" in second position, so these are number specs
        let spec = FormatSpec::parse("5").unwrap();
        assert_eq!(spec.unit, Unit::Radians);
        assert_eq!(spec.number, "5");

        let spec = FormatSpec::parse("d").unwrap();
        assert_eq!(spec.unit, Unit::Radians);
        assert_eq!(spec.number, "d");
    }
}

//! Rendering of an [`Angle`] through a parsed [`FormatSpec`].
//!
//! The numeric sub-spec and the outer alignment spec follow the usual
//! `[[fill]align][sign][0][width][.precision][type]` mini-language. Rust's
//! `format!` cannot take its flags at runtime, so the two specs are parsed
//! here and mapped onto the native `Display`/`LowerExp`/`UpperExp`
//! formatting plus an explicit padding pass.

use crate::angle::Angle;
use crate::error::{Error, Result};
use crate::spec::{FormatSpec, UnitDisplay};
use crate::unit::Unit;

/// Produce the final string for an angle and a parsed specifier
pub(crate) fn render(angle: Angle, spec: &FormatSpec) -> Result<String> {
    let composed = match spec.unit {
        Unit::Dms => {
            let (degrees, minutes, seconds) = angle.to_dms();
            let seconds = format_number(seconds, spec.number)?;
            // units are always shown here, otherwise the output is ambiguous
            format!("{}\u{00B0} {}' {}\"", degrees as i64, minutes as i64, seconds)
        }
        unit => {
            let value = match unit {
                Unit::Degrees => angle.to_degrees(),
                Unit::Gradians => angle.to_gradians(),
                _ => angle.to_radians(),
            };
            let number = format_number(value, spec.number)?;
            let marker = match spec.display {
                UnitDisplay::None => "",
                UnitDisplay::Letter => unit.letter(),
                UnitDisplay::Symbol => unit.symbol().unwrap_or(""),
            };
            format!("{number}{marker}")
        }
    };
    apply_alignment(&composed, spec.alignment)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
    Center,
    /// Pad between the sign and the digits (`=`, or the `0` flag)
    AfterSign,
}

fn align_of(c: char) -> Option<Align> {
    match c {
        '<' => Some(Align::Left),
        '>' => Some(Align::Right),
        '^' => Some(Align::Center),
        '=' => Some(Align::AfterSign),
        _ => None,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sign {
    /// Sign only for negative values
    Minus,
    /// Sign for both positive and negative values
    Plus,
    /// Leading space for non-negative values
    Space,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    /// Native `Display` rendering, precision-aware
    Plain,
    /// Fixed point, default precision 6; `F` uppercases inf/nan
    Fixed { upper: bool },
    /// Scientific notation via `LowerExp`/`UpperExp`
    Exp { upper: bool },
    /// Value times 100, fixed point, with a trailing `%`
    Percent,
}

/// Parsed numeric sub-spec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumberSpec {
    fill: char,
    align: Option<Align>,
    sign: Sign,
    width: usize,
    precision: Option<usize>,
    kind: Kind,
}

impl NumberSpec {
    fn parse(spec: &str) -> Result<NumberSpec> {
        let err = |reason: &str| Error::NumberSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        let mut out = NumberSpec {
            fill: ' ',
            align: None,
            sign: Sign::Minus,
            width: 0,
            precision: None,
            kind: Kind::Plain,
        };
        let mut rest = spec;

        let mut chars = rest.chars();
        match (chars.next(), chars.next()) {
            (Some(fill), Some(align)) if align_of(align).is_some() => {
                out.fill = fill;
                out.align = align_of(align);
                rest = &rest[fill.len_utf8() + 1..];
            }
            (Some(align), _) if align_of(align).is_some() => {
                out.align = align_of(align);
                rest = &rest[1..];
            }
            _ => {}
        }

        match rest.chars().next() {
            Some('+') => {
                out.sign = Sign::Plus;
                rest = &rest[1..];
            }
            Some('-') => {
                out.sign = Sign::Minus;
                rest = &rest[1..];
            }
            Some(' ') => {
                out.sign = Sign::Space;
                rest = &rest[1..];
            }
            _ => {}
        }

        // a leading zero means zero fill after the sign, unless an explicit
        // fill/align was given
        if let Some(stripped) = rest.strip_prefix('0') {
            if out.align.is_none() {
                out.fill = '0';
                out.align = Some(Align::AfterSign);
            }
            rest = stripped;
        }

        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        if end > 0 {
            out.width = rest[..end].parse().map_err(|_| err("width out of range"))?;
            rest = &rest[end..];
        }

        if let Some(stripped) = rest.strip_prefix('.') {
            let end = stripped
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(stripped.len());
            if end == 0 {
                return Err(err("'.' must be followed by a precision"));
            }
            out.precision = Some(
                stripped[..end]
                    .parse()
                    .map_err(|_| err("precision out of range"))?,
            );
            rest = &stripped[end..];
        }

        out.kind = match rest {
            "" => Kind::Plain,
            "f" => Kind::Fixed { upper: false },
            "F" => Kind::Fixed { upper: true },
            "e" => Kind::Exp { upper: false },
            "E" => Kind::Exp { upper: true },
            "%" => Kind::Percent,
            _ => return Err(err("unsupported type or trailing characters")),
        };
        Ok(out)
    }
}

/// Format a value through the numeric sub-spec
fn format_number(value: f64, spec: &str) -> Result<String> {
    let spec = NumberSpec::parse(spec)?;

    let value = match spec.kind {
        Kind::Percent => value * 100.0,
        _ => value,
    };
    let negative = value.is_sign_negative() && !value.is_nan();
    let magnitude = value.abs();

    let body = match spec.kind {
        Kind::Plain => match spec.precision {
            Some(p) => format!("{magnitude:.p$}"),
            None => magnitude.to_string(),
        },
        Kind::Fixed { upper } => {
            let p = spec.precision.unwrap_or(6);
            let s = format!("{magnitude:.p$}");
            if upper { s.to_uppercase() } else { s }
        }
        Kind::Exp { upper: false } => match spec.precision {
            Some(p) => format!("{magnitude:.p$e}"),
            None => format!("{magnitude:e}"),
        },
        Kind::Exp { upper: true } => match spec.precision {
            Some(p) => format!("{magnitude:.p$E}"),
            None => format!("{magnitude:E}"),
        },
        Kind::Percent => {
            let p = spec.precision.unwrap_or(6);
            format!("{magnitude:.p$}%")
        }
    };

    let sign = if negative {
        "-"
    } else {
        match spec.sign {
            Sign::Plus => "+",
            Sign::Space => " ",
            Sign::Minus => "",
        }
    };
    Ok(pad(
        sign,
        &body,
        spec.fill,
        spec.align.unwrap_or(Align::Right),
        spec.width,
    ))
}

/// Parsed outer alignment spec: `[[fill]align][width]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct AlignSpec {
    fill: char,
    align: Align,
    width: usize,
}

impl AlignSpec {
    fn parse(spec: &str) -> Result<AlignSpec> {
        let err = |reason: &str| Error::AlignSpec {
            spec: spec.to_string(),
            reason: reason.to_string(),
        };

        let mut out = AlignSpec {
            fill: ' ',
            align: Align::Left,
            width: 0,
        };
        let mut rest = spec;

        let mut align = None;
        let mut chars = rest.chars();
        match (chars.next(), chars.next()) {
            (Some(fill), Some(c)) if align_of(c).is_some() => {
                out.fill = fill;
                align = align_of(c);
                rest = &rest[fill.len_utf8() + 1..];
            }
            (Some(c), _) if align_of(c).is_some() => {
                align = align_of(c);
                rest = &rest[1..];
            }
            _ => {}
        }
        if align == Some(Align::AfterSign) {
            return Err(err("'=' alignment only applies to numbers"));
        }
        out.align = align.unwrap_or(Align::Left);

        if !rest.is_empty() {
            out.width = rest.parse().map_err(|_| err("expected a width"))?;
        }
        Ok(out)
    }
}

/// Apply the outer fill/align/width spec to the composed output
fn apply_alignment(text: &str, spec: &str) -> Result<String> {
    if spec.is_empty() {
        return Ok(text.to_string());
    }
    let spec = AlignSpec::parse(spec)?;
    Ok(pad("", text, spec.fill, spec.align, spec.width))
}

/// Pad `sign + body` out to `width` characters
///
/// Width counts characters, not bytes; the degree sign is two bytes.
fn pad(sign: &str, body: &str, fill: char, align: Align, width: usize) -> String {
    let len = sign.chars().count() + body.chars().count();
    if len >= width {
        return format!("{sign}{body}");
    }
    let missing = width - len;
    let fill_with = |count: usize| fill.to_string().repeat(count);
    match align {
        Align::Left => format!("{sign}{body}{}", fill_with(missing)),
        Align::Right => format!("{}{sign}{body}", fill_with(missing)),
        Align::AfterSign => format!("{sign}{}{body}", fill_with(missing)),
        Align::Center => {
            let left = missing / 2;
            format!("{}{sign}{body}{}", fill_with(left), fill_with(missing - left))
        }
    }
}

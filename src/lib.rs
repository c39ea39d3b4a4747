//! anglefmt - Planar angles with a format-specifier mini-language
//!
//! An [`Angle`] wraps a single `f64` stored in radians. Unit-specific
//! constructors convert at creation time, and conversion accessors read the
//! angle back in radians, degrees, gradians or degrees-minutes-seconds.
//!
//! Rendering goes through [`Angle::format`], driven by a small specifier
//! grammar where every field is optional:
//!
//! ```text
//! angle_spec  := [ unit ":" ] [ "(" alignment ")" ] [ number ] [ display ]
//! unit        := "r" | "d" | "g" | "D"
//! ```
//!
//! The `number` field formats the numeric value (precision, sign, width);
//! the parenthesized `alignment` field aligns the whole composed output,
//! unit marker included; `u`/`U` append the unit as a letter or a symbol.
//!
//! # Example
//!
//! ```
//! use anglefmt::Angle;
//!
//! let angle = Angle::from_degrees(90.0);
//! assert_eq!(angle.format("d:U")?, "90°");
//! assert_eq!(angle.format("d:(>10).2U")?, "    90.00°");
//! assert_eq!(angle.format("D:")?, "90° 0' 0\"");
//! # Ok::<(), anglefmt::Error>(())
//! ```
//!
//! Formatting is a pure function of the angle and the specifier text; the
//! specifier is parsed fresh on every call and angles are `Copy`, so the
//! same angle can be formatted from any number of threads.

pub mod error;

mod angle;
mod render;
mod spec;
mod unit;

pub use angle::{Angle, RADIANS_TO_DEGREES, RADIANS_TO_GRADIANS};
pub use error::{Error, Result};
pub use spec::{FormatSpec, UnitDisplay};
pub use unit::Unit;

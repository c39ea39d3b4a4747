use std::f64::consts::TAU;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::render;
use crate::spec::FormatSpec;

/// Coefficient for converting radians to degrees
pub const RADIANS_TO_DEGREES: f64 = 360.0 / TAU;

/// Coefficient for converting radians to gradians
pub const RADIANS_TO_GRADIANS: f64 = 400.0 / TAU;

/// A planar angle, stored in radians
///
/// Constructors taking other units convert at creation time, so the wrapped
/// value is always radians regardless of how the angle was built. Angles are
/// immutable; formatting never changes the stored value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Angle(f64);

impl Angle {
    /// Create an angle from a value in radians
    pub fn from_radians(value: f64) -> Angle {
        Angle(value)
    }

    /// Create an angle from a value in degrees
    pub fn from_degrees(value: f64) -> Angle {
        Angle(value / RADIANS_TO_DEGREES)
    }

    /// Create an angle from a value in gradians
    pub fn from_gradians(value: f64) -> Angle {
        Angle(value / RADIANS_TO_GRADIANS)
    }

    /// Create an angle from degrees, minutes and seconds
    pub fn from_dms(degrees: f64, minutes: f64, seconds: f64) -> Angle {
        Angle::from_degrees(degrees + minutes / 60.0 + seconds / 3600.0)
    }

    /// The angle in radians
    pub fn to_radians(self) -> f64 {
        self.0
    }

    /// The angle in degrees
    pub fn to_degrees(self) -> f64 {
        self.0 * RADIANS_TO_DEGREES
    }

    /// The angle in gradians
    pub fn to_gradians(self) -> f64 {
        self.0 * RADIANS_TO_GRADIANS
    }

    /// The angle as a (degrees, minutes, seconds) triple
    ///
    /// Degrees and minutes are integral; seconds keeps the fraction. The
    /// split uses floor division, so a negative angle carries its sign on
    /// the degrees while minutes and seconds stay in `[0, 60)`.
    pub fn to_dms(self) -> (f64, f64, f64) {
        let total = self.to_degrees() * 3600.0;
        // rem_euclid leaves -0.0 for an exact negative multiple; adding
        // zero normalizes it so minutes and seconds stay in [0, 60)
        let seconds = total.rem_euclid(60.0) + 0.0;
        let minutes = total.div_euclid(60.0);
        let degrees = minutes.div_euclid(60.0);
        let minutes = minutes.rem_euclid(60.0) + 0.0;
        (degrees, minutes, seconds)
    }

    /// Render the angle according to a format specifier
    ///
    /// The specifier grammar, every field optional:
    ///
    /// ```text
    /// angle_spec  := [ unit ":" ] [ "(" alignment ")" ] [ number ] [ display ]
    /// unit        := "r" | "d" | "g" | "D"
    /// alignment   := fill/align/width spec for the whole output
    /// number      := fill/align/sign/width/precision/type spec for the value
    /// display     := "u" (letter form) | "U" (symbol form)
    /// ```
    ///
    /// With no unit prefix the angle renders in radians. For `D`
    /// (degrees-minutes-seconds) the number spec applies only to the
    /// seconds, and the degree, minute and second marks are always shown.
    ///
    /// # Examples
    ///
    /// ```
    /// use anglefmt::Angle;
    ///
    /// let angle = Angle::from_degrees(45.5);
    /// assert_eq!(angle.format("d:U")?, "45.5°");
    /// assert_eq!(angle.format("D:")?, "45° 30' 0\"");
    /// assert_eq!(angle.format("d:(>10).2U")?, "    45.50°");
    /// # Ok::<(), anglefmt::Error>(())
    /// ```
    pub fn format(self, spec: &str) -> Result<String> {
        let parsed = FormatSpec::parse(spec)?;
        render::render(self, &parsed)
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

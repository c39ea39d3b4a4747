use thiserror::Error;

/// Result type for anglefmt operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while parsing or applying an angle format specifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The character before the `:` unit separator is not a recognized
    /// unit tag (`r`, `d`, `g` or `D`)
    #[error("invalid angle format specifier '{spec}': '{tag}' is not a valid unit tag")]
    InvalidUnit { tag: char, spec: String },

    /// A `(` alignment opener has no matching `)`
    #[error("invalid angle format specifier '{spec}': unmatched '(' in alignment")]
    UnmatchedAlignment { spec: String },

    /// The numeric sub-spec could not be interpreted
    #[error("invalid number format '{spec}': {reason}")]
    NumberSpec { spec: String, reason: String },

    /// The outer alignment spec could not be interpreted
    #[error("invalid alignment format '{spec}': {reason}")]
    AlignSpec { spec: String, reason: String },
}

//! Input validation errors.

use std::fmt;

use thiserror::Error;

/// Names the argument that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// The page the user is on.
    CurrentPage,
    /// The number of pages in the dataset.
    TotalPages,
    /// Pages shown on each side of the current page.
    SiblingCount,
}

impl Field {
    /// Returns the `snake_case` argument name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CurrentPage => "current_page",
            Self::TotalPages => "total_pages",
            Self::SiblingCount => "sibling_count",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a caller breaks the calculator's input contract.
///
/// These are programming errors on the caller's side. They are never
/// clamped into a best guess.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was negative, or not an integer at all.
    #[error("invalid {field}: got '{value}', expected {expected}")]
    InvalidInput {
        /// Which argument was rejected.
        field: Field,
        /// The offending value as given.
        value: String,
        /// What the argument must be.
        expected: &'static str,
    },
}

impl Error {
    pub(crate) fn negative(field: Field, value: i64) -> Self {
        Self::InvalidInput {
            field,
            value: value.to_string(),
            expected: "a non-negative integer",
        }
    }

    pub(crate) fn not_an_integer(field: Field, value: &str) -> Self {
        Self::InvalidInput {
            field,
            value: value.to_string(),
            expected: "an integer",
        }
    }

    /// Returns the argument that failed validation.
    pub const fn field(&self) -> Field {
        match self {
            Self::InvalidInput { field, .. } => *field,
        }
    }
}

/// Result type for page range operations.
pub type Result<T> = std::result::Result<T, Error>;

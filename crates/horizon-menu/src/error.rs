//! Error types for menu items and theme configuration.

/// Result type alias for list selector operations.
pub type Result<T> = std::result::Result<T, ListSelectorError>;

/// Errors returned by [`ListSelector`](crate::ListSelector) operations.
///
/// Every error is reported before any state is touched, so a failed call
/// leaves the selector exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListSelectorError {
    /// The operation needs at least one item.
    #[error("The list selector has no items")]
    InvalidState,

    /// An index or insert position lies outside the valid range.
    #[error("Index {index} is out of range for {len} items")]
    OutOfRange { index: i64, len: usize },

    /// The requested item is not part of the collection.
    #[error("The item is not present in the list selector")]
    NotFound,

    /// An item value was required but none was given.
    #[error("An item is required but none was provided")]
    InvalidArgument,
}

impl ListSelectorError {
    /// Create an out-of-range error.
    pub fn out_of_range(index: impl Into<i64>, len: usize) -> Self {
        Self::OutOfRange {
            index: index.into(),
            len,
        }
    }
}

/// Errors that can occur while loading a [`MenuTheme`](crate::MenuTheme).
#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    /// The TOML document could not be parsed.
    #[error("Theme parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A color field did not hold a valid hex color.
    #[error("Invalid color '{value}' for '{field}'")]
    InvalidColor { field: String, value: String },
}

impl ThemeError {
    /// Create an invalid color error.
    pub fn invalid_color(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            field: field.into(),
            value: value.into(),
        }
    }
}

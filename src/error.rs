//! Error types for the color and theme engine.
//!
//! Every fallible library operation returns [`Result`]. Conversions are
//! deterministic: the same input always fails the same way, so nothing here
//! is retryable.

use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the color and theme engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A color string did not match the strict `#RRGGBB` pattern.
    #[error("invalid color format '{value}': expected '#' followed by 6 hex digits")]
    InvalidColorFormat {
        /// The offending input, verbatim.
        value: String,
    },

    /// A palette was built from a key/value map that lacks required keys.
    #[error("incomplete palette: missing required key(s) {}", missing.join(", "))]
    IncompletePalette {
        /// Names of the missing required keys, in palette order.
        missing: Vec<String>,
    },

    /// A harmony strategy name was not recognized.
    #[error("unknown harmony strategy '{name}': expected complementary, analogous, triadic or monochromatic")]
    UnknownHarmony {
        /// The name that failed to parse.
        name: String,
    },

    /// A pixel buffer's length does not match its declared dimensions.
    #[error("invalid pixel buffer: {width}x{height} RGBA needs {expected} bytes, got {actual}")]
    InvalidPixelBuffer {
        /// Declared width in pixels.
        width: u32,
        /// Declared height in pixels.
        height: u32,
        /// Expected byte length (`width * height * 4`).
        expected: usize,
        /// Actual byte length.
        actual: usize,
    },

    /// An encoded image could not be decoded into pixels.
    #[error("failed to decode image: {0}")]
    ImageDecode(String),

    /// A theme patch did not match the patch shape.
    #[error("invalid theme patch: {0}")]
    InvalidPatch(String),
}

impl Error {
    /// Creates an [`Error::InvalidColorFormat`] for the given input.
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColorFormat {
            value: value.into(),
        }
    }

    /// Returns true for errors caused by user-supplied values (as opposed to
    /// undecodable files).
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        !matches!(self, Self::ImageDecode(_))
    }
}

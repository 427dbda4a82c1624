// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    Io(String),
    Config(String),
    Gallery(String),
    Lightbox(LightboxError),
    Render(RenderError),
}

/// Precondition failures raised by the lightbox controller.
///
/// Navigation (`next`/`previous`) wraps and can never fail; only an explicit
/// `open` with a bad index ends up here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxError {
    /// The gallery holds no artworks, so no index is valid.
    EmptyGallery,

    /// The requested index lies outside `[0, count)`.
    IndexOutOfRange { index: usize, count: usize },
}

impl LightboxError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LightboxError::EmptyGallery => "error-lightbox-empty-gallery",
            LightboxError::IndexOutOfRange { .. } => "error-lightbox-index-out-of-range",
        }
    }
}

/// Failures reported by a drawing surface. Any of these stops the render loop.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The surface can no longer be drawn to.
    SurfaceUnavailable,

    /// A shape had non-finite coordinates or a negative radius.
    InvalidGeometry { x: f32, y: f32, radius: f32 },
}

impl RenderError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            RenderError::SurfaceUnavailable => "error-render-surface-unavailable",
            RenderError::InvalidGeometry { .. } => "error-render-invalid-geometry",
        }
    }
}

impl fmt::Display for LightboxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightboxError::EmptyGallery => write!(f, "Gallery is empty"),
            LightboxError::IndexOutOfRange { index, count } => {
                write!(f, "Artwork index {} out of range (count {})", index, count)
            }
        }
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::SurfaceUnavailable => write!(f, "Drawing surface unavailable"),
            RenderError::InvalidGeometry { x, y, radius } => {
                write!(f, "Invalid circle at ({}, {}) with radius {}", x, y, radius)
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Gallery(e) => write!(f, "Gallery Error: {}", e),
            Error::Lightbox(e) => write!(f, "Lightbox Error: {}", e),
            Error::Render(e) => write!(f, "Render Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<LightboxError> for Error {
    fn from(err: LightboxError) -> Self {
        Error::Lightbox(err)
    }
}

impl From<RenderError> for Error {
    fn from(err: RenderError) -> Self {
        Error::Render(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

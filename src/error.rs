//! Error types for the renderer, the attribute store and raster export.

use thiserror::Error;

/// Errors raised when parsing a color string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid hex color '{value}': expected #rrggbb")]
    InvalidHex { value: String },
}

/// Configuration errors: values outside a closed enumeration.
///
/// These indicate a programming or data error upstream of the renderer and are
/// never meant to be shown to an end user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown hair texture '{0}' (expected one of 4C, 4B, 4A, 3C, 3B, 3A)")]
    UnknownTexture(String),
}

/// Errors raised by the dot-path attribute store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unknown attribute path '{0}'")]
    UnknownPath(String),

    #[error("invalid value for '{path}': {source}")]
    InvalidValue {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised while turning a scene into a downloadable image.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to parse scene markup: {0}")]
    Markup(#[from] resvg::usvg::Error),

    #[error("cannot allocate a {width}x{height} drawing surface")]
    Surface { width: u32, height: u32 },

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("failed to format export timestamp: {0}")]
    Timestamp(String),
}

//! Crate-level error types.

use std::fmt;

/// Errors produced by the rendering core.
#[derive(Debug)]
pub enum RenderError {
    /// A referenced texture file could not be loaded or decoded. Fatal
    /// for the frame that referenced it — the caller should abort
    /// rather than substitute a fallback color.
    TextureLoad {
        /// The texture filename that failed to load.
        filename: String,
        /// The underlying I/O or decode failure.
        source: std::io::Error,
    },
    /// Generic I/O failure (config files, output images).
    Io(std::io::Error),
    /// `RenderConfig` TOML parsing/serialization failure.
    ConfigParse(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TextureLoad { filename, source } => {
                write!(f, "failed to load texture \"{filename}\": {source}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TextureLoad { source, .. } | Self::Io(source) => Some(source),
            Self::ConfigParse(_) => None,
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

//! Error types with diagnostics using miette
//!
//! Per-spec failures (`InvalidSize` through `Write`) are collected into the
//! batch report; `DirectoryCreation` aborts the whole batch.

use camino::Utf8PathBuf;
use miette::Diagnostic;
use thiserror::Error;

use crate::types::NumericError;

/// Errors raised while computing, drawing or persisting an icon
#[derive(Error, Diagnostic, Debug)]
pub enum IconError {
    #[error("invalid canvas size: {value}")]
    #[diagnostic(
        code(clockback::geometry::invalid_size),
        help("canvas sizes must be finite and greater than zero")
    )]
    InvalidSize {
        value: f64,
        #[source]
        reason: NumericError,
    },

    #[error("invalid icon filename: {filename:?}")]
    #[diagnostic(
        code(clockback::batch::invalid_filename),
        help("filenames must be a single path component, like `icon-16.png`")
    )]
    InvalidFilename { filename: String },

    #[error("cannot allocate a {size}x{size} canvas")]
    #[diagnostic(code(clockback::surface::allocation))]
    CanvasAllocation { size: u32 },

    #[error("degenerate {what} cannot be drawn")]
    #[diagnostic(code(clockback::surface::invalid_shape))]
    InvalidShape { what: &'static str },

    #[error("PNG encoding failed: {message}")]
    #[diagnostic(code(clockback::surface::encode))]
    Encode { message: String },

    #[error("cannot write {path}")]
    #[diagnostic(code(clockback::batch::write))]
    Write {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot create output directory {path}")]
    #[diagnostic(
        code(clockback::batch::directory),
        help("check permissions, and that no regular file already uses this path")
    )]
    DirectoryCreation {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IconError {
    /// Whether this error aborts a whole batch rather than a single spec
    pub fn is_fatal(&self) -> bool {
        matches!(self, IconError::DirectoryCreation { .. })
    }
}

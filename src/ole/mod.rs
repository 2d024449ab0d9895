//! OLE 1.0 object decoding.
//!
//! Embedded attachments in legacy reports arrive as OLE 1.0 streams: an
//! "Object Header" wrapping native data, which for the `Package` class is a
//! second structure carrying the original file name and bytes. Only the
//! subset of OLE 1.0 needed for those attachments is implemented here.

/// Bounds-checked little-endian reads over binary payloads
mod binary;

/// Object Header and Package structure decoding
mod package;

// Re-export public types for convenient access
pub use package::{PackagedObject, extract_object_data};

use thiserror::Error;

/// Result type for OLE decoding operations.
pub type OleResult<T> = Result<T, OleError>;

/// Errors raised while decoding an OLE object payload.
///
/// These are per-object failures: the scanner catches them, logs the
/// message, skips the offending object, and resumes scanning.
#[derive(Debug, Clone, Error)]
pub enum OleError {
    /// A fixed-size read ran past the end of the payload.
    #[error("truncated OLE data: needed {needed} bytes at offset {offset}")]
    Truncated { offset: usize, needed: usize },

    /// The Package payload is not an embedded file; the bytes that follow
    /// the discriminator have an undefined layout for other types.
    #[error("OLE package is not an embedded file (found type {0})")]
    UnsupportedPackageType(u16),
}

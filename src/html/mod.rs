//! HTML-side assembly.
//!
//! The general-purpose RTF-to-HTML text rendering is an external concern
//! behind the [`RtfToHtml`] trait; this module owns everything that happens
//! to the rendered output afterwards: stripping document wrappers, splicing
//! the report text into the header/footer frame, and injecting recovered
//! images into the placeholder `<img>` tags.

mod fusion;
mod inject;

// Re-exports
pub use fusion::{fuse, strip_container};
pub use inject::inject_images;

use thiserror::Error;

/// Failure reported by an external renderer invocation.
///
/// Render failures are per-phase and recoverable: the conversion substitutes
/// a placeholder fragment for the failed phase and carries on.
#[derive(Debug, Clone, Error)]
#[error("renderer failed: {0}")]
pub struct RenderError(pub String);

/// Narrow interface to the third-party RTF-to-HTML text renderer.
///
/// The conversion relies on three behaviors of the output: content is
/// wrapped in a `<body>` element, tables render as `<table>...</table>`,
/// and recognized picture tokens render as `<img>` elements in source
/// order. Anything beyond that is opaque.
pub trait RtfToHtml {
    /// Render RTF markup into an HTML document string.
    fn to_html(&self, rtf: &str) -> Result<String, RenderError>;
}

/// Any plain text-to-text function can stand in for the renderer. This is
/// also what makes fusion and injection testable against deterministic
/// stubs.
impl<F> RtfToHtml for F
where
    F: Fn(&str) -> Result<String, RenderError>,
{
    fn to_html(&self, rtf: &str) -> Result<String, RenderError> {
        self(rtf)
    }
}

//! rtfreport - conversion of legacy RTF reports into self-contained HTML
//!
//! This library converts a legacy medical report stored as RTF markup into a
//! single HTML fragment. The report text, the header/footer frame (patient
//! data and signature blocks), and every embedded image are reassembled into
//! one coherent fragment with images inlined as `data:` URIs.
//!
//! # Features
//!
//! - **RTF token reader**: Single-pass, tolerant scanner over raw RTF text
//! - **OLE Package decoder**: Recovers files attached as OLE 1.0 embedded objects
//! - **Bitmap repair**: Synthesizes BMP file headers for raw DIB payloads
//! - **Frame fusion**: Renders header/footer fields as flow content and
//!   splices the report text after the patient-data table
//! - **Image injection**: Replaces renderer `<img>` placeholders with the
//!   recovered images in document order
//!
//! The general-purpose RTF-to-HTML text rendering itself is delegated to an
//! external renderer behind the [`RtfToHtml`] trait; any text-to-text
//! function whose output wraps content in a `<body>` element will do.
//!
//! # Example
//!
//! ```
//! use rtfreport::{RenderError, ReportConverter};
//!
//! // Any `Fn(&str) -> Result<String, RenderError>` can stand in for the
//! // external renderer.
//! let renderer = |_rtf: &str| -> Result<String, RenderError> {
//!     Ok("<html><body><p>report text</p></body></html>".to_string())
//! };
//!
//! let converter = ReportConverter::new(renderer);
//! let result = converter.convert(r"{\rtf1\ansi Hello World!\par}");
//! assert!(!result.html_content.is_empty());
//! assert!(result.images.is_empty());
//! ```
//!
//! A conversion call never fails: malformed embedded objects are skipped and
//! logged, failed render passes degrade to partial output, and the returned
//! [`ExtractionResult`] is always populated.

/// End-to-end conversion pipeline and embedded-object scanning
///
/// This module drives the whole conversion: both render passes, the
/// frame/body fusion, the image scan over the raw source, and the final
/// injection of recovered images.
pub mod extract;

/// HTML-side assembly: renderer interface, fusion, and image injection
pub mod html;

/// Picture classification and bitmap header repair for embedded images
pub mod images;

/// OLE 1.0 object decoding for embedded file attachments
///
/// Legacy reports attach files as OLE 1.0 "Package" objects serialized into
/// `\objdata` destinations. This module strips the Object Header and decodes
/// the Package structure to recover the original file bytes.
pub mod ole;

/// RTF-side text processing: tokenization, hex payloads, frame rewrite
pub mod rtf;

// Re-export the top-level entry points for convenience
pub use extract::{ExtractionResult, ReportConverter};
pub use html::{RenderError, RtfToHtml};

//! End-to-end conversion pipeline.
//!
//! One [`ReportConverter::convert`] call runs five phases over a single
//! document: body render, frame render, fusion, image scan, and injection.
//! The source text is read three independent times (two render passes plus
//! the image scan), each pass with its own state. The call never fails;
//! phases that break are logged and the output degrades to partial content.

mod scan;

use crate::html::{RtfToHtml, fuse, inject_images, strip_container};
use crate::rtf::rewrite_frame_source;
use chrono::Local;
use serde::Serialize;

/// The complete outcome of one conversion call.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractionResult {
    /// Recovered images as data URIs, in source-scan order
    pub images: Vec<String>,
    /// Timestamped progress and recoverable-error messages
    pub logs: Vec<String>,
    /// The fused HTML fragment
    pub html_content: String,
}

/// Substituted for the report text when the body render pass fails.
const BODY_ERROR_FRAGMENT: &str = "<p>[failed to read report text]</p>";

/// Converts legacy RTF reports into self-contained HTML.
///
/// The converter holds nothing but the renderer; calls are independent and
/// share no state, so one converter can serve any number of documents.
pub struct ReportConverter<R> {
    renderer: R,
}

impl<R: RtfToHtml> ReportConverter<R> {
    /// Create a converter around an external RTF-to-HTML renderer.
    #[inline]
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Convert one RTF document into an [`ExtractionResult`].
    ///
    /// Blank input yields an empty result. Otherwise the result is always
    /// populated: a failed render pass degrades to a placeholder or to the
    /// other pass's output, and malformed embedded objects are skipped.
    pub fn convert(&self, rtf: &str) -> ExtractionResult {
        let mut result = ExtractionResult::default();
        if rtf.trim().is_empty() {
            return result;
        }

        // Stray NUL bytes from raw file reads confuse renderers; the token
        // reader skips them on its own, so only the render copies need this.
        let clean = rtf.replace('\0', "");

        // Body pass: the renderer ignores header/footer destinations and
        // yields the report text itself.
        let body_html = match self.renderer.to_html(&clean) {
            Ok(html) => {
                log(&mut result.logs, "Report text extracted.");
                strip_container(&html)
            },
            Err(err) => {
                log(&mut result.logs, &format!("Body render failed: {err}"));
                BODY_ERROR_FRAGMENT.to_string()
            },
        };

        // Frame pass: header/footer introducers rewritten so patient data
        // and signature blocks render as flow content.
        let frame_html = match self.renderer.to_html(&rewrite_frame_source(&clean)) {
            Ok(html) => {
                log(&mut result.logs, "Frame (patient data/signature) extracted.");
                strip_container(&html)
            },
            Err(err) => {
                log(&mut result.logs, &format!("Frame render failed: {err}"));
                String::new()
            },
        };

        if !frame_html.is_empty() {
            if frame_html.contains("</table>") {
                log(&mut result.logs, "Report text spliced after the header table.");
            } else {
                log(&mut result.logs, "No header table found; frame and text joined.");
            }
        }
        result.html_content = fuse(&frame_html, &body_html);

        // Image scan runs over the raw source, never the rewritten copy.
        log(&mut result.logs, "Extracting embedded images...");
        result.images = scan::scan_images(rtf, &mut result.logs);

        if !result.images.is_empty() {
            log(
                &mut result.logs,
                &format!("Applying {} image(s) to the layout...", result.images.len()),
            );
            result.html_content = inject_images(&result.html_content, &result.images);
        }

        result
    }
}

/// Append a timestamped line to the log accumulator.
pub(crate) fn log(logs: &mut Vec<String>, message: &str) {
    logs.push(format!("[{}] {}", Local::now().format("%H:%M:%S"), message));
}

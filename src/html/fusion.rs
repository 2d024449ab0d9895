//! Frame/body fusion via table-boundary splicing.

use memchr::memmem;

const BODY_OPEN: &str = "<body>";
const TABLE_CLOSE: &str = "</table>";

/// Container wrapped around the report text when it is spliced into the
/// frame, so a stylesheet can address it.
const BODY_CONTAINER_OPEN: &str =
    "<div class='report-body' style='margin: 25px 0; padding: 10px 0;'>";

/// Strip the document/body wrapper from renderer output so the fragment can
/// be nested inside another fragment.
///
/// Everything up to and including the first `<body>` marker is dropped;
/// closing body/html markers are removed wherever they appear. Output
/// without a wrapper passes through unchanged.
pub fn strip_container(html: &str) -> String {
    let inner = match memmem::find(html.as_bytes(), BODY_OPEN.as_bytes()) {
        Some(pos) => &html[pos + BODY_OPEN.len()..],
        None => html,
    };
    inner.replace("</body>", "").replace("</html>", "")
}

/// Splice body HTML into frame HTML just after the patient-data table.
///
/// The first `</table>` in the frame is assumed to close the header table,
/// so the report text lands directly under the patient data. A frame
/// without tables is joined to the body with a rule instead; an empty frame
/// (failed render) leaves the body standing alone.
pub fn fuse(frame_html: &str, body_html: &str) -> String {
    if frame_html.is_empty() {
        return body_html.to_string();
    }

    match memmem::find(frame_html.as_bytes(), TABLE_CLOSE.as_bytes()) {
        Some(pos) => {
            let insert_at = pos + TABLE_CLOSE.len();
            let mut fused = String::with_capacity(
                frame_html.len() + body_html.len() + BODY_CONTAINER_OPEN.len() + 8,
            );
            fused.push_str(&frame_html[..insert_at]);
            fused.push_str(BODY_CONTAINER_OPEN);
            fused.push_str(body_html);
            fused.push_str("</div>");
            fused.push_str(&frame_html[insert_at..]);
            fused
        },
        None => format!("{frame_html}<hr/>{body_html}"),
    }
}

//! Structural rewrite of header and footer introducers.
//!
//! The external renderer skips `\header` and `\footer` destinations, so the
//! frame render pass patches their introducers into ordinary paragraph marks
//! first. Applied only to the copy handed to the renderer; the image scan
//! always runs on the unmodified source.

use once_cell::sync::Lazy;
use regex::Regex;

/// `\headery2693`, `\footerx120` and friends: positioning numerals that
/// would leak into the rendered text once the introducer is patched.
static POSITIONING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\(header|footer)[xy]\d+").expect("positioning pattern"));

/// Footer text gets a top border so the signature block renders under a rule.
const FOOTER_INTRODUCER: &str = "\\pard\\brdrt\\brdrs\\brdrw10\\brsp100 ";

/// Rewrite header/footer introducers so the frame render pass treats their
/// content as ordinary flow text.
///
/// The positioning strip must run first: `\headery2693` contains `\header`
/// and would otherwise be corrupted by the introducer replacement.
pub fn rewrite_frame_source(rtf: &str) -> String {
    let cleaned = POSITIONING.replace_all(rtf, "");
    let cleaned = cleaned.replace("\\header", "\\pard");
    cleaned.replace("\\footer", FOOTER_INTRODUCER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_positioning_words() {
        assert_eq!(rewrite_frame_source(r"a\headery2693b"), "ab");
        assert_eq!(rewrite_frame_source(r"a\footerx12\footery100b"), "ab");
    }

    #[test]
    fn header_becomes_plain_paragraph() {
        assert_eq!(rewrite_frame_source(r"{\header Clinic}"), r"{\pard Clinic}");
    }

    #[test]
    fn footer_gets_a_top_border() {
        assert_eq!(
            rewrite_frame_source(r"{\footer Dr. Smith}"),
            r"{\pard\brdrt\brdrs\brdrw10\brsp100  Dr. Smith}"
        );
    }

    #[test]
    fn positioning_is_stripped_before_introducers() {
        // Without the ordering, \headery123 would decay into \pardy123.
        assert_eq!(
            rewrite_frame_source(r"\headery123\header x"),
            r"\pard x"
        );
    }

    #[test]
    fn unrelated_text_passes_through() {
        let rtf = r"{\rtf1\ansi Hello\par}";
        assert_eq!(rewrite_frame_source(rtf), rtf);
    }
}

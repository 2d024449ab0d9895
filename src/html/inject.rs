//! Positional injection of recovered images.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// `<img ... src="...">` with either quote style; group 1 is the src value.
static IMG_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"<img[^>]+src=["']([^"']*)["'][^>]*>"#).expect("img tag pattern"));

/// Inserted when a tag carries no style of its own, so an oversized scan
/// cannot blow up the page layout.
const DEFAULT_STYLE_OPEN: &str =
    "<img style='max-width: 180px; max-height: 120px; display:block;'";

/// Replace the Nth `<img>` tag's src value with the Nth data URI.
///
/// The correspondence is purely positional: the image scan and the external
/// renderer must emit pictures in the same order, and a renderer that emits
/// a different count silently misassigns images. Tags beyond the image
/// count keep their placeholder src.
pub fn inject_images(html: &str, images: &[String]) -> String {
    let mut next = 0usize;

    IMG_TAG
        .replace_all(html, |caps: &Captures| {
            let Some(whole) = caps.get(0) else {
                return String::new();
            };
            let tag = whole.as_str();

            let Some(src) = caps.get(1) else {
                return tag.to_string();
            };
            if next >= images.len() {
                return tag.to_string();
            }

            let start = src.start() - whole.start();
            let end = src.end() - whole.start();
            let mut rebuilt = String::with_capacity(tag.len() + images[next].len());
            rebuilt.push_str(&tag[..start]);
            rebuilt.push_str(&images[next]);
            rebuilt.push_str(&tag[end..]);
            next += 1;

            if !rebuilt.contains("style") {
                rebuilt = rebuilt.replacen("<img", DEFAULT_STYLE_OPEN, 1);
            }
            rebuilt
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uris(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("data:image/png;base64,IMG{i}")).collect()
    }

    #[test]
    fn tags_are_replaced_in_document_order() {
        let html = r#"<p>a</p><img alt="x" src="p0.png"><b>c</b><img alt="y" src='p1.png'>"#;
        let out = inject_images(html, &uris(2));
        assert!(out.contains(r#"src="data:image/png;base64,IMG0""#));
        assert!(out.contains("src='data:image/png;base64,IMG1'"));
        assert!(!out.contains("p0.png"));
        assert!(!out.contains("p1.png"));
    }

    #[test]
    fn surplus_tags_keep_their_placeholder() {
        let html = r#"<img alt="a" src="p0.png"><img alt="b" src="p1.png">"#;
        let out = inject_images(html, &uris(1));
        assert!(out.contains("IMG0"));
        assert!(out.contains(r#"src="p1.png""#));
    }

    #[test]
    fn default_style_is_added_when_missing() {
        let out = inject_images(r#"<img alt="a" src="p.png">"#, &uris(1));
        assert!(out.starts_with(
            "<img style='max-width: 180px; max-height: 120px; display:block;'"
        ));
    }

    #[test]
    fn existing_style_is_preserved() {
        let html = r#"<img style="width:10px" src="p.png">"#;
        let out = inject_images(html, &uris(1));
        assert!(out.contains(r#"style="width:10px""#));
        assert!(!out.contains("max-width"));
    }

    #[test]
    fn no_images_leaves_html_untouched() {
        let html = r#"<img alt="a" src="p.png">"#;
        assert_eq!(inject_images(html, &[]), html);
    }

    #[test]
    fn html_without_tags_is_untouched() {
        assert_eq!(inject_images("<p>plain</p>", &uris(3)), "<p>plain</p>");
    }
}

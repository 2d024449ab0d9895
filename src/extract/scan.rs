//! Single-pass scan for embedded objects and pictures.
//!
//! One tokenizer pass over the raw source recovers every displayable image:
//! OLE `Package` attachments from `\object` groups and picture payloads from
//! `\pict` groups, appended strictly in the order they appear. That order is
//! the contract the injector relies on.

use super::log;
use crate::images::{Picture, PictureFormat};
use crate::ole::{OleResult, PackagedObject, extract_object_data};
use crate::rtf::{RtfReader, RtfToken, decode_hex};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

/// Scan the raw source and return the recovered images as data URIs, in
/// source-scan order.
///
/// Decode failures are per-object: the offending object is logged and
/// skipped, and the scan resumes from the current position.
pub(crate) fn scan_images(source: &str, logs: &mut Vec<String>) -> Vec<String> {
    let mut images = Vec::new();
    let mut tokens = RtfReader::new(source);

    while let Some(token) = tokens.next() {
        match token {
            RtfToken::ControlWord(ref name) if name == "object" => {
                scan_object(&mut tokens, &mut images, logs);
            },
            RtfToken::ControlWord(ref name) if name == "pict" => {
                scan_picture(&mut tokens, &mut images, logs);
            },
            _ => {},
        }
    }

    images
}

/// Handle an `\object` group: only `Package`-class objects carry a
/// recoverable file.
fn scan_object(tokens: &mut RtfReader<'_>, images: &mut Vec<String>, logs: &mut Vec<String>) {
    if !advance_to_control_word(tokens, "objclass") {
        return;
    }
    let Some(class) = next_text(tokens) else {
        return;
    };
    if class.trim() != "Package" {
        return;
    }
    if !advance_to_control_word(tokens, "objdata") {
        return;
    }
    let Some(payload) = next_text(tokens) else {
        return;
    };

    let ole_data = decode_hex(&payload);
    if ole_data.is_empty() {
        return;
    }

    match decode_package(&ole_data) {
        Ok(Some(object)) => {
            // The packaged file carries no declared type; report scans are
            // JPEG in practice.
            images.push(format!(
                "data:image/jpeg;base64,{}",
                BASE64_STANDARD.encode(&object.data)
            ));
            log(logs, &format!("Attachment recovered ({}).", object.display_name));
        },
        Ok(None) => {}, // not an embedded object; nothing to recover
        Err(err) => log(logs, &format!("Skipped embedded object: {err}")),
    }
}

/// Run both decode steps, treating a non-embedded format id as "no file".
fn decode_package(ole_data: &[u8]) -> OleResult<Option<PackagedObject>> {
    let inner = extract_object_data(ole_data)?;
    if inner.is_empty() {
        return Ok(None);
    }
    PackagedObject::decode(&inner).map(Some)
}

/// Handle a `\pict` group: classify the sub-format, then decode and
/// normalize the payload.
fn scan_picture(tokens: &mut RtfReader<'_>, images: &mut Vec<String>, logs: &mut Vec<String>) {
    // Classification stops at the first marker word; payload text reached
    // first means an undeclared format, assumed JPEG.
    let mut format = PictureFormat::Jpeg;
    let mut is_dib = false;
    let mut payload: Option<String> = None;

    for token in tokens.by_ref() {
        match token {
            RtfToken::ControlWord(name) => {
                if let Some(found) = PictureFormat::from_marker(&name) {
                    is_dib = name.starts_with("dibitmap");
                    format = found;
                    break;
                }
            },
            RtfToken::Text(text) => {
                payload = Some(text);
                break;
            },
        }
    }

    // Metafiles cannot be shown in a page; skipped without error.
    if format == PictureFormat::Wmf {
        return;
    }

    let hex = match payload {
        Some(text) => text,
        None => match next_text(tokens) {
            Some(text) => text,
            None => return,
        },
    };
    let data = decode_hex(&hex);
    if data.is_empty() {
        return;
    }

    let picture = Picture { format, is_dib, data };
    if let Some(uri) = picture.into_data_uri() {
        images.push(uri);
        log(logs, &format!("Image recovered ({format})."));
    }
}

/// Advance until a control word with the given name; `false` when the
/// stream ends first.
fn advance_to_control_word(tokens: &mut RtfReader<'_>, word: &str) -> bool {
    tokens.any(|token| matches!(token, RtfToken::ControlWord(ref name) if name == word))
}

/// Advance to the next text token; `None` when the stream ends first.
fn next_text(tokens: &mut RtfReader<'_>) -> Option<String> {
    tokens.find_map(|token| match token {
        RtfToken::Text(text) => Some(text),
        RtfToken::ControlWord(_) => None,
    })
}

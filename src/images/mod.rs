//! Picture classification and payload repair.
//!
//! Pictures embedded in `\pict` destinations declare their sub-format
//! through property control words (`\pngblip`, `\jpegblip`, `\dibitmap0`,
//! `\wmetafile8`). DIB payloads are raw pixel data without a file header and
//! need one synthesized before a browser can display them.

mod dib;

pub use dib::dib_to_bmp;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use std::fmt;

/// Picture sub-format as declared by `\pict` property control words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PictureFormat {
    /// PNG image (`\pngblip`)
    Png,
    /// JPEG image (`\jpegblip`); also the default when no marker appears
    /// before the payload
    #[default]
    Jpeg,
    /// Device-independent bitmap (`\dibitmap`), repaired into a BMP file
    Bmp,
    /// Windows metafile (`\wmetafile`); not displayable in a page
    Wmf,
    /// Unrecognized or undeclared format
    Unknown,
}

impl PictureFormat {
    /// Classify a control word seen after `\pict`.
    ///
    /// Marker words carry numeric parameters in their name (`dibitmap0`,
    /// `wmetafile8`), hence the prefix matching. Returns `None` for property
    /// words that say nothing about the payload format (`picw`, `pich`...).
    pub fn from_marker(name: &str) -> Option<Self> {
        if name.starts_with("dibitmap") {
            Some(PictureFormat::Bmp)
        } else if name.starts_with("png") {
            Some(PictureFormat::Png)
        } else if name.starts_with("jpeg") {
            Some(PictureFormat::Jpeg)
        } else if name.starts_with("wmetafile") {
            Some(PictureFormat::Wmf)
        } else {
            None
        }
    }

    /// MIME type for a data URI, or `None` when the format cannot be shown
    /// in a page.
    pub const fn mime_type(&self) -> Option<&'static str> {
        match self {
            PictureFormat::Png => Some("image/png"),
            PictureFormat::Jpeg => Some("image/jpeg"),
            PictureFormat::Bmp => Some("image/bmp"),
            PictureFormat::Wmf | PictureFormat::Unknown => None,
        }
    }
}

impl fmt::Display for PictureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PictureFormat::Png => "png",
            PictureFormat::Jpeg => "jpeg",
            PictureFormat::Bmp => "bmp",
            PictureFormat::Wmf => "wmf",
            PictureFormat::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// A picture payload recovered from a `\pict` destination.
#[derive(Debug, Clone)]
pub struct Picture {
    /// Declared sub-format
    pub format: PictureFormat,
    /// Whether the payload is a raw DIB needing a synthesized file header
    pub is_dib: bool,
    /// Decoded payload bytes
    pub data: Vec<u8>,
}

impl Picture {
    /// Normalize the payload into a standalone image and encode it as a
    /// data URI.
    ///
    /// DIB payloads get a BMP file header prepended first. Returns `None`
    /// for formats without a displayable MIME type.
    pub fn into_data_uri(self) -> Option<String> {
        let mime = self.format.mime_type()?;
        let bytes = if self.is_dib {
            dib_to_bmp(&self.data)
        } else {
            self.data
        };
        Some(format!(
            "data:{};base64,{}",
            mime,
            BASE64_STANDARD.encode(bytes)
        ))
    }
}

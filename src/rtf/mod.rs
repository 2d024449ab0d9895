//! RTF-side text processing.
//!
//! This module covers everything that touches the raw RTF source before it
//! reaches the external HTML renderer:
//! - **Reader**: Tokenizes RTF input into control words and text runs
//! - **Hex codec**: Decodes the hex-encoded payloads of `\objdata` and
//!   `\pict` destinations
//! - **Rewrite**: Patches header/footer introducers so the frame render
//!   pass shows them as ordinary flow text

mod hex;
mod reader;
mod rewrite;

// Re-exports
pub use hex::{decode_hex, encode_hex};
pub use reader::{RtfReader, RtfToken};
pub use rewrite::rewrite_frame_source;

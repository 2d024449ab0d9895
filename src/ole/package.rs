//! OLE 1.0 Object Header and Package decoding.
//!
//! Layout references: [MS-OLEDS] 2.2 (ObjectHeader, EmbeddedObject) and the
//! undocumented but stable Package stream used by the Windows object
//! packager. All multi-byte integers are little-endian.

use super::binary::ByteReader;
use super::{OleError, OleResult};
use bytes::Bytes;

/// FormatID marking an OLE 1.0 embedded object.
const FORMAT_EMBEDDED_OBJECT: u32 = 2;

/// Package type discriminator for an embedded file payload.
const PACKAGE_TYPE_FILE: u16 = 3;

/// Strip the OLE 1.0 Object Header and return the native data payload.
///
/// Linked objects and presentation streams (FormatID other than 2) carry no
/// recoverable file, so they decode to an empty payload rather than an
/// error. Truncated headers are errors.
pub fn extract_object_data(payload: &[u8]) -> OleResult<Bytes> {
    let mut reader = ByteReader::new(payload);

    reader.read_u32_le()?; // OLEVersion
    let format_id = reader.read_u32_le()?;
    if format_id != FORMAT_EMBEDDED_OBJECT {
        return Ok(Bytes::new());
    }

    reader.skip_length_prefixed_string()?; // class name, e.g. "Package"
    reader.skip_length_prefixed_string()?; // topic name
    reader.skip_length_prefixed_string()?; // item name

    let native_size = reader.read_u32_le()? as usize;
    Ok(Bytes::copy_from_slice(reader.read_bytes(native_size)?))
}

/// An embedded file recovered from an OLE Package stream.
///
/// Owned exclusively by the decode call that produced it; nothing here
/// outlives the enclosing conversion.
#[derive(Debug, Clone)]
pub struct PackagedObject {
    /// Name the packager displayed for the attachment
    pub display_name: String,
    /// Path of the file on the authoring machine
    pub file_path: String,
    /// The embedded file bytes
    pub data: Bytes,
}

impl PackagedObject {
    /// Decode a Package structure from the native data of an embedded object.
    ///
    /// Only type 3 (embedded file) is supported. Any other discriminator is
    /// a hard error: the bytes that follow have a different layout and
    /// reading on would produce garbage.
    pub fn decode(data: &[u8]) -> OleResult<Self> {
        let mut reader = ByteReader::new(data);

        reader.read_u16_le()?; // stream signature
        let display_name = reader.read_ansi_string();
        reader.read_ansi_string(); // icon path
        reader.read_u16_le()?; // icon index

        let kind = reader.read_u16_le()?;
        if kind != PACKAGE_TYPE_FILE {
            return Err(OleError::UnsupportedPackageType(kind));
        }

        reader.read_u32_le()?; // declared size of the remainder, not trusted
        let file_path = reader.read_ansi_string();

        let data_size = reader.read_u32_le()? as usize;
        let data = Bytes::copy_from_slice(reader.read_bytes(data_size)?);

        Ok(Self {
            display_name,
            file_path,
            data,
        })
    }
}

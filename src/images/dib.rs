//! DIB to BMP repair.
//!
//! A DIB carried inside a document is raw pixel data: BITMAPINFOHEADER plus
//! pixels, with no BITMAPFILEHEADER in front. Browsers will not display it
//! until the 14-byte file header is synthesized.

/// BITMAPFILEHEADER length.
const FILE_HEADER_LEN: usize = 14;

/// Pixel-offset fallback when the DIB header size cannot be read: 14-byte
/// file header plus the 40-byte BITMAPINFOHEADER.
const DEFAULT_PIXEL_OFFSET: u32 = 54;

/// Prepend a BITMAPFILEHEADER to a raw DIB payload.
///
/// The pixel-data offset is computed as `14 + dibHeaderSize`, with the
/// header size read from the first four payload bytes. This assumes the
/// palette-less layout of 16/24/32 bpp bitmaps; a paletted DIB would need
/// its color-table size added to the offset, which is not handled here.
pub fn dib_to_bmp(dib: &[u8]) -> Vec<u8> {
    let file_size = FILE_HEADER_LEN + dib.len();

    let pixel_offset = if dib.len() > 4 {
        let header_size = u32::from_le_bytes([dib[0], dib[1], dib[2], dib[3]]);
        (FILE_HEADER_LEN as u32).wrapping_add(header_size)
    } else {
        DEFAULT_PIXEL_OFFSET
    };

    let mut bmp = Vec::with_capacity(file_size);
    bmp.extend_from_slice(b"BM");
    bmp.extend_from_slice(&(file_size as u32).to_le_bytes());
    bmp.extend_from_slice(&[0u8; 4]); // reserved
    bmp.extend_from_slice(&pixel_offset.to_le_bytes());
    bmp.extend_from_slice(dib);
    bmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dib_with_header_size(header_size: u32, pixels: usize) -> Vec<u8> {
        let mut dib = header_size.to_le_bytes().to_vec();
        dib.resize(4 + pixels, 0x7F);
        dib
    }

    #[test]
    fn output_is_input_plus_file_header() {
        let dib = dib_with_header_size(40, 60);
        let bmp = dib_to_bmp(&dib);
        assert_eq!(bmp.len(), dib.len() + 14);
        assert_eq!(&bmp[..2], b"BM");
        assert_eq!(&bmp[14..], &dib[..]);
    }

    #[test]
    fn file_size_field_is_total_length() {
        let dib = dib_with_header_size(40, 60);
        let bmp = dib_to_bmp(&dib);
        let file_size = u32::from_le_bytes([bmp[2], bmp[3], bmp[4], bmp[5]]);
        assert_eq!(file_size as usize, bmp.len());
    }

    #[test]
    fn pixel_offset_follows_the_dib_header() {
        let bmp = dib_to_bmp(&dib_with_header_size(40, 60));
        let offset = u32::from_le_bytes([bmp[10], bmp[11], bmp[12], bmp[13]]);
        assert_eq!(offset, 54);

        // Extended header (BITMAPV5HEADER)
        let bmp = dib_to_bmp(&dib_with_header_size(124, 60));
        let offset = u32::from_le_bytes([bmp[10], bmp[11], bmp[12], bmp[13]]);
        assert_eq!(offset, 138);
    }

    #[test]
    fn short_payload_falls_back_to_default_offset() {
        for dib in [&[][..], &[1, 2][..], &[1, 2, 3, 4][..]] {
            let bmp = dib_to_bmp(dib);
            let offset = u32::from_le_bytes([bmp[10], bmp[11], bmp[12], bmp[13]]);
            assert_eq!(offset, 54);
        }
    }

    proptest! {
        #[test]
        fn prop_header_laws_hold(dib in prop::collection::vec(any::<u8>(), 0..256)) {
            let bmp = dib_to_bmp(&dib);
            prop_assert_eq!(bmp.len(), dib.len() + 14);
            prop_assert_eq!(&bmp[..2], b"BM");
            prop_assert_eq!(&bmp[14..], &dib[..]);

            let offset = u32::from_le_bytes([bmp[10], bmp[11], bmp[12], bmp[13]]);
            if dib.len() > 4 {
                let header = u32::from_le_bytes([dib[0], dib[1], dib[2], dib[3]]);
                prop_assert_eq!(offset, 14u32.wrapping_add(header));
            } else {
                prop_assert_eq!(offset, 54);
            }
        }
    }
}

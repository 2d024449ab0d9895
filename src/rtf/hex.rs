//! Hex payload codec.
//!
//! `\objdata` and `\pict` destinations store binary content as runs of ASCII
//! hex digits, usually broken into lines by the producing editor. The reader
//! surfaces such a run as one text token; this codec turns it back into
//! bytes.

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Decode a hex-encoded payload into bytes.
///
/// Whitespace is skipped anywhere in the input, two hex digits form one
/// byte, and an unpaired trailing digit is dropped. Characters that are
/// neither hex digits nor whitespace are ignored.
pub fn decode_hex(hex: &str) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(hex.len() / 2);
    let mut high: Option<u8> = None;

    for ch in hex.chars() {
        if ch.is_whitespace() {
            continue;
        }
        let Some(digit) = ch.to_digit(16) else {
            continue;
        };
        match high.take() {
            Some(high) => bytes.push((high << 4) | digit as u8),
            None => high = Some(digit as u8),
        }
    }

    bytes
}

/// Encode bytes as a lowercase hex string.
pub fn encode_hex(data: &[u8]) -> String {
    let mut hex = String::with_capacity(data.len() * 2);
    for &byte in data {
        hex.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        hex.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn decodes_plain_pairs() {
        assert_eq!(decode_hex("48656c6c6f"), b"Hello");
        assert_eq!(decode_hex("FFD8"), vec![0xFF, 0xD8]);
    }

    #[test]
    fn whitespace_is_skipped_anywhere() {
        assert_eq!(decode_hex("48 65\t6c\r\n6c 6f"), b"Hello");
        assert_eq!(decode_hex("4 8"), vec![0x48]);
    }

    #[test]
    fn unpaired_trailing_digit_is_dropped() {
        assert_eq!(decode_hex("48656"), vec![0x48, 0x65]);
    }

    #[test]
    fn empty_input_yields_no_bytes() {
        assert_eq!(decode_hex(""), Vec::<u8>::new());
        assert_eq!(decode_hex("   "), Vec::<u8>::new());
    }

    #[test]
    fn non_hex_characters_are_ignored() {
        assert_eq!(decode_hex("48zz65"), vec![0x48, 0x65]);
    }

    proptest! {
        #[test]
        fn prop_decode_inverts_encode(data in prop::collection::vec(any::<u8>(), 0..512)) {
            prop_assert_eq!(decode_hex(&encode_hex(&data)), data);
        }

        #[test]
        fn prop_even_hex_strings_round_trip(hex in "[0-9a-f]{0,128}") {
            // Only even-length, whitespace-free strings re-encode exactly.
            let even = &hex[..hex.len() & !1];
            prop_assert_eq!(encode_hex(&decode_hex(even)), even);
        }
    }
}

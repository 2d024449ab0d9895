use super::{OleError, OleResult};
use memchr::memchr;
use zerocopy::{FromBytes, I32, LE, U16, U32};

/// Sequential reader over an OLE binary payload.
///
/// Every fixed-size read is bounds-checked; running past the end of the
/// payload is an [`OleError::Truncated`]. String reads are tolerant of a
/// missing terminator, matching how producing applications truncate fields.
pub(crate) struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    #[inline]
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes not yet consumed.
    #[inline]
    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Consume exactly `len` bytes.
    pub(crate) fn read_bytes(&mut self, len: usize) -> OleResult<&'a [u8]> {
        if len > self.remaining() {
            return Err(OleError::Truncated {
                offset: self.pos,
                needed: len,
            });
        }
        let bytes = &self.data[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Read a little-endian u16.
    pub(crate) fn read_u16_le(&mut self) -> OleResult<u16> {
        let offset = self.pos;
        U16::<LE>::read_from_bytes(self.read_bytes(2)?)
            .map(|v| v.get())
            .map_err(|_| OleError::Truncated { offset, needed: 2 })
    }

    /// Read a little-endian u32.
    pub(crate) fn read_u32_le(&mut self) -> OleResult<u32> {
        let offset = self.pos;
        U32::<LE>::read_from_bytes(self.read_bytes(4)?)
            .map(|v| v.get())
            .map_err(|_| OleError::Truncated { offset, needed: 4 })
    }

    /// Read a little-endian i32.
    pub(crate) fn read_i32_le(&mut self) -> OleResult<i32> {
        let offset = self.pos;
        I32::<LE>::read_from_bytes(self.read_bytes(4)?)
            .map(|v| v.get())
            .map_err(|_| OleError::Truncated { offset, needed: 4 })
    }

    /// Read a NUL-terminated ANSI string, consuming the terminator.
    ///
    /// A string cut off by the end of the payload takes the remaining bytes.
    pub(crate) fn read_ansi_string(&mut self) -> String {
        let rest = &self.data[self.pos..];
        match memchr(0, rest) {
            Some(nul) => {
                self.pos += nul + 1;
                rest[..nul].iter().map(|&b| b as char).collect()
            },
            None => {
                self.pos = self.data.len();
                rest.iter().map(|&b| b as char).collect()
            },
        }
    }

    /// Skip a `[i32 length][bytes]` ANSI string field.
    ///
    /// Non-positive lengths carry no bytes; a field starting exactly at the
    /// end of the payload is treated as absent.
    pub(crate) fn skip_length_prefixed_string(&mut self) -> OleResult<()> {
        if self.remaining() == 0 {
            return Ok(());
        }
        let len = self.read_i32_le()?;
        if len > 0 {
            self.read_bytes(len as usize)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_little_endian_integers() {
        let mut reader = ByteReader::new(&[0x34, 0x12, 0x78, 0x56, 0x34, 0x12]);
        assert_eq!(reader.read_u16_le().unwrap(), 0x1234);
        assert_eq!(reader.read_u32_le().unwrap(), 0x12345678);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn out_of_bounds_read_is_truncated() {
        let mut reader = ByteReader::new(&[0x01]);
        assert!(matches!(
            reader.read_u32_le(),
            Err(OleError::Truncated { offset: 0, needed: 4 })
        ));
    }

    #[test]
    fn ansi_string_stops_at_nul() {
        let mut reader = ByteReader::new(b"Report.jpg\0rest");
        assert_eq!(reader.read_ansi_string(), "Report.jpg");
        assert_eq!(reader.remaining(), 4);
    }

    #[test]
    fn ansi_string_without_terminator_takes_the_rest() {
        let mut reader = ByteReader::new(b"Report");
        assert_eq!(reader.read_ansi_string(), "Report");
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn length_prefixed_field_is_skipped() {
        let mut data = 8i32.to_le_bytes().to_vec();
        data.extend_from_slice(b"Package\0");
        data.push(0xAA);
        let mut reader = ByteReader::new(&data);
        reader.skip_length_prefixed_string().unwrap();
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn non_positive_length_prefix_carries_no_bytes() {
        let zero_bytes = 0i32.to_le_bytes();
        let mut reader = ByteReader::new(&zero_bytes);
        reader.skip_length_prefixed_string().unwrap();
        assert_eq!(reader.remaining(), 0);

        let neg_bytes = (-5i32).to_le_bytes();
        let mut reader = ByteReader::new(&neg_bytes);
        reader.skip_length_prefixed_string().unwrap();
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn length_prefix_at_end_of_payload_is_absent() {
        let mut reader = ByteReader::new(&[]);
        assert!(reader.skip_length_prefixed_string().is_ok());
    }
}

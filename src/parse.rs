use crate::checksum::checksum;
use crate::{DecodeError, Record, RecordType};
use core::str::FromStr;

/// Length, two address bytes, type and checksum.
pub(crate) const FRAME_LEN: usize = 5;

impl Record {
    /// Decode the binary form of a record: length, big-endian address, type,
    /// data and checksum. Bytes after the checksum are ignored.
    pub fn decode(bytes: &[u8]) -> Result<Record, DecodeError> {
        if bytes.len() < FRAME_LEN {
            return Err(DecodeError::MalformedRecord {
                expected: FRAME_LEN,
                actual: bytes.len(),
            });
        }

        let length = bytes[0] as usize;
        let checksum_index = 4 + length;

        if bytes.len() < checksum_index + 1 {
            return Err(DecodeError::MalformedRecord {
                expected: checksum_index + 1,
                actual: bytes.len(),
            });
        }

        let computed = checksum(&bytes[..checksum_index]);
        let found = bytes[checksum_index];

        if computed != found {
            return Err(DecodeError::ChecksumMismatch { computed, found });
        }

        Ok(Record::new(
            RecordType(bytes[3]),
            u16::from_be_bytes([bytes[1], bytes[2]]),
            &bytes[4..checksum_index],
        ))
    }

    /// Decode the hex text form of a record. Leading colons are trimmed but
    /// not required.
    pub fn decode_hex<T: AsRef<[u8]>>(line: T) -> Result<Record, DecodeError> {
        let mut line = line.as_ref();

        while let [b':', rest @ ..] = line {
            line = rest;
        }

        let bytes = hex::decode(line)?;

        Record::decode(&bytes)
    }
}

impl FromStr for Record {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Record::decode_hex(s)
    }
}

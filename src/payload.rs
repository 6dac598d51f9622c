use crate::{DecodeError, Record, RecordType};

use alloc::vec::Vec;

/// Typed view of a record's data, according to its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload<'a> {
    Data(&'a [u8]),
    EndOfFile,
    ExtendedSegmentAddress(u16),
    StartSegmentAddress { cs: u16, ip: u16 },
    ExtendedLinearAddress(u16),
    StartLinearAddress(u32),
    Unknown(RecordType, &'a [u8]),
}

impl Payload<'_> {
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::Data(_) => RecordType::DATA,
            Self::EndOfFile => RecordType::END_OF_FILE,
            Self::ExtendedSegmentAddress(_) => RecordType::EXTENDED_SEGMENT_ADDRESS,
            Self::StartSegmentAddress { .. } => RecordType::START_SEGMENT_ADDRESS,
            Self::ExtendedLinearAddress(_) => RecordType::EXTENDED_LINEAR_ADDRESS,
            Self::StartLinearAddress(_) => RecordType::START_LINEAR_ADDRESS,
            Self::Unknown(record_type, _) => *record_type,
        }
    }
}

impl Record {
    pub fn data<T: Into<Vec<u8>>>(address: u16, bytes: T) -> Self {
        Record::new(RecordType::DATA, address, bytes)
    }

    pub fn end_of_file() -> Self {
        Record::new(RecordType::END_OF_FILE, 0, Vec::new())
    }

    pub fn extended_segment_address(segment: u16) -> Self {
        Record::new(
            RecordType::EXTENDED_SEGMENT_ADDRESS,
            0,
            &segment.to_be_bytes()[..],
        )
    }

    pub fn start_segment_address(cs: u16, ip: u16) -> Self {
        let mut word = [0; 4];
        word[..2].copy_from_slice(&cs.to_be_bytes());
        word[2..].copy_from_slice(&ip.to_be_bytes());

        Record::new(RecordType::START_SEGMENT_ADDRESS, 0, &word[..])
    }

    pub fn extended_linear_address(upper: u16) -> Self {
        Record::new(
            RecordType::EXTENDED_LINEAR_ADDRESS,
            0,
            &upper.to_be_bytes()[..],
        )
    }

    pub fn start_linear_address(address: u32) -> Self {
        Record::new(
            RecordType::START_LINEAR_ADDRESS,
            0,
            &address.to_be_bytes()[..],
        )
    }

    /// Interpret the data according to the record type. Fixed-size payloads
    /// must have exactly their size.
    pub fn payload(&self) -> Result<Payload<'_>, DecodeError> {
        let data = &self.data[..];

        match self.record_type {
            RecordType::DATA => Ok(Payload::Data(data)),
            RecordType::END_OF_FILE => {
                self.expect_len(0)?;
                Ok(Payload::EndOfFile)
            }
            RecordType::EXTENDED_SEGMENT_ADDRESS => {
                let short = self.expect_len(2)?;
                Ok(Payload::ExtendedSegmentAddress(u16::from_be_bytes([
                    short[0], short[1],
                ])))
            }
            RecordType::START_SEGMENT_ADDRESS => {
                let word = self.expect_len(4)?;
                Ok(Payload::StartSegmentAddress {
                    cs: u16::from_be_bytes([word[0], word[1]]),
                    ip: u16::from_be_bytes([word[2], word[3]]),
                })
            }
            RecordType::EXTENDED_LINEAR_ADDRESS => {
                let short = self.expect_len(2)?;
                Ok(Payload::ExtendedLinearAddress(u16::from_be_bytes([
                    short[0], short[1],
                ])))
            }
            RecordType::START_LINEAR_ADDRESS => {
                let word = self.expect_len(4)?;
                Ok(Payload::StartLinearAddress(u32::from_be_bytes([
                    word[0], word[1], word[2], word[3],
                ])))
            }
            other => Ok(Payload::Unknown(other, data)),
        }
    }

    pub(crate) fn expect_len(&self, expected: usize) -> Result<&[u8], DecodeError> {
        if self.data.len() != expected {
            return Err(DecodeError::InvalidPayloadLength {
                record_type: self.record_type,
                expected,
                actual: self.data.len(),
            });
        }

        Ok(&self.data)
    }
}

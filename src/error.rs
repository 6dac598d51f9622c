use crate::RecordType;
use thiserror::Error;

/// Failure to turn a line of text into a [`Record`](crate::Record), or to
/// apply it to the extended address state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DecodeError {
    #[error("line does not begin with a colon")]
    MissingColon,
    #[error("invalid hex: {0}")]
    Hex(hex::FromHexError),
    #[error("malformed record: expected {expected} bytes, got {actual}")]
    MalformedRecord { expected: usize, actual: usize },
    #[error("checksum mismatch: computed {computed:#04x}, found {found:#04x}")]
    ChecksumMismatch { computed: u8, found: u8 },
    #[error("{record_type} record needs {expected} data bytes, got {actual}")]
    InvalidPayloadLength {
        record_type: RecordType,
        expected: usize,
        actual: usize,
    },
    #[error("extended segment address {0:#06x} is not a multiple of 16")]
    InvalidExtendedAddress(u16),
}

// FromHexError only implements Error with hex's std feature, so no #[from].
impl From<hex::FromHexError> for DecodeError {
    fn from(err: hex::FromHexError) -> Self {
        DecodeError::Hex(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("record data is {0} bytes, at most 255 fit in a record")]
    DataTooLong(usize),
    #[error("buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

/// Terminal error of a [`Decoder`](crate::Decoder), tagged with the 1-based
/// line it happened on.
#[derive(Debug, Error)]
pub enum ScanError<E> {
    #[error("parse error at line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: DecodeError,
    },
    #[error("read error at line {line}: {error}")]
    Source { line: usize, error: E },
}

impl<E> ScanError<E> {
    pub fn line(&self) -> usize {
        match self {
            ScanError::Decode { line, .. } | ScanError::Source { line, .. } => *line,
        }
    }

    /// The codec error, if this was not a read failure.
    pub fn decode_error(&self) -> Option<&DecodeError> {
        match self {
            ScanError::Decode { source, .. } => Some(source),
            ScanError::Source { .. } => None,
        }
    }
}

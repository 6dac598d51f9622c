use core::fmt;

use alloc::vec::Vec;

/// Record type tag. Any of the 256 byte values is representable, the
/// associated constants name the six defined by the format.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordType(pub u8);

impl RecordType {
    pub const DATA: RecordType = RecordType(0x00);
    pub const END_OF_FILE: RecordType = RecordType(0x01);
    pub const EXTENDED_SEGMENT_ADDRESS: RecordType = RecordType(0x02);
    pub const START_SEGMENT_ADDRESS: RecordType = RecordType(0x03);
    pub const EXTENDED_LINEAR_ADDRESS: RecordType = RecordType(0x04);
    pub const START_LINEAR_ADDRESS: RecordType = RecordType(0x05);

    pub fn is_known(self) -> bool {
        self.0 <= Self::START_LINEAR_ADDRESS.0
    }

    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::DATA => Some("data"),
            Self::END_OF_FILE => Some("end of file"),
            Self::EXTENDED_SEGMENT_ADDRESS => Some("extended segment address"),
            Self::START_SEGMENT_ADDRESS => Some("start segment address"),
            Self::EXTENDED_LINEAR_ADDRESS => Some("extended linear address"),
            Self::START_LINEAR_ADDRESS => Some("start linear address"),
            _ => None,
        }
    }
}

impl From<u8> for RecordType {
    fn from(tag: u8) -> Self {
        RecordType(tag)
    }
}

impl From<RecordType> for u8 {
    fn from(record_type: RecordType) -> Self {
        record_type.0
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "unknown({:#04x})", self.0),
        }
    }
}

/// One IHEX record.
///
/// `address` is the raw 16-bit field of the line. `extended_address` is only
/// filled in for data records, by a [`Decoder`](crate::Decoder) or an
/// [`AddressTracker`](crate::AddressTracker); the codec leaves it at zero.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Record {
    pub record_type: RecordType,
    pub address: u16,
    pub extended_address: u32,
    pub data: Vec<u8>,
}

impl Record {
    pub fn new<T: Into<Vec<u8>>>(record_type: RecordType, address: u16, data: T) -> Self {
        Record {
            record_type,
            address,
            extended_address: 0,
            data: data.into(),
        }
    }

    pub fn is_data(&self) -> bool {
        self.record_type == RecordType::DATA
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExtendedAddress: {:x} / Address: {:x} / Data ",
            self.extended_address, self.address
        )?;

        for byte in &self.data {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}

use crate::{DecodeError, Record, RecordType};

/// Carries the base address set by extended address records over to the
/// data records that follow them.
///
/// Records must be fed in file order; the tracker has no way to detect a
/// reordered stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AddressTracker {
    offset: u32,
}

impl AddressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Base address currently applied to data records.
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Apply one record. Extended address records move the offset, data
    /// records get their `extended_address` filled in, anything else passes
    /// through. On error the offset is unchanged.
    pub fn resolve(&mut self, record: &mut Record) -> Result<(), DecodeError> {
        self.offset = match record.record_type {
            RecordType::EXTENDED_SEGMENT_ADDRESS => {
                let segment = extension_value(record)?;
                if segment & 0xF != 0 {
                    return Err(DecodeError::InvalidExtendedAddress(segment));
                }
                u32::from(segment) << 4
            }
            RecordType::EXTENDED_LINEAR_ADDRESS => u32::from(extension_value(record)?) << 16,
            RecordType::DATA => {
                // At most 0xFFFF_0000 + 0xFFFF, so this cannot overflow.
                record.extended_address = self.offset + u32::from(record.address);
                return Ok(());
            }
            _ => return Ok(()),
        };

        log::trace!("address offset now {:#010x}", self.offset);

        Ok(())
    }
}

/// Big-endian value of a two byte extended address payload.
fn extension_value(record: &Record) -> Result<u16, DecodeError> {
    let short = record.expect_len(2)?;

    Ok(u16::from_be_bytes([short[0], short[1]]))
}

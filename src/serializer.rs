use crate::checksum::checksum;
use crate::parse::FRAME_LEN;
use crate::{EncodeError, Record};

use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

impl Record {
    /// Length in bytes of the hex line `serialize` writes, colon included.
    pub fn encoded_len(&self) -> usize {
        2 * (FRAME_LEN + self.data.len()) + 1
    }

    /// Encode to the binary form of a record, checksum included.
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        if self.data.len() > u8::MAX as usize {
            return Err(EncodeError::DataTooLong(self.data.len()));
        }

        let checksum_index = 4 + self.data.len();

        let mut bytes = vec![0; checksum_index + 1];
        bytes[0] = self.data.len() as u8;
        bytes[1..3].copy_from_slice(&self.address.to_be_bytes());
        bytes[3] = self.record_type.into();
        bytes[4..checksum_index].copy_from_slice(&self.data);
        bytes[checksum_index] = checksum(&bytes[..checksum_index]);

        Ok(bytes)
    }

    /// Encode to a hex line: a colon followed by lowercase hex digits.
    pub fn encode_hex(&self) -> Result<String, EncodeError> {
        let bytes = self.encode()?;

        let mut line = String::with_capacity(2 * bytes.len() + 1);
        line.push(':');
        line.push_str(&hex::encode(bytes));

        Ok(line)
    }

    /// Write the hex line into `buffer`, returning the number of bytes used.
    pub fn serialize<T>(&self, buffer: &mut T) -> Result<usize, EncodeError>
    where
        T: AsMut<[u8]>,
    {
        let buffer = buffer.as_mut();
        let bytes = self.encode()?;

        let buffer_length = self.encoded_len();
        if buffer.len() < buffer_length {
            return Err(EncodeError::BufferTooSmall {
                needed: buffer_length,
                available: buffer.len(),
            });
        }

        buffer[0] = b':';

        hex::encode_to_slice(&bytes, &mut buffer[1..buffer_length]).map_err(|_| {
            EncodeError::BufferTooSmall {
                needed: buffer_length,
                available: buffer.len(),
            }
        })?;

        Ok(buffer_length)
    }
}

//! Intel HEX record codec.
//!
//! [`Record`] decodes and encodes single lines, [`AddressTracker`] resolves the
//! 32-bit address of data records from preceding extended address records,
//! and [`Decoder`] ties both to a source of lines.
//!
//! ```
//! use ihex_codec::Decoder;
//!
//! let mut decoder = Decoder::from_text(":020000041000EA\n:01001000AA45\n:00000001FF\n");
//!
//! while decoder.scan_data() {
//!     assert_eq!(decoder.record().extended_address, 0x1000_0010);
//! }
//!
//! assert!(decoder.error().is_none());
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod address;
mod checksum;
mod decoder;
mod error;
mod lines;
mod parse;
mod payload;
mod record;
mod serializer;

pub use address::AddressTracker;
pub use checksum::checksum;
pub use decoder::{Decoder, Records};
pub use error::{DecodeError, EncodeError, ScanError};
#[cfg(feature = "std")]
pub use lines::IoLines;
pub use lines::LineSource;
pub use payload::Payload;
pub use record::{Record, RecordType};

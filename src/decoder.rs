use crate::lines::LineSource;
use crate::{AddressTracker, DecodeError, Record, ScanError};

use alloc::string::String;
use core::fmt;
use core::iter::FusedIterator;
use core::mem;

/// Pull-based reader of IHEX records.
///
/// Call [`scan`](Decoder::scan) until it returns false, then check
/// [`error`](Decoder::error): `None` means the input ended cleanly. The first
/// error is final; later calls return false without reading further.
pub struct Decoder<S: LineSource> {
    source: S,
    buf: String,
    record: Record,
    error: Option<ScanError<S::Error>>,
    line: usize,
    tracker: AddressTracker,
    done: bool,
}

impl<S> fmt::Debug for Decoder<S>
where
    S: LineSource + fmt::Debug,
    S::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("source", &self.source)
            .field("record", &self.record)
            .field("error", &self.error)
            .field("line", &self.line)
            .field("tracker", &self.tracker)
            .finish()
    }
}

impl<'a> Decoder<core::str::Lines<'a>> {
    pub fn from_text(text: &'a str) -> Self {
        Decoder::new(text.lines())
    }
}

#[cfg(feature = "std")]
impl<R: std::io::BufRead> Decoder<crate::IoLines<R>> {
    pub fn from_reader(reader: R) -> Self {
        Decoder::new(crate::IoLines::new(reader))
    }
}

impl<S: LineSource> Decoder<S> {
    pub fn new(source: S) -> Self {
        Decoder {
            source,
            buf: String::new(),
            record: Record::default(),
            error: None,
            line: 0,
            tracker: AddressTracker::new(),
            done: false,
        }
    }

    /// Read and decode the next record, skipping blank lines. Returns false
    /// at the end of input or on error.
    pub fn scan(&mut self) -> bool {
        if self.done {
            return false;
        }

        loop {
            self.buf.clear();

            match self.source.read_line(&mut self.buf) {
                Ok(true) => self.line += 1,
                Ok(false) => {
                    self.done = true;
                    return false;
                }
                Err(error) => {
                    self.fail(ScanError::Source {
                        line: self.line + 1,
                        error,
                    });
                    return false;
                }
            }

            let line = self.buf.trim_matches(&[' ', '\t', '\r', '\n'][..]);
            if line.is_empty() {
                continue;
            }

            return match decode_line(line, &mut self.tracker) {
                Ok(record) => {
                    log::trace!(
                        "line {}: {} record at {:#06x}",
                        self.line,
                        record.record_type,
                        record.address
                    );
                    self.record = record;
                    true
                }
                Err(source) => {
                    self.fail(ScanError::Decode {
                        line: self.line,
                        source,
                    });
                    false
                }
            };
        }
    }

    /// Like [`scan`](Decoder::scan), but only stops on data records. Extended
    /// address records in between are still applied.
    pub fn scan_data(&mut self) -> bool {
        while self.scan() {
            if self.record.is_data() {
                return true;
            }
        }

        false
    }

    /// Most recently scanned record, or an empty one if nothing has been
    /// scanned yet.
    pub fn record(&self) -> &Record {
        &self.record
    }

    pub fn error(&self) -> Option<&ScanError<S::Error>> {
        self.error.as_ref()
    }

    /// Number of lines consumed so far, blank ones included.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Base address currently applied to data records.
    pub fn offset(&self) -> u32 {
        self.tracker.offset()
    }

    pub fn into_records(self) -> Records<S> {
        Records {
            decoder: self,
            data_only: false,
        }
    }

    /// Iterator over data records only.
    pub fn into_data_records(self) -> Records<S> {
        Records {
            decoder: self,
            data_only: true,
        }
    }

    fn fail(&mut self, error: ScanError<S::Error>) {
        match &error {
            ScanError::Decode { line, source } => {
                log::debug!("parse error at line {}: {}", line, source)
            }
            ScanError::Source { line, .. } => log::debug!("read error at line {}", line),
        }

        self.error = Some(error);
        self.done = true;
    }
}

fn decode_line(line: &str, tracker: &mut AddressTracker) -> Result<Record, DecodeError> {
    if !line.starts_with(':') {
        return Err(DecodeError::MissingColon);
    }

    let mut record = Record::decode_hex(line)?;
    tracker.resolve(&mut record)?;

    Ok(record)
}

/// Iterator over the records of a [`Decoder`]. Yields the decoder's error
/// once, as its last item.
pub struct Records<S: LineSource> {
    decoder: Decoder<S>,
    data_only: bool,
}

impl<S> fmt::Debug for Records<S>
where
    S: LineSource + fmt::Debug,
    S::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Records")
            .field("decoder", &self.decoder)
            .field("data_only", &self.data_only)
            .finish()
    }
}

impl<S: LineSource> Records<S> {
    /// Line count so far.
    pub fn line(&self) -> usize {
        self.decoder.line()
    }
}

impl<S: LineSource> Iterator for Records<S> {
    type Item = Result<Record, ScanError<S::Error>>;

    fn next(&mut self) -> Option<Self::Item> {
        let scanned = if self.data_only {
            self.decoder.scan_data()
        } else {
            self.decoder.scan()
        };

        if scanned {
            return Some(Ok(mem::take(&mut self.decoder.record)));
        }

        self.decoder.error.take().map(Err)
    }
}

impl<S: LineSource> FusedIterator for Records<S> {}

use ihex_codec::{DecodeError, Decoder, LineSource, Record, RecordType, ScanError};
use std::io;

const FIRMWARE: &str = "\
:020000040800F2
:10000000000002200D01000815010008170100087A
:10001000190100081B0100081D0100080000000074

:020000021000EC
:0400000012345678E8
:04000005080001C925
:00000001FF
";

#[test]
fn whole_file() {
    let mut decoder = Decoder::from_reader(FIRMWARE.as_bytes());
    let mut seen = Vec::new();

    while decoder.scan() {
        let record = decoder.record();
        seen.push((record.record_type, record.address, record.extended_address));
    }

    assert!(decoder.error().is_none(), "{:?}", decoder.error());
    assert_eq!(decoder.line(), 8);
    assert_eq!(
        seen,
        [
            (RecordType::EXTENDED_LINEAR_ADDRESS, 0x0000, 0),
            (RecordType::DATA, 0x0000, 0x0800_0000),
            (RecordType::DATA, 0x0010, 0x0800_0010),
            (RecordType::EXTENDED_SEGMENT_ADDRESS, 0x0000, 0),
            (RecordType::DATA, 0x0000, 0x0001_0000),
            (RecordType::START_LINEAR_ADDRESS, 0x0000, 0),
            (RecordType::END_OF_FILE, 0x0000, 0),
        ]
    );
}

#[test]
fn data_only() {
    let data = Decoder::from_text(FIRMWARE)
        .into_data_records()
        .collect::<Result<Vec<Record>, _>>()
        .unwrap();

    assert_eq!(data.len(), 3);
    assert!(data.iter().all(Record::is_data));
    assert_eq!(data[2].data, [0x12, 0x34, 0x56, 0x78]);
}

#[test]
fn whole_file_round_trip() {
    let encoded = Decoder::from_text(FIRMWARE)
        .into_records()
        .map(|record| record.unwrap().encode_hex().unwrap())
        .collect::<Vec<String>>();

    let expected = FIRMWARE
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<String>>();

    assert_eq!(encoded, expected);
}

struct FailingSource {
    lines: Vec<&'static str>,
}

impl LineSource for FailingSource {
    type Error = io::Error;

    fn read_line(&mut self, buf: &mut String) -> Result<bool, Self::Error> {
        if self.lines.is_empty() {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "device gone"));
        }

        buf.push_str(self.lines.remove(0));
        Ok(true)
    }
}

#[test]
fn source_error() {
    let mut decoder = Decoder::new(FailingSource {
        lines: vec![":00000001FF", ""],
    });

    assert!(decoder.scan());
    assert!(!decoder.scan());

    match decoder.error() {
        Some(ScanError::Source { line, error }) => {
            assert_eq!(*line, 3);
            assert_eq!(error.kind(), io::ErrorKind::UnexpectedEof);
        }
        other => panic!("unexpected {:?}", other),
    }

    assert!(!decoder.scan());
    assert_eq!(decoder.error().map(ScanError::line), Some(3));
    assert_eq!(
        decoder.error().unwrap().to_string(),
        "read error at line 3: device gone"
    );
}

#[test]
fn decode_error_stops_before_source_error() {
    let mut decoder = Decoder::new(FailingSource {
        lines: vec![":00000001FE"],
    });

    assert!(!decoder.scan());
    assert_eq!(
        decoder.error().and_then(ScanError::decode_error),
        Some(&DecodeError::ChecksumMismatch {
            computed: 0xFF,
            found: 0xFE
        })
    );
}

#[test]
fn error_source_chain() {
    use std::error::Error;

    let mut decoder = Decoder::from_text(":020000040800F2\n:02000002000FED\n");

    assert!(decoder.scan());
    assert!(!decoder.scan());

    let error = decoder.error().unwrap();
    assert_eq!(
        error.to_string(),
        "parse error at line 2: extended segment address 0x000f is not a multiple of 16"
    );
    assert_eq!(
        error.source().map(|source| source.to_string()),
        Some("extended segment address 0x000f is not a multiple of 16".to_string())
    );
    assert_eq!(decoder.offset(), 0x0800_0000);
}

//! # Trace Writer Tests
//!
//! Record format, line counting, and error propagation of the buffered writer.

use std::io::{self, Write};

use tracegen_core::Addr;
use tracegen_core::generator::TraceWriter;

/// Sink that rejects every write.
#[derive(Debug)]
struct FailingSink;

impl Write for FailingSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::other("disk full"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::other("disk full"))
    }
}

#[test]
fn writes_one_record_per_line() {
    let mut writer = TraceWriter::new(Vec::new());
    writer.write_addr(Addr::wrapping(0x0A3)).unwrap();
    writer.write_addr(Addr::wrapping(0x7FF)).unwrap();
    assert_eq!(writer.lines(), 2);
    let bytes = writer.finish().unwrap();
    assert_eq!(bytes, b"0A3\n7FF\n");
}

#[test]
fn write_all_returns_count_of_batch() {
    let mut writer = TraceWriter::new(Vec::new());
    let first = writer.write_all((0..5).map(Addr::wrapping)).unwrap();
    let second = writer.write_all((2046..2050).map(Addr::wrapping)).unwrap();
    assert_eq!((first, second), (5, 4));
    assert_eq!(writer.lines(), 9);
    let text = String::from_utf8(writer.finish().unwrap()).unwrap();
    assert_eq!(text, "000\n001\n002\n003\n004\n7FE\n7FF\n000\n001\n");
}

#[test]
fn sink_errors_surface_on_finish() {
    let mut writer = TraceWriter::new(FailingSink);
    // Small writes stay in the buffer; the failure appears when flushing.
    writer.write_addr(Addr::MIN).unwrap();
    let err = writer.finish().unwrap_err();
    assert_eq!(err.to_string(), "disk full");
}

#[test]
fn create_truncates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.txt");
    std::fs::write(&path, "junk\njunk\n").unwrap();

    let mut writer = TraceWriter::create(&path).unwrap();
    writer.write_addr(Addr::MAX).unwrap();
    let _file = writer.finish().unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "7FF\n");
}

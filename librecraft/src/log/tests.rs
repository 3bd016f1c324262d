use super::*;

#[test]
fn test_encode_info_line() {
    let line = encode(Level::Info, "hello");
    assert_eq!(line, b"\x01i\x02hello\n");
}

#[test]
fn test_encode_level_markers() {
    assert_eq!(encode(Level::Trace, "")[1], b't');
    assert_eq!(encode(Level::Debug, "")[1], b'd');
    assert_eq!(encode(Level::Info, "")[1], b'i');
    assert_eq!(encode(Level::Warning, "")[1], b'w');
    assert_eq!(encode(Level::Error, "")[1], b'e');
    assert_eq!(encode(Level::Progress, "")[1], b'p');
}

#[test]
fn test_encode_replaces_embedded_newlines() {
    let line = encode(Level::Error, "line one\nline two");
    assert_eq!(line, b"\x01e\x02line one\rline two\n");
}

#[test]
fn test_emit_writes_to_writer() {
    let mut buffer = Vec::new();
    emit(&mut buffer, Level::Debug, "fetching icon");
    assert_eq!(buffer, b"\x01d\x02fetching icon\n");
}

#[test]
fn test_emit_swallows_write_errors() {
    struct FailingWriter;

    impl std::io::Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"))
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    // Must not panic.
    emit(&mut FailingWriter, Level::Info, "message");
}

#[test]
fn test_format_progress_clamps_out_of_range_values() {
    assert_eq!(format_progress(1.7).as_deref(), Some("1"));
    assert_eq!(format_progress(-0.3).as_deref(), Some("0"));
    assert_eq!(format_progress(0.42).as_deref(), Some("0.42"));
}

#[test]
fn test_format_progress_drops_non_finite_values() {
    assert_eq!(format_progress(f64::NAN), None);
    assert_eq!(format_progress(f64::INFINITY), None);
}

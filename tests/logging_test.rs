//! Tests that load diagnostics are emitted through tracing

#![allow(clippy::unwrap_used)]

use asnames::AsNames;
use std::io::Write;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("mutex poisoned").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_malformed_lines_are_logged() {
    let buf = SharedBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    let source = "AS5 SYMBOLICS - Symbolics, Inc.\nGAHOGA - WTF\nAS5 SYMBOLICS-TWO - again\n";
    let db = tracing::subscriber::with_default(subscriber, || {
        AsNames::from_reader(source.as_bytes()).unwrap()
    });
    assert_eq!(db.short(5).unwrap(), "SYMBOLICS-TWO");

    let output = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    assert!(output.contains("skipping malformed line"), "{output}");
    assert!(output.contains("GAHOGA - WTF"), "{output}");
    assert!(output.contains("duplicate AS number"), "{output}");
    assert!(output.contains("loaded AS names"), "{output}");
    assert!(output.contains("entries=1"), "{output}");
}

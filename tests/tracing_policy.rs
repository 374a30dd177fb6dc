#![cfg(feature = "tracing")]

use std::io;
use std::sync::{Arc, Mutex};

use fixed_deque::{Deque, LogAndContinue};

/// Collects formatted events in memory.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        let bytes = self.0.lock().map(|buf| buf.clone()).unwrap_or_default();
        String::from_utf8(bytes).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::WARN)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn test_capacity_violation_logs_fields_and_keeps_contents() {
    let mut dq: Deque<i32, 3, LogAndContinue> = Deque::from([7, 8, 9]);
    let output = capture(|| dq.assign_n(4, 0));

    assert_eq!(dq, [7, 8, 9]);
    assert!(output.contains("WARN"), "{output}");
    assert!(output.contains("deque contract violated"), "{output}");
    assert!(output.contains("kind=\"capacity\""), "{output}");
    assert!(output.contains("requested=4"), "{output}");
    assert!(output.contains("capacity=3"), "{output}");
}

#[test]
fn test_underflow_logs_operation() {
    let mut dq: Deque<i32, 3, LogAndContinue> = Deque::new();
    let output = capture(|| assert_eq!(dq.pop_back(), None));

    assert!(output.contains("kind=\"underflow\""), "{output}");
    assert!(output.contains("operation=\"pop_back\""), "{output}");
    assert_eq!(output.lines().count(), 1, "{output}");
}

#[test]
fn test_out_of_range_logs_index_and_len() {
    let dq: Deque<i32, 3, LogAndContinue> = Deque::from([1]);
    let output = capture(|| assert_eq!(dq.at(2), None));

    assert!(output.contains("kind=\"out_of_range\""), "{output}");
    assert!(output.contains("index=2"), "{output}");
    assert!(output.contains("len=1"), "{output}");
}

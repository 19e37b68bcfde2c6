use std::io;
use std::sync::{Arc, Mutex};

use medisight_core::models::severity::Severity;
use medisight_triage::health::{assemble_response, HEALTH_CATEGORIES};
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
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

impl<'a> MakeWriter<'a> for Captured {
    type Writer = Captured;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn logs_of(f: impl FnOnce()) -> String {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(captured.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.contents()
}

#[test]
fn generic_fallback_for_matched_category_is_logged() {
    let dizziness = &HEALTH_CATEGORIES[1];
    let logs = logs_of(|| {
        assemble_response(Some(dizziness), Severity::Low);
    });

    assert!(logs.contains("no template for matched category"));
    assert!(logs.contains("dizziness"));
}

#[test]
fn served_template_logs_nothing() {
    let sleep = &HEALTH_CATEGORIES[0];
    let logs = logs_of(|| {
        assemble_response(Some(sleep), Severity::High);
        assemble_response(None, Severity::Low);
    });

    assert!(!logs.contains("no template for matched category"));
}

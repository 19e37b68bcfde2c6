use std::io;
use std::sync::{Arc, Mutex};

use medisight_assistant::audit::AuditEvent;
use serde_json::{json, Value};
use tracing_subscriber::fmt::MakeWriter;
use uuid::Uuid;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

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

/// Emit `event` under a JSON subscriber and return its recorded fields.
fn emitted_fields(event: &AuditEvent) -> Value {
    let captured = Captured::default();
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_writer(captured.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || event.emit());

    let bytes = captured.0.lock().unwrap().clone();
    let line = String::from_utf8(bytes).unwrap();
    let record: Value = serde_json::from_str(line.trim()).unwrap();
    record["fields"].clone()
}

#[test]
fn details_are_recorded_when_present() {
    let id = Uuid::new_v4();
    let event = AuditEvent::consultation("export", id).with_details(json!({ "format": "pdf" }));

    let fields = emitted_fields(&event);

    assert_eq!(fields["message"], "audit event");
    assert_eq!(fields["audit.action"], "export");
    assert_eq!(fields["audit.resource_type"], "consultation");
    assert_eq!(fields["audit.resource_id"], id.to_string());

    let details: Value =
        serde_json::from_str(fields["audit.details"].as_str().unwrap()).unwrap();
    assert_eq!(details, json!({ "format": "pdf" }));
}

#[test]
fn details_field_is_omitted_when_absent() {
    let fields = emitted_fields(&AuditEvent::consultation("delete", Uuid::new_v4()));

    assert_eq!(fields["audit.action"], "delete");
    assert!(fields.get("audit.details").is_none());
}

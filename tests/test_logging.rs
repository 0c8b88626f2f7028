use axum::http::StatusCode;
use response_envelope::ResponseEnvelope;
use std::{
    io::{self, Write},
    sync::{Arc, Mutex},
};
use tracing::Level;

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl CapturedLogs {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn capture<F: FnOnce()>(f: F) -> String {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    logs.contents()
}

#[test]
fn test_success_render_logs_status() {
    let logs = capture(|| {
        let _ = ResponseEnvelope::success(1u8).into_response_with(StatusCode::CREATED);
    });
    assert!(logs.contains("DEBUG"), "{}", logs);
    assert!(logs.contains("Rendering successful envelope with status 201 Created"), "{}", logs);
}

#[test]
fn test_error_render_logs_message() {
    let logs = capture(|| {
        let _ = ResponseEnvelope::<()>::error("Kernel not found")
            .into_response_with(StatusCode::NOT_FOUND);
    });
    assert!(
        logs.contains("Rendering error envelope with status 404 Not Found: Kernel not found"),
        "{}",
        logs
    );
}

use std::io;
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use tower::ServiceExt;

use stockroom_api::app::{build_app, services::AppServices};

/// Formatted log output captured by a thread-scoped subscriber.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn error_lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .filter(|line| line.contains(" ERROR "))
            .map(str::to_string)
            .collect()
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

async fn post_json(path: &str, body: &'static str) -> (StatusCode, Vec<String>) {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .finish();
    // `#[tokio::test]` runs on a single thread, so the scoped default covers the handler.
    let _guard = tracing::subscriber::set_default(subscriber);

    let app = build_app(AppServices::in_memory().await.unwrap());
    let req = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    let res = app.oneshot(req).await.unwrap();

    (res.status(), captured.error_lines())
}

#[tokio::test]
async fn rejected_json_bodies_are_logged_at_error() {
    let bodies = [
        r#"{"name":"Bolt","amount":"ten"}"#,
        r#"{"name":"Bolt","amount":1.5}"#,
        r#"{"name":"Bolt","amount":true}"#,
        r#"{"name":"Bolt","amount":1,"colour":"red"}"#,
        r#"{"name":"Bolt","#,
    ];

    for body in bodies {
        let (status, errors) = post_json("/items", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(errors.len(), 1, "body {body}: {errors:?}");
        assert!(errors[0].contains("operation=\"create\""), "{}", errors[0]);
    }
}

#[tokio::test]
async fn successful_create_logs_no_errors() {
    let (status, errors) = post_json("/items", r#"{"name":"Bolt","amount":10}"#).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(errors.is_empty(), "{errors:?}");
}

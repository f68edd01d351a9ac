//! Request logging middleware.
//!
//! Emits one structured `tracing` event per request once the rest of the
//! chain has produced a response.

use std::{net::SocketAddr, time::Instant};

use axum::{
    extract::{ConnectInfo, Request},
    http::header,
    middleware::Next,
    response::Response,
};

/// Request logging middleware function.
///
/// Must sit outermost so the status it records is the one the client
/// receives, including auth rejections, preflight answers and recovered
/// panics. The status is read from the response returned by the inner
/// chain; handlers that never set one produce the default 200.
///
/// # Logged fields
///
/// - `method`, `path`
/// - `status`: final response status
/// - `duration`: time spent in the inner chain
/// - `remote_addr`: peer address, `unknown` when the server was started
///   without connect info
/// - `user_agent`: empty when the client sent none
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = request.method().clone();
    let path = request.uri().path().to_owned();
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string());
    let user_agent = request
        .headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();

    let response = next.run(request).await;

    tracing::info!(
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        duration = ?start.elapsed(),
        remote_addr = %remote_addr,
        user_agent = %user_agent,
        "HTTP request"
    );

    response
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        middleware,
        routing::post,
    };
    use std::{
        io,
        sync::{Arc, Mutex},
    };
    use tower::util::ServiceExt;
    use tracing_subscriber::fmt::MakeWriter;

    /// In-memory log sink for asserting on emitted records.
    #[derive(Clone, Default)]
    pub(crate) struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        pub(crate) fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }

        /// Install a subscriber writing into this sink for the current thread.
        pub(crate) fn install(&self) -> tracing::subscriber::DefaultGuard {
            let subscriber = tracing_subscriber::fmt()
                .with_writer(self.clone())
                .with_ansi(false)
                .with_max_level(tracing::Level::INFO)
                .finish();
            tracing::subscriber::set_default(subscriber)
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn app() -> Router {
        Router::new()
            .route("/items", post(|| async { (StatusCode::CREATED, "created") }))
            .route("/plain", post(|| async { "ok" }))
            .layer(middleware::from_fn(logging_middleware))
    }

    #[tokio::test]
    async fn test_logs_status_written_by_handler() {
        let logs = CapturedLogs::default();
        let _guard = logs.install();

        let request = Request::builder()
            .method("POST")
            .uri("/items")
            .header(header::USER_AGENT, "curl/8.5.0")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let output = logs.contents();
        assert!(output.contains("HTTP request"), "{output}");
        assert!(output.contains("method=POST"), "{output}");
        assert!(output.contains("path=/items"), "{output}");
        assert!(output.contains("status=201"), "{output}");
        assert!(output.contains("user_agent=curl/8.5.0"), "{output}");
        assert!(output.contains("remote_addr=unknown"), "{output}");
        assert!(output.contains("duration="), "{output}");
    }

    #[tokio::test]
    async fn test_default_status_is_200() {
        let logs = CapturedLogs::default();
        let _guard = logs.install();

        let request = Request::builder()
            .method("POST")
            .uri("/plain")
            .body(Body::empty())
            .unwrap();
        app().oneshot(request).await.unwrap();

        assert!(logs.contents().contains("status=200"));
    }

    #[tokio::test]
    async fn test_one_record_per_request() {
        let logs = CapturedLogs::default();
        let _guard = logs.install();

        for _ in 0..3 {
            let request = Request::builder()
                .method("POST")
                .uri("/plain")
                .body(Body::empty())
                .unwrap();
            app().oneshot(request).await.unwrap();
        }

        assert_eq!(logs.contents().matches("HTTP request").count(), 3);
    }

    #[tokio::test]
    async fn test_remote_addr_comes_from_connect_info() {
        let logs = CapturedLogs::default();
        let _guard = logs.install();

        let addr: SocketAddr = "203.0.113.9:51000".parse().unwrap();
        let mut request = Request::builder()
            .method("POST")
            .uri("/plain")
            .body(Body::empty())
            .unwrap();
        request.extensions_mut().insert(ConnectInfo(addr));
        app().oneshot(request).await.unwrap();

        assert!(logs.contents().contains("remote_addr=203.0.113.9:51000"));
    }
}

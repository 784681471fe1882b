//! Hosted invocation transport.
//!
//! When `RUN_MODE=invoke` the process does not bind a TCP listener.
//! Instead it reads newline-delimited JSON invocation envelopes from
//! stdin, dispatches each through the same router the local server
//! uses, and writes one JSON response per line to stdout. This is the
//! request-handling entry point an embedding host drives.
//!
//! Envelope: `{"method": "GET", "path": "/books", "body": {...}}`.
//! Response: `{"status": 200, "body": ...}`.

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::Request;
use axum::Router;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tower::ServiceExt;

/// One invocation from the embedding host.
#[derive(Debug, Deserialize)]
pub struct InvokeRequest {
    /// HTTP method name (`GET`, `POST`, ...).
    pub method: String,
    /// Request path, e.g. `/books/{id}` with the id substituted.
    pub path: String,
    /// Optional JSON request body.
    #[serde(default)]
    pub body: Option<Value>,
}

/// The response returned to the embedding host.
#[derive(Debug, Serialize)]
pub struct InvokeResponse {
    /// HTTP status code of the dispatched request.
    pub status: u16,
    /// JSON response body.
    pub body: Value,
}

/// Dispatch a single invocation through the router.
///
/// Failures building the request or reading the response are reported
/// the same way handler failures are: status 500 with an `error` body.
pub async fn dispatch(router: Router, request: InvokeRequest) -> InvokeResponse {
    let req = match build_http_request(&request) {
        Ok(req) => req,
        Err(message) => return error_response(message),
    };

    let response = match router.oneshot(req).await {
        Ok(response) => response,
        Err(never) => match never {},
    };

    let status = response.status().as_u16();
    let bytes = match axum::body::to_bytes(response.into_body(), usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => return error_response(format!("failed to read response body: {e}")),
    };

    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    InvokeResponse { status, body }
}

/// Serve invocations until the input stream closes.
///
/// Blank lines are skipped. A line that is not a valid envelope yields
/// a status-500 response on the output stream rather than ending the
/// loop.
///
/// # Errors
///
/// Returns an error if reading from the input or writing to the
/// output fails.
pub async fn run<R, W>(router: Router, reader: R, mut writer: W) -> Result<(), std::io::Error>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(reader).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<InvokeRequest>(line) {
            Ok(request) => dispatch(router.clone(), request).await,
            Err(e) => error_response(format!("invalid invocation envelope: {e}")),
        };

        let mut out = serde_json::to_vec(&response).map_err(std::io::Error::other)?;
        out.push(b'\n');
        writer.write_all(&out).await?;
        writer.flush().await?;
    }

    tracing::info!("invocation stream closed");
    Ok(())
}

/// Build the HTTP request for an invocation envelope.
fn build_http_request(request: &InvokeRequest) -> Result<Request<Body>, String> {
    let builder = Request::builder()
        .method(request.method.as_str())
        .uri(request.path.as_str());

    let result = match &request.body {
        Some(body) => match serde_json::to_vec(body) {
            Ok(bytes) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(bytes)),
            Err(e) => return Err(format!("invalid request body: {e}")),
        },
        None => builder.body(Body::empty()),
    };

    result.map_err(|e| format!("invalid invocation: {e}"))
}

/// A status-500 response carrying the error text.
fn error_response(message: String) -> InvokeResponse {
    InvokeResponse {
        status: 500,
        body: serde_json::json!({ "error": message }),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::indexing_slicing)]

    use std::io::Cursor;
    use std::sync::Arc;

    use bookshelf_api::{build_router, AppState};
    use bookshelf_db::MemoryBookStore;
    use serde_json::json;

    use super::*;

    fn make_router() -> Router {
        let state = Arc::new(AppState::new(Arc::new(MemoryBookStore::new())));
        build_router(state)
    }

    #[tokio::test]
    async fn dispatch_health_check() {
        let response = dispatch(
            make_router(),
            InvokeRequest {
                method: "GET".to_owned(),
                path: "/".to_owned(),
                body: None,
            },
        )
        .await;

        assert_eq!(response.status, 200);
        assert!(response.body["message"].is_string());
    }

    #[tokio::test]
    async fn dispatch_create_and_get() {
        let router = make_router();

        let created = dispatch(
            router.clone(),
            InvokeRequest {
                method: "POST".to_owned(),
                path: "/books".to_owned(),
                body: Some(json!({ "title": "Dune", "author": "Herbert" })),
            },
        )
        .await;
        assert_eq!(created.status, 201);

        let id = created.body["id"].as_str().unwrap().to_owned();
        let fetched = dispatch(
            router,
            InvokeRequest {
                method: "GET".to_owned(),
                path: format!("/books/{id}"),
                body: None,
            },
        )
        .await;
        assert_eq!(fetched.status, 200);
        assert_eq!(fetched.body["title"], "Dune");
    }

    #[tokio::test]
    async fn dispatch_bad_method_is_500() {
        let response = dispatch(
            make_router(),
            InvokeRequest {
                method: "NOT A METHOD".to_owned(),
                path: "/".to_owned(),
                body: None,
            },
        )
        .await;

        assert_eq!(response.status, 500);
        assert!(response.body["error"].is_string());
    }

    #[tokio::test]
    async fn run_serves_envelopes_and_survives_garbage() {
        let input = concat!(
            r#"{"method":"POST","path":"/books","body":{"title":"Dune","author":"Herbert"}}"#,
            "\n",
            "not json\n",
            "\n",
            r#"{"method":"GET","path":"/books"}"#,
            "\n",
        );

        let mut output = Cursor::new(Vec::new());
        run(make_router(), input.as_bytes(), &mut output)
            .await
            .unwrap();

        let written = String::from_utf8(output.into_inner()).unwrap();
        let responses: Vec<InvokeResponseProbe> = written
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(responses.len(), 3);
        assert_eq!(responses[0].status, 201);
        assert_eq!(responses[1].status, 500);
        assert_eq!(responses[2].status, 200);
        assert_eq!(responses[2].body.as_array().unwrap().len(), 1);
    }

    /// Deserializable mirror of [`InvokeResponse`] for assertions.
    #[derive(Debug, Deserialize)]
    struct InvokeResponseProbe {
        status: u16,
        body: Value,
    }
}

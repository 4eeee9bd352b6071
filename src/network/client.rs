//! HTTP client wrapper - executes requests and collects responses

use std::time::{Duration, Instant};

use futures_util::StreamExt;
use reqwest::header::HeaderMap;
use reqwest::redirect::Policy;
use reqwest::Method;

use crate::constants::MAX_REDIRECTS;
use crate::models::{Header, Request};
use crate::network::buffer::ResponseBuffer;

/// A response that was received in full
#[derive(Debug)]
pub struct Response {
    pub status: u16,
    pub reason: Option<&'static str>,
    /// e.g. `HTTP/1.1`
    pub version: String,
    pub headers: Vec<(String, String)>,
    /// `METHOD url` of the request as it went out
    pub request_line: String,
    pub request_headers: Vec<(String, String)>,
    pub body: ResponseBuffer,
    pub time_ms: f64,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Result of one request/response cycle.
///
/// Failures are values rather than errors: they are shown to the user and
/// the menu loop carries on.
#[derive(Debug)]
pub enum Exchange {
    Completed(Response),
    Failed { message: String, time_ms: f64 },
}

/// Create an HTTP client configured for this request's options
fn create_client(request: &Request) -> reqwest::Result<reqwest::Client> {
    let redirect = if request.follow_redirects {
        Policy::limited(MAX_REDIRECTS)
    } else {
        Policy::none()
    };

    let mut builder = reqwest::Client::builder().redirect(redirect);
    if request.timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(request.timeout_secs));
    }
    builder.build()
}

/// Build a request from the given parameters
fn build_request(client: &reqwest::Client, request: &Request) -> Result<reqwest::Request, String> {
    let method = Method::from_bytes(request.method.as_bytes())
        .map_err(|_| format!("Invalid HTTP method: {}", request.method))?;

    let mut req_builder = client.request(method, request.url.as_str());

    for raw in &request.headers {
        match Header::parse(raw) {
            Some(header) => req_builder = req_builder.header(header.key.trim(), header.value),
            None => tracing::warn!(header = %raw, "Skipping header without ':'"),
        }
    }

    // Sent for any method, the way curl sends POSTFIELDS with a custom verb
    if !request.body.is_empty() {
        req_builder = req_builder.body(request.body.clone());
    }

    req_builder.build().map_err(|e| describe_error(&e))
}

fn header_pairs(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
        .collect()
}

fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

/// Human-readable description of a transport failure
fn describe_error(error: &reqwest::Error) -> String {
    let detail = error_chain(error);
    if error.is_timeout() {
        format!("Timeout was reached ({detail})")
    } else if error.is_connect() {
        format!("Couldn't connect to server: {detail}")
    } else if error.is_redirect() {
        format!("Too many redirects: {detail}")
    } else if error.is_builder() {
        format!("Invalid request: {detail}")
    } else if error.is_body() || error.is_decode() {
        format!("Failure when receiving data: {detail}")
    } else {
        detail
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

async fn send(request: &Request, start: Instant) -> Result<Response, String> {
    let client = create_client(request).map_err(|e| describe_error(&e))?;
    let http_request = build_request(&client, request)?;

    let request_line = format!("{} {}", http_request.method(), http_request.url());
    let request_headers = header_pairs(http_request.headers());

    let resp = client
        .execute(http_request)
        .await
        .map_err(|e| describe_error(&e))?;

    let status = resp.status();
    let version = format!("{:?}", resp.version());
    let headers = header_pairs(resp.headers());

    let mut body = ResponseBuffer::new();
    let mut stream = resp.bytes_stream();
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| describe_error(&e))?;
        body.append(&chunk)
            .map_err(|e| format!("Not enough memory: {e}"))?;
    }

    Ok(Response {
        status: status.as_u16(),
        reason: status.canonical_reason(),
        version,
        headers,
        request_line,
        request_headers,
        body,
        time_ms: elapsed_ms(start),
    })
}

/// Execute an HTTP request and buffer the whole response.
///
/// A fresh client is built per call so that the request's redirect and
/// timeout options apply. Never returns an error; failures come back as
/// [`Exchange::Failed`].
pub async fn execute_request(request: &Request) -> Exchange {
    let start = Instant::now();
    tracing::info!(method = %request.method, url = %request.url, "Executing request");

    match send(request, start).await {
        Ok(response) => {
            tracing::info!(
                status = response.status,
                bytes = response.body.len(),
                time_ms = response.time_ms,
                "Request completed"
            );
            Exchange::Completed(response)
        }
        Err(message) => {
            let time_ms = elapsed_ms(start);
            tracing::warn!(error = %message, time_ms, "Request failed");
            Exchange::Failed { message, time_ms }
        }
    }
}

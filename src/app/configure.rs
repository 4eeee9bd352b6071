//! Interactive population of a [`Request`]

use std::io::{BufRead, Write};

use anyhow::Result;
use crossterm::style::Stylize;

use crate::app::console::Console;
use crate::app::render;
use crate::constants::{BODY_TERMINATOR, DEFAULT_METHOD, JSON_CONTENT_TYPE};
use crate::models::Request;

/// Leading decimal digits as a number; anything else counts as zero
fn parse_timeout(input: &str) -> u64 {
    let digits: String = input
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}

/// Walks the user through every request field and returns the new request
pub fn configure_request<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Request> {
    writeln!(console.output(), "\n{}", "=== Configure Request ===".cyan())?;

    let mut request = Request {
        url: console
            .prompt("\nEnter URL: ")?
            .unwrap_or_default()
            .trim()
            .to_string(),
        ..Request::default()
    };

    let method = console
        .prompt(&format!(
            "Enter Method (GET/POST/PUT/DELETE/PATCH) [{DEFAULT_METHOD}]: "
        ))?
        .unwrap_or_default();
    let method = method.trim();
    if !method.is_empty() {
        request.method = method.to_ascii_uppercase();
    }

    if console.confirm("\nAdd headers? (y/n) [n]: ", false)? {
        writeln!(
            console.output(),
            "Enter headers (format: Key: Value, empty line to finish):"
        )?;
        loop {
            let label = format!("  Header {}: ", request.headers.len() + 1);
            match console.prompt(&label)? {
                Some(line) if !line.is_empty() => request.headers.push(line),
                _ => break,
            }
        }
    }

    if request.method_accepts_body() && console.confirm("\nAdd request body? (y/n) [n]: ", false)? {
        writeln!(
            console.output(),
            "\nEnter request body (multiline supported, end with {BODY_TERMINATOR} on new line):"
        )?;
        request.body = console.read_multiline()?;

        if request.body_looks_like_json() && !request.has_content_type() {
            request.headers.push(JSON_CONTENT_TYPE.to_string());
            render::notice(
                console.output(),
                &format!("Auto-added {JSON_CONTENT_TYPE} header"),
            )?;
        }
    }

    request.follow_redirects = console.confirm("\nFollow redirects? (y/n) [y]: ", true)?;

    let timeout = console
        .prompt("Timeout in seconds (0 for none) [0]: ")?
        .unwrap_or_default();
    request.timeout_secs = parse_timeout(&timeout);

    request.verbose = console.confirm("Verbose mode? (y/n) [n]: ", false)?;

    tracing::debug!(?request, "Request configured");
    Ok(request)
}

use crate::models::Request;

/// Format request as cURL command
pub fn to_curl(request: &Request) -> String {
    let mut parts = vec![format!("curl -X {} '{}'", request.method, request.url)];

    // Headers
    for header in request.split_headers() {
        parts.push(format!("-H '{}: {}'", header.key, header.value));
    }

    // Body
    if !request.body.is_empty() {
        parts.push(format!("-d '{}'", request.body.replace('\'', "'\\''")));
    }

    if request.follow_redirects {
        parts.push("-L".to_string());
    }

    if request.timeout_secs > 0 {
        parts.push(format!("--max-time {}", request.timeout_secs));
    }

    if request.verbose {
        parts.push("-v".to_string());
    }

    parts.join(" \\\n  ")
}

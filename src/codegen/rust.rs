use super::shorthand_verb;
use crate::models::Request;

/// Wraps `text` in a raw string literal with enough `#`s that no `"#...`
/// sequence inside it can terminate the literal early.
fn raw_string_literal(text: &str) -> String {
    let mut longest = 0;
    let mut run: Option<usize> = None;
    for c in text.chars() {
        run = match (c, run) {
            ('"', _) => Some(0),
            ('#', Some(n)) => Some(n + 1),
            _ => None,
        };
        if let Some(n) = run {
            longest = longest.max(n);
        }
    }
    let hashes = "#".repeat(longest + 1);
    format!("r{hashes}\"{text}\"{hashes}")
}

/// Format request as an async Rust program using `reqwest`
pub fn to_reqwest(request: &Request) -> String {
    let mut code = String::from("use reqwest;\n\n");
    code.push_str("#[tokio::main]\n");
    code.push_str("async fn main() -> Result<(), Box<dyn std::error::Error>> {\n");

    if request.follow_redirects {
        code.push_str("    let client = reqwest::Client::new();\n");
    } else {
        code.push_str("    let client = reqwest::Client::builder()\n");
        code.push_str("        .redirect(reqwest::redirect::Policy::none())\n");
        code.push_str("        .build()?;\n");
    }

    if !request.body.is_empty() {
        code.push_str(&format!(
            "    let body = {};\n\n",
            raw_string_literal(&request.body)
        ));
    }

    match shorthand_verb(&request.method) {
        Some(verb) => {
            code.push_str(&format!(
                "    let response = client.{verb}(\"{}\")\n",
                request.url
            ));
        }
        None => {
            code.push_str(&format!(
                "    let response = client.request(reqwest::Method::from_bytes(b\"{}\")?, \"{}\")\n",
                request.method, request.url
            ));
        }
    }

    for header in request.split_headers() {
        code.push_str(&format!(
            "        .header(\"{}\", \"{}\")\n",
            header.key, header.value
        ));
    }

    if request.timeout_secs > 0 {
        code.push_str(&format!(
            "        .timeout(std::time::Duration::from_secs({}))\n",
            request.timeout_secs
        ));
    }

    if !request.body.is_empty() {
        code.push_str("        .body(body)\n");
    }

    code.push_str("        .send()\n");
    code.push_str("        .await?;\n\n");
    code.push_str("    let body = response.text().await?;\n");
    code.push_str("    println!(\"{}\", body);\n");
    code.push_str("    Ok(())\n");
    code.push_str("}\n");
    code
}

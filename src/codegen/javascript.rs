use crate::models::Request;

/// Format request as a browser/Node `fetch` call
pub fn to_fetch(request: &Request) -> String {
    let mut code = format!("fetch('{}', {{\n", request.url);
    code.push_str(&format!("  method: '{}',\n", request.method));

    let headers: Vec<String> = request
        .split_headers()
        .map(|h| format!("    '{}': '{}'", h.key, h.value))
        .collect();
    if !headers.is_empty() {
        code.push_str("  headers: {\n");
        code.push_str(&headers.join(",\n"));
        code.push_str("\n  },\n");
    }

    if !request.follow_redirects {
        code.push_str("  redirect: 'manual',\n");
    }

    if !request.body.is_empty() {
        if request.body_looks_like_json() {
            code.push_str(&format!("  body: JSON.stringify({})\n", request.body));
        } else {
            code.push_str(&format!("  body: '{}'\n", request.body));
        }
    }

    code.push_str("})\n");
    code.push_str("  .then(response => response.json())\n");
    code.push_str("  .then(data => console.log(data))\n");
    code.push_str("  .catch(error => console.error('Error:', error));\n");
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_without_headers_has_no_headers_block() {
        let request = Request {
            url: "http://x/y".to_string(),
            ..Request::default()
        };
        let code = to_fetch(&request);
        assert!(code.starts_with("fetch('http://x/y', {\n  method: 'GET',\n})"));
        assert!(!code.contains("headers"));
        assert!(!code.contains("body:"));
    }

    #[test]
    fn json_body_is_stringified() {
        let request = Request {
            url: "http://x".to_string(),
            method: "POST".to_string(),
            body: r#"{"a":1}"#.to_string(),
            ..Request::default()
        };
        assert!(to_fetch(&request).contains(r#"  body: JSON.stringify({"a":1})"#));
    }

    #[test]
    fn plain_body_is_a_string_literal() {
        let request = Request {
            url: "http://x".to_string(),
            method: "POST".to_string(),
            body: "hello=world".to_string(),
            ..Request::default()
        };
        let code = to_fetch(&request);
        assert!(code.contains("  body: 'hello=world'"));
        assert!(!code.contains("JSON.stringify"));
    }

    #[test]
    fn header_separators_ignore_skipped_lines() {
        let request = Request {
            url: "http://x".to_string(),
            headers: vec![
                "A: 1".to_string(),
                "B: 2".to_string(),
                "no colon".to_string(),
            ],
            ..Request::default()
        };
        let code = to_fetch(&request);
        assert!(code.contains("  headers: {\n    'A': '1',\n    'B': '2'\n  },\n"));
    }

    #[test]
    fn custom_verb_is_passed_through() {
        let request = Request {
            url: "http://x".to_string(),
            method: "PATCH".to_string(),
            ..Request::default()
        };
        assert!(to_fetch(&request).contains("  method: 'PATCH',\n"));
    }

    #[test]
    fn disabled_redirects_use_manual_mode() {
        let request = Request {
            url: "http://x".to_string(),
            follow_redirects: false,
            ..Request::default()
        };
        assert!(to_fetch(&request).contains("  redirect: 'manual',\n"));
    }
}

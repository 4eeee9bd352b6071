use super::shorthand_verb;
use crate::models::Request;

/// Format request as a Python `requests` script
pub fn to_requests(request: &Request) -> String {
    let mut code = String::from("import requests\nimport json\n\n");
    code.push_str(&format!("url = '{}'\n", request.url));

    let headers: Vec<String> = request
        .split_headers()
        .map(|h| format!("    '{}': '{}'", h.key, h.value))
        .collect();
    if !headers.is_empty() {
        code.push_str("headers = {\n");
        code.push_str(&headers.join(",\n"));
        code.push_str("\n}\n");
    }
    code.push('\n');

    let mut args = match shorthand_verb(&request.method) {
        Some(verb) => format!("requests.{verb}(url"),
        None => format!("requests.request('{}', url", request.method),
    };

    if !headers.is_empty() {
        args.push_str(", headers=headers");
    }

    if !request.body.is_empty() {
        if request.body_looks_like_json() {
            code.push_str(&format!("payload = json.loads('''{}''')\n\n", request.body));
            args.push_str(", json=payload");
        } else {
            code.push_str(&format!("data = '''{}'''\n\n", request.body));
            args.push_str(", data=data");
        }
    }

    if !request.follow_redirects {
        args.push_str(", allow_redirects=False");
    }
    if request.timeout_secs > 0 {
        args.push_str(&format!(", timeout={}", request.timeout_secs));
    }

    code.push_str(&format!("response = {args})\n"));
    code.push_str("print(response.json())\n");
    code
}

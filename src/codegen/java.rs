use crate::models::Request;

const PUBLISHER_NO_BODY: &str = "HttpRequest.BodyPublishers.noBody()";
const PUBLISHER_BODY: &str = "HttpRequest.BodyPublishers.ofString(jsonBody)";

/// The terminating builder call that sets the method and body publisher.
///
/// `GET()` and `DELETE()` take no publisher in `java.net.http`, so a body
/// on those verbs falls back to the generic `method(...)` call.
fn method_call(method: &str, has_body: bool) -> String {
    let publisher = if has_body {
        PUBLISHER_BODY
    } else {
        PUBLISHER_NO_BODY
    };
    match (method, has_body) {
        ("GET" | "DELETE", false) => format!(".{method}()"),
        ("POST" | "PUT", _) => format!(".{method}({publisher})"),
        _ => format!(".method(\"{method}\", {publisher})"),
    }
}

/// Format request as a Java 11+ `HttpClient` program
pub fn to_http_client(request: &Request) -> String {
    let has_body = !request.body.is_empty();

    let mut code = String::new();
    code.push_str("import java.net.URI;\n");
    code.push_str("import java.net.http.HttpClient;\n");
    code.push_str("import java.net.http.HttpRequest;\n");
    code.push_str("import java.net.http.HttpResponse;\n");
    if request.timeout_secs > 0 {
        code.push_str("import java.time.Duration;\n");
    }
    code.push('\n');
    code.push_str("public class HttpExample {\n");
    code.push_str("    public static void main(String[] args) throws Exception {\n");

    if request.follow_redirects {
        code.push_str("        HttpClient client = HttpClient.newBuilder()\n");
        code.push_str("            .followRedirects(HttpClient.Redirect.NORMAL)\n");
        code.push_str("            .build();\n");
    } else {
        code.push_str("        HttpClient client = HttpClient.newHttpClient();\n");
    }

    if has_body {
        code.push_str("        String jsonBody = \"\"\"\n");
        for line in request.body.lines() {
            code.push_str(&format!("            {line}\n"));
        }
        code.push_str("            \"\"\";\n\n");
    }

    code.push_str("        HttpRequest.Builder builder = HttpRequest.newBuilder()\n");
    code.push_str(&format!("            .uri(URI.create(\"{}\"))\n", request.url));

    for header in request.split_headers() {
        code.push_str(&format!(
            "            .header(\"{}\", \"{}\")\n",
            header.key, header.value
        ));
    }

    if request.timeout_secs > 0 {
        code.push_str(&format!(
            "            .timeout(Duration.ofSeconds({}))\n",
            request.timeout_secs
        ));
    }

    code.push_str(&format!(
        "            {};\n",
        method_call(&request.method, has_body)
    ));

    code.push_str("\n        HttpRequest request = builder.build();\n");
    code.push_str("        HttpResponse<String> response = client.send(request,\n");
    code.push_str("            HttpResponse.BodyHandlers.ofString());\n");
    code.push_str("        System.out.println(response.body());\n");
    code.push_str("    }\n");
    code.push_str("}\n");
    code
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_calls() {
        assert_eq!(method_call("GET", false), ".GET()");
        assert_eq!(method_call("DELETE", false), ".DELETE()");
        assert_eq!(
            method_call("POST", true),
            ".POST(HttpRequest.BodyPublishers.ofString(jsonBody))"
        );
        assert_eq!(
            method_call("PUT", false),
            ".PUT(HttpRequest.BodyPublishers.noBody())"
        );
        assert_eq!(
            method_call("PATCH", true),
            ".method(\"PATCH\", HttpRequest.BodyPublishers.ofString(jsonBody))"
        );
        assert_eq!(
            method_call("GET", true),
            ".method(\"GET\", HttpRequest.BodyPublishers.ofString(jsonBody))"
        );
    }

    #[test]
    fn multiline_body_goes_into_text_block() {
        let request = Request {
            url: "http://x".to_string(),
            method: "POST".to_string(),
            body: "{\n  \"a\": 1\n}".to_string(),
            ..Request::default()
        };
        let code = to_http_client(&request);
        assert!(code.contains(
            "        String jsonBody = \"\"\"\n            {\n              \"a\": 1\n            }\n            \"\"\";\n"
        ));
        assert!(code.contains(".POST(HttpRequest.BodyPublishers.ofString(jsonBody));"));
    }

    #[test]
    fn headers_and_uri_are_rendered() {
        let request = Request {
            url: "http://x/y".to_string(),
            headers: vec!["Accept:  */*".to_string(), "junk".to_string()],
            ..Request::default()
        };
        let code = to_http_client(&request);
        assert!(code.contains(
            "            .uri(URI.create(\"http://x/y\"))\n            .header(\"Accept\", \"*/*\")\n            .GET();\n"
        ));
        assert!(!code.contains("junk"));
        assert!(!code.contains("jsonBody"));
    }

    #[test]
    fn timeout_adds_import_and_builder_call() {
        let request = Request {
            url: "http://x".to_string(),
            timeout_secs: 9,
            follow_redirects: false,
            ..Request::default()
        };
        let code = to_http_client(&request);
        assert!(code.contains("import java.time.Duration;\n"));
        assert!(code.contains(".timeout(Duration.ofSeconds(9))"));
        assert!(code.contains("HttpClient.newHttpClient();"));
    }
}

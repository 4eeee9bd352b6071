use crate::constants::DEFAULT_METHOD;

/// A header line split into its key and value.
///
/// Borrowed from the raw `"Key: Value"` string stored on the [`Request`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header<'a> {
    pub key: &'a str,
    pub value: &'a str,
}

impl<'a> Header<'a> {
    /// Splits a raw header on its first `:`.
    ///
    /// Returns `None` when there is no colon. Leading spaces of the value are
    /// stripped; the key is kept exactly as typed.
    pub fn parse(raw: &'a str) -> Option<Self> {
        let (key, value) = raw.split_once(':')?;
        Some(Header {
            key,
            value: value.trim_start_matches(' '),
        })
    }
}

/// A single HTTP request, as configured from the prompts
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub url: String,
    /// Uppercased verb exactly as typed; not validated
    pub method: String,
    /// Raw `"Key: Value"` lines in insertion order, duplicates allowed
    pub headers: Vec<String>,
    pub body: String,
    pub follow_redirects: bool,
    pub verbose: bool,
    /// Zero means no timeout
    pub timeout_secs: u64,
}

impl Default for Request {
    fn default() -> Self {
        Request {
            url: String::new(),
            method: String::from(DEFAULT_METHOD),
            headers: Vec::new(),
            body: String::new(),
            follow_redirects: true,
            verbose: false,
            timeout_secs: 0,
        }
    }
}

impl Request {
    /// True until a request has been configured
    pub fn is_unset(&self) -> bool {
        self.url.is_empty()
    }

    /// Headers that contain a colon, split into key and value.
    /// Lines without a colon are skipped.
    pub fn split_headers(&self) -> impl Iterator<Item = Header<'_>> {
        self.headers.iter().filter_map(|h| Header::parse(h))
    }

    /// First-character heuristic: a body starting with `{` or `[` is treated as JSON
    pub fn body_looks_like_json(&self) -> bool {
        looks_like_json(self.body.as_bytes())
    }

    pub fn has_content_type(&self) -> bool {
        self.headers.iter().any(|h| {
            h.get(..13)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("content-type:"))
        })
    }

    /// Whether the prompts offer a body for this method
    pub fn method_accepts_body(&self) -> bool {
        self.method != "GET" && self.method != "DELETE"
    }
}

/// Returns true when the first byte is `{` or `[`.
pub fn looks_like_json(bytes: &[u8]) -> bool {
    matches!(bytes.first(), Some(b'{') | Some(b'['))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_parse_strips_leading_spaces_of_value() {
        let header = Header::parse("Accept:    text/plain").unwrap();
        assert_eq!(header.key, "Accept");
        assert_eq!(header.value, "text/plain");
    }

    #[test]
    fn header_parse_splits_on_first_colon_only() {
        let header = Header::parse("X-Time: 12:30:00").unwrap();
        assert_eq!(header.key, "X-Time");
        assert_eq!(header.value, "12:30:00");
    }

    #[test]
    fn header_without_colon_is_rejected() {
        assert!(Header::parse("NoColonHere").is_none());
    }

    #[test]
    fn split_headers_skips_invalid_and_keeps_order() {
        let request = Request {
            headers: vec![
                "B: 2".to_string(),
                "garbage".to_string(),
                "A: 1".to_string(),
                "B: 3".to_string(),
            ],
            ..Request::default()
        };
        let keys: Vec<_> = request.split_headers().map(|h| (h.key, h.value)).collect();
        assert_eq!(keys, vec![("B", "2"), ("A", "1"), ("B", "3")]);
    }

    #[test]
    fn default_request_is_get_following_redirects() {
        let request = Request::default();
        assert_eq!(request.method, "GET");
        assert!(request.follow_redirects);
        assert!(!request.verbose);
        assert_eq!(request.timeout_secs, 0);
        assert!(request.is_unset());
    }

    #[test]
    fn content_type_detection_is_case_insensitive() {
        let request = Request {
            headers: vec!["content-TYPE: text/plain".to_string()],
            ..Request::default()
        };
        assert!(request.has_content_type());
        assert!(!Request::default().has_content_type());
    }

    #[test]
    fn json_heuristic_only_checks_first_character() {
        assert!(looks_like_json(b"{not really json"));
        assert!(looks_like_json(b"[1, 2"));
        assert!(!looks_like_json(b" {\"a\":1}"));
        assert!(!looks_like_json(b""));
    }
}

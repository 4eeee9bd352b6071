//! Code generation - renders a request as equivalent code for other tools
//!
//! Every generator is a pure function from [`Request`] to text and never
//! fails; missing pieces just produce a smaller snippet.

pub mod curl;
pub mod java;
pub mod javascript;
pub mod python;
pub mod rust;

use crate::models::Request;

/// Target language of a generated snippet
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CodeTarget {
    Curl,
    JavaScript,
    Python,
    Rust,
    Java,
}

impl CodeTarget {
    /// All targets, in the order "generate all" renders them
    pub const ALL: [CodeTarget; 5] = [
        CodeTarget::Curl,
        CodeTarget::JavaScript,
        CodeTarget::Python,
        CodeTarget::Rust,
        CodeTarget::Java,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            CodeTarget::Curl => "cURL",
            CodeTarget::JavaScript => "JavaScript (Fetch API)",
            CodeTarget::Python => "Python (requests)",
            CodeTarget::Rust => "Rust (reqwest)",
            CodeTarget::Java => "Java (HttpClient)",
        }
    }

    /// Label used in the code generation menu
    pub fn menu_label(&self) -> &'static str {
        match self {
            CodeTarget::Curl => "cURL",
            CodeTarget::JavaScript => "JavaScript (Fetch)",
            CodeTarget::Python => "Python (requests)",
            CodeTarget::Rust => "Rust (reqwest)",
            CodeTarget::Java => "Java (HttpClient)",
        }
    }

    /// Renders just the code for this target
    pub fn render(&self, request: &Request) -> String {
        match self {
            CodeTarget::Curl => curl::to_curl(request),
            CodeTarget::JavaScript => javascript::to_fetch(request),
            CodeTarget::Python => python::to_requests(request),
            CodeTarget::Rust => rust::to_reqwest(request),
            CodeTarget::Java => java::to_http_client(request),
        }
    }

    /// Renders the heading followed by the code
    pub fn render_section(&self, request: &Request) -> String {
        format!("{}\n{}\n", self.heading(), self.render(request))
    }

    pub fn heading(&self) -> String {
        format!("=== {} ===", self.title())
    }
}

/// Renders every target in [`CodeTarget::ALL`] order
pub fn render_all(request: &Request) -> String {
    CodeTarget::ALL
        .iter()
        .map(|target| target.render_section(request))
        .collect()
}

/// Lowercase name of one of the four verbs the client libraries expose as
/// dedicated functions; `None` for anything else.
pub(crate) fn shorthand_verb(method: &str) -> Option<&'static str> {
    match method {
        "GET" => Some("get"),
        "POST" => Some("post"),
        "PUT" => Some("put"),
        "DELETE" => Some("delete"),
        _ => None,
    }
}

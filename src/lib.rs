//! # HTTPX
//!
//! A simple interactive command-line HTTP client.
//!
//! ## Features
//! - Any HTTP method, custom headers, multiline bodies
//! - Redirect, timeout and verbose options
//! - Response timing and JSON re-indenting
//! - Code generation: cURL, JavaScript (fetch), Python (requests),
//!   Rust (reqwest), Java (HttpClient)
//!
//! ## Architecture
//! - App layer - menu loop and prompts over any reader/writer
//! - Network layer - one reqwest call per request, awaited in place
//! - Codegen / JSON - pure string transformations

pub mod app;
pub mod codegen;
pub mod constants;
pub mod json;
pub mod models;
pub mod network;

// Re-export commonly used types
pub use app::Shell;
pub use codegen::{render_all, CodeTarget};
pub use json::format_json;
pub use models::{Header, Request};
pub use network::{execute_request, Exchange, Response, ResponseBuffer};

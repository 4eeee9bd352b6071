//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Application name
pub const APP_NAME: &str = "HTTPX";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Method used when the user leaves the method prompt empty
pub const DEFAULT_METHOD: &str = "GET";

/// A line consisting of exactly this text ends multiline body input
pub const BODY_TERMINATOR: &str = "@@@";

/// Maximum number of redirects followed when redirects are enabled
pub const MAX_REDIRECTS: usize = 10;

/// Header added automatically when a JSON-looking body has no content type
pub const JSON_CONTENT_TYPE: &str = "Content-Type: application/json";

/// Directory (under the home directory) that holds the log file
pub const LOG_DIR_NAME: &str = ".httpx";

/// Log file name
pub const LOG_FILE_NAME: &str = "httpx.log";

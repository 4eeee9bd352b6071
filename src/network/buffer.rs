//! Response body accumulation

use std::borrow::Cow;
use std::collections::TryReserveError;

use crate::json::format_json;
use crate::models::looks_like_json;

/// Raw bytes of one response body, grown chunk by chunk as they arrive.
///
/// Growth is fallible: an allocation failure is returned to the caller,
/// which abandons the request instead of aborting the process.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ResponseBuffer {
    bytes: Vec<u8>,
}

impl ResponseBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a chunk, reserving the space first
    pub fn append(&mut self, chunk: &[u8]) -> Result<(), TryReserveError> {
        self.bytes.try_reserve(chunk.len())?;
        self.bytes.extend_from_slice(chunk);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Lossy UTF-8 view of the body
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// True when the first byte is `{` or `[`
    pub fn looks_like_json(&self) -> bool {
        looks_like_json(&self.bytes)
    }

    /// Body as shown to the user: re-indented when it looks like JSON,
    /// otherwise the raw text
    pub fn render(&self) -> String {
        if self.looks_like_json() {
            format_json(&self.text())
        } else {
            self.text().into_owned()
        }
    }
}

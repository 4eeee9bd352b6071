//! Network layer - HTTP request execution
//!
//! One request at a time: the caller awaits [`execute_request`] before
//! doing anything else.

pub mod buffer;
pub mod client;

pub use buffer::ResponseBuffer;
pub use client::{execute_request, Exchange, Response};

//! App layer - the interactive shell
//!
//! Reads menu selections and request details from the console, hands
//! requests to the network layer and prints what comes back.

pub mod configure;
pub mod console;
pub mod menu;
pub mod render;
pub mod shell;

pub use console::Console;
pub use menu::{CodeChoice, MainChoice};
pub use shell::Shell;

// Crate root library declaration and module exports.
pub mod cli;
pub mod client;
pub mod color_utils;
pub mod config;
pub mod context;
pub mod logging;
pub mod model;
pub mod server;
pub mod source;
pub mod store;
pub mod viewer;

#[cfg(feature = "tui")]
pub mod tui;

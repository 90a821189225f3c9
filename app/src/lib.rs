//! Host for the todo list client.
//!
//! Runs the sans-IO session from `todoapp-core` on a single-threaded tokio
//! runtime: executes its fetch over HTTP, drives the banner's dismiss timer,
//! reads commands from stdin and writes the rendered page out.

pub mod cli;
pub mod command;
pub mod output;
pub mod runtime;
pub mod timer;
pub mod transport;

pub use cli::Cli;
pub use output::Output;
pub use runtime::{AppEvent, Runtime};
pub use transport::{Transport, TransportError, UreqTransport};

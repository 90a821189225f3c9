//! Sans-IO core of the todo list client.
//!
//! # Overview
//! Builds the startup `HttpRequest`, parses the `HttpResponse`, keeps the
//! view state and renders it, all without touching the network or a clock.
//! The host executes the `Effect`s the session hands back (the fetch and the
//! banner's dismiss timer) and feeds the outcomes in as `Event`s.
//!
//! # Design
//! - `TodoClient` is stateless; it holds only `base_url`.
//! - `Session` is `Unconfigured` or `Ready`, decided once from `Config`.
//! - The filtered list is derived at render time, never stored.
//! - The error banner owns a single dismiss slot so stale timers are inert.

pub mod client;
pub mod config;
pub mod error;
pub mod filter;
pub mod http;
pub mod notification;
pub mod session;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use config::Config;
pub use error::ApiError;
pub use filter::{filter_todos, FilterMode};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use notification::{DismissTicket, ErrorKind, ErrorNotification};
pub use session::{Effect, Event, Session, TodoState};
pub use types::Todo;

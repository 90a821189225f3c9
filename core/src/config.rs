//! Startup configuration.

use std::time::Duration;

use crate::notification::DEFAULT_DISMISS_AFTER;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:3000";

/// Everything the session needs to know before it starts.
///
/// `user_id` of `None` or `Some(0)` both mean "not configured".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
    pub user_id: Option<u64>,
    pub dismiss_after: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            user_id: None,
            dismiss_after: DEFAULT_DISMISS_AFTER,
        }
    }
}

impl Config {
    pub fn new(api_base_url: impl Into<String>, user_id: Option<u64>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            user_id,
            ..Self::default()
        }
    }

    pub fn with_dismiss_after(mut self, dismiss_after: Duration) -> Self {
        self.dismiss_after = dismiss_after;
        self
    }

    /// The user id to fetch for, if one was actually supplied.
    pub fn configured_user(&self) -> Option<u64> {
        self.user_id.filter(|id| *id != 0)
    }
}

//! Display filter over the fetched collection.
//!
//! The filtered list is always derived on demand from the full collection and
//! never stored, so the two can not drift apart.

use std::fmt;
use std::str::FromStr;

use crate::types::Todo;

/// Three-way view restriction applied only for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    pub const ALL: [FilterMode; 3] = [FilterMode::All, FilterMode::Active, FilterMode::Completed];

    pub fn matches(self, todo: &Todo) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !todo.completed,
            FilterMode::Completed => todo.completed,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Active => "Active",
            FilterMode::Completed => "Completed",
        }
    }

    /// Cosmetic link target. The hash is never read back.
    pub fn href(self) -> &'static str {
        match self {
            FilterMode::All => "#/",
            FilterMode::Active => "#/active",
            FilterMode::Completed => "#/completed",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown filter mode `{0}` (expected all, active or completed)")]
pub struct ParseFilterModeError(String);

impl FromStr for FilterMode {
    type Err = ParseFilterModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "active" => Ok(FilterMode::Active),
            "completed" => Ok(FilterMode::Completed),
            _ => Err(ParseFilterModeError(s.to_string())),
        }
    }
}

/// The subset of `todos` accepted by `mode`, in collection order.
pub fn filter_todos(todos: &[Todo], mode: FilterMode) -> Vec<&Todo> {
    todos.iter().filter(|todo| mode.matches(todo)).collect()
}

pub fn active_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| !todo.completed).count()
}

pub fn completed_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|todo| todo.completed).count()
}

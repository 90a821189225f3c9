//! Transient error banner with auto-dismiss.
//!
//! # Design
//! The banner owns at most one pending dismiss ticket. Every `raise` bumps a
//! generation counter and replaces the slot, so a ticket issued for an older
//! message can never hide a newer one: `expire` only acts on the ticket that
//! currently occupies the slot. The host is expected to mirror this with a
//! single abortable timer task, but correctness does not depend on the host
//! actually aborting stale timers.

use std::fmt;
use std::time::Duration;

/// Default delay before a raised error hides itself.
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_secs(3);

/// Error kinds the banner knows how to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Load,
    EmptyTitle,
    Add,
    Delete,
    Update,
    Unknown,
}

impl ErrorKind {
    /// Fixed human-readable text shown in the banner.
    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::Load => "Unable to load todos",
            ErrorKind::EmptyTitle => "Title should not be empty",
            ErrorKind::Add => "Unable to add a todo",
            ErrorKind::Delete => "Unable to delete a todo",
            ErrorKind::Update => "Unable to update a todo",
            ErrorKind::Unknown => "Something went wrong",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Handle for one scheduled auto-dismiss.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DismissTicket {
    generation: u64,
    after: Duration,
}

impl DismissTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// How long the host should wait before calling `expire`.
    pub fn after(&self) -> Duration {
        self.after
    }
}

/// Current message, visibility and the single pending-dismiss slot.
#[derive(Debug, Clone)]
pub struct ErrorNotification {
    message: Option<String>,
    visible: bool,
    generation: u64,
    pending: Option<u64>,
    dismiss_after: Duration,
}

impl Default for ErrorNotification {
    fn default() -> Self {
        Self::new(DEFAULT_DISMISS_AFTER)
    }
}

impl ErrorNotification {
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            message: None,
            visible: false,
            generation: 0,
            pending: None,
            dismiss_after,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// True when there is a message and it has not been hidden.
    pub fn is_shown(&self) -> bool {
        self.visible && self.message.is_some()
    }

    pub fn has_pending_dismiss(&self) -> bool {
        self.pending.is_some()
    }

    /// Show `kind`'s message and take over the dismiss slot.
    pub fn raise(&mut self, kind: ErrorKind) -> DismissTicket {
        self.generation += 1;
        self.message = Some(kind.message().to_string());
        self.visible = true;
        self.pending = Some(self.generation);
        DismissTicket {
            generation: self.generation,
            after: self.dismiss_after,
        }
    }

    /// Hide immediately. Returns whether a pending ticket was dropped.
    pub fn dismiss(&mut self) -> bool {
        self.visible = false;
        self.message = None;
        self.pending.take().is_some()
    }

    /// Hide the banner if `ticket` is still the one occupying the slot.
    pub fn expire(&mut self, ticket: DismissTicket) -> bool {
        if self.pending != Some(ticket.generation) {
            return false;
        }
        self.pending = None;
        self.visible = false;
        self.message = None;
        true
    }
}

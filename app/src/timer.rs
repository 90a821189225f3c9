//! Single-slot auto-dismiss timer.
//!
//! At most one timer task exists at a time. Scheduling aborts whatever is in
//! the slot before spawning the replacement, and cancelling empties it. The
//! session also ignores stale tickets, so a timer that fires between the abort
//! and its cancellation point is harmless.

use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use todoapp_core::{DismissTicket, Event};

use crate::runtime::AppEvent;

#[derive(Debug, Default)]
pub struct DismissTimer {
    slot: Option<JoinHandle<()>>,
}

impl DismissTimer {
    pub fn schedule(&mut self, ticket: DismissTicket, events: UnboundedSender<AppEvent>) {
        self.cancel();
        let after = ticket.after();
        self.slot = Some(tokio::spawn(async move {
            tokio::time::sleep(after).await;
            let _ = events.send(AppEvent::Session(Event::DismissTimerFired(ticket)));
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.slot.take() {
            handle.abort();
        }
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

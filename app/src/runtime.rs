//! The host event loop.
//!
//! # Design
//! All state lives in one task: the loop owns the `Session`, applies events
//! to it and carries out the returned effects. Background work (the startup
//! fetch, the dismiss timer, stdin) only ever sends `AppEvent`s back over the
//! channel. The page is rendered once at startup and after every event that
//! can change it.

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use todoapp_core::{view, ApiError, Config, Effect, Event, Session};
use tracing::{debug, info, warn};

use crate::command::Command;
use crate::output::Output;
use crate::timer::DismissTimer;
use crate::transport::Transport;

#[derive(Debug)]
pub enum AppEvent {
    Session(Event),
    Command(Command),
    InputClosed,
}

pub struct Runtime<T> {
    session: Session,
    startup: Vec<Effect>,
    transport: Arc<T>,
    timer: DismissTimer,
    output: Output,
    quit_requested: bool,
    events_tx: UnboundedSender<AppEvent>,
    events_rx: UnboundedReceiver<AppEvent>,
}

impl<T: Transport> Runtime<T> {
    pub fn new(config: &Config, transport: T, output: Output) -> Self {
        let (session, startup) = Session::start(config);
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            session,
            startup,
            transport: Arc::new(transport),
            timer: DismissTimer::default(),
            output,
            quit_requested: false,
            events_tx,
            events_rx,
        }
    }

    /// Handle for feeding events into the loop from other tasks.
    pub fn sender(&self) -> UnboundedSender<AppEvent> {
        self.events_tx.clone()
    }

    /// Run until a quit is requested and no fetch is outstanding.
    ///
    /// Returns the final session so callers can inspect it.
    pub async fn run(mut self) -> std::io::Result<Session> {
        match &self.session {
            Session::Ready(state) => info!(user_id = state.user_id(), "session started"),
            Session::Unconfigured => warn!("no user id configured; showing setup instructions"),
        }
        let startup = std::mem::take(&mut self.startup);
        self.execute(startup);
        self.render().await?;

        while !self.finished() {
            let Some(event) = self.events_rx.recv().await else {
                break;
            };
            if self.handle(event) {
                self.render().await?;
            }
        }

        self.timer.cancel();
        Ok(self.session)
    }

    fn finished(&self) -> bool {
        self.quit_requested && !self.session.state().is_some_and(|state| state.is_loading())
    }

    /// Apply one event. Returns whether the page needs re-rendering.
    fn handle(&mut self, event: AppEvent) -> bool {
        let event = match event {
            AppEvent::Session(event) => event,
            AppEvent::Command(Command::Filter(mode)) => Event::SelectFilter(mode),
            AppEvent::Command(Command::Dismiss) => Event::DismissError,
            AppEvent::Command(Command::Render) => return true,
            AppEvent::Command(Command::Quit) | AppEvent::InputClosed => {
                debug!("quit requested");
                self.quit_requested = true;
                return false;
            }
        };
        let effects = self.session.update(event);
        self.execute(effects);
        true
    }

    fn execute(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Fetch(request) => self.spawn_fetch(request),
                Effect::ScheduleDismiss(ticket) => {
                    debug!(after = ?ticket.after(), "scheduling banner dismiss");
                    self.timer.schedule(ticket, self.events_tx.clone());
                }
                Effect::CancelDismiss => self.timer.cancel(),
            }
        }
    }

    fn spawn_fetch(&self, request: todoapp_core::HttpRequest) {
        info!(method = %request.method, path = %request.path, "fetching todos");
        let transport = Arc::clone(&self.transport);
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let result = match tokio::task::spawn_blocking(move || transport.execute(request)).await {
                Ok(result) => result.map_err(ApiError::from),
                Err(err) => Err(ApiError::Transport(err.to_string())),
            };
            if let Err(err) = &result {
                warn!(%err, "fetch failed");
            }
            let _ = events.send(AppEvent::Session(Event::FetchCompleted(result)));
        });
    }

    async fn render(&self) -> std::io::Result<()> {
        debug!("rendering page");
        self.output.write(&view::render_document(&self.session)).await
    }
}

//! View state and the reducer that drives it.
//!
//! # Design
//! The session never performs I/O. `Session::start` and `Session::update`
//! return `Effect`s for the host to execute: the one startup fetch and the
//! scheduling or cancelling of the banner's auto-dismiss timer. Results come
//! back in as `Event`s. Whether a user id is configured is decided once in
//! `start`; an `Unconfigured` session ignores every event.

use tracing::debug;

use crate::client::TodoClient;
use crate::config::Config;
use crate::error::ApiError;
use crate::filter::{self, FilterMode};
use crate::http::{HttpRequest, HttpResponse};
use crate::notification::{DismissTicket, ErrorKind, ErrorNotification};
use crate::types::Todo;

/// Input to the reducer.
#[derive(Debug)]
pub enum Event {
    /// The host finished (or failed) the startup request.
    FetchCompleted(Result<HttpResponse, ApiError>),
    SelectFilter(FilterMode),
    /// The user clicked the banner's close button.
    DismissError,
    DismissTimerFired(DismissTicket),
    /// A failure reported by an affordance outside the load path.
    ReportError(ErrorKind),
}

/// Work the host has to carry out on the session's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Fetch(HttpRequest),
    /// Start the dismiss timer, replacing any timer already running.
    ScheduleDismiss(DismissTicket),
    CancelDismiss,
}

/// Everything rendered for a configured user.
#[derive(Debug, Clone)]
pub struct TodoState {
    user_id: u64,
    client: TodoClient,
    todos: Vec<Todo>,
    filter: FilterMode,
    error: ErrorNotification,
    loading: bool,
}

impl TodoState {
    fn new(config: &Config, user_id: u64) -> Self {
        Self {
            user_id,
            client: TodoClient::new(&config.api_base_url),
            todos: Vec::new(),
            filter: FilterMode::default(),
            error: ErrorNotification::new(config.dismiss_after),
            loading: false,
        }
    }

    pub fn user_id(&self) -> u64 {
        self.user_id
    }

    /// The full, unfiltered collection in fetch order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn error(&self) -> &ErrorNotification {
        &self.error
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn visible_todos(&self) -> Vec<&Todo> {
        filter::filter_todos(&self.todos, self.filter)
    }

    pub fn active_count(&self) -> usize {
        filter::active_count(&self.todos)
    }

    pub fn completed_count(&self) -> usize {
        filter::completed_count(&self.todos)
    }

    pub fn all_completed(&self) -> bool {
        !self.todos.is_empty() && self.active_count() == 0
    }

    fn begin_fetch(&mut self) -> Effect {
        self.loading = true;
        Effect::Fetch(self.client.build_list_todos(self.user_id))
    }

    fn finish_fetch(&mut self, result: Result<HttpResponse, ApiError>) -> Vec<Effect> {
        self.loading = false;
        match result.and_then(|response| self.client.parse_list_todos(response)) {
            Ok(todos) => {
                debug!(count = todos.len(), user_id = self.user_id, "todos loaded");
                self.todos = todos;
                if self.error.dismiss() {
                    vec![Effect::CancelDismiss]
                } else {
                    Vec::new()
                }
            }
            Err(err) => {
                debug!(error = %err, user_id = self.user_id, "todo load failed");
                vec![self.raise(ErrorKind::Load)]
            }
        }
    }

    fn raise(&mut self, kind: ErrorKind) -> Effect {
        Effect::ScheduleDismiss(self.error.raise(kind))
    }

    fn apply(&mut self, event: Event) -> Vec<Effect> {
        match event {
            Event::FetchCompleted(result) => self.finish_fetch(result),
            Event::SelectFilter(mode) => {
                debug!(filter = %mode, "filter selected");
                self.filter = mode;
                Vec::new()
            }
            Event::DismissError => {
                if self.error.dismiss() {
                    vec![Effect::CancelDismiss]
                } else {
                    Vec::new()
                }
            }
            Event::DismissTimerFired(ticket) => {
                if !self.error.expire(ticket) {
                    debug!(generation = ticket.generation(), "stale dismiss timer ignored");
                }
                Vec::new()
            }
            Event::ReportError(kind) => vec![self.raise(kind)],
        }
    }
}

/// Top-level view state, chosen once at startup.
#[derive(Debug, Clone)]
pub enum Session {
    Unconfigured,
    Ready(TodoState),
}

impl Session {
    /// Build the session for `config` along with the startup effects.
    ///
    /// A configured session yields exactly one `Effect::Fetch`; an
    /// unconfigured one yields none.
    pub fn start(config: &Config) -> (Session, Vec<Effect>) {
        match config.configured_user() {
            Some(user_id) => {
                let mut state = TodoState::new(config, user_id);
                let fetch = state.begin_fetch();
                (Session::Ready(state), vec![fetch])
            }
            None => {
                debug!("no user id configured");
                (Session::Unconfigured, Vec::new())
            }
        }
    }

    pub fn update(&mut self, event: Event) -> Vec<Effect> {
        match self {
            Session::Ready(state) => state.apply(event),
            Session::Unconfigured => Vec::new(),
        }
    }

    pub fn state(&self) -> Option<&TodoState> {
        match self {
            Session::Ready(state) => Some(state),
            Session::Unconfigured => None,
        }
    }
}

//! View composition.
//!
//! # Overview
//! `render` is a pure function of the session: it builds a small element tree
//! which `Node::to_html` serializes. Every element a UI test binds to carries
//! a stable `data-cy` hook from [`hooks`].
//!
//! # Design
//! The banner is always present and hidden with a class rather than removed,
//! so it can fade. The footer is keyed on the unfiltered collection: an
//! empty filter result still shows the filter links. The entry field,
//! per-item controls and the clear-completed button are rendered but inert.

use crate::filter::FilterMode;
use crate::session::{Session, TodoState};
use crate::types::Todo;

/// `data-cy` values bound by the UI test suite. Must not change.
pub mod hooks {
    pub const TODO_LIST: &str = "TodoList";
    pub const TODO: &str = "Todo";
    pub const TODO_STATUS: &str = "TodoStatus";
    pub const TODO_TITLE: &str = "TodoTitle";
    pub const TODO_DELETE: &str = "TodoDelete";
    pub const TODO_LOADER: &str = "TodoLoader";
    pub const TODOS_COUNTER: &str = "TodosCounter";
    pub const FOOTER: &str = "Footer";
    pub const FILTER: &str = "Filter";
    pub const FILTER_LINK_ALL: &str = "FilterLinkAll";
    pub const FILTER_LINK_ACTIVE: &str = "FilterLinkActive";
    pub const FILTER_LINK_COMPLETED: &str = "FilterLinkCompleted";
    pub const CLEAR_COMPLETED_BUTTON: &str = "ClearCompletedButton";
    pub const ERROR_NOTIFICATION: &str = "ErrorNotification";
    pub const HIDE_ERROR_BUTTON: &str = "HideErrorButton";
    pub const NEW_TODO_FIELD: &str = "NewTodoField";
    pub const TOGGLE_ALL_BUTTON: &str = "ToggleAllButton";
    pub const USER_WARNING: &str = "UserWarning";
}

const DATA_CY: &str = "data-cy";

/// Tags serialized without a closing tag.
const VOID_TAGS: &[&str] = &["input", "br", "meta"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    classes: Vec<String>,
    attrs: Vec<(&'static str, Option<String>)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            classes: Vec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn class_if(self, cond: bool, class: &str) -> Self {
        if cond {
            self.class(class)
        } else {
            self
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, Some(value.into())));
        self
    }

    /// Boolean attribute such as `checked` or `disabled`.
    pub fn flag_if(mut self, cond: bool, name: &'static str) -> Self {
        if cond {
            self.attrs.push((name, None));
        }
        self
    }

    pub fn hook(self, hook: &'static str) -> Self {
        self.attr(DATA_CY, hook)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn tag(&self) -> &str {
        self.tag
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Value of `name`; boolean attributes yield `Some("")`.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_deref().unwrap_or(""))
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attrs.iter().any(|(n, _)| *n == name)
    }

    pub fn hook_name(&self) -> Option<&str> {
        self.get_attr(DATA_CY)
    }

    /// Concatenated text of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Every descendant (including `self`) carrying `hook`, in document order.
    pub fn find_all(&self, hook: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_hooked(hook, &mut found);
        found
    }

    pub fn find(&self, hook: &str) -> Option<&Element> {
        self.find_all(hook).into_iter().next()
    }

    fn collect_hooked<'a>(&'a self, hook: &str, found: &mut Vec<&'a Element>) {
        if self.hook_name() == Some(hook) {
            found.push(self);
        }
        for child in &self.children {
            if let Node::Element(el) = child {
                el.collect_hooked(hook, found);
            }
        }
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        if !self.classes.is_empty() {
            out.push_str(" class=\"");
            out.push_str(&escape(&self.classes.join(" ")));
            out.push('"');
        }
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            if let Some(value) = value {
                out.push_str("=\"");
                out.push_str(&escape(value));
                out.push('"');
            }
        }
        out.push('>');
        if VOID_TAGS.contains(&self.tag) {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl Node {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Element(el) => el.write_html(out),
            Node::Text(text) => out.push_str(&escape(text)),
        }
    }
}

fn collect_text(nodes: &[Node], out: &mut String) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) => collect_text(&el.children, out),
        }
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Root view for `session`.
pub fn render(session: &Session) -> Element {
    match session {
        Session::Unconfigured => user_warning(),
        Session::Ready(state) => todo_app(state),
    }
}

/// `render` wrapped in a standalone HTML document.
pub fn render_document(session: &Session) -> String {
    let body = Node::from(render(session)).to_html();
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\"><head><meta charset=\"utf-8\"><title>todos</title></head><body>{body}</body></html>\n"
    )
}

fn user_warning() -> Element {
    Element::new("section")
        .class("user-warning")
        .hook(hooks::USER_WARNING)
        .child(Element::new("p").text("No user id is configured, so there are no todos to show."))
        .child(
            Element::new("p")
                .text("Start the app with --user-id <ID> or set TODOAPP_USER_ID to your numeric user id."),
        )
}

fn todo_app(state: &TodoState) -> Element {
    let mut content = Element::new("div")
        .class("todoapp__content")
        .child(header(state))
        .child(todo_list(state));
    if !state.todos().is_empty() {
        content = content.child(footer(state));
    }

    Element::new("div")
        .class("todoapp")
        .child(Element::new("h1").class("todoapp__title").text("todos"))
        .child(content)
        .child(error_notification(state))
}

fn header(state: &TodoState) -> Element {
    Element::new("header")
        .class("todoapp__header")
        .child(
            Element::new("button")
                .class("todoapp__toggle-all")
                .class_if(state.all_completed(), "active")
                .attr("type", "button")
                .hook(hooks::TOGGLE_ALL_BUTTON),
        )
        .child(
            Element::new("form").child(
                Element::new("input")
                    .class("todoapp__new-todo")
                    .attr("type", "text")
                    .attr("placeholder", "What needs to be done?")
                    .hook(hooks::NEW_TODO_FIELD),
            ),
        )
}

fn todo_list(state: &TodoState) -> Element {
    Element::new("section")
        .class("todoapp__main")
        .hook(hooks::TODO_LIST)
        .flag_if(state.is_loading(), "data-loading")
        .children(state.visible_todos().into_iter().map(|todo| Node::from(todo_item(todo))))
}

fn todo_item(todo: &Todo) -> Element {
    Element::new("div")
        .class("todo")
        .class_if(todo.completed, "completed")
        .attr("data-id", todo.id.to_string())
        .hook(hooks::TODO)
        .child(
            Element::new("label").class("todo__status-label").child(
                Element::new("input")
                    .class("todo__status")
                    .attr("type", "checkbox")
                    .flag_if(todo.completed, "checked")
                    .hook(hooks::TODO_STATUS),
            ),
        )
        .child(
            Element::new("span")
                .class("todo__title")
                .hook(hooks::TODO_TITLE)
                .text(todo.title.as_str()),
        )
        .child(
            Element::new("button")
                .class("todo__remove")
                .attr("type", "button")
                .hook(hooks::TODO_DELETE)
                .text("×"),
        )
        .child(
            Element::new("div")
                .class("modal")
                .class("overlay")
                .hook(hooks::TODO_LOADER)
                .child(
                    Element::new("div")
                        .class("modal-background")
                        .class("has-background-white-ter"),
                )
                .child(Element::new("div").class("loader")),
        )
}

fn footer(state: &TodoState) -> Element {
    Element::new("footer")
        .class("todoapp__footer")
        .hook(hooks::FOOTER)
        .child(
            Element::new("span")
                .class("todo-count")
                .hook(hooks::TODOS_COUNTER)
                .text(format!("{} items left", state.active_count())),
        )
        .child(filter_nav(state.filter()))
        .child(
            Element::new("button")
                .class("todoapp__clear-completed")
                .attr("type", "button")
                .flag_if(state.completed_count() == 0, "disabled")
                .hook(hooks::CLEAR_COMPLETED_BUTTON)
                .text("Clear completed"),
        )
}

fn filter_nav(current: FilterMode) -> Element {
    Element::new("nav")
        .class("filter")
        .hook(hooks::FILTER)
        .children(FilterMode::ALL.into_iter().map(|mode| {
            Node::from(
                Element::new("a")
                    .class("filter__link")
                    .class_if(mode == current, "selected")
                    .attr("href", mode.href())
                    .hook(filter_hook(mode))
                    .text(mode.label()),
            )
        }))
}

fn filter_hook(mode: FilterMode) -> &'static str {
    match mode {
        FilterMode::All => hooks::FILTER_LINK_ALL,
        FilterMode::Active => hooks::FILTER_LINK_ACTIVE,
        FilterMode::Completed => hooks::FILTER_LINK_COMPLETED,
    }
}

fn error_notification(state: &TodoState) -> Element {
    let error = state.error();
    let mut banner = Element::new("div")
        .class("notification")
        .class("is-danger")
        .class("is-light")
        .class("has-text-weight-normal")
        .class_if(!error.is_shown(), "hidden")
        .hook(hooks::ERROR_NOTIFICATION)
        .child(
            Element::new("button")
                .class("delete")
                .attr("type", "button")
                .hook(hooks::HIDE_ERROR_BUTTON),
        );
    if let Some(message) = error.message() {
        banner = banner.text(message);
    }
    banner
}

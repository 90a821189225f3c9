//! End-to-end session scenarios driven purely through events.

use todoapp_core::view::{self, hooks};
use todoapp_core::{
    ApiError, Config, Effect, ErrorKind, Event, FilterMode, HttpResponse, Session,
};

const TWO: &str = r#"[{"id":1,"title":"A","completed":false,"userId":1},
                      {"id":2,"title":"B","completed":true,"userId":1}]"#;

fn started() -> Session {
    let (session, effects) = Session::start(&Config::new("http://api.test", Some(1)));
    assert!(matches!(effects.as_slice(), [Effect::Fetch(_)]));
    session
}

fn scheduled(effects: &[Effect]) -> todoapp_core::DismissTicket {
    match effects {
        [Effect::ScheduleDismiss(ticket)] => *ticket,
        other => panic!("expected a dismiss schedule, got {other:?}"),
    }
}

#[test]
fn active_filter_shows_open_items_and_counter() {
    let mut session = started();
    session.update(Event::FetchCompleted(Ok(HttpResponse::new(200, TWO))));
    session.update(Event::SelectFilter(FilterMode::Active));

    let root = view::render(&session);
    let titles: Vec<String> = root
        .find_all(hooks::TODO_TITLE)
        .iter()
        .map(|el| el.text_content())
        .collect();
    assert_eq!(titles, vec!["A"]);
    assert_eq!(
        root.find(hooks::TODOS_COUNTER).unwrap().text_content(),
        "1 items left"
    );
}

#[test]
fn counter_ignores_current_filter() {
    let mut session = started();
    session.update(Event::FetchCompleted(Ok(HttpResponse::new(200, TWO))));
    session.update(Event::SelectFilter(FilterMode::Completed));

    let root = view::render(&session);
    assert_eq!(root.find_all(hooks::TODO).len(), 1);
    assert_eq!(
        root.find(hooks::TODOS_COUNTER).unwrap().text_content(),
        "1 items left"
    );
}

#[test]
fn rejected_fetch_leaves_empty_collection_and_banner() {
    let mut session = started();
    let effects = session.update(Event::FetchCompleted(Err(ApiError::Transport(
        "network down".to_string(),
    ))));
    scheduled(&effects);

    let state = session.state().unwrap();
    assert!(state.todos().is_empty());
    assert_eq!(state.error().message(), Some("Unable to load todos"));
    assert!(state.error().is_visible());

    let root = view::render(&session);
    let banner = root.find(hooks::ERROR_NOTIFICATION).unwrap();
    assert!(!banner.has_class("hidden"));
    assert_eq!(banner.text_content(), "Unable to load todos");
    assert!(root.find(hooks::FOOTER).is_none());
}

#[test]
fn dismiss_before_timer_cancels_and_timer_is_inert() {
    let mut session = started();
    let ticket = scheduled(&session.update(Event::FetchCompleted(Ok(HttpResponse::new(
        503, "unavailable",
    )))));

    assert_eq!(session.update(Event::DismissError), vec![Effect::CancelDismiss]);
    let state = session.state().unwrap();
    assert!(!state.error().is_visible());
    assert!(state.error().message().is_none());

    // A timer that slipped through anyway must change nothing.
    assert!(session.update(Event::DismissTimerFired(ticket)).is_empty());
    assert!(!session.state().unwrap().error().is_visible());
}

#[test]
fn second_raise_supersedes_first_timer() {
    let mut session = started();
    let load = scheduled(&session.update(Event::FetchCompleted(Ok(HttpResponse::new(
        500, "",
    )))));
    let add = scheduled(&session.update(Event::ReportError(ErrorKind::Add)));

    let state = session.state().unwrap();
    assert_eq!(state.error().message(), Some("Unable to add a todo"));

    session.update(Event::DismissTimerFired(load));
    let state = session.state().unwrap();
    assert!(state.error().is_visible());
    assert_eq!(state.error().message(), Some("Unable to add a todo"));

    session.update(Event::DismissTimerFired(add));
    let state = session.state().unwrap();
    assert!(!state.error().is_visible());
    assert!(state.error().message().is_none());
}

#[test]
fn footer_tracks_collection_not_filter() {
    let mut session = started();
    session.update(Event::FetchCompleted(Ok(HttpResponse::new(
        200,
        r#"[{"id":5,"title":"done","completed":true,"userId":1}]"#,
    ))));

    for mode in FilterMode::ALL {
        session.update(Event::SelectFilter(mode));
        let root = view::render(&session);
        assert!(root.find(hooks::FOOTER).is_some(), "{mode}");
        assert!(root.find(hooks::FILTER).is_some(), "{mode}");
    }
}

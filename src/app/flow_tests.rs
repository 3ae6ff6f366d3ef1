//! Drives the plugin through `handle_event` the way the Zellij shim does,
//! then renders the resulting frames.

use crate::app::{handle_event, Action, AppState, Event, RequestContext};
use crate::domain::Advocate;
use crate::storage::LoadStatus;
use crate::ui::render_to_string;
use crate::{initialize, Config};
use std::time::Duration;

const BODY: &str = r#"{
  "data": [
    {
      "firstName": "Jane", "lastName": "Doe", "city": "Austin", "degree": "MD",
      "specialties": ["Bipolar"], "yearsOfExperience": 5, "phoneNumber": 5551234567
    },
    {
      "firstName": "Tom", "lastName": "Lee", "city": "Denver", "degree": "PhD",
      "specialties": ["Anxiety"], "yearsOfExperience": "12", "phoneNumber": "5559876543"
    }
  ]
}"#;

fn names(state: &AppState) -> Vec<String> {
    state
        .snapshot()
        .filtered_records
        .iter()
        .map(|a| a.first_name.clone())
        .collect()
}

/// Starts the load and returns the context the shim would send with the
/// request.
fn start_load(state: &mut AppState) -> RequestContext {
    let (_, actions) = handle_event(state, &Event::LoadStarted).unwrap();
    match actions.into_iter().next() {
        Some(Action::FetchAdvocates { request, .. }) => request,
        other => panic!("expected FetchAdvocates, got {other:?}"),
    }
}

fn respond(state: &mut AppState, request: &RequestContext, status: u16, body: &str) {
    // The shim decodes the context map echoed back by the host.
    let echoed = RequestContext::from_map(&request.to_map()).unwrap();
    handle_event(
        state,
        &Event::ResponseReceived {
            status,
            body: body.as_bytes().to_vec(),
            request_id: Some(echoed.request_id),
        },
    )
    .unwrap();
}

fn loaded() -> AppState {
    let mut state = initialize(&Config::default());
    let request = start_load(&mut state);
    respond(&mut state, &request, 200, BODY);
    state
}

/// Types `query` as a burst and lets every armed timer fire.
fn settle(state: &mut AppState, query: &str) {
    let (_, actions) = handle_event(state, &Event::QueryChanged(query.to_string())).unwrap();
    assert_eq!(
        actions,
        vec![Action::ScheduleTimer {
            delay: Duration::from_millis(300)
        }]
    );
    handle_event(state, &Event::DebounceElapsed).unwrap();
}

#[test]
fn loads_and_normalizes_numeric_fields() {
    let state = loaded();
    let snapshot = state.snapshot();

    assert_eq!(snapshot.load_status, LoadStatus::Success);
    assert_eq!(snapshot.failure_reason, None);
    assert_eq!(names(&state), vec!["Jane", "Tom"]);
    assert_eq!(snapshot.filtered_records[0].years_of_experience, "5");
    assert_eq!(snapshot.filtered_records[0].phone_number, "5551234567");
}

#[test]
fn end_to_end_queries() {
    let mut state = loaded();

    settle(&mut state, "555123");
    assert_eq!(names(&state), vec!["Jane"]);

    settle(&mut state, "jane");
    assert_eq!(names(&state), vec!["Jane"]);

    // Exact years match for Tom; Jane's phone contains "12" too.
    settle(&mut state, "12");
    assert_eq!(names(&state), vec!["Jane", "Tom"]);

    settle(&mut state, "zz");
    assert!(names(&state).is_empty());
}

#[test]
fn typing_burst_filters_once_with_final_query() {
    let mut state = loaded();
    handle_event(&mut state, &Event::FocusSearch).unwrap();

    let mut timers = 0;
    for c in "tom".chars() {
        let (_, actions) = handle_event(&mut state, &Event::Char(c)).unwrap();
        timers += actions.len();
        assert_eq!(state.snapshot().settled_query, "");
    }
    assert_eq!(state.query, "tom");

    let mut renders = 0;
    for _ in 0..timers {
        let (render, _) = handle_event(&mut state, &Event::DebounceElapsed).unwrap();
        renders += usize::from(render);
    }

    assert_eq!(renders, 1);
    assert_eq!(state.snapshot().settled_query, "tom");
    assert_eq!(names(&state), vec!["Tom"]);
}

#[test]
fn tag_click_then_reset() {
    let mut state = loaded();

    handle_event(&mut state, &Event::TagClicked("Anxiety".to_string())).unwrap();
    let snapshot = state.snapshot();
    assert_eq!(snapshot.query, "Anxiety");
    assert_eq!(snapshot.settled_query, "Anxiety");
    assert_eq!(names(&state), vec!["Tom"]);

    handle_event(&mut state, &Event::Reset).unwrap();
    let snapshot = state.snapshot();
    assert_eq!(snapshot.query, "");
    assert_eq!(snapshot.settled_query, "");
    assert_eq!(names(&state), vec!["Jane", "Tom"]);
}

#[test]
fn reset_discards_pending_query() {
    let mut state = loaded();
    handle_event(&mut state, &Event::QueryChanged("tom".to_string())).unwrap();
    handle_event(&mut state, &Event::Reset).unwrap();
    handle_event(&mut state, &Event::DebounceElapsed).unwrap();

    assert_eq!(state.snapshot().settled_query, "");
    assert_eq!(names(&state), vec!["Jane", "Tom"]);
}

#[test]
fn server_error_shows_failure_state() {
    let mut state = initialize(&Config::default());
    let request = start_load(&mut state);
    respond(&mut state, &request, 500, "");

    let snapshot = state.snapshot();
    assert_eq!(snapshot.load_status, LoadStatus::Error);
    assert_eq!(snapshot.failure_reason.as_deref(), Some("HTTP error! Status: 500"));

    let vm = state.compute_viewmodel(24, 120);
    let empty = vm.empty_state.unwrap();
    assert!(empty.is_error);
    assert_eq!(empty.subtitle, "HTTP error! Status: 500");
    assert!(vm.rows.is_empty());
}

#[test]
fn malformed_body_is_a_load_failure() {
    let mut state = initialize(&Config::default());
    let request = start_load(&mut state);
    respond(&mut state, &request, 200, r#"{"advocates": []}"#);

    let snapshot = state.snapshot();
    assert_eq!(snapshot.load_status, LoadStatus::Error);
    assert!(snapshot
        .failure_reason
        .unwrap()
        .starts_with("Malformed response"));
}

#[test]
fn queries_before_load_apply_on_arrival() {
    let mut state = initialize(&Config::default());
    let request = start_load(&mut state);

    settle(&mut state, "tom");
    assert!(names(&state).is_empty());

    respond(&mut state, &request, 200, BODY);
    assert_eq!(names(&state), vec!["Tom"]);
}

#[test]
fn tag_clicked_before_response_filters_by_specialty_only() {
    const DOE_BODY: &str = r#"{
      "data": [
        {
          "firstName": "Jane", "lastName": "Doe", "city": "Austin", "degree": "MD",
          "specialties": ["Bipolar"], "yearsOfExperience": 5, "phoneNumber": 5551234567
        },
        {
          "firstName": "Tom", "lastName": "Lee", "city": "Denver", "degree": "PhD",
          "specialties": ["Doe syndrome"], "yearsOfExperience": 12, "phoneNumber": 5559876543
        }
      ]
    }"#;

    let mut state = initialize(&Config::default());
    let request = start_load(&mut state);
    handle_event(&mut state, &Event::TagClicked("Doe".to_string())).unwrap();

    respond(&mut state, &request, 200, DOE_BODY);

    assert_eq!(state.snapshot().query, "Doe");
    assert_eq!(names(&state), vec!["Tom"]);
}

#[test]
fn duplicate_response_is_ignored() {
    let mut state = loaded();
    settle(&mut state, "jane");

    let (render, _) = handle_event(
        &mut state,
        &Event::ResponseReceived {
            status: 200,
            body: br#"{"data": []}"#.to_vec(),
            request_id: Some(1),
        },
    )
    .unwrap();

    assert!(!render);
    assert_eq!(names(&state), vec!["Jane"]);
}

#[test]
fn response_after_teardown_is_not_applied() {
    let mut state = initialize(&Config::default());
    let request = start_load(&mut state);
    handle_event(&mut state, &Event::QueryChanged("tom".to_string())).unwrap();
    handle_event(&mut state, &Event::Teardown).unwrap();

    respond(&mut state, &request, 200, BODY);
    handle_event(&mut state, &Event::DebounceElapsed).unwrap();

    let snapshot = state.snapshot();
    assert_eq!(snapshot.load_status, LoadStatus::Loading);
    assert_eq!(snapshot.settled_query, "");
    assert!(snapshot.filtered_records.is_empty());
}

#[test]
fn permission_denial_surfaces_as_failure() {
    let mut state = initialize(&Config::default());
    handle_event(
        &mut state,
        &Event::LoadFailed("Web access permission denied".to_string()),
    )
    .unwrap();

    assert_eq!(state.snapshot().load_status, LoadStatus::Error);
    let (_, actions) = handle_event(&mut state, &Event::LoadStarted).unwrap();
    assert!(actions.is_empty());
}

fn advocate(first: &str, specialties: &[&str]) -> Advocate {
    Advocate {
        first_name: first.into(),
        last_name: "Doe".into(),
        city: "Austin".into(),
        degree: "MD".into(),
        specialties: specialties.iter().map(|s| (*s).to_string()).collect(),
        years_of_experience: "5".into(),
        phone_number: "5551234567".into(),
    }
}

fn frame(state: &AppState) -> String {
    let vm = state.compute_viewmodel(24, 120);
    render_to_string(&vm, &state.theme, 24, 120)
}

fn loaded_with(records: Vec<Advocate>) -> AppState {
    let mut state = initialize(&Config::default());
    handle_event(&mut state, &Event::LoadStarted).unwrap();
    handle_event(&mut state, &Event::LoadSucceeded(records)).unwrap();
    state
}

#[test]
fn loading_frame_shows_message_without_table() {
    let state = initialize(&Config::default());
    let out = frame(&state);

    assert!(out.contains("Solace Advocates"));
    assert!(out.contains("Loading advocates..."));
    assert!(!out.contains("First Name"));
}

#[test]
fn loaded_frame_shows_table_and_counter() {
    let state = loaded_with(vec![advocate("Jane", &["Bipolar"]), advocate("Tom", &["Anxiety"])]);
    let out = frame(&state);

    assert!(out.contains("First Name"));
    assert!(out.contains("Specialties"));
    assert!(out.contains("Jane"));
    assert!(out.contains("[Anxiety]"));
    assert!(out.contains("Showing 2 advocates"));
    assert!(out.contains("Loaded "));
}

#[test]
fn no_results_frame() {
    let mut state = loaded_with(vec![advocate("Jane", &[])]);
    handle_event(&mut state, &Event::TagClicked("Grief".into())).unwrap();
    let out = frame(&state);

    assert!(out.contains("No advocates found matching your search criteria."));
    assert!(out.contains("Searching for: Grief"));
    assert!(!out.contains("Showing"));
}

#[test]
fn failure_frame_shows_reason() {
    let mut state = initialize(&Config::default());
    handle_event(&mut state, &Event::LoadStarted).unwrap();
    handle_event(&mut state, &Event::LoadFailed("HTTP error! Status: 502".into())).unwrap();
    let out = frame(&state);

    assert!(out.contains("Failed to load advocates"));
    assert!(out.contains("HTTP error! Status: 502"));
}

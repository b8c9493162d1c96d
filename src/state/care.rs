//! Care event store. Covers two lists that never mix: the events of the
//! plant open in the detail view, and the global timeline the care log
//! pages through with a keyset cursor.

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::model::{CareEvent, NewCareEvent};

/// Page size for the global timeline.
pub const CARE_PAGE_LIMIT: u32 = 20;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CareState {
    /// Events of the plant open in the detail view, newest first.
    pub events: Vec<CareEvent>,
    /// Global timeline pages stitched together, newest first.
    pub timeline: Vec<CareEvent>,
    /// Whether the backend has older timeline events past what we hold.
    pub has_more: bool,
    /// Active event kind filter on the timeline.
    pub filter: Option<String>,
    pub error: Option<String>,
}

impl CareState {
    /// Cursor for the next page: the id of the last event received.
    pub fn next_before(&self) -> Option<i64> {
        self.timeline.last().map(|e| e.id)
    }
}

#[derive(Debug, Clone)]
pub enum CareAction {
    PlantEventsLoaded(Vec<CareEvent>),
    Recorded(CareEvent),
    Removed(i64),
    PageLoaded {
        events: Vec<CareEvent>,
        has_more: bool,
        reset: bool,
    },
    FilterSet(Option<String>),
    Failed(String),
    ClearError,
}

impl Reducible for CareState {
    type Action = CareAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use CareAction::*;
        let mut new = (*self).clone();
        match action {
            PlantEventsLoaded(list) => {
                new.events = list;
            }
            Recorded(event) => {
                new.events.insert(0, event);
            }
            Removed(event_id) => {
                new.events.retain(|e| e.id != event_id);
                new.timeline.retain(|e| e.id != event_id);
            }
            PageLoaded {
                events,
                has_more,
                reset,
            } => {
                if reset {
                    new.timeline = events;
                } else {
                    new.timeline.extend(events);
                }
                new.has_more = has_more;
            }
            FilterSet(filter) => {
                // A new filter invalidates the stitched pages.
                new.filter = filter;
                new.timeline.clear();
                new.has_more = false;
            }
            Failed(message) => {
                new.error = Some(message);
            }
            ClearError => {
                new.error = None;
            }
        }
        Rc::new(new)
    }
}

pub fn load_plant_events(store: UseReducerHandle<CareState>, plant_id: i64) {
    store.dispatch(CareAction::ClearError);
    spawn_local(async move {
        match api::fetch_care_events(plant_id).await {
            Ok(list) => store.dispatch(CareAction::PlantEventsLoaded(list)),
            Err(e) => {
                log::warn!("loading care events for plant {plant_id} failed: {e}");
                store.dispatch(CareAction::Failed(e.to_string()));
            }
        }
    });
}

pub fn record_event(
    store: UseReducerHandle<CareState>,
    plant_id: i64,
    data: NewCareEvent,
    on_done: Callback<CareEvent>,
) {
    store.dispatch(CareAction::ClearError);
    spawn_local(async move {
        match api::create_care_event(plant_id, &data).await {
            Ok(event) => {
                store.dispatch(CareAction::Recorded(event.clone()));
                on_done.emit(event);
            }
            Err(e) => {
                log::warn!("recording care event failed: {e}");
                store.dispatch(CareAction::Failed(e.to_string()));
            }
        }
    });
}

pub fn delete_event(store: UseReducerHandle<CareState>, plant_id: i64, event_id: i64) {
    store.dispatch(CareAction::ClearError);
    spawn_local(async move {
        match api::delete_care_event(plant_id, event_id).await {
            Ok(()) => store.dispatch(CareAction::Removed(event_id)),
            Err(e) => {
                log::warn!("deleting care event {event_id} failed: {e}");
                store.dispatch(CareAction::Failed(e.to_string()));
            }
        }
    });
}

/// Fetch one timeline page. `reset` starts over from the newest event,
/// otherwise the request continues past the current cursor. `on_done`
/// fires on success and failure alike.
pub fn load_timeline(store: UseReducerHandle<CareState>, reset: bool, on_done: Callback<()>) {
    let before = if reset { None } else { store.next_before() };
    let filter = store.filter.clone();
    fetch_timeline_page(store, before, filter, reset, on_done);
}

/// Swap the event kind filter and fetch the first page under it. The
/// filter is threaded through directly because the dispatched state is
/// not visible until the next render.
pub fn set_filter(store: UseReducerHandle<CareState>, filter: Option<String>) {
    store.dispatch(CareAction::FilterSet(filter.clone()));
    fetch_timeline_page(store, None, filter, true, Callback::noop());
}

fn fetch_timeline_page(
    store: UseReducerHandle<CareState>,
    before: Option<i64>,
    filter: Option<String>,
    reset: bool,
    on_done: Callback<()>,
) {
    store.dispatch(CareAction::ClearError);
    spawn_local(async move {
        match api::fetch_all_care_events(Some(CARE_PAGE_LIMIT), before, filter.as_deref()).await {
            Ok(page) => store.dispatch(CareAction::PageLoaded {
                events: page.events,
                has_more: page.has_more,
                reset,
            }),
            Err(e) => {
                log::warn!("loading care timeline failed: {e}");
                store.dispatch(CareAction::Failed(e.to_string()));
            }
        }
        on_done.emit(());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: i64, event_type: &str) -> CareEvent {
        CareEvent {
            id,
            plant_id: 1,
            plant_name: "Fern".to_string(),
            event_type: event_type.to_string(),
            notes: None,
            occurred_at: "2025-01-05T08:00:00Z".to_string(),
            created_at: "2025-01-05T08:00:00Z".to_string(),
        }
    }

    fn reduce(state: CareState, action: CareAction) -> CareState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn recorded_prepends_to_the_plant_list() {
        let state = CareState {
            events: vec![event(1, "watered")],
            ..CareState::default()
        };
        let state = reduce(state, CareAction::Recorded(event(2, "fertilized")));
        assert_eq!(state.events[0].id, 2);
        assert_eq!(state.events[1].id, 1);
    }

    #[test]
    fn recorded_leaves_the_timeline_alone() {
        let state = CareState {
            timeline: vec![event(1, "watered")],
            ..CareState::default()
        };
        let state = reduce(state, CareAction::Recorded(event(2, "watered")));
        assert_eq!(state.timeline.len(), 1);
    }

    #[test]
    fn removed_drops_from_both_lists() {
        let state = CareState {
            events: vec![event(1, "watered"), event(2, "pruned")],
            timeline: vec![event(2, "pruned"), event(3, "watered")],
            ..CareState::default()
        };
        let state = reduce(state, CareAction::Removed(2));
        assert_eq!(state.events.len(), 1);
        assert_eq!(state.events[0].id, 1);
        assert_eq!(state.timeline.len(), 1);
        assert_eq!(state.timeline[0].id, 3);
    }

    #[test]
    fn pages_stitch_in_arrival_order() {
        let state = reduce(
            CareState::default(),
            CareAction::PageLoaded {
                events: vec![event(9, "watered"), event(8, "watered")],
                has_more: true,
                reset: true,
            },
        );
        assert!(state.has_more);
        let state = reduce(
            state,
            CareAction::PageLoaded {
                events: vec![event(7, "repotted")],
                has_more: false,
                reset: false,
            },
        );
        let ids: Vec<i64> = state.timeline.iter().map(|e| e.id).collect();
        assert_eq!(ids, [9, 8, 7]);
        assert!(!state.has_more);
    }

    #[test]
    fn reset_page_replaces_the_timeline() {
        let state = CareState {
            timeline: vec![event(9, "watered")],
            has_more: true,
            ..CareState::default()
        };
        let state = reduce(
            state,
            CareAction::PageLoaded {
                events: vec![event(5, "custom")],
                has_more: false,
                reset: true,
            },
        );
        let ids: Vec<i64> = state.timeline.iter().map(|e| e.id).collect();
        assert_eq!(ids, [5]);
    }

    #[test]
    fn next_before_is_the_last_received_id() {
        let state = CareState {
            timeline: vec![event(9, "watered"), event(8, "watered")],
            ..CareState::default()
        };
        assert_eq!(state.next_before(), Some(8));
        assert_eq!(CareState::default().next_before(), None);
    }

    #[test]
    fn changing_the_filter_clears_the_stitched_pages() {
        let state = CareState {
            timeline: vec![event(9, "watered")],
            has_more: true,
            filter: None,
            ..CareState::default()
        };
        let state = reduce(
            state,
            CareAction::FilterSet(Some("pruned".to_string())),
        );
        assert_eq!(state.filter.as_deref(), Some("pruned"));
        assert!(state.timeline.is_empty());
        assert!(!state.has_more);
    }
}

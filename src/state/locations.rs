//! Location store. The list stays sorted by name so pickers and the
//! settings table render in a stable order no matter when entries land.

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::model::Location;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LocationsState {
    pub locations: Vec<Location>,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum LocationsAction {
    Loaded(Vec<Location>),
    Created(Location),
    Updated(Location),
    Removed(i64),
    Failed(String),
    ClearError,
}

fn sort_by_name(list: &mut [Location]) {
    list.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
}

impl Reducible for LocationsState {
    type Action = LocationsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use LocationsAction::*;
        let mut new = (*self).clone();
        match action {
            Loaded(list) => {
                new.locations = list;
            }
            Created(location) => {
                new.locations.push(location);
                sort_by_name(&mut new.locations);
            }
            Updated(location) => {
                if let Some(slot) = new.locations.iter_mut().find(|l| l.id == location.id) {
                    *slot = location;
                }
                sort_by_name(&mut new.locations);
            }
            Removed(id) => {
                new.locations.retain(|l| l.id != id);
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

pub fn load_locations(store: UseReducerHandle<LocationsState>) {
    store.dispatch(LocationsAction::ClearError);
    spawn_local(async move {
        match api::fetch_locations().await {
            Ok(list) => store.dispatch(LocationsAction::Loaded(list)),
            Err(e) => {
                log::warn!("loading locations failed: {e}");
                store.dispatch(LocationsAction::Failed(e.to_string()));
            }
        }
    });
}

/// Create a location and hand it back so the caller can select it.
pub fn create_location(
    store: UseReducerHandle<LocationsState>,
    name: String,
    on_done: Callback<Location>,
) {
    store.dispatch(LocationsAction::ClearError);
    spawn_local(async move {
        match api::create_location(&name).await {
            Ok(location) => {
                store.dispatch(LocationsAction::Created(location.clone()));
                on_done.emit(location);
            }
            Err(e) => {
                log::warn!("creating location failed: {e}");
                store.dispatch(LocationsAction::Failed(e.to_string()));
            }
        }
    });
}

pub fn rename_location(store: UseReducerHandle<LocationsState>, id: i64, name: String) {
    store.dispatch(LocationsAction::ClearError);
    spawn_local(async move {
        match api::update_location(id, &name).await {
            Ok(location) => store.dispatch(LocationsAction::Updated(location)),
            Err(e) => {
                log::warn!("renaming location {id} failed: {e}");
                store.dispatch(LocationsAction::Failed(e.to_string()));
            }
        }
    });
}

pub fn delete_location(store: UseReducerHandle<LocationsState>, id: i64) {
    store.dispatch(LocationsAction::ClearError);
    spawn_local(async move {
        match api::delete_location(id).await {
            Ok(()) => store.dispatch(LocationsAction::Removed(id)),
            Err(e) => {
                log::warn!("deleting location {id} failed: {e}");
                store.dispatch(LocationsAction::Failed(e.to_string()));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc(id: i64, name: &str) -> Location {
        Location {
            id,
            name: name.to_string(),
            plant_count: 0,
        }
    }

    fn reduce(state: LocationsState, action: LocationsAction) -> LocationsState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn created_keeps_the_list_sorted() {
        let state = LocationsState {
            locations: vec![loc(1, "Bedroom"), loc(2, "Kitchen")],
            ..LocationsState::default()
        };
        let state = reduce(state, LocationsAction::Created(loc(3, "Hallway")));
        let names: Vec<&str> = state.locations.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Bedroom", "Hallway", "Kitchen"]);
    }

    #[test]
    fn sorting_ignores_case() {
        let state = reduce(
            LocationsState {
                locations: vec![loc(1, "balcony"), loc(2, "Kitchen")],
                ..LocationsState::default()
            },
            LocationsAction::Created(loc(3, "Greenhouse")),
        );
        let names: Vec<&str> = state.locations.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["balcony", "Greenhouse", "Kitchen"]);
    }

    #[test]
    fn updated_renames_and_resorts() {
        let state = LocationsState {
            locations: vec![loc(1, "Attic"), loc(2, "Bedroom")],
            ..LocationsState::default()
        };
        let state = reduce(state, LocationsAction::Updated(loc(1, "Window sill")));
        let names: Vec<&str> = state.locations.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, ["Bedroom", "Window sill"]);
    }

    #[test]
    fn removed_filters_by_id() {
        let state = LocationsState {
            locations: vec![loc(1, "Attic"), loc(2, "Bedroom")],
            ..LocationsState::default()
        };
        let state = reduce(state, LocationsAction::Removed(1));
        assert_eq!(state.locations.len(), 1);
        assert_eq!(state.locations[0].id, 2);
    }

    #[test]
    fn errors_set_and_clear() {
        let state = reduce(
            LocationsState::default(),
            LocationsAction::Failed("no".to_string()),
        );
        assert_eq!(state.error.as_deref(), Some("no"));
        let state = reduce(state, LocationsAction::ClearError);
        assert!(state.error.is_none());
    }
}

//! Plant collection store. The reducer owns the list and the plant shown
//! in the detail view; the helpers below call the backend and dispatch
//! the outcome. Every helper clears the banner error before it starts so
//! a retry does not show a stale message.

use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use web_sys::File;
use yew::prelude::*;

use crate::api;
use crate::model::{NewPlant, Plant, PlantPatch};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlantsState {
    pub plants: Vec<Plant>,
    /// Plant shown in the detail view, when one is loaded.
    pub current: Option<Plant>,
    pub error: Option<String>,
    /// False until the first list fetch lands, so the dashboard can tell
    /// "still loading" from "actually empty".
    pub loaded: bool,
}

#[derive(Debug, Clone)]
pub enum PlantsAction {
    Loaded(Vec<Plant>),
    CurrentLoaded(Plant),
    Created(Plant),
    Updated(Plant),
    Removed(i64),
    PhotoCleared(i64),
    Failed(String),
    CurrentFailed(String),
    ClearError,
}

impl Reducible for PlantsState {
    type Action = PlantsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use PlantsAction::*;
        let mut new = (*self).clone();
        match action {
            Loaded(list) => {
                new.plants = list;
                new.loaded = true;
            }
            CurrentLoaded(plant) => {
                new.current = Some(plant);
            }
            Created(plant) => {
                new.plants.push(plant);
            }
            Updated(plant) => {
                if let Some(slot) = new.plants.iter_mut().find(|p| p.id == plant.id) {
                    *slot = plant.clone();
                }
                new.current = Some(plant);
            }
            Removed(id) => {
                new.plants.retain(|p| p.id != id);
                new.current = None;
            }
            PhotoCleared(id) => {
                if let Some(slot) = new.plants.iter_mut().find(|p| p.id == id) {
                    slot.photo_url = None;
                }
                if let Some(current) = new.current.as_mut() {
                    if current.id == id {
                        current.photo_url = None;
                    }
                }
            }
            Failed(message) => {
                new.error = Some(message);
            }
            CurrentFailed(message) => {
                new.error = Some(message);
                new.current = None;
            }
            ClearError => {
                new.error = None;
            }
        }
        Rc::new(new)
    }
}

pub fn load_plants(store: UseReducerHandle<PlantsState>) {
    store.dispatch(PlantsAction::ClearError);
    spawn_local(async move {
        match api::fetch_plants().await {
            Ok(list) => store.dispatch(PlantsAction::Loaded(list)),
            Err(e) => {
                log::warn!("loading plants failed: {e}");
                store.dispatch(PlantsAction::Failed(e.to_string()));
            }
        }
    });
}

pub fn load_plant(store: UseReducerHandle<PlantsState>, id: i64) {
    store.dispatch(PlantsAction::ClearError);
    spawn_local(async move {
        match api::fetch_plant(id).await {
            Ok(plant) => store.dispatch(PlantsAction::CurrentLoaded(plant)),
            Err(e) => {
                log::warn!("loading plant {id} failed: {e}");
                store.dispatch(PlantsAction::CurrentFailed(e.to_string()));
            }
        }
    });
}

/// Create a plant and hand it to `on_done` so the caller can navigate.
pub fn create_plant(store: UseReducerHandle<PlantsState>, data: NewPlant, on_done: Callback<Plant>) {
    store.dispatch(PlantsAction::ClearError);
    spawn_local(async move {
        match api::create_plant(&data).await {
            Ok(plant) => {
                store.dispatch(PlantsAction::Created(plant.clone()));
                on_done.emit(plant);
            }
            Err(e) => {
                log::warn!("creating plant failed: {e}");
                store.dispatch(PlantsAction::Failed(e.to_string()));
            }
        }
    });
}

pub fn update_plant(
    store: UseReducerHandle<PlantsState>,
    id: i64,
    data: PlantPatch,
    on_done: Callback<Plant>,
) {
    store.dispatch(PlantsAction::ClearError);
    spawn_local(async move {
        match api::update_plant(id, &data).await {
            Ok(plant) => {
                store.dispatch(PlantsAction::Updated(plant.clone()));
                on_done.emit(plant);
            }
            Err(e) => {
                log::warn!("updating plant {id} failed: {e}");
                store.dispatch(PlantsAction::Failed(e.to_string()));
            }
        }
    });
}

pub fn delete_plant(store: UseReducerHandle<PlantsState>, id: i64, on_done: Callback<()>) {
    store.dispatch(PlantsAction::ClearError);
    spawn_local(async move {
        match api::delete_plant(id).await {
            Ok(()) => {
                store.dispatch(PlantsAction::Removed(id));
                on_done.emit(());
            }
            Err(e) => {
                log::warn!("deleting plant {id} failed: {e}");
                store.dispatch(PlantsAction::Failed(e.to_string()));
            }
        }
    });
}

/// Record a watering. The backend bumps `last_watered` and recomputes the
/// due date, so the fresh plant comes back in the response.
/// `on_done` fires on success and failure alike so callers can clear
/// their in-flight flag.
pub fn water_plant(store: UseReducerHandle<PlantsState>, id: i64, on_done: Callback<()>) {
    store.dispatch(PlantsAction::ClearError);
    spawn_local(async move {
        match api::water_plant(id).await {
            Ok(plant) => store.dispatch(PlantsAction::Updated(plant)),
            Err(e) => {
                log::warn!("watering plant {id} failed: {e}");
                store.dispatch(PlantsAction::Failed(e.to_string()));
            }
        }
        on_done.emit(());
    });
}

pub fn upload_photo(store: UseReducerHandle<PlantsState>, id: i64, file: File) {
    store.dispatch(PlantsAction::ClearError);
    spawn_local(async move {
        match api::upload_plant_photo(id, &file).await {
            Ok(plant) => store.dispatch(PlantsAction::Updated(plant)),
            Err(e) => {
                log::warn!("uploading photo for plant {id} failed: {e}");
                store.dispatch(PlantsAction::Failed(e.to_string()));
            }
        }
    });
}

pub fn remove_photo(store: UseReducerHandle<PlantsState>, id: i64) {
    store.dispatch(PlantsAction::ClearError);
    spawn_local(async move {
        match api::delete_plant_photo(id).await {
            Ok(()) => store.dispatch(PlantsAction::PhotoCleared(id)),
            Err(e) => {
                log::warn!("removing photo for plant {id} failed: {e}");
                store.dispatch(PlantsAction::Failed(e.to_string()));
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plant(id: i64, name: &str) -> Plant {
        Plant {
            id,
            name: name.to_string(),
            species: None,
            icon: "🌿".to_string(),
            photo_url: None,
            location_id: None,
            location_name: None,
            watering_interval_days: 7,
            watering_status: "ok".to_string(),
            last_watered: None,
            next_due: None,
            light_needs: "indirect".to_string(),
            difficulty: None,
            pet_safety: None,
            growth_speed: None,
            soil_type: None,
            soil_moisture: None,
            notes: None,
            created_at: "2025-01-01T00:00:00Z".to_string(),
            updated_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    fn reduce(state: PlantsState, action: PlantsAction) -> PlantsState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn loaded_replaces_the_list_and_marks_loaded() {
        let state = reduce(
            PlantsState::default(),
            PlantsAction::Loaded(vec![plant(1, "Fern"), plant(2, "Monstera")]),
        );
        assert_eq!(state.plants.len(), 2);
        assert!(state.loaded);
    }

    #[test]
    fn created_appends() {
        let state = reduce(
            PlantsState {
                plants: vec![plant(1, "Fern")],
                ..PlantsState::default()
            },
            PlantsAction::Created(plant(2, "Monstera")),
        );
        assert_eq!(state.plants.len(), 2);
        assert_eq!(state.plants[1].name, "Monstera");
    }

    #[test]
    fn updated_replaces_in_list_and_becomes_current() {
        let mut watered = plant(1, "Fern");
        watered.last_watered = Some("2025-01-10".to_string());
        let state = reduce(
            PlantsState {
                plants: vec![plant(1, "Fern"), plant(2, "Monstera")],
                ..PlantsState::default()
            },
            PlantsAction::Updated(watered),
        );
        assert_eq!(
            state.plants[0].last_watered.as_deref(),
            Some("2025-01-10")
        );
        assert_eq!(state.plants[1].last_watered, None);
        assert_eq!(state.current.as_ref().map(|p| p.id), Some(1));
    }

    #[test]
    fn removed_drops_from_list_and_clears_current() {
        let state = PlantsState {
            plants: vec![plant(1, "Fern"), plant(2, "Monstera")],
            current: Some(plant(1, "Fern")),
            ..PlantsState::default()
        };
        let state = reduce(state, PlantsAction::Removed(1));
        assert_eq!(state.plants.len(), 1);
        assert_eq!(state.plants[0].id, 2);
        assert!(state.current.is_none());
    }

    #[test]
    fn photo_cleared_touches_only_the_matching_plant() {
        let mut with_photo = plant(1, "Fern");
        with_photo.photo_url = Some("/uploads/a.jpg".to_string());
        let mut other = plant(2, "Monstera");
        other.photo_url = Some("/uploads/b.jpg".to_string());
        let state = PlantsState {
            plants: vec![with_photo.clone(), other],
            current: Some(with_photo),
            ..PlantsState::default()
        };
        let state = reduce(state, PlantsAction::PhotoCleared(1));
        assert_eq!(state.plants[0].photo_url, None);
        assert_eq!(state.plants[1].photo_url.as_deref(), Some("/uploads/b.jpg"));
        assert_eq!(state.current.as_ref().unwrap().photo_url, None);
    }

    #[test]
    fn failed_sets_the_error_and_clear_error_removes_it() {
        let state = reduce(
            PlantsState::default(),
            PlantsAction::Failed("boom".to_string()),
        );
        assert_eq!(state.error.as_deref(), Some("boom"));
        let state = reduce(state, PlantsAction::ClearError);
        assert!(state.error.is_none());
    }

    #[test]
    fn current_failed_also_clears_current() {
        let state = PlantsState {
            current: Some(plant(1, "Fern")),
            ..PlantsState::default()
        };
        let state = reduce(state, PlantsAction::CurrentFailed("gone".to_string()));
        assert!(state.current.is_none());
        assert_eq!(state.error.as_deref(), Some("gone"));
    }
}

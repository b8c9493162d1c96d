use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::app::SettingsContext;
use super::location_chips::LocationChips;
use super::watering_interval::WateringInterval;
use crate::model::{Location, NewPlant, Plant, PlantPatch};
use crate::state::{locations, plants, LocationsState, PlantsState};
use crate::util::emoji_svg_path;

const ICON_CHOICES: [&str; 8] = ["🪴", "🌿", "🌵", "🌸", "🌻", "🍀", "🌱", "🌳"];

#[derive(Properties, PartialEq, Clone)]
pub struct PlantFormViewProps {
    /// `None` creates a new plant, `Some` edits an existing one.
    #[prop_or_default]
    pub plant_id: Option<i64>,
    pub on_saved: Callback<i64>,
    pub on_cancel: Callback<()>,
}

/// Loads the plant being edited, then hands over to the form proper so
/// its field state can initialize from a complete snapshot.
#[function_component(PlantFormView)]
pub fn plant_form_view(props: &PlantFormViewProps) -> Html {
    let settings = use_context::<SettingsContext>().expect("settings context");
    let text = settings.text;
    let plants = use_context::<UseReducerHandle<PlantsState>>().expect("plants store");
    let locations = use_context::<UseReducerHandle<LocationsState>>().expect("locations store");

    {
        let plants = plants.clone();
        let locations = locations.clone();
        use_effect_with(props.plant_id, move |id| {
            if let Some(id) = id {
                plants::load_plant(plants, *id);
            }
            locations::load_locations(locations);
        });
    }

    match props.plant_id {
        None => html! {
            <PlantForm
                initial={None::<Plant>}
                on_saved={props.on_saved.clone()}
                on_cancel={props.on_cancel.clone()}
            />
        },
        Some(id) => {
            let current = plants.current.as_ref().filter(|p| p.id == id);
            match current {
                Some(plant) => html! {
                    <PlantForm
                        initial={Some(plant.clone())}
                        on_saved={props.on_saved.clone()}
                        on_cancel={props.on_cancel.clone()}
                    />
                },
                None => {
                    if let Some(error) = &plants.error {
                        html! { <p style="color:#f85149;">{ error }</p> }
                    } else {
                        html! { <p style="color:#8b949e;">{ text.loading }</p> }
                    }
                }
            }
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
struct PlantFormProps {
    #[prop_or_default]
    initial: Option<Plant>,
    on_saved: Callback<i64>,
    on_cancel: Callback<()>,
}

fn trimmed_or_none(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[function_component(PlantForm)]
fn plant_form(props: &PlantFormProps) -> Html {
    let settings = use_context::<SettingsContext>().expect("settings context");
    let text = settings.text;
    let plants = use_context::<UseReducerHandle<PlantsState>>().expect("plants store");
    let locations = use_context::<UseReducerHandle<LocationsState>>().expect("locations store");

    let initial = props.initial.as_ref();
    let name = use_state(|| initial.map(|p| p.name.clone()).unwrap_or_default());
    let species = use_state(|| {
        initial
            .and_then(|p| p.species.clone())
            .unwrap_or_default()
    });
    let icon = use_state(|| {
        initial
            .map(|p| p.icon.clone())
            .unwrap_or_else(|| "🪴".to_string())
    });
    let location_id = use_state(|| initial.and_then(|p| p.location_id));
    let interval = use_state(|| initial.map(|p| p.watering_interval_days).unwrap_or(7));
    let light = use_state(|| {
        initial
            .map(|p| p.light_needs.clone())
            .unwrap_or_else(|| "indirect".to_string())
    });
    let notes = use_state(|| initial.and_then(|p| p.notes.clone()).unwrap_or_default());
    let name_missing = use_state(|| false);
    let saving = use_state(|| false);

    let on_name_input = {
        let name = name.clone();
        let name_missing = name_missing.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                name.set(input.value());
                name_missing.set(false);
            }
        })
    };
    let on_species_input = {
        let species = species.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                species.set(input.value());
            }
        })
    };
    let on_light_change = {
        let light = light.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
                light.set(select.value());
            }
        })
    };
    let on_notes_input = {
        let notes = notes.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target().and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok()) {
                notes.set(area.value());
            }
        })
    };
    let on_location_change = {
        let location_id = location_id.clone();
        Callback::from(move |id: Option<i64>| location_id.set(id))
    };
    let on_location_create = {
        let locations = locations.clone();
        let location_id = location_id.clone();
        Callback::from(move |name: String| {
            let location_id = location_id.clone();
            locations::create_location(
                locations.clone(),
                name,
                Callback::from(move |loc: Location| {
                    location_id.set(Some(loc.id));
                }),
            );
        })
    };
    let on_interval_change = {
        let interval = interval.clone();
        Callback::from(move |days: i64| interval.set(days))
    };

    let on_save = {
        let plants = plants.clone();
        let name = name.clone();
        let species = species.clone();
        let icon = icon.clone();
        let location_id = location_id.clone();
        let interval = interval.clone();
        let light = light.clone();
        let notes = notes.clone();
        let name_missing = name_missing.clone();
        let saving = saving.clone();
        let on_saved = props.on_saved.clone();
        let editing = props.initial.as_ref().map(|p| p.id);
        Callback::from(move |_: MouseEvent| {
            if *saving {
                return;
            }
            let trimmed = name.trim().to_string();
            if trimmed.is_empty() {
                name_missing.set(true);
                return;
            }
            saving.set(true);
            let done = {
                let saving = saving.clone();
                let on_saved = on_saved.clone();
                Callback::from(move |plant: Plant| {
                    saving.set(false);
                    on_saved.emit(plant.id);
                })
            };
            match editing {
                Some(id) => {
                    let patch = PlantPatch {
                        name: Some(trimmed),
                        species: Some(trimmed_or_none(&species)),
                        icon: Some((*icon).clone()),
                        location_id: Some(*location_id),
                        watering_interval_days: Some(*interval),
                        light_needs: Some((*light).clone()),
                        notes: Some(trimmed_or_none(&notes)),
                        ..Default::default()
                    };
                    plants::update_plant(plants.clone(), id, patch, done);
                }
                None => {
                    let data = NewPlant {
                        name: trimmed,
                        species: trimmed_or_none(&species),
                        icon: Some((*icon).clone()),
                        location_id: *location_id,
                        watering_interval_days: Some(*interval),
                        light_needs: Some((*light).clone()),
                        notes: trimmed_or_none(&notes),
                        ..Default::default()
                    };
                    plants::create_plant(plants.clone(), data, done);
                }
            }
        })
    };
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    // A custom icon from an import stays pickable when editing.
    let mut icon_choices: Vec<String> = ICON_CHOICES.iter().map(|c| c.to_string()).collect();
    if !icon_choices.contains(&*icon) {
        icon_choices.insert(0, (*icon).clone());
    }

    let title = if props.initial.is_some() {
        text.form_title_edit
    } else {
        text.form_title_new
    };
    let label_style = "display:block; margin-bottom:4px; color:#8b949e; font-size:13px;";
    let input_style = "width:100%; box-sizing:border-box; background:#0d1117; color:inherit; border:1px solid #30363d; border-radius:8px; padding:8px;";
    html! {
        <div style="max-width:560px; display:flex; flex-direction:column; gap:14px;">
            <h2 style="margin:0; font-size:22px;">{ title }</h2>
            <div>
                <label style={label_style}>{ text.field_name }</label>
                <input
                    type="text"
                    value={(*name).clone()}
                    oninput={on_name_input}
                    style={input_style}
                />
                { if *name_missing {
                    html! { <div style="color:#f85149; font-size:13px; margin-top:4px;">{ text.name_required }</div> }
                } else {
                    html! {}
                }}
            </div>
            <div>
                <label style={label_style}>{ text.field_species }</label>
                <input
                    type="text"
                    value={(*species).clone()}
                    oninput={on_species_input}
                    style={input_style}
                />
            </div>
            <div>
                <label style={label_style}>{ text.field_icon }</label>
                <div style="display:flex; gap:8px; flex-wrap:wrap;">
                    { for icon_choices.iter().map(|choice| {
                        let selected = *icon == *choice;
                        let pick = {
                            let icon = icon.clone();
                            let choice = choice.clone();
                            Callback::from(move |_: MouseEvent| icon.set(choice.clone()))
                        };
                        let border = if selected { "2px solid #58a6ff" } else { "1px solid #30363d" };
                        html! {
                            <button
                                type="button"
                                onclick={pick}
                                style={format!("background:#0d1117; border:{border}; border-radius:10px; padding:6px; cursor:pointer;")}
                            >
                                <img src={emoji_svg_path(choice)} alt={choice.clone()} style="width:28px; height:28px; display:block;" />
                            </button>
                        }
                    })}
                </div>
            </div>
            <div>
                <label style={label_style}>{ text.field_location }</label>
                <LocationChips
                    locations={locations.locations.clone()}
                    value={*location_id}
                    on_change={on_location_change}
                    on_create={Some(on_location_create)}
                />
            </div>
            <div>
                <label style={label_style}>{ text.field_light }</label>
                <select onchange={on_light_change} style={input_style}>
                    <option value="low" selected={*light == "low"}>{ text.light_low }</option>
                    <option value="indirect" selected={*light == "indirect"}>{ text.light_indirect }</option>
                    <option value="bright" selected={*light == "bright"}>{ text.light_bright }</option>
                </select>
            </div>
            <div>
                <WateringInterval value={*interval} on_change={on_interval_change} />
            </div>
            <div>
                <label style={label_style}>{ text.field_notes }</label>
                <textarea
                    rows="3"
                    value={(*notes).clone()}
                    oninput={on_notes_input}
                    style={format!("{input_style} resize:vertical;")}
                />
            </div>
            <div style="display:flex; gap:10px; justify-content:flex-end;">
                <button class="btn" onclick={on_cancel}>{ text.cancel }</button>
                <button class="btn btn-primary" onclick={on_save} disabled={*saving}>{ text.save }</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trimmed_or_none_drops_blank_input() {
        assert_eq!(trimmed_or_none("  "), None);
        assert_eq!(trimmed_or_none(""), None);
        assert_eq!(trimmed_or_none(" Monstera "), Some("Monstera".to_string()));
    }
}

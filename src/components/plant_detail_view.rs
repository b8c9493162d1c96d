use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::app::SettingsContext;
use super::lightbox::Lightbox;
use super::modal_dialog::{DialogMode, DialogVariant, ModalDialog};
use super::status_badge::StatusBadge;
use crate::i18n::plural;
use crate::model::NewCareEvent;
use crate::state::care::CareAction;
use crate::state::plants::PlantsAction;
use crate::state::{care, plants, CareState, PlantsState};
use crate::util::{emoji_svg_path, event_icon, event_label, format_date};

#[derive(Properties, PartialEq, Clone)]
pub struct PlantDetailViewProps {
    pub id: i64,
    pub on_back: Callback<()>,
    pub on_edit: Callback<i64>,
}

/// One plant: photo with a zoomable lightbox, watering schedule and the
/// care history for this plant.
#[function_component(PlantDetailView)]
pub fn plant_detail_view(props: &PlantDetailViewProps) -> Html {
    let settings = use_context::<SettingsContext>().expect("settings context");
    let text = settings.text;
    let plants = use_context::<UseReducerHandle<PlantsState>>().expect("plants store");
    let care = use_context::<UseReducerHandle<CareState>>().expect("care store");

    let lightbox_open = use_state(|| false);
    let confirm_delete = use_state(|| false);
    let note_draft = use_state(String::new);
    let watering = use_state(|| false);

    {
        let plants = plants.clone();
        let care = care.clone();
        use_effect_with(props.id, move |id| {
            plants::load_plant(plants, *id);
            care::load_plant_events(care, *id);
        });
    }

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    // Ignore a leftover plant from an earlier visit while the load runs.
    let current = plants.current.as_ref().filter(|p| p.id == props.id);
    let plant = match current {
        Some(plant) => plant.clone(),
        None => {
            return html! {
                <div style="display:flex; flex-direction:column; gap:16px;">
                    <div>
                        <button class="btn" onclick={on_back}>{"←"}</button>
                    </div>
                    { if let Some(error) = &plants.error {
                        html! { <p style="color:#f85149;">{ error }</p> }
                    } else {
                        html! { <p style="color:#8b949e;">{ text.loading }</p> }
                    }}
                </div>
            };
        }
    };

    let on_open_lightbox = {
        let lightbox_open = lightbox_open.clone();
        Callback::from(move |_: MouseEvent| lightbox_open.set(true))
    };
    let on_close_lightbox = {
        let lightbox_open = lightbox_open.clone();
        Callback::from(move |_| lightbox_open.set(false))
    };

    let on_edit = {
        let on_edit = props.on_edit.clone();
        let id = props.id;
        Callback::from(move |_: MouseEvent| on_edit.emit(id))
    };

    let on_ask_delete = {
        let confirm_delete = confirm_delete.clone();
        Callback::from(move |_: MouseEvent| confirm_delete.set(true))
    };
    let on_cancel_delete = {
        let confirm_delete = confirm_delete.clone();
        Callback::from(move |_| confirm_delete.set(false))
    };
    let on_confirm_delete = {
        let plants = plants.clone();
        let confirm_delete = confirm_delete.clone();
        let on_back = props.on_back.clone();
        let id = props.id;
        Callback::from(move |_| {
            confirm_delete.set(false);
            let on_back = on_back.clone();
            plants::delete_plant(
                plants.clone(),
                id,
                Callback::from(move |_| on_back.emit(())),
            );
        })
    };

    let on_water = {
        let plants = plants.clone();
        let watering = watering.clone();
        let id = props.id;
        Callback::from(move |_: MouseEvent| {
            watering.set(true);
            let watering = watering.clone();
            plants::water_plant(
                plants.clone(),
                id,
                Callback::from(move |_| watering.set(false)),
            );
        })
    };

    let on_photo_pick = {
        let plants = plants.clone();
        let id = props.id;
        Callback::from(move |e: Event| {
            let input = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
            if let Some(input) = input {
                if let Some(file) = input.files().and_then(|list| list.get(0)) {
                    plants::upload_photo(plants.clone(), id, file);
                }
                // Reset so picking the same file again still fires change.
                input.set_value("");
            }
        })
    };
    let on_remove_photo = {
        let plants = plants.clone();
        let id = props.id;
        Callback::from(move |_: MouseEvent| plants::remove_photo(plants.clone(), id))
    };

    let on_note_input = {
        let note_draft = note_draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target().and_then(|t| t.dyn_into::<HtmlTextAreaElement>().ok()) {
                note_draft.set(area.value());
            }
        })
    };
    let on_add_note = {
        let care = care.clone();
        let note_draft = note_draft.clone();
        let id = props.id;
        Callback::from(move |_: MouseEvent| {
            let note = note_draft.trim().to_string();
            if note.is_empty() {
                return;
            }
            let note_draft = note_draft.clone();
            care::record_event(
                care.clone(),
                id,
                NewCareEvent {
                    event_type: "custom".to_string(),
                    notes: Some(note),
                    occurred_at: None,
                },
                Callback::from(move |_| note_draft.set(String::new())),
            );
        })
    };

    let on_dismiss_plants_error = {
        let plants = plants.clone();
        Callback::from(move |_: MouseEvent| plants.dispatch(PlantsAction::ClearError))
    };
    let on_dismiss_care_error = {
        let care = care.clone();
        Callback::from(move |_: MouseEvent| care.dispatch(CareAction::ClearError))
    };

    let locale_tag = settings.locale.as_str();
    let section_style = "background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:16px;";
    let row_style = "display:flex; justify-content:space-between; gap:12px; padding:6px 0; border-bottom:1px solid #21262d;";
    let label_style = "color:#8b949e;";
    html! {
        <div style="display:flex; flex-direction:column; gap:16px;">
            <div style="display:flex; align-items:center; gap:12px;">
                <button class="btn" onclick={on_back}>{"←"}</button>
                <img src={emoji_svg_path(&plant.icon)} alt="" style="width:36px; height:36px;" />
                <div style="flex:1; min-width:0;">
                    <h2 style="margin:0; font-size:22px;">{ &plant.name }</h2>
                    { if let Some(species) = &plant.species {
                        html! { <div style="color:#8b949e; font-size:14px;">{ species }</div> }
                    } else {
                        html! {}
                    }}
                </div>
                <button class="btn" onclick={on_edit}>{ text.edit }</button>
                <button class="btn btn-danger" style="color:#f85149; border-color:#f85149;" onclick={on_ask_delete}>
                    { text.delete }
                </button>
            </div>
            { if let Some(error) = &plants.error {
                html! {
                    <div style="display:flex; justify-content:space-between; align-items:center; background:rgba(248,81,73,0.15); border:1px solid #f85149; border-radius:8px; padding:10px 14px; color:#f85149;">
                        <span>{ error }</span>
                        <button class="btn" style="background:none; border:none; color:#f85149; cursor:pointer;" onclick={on_dismiss_plants_error}>
                            { text.dismiss }
                        </button>
                    </div>
                }
            } else {
                html! {}
            }}
            <section style={section_style}>
                { if let Some(url) = &plant.photo_url {
                    html! {
                        <div style="display:flex; flex-direction:column; gap:10px;">
                            <button
                                aria-label={text.open_photo}
                                onclick={on_open_lightbox}
                                style="padding:0; border:none; background:none; cursor:zoom-in; display:block; width:100%;"
                            >
                                <img
                                    src={url.clone()}
                                    alt={plant.name.clone()}
                                    style="width:100%; max-height:340px; object-fit:cover; border-radius:10px; display:block;"
                                />
                            </button>
                            <div style="display:flex; gap:10px;">
                                <label class="btn" style="cursor:pointer;">
                                    { text.add_photo }
                                    <input type="file" accept="image/*" style="display:none;" onchange={on_photo_pick.clone()} />
                                </label>
                                <button class="btn" onclick={on_remove_photo}>{ text.remove_photo }</button>
                            </div>
                        </div>
                    }
                } else {
                    html! {
                        <div style="display:flex; flex-direction:column; align-items:center; gap:10px; padding:24px 0;">
                            <img src={emoji_svg_path(&plant.icon)} alt="" style="width:96px; height:96px;" />
                            <label class="btn" style="cursor:pointer;">
                                { text.add_photo }
                                <input type="file" accept="image/*" style="display:none;" onchange={on_photo_pick.clone()} />
                            </label>
                        </div>
                    }
                }}
            </section>
            <section style={section_style}>
                <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:10px;">
                    <h3 style="margin:0; font-size:16px;">{ text.watering_heading }</h3>
                    <StatusBadge status={plant.watering_status.clone()} next_due={plant.next_due.clone()} />
                </div>
                <div style={row_style}>
                    <span style={label_style}>{ text.last_watered }</span>
                    <span>
                        { plant.last_watered.as_deref().map(|d| format_date(d, locale_tag)).unwrap_or_else(|| "–".to_string()) }
                    </span>
                </div>
                <div style={row_style}>
                    <span style={label_style}>{ text.next_due }</span>
                    <span>
                        { plant.next_due.as_deref().map(|d| format_date(d, locale_tag)).unwrap_or_else(|| "–".to_string()) }
                    </span>
                </div>
                <div style="display:flex; justify-content:space-between; gap:12px; padding:6px 0;">
                    <span style={label_style}>{ plural(text.interval_one, text.interval_other, plant.watering_interval_days) }</span>
                    <button class="btn btn-primary" onclick={on_water} disabled={*watering}>
                        { text.water_now }
                    </button>
                </div>
            </section>
            <section style={section_style}>
                <h3 style="margin:0 0 10px; font-size:16px;">{ text.care_history }</h3>
                { if let Some(error) = &care.error {
                    html! {
                        <div style="display:flex; justify-content:space-between; align-items:center; background:rgba(248,81,73,0.15); border:1px solid #f85149; border-radius:8px; padding:8px 12px; color:#f85149; margin-bottom:10px;">
                            <span>{ error }</span>
                            <button class="btn" style="background:none; border:none; color:#f85149; cursor:pointer;" onclick={on_dismiss_care_error}>
                                { text.dismiss }
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }}
                <div style="display:flex; gap:10px; margin-bottom:14px;">
                    <textarea
                        placeholder={text.note_placeholder}
                        value={(*note_draft).clone()}
                        oninput={on_note_input}
                        rows="2"
                        style="flex:1; background:#0d1117; color:inherit; border:1px solid #30363d; border-radius:8px; padding:8px; resize:vertical;"
                    />
                    <button
                        class="btn btn-primary"
                        style="align-self:flex-end;"
                        onclick={on_add_note}
                        disabled={note_draft.trim().is_empty()}
                    >
                        { text.add_note }
                    </button>
                </div>
                { if care.events.is_empty() {
                    html! { <p style="color:#8b949e; margin:0;">{ text.no_care_yet }</p> }
                } else {
                    html! {
                        <div style="display:flex; flex-direction:column;">
                            { for care.events.iter().map(|event| {
                                let remove = {
                                    let care = care.clone();
                                    let plant_id = event.plant_id;
                                    let event_id = event.id;
                                    Callback::from(move |_: MouseEvent| {
                                        care::delete_event(care.clone(), plant_id, event_id);
                                    })
                                };
                                html! {
                                    <div style="display:flex; align-items:center; gap:10px; padding:8px 0; border-bottom:1px solid #21262d;">
                                        <span style="width:24px; text-align:center;">{ event_icon(&event.event_type) }</span>
                                        <div style="flex:1; min-width:0;">
                                            <div style="font-weight:500;">{ event_label(&event.event_type, text) }</div>
                                            { if let Some(notes) = &event.notes {
                                                html! { <div style="color:#8b949e; font-size:13px;">{ notes }</div> }
                                            } else {
                                                html! {}
                                            }}
                                        </div>
                                        <span style="color:#8b949e; font-size:13px;">
                                            { format_date(&event.occurred_at, locale_tag) }
                                        </span>
                                        <button
                                            class="btn"
                                            aria-label={text.delete}
                                            style="background:none; border:none; color:#8b949e; cursor:pointer;"
                                            onclick={remove}
                                        >
                                            {"✕"}
                                        </button>
                                    </div>
                                }
                            })}
                        </div>
                    }
                }}
            </section>
            { if *lightbox_open {
                if let Some(url) = &plant.photo_url {
                    html! {
                        <Lightbox src={url.clone()} alt={plant.name.clone()} on_close={on_close_lightbox} />
                    }
                } else {
                    html! {}
                }
            } else {
                html! {}
            }}
            <ModalDialog
                open={*confirm_delete}
                title={text.delete_plant_title}
                message={text.delete_plant_message}
                mode={DialogMode::Confirm}
                confirm_label={Some(text.delete.to_string())}
                variant={DialogVariant::Danger}
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
            />
        </div>
    }
}

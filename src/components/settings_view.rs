use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::app::SettingsContext;
use super::modal_dialog::{DialogMode, DialogVariant, ModalDialog};
use crate::api::{self, EXPORT_URL};
use crate::i18n::plural;
use crate::model::{AppInfo, ImportResult, MqttRepairResult, MqttStatus, Stats};
use crate::state::locations::LocationsAction;
use crate::state::{locations, plants, Locale, LocationsState, PlantsState, ThemePreference};
use crate::util::fill;

/// Appearance, language, locations, about, sensors and backup handling.
#[function_component(SettingsView)]
pub fn settings_view() -> Html {
    let settings = use_context::<SettingsContext>().expect("settings context");
    let text = settings.text;
    let plants = use_context::<UseReducerHandle<PlantsState>>().expect("plants store");
    let locations = use_context::<UseReducerHandle<LocationsState>>().expect("locations store");

    let info = use_state(|| None::<AppInfo>);
    let stats = use_state(|| None::<Stats>);
    let mqtt = use_state(|| None::<MqttStatus>);
    let repair_result = use_state(|| None::<MqttRepairResult>);
    let repair_error = use_state(|| None::<String>);
    let repairing = use_state(|| false);
    let import_result = use_state(|| None::<ImportResult>);
    let import_error = use_state(|| None::<String>);
    let importing = use_state(|| false);
    // Location row under inline rename, if any.
    let renaming = use_state(|| None::<i64>);
    let rename_draft = use_state(String::new);
    let confirm_delete = use_state(|| None::<i64>);

    {
        let locations = locations.clone();
        let info = info.clone();
        let stats = stats.clone();
        let mqtt = mqtt.clone();
        use_effect_with((), move |_| {
            locations::load_locations(locations);
            spawn_local(async move {
                match api::fetch_app_info().await {
                    Ok(v) => info.set(Some(v)),
                    Err(e) => log::warn!("loading app info failed: {e}"),
                }
                match api::fetch_stats().await {
                    Ok(v) => stats.set(Some(v)),
                    Err(e) => log::warn!("loading stats failed: {e}"),
                }
                match api::fetch_mqtt_status().await {
                    Ok(v) => mqtt.set(Some(v)),
                    Err(e) => log::warn!("loading mqtt status failed: {e}"),
                }
            });
        });
    }

    let on_language_change = {
        let set_locale = settings.set_locale.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
                set_locale.emit(Locale::parse(&select.value()));
            }
        })
    };

    let on_start_rename = {
        let renaming = renaming.clone();
        let rename_draft = rename_draft.clone();
        Callback::from(move |(id, name): (i64, String)| {
            renaming.set(Some(id));
            rename_draft.set(name);
        })
    };
    let on_rename_input = {
        let rename_draft = rename_draft.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok()) {
                rename_draft.set(input.value());
            }
        })
    };
    let on_rename_save = {
        let locations = locations.clone();
        let renaming = renaming.clone();
        let rename_draft = rename_draft.clone();
        Callback::from(move |id: i64| {
            let name = rename_draft.trim().to_string();
            if name.is_empty() {
                return;
            }
            locations::rename_location(locations.clone(), id, name);
            renaming.set(None);
            rename_draft.set(String::new());
        })
    };
    let on_rename_cancel = {
        let renaming = renaming.clone();
        Callback::from(move |_: MouseEvent| renaming.set(None))
    };

    let on_cancel_delete = {
        let confirm_delete = confirm_delete.clone();
        Callback::from(move |_| confirm_delete.set(None))
    };
    let on_confirm_delete = {
        let locations = locations.clone();
        let confirm_delete = confirm_delete.clone();
        Callback::from(move |_| {
            if let Some(id) = *confirm_delete {
                locations::delete_location(locations.clone(), id);
            }
            confirm_delete.set(None);
        })
    };

    let on_repair = {
        let repair_result = repair_result.clone();
        let repair_error = repair_error.clone();
        let repairing = repairing.clone();
        Callback::from(move |_: MouseEvent| {
            if *repairing {
                return;
            }
            repairing.set(true);
            repair_error.set(None);
            let repair_result = repair_result.clone();
            let repair_error = repair_error.clone();
            let repairing = repairing.clone();
            spawn_local(async move {
                match api::repair_mqtt().await {
                    Ok(result) => repair_result.set(Some(result)),
                    Err(e) => {
                        log::warn!("mqtt repair failed: {e}");
                        repair_error.set(Some(e.to_string()));
                    }
                }
                repairing.set(false);
            });
        })
    };

    let on_import_pick = {
        let plants = plants.clone();
        let locations = locations.clone();
        let import_result = import_result.clone();
        let import_error = import_error.clone();
        let importing = importing.clone();
        Callback::from(move |e: Event| {
            let input = e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
            let Some(input) = input else { return };
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            input.set_value("");
            importing.set(true);
            import_error.set(None);
            let plants = plants.clone();
            let locations = locations.clone();
            let import_result = import_result.clone();
            let import_error = import_error.clone();
            let importing = importing.clone();
            spawn_local(async move {
                match api::import_data(&file).await {
                    Ok(result) => {
                        import_result.set(Some(result));
                        // The backup replaced server data wholesale.
                        plants::load_plants(plants);
                        locations::load_locations(locations);
                    }
                    Err(e) => {
                        log::warn!("importing backup failed: {e}");
                        import_error.set(Some(e.to_string()));
                    }
                }
                importing.set(false);
            });
        })
    };

    let on_dismiss_locations_error = {
        let locations = locations.clone();
        Callback::from(move |_: MouseEvent| locations.dispatch(LocationsAction::ClearError))
    };

    let section_style = "background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:16px;";
    let heading_style = "margin:0 0 12px; font-size:16px;";
    let row_style = "display:flex; justify-content:space-between; gap:12px; padding:6px 0; border-bottom:1px solid #21262d;";
    let muted = "color:#8b949e;";
    html! {
        <div style="display:flex; flex-direction:column; gap:16px; max-width:640px;">
            <h2 style="margin:0; font-size:22px;">{ text.settings_title }</h2>
            <section style={section_style}>
                <h3 style={heading_style}>{ text.appearance }</h3>
                <div style="display:flex; flex-direction:column; gap:12px;">
                    <div role="radiogroup" aria-label={text.theme_label} style="display:flex; gap:8px;">
                        { for [
                            (ThemePreference::Light, text.theme_light),
                            (ThemePreference::Dark, text.theme_dark),
                            (ThemePreference::System, text.theme_system),
                        ]
                        .into_iter()
                        .map(|(pref, label)| {
                            let class = if settings.theme == pref {
                                classes!("btn", "active")
                            } else {
                                classes!("btn")
                            };
                            let pick = {
                                let set_theme = settings.set_theme.clone();
                                Callback::from(move |_: MouseEvent| set_theme.emit(pref))
                            };
                            html! { <button {class} onclick={pick}>{ label }</button> }
                        })}
                    </div>
                    <div style="display:flex; align-items:center; gap:12px;">
                        <span style={muted}>{ text.language }</span>
                        <select
                            onchange={on_language_change}
                            style="background:#0d1117; color:inherit; border:1px solid #30363d; border-radius:8px; padding:6px 10px;"
                        >
                            { for Locale::ALL.iter().map(|locale| {
                                html! {
                                    <option value={locale.as_str()} selected={settings.locale == *locale}>
                                        { locale.label() }
                                    </option>
                                }
                            })}
                        </select>
                    </div>
                </div>
            </section>
            <section style={section_style}>
                <h3 style={heading_style}>{ text.locations_heading }</h3>
                { if let Some(error) = &locations.error {
                    html! {
                        <div style="display:flex; justify-content:space-between; align-items:center; background:rgba(248,81,73,0.15); border:1px solid #f85149; border-radius:8px; padding:8px 12px; color:#f85149; margin-bottom:10px;">
                            <span>{ error }</span>
                            <button class="btn" style="background:none; border:none; color:#f85149; cursor:pointer;" onclick={on_dismiss_locations_error}>
                                { text.dismiss }
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }}
                { for locations.locations.iter().map(|loc| {
                    if *renaming == Some(loc.id) {
                        let save = {
                            let on_rename_save = on_rename_save.clone();
                            let id = loc.id;
                            Callback::from(move |_: MouseEvent| on_rename_save.emit(id))
                        };
                        html! {
                            <div style="display:flex; align-items:center; gap:8px; padding:6px 0; border-bottom:1px solid #21262d;">
                                <input
                                    type="text"
                                    value={(*rename_draft).clone()}
                                    oninput={on_rename_input.clone()}
                                    style="flex:1; background:#0d1117; color:inherit; border:1px solid #30363d; border-radius:8px; padding:6px 8px;"
                                />
                                <button class="btn btn-primary" onclick={save}>{ text.save }</button>
                                <button class="btn" onclick={on_rename_cancel.clone()}>{ text.cancel }</button>
                            </div>
                        }
                    } else {
                        let start = {
                            let on_start_rename = on_start_rename.clone();
                            let id = loc.id;
                            let name = loc.name.clone();
                            Callback::from(move |_: MouseEvent| on_start_rename.emit((id, name.clone())))
                        };
                        let ask_delete = {
                            let confirm_delete = confirm_delete.clone();
                            let id = loc.id;
                            Callback::from(move |_: MouseEvent| confirm_delete.set(Some(id)))
                        };
                        html! {
                            <div style={row_style}>
                                <span>
                                    { &loc.name }
                                    <span style={muted}>{ format!(" · {}", plural(text.stats_plants_one, text.stats_plants_other, loc.plant_count)) }</span>
                                </span>
                                <span style="display:flex; gap:8px;">
                                    <button class="btn" onclick={start}>{ text.rename }</button>
                                    <button class="btn" style="color:#f85149;" onclick={ask_delete}>{ text.delete }</button>
                                </span>
                            </div>
                        }
                    }
                })}
            </section>
            <section style={section_style}>
                <h3 style={heading_style}>{ text.sensors }</h3>
                { if let Some(status) = &*mqtt {
                    let (label, color) = match status.status.as_str() {
                        "connected" => (text.mqtt_connected, "#3fb950"),
                        "disconnected" => (text.mqtt_disconnected, "#f85149"),
                        _ => (text.mqtt_disabled, "#8b949e"),
                    };
                    html! {
                        <div>
                            <div style={row_style}>
                                <span style={muted}>{"MQTT"}</span>
                                <span style={format!("color:{color}; font-weight:600;")}>{ label }</span>
                            </div>
                            { if let Some(broker) = &status.broker {
                                html! {
                                    <div style={row_style}>
                                        <span style={muted}>{ text.mqtt_broker }</span>
                                        <span>{ broker }</span>
                                    </div>
                                }
                            } else {
                                html! {}
                            }}
                            { if let Some(prefix) = &status.topic_prefix {
                                html! {
                                    <div style={row_style}>
                                        <span style={muted}>{ text.mqtt_topic_prefix }</span>
                                        <span>{ prefix }</span>
                                    </div>
                                }
                            } else {
                                html! {}
                            }}
                            <div style="display:flex; align-items:center; gap:12px; padding-top:10px;">
                                <button class="btn" onclick={on_repair} disabled={*repairing}>{ text.repair }</button>
                                { if let Some(result) = &*repair_result {
                                    html! {
                                        <span style={muted}>
                                            { fill(text.repair_summary, &[
                                                ("cleared", result.cleared.to_string()),
                                                ("published", result.published.to_string()),
                                            ]) }
                                        </span>
                                    }
                                } else if let Some(error) = &*repair_error {
                                    html! { <span style="color:#f85149;">{ error }</span> }
                                } else {
                                    html! {}
                                }}
                            </div>
                        </div>
                    }
                } else {
                    html! { <p style={format!("{muted} margin:0;")}>{ text.loading }</p> }
                }}
            </section>
            <section style={section_style}>
                <h3 style={heading_style}>{ text.about }</h3>
                { if let Some(info) = &*info {
                    html! {
                        <div>
                            <div style={row_style}>
                                <span style={muted}>{ text.version }</span>
                                <span>{ &info.version }</span>
                            </div>
                            <div style={row_style}>
                                <span style={muted}>{ text.repository }</span>
                                <a href={info.repository.clone()} target="_blank" rel="noreferrer" style="color:#58a6ff;">
                                    { &info.repository }
                                </a>
                            </div>
                            <div style={row_style}>
                                <span style={muted}>{ text.license }</span>
                                <span>{ &info.license }</span>
                            </div>
                        </div>
                    }
                } else {
                    html! { <p style={format!("{muted} margin:0;")}>{ text.loading }</p> }
                }}
                { if let Some(stats) = &*stats {
                    html! {
                        <div style="display:flex; gap:16px; padding-top:10px; color:#8b949e;">
                            <span>{ plural(text.stats_plants_one, text.stats_plants_other, stats.plant_count) }</span>
                            <span>{ plural(text.stats_events_one, text.stats_events_other, stats.care_event_count) }</span>
                        </div>
                    }
                } else {
                    html! {}
                }}
            </section>
            <section style={section_style}>
                <h3 style={heading_style}>{ text.data_heading }</h3>
                <div style="display:flex; gap:10px; align-items:center;">
                    <label class="btn" style="cursor:pointer;">
                        { text.import_backup }
                        <input type="file" accept="application/json" style="display:none;" onchange={on_import_pick} disabled={*importing} />
                    </label>
                    <a class="btn" href={EXPORT_URL} style="text-decoration:none;">{ text.export_backup }</a>
                </div>
                { if let Some(result) = &*import_result {
                    html! {
                        <p style={format!("{muted} margin:10px 0 0;")}>
                            { fill(text.import_summary, &[
                                ("locations", result.locations.to_string()),
                                ("plants", result.plants.to_string()),
                                ("events", result.care_events.to_string()),
                                ("photos", result.photos.to_string()),
                            ]) }
                        </p>
                    }
                } else if let Some(error) = &*import_error {
                    html! { <p style="color:#f85149; margin:10px 0 0;">{ error }</p> }
                } else {
                    html! {}
                }}
            </section>
            <ModalDialog
                open={confirm_delete.is_some()}
                title={text.delete_location_title}
                message={text.delete_location_message}
                mode={DialogMode::Confirm}
                confirm_label={Some(text.delete.to_string())}
                variant={DialogVariant::Danger}
                on_confirm={on_confirm_delete}
                on_cancel={on_cancel_delete}
            />
        </div>
    }
}

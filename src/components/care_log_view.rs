use wasm_bindgen::JsCast;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use super::app::SettingsContext;
use crate::model::EVENT_TYPES;
use crate::state::care::CareAction;
use crate::state::{care, CareState};
use crate::util::{event_icon, event_label, format_date};

#[derive(Properties, PartialEq, Clone)]
pub struct CareLogViewProps {
    pub on_open_plant: Callback<i64>,
}

/// Global care timeline, newest first, paged with a keyset cursor and
/// filterable by event kind.
#[function_component(CareLogView)]
pub fn care_log_view(props: &CareLogViewProps) -> Html {
    let settings = use_context::<SettingsContext>().expect("settings context");
    let text = settings.text;
    let care = use_context::<UseReducerHandle<CareState>>().expect("care store");
    let loading_more = use_state(|| false);

    {
        let care = care.clone();
        use_effect_with((), move |_| {
            care::load_timeline(care, true, Callback::noop());
        });
    }

    let on_filter_change = {
        let care = care.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target().and_then(|t| t.dyn_into::<HtmlSelectElement>().ok()) {
                let value = select.value();
                let filter = if value.is_empty() { None } else { Some(value) };
                care::set_filter(care.clone(), filter);
            }
        })
    };

    let on_load_more = {
        let care = care.clone();
        let loading_more = loading_more.clone();
        Callback::from(move |_: MouseEvent| {
            if *loading_more {
                return;
            }
            loading_more.set(true);
            let loading_more = loading_more.clone();
            care::load_timeline(
                care.clone(),
                false,
                Callback::from(move |_| loading_more.set(false)),
            );
        })
    };

    let on_dismiss_error = {
        let care = care.clone();
        Callback::from(move |_: MouseEvent| care.dispatch(CareAction::ClearError))
    };

    let locale_tag = settings.locale.as_str();
    let filter_value = care.filter.clone().unwrap_or_default();
    html! {
        <div style="display:flex; flex-direction:column; gap:14px; max-width:680px;">
            <div style="display:flex; justify-content:space-between; align-items:center; gap:12px;">
                <h2 style="margin:0; font-size:22px;">{ text.care_log_title }</h2>
                <select
                    onchange={on_filter_change}
                    style="background:#0d1117; color:inherit; border:1px solid #30363d; border-radius:8px; padding:6px 10px;"
                >
                    <option value="" selected={filter_value.is_empty()}>{ text.filter_all }</option>
                    { for EVENT_TYPES.iter().map(|kind| {
                        html! {
                            <option value={*kind} selected={filter_value == *kind}>
                                { event_label(kind, text) }
                            </option>
                        }
                    })}
                </select>
            </div>
            { if let Some(error) = &care.error {
                html! {
                    <div style="display:flex; justify-content:space-between; align-items:center; background:rgba(248,81,73,0.15); border:1px solid #f85149; border-radius:8px; padding:10px 14px; color:#f85149;">
                        <span>{ error }</span>
                        <button class="btn" style="background:none; border:none; color:#f85149; cursor:pointer;" onclick={on_dismiss_error}>
                            { text.dismiss }
                        </button>
                    </div>
                }
            } else {
                html! {}
            }}
            { if care.timeline.is_empty() {
                html! { <p style="color:#8b949e;">{ text.no_care_yet }</p> }
            } else {
                html! {
                    <div style="background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:4px 16px;">
                        { for care.timeline.iter().map(|event| {
                            let open = {
                                let on_open = props.on_open_plant.clone();
                                let id = event.plant_id;
                                Callback::from(move |_: MouseEvent| on_open.emit(id))
                            };
                            html! {
                                <div
                                    style="display:flex; align-items:center; gap:10px; padding:10px 0; border-bottom:1px solid #21262d; cursor:pointer;"
                                    onclick={open}
                                >
                                    <span style="width:24px; text-align:center;">{ event_icon(&event.event_type) }</span>
                                    <div style="flex:1; min-width:0;">
                                        <div style="font-weight:500;">
                                            { &event.plant_name }
                                            <span style="color:#8b949e; font-weight:400;">
                                                { format!(" · {}", event_label(&event.event_type, text)) }
                                            </span>
                                        </div>
                                        { if let Some(notes) = &event.notes {
                                            html! { <div style="color:#8b949e; font-size:13px;">{ notes }</div> }
                                        } else {
                                            html! {}
                                        }}
                                    </div>
                                    <span style="color:#8b949e; font-size:13px; flex-shrink:0;">
                                        { format_date(&event.occurred_at, locale_tag) }
                                    </span>
                                </div>
                            }
                        })}
                    </div>
                }
            }}
            { if care.has_more {
                html! {
                    <button class="btn" style="align-self:center;" onclick={on_load_more} disabled={*loading_more}>
                        { text.load_more }
                    </button>
                }
            } else {
                html! {}
            }}
        </div>
    }
}

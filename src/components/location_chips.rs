use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::app::SettingsContext;
use crate::model::Location;

#[derive(Properties, PartialEq, Clone)]
pub struct LocationChipsProps {
    pub locations: Vec<Location>,
    /// Selected location id; `None` selects the "None" chip.
    #[prop_or_default]
    pub value: Option<i64>,
    pub on_change: Callback<Option<i64>>,
    /// Enables the inline "+ New" form; receives the submitted name.
    /// The caller creates the location and moves the selection itself.
    #[prop_or_default]
    pub on_create: Option<Callback<String>>,
    #[prop_or(true)]
    pub show_none: bool,
    /// Replaces the "None" chip label, e.g. with "All" on the dashboard.
    #[prop_or_default]
    pub none_label: Option<String>,
}

const CHIP_STYLE: &str = "padding:4px 12px; border-radius:999px; border:1px solid #30363d; background:transparent; cursor:pointer; font-size:13px;";

/// One-of-many location picker rendered as a chip row, with an optional
/// inline creation form.
#[function_component(LocationChips)]
pub fn location_chips(props: &LocationChipsProps) -> Html {
    let settings = use_context::<SettingsContext>().expect("settings context");
    let text = settings.text;
    let adding = use_state(|| false);
    let draft = use_state(String::new);

    let none_chip = {
        if props.show_none {
            let on_change = props.on_change.clone();
            let class = if props.value.is_none() {
                classes!("chip", "active")
            } else {
                classes!("chip")
            };
            let label = props
                .none_label
                .clone()
                .unwrap_or_else(|| text.chip_none.to_string());
            html! {
                <button
                    type="button"
                    {class}
                    style={CHIP_STYLE}
                    onclick={Callback::from(move |_: MouseEvent| on_change.emit(None))}
                >{ label }</button>
            }
        } else {
            html! {}
        }
    };

    let new_chip = {
        match (props.on_create.clone(), *adding) {
            (Some(_), false) => {
                let adding = adding.clone();
                html! {
                    <button
                        type="button"
                        class="chip"
                        style={CHIP_STYLE}
                        onclick={Callback::from(move |_: MouseEvent| adding.set(true))}
                    >{ text.chip_new }</button>
                }
            }
            (Some(on_create), true) => {
                let oninput = {
                    let draft = draft.clone();
                    Callback::from(move |e: InputEvent| {
                        if let Some(input) =
                            e.target().and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                        {
                            draft.set(input.value());
                        }
                    })
                };
                let submit = {
                    let adding = adding.clone();
                    let draft = draft.clone();
                    Callback::from(move |_: MouseEvent| {
                        let name = draft.trim().to_string();
                        if name.is_empty() {
                            return;
                        }
                        on_create.emit(name);
                        adding.set(false);
                        draft.set(String::new());
                    })
                };
                let cancel = {
                    let adding = adding.clone();
                    let draft = draft.clone();
                    Callback::from(move |_: MouseEvent| {
                        adding.set(false);
                        draft.set(String::new());
                    })
                };
                html! {
                    <span style="display:inline-flex; gap:6px; align-items:center;">
                        <input
                            type="text"
                            placeholder={text.location_name_placeholder}
                            value={(*draft).clone()}
                            {oninput}
                            style="padding:4px 10px; border-radius:999px; border:1px solid #30363d; font-size:13px; width:130px;"
                        />
                        <button type="button" class="chip" style={CHIP_STYLE} onclick={submit}>{ text.add }</button>
                        <button type="button" class="chip" style={CHIP_STYLE} onclick={cancel}>{ text.cancel }</button>
                    </span>
                }
            }
            (None, _) => html! {},
        }
    };

    html! {
        <div class="location-chips" style="display:flex; flex-wrap:wrap; gap:6px; align-items:center;">
            { none_chip }
            { for props.locations.iter().map(|location| {
                let on_change = props.on_change.clone();
                let id = location.id;
                let class = if props.value == Some(id) {
                    classes!("chip", "active")
                } else {
                    classes!("chip")
                };
                html! {
                    <button
                        type="button"
                        {class}
                        style={CHIP_STYLE}
                        onclick={Callback::from(move |_: MouseEvent| on_change.emit(Some(id)))}
                    >{ location.name.clone() }</button>
                }
            }) }
            { new_chip }
        </div>
    }
}

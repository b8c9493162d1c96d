use yew::prelude::*;

use super::app::SettingsContext;
use crate::i18n::{plural, Translations};

/// Days per preset, matched positionally against the labels.
const PRESETS: [i64; 4] = [3, 7, 14, 30];

fn preset_label(days: i64, text: &Translations) -> &'static str {
    match days {
        3 => text.preset_thirsty,
        7 => text.preset_weekly,
        14 => text.preset_biweekly,
        _ => text.preset_monthly,
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct WateringIntervalProps {
    /// Interval in days, at least 1.
    pub value: i64,
    pub on_change: Callback<i64>,
}

/// Watering interval editor: presets for the common cases, a stepper
/// for everything in between.
#[function_component(WateringInterval)]
pub fn watering_interval(props: &WateringIntervalProps) -> Html {
    let settings = use_context::<SettingsContext>().expect("settings context");
    let text = settings.text;
    let value = props.value;

    let decrement = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            if value > 1 {
                on_change.emit(value - 1);
            }
        })
    };
    let increment = {
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| on_change.emit(value + 1))
    };

    html! {
        <div class="watering-interval" style="display:flex; flex-direction:column; gap:10px;">
            <div style="display:flex; flex-wrap:wrap; gap:6px;">
                { for PRESETS.iter().map(|days| {
                    let days = *days;
                    let on_change = props.on_change.clone();
                    let class = if value == days {
                        classes!("preset-btn", "active")
                    } else {
                        classes!("preset-btn")
                    };
                    html! {
                        <button
                            type="button"
                            {class}
                            style="padding:4px 12px; border-radius:8px; border:1px solid #30363d; background:transparent; cursor:pointer; font-size:13px;"
                            onclick={Callback::from(move |_: MouseEvent| on_change.emit(days))}
                        >{ preset_label(days, text) }</button>
                    }
                }) }
            </div>
            <div style="display:flex; align-items:center; gap:10px;">
                <button
                    type="button"
                    class="stepper-btn"
                    disabled={value <= 1}
                    onclick={decrement}
                    style="width:32px; height:32px; border-radius:8px; border:1px solid #30363d; background:transparent; cursor:pointer;"
                >{"−"}</button>
                <span style="min-width:100px; text-align:center;">
                    { plural(text.interval_one, text.interval_other, value) }
                </span>
                <button
                    type="button"
                    class="stepper-btn"
                    onclick={increment}
                    style="width:32px; height:32px; border-radius:8px; border:1px solid #30363d; background:transparent; cursor:pointer;"
                >{"+"}</button>
            </div>
        </div>
    }
}

use yew::prelude::*;

use super::app::SettingsContext;
use crate::util::{days_from_now, due_phrase};

#[derive(Properties, PartialEq, Clone)]
pub struct StatusBadgeProps {
    /// Watering status straight from the backend: "ok", "due" or
    /// "overdue". Anything else renders like "ok".
    pub status: String,
    #[prop_or_default]
    pub next_due: Option<String>,
}

/// Colored watering status pill, with a due distance suffix when the
/// next due date is known and parseable.
#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let settings = use_context::<SettingsContext>().expect("settings context");
    let text = settings.text;

    let (label, color) = match props.status.as_str() {
        "overdue" => (text.status_overdue, "#b3261e"),
        "due" => (text.status_due, "#9a6b00"),
        _ => (text.status_ok, "#1b6e3c"),
    };

    let suffix = props
        .next_due
        .as_deref()
        .and_then(days_from_now)
        .map(|days| due_phrase(days, text));

    html! {
        <span
            class={classes!("status-badge", format!("status-{}", props.status))}
            style={format!("display:inline-flex; align-items:center; gap:6px; padding:2px 10px; border-radius:999px; font-size:12px; color:#fff; background:{color};")}
        >
            { label }
            { if let Some(suffix) = suffix { html!{ <span style="opacity:0.85;">{ suffix }</span> } } else { html!{} } }
        </span>
    }
}

use yew::prelude::*;

use super::status_badge::StatusBadge;
use crate::model::Plant;
use crate::util::emoji_svg_path;

#[derive(Properties, PartialEq, Clone)]
pub struct PlantCardProps {
    pub plant: Plant,
    pub on_open: Callback<i64>,
}

/// One tile in the dashboard grid. The whole card opens the detail view.
#[function_component]
pub fn PlantCard(props: &PlantCardProps) -> Html {
    let plant = &props.plant;

    let on_click = {
        let on_open = props.on_open.clone();
        let id = plant.id;
        Callback::from(move |_: MouseEvent| on_open.emit(id))
    };

    let thumb_style = "width:56px; height:56px; border-radius:12px; object-fit:cover; flex-shrink:0;";
    html! {
        <div
            class="plant-card"
            style="display:flex; align-items:center; gap:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:12px 14px; cursor:pointer;"
            onclick={on_click}
        >
            { if let Some(url) = &plant.photo_url {
                html! { <img class="plant-card-photo" src={url.clone()} alt="" style={thumb_style} /> }
            } else {
                html! { <img class="plant-card-icon" src={emoji_svg_path(&plant.icon)} alt="" style={thumb_style} /> }
            }}
            <div style="flex:1; min-width:0;">
                <div class="plant-card-name" style="font-weight:600;">{ &plant.name }</div>
                { if let Some(species) = &plant.species {
                    html! { <div style="font-size:13px; color:#8b949e;">{ species }</div> }
                } else {
                    html! {}
                }}
                { if let Some(location) = &plant.location_name {
                    html! { <div style="font-size:12px; color:#8b949e;">{ location }</div> }
                } else {
                    html! {}
                }}
            </div>
            <StatusBadge status={plant.watering_status.clone()} next_due={plant.next_due.clone()} />
        </div>
    }
}

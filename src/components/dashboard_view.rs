use yew::prelude::*;

use super::app::SettingsContext;
use super::location_chips::LocationChips;
use super::plant_card::PlantCard;
use super::status_badge::StatusBadge;
use crate::i18n::plural;
use crate::model::Plant;
use crate::state::plants::PlantsAction;
use crate::state::{locations, plants, LocationsState, PlantsState};
use crate::util::{emoji_svg_path, greeting_for_hour};

#[derive(Properties, PartialEq, Clone)]
pub struct DashboardViewProps {
    pub on_open_plant: Callback<i64>,
    pub on_add_plant: Callback<()>,
}

/// Landing view: greeting, the plants that need water and the full grid.
#[function_component(DashboardView)]
pub fn dashboard_view(props: &DashboardViewProps) -> Html {
    let settings = use_context::<SettingsContext>().expect("settings context");
    let text = settings.text;
    let plants = use_context::<UseReducerHandle<PlantsState>>().expect("plants store");
    let locations = use_context::<UseReducerHandle<LocationsState>>().expect("locations store");
    // Id of the plant whose water request is in flight, if any.
    let watering = use_state(|| None::<i64>);
    let location_filter = use_state(|| None::<i64>);

    {
        let plants = plants.clone();
        let locations = locations.clone();
        use_effect_with((), move |_| {
            plants::load_plants(plants);
            locations::load_locations(locations);
        });
    }

    let mut attention: Vec<Plant> = plants
        .plants
        .iter()
        .filter(|p| matches!(p.watering_status.as_str(), "due" | "overdue"))
        .cloned()
        .collect();
    // Overdue plants come first; the sort is stable so list order holds
    // within each group.
    attention.sort_by_key(|p| if p.watering_status == "overdue" { 0 } else { 1 });

    let hour = js_sys::Date::new_0().get_hours();
    let subtitle = if attention.is_empty() {
        text.subtitle_calm.to_string()
    } else {
        plural(text.attention_one, text.attention_other, attention.len() as i64)
    };

    let on_water = {
        let plants = plants.clone();
        let watering = watering.clone();
        Callback::from(move |id: i64| {
            watering.set(Some(id));
            let watering = watering.clone();
            plants::water_plant(
                plants.clone(),
                id,
                Callback::from(move |_| watering.set(None)),
            );
        })
    };

    let on_dismiss_error = {
        let plants = plants.clone();
        Callback::from(move |_: MouseEvent| plants.dispatch(PlantsAction::ClearError))
    };

    let on_add = {
        let on_add_plant = props.on_add_plant.clone();
        Callback::from(move |_: MouseEvent| on_add_plant.emit(()))
    };

    let on_filter = {
        let location_filter = location_filter.clone();
        Callback::from(move |id: Option<i64>| location_filter.set(id))
    };
    let visible: Vec<Plant> = plants
        .plants
        .iter()
        .filter(|p| match *location_filter {
            Some(id) => p.location_id == Some(id),
            None => true,
        })
        .cloned()
        .collect();

    let section_style = "background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:12px; padding:16px;";
    html! {
        <div class="dashboard" style="display:flex; flex-direction:column; gap:20px;">
            <div class="greeting">
                <h2 style="margin:0; font-size:24px;">{ greeting_for_hour(hour, text) }</h2>
                <p style="margin:4px 0 0; color:#8b949e;">{ subtitle }</p>
            </div>
            { if let Some(error) = &plants.error {
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
            { if !attention.is_empty() {
                html! {
                    <section class="attention-section" style={section_style}>
                        <h3 style="margin:0 0 12px; font-size:16px;">{ text.needs_attention }</h3>
                        <div style="display:flex; gap:12px; overflow-x:auto; padding-bottom:4px;">
                            { for attention.iter().map(|plant| {
                                let open = {
                                    let on_open = props.on_open_plant.clone();
                                    let id = plant.id;
                                    Callback::from(move |_: MouseEvent| on_open.emit(id))
                                };
                                let water = {
                                    let on_water = on_water.clone();
                                    let id = plant.id;
                                    Callback::from(move |e: MouseEvent| {
                                        e.stop_propagation();
                                        on_water.emit(id);
                                    })
                                };
                                let busy = *watering == Some(plant.id);
                                html! {
                                    <div
                                        class="attention-card"
                                        style="display:flex; flex-direction:column; align-items:center; min-width:130px; background:#0d1117; border:1px solid #30363d; border-radius:10px; padding:12px; cursor:pointer;"
                                        onclick={open}
                                    >
                                        { if let Some(url) = &plant.photo_url {
                                            html! { <img class="attention-photo-img" src={url.clone()} alt="" style="width:64px; height:64px; border-radius:10px; object-fit:cover;" /> }
                                        } else {
                                            html! { <img class="attention-icon" src={emoji_svg_path(&plant.icon)} alt="" style="width:64px; height:64px;" /> }
                                        }}
                                        <div class="attention-card-name" style="font-weight:600; margin-top:8px; text-align:center;">{ &plant.name }</div>
                                        <div style="margin-top:4px;">
                                            <StatusBadge status={plant.watering_status.clone()} next_due={plant.next_due.clone()} />
                                        </div>
                                        <button
                                            class="btn btn-primary"
                                            style="margin-top:10px; padding:4px 14px;"
                                            onclick={water}
                                            disabled={busy}
                                        >
                                            { text.water }
                                        </button>
                                    </div>
                                }
                            })}
                        </div>
                    </section>
                }
            } else {
                html! {}
            }}
            <section>
                <div style="display:flex; justify-content:space-between; align-items:center; margin-bottom:12px;">
                    <h3 style="margin:0; font-size:16px;">{ text.my_plants }</h3>
                    { if !plants.plants.is_empty() {
                        html! {
                            <button class="btn btn-primary" onclick={on_add.clone()}>{ text.add_plant }</button>
                        }
                    } else {
                        html! {}
                    }}
                </div>
                { if !locations.locations.is_empty() {
                    html! {
                        <div style="margin-bottom:12px;">
                            <LocationChips
                                locations={locations.locations.clone()}
                                value={*location_filter}
                                on_change={on_filter}
                                none_label={Some(text.filter_all.to_string())}
                            />
                        </div>
                    }
                } else {
                    html! {}
                }}
                { if !plants.loaded && plants.error.is_none() {
                    html! { <p style="color:#8b949e;">{ text.loading }</p> }
                } else if plants.plants.is_empty() {
                    html! {
                        <div style="display:flex; flex-direction:column; align-items:center; gap:8px; padding:40px 0; text-align:center;">
                            <div style="font-size:40px;">{"🪴"}</div>
                            <div style="font-weight:600;">{ text.empty_title }</div>
                            <div style="color:#8b949e;">{ text.empty_hint }</div>
                            <button class="btn btn-primary" style="margin-top:8px;" onclick={on_add}>{ text.add_plant }</button>
                        </div>
                    }
                } else {
                    html! {
                        <div style="display:grid; grid-template-columns:repeat(auto-fill, minmax(260px, 1fr)); gap:12px;">
                            { for visible.iter().map(|plant| {
                                html! {
                                    <PlantCard
                                        plant={plant.clone()}
                                        on_open={props.on_open_plant.clone()}
                                    />
                                }
                            })}
                        </div>
                    }
                }}
            </section>
        </div>
    }
}

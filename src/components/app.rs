use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::MediaQueryListEvent;
use yew::prelude::*;

use super::care_log_view::CareLogView;
use super::dashboard_view::DashboardView;
use super::plant_detail_view::PlantDetailView;
use super::plant_form_view::PlantFormView;
use super::settings_view::SettingsView;
use crate::i18n::Translations;
use crate::state::{
    locale, theme, CareState, Locale, LocationsState, PlantsState, ThemePreference,
};

#[derive(PartialEq, Clone)]
enum View {
    Dashboard,
    PlantDetail { id: i64 },
    PlantNew,
    PlantEdit { id: i64 },
    CareLog,
    Settings,
}

// Provide settings context (so components can read labels and switch theme or language without prop drilling)
#[derive(Clone, PartialEq)]
pub struct SettingsContext {
    pub text: &'static Translations,
    pub locale: Locale,
    pub theme: ThemePreference,
    pub set_locale: Callback<Locale>,
    pub set_theme: Callback<ThemePreference>,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Dashboard);
    let locale = use_state(locale::read_locale);
    let theme = use_state(theme::read_preference);
    let plants = use_reducer(PlantsState::default);
    let locations = use_reducer(LocationsState::default);
    let care = use_reducer(CareState::default);

    // Persist the theme choice and restyle the document
    use_effect_with(*theme, move |pref| {
        theme::write_preference(*pref);
        theme::apply_mode(pref.resolve(theme::system_prefers_dark()));
        || ()
    });

    use_effect_with(*locale, move |l| {
        locale::write_locale(*l);
        || ()
    });

    // Follow OS appearance changes while the System preference is active.
    // The handler re-reads the stored preference because it outlives renders.
    use_effect_with((), move |_| {
        let on_change = Closure::wrap(Box::new(move |e: MediaQueryListEvent| {
            if theme::read_preference() == ThemePreference::System {
                theme::apply_mode(ThemePreference::System.resolve(e.matches()));
            }
        }) as Box<dyn FnMut(_)>);
        let media = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
            .flatten();
        if let Some(media) = &media {
            let _ = media
                .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref());
        }
        move || {
            if let Some(media) = &media {
                let _ = media.remove_event_listener_with_callback(
                    "change",
                    on_change.as_ref().unchecked_ref(),
                );
            }
            let _keep_alive = &on_change;
        }
    });

    let set_locale = {
        let locale = locale.clone();
        Callback::from(move |l: Locale| locale.set(l))
    };
    let set_theme = {
        let theme = theme.clone();
        Callback::from(move |t: ThemePreference| theme.set(t))
    };
    let settings_ctx = SettingsContext {
        text: locale.translations(),
        locale: *locale,
        theme: *theme,
        set_locale,
        set_theme,
    };
    let text = settings_ctx.text;

    let to_dashboard = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Dashboard))
    };
    let to_care_log = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::CareLog))
    };
    let to_settings = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Settings))
    };
    let open_plant = {
        let view = view.clone();
        Callback::from(move |id: i64| view.set(View::PlantDetail { id }))
    };
    let add_plant = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::PlantNew))
    };
    let edit_plant = {
        let view = view.clone();
        Callback::from(move |id: i64| view.set(View::PlantEdit { id }))
    };
    let form_saved = {
        let view = view.clone();
        Callback::from(move |id: i64| view.set(View::PlantDetail { id }))
    };

    let content = match *view {
        View::Dashboard => html! {
            <DashboardView on_open_plant={open_plant.clone()} on_add_plant={add_plant} />
        },
        View::PlantDetail { id } => html! {
            <PlantDetailView {id} on_back={to_dashboard.clone()} on_edit={edit_plant} />
        },
        View::PlantNew => html! {
            <PlantFormView
                plant_id={None::<i64>}
                on_saved={form_saved}
                on_cancel={to_dashboard.clone()}
            />
        },
        View::PlantEdit { id } => html! {
            <PlantFormView
                plant_id={Some(id)}
                on_saved={form_saved}
                on_cancel={{
                    let view = view.clone();
                    Callback::from(move |_| view.set(View::PlantDetail { id }))
                }}
            />
        },
        View::CareLog => html! {
            <CareLogView on_open_plant={open_plant} />
        },
        View::Settings => html! { <SettingsView /> },
    };

    let plants_tab = matches!(
        *view,
        View::Dashboard | View::PlantDetail { .. } | View::PlantNew | View::PlantEdit { .. }
    );
    let nav_class = |active: bool| {
        if active {
            classes!("btn", "active")
        } else {
            classes!("btn")
        }
    };
    html! {
        <ContextProvider<SettingsContext> context={settings_ctx}>
        <ContextProvider<UseReducerHandle<PlantsState>> context={plants.clone()}>
        <ContextProvider<UseReducerHandle<LocationsState>> context={locations.clone()}>
        <ContextProvider<UseReducerHandle<CareState>> context={care.clone()}>
            <div style="min-height:100vh; background:#0d1117; color:#e6edf3; font-size:14px;">
                <header style="display:flex; align-items:center; gap:16px; padding:12px 20px; background:rgba(22,27,34,0.95); border-bottom:1px solid #30363d;">
                    <span style="font-weight:700; font-size:16px;">{"🪴 "}{ text.app_name }</span>
                    <nav style="display:flex; gap:8px;">
                        <button class={nav_class(plants_tab)} onclick={to_dashboard.reform(|_| ())}>
                            { text.nav_plants }
                        </button>
                        <button class={nav_class(matches!(*view, View::CareLog))} onclick={to_care_log}>
                            { text.nav_care_log }
                        </button>
                        <button class={nav_class(matches!(*view, View::Settings))} onclick={to_settings}>
                            { text.nav_settings }
                        </button>
                    </nav>
                </header>
                <main style="max-width:960px; margin:0 auto; padding:20px;">
                    { content }
                </main>
            </div>
        </ContextProvider<UseReducerHandle<CareState>>>
        </ContextProvider<UseReducerHandle<LocationsState>>>
        </ContextProvider<UseReducerHandle<PlantsState>>>
        </ContextProvider<SettingsContext>>
    }
}

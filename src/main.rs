mod api;
mod components;
mod i18n;
mod model;
mod state;
mod util;

use components::App;

fn main() {
    console_log::init_with_level(log::Level::Info).expect("logger init");
    yew::Renderer::<App>::new().render();
}

pub mod app;
pub mod care_log_view;
pub mod dashboard_view;
pub mod lightbox;
pub mod location_chips;
pub mod modal_dialog;
pub mod plant_card;
pub mod plant_detail_view;
pub mod plant_form_view;
pub mod settings_view;
pub mod status_badge;
pub mod watering_interval;

pub use app::App;

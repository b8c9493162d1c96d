//! Static translation tables. One dictionary per locale; templates use
//! `{n}` (and named placeholders in the two summary strings) filled in
//! by the caller.

mod de;
mod en;
mod es;

pub use de::DE;
pub use en::EN;
pub use es::ES;

/// Every user-visible string in the interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Translations {
    pub app_name: &'static str,
    pub nav_plants: &'static str,
    pub nav_care_log: &'static str,
    pub nav_settings: &'static str,

    pub loading: &'static str,
    pub ok: &'static str,
    pub save: &'static str,
    pub cancel: &'static str,
    pub close: &'static str,
    pub delete: &'static str,
    pub edit: &'static str,
    pub add: &'static str,
    pub dismiss: &'static str,

    pub add_plant: &'static str,
    pub empty_title: &'static str,
    pub empty_hint: &'static str,
    pub my_plants: &'static str,
    pub greeting_morning: &'static str,
    pub greeting_afternoon: &'static str,
    pub greeting_evening: &'static str,
    pub subtitle_calm: &'static str,
    pub attention_one: &'static str,
    pub attention_other: &'static str,
    pub needs_attention: &'static str,
    pub water: &'static str,

    pub status_ok: &'static str,
    pub status_due: &'static str,
    pub status_overdue: &'static str,
    pub due_today: &'static str,
    pub due_in_one: &'static str,
    pub due_in_other: &'static str,
    pub overdue_one: &'static str,
    pub overdue_other: &'static str,

    pub open_photo: &'static str,
    pub add_photo: &'static str,
    pub remove_photo: &'static str,
    pub water_now: &'static str,
    pub add_note: &'static str,
    pub note_placeholder: &'static str,
    pub watering_heading: &'static str,
    pub last_watered: &'static str,
    pub next_due: &'static str,
    pub interval_one: &'static str,
    pub interval_other: &'static str,
    pub care_history: &'static str,
    pub no_care_yet: &'static str,
    pub delete_plant_title: &'static str,
    pub delete_plant_message: &'static str,

    pub light_low: &'static str,
    pub light_indirect: &'static str,
    pub light_bright: &'static str,

    pub event_watered: &'static str,
    pub event_fertilized: &'static str,
    pub event_repotted: &'static str,
    pub event_pruned: &'static str,
    pub event_custom: &'static str,

    pub form_title_new: &'static str,
    pub form_title_edit: &'static str,
    pub field_name: &'static str,
    pub field_species: &'static str,
    pub field_icon: &'static str,
    pub field_location: &'static str,
    pub field_light: &'static str,
    pub field_notes: &'static str,
    pub name_required: &'static str,

    pub chip_none: &'static str,
    pub chip_new: &'static str,
    pub location_name_placeholder: &'static str,

    pub preset_thirsty: &'static str,
    pub preset_weekly: &'static str,
    pub preset_biweekly: &'static str,
    pub preset_monthly: &'static str,

    pub care_log_title: &'static str,
    pub load_more: &'static str,
    pub filter_all: &'static str,

    pub settings_title: &'static str,
    pub appearance: &'static str,
    pub theme_label: &'static str,
    pub theme_light: &'static str,
    pub theme_dark: &'static str,
    pub theme_system: &'static str,
    pub language: &'static str,
    pub locations_heading: &'static str,
    pub rename: &'static str,
    pub delete_location_title: &'static str,
    pub delete_location_message: &'static str,
    pub about: &'static str,
    pub version: &'static str,
    pub repository: &'static str,
    pub license: &'static str,
    pub stats_plants_one: &'static str,
    pub stats_plants_other: &'static str,
    pub stats_events_one: &'static str,
    pub stats_events_other: &'static str,
    pub sensors: &'static str,
    pub mqtt_connected: &'static str,
    pub mqtt_disconnected: &'static str,
    pub mqtt_disabled: &'static str,
    pub mqtt_broker: &'static str,
    pub mqtt_topic_prefix: &'static str,
    pub repair: &'static str,
    pub repair_summary: &'static str,
    pub data_heading: &'static str,
    pub import_backup: &'static str,
    pub export_backup: &'static str,
    pub import_summary: &'static str,
}

/// Pick the `n == 1` form and substitute `{n}`.
pub fn plural(one: &str, other: &str, n: i64) -> String {
    let form = if n == 1 { one } else { other };
    form.replace("{n}", &n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_picks_singular_for_one() {
        assert_eq!(plural("in {n} day", "in {n} days", 1), "in 1 day");
    }

    #[test]
    fn plural_picks_other_form_elsewhere() {
        assert_eq!(plural("in {n} day", "in {n} days", 3), "in 3 days");
        assert_eq!(plural("{n} plant", "{n} plants", 0), "0 plants");
    }

    #[test]
    fn plural_substitutes_every_placeholder() {
        assert_eq!(plural("{n} of {n}", "{n} of {n}", 2), "2 of 2");
    }

    #[test]
    fn dictionaries_are_distinct() {
        assert_ne!(EN.status_overdue, DE.status_overdue);
        assert_ne!(EN.empty_hint, ES.empty_hint);
        assert_ne!(DE.water_now, ES.water_now);
    }
}

use super::Translations;

pub const EN: Translations = Translations {
    app_name: "flowl",
    nav_plants: "Plants",
    nav_care_log: "Care log",
    nav_settings: "Settings",

    loading: "Loading…",
    ok: "OK",
    save: "Save",
    cancel: "Cancel",
    close: "Close",
    delete: "Delete",
    edit: "Edit",
    add: "Add",
    dismiss: "Dismiss",

    add_plant: "Add Plant",
    empty_title: "No plants yet",
    empty_hint: "Add your first plant to get started.",
    my_plants: "My Plants",
    greeting_morning: "Good morning",
    greeting_afternoon: "Good afternoon",
    greeting_evening: "Good evening",
    subtitle_calm: "Your plants are doing great.",
    attention_one: "One plant is thirsty right now.",
    attention_other: "{n} plants are waiting for water.",
    needs_attention: "Needs Attention",
    water: "Water",

    status_ok: "Ok",
    status_due: "Due",
    status_overdue: "Overdue",
    due_today: "today",
    due_in_one: "in {n} day",
    due_in_other: "in {n} days",
    overdue_one: "{n} day ago",
    overdue_other: "{n} days ago",

    open_photo: "Open photo",
    add_photo: "Add photo",
    remove_photo: "Remove photo",
    water_now: "Water now",
    add_note: "Add note",
    note_placeholder: "What happened?",
    watering_heading: "Watering",
    last_watered: "Last watered",
    next_due: "Next due",
    interval_one: "Every {n} day",
    interval_other: "Every {n} days",
    care_history: "Care history",
    no_care_yet: "No care recorded yet.",
    delete_plant_title: "Delete plant",
    delete_plant_message: "Delete this plant? Its photo and care history go with it.",

    light_low: "Low light",
    light_indirect: "Indirect light",
    light_bright: "Bright light",

    event_watered: "Watered",
    event_fertilized: "Fertilized",
    event_repotted: "Repotted",
    event_pruned: "Pruned",
    event_custom: "Note",

    form_title_new: "Add plant",
    form_title_edit: "Edit plant",
    field_name: "Name",
    field_species: "Species",
    field_icon: "Icon",
    field_location: "Location",
    field_light: "Light",
    field_notes: "Notes",
    name_required: "A name is required.",

    chip_none: "None",
    chip_new: "+ New",
    location_name_placeholder: "Location name",

    preset_thirsty: "Thirsty",
    preset_weekly: "Weekly",
    preset_biweekly: "Biweekly",
    preset_monthly: "Monthly",

    care_log_title: "Care log",
    load_more: "Load more",
    filter_all: "All",

    settings_title: "Settings",
    appearance: "Appearance",
    theme_label: "Theme",
    theme_light: "Light",
    theme_dark: "Dark",
    theme_system: "System",
    language: "Language",
    locations_heading: "Locations",
    rename: "Rename",
    delete_location_title: "Delete location",
    delete_location_message: "Delete this location? Plants in it keep their other details.",
    about: "About",
    version: "Version",
    repository: "Repository",
    license: "License",
    stats_plants_one: "{n} plant",
    stats_plants_other: "{n} plants",
    stats_events_one: "{n} care event",
    stats_events_other: "{n} care events",
    sensors: "Sensors",
    mqtt_connected: "Connected",
    mqtt_disconnected: "Disconnected",
    mqtt_disabled: "Disabled",
    mqtt_broker: "Broker",
    mqtt_topic_prefix: "Topic prefix",
    repair: "Repair",
    repair_summary: "Cleared {cleared} retained topics, published {published} states.",
    data_heading: "Data",
    import_backup: "Import backup",
    export_backup: "Export backup",
    import_summary: "Imported {locations} locations, {plants} plants, {events} care events, {photos} photos.",
};

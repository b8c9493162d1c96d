use super::Translations;

pub const DE: Translations = Translations {
    app_name: "flowl",
    nav_plants: "Pflanzen",
    nav_care_log: "Pflegeprotokoll",
    nav_settings: "Einstellungen",

    loading: "Lädt…",
    ok: "OK",
    save: "Speichern",
    cancel: "Abbrechen",
    close: "Schließen",
    delete: "Löschen",
    edit: "Bearbeiten",
    add: "Hinzufügen",
    dismiss: "Ausblenden",

    add_plant: "Pflanze hinzufügen",
    empty_title: "Noch keine Pflanzen",
    empty_hint: "Füge deine erste Pflanze hinzu, um loszulegen.",
    my_plants: "Meine Pflanzen",
    greeting_morning: "Guten Morgen",
    greeting_afternoon: "Guten Tag",
    greeting_evening: "Guten Abend",
    subtitle_calm: "Deinen Pflanzen geht es gut.",
    attention_one: "Eine Pflanze ist gerade durstig.",
    attention_other: "{n} Pflanzen warten auf Wasser.",
    needs_attention: "Braucht Aufmerksamkeit",
    water: "Gießen",

    status_ok: "Ok",
    status_due: "Fällig",
    status_overdue: "Überfällig",
    due_today: "heute",
    due_in_one: "in {n} Tag",
    due_in_other: "in {n} Tagen",
    overdue_one: "vor {n} Tag",
    overdue_other: "vor {n} Tagen",

    open_photo: "Foto öffnen",
    add_photo: "Foto hinzufügen",
    remove_photo: "Foto entfernen",
    water_now: "Jetzt gießen",
    add_note: "Notiz hinzufügen",
    note_placeholder: "Was ist passiert?",
    watering_heading: "Gießen",
    last_watered: "Zuletzt gegossen",
    next_due: "Nächste Fälligkeit",
    interval_one: "Alle {n} Tag",
    interval_other: "Alle {n} Tage",
    care_history: "Pflegeverlauf",
    no_care_yet: "Noch keine Pflege erfasst.",
    delete_plant_title: "Pflanze löschen",
    delete_plant_message: "Diese Pflanze löschen? Foto und Pflegeverlauf gehen mit.",

    light_low: "Wenig Licht",
    light_indirect: "Indirektes Licht",
    light_bright: "Helles Licht",

    event_watered: "Gegossen",
    event_fertilized: "Gedüngt",
    event_repotted: "Umgetopft",
    event_pruned: "Beschnitten",
    event_custom: "Notiz",

    form_title_new: "Pflanze hinzufügen",
    form_title_edit: "Pflanze bearbeiten",
    field_name: "Name",
    field_species: "Art",
    field_icon: "Symbol",
    field_location: "Standort",
    field_light: "Licht",
    field_notes: "Notizen",
    name_required: "Ein Name ist erforderlich.",

    chip_none: "Keiner",
    chip_new: "+ Neu",
    location_name_placeholder: "Standortname",

    preset_thirsty: "Durstig",
    preset_weekly: "Wöchentlich",
    preset_biweekly: "Zweiwöchentlich",
    preset_monthly: "Monatlich",

    care_log_title: "Pflegeprotokoll",
    load_more: "Mehr laden",
    filter_all: "Alle",

    settings_title: "Einstellungen",
    appearance: "Darstellung",
    theme_label: "Design",
    theme_light: "Hell",
    theme_dark: "Dunkel",
    theme_system: "System",
    language: "Sprache",
    locations_heading: "Standorte",
    rename: "Umbenennen",
    delete_location_title: "Standort löschen",
    delete_location_message: "Diesen Standort löschen? Pflanzen darin behalten ihre übrigen Angaben.",
    about: "Über",
    version: "Version",
    repository: "Repository",
    license: "Lizenz",
    stats_plants_one: "{n} Pflanze",
    stats_plants_other: "{n} Pflanzen",
    stats_events_one: "{n} Pflegeereignis",
    stats_events_other: "{n} Pflegeereignisse",
    sensors: "Sensoren",
    mqtt_connected: "Verbunden",
    mqtt_disconnected: "Getrennt",
    mqtt_disabled: "Deaktiviert",
    mqtt_broker: "Broker",
    mqtt_topic_prefix: "Topic-Präfix",
    repair: "Reparieren",
    repair_summary: "{cleared} zurückgehaltene Topics gelöscht, {published} Zustände veröffentlicht.",
    data_heading: "Daten",
    import_backup: "Backup importieren",
    export_backup: "Backup exportieren",
    import_summary: "{locations} Standorte, {plants} Pflanzen, {events} Pflegeereignisse, {photos} Fotos importiert.",
};

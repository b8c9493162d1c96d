use super::Translations;

pub const ES: Translations = Translations {
    app_name: "flowl",
    nav_plants: "Plantas",
    nav_care_log: "Registro de cuidados",
    nav_settings: "Ajustes",

    loading: "Cargando…",
    ok: "Aceptar",
    save: "Guardar",
    cancel: "Cancelar",
    close: "Cerrar",
    delete: "Eliminar",
    edit: "Editar",
    add: "Añadir",
    dismiss: "Descartar",

    add_plant: "Añadir planta",
    empty_title: "Aún no hay plantas",
    empty_hint: "Añade tu primera planta para empezar.",
    my_plants: "Mis plantas",
    greeting_morning: "Buenos días",
    greeting_afternoon: "Buenas tardes",
    greeting_evening: "Buenas noches",
    subtitle_calm: "Tus plantas están muy bien.",
    attention_one: "Una planta tiene sed ahora mismo.",
    attention_other: "{n} plantas esperan agua.",
    needs_attention: "Necesitan atención",
    water: "Regar",

    status_ok: "Ok",
    status_due: "Pendiente",
    status_overdue: "Atrasado",
    due_today: "hoy",
    due_in_one: "en {n} día",
    due_in_other: "en {n} días",
    overdue_one: "hace {n} día",
    overdue_other: "hace {n} días",

    open_photo: "Abrir foto",
    add_photo: "Añadir foto",
    remove_photo: "Quitar foto",
    water_now: "Regar ahora",
    add_note: "Añadir nota",
    note_placeholder: "¿Qué ha pasado?",
    watering_heading: "Riego",
    last_watered: "Último riego",
    next_due: "Próximo riego",
    interval_one: "Cada {n} día",
    interval_other: "Cada {n} días",
    care_history: "Historial de cuidados",
    no_care_yet: "Sin cuidados registrados todavía.",
    delete_plant_title: "Eliminar planta",
    delete_plant_message: "¿Eliminar esta planta? Su foto y su historial se van con ella.",

    light_low: "Poca luz",
    light_indirect: "Luz indirecta",
    light_bright: "Luz brillante",

    event_watered: "Regada",
    event_fertilized: "Fertilizada",
    event_repotted: "Trasplantada",
    event_pruned: "Podada",
    event_custom: "Nota",

    form_title_new: "Añadir planta",
    form_title_edit: "Editar planta",
    field_name: "Nombre",
    field_species: "Especie",
    field_icon: "Icono",
    field_location: "Ubicación",
    field_light: "Luz",
    field_notes: "Notas",
    name_required: "Se necesita un nombre.",

    chip_none: "Ninguna",
    chip_new: "+ Nueva",
    location_name_placeholder: "Nombre de la ubicación",

    preset_thirsty: "Sedienta",
    preset_weekly: "Semanal",
    preset_biweekly: "Quincenal",
    preset_monthly: "Mensual",

    care_log_title: "Registro de cuidados",
    load_more: "Cargar más",
    filter_all: "Todos",

    settings_title: "Ajustes",
    appearance: "Apariencia",
    theme_label: "Tema",
    theme_light: "Claro",
    theme_dark: "Oscuro",
    theme_system: "Sistema",
    language: "Idioma",
    locations_heading: "Ubicaciones",
    rename: "Renombrar",
    delete_location_title: "Eliminar ubicación",
    delete_location_message: "¿Eliminar esta ubicación? Las plantas conservan el resto de sus datos.",
    about: "Acerca de",
    version: "Versión",
    repository: "Repositorio",
    license: "Licencia",
    stats_plants_one: "{n} planta",
    stats_plants_other: "{n} plantas",
    stats_events_one: "{n} evento de cuidado",
    stats_events_other: "{n} eventos de cuidado",
    sensors: "Sensores",
    mqtt_connected: "Conectado",
    mqtt_disconnected: "Desconectado",
    mqtt_disabled: "Desactivado",
    mqtt_broker: "Broker",
    mqtt_topic_prefix: "Prefijo de topic",
    repair: "Reparar",
    repair_summary: "{cleared} topics retenidos borrados, {published} estados publicados.",
    data_heading: "Datos",
    import_backup: "Importar copia",
    export_backup: "Exportar copia",
    import_summary: "Importadas {locations} ubicaciones, {plants} plantas, {events} eventos, {photos} fotos.",
};

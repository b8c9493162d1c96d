// Date helpers shared by the dashboard, detail view and care log.

use crate::i18n::{plural, Translations};

const MS_PER_DAY: f64 = 86_400_000.0;

/// Whole days between two timestamps, truncating each to its calendar day
/// first so "23:50 today" to "00:10 tomorrow" still counts as one day.
pub fn day_span(from_ms: f64, to_ms: f64) -> i64 {
    let from_day = (from_ms / MS_PER_DAY).floor();
    let to_day = (to_ms / MS_PER_DAY).floor();
    (to_day - from_day) as i64
}

/// Days from now until the given ISO timestamp. Negative means overdue.
pub fn days_from_now(iso: &str) -> Option<i64> {
    let target = js_sys::Date::new(&iso.into()).get_time();
    if target.is_nan() {
        return None;
    }
    Some(day_span(js_sys::Date::now(), target))
}

/// Render an ISO timestamp as a short localized date. Falls back to the
/// date part of the raw string when the value does not parse.
pub fn format_date(iso: &str, locale_tag: &str) -> String {
    let date = js_sys::Date::new(&iso.into());
    if date.get_time().is_nan() {
        return iso.split('T').next().unwrap_or(iso).to_string();
    }
    let opts = js_sys::Object::new();
    date.to_locale_date_string(locale_tag, &opts).into()
}

/// Localized label for a care event kind. Unknown kinds read as notes.
pub fn event_label(event_type: &str, text: &Translations) -> &'static str {
    match event_type {
        "watered" => text.event_watered,
        "fertilized" => text.event_fertilized,
        "repotted" => text.event_repotted,
        "pruned" => text.event_pruned,
        _ => text.event_custom,
    }
}

pub fn event_icon(event_type: &str) -> &'static str {
    match event_type {
        "watered" => "💧",
        "fertilized" => "✨",
        "repotted" => "🪴",
        "pruned" => "✂️",
        _ => "📝",
    }
}

/// Phrase for a due distance: "today", "in 3 days", "2 days ago".
pub fn due_phrase(days: i64, text: &Translations) -> String {
    if days == 0 {
        text.due_today.to_string()
    } else if days > 0 {
        plural(text.due_in_one, text.due_in_other, days)
    } else {
        plural(text.overdue_one, text.overdue_other, -days)
    }
}

/// Replace `{name}` placeholders in a translation template.
pub fn fill(template: &str, pairs: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (key, value) in pairs {
        out = out.replace(&format!("{{{key}}}"), value);
    }
    out
}

/// Path of the bundled Noto SVG for an emoji, keyed by its first codepoint.
pub fn emoji_svg_path(emoji: &str) -> String {
    match emoji.chars().next() {
        Some(c) => format!("/emoji/emoji_u{:x}.svg", c as u32),
        None => "/emoji/emoji_u1fab4.svg".to_string(),
    }
}

pub fn greeting_for_hour(hour: u32, text: &Translations) -> &'static str {
    if hour < 12 {
        text.greeting_morning
    } else if hour < 18 {
        text.greeting_afternoon
    } else {
        text.greeting_evening
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::EN;

    #[test]
    fn day_span_counts_calendar_days() {
        let day = 86_400_000.0;
        assert_eq!(day_span(0.0, 0.0), 0);
        assert_eq!(day_span(0.0, day * 3.0), 3);
        assert_eq!(day_span(day * 5.0, day * 2.0), -3);
    }

    #[test]
    fn day_span_ignores_time_of_day() {
        let day = 86_400_000.0;
        // 23:50 one day to 00:10 the next is still a one day span.
        let late = day - 10.0 * 60_000.0;
        let early = day + 10.0 * 60_000.0;
        assert_eq!(day_span(late, early), 1);
        // Two points inside the same day span zero days.
        assert_eq!(day_span(1_000.0, day - 1_000.0), 0);
    }

    #[test]
    fn event_label_covers_every_kind() {
        assert_eq!(event_label("watered", &EN), "Watered");
        assert_eq!(event_label("pruned", &EN), "Pruned");
        assert_eq!(event_label("custom", &EN), "Note");
        assert_eq!(event_label("somethingelse", &EN), "Note");
    }

    #[test]
    fn due_phrase_today() {
        assert_eq!(due_phrase(0, &EN), "today");
    }

    #[test]
    fn due_phrase_future() {
        assert_eq!(due_phrase(1, &EN), "in 1 day");
        assert_eq!(due_phrase(3, &EN), "in 3 days");
    }

    #[test]
    fn due_phrase_past() {
        assert_eq!(due_phrase(-1, &EN), "1 day ago");
        assert_eq!(due_phrase(-2, &EN), "2 days ago");
    }

    #[test]
    fn fill_replaces_named_placeholders() {
        let out = fill(
            "Cleared {cleared}, published {published}.",
            &[("cleared", "3".to_string()), ("published", "12".to_string())],
        );
        assert_eq!(out, "Cleared 3, published 12.");
    }

    #[test]
    fn emoji_path_uses_first_codepoint() {
        assert_eq!(emoji_svg_path("🌿"), "/emoji/emoji_u1f33f.svg");
        assert_eq!(emoji_svg_path("🪴"), "/emoji/emoji_u1fab4.svg");
        assert_eq!(emoji_svg_path(""), "/emoji/emoji_u1fab4.svg");
    }

    #[test]
    fn greeting_follows_the_clock() {
        assert_eq!(greeting_for_hour(8, &EN), "Good morning");
        assert_eq!(greeting_for_hour(14, &EN), "Good afternoon");
        assert_eq!(greeting_for_hour(21, &EN), "Good evening");
    }
}

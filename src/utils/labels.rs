use crate::types::SelectOption;

/// Returns the display label registered for `key`.
///
/// Scans `options` in order; the first entry whose `value` equals `key`
/// wins. An empty key never matches.
pub fn resolve_label<'a>(key: &str, options: &'a [SelectOption]) -> Option<&'a str> {
    if key.is_empty() {
        return None;
    }
    options
        .iter()
        .find(|option| option.value == key)
        .map(|option| option.label.as_str())
}

/// Like [`resolve_label`], but falls back to the raw key when no label is
/// registered, for rendering contexts where something must be shown.
pub fn label_or_key<'a>(key: &'a str, options: &'a [SelectOption]) -> &'a str {
    resolve_label(key, options).unwrap_or(key)
}

pub fn event_category_options() -> Vec<SelectOption> {
    [
        ("meeting", "会議"),
        ("training", "研修"),
        ("vacation", "休暇"),
        ("trip", "出張"),
        ("other", "その他"),
    ]
    .into_iter()
    .map(|(value, label)| SelectOption {
        value: value.to_string(),
        label: label.to_string(),
    })
    .collect()
}

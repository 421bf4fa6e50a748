// src/normalize.rs
//! Text normalization for harvested fields.

/// Normalize harvested text: decode HTML entities, strip markup tags,
/// collapse escaped-newline sequences and whitespace runs into single
/// spaces, trim. Empty input yields an empty string; never fails.
pub fn normalize_text(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }

    // 1) HTML entity decode
    let mut out = html_escape::decode_html_entities(s).to_string();

    // 2) Strip markup tags
    static RE_TAGS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_tags = RE_TAGS.get_or_init(|| regex::Regex::new(r"(?is)</?[^>]*>").unwrap());
    out = re_tags.replace_all(&out, "").to_string();

    // 3) Escaped newline/tab sequences arriving as literal text
    out = out.replace("\\n", " ").replace("\\r", " ").replace("\\t", " ");

    // 4) Collapse whitespace
    static RE_WS: once_cell::sync::OnceCell<regex::Regex> = once_cell::sync::OnceCell::new();
    let re_ws = RE_WS.get_or_init(|| regex::Regex::new(r"\s+").unwrap());
    out = re_ws.replace_all(&out, " ").to_string();

    out.trim().to_string()
}

/// Optional-field variant: absent input yields an empty string.
pub fn normalize_opt(s: Option<&str>) -> String {
    s.map(normalize_text).unwrap_or_default()
}

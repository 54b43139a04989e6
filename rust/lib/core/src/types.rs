/// Get the current time as an RFC 3339 string.
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Derive a human-readable record code from a kind prefix and an id.
///
/// Ids are zero-padded to width 3; wider ids print in full:
/// `format_code("SO", 7)` → `"SO-007"`, `format_code("SO", 1024)` → `"SO-1024"`.
pub fn format_code(prefix: &str, id: u32) -> String {
    format!("{prefix}-{id:03}")
}

/// Coerce raw form input to a number.
///
/// Empty or non-numeric input yields 0.0 — form fields never reject a
/// keystroke, they just contribute nothing to the total.
pub fn coerce_f64(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(0.0)
}

/// Coerce raw form input to an unsigned integer, defaulting to 0.
pub fn coerce_u32(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

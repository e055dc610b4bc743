// ==========================================
// Internationalization (i18n) module
// ==========================================
// Uses the rust-i18n crate
// Supports English (default) and Hindi
// ==========================================
// Note: the rust_i18n::i18n! macro is initialized in lib.rs
// ==========================================

/// Get the current locale
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// Set the locale
///
/// # Arguments
/// - locale: locale code ("en" or "hi")
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// Translate a message (no arguments)
///
/// # Examples
/// ```no_run
/// use jharkhand_trip_planner::i18n::t;
/// let msg = t("common.success");
/// ```
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// Translate a message with arguments
///
/// # Examples
/// ```no_run
/// use jharkhand_trip_planner::i18n::t_with_args;
/// let msg = t_with_args("planner.already_in_day", &[("name", "Hundru Falls"), ("day", "Day 1")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the content hash for main.css.
///
/// The hash is computed at build time from the CSS file content.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Returns the icon glyph for an icon name used in content and templates.
///
/// Unknown names render as a bullet.
///
/// Usage in templates: `{{ "truck"|icon }}`
#[askama::filter_fn]
pub fn icon(name: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(glyph(&name.to_string()))
}

fn glyph(name: &str) -> &'static str {
    match name {
        "wrench" => "🔧",
        "search" => "🔍",
        "shield" => "🛡",
        "truck" => "🚚",
        "package" => "📦",
        "credit-card" => "💳",
        "wallet" => "👛",
        "headphones" => "🎧",
        "cart" => "🛒",
        "trash" => "🗑",
        "phone" => "📞",
        "mail" => "✉",
        "map-pin" => "📍",
        "filter" => "⚙",
        _ => "•",
    }
}

// web_app/model/display.rs - Presentation helpers
//
// Pure functions shared by the components: expiry date formatting and
// navigation link styling.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use std::fmt::Display;

/// zh-CN style `YYYY/MM/DD HH:MM`
pub const EXPIRE_DISPLAY_FORMAT: &str = "%Y/%m/%d %H:%M";

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

pub const NAV_LINK_ACTIVE: &str = "px-3 py-2 rounded-md text-sm font-medium bg-gray-200 text-gray-900";
pub const NAV_LINK_INACTIVE: &str =
    "px-3 py-2 rounded-md text-sm font-medium text-gray-700 hover:bg-gray-200 hover:text-gray-900";

/// Format an expiry timestamp in the viewer's local time zone.
pub fn format_expire_date(raw: &str) -> String {
    format_expire_date_in(raw, &Local)
}

/// Format an expiry timestamp for display in `tz`.
///
/// Zoned timestamps (RFC 3339) are converted to `tz`. Naive timestamps and
/// bare dates are taken as already being wall-clock time. Anything else is
/// returned verbatim.
pub fn format_expire_date_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let trimmed = raw.trim();

    if let Ok(zoned) = DateTime::parse_from_rfc3339(trimmed) {
        return zoned
            .with_timezone(tz)
            .format(EXPIRE_DISPLAY_FORMAT)
            .to_string();
    }

    let naive = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        });

    match naive {
        Some(wall_clock) => wall_clock.format(EXPIRE_DISPLAY_FORMAT).to_string(),
        None => raw.to_string(),
    }
}

/// CSS class for a navbar link, highlighted when it points at the current path
pub fn nav_link_class(current_path: &str, href: &str) -> &'static str {
    if current_path == href {
        NAV_LINK_ACTIVE
    } else {
        NAV_LINK_INACTIVE
    }
}

//! Browser wall clock as chrono values.

use chrono::{NaiveDate, NaiveDateTime};
use js_sys::Date;

/// Local time as reported by the browser.
pub(crate) fn now_local() -> NaiveDateTime {
    let date = Date::new_0();
    NaiveDate::from_ymd_opt(
        i32::try_from(date.get_full_year()).unwrap_or(1970),
        date.get_month() + 1,
        date.get_date(),
    )
    .and_then(|day| day.and_hms_opt(date.get_hours(), date.get_minutes(), date.get_seconds()))
    .unwrap_or_default()
}

/// Milliseconds since the Unix epoch, used to name exported files.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn now_ms() -> i64 {
    Date::now() as i64
}

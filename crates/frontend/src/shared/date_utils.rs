//! Utilities for date formatting
//!
//! Report dates are shown the way the user's browser formats dates.

use chrono::NaiveDate;

/// Today's date in the browser locale (e.g. "10/17/2026" for en-US).
pub fn today_display() -> String {
    let locale_date = js_sys::Date::new_0()
        .to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED);
    let locale_date: String = locale_date.into();
    if locale_date.trim().is_empty() {
        fallback_date(chrono::Local::now().date_naive())
    } else {
        locale_date
    }
}

/// M/D/YYYY, used when the locale date is unavailable
pub fn fallback_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_date() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(fallback_date(date), "3/5/2026");
        let date = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        assert_eq!(fallback_date(date), "12/31/2026");
    }
}

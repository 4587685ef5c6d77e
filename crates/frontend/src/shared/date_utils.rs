/// Utilities for date formatting
///
/// The browser clock is read through `js_sys::Date`; formatting is pure.

/// Format ISO date string to DD/MM/YYYY format
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}/{}/{}", day, month, year);
        }
    }
    date_str.to_string()
}

/// `YYYY-MM-DD`, the value format of `<input type="date">`
pub fn iso_date(year: i32, month: u32, day: u32) -> String {
    format!("{:04}-{:02}-{:02}", year, month, day)
}

/// Today in local time, as `YYYY-MM-DD`
pub fn today_iso() -> String {
    let now = js_sys::Date::new_0();
    iso_date(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
}

pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26Z"), "15/03/2024");
        assert_eq!(format_date("sin fecha"), "sin fecha");
    }

    #[test]
    fn test_iso_date_pads() {
        assert_eq!(iso_date(2025, 3, 7), "2025-03-07");
        assert_eq!(iso_date(2025, 12, 31), "2025-12-31");
    }
}

//! Utility functions for UI components

use chrono::NaiveDate;

/// Format a release date as "Mar 3, 1986"
pub fn format_release_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_release_date() {
        let date = NaiveDate::from_ymd_opt(1986, 3, 3).unwrap();
        assert_eq!(format_release_date(date), "Mar 3, 1986");
    }
}

//! ja-JP display formatting for dates and yen amounts.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

pub const YEN_SIGN: char = '¥';

/// Group an integer with `,` every three digits, e.g. `-1234567` → `-1,234,567`.
pub fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if amount < 0 {
        grouped.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Whole-yen amount with the currency sign prefixed, e.g. `¥35,000`.
pub fn format_yen(amount: i64) -> String {
    format!("{}{}", YEN_SIGN, group_thousands(amount))
}

/// `2024年06月01日`
pub fn format_date_ja(date: NaiveDate) -> String {
    date.format("%Y年%m月%d日").to_string()
}

pub fn format_datetime_ja(date: NaiveDateTime) -> String {
    format_date_ja(date.date())
}

/// Calendar caption, e.g. `2024年6月`
pub fn format_month_ja(year: i32, month: u32) -> String {
    format!("{}年{}月", year, month)
}

/// Weekday captions starting from Sunday
pub const WEEKDAYS_JA: [&str; 7] = ["日", "月", "火", "水", "木", "金", "土"];

pub fn weekday_ja(date: NaiveDate) -> &'static str {
    WEEKDAYS_JA[date.weekday().num_days_from_sunday() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(15000), "15,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
        assert_eq!(group_thousands(-60000), "-60,000");
        assert_eq!(group_thousands(-999), "-999");
        assert_eq!(group_thousands(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_format_yen() {
        assert_eq!(format_yen(30000), "¥30,000");
        assert_eq!(format_yen(0), "¥0");
        assert_eq!(format_yen(-55000), "¥-55,000");
    }

    #[test]
    fn test_format_dates() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(format_date_ja(date), "2024年06月01日");
        assert_eq!(
            format_datetime_ja(date.and_hms_opt(23, 59, 0).unwrap()),
            "2024年06月01日"
        );
        assert_eq!(format_month_ja(2024, 6), "2024年6月");
        assert_eq!(weekday_ja(date), "土");
    }
}

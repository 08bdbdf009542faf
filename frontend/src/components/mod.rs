pub mod date_range_picker;
pub mod price_summary;
pub mod property_detail;
pub mod range_calendar;

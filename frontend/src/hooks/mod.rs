pub mod use_date_range;

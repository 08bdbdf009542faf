use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod booking;
pub mod date_range;
pub mod format;
pub mod pricing;
pub mod reservation;

pub use booking::{BookingWidget, SummaryBlock, SummaryLine, TriggerLabel};
pub use date_range::{DateRange, RangeSelection};
pub use pricing::{nights_between, QuoteError, ReversedRangePolicy, StayQuote};
pub use reservation::{ReservationDraft, ReservationStatus};

/// A bookable property as shown on the detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Display title
    pub title: String,
    /// Price per night in whole yen
    pub price: i64,
    /// Flat cleaning fee in whole yen, charged once per stay
    pub cleaning_fee: i64,
}

impl Default for Property {
    fn default() -> Self {
        Self {
            title: "海辺の素敵なコテージ".to_string(),
            price: 15000,
            cleaning_fee: 5000,
        }
    }
}

impl Property {
    pub fn new(title: impl Into<String>, price: i64, cleaning_fee: i64) -> Self {
        Self {
            title: title.into(),
            price,
            cleaning_fee,
        }
    }

    /// Check a record coming from configuration before it reaches the page.
    /// Pricing itself never calls this.
    pub fn validate(&self) -> Result<(), PropertyError> {
        if self.title.trim().is_empty() {
            return Err(PropertyError::EmptyTitle);
        }
        if self.price < 0 {
            return Err(PropertyError::NegativePrice(self.price));
        }
        if self.cleaning_fee < 0 {
            return Err(PropertyError::NegativeCleaningFee(self.cleaning_fee));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    #[error("Property title must not be empty")]
    EmptyTitle,
    #[error("Nightly price must not be negative (got {0})")]
    NegativePrice(i64),
    #[error("Cleaning fee must not be negative (got {0})")]
    NegativeCleaningFee(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_property() {
        let property = Property::default();
        assert_eq!(property.title, "海辺の素敵なコテージ");
        assert_eq!(property.price, 15000);
        assert_eq!(property.cleaning_fee, 5000);
        assert!(property.validate().is_ok());
    }

    #[test]
    fn test_validate_property() {
        assert_eq!(
            Property::new("  ", 100, 0).validate(),
            Err(PropertyError::EmptyTitle)
        );
        assert_eq!(
            Property::new("Cabin", -1, 0).validate(),
            Err(PropertyError::NegativePrice(-1))
        );
        assert_eq!(
            Property::new("Cabin", 100, -5).validate(),
            Err(PropertyError::NegativeCleaningFee(-5))
        );

        // Free stays are allowed
        assert!(Property::new("Cabin", 0, 0).validate().is_ok());
    }

    #[test]
    fn test_property_deserialize() {
        let property: Property =
            serde_json::from_str(r#"{"title":"山の家","price":8000,"cleaning_fee":3000}"#).unwrap();
        assert_eq!(property, Property::new("山の家", 8000, 3000));
    }
}

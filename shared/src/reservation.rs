use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::StayQuote;

/// Lifecycle of a reservation once a booking flow exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    #[default]
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

/// Stay details ready to hand to a booking flow. Built from the dates a quote
/// actually priced, so check-in never lies after check-out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDraft {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub nights: i64,
    pub total_price: i64,
    pub status: ReservationStatus,
}

impl ReservationDraft {
    /// `None` for a quote with negative nights, which only an unguarded
    /// reversed range produces.
    pub fn from_quote(quote: &StayQuote) -> Option<Self> {
        if quote.nights < 0 {
            return None;
        }

        Some(Self {
            check_in: quote.check_in.date(),
            check_out: quote.check_out.date(),
            nights: quote.nights,
            total_price: quote.total,
            status: ReservationStatus::Pending,
        })
    }
}

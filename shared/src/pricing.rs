use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::Property;

pub const MILLIS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// What to do when check-out lies before check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReversedRangePolicy {
    /// Price it anyway; nights and totals come out negative
    Allow,
    /// Refuse to quote
    #[default]
    Reject,
    /// Swap the ends before pricing
    Normalize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("Check-out {to} is before check-in {from}")]
    ReversedRange {
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
    #[error("Stay price does not fit in a yen amount")]
    Overflow,
}

/// Price breakdown for one stay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StayQuote {
    /// Check-in that was priced, after the reversed-range policy applied
    pub check_in: NaiveDateTime,
    pub check_out: NaiveDateTime,
    pub nightly_rate: i64,
    pub nights: i64,
    /// nightly_rate × nights
    pub subtotal: i64,
    pub cleaning_fee: i64,
    /// subtotal + cleaning_fee
    pub total: i64,
}

/// Billable nights between two instants: the millisecond difference divided
/// by one day, rounded towards positive infinity. Any partial day counts as
/// a full night; a reversed pair yields a negative count.
pub fn nights_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    let millis = (to - from).num_milliseconds();
    let whole = millis / MILLIS_PER_DAY;
    // Division truncates towards zero, which is already the ceiling for negatives
    if millis % MILLIS_PER_DAY > 0 {
        whole + 1
    } else {
        whole
    }
}

impl Property {
    /// Price a stay from `from` to `to`.
    pub fn quote(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
        policy: ReversedRangePolicy,
    ) -> Result<StayQuote, QuoteError> {
        let (from, to) = match policy {
            _ if to >= from => (from, to),
            ReversedRangePolicy::Allow => (from, to),
            ReversedRangePolicy::Reject => return Err(QuoteError::ReversedRange { from, to }),
            ReversedRangePolicy::Normalize => (to, from),
        };

        let nights = nights_between(from, to);
        let subtotal = self.price.checked_mul(nights).ok_or(QuoteError::Overflow)?;
        let total = subtotal
            .checked_add(self.cleaning_fee)
            .ok_or(QuoteError::Overflow)?;

        Ok(StayQuote {
            check_in: from,
            check_out: to,
            nightly_rate: self.price,
            nights,
            subtotal,
            cleaning_fee: self.cleaning_fee,
            total,
        })
    }
}

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Stay dates selected on the range calendar.
///
/// The end date can only exist together with a start date, so the three
/// rendering branches of the page are exactly the three variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateRange {
    /// Nothing picked yet
    #[default]
    Empty,
    /// Check-in picked, check-out still open
    StartOnly(NaiveDateTime),
    /// Both ends picked. `to` is not guaranteed to be after `from`.
    Complete {
        from: NaiveDateTime,
        to: NaiveDateTime,
    },
}

/// Raw value emitted by a range calendar, where either end may be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RangeSelection {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
}

impl From<Option<RangeSelection>> for DateRange {
    fn from(selection: Option<RangeSelection>) -> Self {
        match selection {
            None => DateRange::Empty,
            Some(RangeSelection { from: None, .. }) => DateRange::Empty,
            Some(RangeSelection { from: Some(from), to: None }) => DateRange::StartOnly(from),
            Some(RangeSelection { from: Some(from), to: Some(to) }) => DateRange::Complete { from, to },
        }
    }
}

impl From<DateRange> for Option<RangeSelection> {
    fn from(range: DateRange) -> Self {
        match range {
            DateRange::Empty => None,
            DateRange::StartOnly(from) => Some(RangeSelection { from: Some(from), to: None }),
            DateRange::Complete { from, to } => Some(RangeSelection { from: Some(from), to: Some(to) }),
        }
    }
}

/// Midnight at the start of `date`, which is what a calendar click yields.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

impl DateRange {
    pub fn start_only(from: NaiveDate) -> Self {
        DateRange::StartOnly(start_of_day(from))
    }

    pub fn complete(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange::Complete {
            from: start_of_day(from),
            to: start_of_day(to),
        }
    }

    pub fn from_date(&self) -> Option<NaiveDateTime> {
        match self {
            DateRange::Empty => None,
            DateRange::StartOnly(from) | DateRange::Complete { from, .. } => Some(*from),
        }
    }

    pub fn to_date(&self) -> Option<NaiveDateTime> {
        match self {
            DateRange::Complete { to, .. } => Some(*to),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, DateRange::Complete { .. })
    }

    /// Whether `day` lies inside the range, ends included. Used for cell
    /// highlighting, so reversed ranges are treated by their span.
    pub fn contains_day(&self, day: NaiveDate) -> bool {
        match self {
            DateRange::Empty => false,
            DateRange::StartOnly(from) => from.date() == day,
            DateRange::Complete { from, to } => {
                let (lo, hi) = if from <= to {
                    (from.date(), to.date())
                } else {
                    (to.date(), from.date())
                };
                lo <= day && day <= hi
            }
        }
    }

    /// Fold one clicked calendar day into the range.
    ///
    /// Clicking a selected end again deselects it; clicking outside the
    /// current span moves the nearer end. A range built only through this
    /// method is never reversed.
    pub fn pick_day(self, day: NaiveDateTime) -> DateRange {
        let same_day = |a: NaiveDateTime, b: NaiveDateTime| a.date() == b.date();

        match self {
            DateRange::Empty => DateRange::StartOnly(day),
            DateRange::StartOnly(from) => {
                if day.date() < from.date() {
                    DateRange::Complete { from: day, to: from }
                } else {
                    DateRange::Complete { from, to: day }
                }
            }
            DateRange::Complete { from, to } => {
                if same_day(to, day) && same_day(from, day) {
                    DateRange::Empty
                } else if same_day(to, day) {
                    DateRange::StartOnly(to)
                } else if same_day(from, day) {
                    DateRange::Empty
                } else if from.date() > day.date() {
                    DateRange::Complete { from: day, to }
                } else {
                    DateRange::Complete { from, to: day }
                }
            }
        }
    }
}

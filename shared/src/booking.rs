//! View model behind the property detail page: the selected stay, the
//! trigger button label and the price summary derived from them.

use crate::format::{format_datetime_ja, format_yen};
use crate::pricing::{QuoteError, ReversedRangePolicy, StayQuote};
use crate::{DateRange, Property, ReservationDraft};

pub const PLACEHOLDER_LABEL: &str = "日付を選択";
pub const CLEANING_FEE_LABEL: &str = "清掃料";
pub const TOTAL_LABEL: &str = "合計";
pub const REVERSED_RANGE_NOTICE: &str = "チェックアウト日はチェックイン日以降を選択してください";

/// Text of the button that opens the calendar popover
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerLabel {
    Placeholder,
    Start(String),
    Span { from: String, to: String },
}

impl TriggerLabel {
    pub fn for_range(range: &DateRange) -> Self {
        match range {
            DateRange::Empty => TriggerLabel::Placeholder,
            DateRange::StartOnly(from) => TriggerLabel::Start(format_datetime_ja(*from)),
            DateRange::Complete { from, to } => TriggerLabel::Span {
                from: format_datetime_ja(*from),
                to: format_datetime_ja(*to),
            },
        }
    }

    pub fn text(&self) -> String {
        match self {
            TriggerLabel::Placeholder => PLACEHOLDER_LABEL.to_string(),
            TriggerLabel::Start(from) => from.clone(),
            TriggerLabel::Span { from, to } => format!("{} - {}", from, to),
        }
    }

    /// The placeholder is rendered muted
    pub fn is_placeholder(&self) -> bool {
        matches!(self, TriggerLabel::Placeholder)
    }
}

/// One row of the price summary: label on the left, amount on the right
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryLine {
    pub label: String,
    pub amount: String,
    pub emphasized: bool,
}

/// What the area below the date picker shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryBlock {
    /// No complete range yet; nothing is rendered
    Hidden,
    Quote(StayQuote),
    /// A complete range that could not be priced
    Rejected(QuoteError),
}

impl SummaryBlock {
    pub fn is_visible(&self) -> bool {
        !matches!(self, SummaryBlock::Hidden)
    }

    pub fn quote(&self) -> Option<&StayQuote> {
        match self {
            SummaryBlock::Quote(quote) => Some(quote),
            _ => None,
        }
    }

    /// Rows for a priced stay; empty otherwise.
    pub fn lines(&self) -> Vec<SummaryLine> {
        let Some(quote) = self.quote() else {
            return Vec::new();
        };

        vec![
            SummaryLine {
                label: format!("{} x {}泊", format_yen(quote.nightly_rate), quote.nights),
                amount: format_yen(quote.subtotal),
                emphasized: false,
            },
            SummaryLine {
                label: CLEANING_FEE_LABEL.to_string(),
                amount: format_yen(quote.cleaning_fee),
                emphasized: false,
            },
            SummaryLine {
                label: TOTAL_LABEL.to_string(),
                amount: format_yen(quote.total),
                emphasized: true,
            },
        ]
    }
}

/// The booking widget: one property, one selected range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingWidget {
    property: Property,
    policy: ReversedRangePolicy,
    range: DateRange,
}

impl BookingWidget {
    pub fn new(property: Property, policy: ReversedRangePolicy) -> Self {
        Self {
            property,
            policy,
            range: DateRange::Empty,
        }
    }

    pub fn with_range(mut self, range: DateRange) -> Self {
        self.range = range;
        self
    }

    pub fn property(&self) -> &Property {
        &self.property
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Replace the selection wholesale. No validation happens here.
    pub fn select_range(&mut self, range: DateRange) {
        self.range = range;
    }

    pub fn trigger_label(&self) -> TriggerLabel {
        TriggerLabel::for_range(&self.range)
    }

    pub fn summary(&self) -> SummaryBlock {
        match self.range {
            DateRange::Empty | DateRange::StartOnly(_) => SummaryBlock::Hidden,
            DateRange::Complete { from, to } => match self.property.quote(from, to, self.policy) {
                Ok(quote) => SummaryBlock::Quote(quote),
                Err(e) => SummaryBlock::Rejected(e),
            },
        }
    }

    pub fn reservation_draft(&self) -> Option<ReservationDraft> {
        self.summary().quote().and_then(ReservationDraft::from_quote)
    }
}

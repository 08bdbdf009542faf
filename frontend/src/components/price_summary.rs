use shared::booking::REVERSED_RANGE_NOTICE;
use shared::{QuoteError, SummaryBlock};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PriceSummaryProps {
    pub summary: SummaryBlock,
}

/// Nightly subtotal, cleaning fee and total for the selected stay
#[function_component(PriceSummary)]
pub fn price_summary(props: &PriceSummaryProps) -> Html {
    match &props.summary {
        SummaryBlock::Hidden => html! {},
        SummaryBlock::Rejected(QuoteError::ReversedRange { .. }) => html! {
            <div class="price-summary-notice" role="alert">{REVERSED_RANGE_NOTICE}</div>
        },
        // Nothing sensible to show for an amount that does not fit
        SummaryBlock::Rejected(QuoteError::Overflow) => html! {},
        summary @ SummaryBlock::Quote(_) => html! {
            <div class="price-summary">
                {for summary.lines().into_iter().map(|line| html! {
                    <div class={classes!("summary-line", line.emphasized.then(|| "summary-total"))}>
                        <span>{line.label}</span>
                        <span>{line.amount}</span>
                    </div>
                })}
            </div>
        },
    }
}

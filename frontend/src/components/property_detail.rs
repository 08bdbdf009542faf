use shared::{BookingWidget, DateRange, Property, RangeSelection, ReversedRangePolicy, SummaryBlock};
use yew::prelude::*;

use super::date_range_picker::DateRangePicker;
use super::price_summary::PriceSummary;
use crate::hooks::use_date_range::use_date_range;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct PropertyDetailProps {
    /// Property to display, supplied by the caller
    pub property: Property,
    #[prop_or_default]
    pub reversed_range: ReversedRangePolicy,
    /// Selection to start from; empty unless restoring a previous choice
    #[prop_or_default]
    pub initial_range: DateRange,
}

#[function_component(PropertyDetail)]
pub fn property_detail(props: &PropertyDetailProps) -> Html {
    let date_range = use_date_range(props.initial_range);

    let widget = BookingWidget::new(props.property.clone(), props.reversed_range)
        .with_range(date_range.range);
    let summary = widget.summary();

    // Report what the new selection priced to
    {
        let widget = widget.clone();
        use_effect_with(date_range.range, move |range| {
            if !range.is_complete() {
                return;
            }
            match widget.summary() {
                SummaryBlock::Hidden => {}
                SummaryBlock::Quote(_) => {
                    if let Some(draft) = widget.reservation_draft() {
                        Logger::info_with_component(
                            "PropertyDetail",
                            &format!(
                                "Stay {} -> {}: {} nights, total {}",
                                draft.check_in, draft.check_out, draft.nights, draft.total_price
                            ),
                        );
                    }
                }
                SummaryBlock::Rejected(e) => {
                    Logger::warn_with_component("PropertyDetail", &format!("Cannot price stay: {}", e));
                }
            }
        });
    }

    let on_select = date_range
        .actions
        .select_range
        .reform(|selection: Option<RangeSelection>| DateRange::from(selection));

    html! {
        <div class="property-detail">
            <h1 class="property-title">{widget.property().title.clone()}</h1>

            <DateRangePicker
                range={date_range.range}
                {on_select}
            />

            {if summary.is_visible() {
                html! { <PriceSummary {summary} /> }
            } else { html! {} }}
        </div>
    }
}

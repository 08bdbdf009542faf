use shared::{DateRange, RangeSelection, TriggerLabel};
use wasm_bindgen::JsCast;
use web_sys::{window, Node};
use yew::prelude::*;

use super::range_calendar::RangeCalendar;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct DateRangePickerProps {
    pub range: DateRange,
    /// Callback when the calendar emits a new selection
    pub on_select: Callback<Option<RangeSelection>>,
}

/// Trigger button plus a popover hosting the range calendar
#[function_component(DateRangePicker)]
pub fn date_range_picker(props: &DateRangePickerProps) -> Html {
    let is_open = use_state(|| false);
    let popover_ref = use_node_ref();

    let label = TriggerLabel::for_range(&props.range);

    let toggle_popover = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| {
            let was_open = *is_open;
            is_open.set(!was_open);
            Logger::debug_with_component(
                "DateRangePicker",
                &format!("Popover toggle: {} -> {}", was_open, !was_open),
            );
        })
    };

    // Close when clicking anywhere outside the picker
    {
        let is_open = is_open.clone();
        let popover_ref = popover_ref.clone();
        use_effect_with(*is_open, move |open| {
            let listener = match (*open, window()) {
                (true, Some(window)) => Some(gloo::events::EventListener::new(&window, "click", move |e| {
                    let Some(target) = e.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
                        return;
                    };
                    if let Some(picker) = popover_ref.cast::<Node>() {
                        if !picker.contains(Some(&target)) {
                            is_open.set(false);
                        }
                    }
                })),
                _ => None,
            };

            move || drop(listener)
        });
    }

    html! {
        <div class="date-range-picker" ref={popover_ref}>
            <button
                type="button"
                class={classes!(
                    "date-range-trigger",
                    label.is_placeholder().then(|| "text-muted")
                )}
                onclick={toggle_popover}
                aria-expanded={(*is_open).to_string()}
            >
                <span class="calendar-icon">{"📅"}</span>
                <span class="date-text">{label.text()}</span>
            </button>

            {if *is_open {
                html! {
                    <div class="popover-content">
                        <RangeCalendar
                            selected={props.range}
                            on_select={props.on_select.clone()}
                        />
                    </div>
                }
            } else { html! {} }}
        </div>
    }
}

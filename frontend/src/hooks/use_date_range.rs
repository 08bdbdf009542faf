use shared::DateRange;
use yew::prelude::*;

use crate::services::logging::Logger;

pub struct UseDateRangeResult {
    pub range: DateRange,
    pub actions: UseDateRangeActions,
}

#[derive(Clone, PartialEq)]
pub struct UseDateRangeActions {
    /// Replace the selection wholesale
    pub select_range: Callback<DateRange>,
}

/// Local state holding the page's selected stay
#[hook]
pub fn use_date_range(initial: DateRange) -> UseDateRangeResult {
    let range = use_state(move || initial);

    let select_range = {
        let range = range.clone();
        use_callback((), move |new_range: DateRange, _| {
            Logger::debug_with_component("use_date_range", &format!("Range selected: {:?}", new_range));
            range.set(new_range);
        })
    };

    UseDateRangeResult {
        range: *range,
        actions: UseDateRangeActions { select_range },
    }
}

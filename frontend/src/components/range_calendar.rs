use chrono::{Datelike, NaiveDate};
use shared::date_range::start_of_day;
use shared::format::{format_date_ja, format_month_ja, weekday_ja, WEEKDAYS_JA};
use shared::{DateRange, RangeSelection};
use yew::prelude::*;

use crate::services::date_utils::{first_of_month, month_grid, shift_month, today};

#[derive(Properties, PartialEq)]
pub struct RangeCalendarProps {
    /// Range currently shown as selected
    pub selected: DateRange,
    /// Emits the selection that results from clicking a day, `None` once
    /// everything is deselected
    pub on_select: Callback<Option<RangeSelection>>,
}

#[function_component(RangeCalendar)]
pub fn range_calendar(props: &RangeCalendarProps) -> Html {
    let today = today();

    // Open on the month of the check-in if there is one
    let visible_month = {
        let start = props
            .selected
            .from_date()
            .map(|from| from.date())
            .unwrap_or(today);
        use_state(move || first_of_month(start))
    };
    let (year, month) = (visible_month.year(), visible_month.month());

    let prev_month = {
        let visible_month = visible_month.clone();
        Callback::from(move |_: MouseEvent| {
            let (y, m) = shift_month(visible_month.year(), visible_month.month(), false);
            if let Some(first) = NaiveDate::from_ymd_opt(y, m, 1) {
                visible_month.set(first);
            }
        })
    };

    let next_month = {
        let visible_month = visible_month.clone();
        Callback::from(move |_: MouseEvent| {
            let (y, m) = shift_month(visible_month.year(), visible_month.month(), true);
            if let Some(first) = NaiveDate::from_ymd_opt(y, m, 1) {
                visible_month.set(first);
            }
        })
    };

    let selected = props.selected;
    let (range_start, range_end) = (
        selected.from_date().map(|d| d.date()),
        selected.to_date().map(|d| d.date()),
    );

    html! {
        <div class="range-calendar">
            <div class="calendar-header">
                <button type="button" class="nav-button" aria-label="前の月" onclick={prev_month}>{"‹"}</button>
                <span class="month-year">{format_month_ja(year, month)}</span>
                <button type="button" class="nav-button" aria-label="次の月" onclick={next_month}>{"›"}</button>
            </div>

            <div class="calendar-grid">
                <div class="weekday-header">
                    {for WEEKDAYS_JA.iter().map(|name| html! { <span>{*name}</span> })}
                </div>

                <div class="calendar-days">
                    {for month_grid(year, month).into_iter().map(|cell| {
                        let date = cell.date;
                        let is_start = range_start == Some(date);
                        let is_end = range_end == Some(date);
                        let in_range = selected.contains_day(date);
                        let on_select = props.on_select.clone();

                        html! {
                            <button
                                type="button"
                                class={classes!(
                                    "calendar-day",
                                    (!cell.is_current_month).then(|| "other-month"),
                                    is_start.then(|| "range-start"),
                                    is_end.then(|| "range-end"),
                                    (in_range && !is_start && !is_end).then(|| "range-middle"),
                                    (date == today).then(|| "today")
                                )}
                                aria-selected={in_range.to_string()}
                                aria-label={format!("{}({})", format_date_ja(date), weekday_ja(date))}
                                onclick={Callback::from(move |_: MouseEvent| {
                                    on_select.emit(selected.pick_day(start_of_day(date)).into());
                                })}
                            >
                                {date.day()}
                            </button>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{window, Element, HtmlElement};
    use yew::LocalServerRenderer;

    wasm_bindgen_test_configure!(run_in_browser);

    type Emitted = Rc<RefCell<Vec<Option<RangeSelection>>>>;

    fn june(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn recorder() -> (Callback<Option<RangeSelection>>, Emitted) {
        let emitted: Emitted = Rc::default();
        let callback = {
            let emitted = emitted.clone();
            Callback::from(move |selection: Option<RangeSelection>| {
                emitted.borrow_mut().push(selection)
            })
        };
        (callback, emitted)
    }

    async fn mount(selected: DateRange) -> (Element, Emitted) {
        let (on_select, emitted) = recorder();
        let document = window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        yew::Renderer::<RangeCalendar>::with_root_and_props(
            root.clone(),
            RangeCalendarProps { selected, on_select },
        )
        .render();
        TimeoutFuture::new(10).await;

        (root, emitted)
    }

    async fn click(root: &Element, selector: &str) {
        root.query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .click();
        TimeoutFuture::new(10).await;
    }

    fn day_classes(root: &Element, label: &str) -> String {
        root.query_selector(&format!(r#"button[aria-label="{}"]"#, label))
            .unwrap()
            .unwrap()
            .get_attribute("class")
            .unwrap_or_default()
    }

    fn header(root: &Element) -> String {
        root.query_selector(".month-year")
            .unwrap()
            .unwrap()
            .text_content()
            .unwrap_or_default()
    }

    #[wasm_bindgen_test]
    async fn test_renders_selected_month_with_range_classes() {
        let (on_select, _) = recorder();
        let props = RangeCalendarProps {
            selected: DateRange::complete(june(3), june(5)),
            on_select,
        };
        let html = LocalServerRenderer::<RangeCalendar>::with_props(props)
            .render()
            .await;

        assert!(html.contains("2024年6月"));
        assert!(html.contains("2024年06月03日(月)"));
        assert_eq!(html.matches("range-start").count(), 1);
        assert_eq!(html.matches("range-end").count(), 1);
        // Only the 4th sits strictly between the ends
        assert_eq!(html.matches("range-middle").count(), 1);
        // May 26 to July 6 pad the grid
        assert!(html.contains("other-month"));
    }

    #[wasm_bindgen_test]
    async fn test_cells_carry_range_classes() {
        let (root, _) = mount(DateRange::complete(june(3), june(5))).await;

        assert!(day_classes(&root, "2024年06月03日(月)").contains("range-start"));
        assert!(day_classes(&root, "2024年06月04日(火)").contains("range-middle"));
        assert!(day_classes(&root, "2024年06月05日(水)").contains("range-end"));

        let outside = day_classes(&root, "2024年06月06日(木)");
        assert!(!outside.contains("range-"));
        assert!(day_classes(&root, "2024年05月31日(金)").contains("other-month"));
    }

    #[wasm_bindgen_test]
    async fn test_opens_on_selection_start_month() {
        let (root, _) = mount(DateRange::start_only(june(3))).await;
        assert_eq!(header(&root), "2024年6月");

        click(&root, r#"button[aria-label="次の月"]"#).await;
        assert_eq!(header(&root), "2024年7月");

        click(&root, r#"button[aria-label="前の月"]"#).await;
        click(&root, r#"button[aria-label="前の月"]"#).await;
        assert_eq!(header(&root), "2024年5月");
    }

    #[wasm_bindgen_test]
    async fn test_day_click_emits_picked_range() {
        let (root, emitted) = mount(DateRange::start_only(june(3))).await;
        click(&root, r#"button[aria-label="2024年06月10日(月)"]"#).await;

        assert_eq!(
            *emitted.borrow(),
            vec![Some(RangeSelection {
                from: Some(start_of_day(june(3))),
                to: Some(start_of_day(june(10))),
            })]
        );
    }

    #[wasm_bindgen_test]
    async fn test_clicking_start_again_clears_selection() {
        let (root, emitted) = mount(DateRange::complete(june(3), june(5))).await;
        click(&root, r#"button[aria-label="2024年06月03日(月)"]"#).await;

        assert_eq!(*emitted.borrow(), vec![None]);
    }
}

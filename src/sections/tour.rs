use crate::constants::{NO_SHOWS_NOTICE, SHOW_LIST_SELECTOR, TOUR_SCHEDULE};
use crate::core::tour::{render_show_list, upcoming, ShowDate, TourDate};
use crate::dom;
use web_sys as web;

fn today() -> ShowDate {
    let now = js_sys::Date::new_0();
    ShowDate::new(
        now.get_full_year() as i32,
        now.get_month() as u8 + 1,
        now.get_date() as u8,
    )
}

/// Parse the configured schedule; malformed entries are logged and dropped.
pub fn schedule() -> Vec<TourDate> {
    TOUR_SCHEDULE
        .iter()
        .filter_map(|entry| match TourDate::try_from(entry) {
            Ok(date) => Some(date),
            Err(e) => {
                log::warn!("[tour] skipping {:?}: {}", entry.venue, e);
                None
            }
        })
        .collect()
}

pub fn render(document: &web::Document) {
    let Some(list) = dom::query_html(document, SHOW_LIST_SELECTOR) else {
        return;
    };
    let dates = schedule();
    let shows = upcoming(&dates, today());
    list.set_inner_html(&render_show_list(&shows, &NO_SHOWS_NOTICE));
    log::info!("[tour] {} upcoming of {} shows", shows.len(), dates.len());
}

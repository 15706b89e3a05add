// Host-side tests for tour date parsing, filtering and rendering.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod site {
    pub mod html {
        include!("../src/core/html.rs");
    }
    pub mod tour {
        include!("../src/core/tour.rs");
    }
}

use site::tour::*;

const NOTICE: EmptyNotice = EmptyNotice {
    heading: "Keine Shows",
    body: "Bald mehr <3",
};

fn show(date: &str, venue: &str, sold_out: bool) -> TourDate {
    TourDate {
        date: date.parse().unwrap(),
        venue: venue.to_string(),
        location: "Berlin, DE".to_string(),
        sold_out,
    }
}

#[test]
fn parses_display_dates() {
    assert_eq!("JUL 25, 2025".parse::<ShowDate>(), Ok(ShowDate::new(2025, 7, 25)));
    assert_eq!(" dec 3,2024 ".parse::<ShowDate>(), Ok(ShowDate::new(2024, 12, 3)));
}

#[test]
fn rejects_bad_dates() {
    assert!(matches!("JUL 25 2025".parse::<ShowDate>(), Err(ShowDateError::Format(_))));
    assert!(matches!("JULY 25, 2025".parse::<ShowDate>(), Err(ShowDateError::Month(_))));
    assert_eq!("JUL 32, 2025".parse::<ShowDate>(), Err(ShowDateError::Day(32)));
    assert_eq!("JUL 0, 2025".parse::<ShowDate>(), Err(ShowDateError::Day(0)));
    assert!(matches!("JUL xx, 2025".parse::<ShowDate>(), Err(ShowDateError::Format(_))));
}

#[test]
fn schedule_entries_convert() {
    let entry = TourEntry {
        date: "AUG 02, 2025",
        venue: "Lido",
        location: "Berlin, DE",
        sold_out: true,
    };
    let date = TourDate::try_from(&entry).unwrap();
    assert_eq!(date.date, ShowDate::new(2025, 8, 2));
    assert!(date.sold_out);

    let bad = TourEntry { date: "TBA", ..entry };
    assert!(TourDate::try_from(&bad).is_err());
}

#[test]
fn day_is_checked_against_month_length() {
    assert_eq!("FEB 31, 2026".parse::<ShowDate>(), Err(ShowDateError::Day(31)));
    assert_eq!("FEB 29, 2026".parse::<ShowDate>(), Err(ShowDateError::Day(29)));
    assert_eq!("FEB 29, 2028".parse::<ShowDate>(), Ok(ShowDate::new(2028, 2, 29)));
    assert_eq!("FEB 29, 2100".parse::<ShowDate>(), Err(ShowDateError::Day(29)));
    assert_eq!("FEB 29, 2000".parse::<ShowDate>(), Ok(ShowDate::new(2000, 2, 29)));
    assert_eq!("APR 31, 2026".parse::<ShowDate>(), Err(ShowDateError::Day(31)));
    assert_eq!("DEC 31, 2026".parse::<ShowDate>(), Ok(ShowDate::new(2026, 12, 31)));
}

#[test]
fn displays_with_padded_day() {
    assert_eq!(ShowDate::new(2025, 7, 5).to_string(), "JUL 05, 2025");
}

#[test]
fn dates_order_chronologically() {
    assert!(ShowDate::new(2024, 12, 31) < ShowDate::new(2025, 1, 1));
    assert!(ShowDate::new(2025, 2, 1) > ShowDate::new(2025, 1, 31));
}

#[test]
fn upcoming_keeps_today_and_sorts() {
    let dates = vec![
        show("AUG 02, 2025", "Late", false),
        show("JUN 01, 2025", "Past", false),
        show("JUL 25, 2025", "Today", false),
    ];
    let today = ShowDate::new(2025, 7, 25);
    let venues: Vec<&str> = upcoming(&dates, today)
        .iter()
        .map(|d| d.venue.as_str())
        .collect();
    assert_eq!(venues, ["Today", "Late"]);
}

#[test]
fn empty_schedule_renders_notice() {
    let html = render_show_list(&[], &NOTICE);
    assert_eq!(
        html,
        "<li class=\"no-shows-message\"><div class=\"no-shows-content\"><h3>Keine Shows</h3><p>Bald mehr &lt;3</p></div></li>"
    );
}

#[test]
fn rendered_rows_mark_sold_out_shows() {
    let a = show("JUL 25, 2025", "Club & Bar", false);
    let b = show("AUG 02, 2025", "Arena", true);
    let html = render_show_list(&[&a, &b], &NOTICE);
    assert!(html.starts_with("<li><span class=\"date\">JUL 25, 2025</span>"));
    assert!(html.contains("<span class=\"venue\">Club &amp; Bar</span>"));
    assert!(html.contains("<a href=\"#\" class=\"ticket-btn\">Get Tickets</a>"));
    assert!(html.contains("<a href=\"#\" class=\"ticket-btn sold-out\">Sold Out</a>"));
    assert_eq!(html.matches("<li>").count(), 2);
}

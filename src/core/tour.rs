use super::html::escape;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MONTHS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShowDateError {
    #[error("expected \"MON DD, YYYY\", got {0:?}")]
    Format(String),
    #[error("unknown month {0:?}")]
    Month(String),
    #[error("day {0} out of range")]
    Day(u32),
}

/// Calendar date of a show. Field order gives chronological `Ord`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShowDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl ShowDate {
    pub fn new(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }
}

fn days_in_month(year: i32, month: u8) -> u32 {
    match month {
        2 if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

impl FromStr for ShowDate {
    type Err = ShowDateError;

    /// Parses the display form used on the site, e.g. `"JUL 25, 2025"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let format_err = || ShowDateError::Format(s.to_string());
        let (month_day, year) = s.trim().split_once(',').ok_or_else(format_err)?;
        let (month, day) = month_day.trim().split_once(' ').ok_or_else(format_err)?;
        let month_upper = month.trim().to_ascii_uppercase();
        let month_idx = MONTHS
            .iter()
            .position(|m| *m == month_upper)
            .ok_or_else(|| ShowDateError::Month(month.to_string()))?;
        let month = month_idx as u8 + 1;
        let day: u32 = day.trim().parse().map_err(|_| format_err())?;
        let year: i32 = year.trim().parse().map_err(|_| format_err())?;
        if !(1..=days_in_month(year, month)).contains(&day) {
            return Err(ShowDateError::Day(day));
        }
        Ok(ShowDate::new(year, month, day as u8))
    }
}

impl fmt::Display for ShowDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let month = MONTHS
            .get(self.month.saturating_sub(1) as usize)
            .copied()
            .unwrap_or("???");
        write!(f, "{} {:02}, {}", month, self.day, self.year)
    }
}

/// Static schedule entry as authored in the site config.
#[derive(Clone, Copy, Debug)]
pub struct TourEntry {
    pub date: &'static str,
    pub venue: &'static str,
    pub location: &'static str,
    pub sold_out: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourDate {
    pub date: ShowDate,
    pub venue: String,
    pub location: String,
    pub sold_out: bool,
}

impl TryFrom<&TourEntry> for TourDate {
    type Error = ShowDateError;

    fn try_from(entry: &TourEntry) -> Result<Self, Self::Error> {
        Ok(TourDate {
            date: entry.date.parse()?,
            venue: entry.venue.to_string(),
            location: entry.location.to_string(),
            sold_out: entry.sold_out,
        })
    }
}

/// Shows on or after `today`, earliest first.
pub fn upcoming(dates: &[TourDate], today: ShowDate) -> Vec<&TourDate> {
    let mut shows: Vec<&TourDate> = dates.iter().filter(|d| d.date >= today).collect();
    shows.sort_by_key(|d| d.date);
    shows
}

/// Placeholder shown when no dates are announced.
#[derive(Clone, Copy, Debug)]
pub struct EmptyNotice {
    pub heading: &'static str,
    pub body: &'static str,
}

pub fn render_show_list(shows: &[&TourDate], empty: &EmptyNotice) -> String {
    if shows.is_empty() {
        return format!(
            "<li class=\"no-shows-message\"><div class=\"no-shows-content\"><h3>{}</h3><p>{}</p></div></li>",
            escape(empty.heading),
            escape(empty.body)
        );
    }
    shows
        .iter()
        .map(|show| {
            let (class, label) = if show.sold_out {
                ("ticket-btn sold-out", "Sold Out")
            } else {
                ("ticket-btn", "Get Tickets")
            };
            format!(
                "<li><span class=\"date\">{}</span><span class=\"venue\">{}</span>\
                 <span class=\"location\">{}</span><a href=\"#\" class=\"{}\">{}</a></li>",
                show.date,
                escape(&show.venue),
                escape(&show.location),
                class,
                label
            )
        })
        .collect()
}

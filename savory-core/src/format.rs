//! Display formatting for reservation details.
//!
//! The confirmation screen shows the booked date in long form with an
//! ordinal day ("Monday, December 1st, 2025") and pluralizes the party
//! size. Kept here so every surface renders them identically.

use chrono::{Datelike, NaiveDate};

/// Ordinal suffix for a day of month: 1st, 2nd, 3rd, 4th, ... 11th-13th th.
fn ordinal_suffix(day: u32) -> &'static str {
    match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}

/// Long form with weekday and ordinal day: "Monday, December 1st, 2025".
pub fn long_date(date: NaiveDate) -> String {
    format!("{}, {}", date.format("%A"), medium_date(date))
}

/// Month and ordinal day without the weekday: "December 1st, 2025".
pub fn medium_date(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        day,
        ordinal_suffix(day),
        date.year()
    )
}

/// Pluralized party size: "1 Guest", "4 Guests".
pub fn guests_label(guests: u8) -> String {
    if guests == 1 {
        format!("{guests} Guest")
    } else {
        format!("{guests} Guests")
    }
}

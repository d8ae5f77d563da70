//! Reservation Model
//!
//! `Reservation` is the finished record a wizard traversal produces;
//! `ReservationDraft` is the in-progress form state it is built from. The
//! draft's completeness is a pure function of its fields. The UI disables
//! the submit control instead of reporting validation errors, so `build` on
//! an incomplete draft is a typed backstop, not a user-facing failure.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The eleven bookable half-hour slots, 17:00 through 22:00.
pub const TIME_SLOTS: [&str; 11] = [
    "17:00", "17:30", "18:00", "18:30", "19:00", "19:30", "20:00", "20:30", "21:00", "21:30",
    "22:00",
];

/// Smallest bookable party.
pub const MIN_GUESTS: u8 = 1;
/// Largest bookable party.
pub const MAX_GUESTS: u8 = 8;

/// A confirmed reservation.
///
/// Exactly one is in flight at a time: it is created by the form at
/// submission, held by the flow while the confirmation step is shown, and
/// dropped when the guest starts over. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// The chosen table's id; not re-validated against the catalog.
    pub table_id: String,
    /// Calendar date, clamped to today-or-later at entry time.
    pub date: NaiveDate,
    /// Selected slot, one of [`TIME_SLOTS`], stored verbatim.
    pub time: String,
    /// Party size, 1–8.
    pub guests: u8,
    pub name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("reservation form incomplete: {field} is missing")]
    Incomplete { field: &'static str },
    #[error("guest count '{0}' is not a number")]
    GuestsNotANumber(String),
    #[error("guest count {0} is outside {MIN_GUESTS}-{MAX_GUESTS}")]
    GuestsOutOfRange(u8),
}

/// In-progress form state for one table.
///
/// Select fields are `None` until picked; text fields start empty. The
/// guest count is kept as the select's string value and parsed to an
/// integer only when the reservation is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDraft {
    pub table_id: String,
    pub date: Option<NaiveDate>,
    pub time: Option<String>,
    pub guests: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl ReservationDraft {
    /// Fresh draft for the given table, all fields unset.
    pub fn new(table_id: impl Into<String>) -> Self {
        Self {
            table_id: table_id.into(),
            date: None,
            time: None,
            guests: None,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
        }
    }

    /// True iff all six fields are set/non-empty.
    ///
    /// This is the submit-enablement rule, recomputed from the current
    /// field state on every change.
    pub fn is_complete(&self) -> bool {
        self.date.is_some()
            && self.time.is_some()
            && self.guests.is_some()
            && !self.name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.phone.trim().is_empty()
    }

    /// Construct the reservation, carrying every field value verbatim.
    ///
    /// The guest count is parsed from its selected string representation
    /// and range-checked against [`MIN_GUESTS`]..=[`MAX_GUESTS`]. Fails
    /// with the first missing field on an incomplete draft.
    pub fn build(&self) -> Result<Reservation, DraftError> {
        let date = self.date.ok_or(DraftError::Incomplete { field: "date" })?;
        let time = self
            .time
            .clone()
            .ok_or(DraftError::Incomplete { field: "time" })?;
        let guests_raw = self
            .guests
            .as_deref()
            .ok_or(DraftError::Incomplete { field: "guests" })?;
        if self.name.trim().is_empty() {
            return Err(DraftError::Incomplete { field: "name" });
        }
        if self.email.trim().is_empty() {
            return Err(DraftError::Incomplete { field: "email" });
        }
        if self.phone.trim().is_empty() {
            return Err(DraftError::Incomplete { field: "phone" });
        }

        let guests: u8 = guests_raw
            .parse()
            .map_err(|_| DraftError::GuestsNotANumber(guests_raw.to_string()))?;
        if !(MIN_GUESTS..=MAX_GUESTS).contains(&guests) {
            return Err(DraftError::GuestsOutOfRange(guests));
        }

        Ok(Reservation {
            table_id: self.table_id.clone(),
            date,
            time,
            guests,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ReservationDraft {
        ReservationDraft {
            table_id: "1".into(),
            date: Some(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()),
            time: Some("19:00".into()),
            guests: Some("2".into()),
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "555-0100".into(),
        }
    }

    #[test]
    fn test_time_slots_cover_evening_service() {
        assert_eq!(TIME_SLOTS.len(), 11);
        assert_eq!(TIME_SLOTS.first(), Some(&"17:00"));
        assert_eq!(TIME_SLOTS.last(), Some(&"22:00"));
    }

    #[test]
    fn test_complete_iff_all_six_fields_present() {
        // Quantified over every presence combination of the six fields.
        for mask in 0u32..64 {
            let full = filled_draft();
            let mut draft = ReservationDraft::new("1");
            if mask & 0x01 != 0 {
                draft.date = full.date;
            }
            if mask & 0x02 != 0 {
                draft.time = full.time.clone();
            }
            if mask & 0x04 != 0 {
                draft.guests = full.guests.clone();
            }
            if mask & 0x08 != 0 {
                draft.name = full.name.clone();
            }
            if mask & 0x10 != 0 {
                draft.email = full.email.clone();
            }
            if mask & 0x20 != 0 {
                draft.phone = full.phone.clone();
            }

            let expected = mask == 0x3F;
            assert_eq!(draft.is_complete(), expected, "mask {mask:#08b}");
            assert_eq!(draft.build().is_ok(), expected, "mask {mask:#08b}");
        }
    }

    #[test]
    fn test_whitespace_only_text_counts_as_missing() {
        let mut draft = filled_draft();
        draft.name = "   ".into();
        assert!(!draft.is_complete());
        assert_eq!(
            draft.build().unwrap_err(),
            DraftError::Incomplete { field: "name" }
        );
    }

    #[test]
    fn test_build_carries_fields_verbatim() {
        let reservation = filled_draft().build().unwrap();
        assert_eq!(reservation.table_id, "1");
        assert_eq!(
            reservation.date,
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
        );
        assert_eq!(reservation.time, "19:00");
        assert_eq!(reservation.guests, 2);
        assert_eq!(reservation.name, "Jane Doe");
        assert_eq!(reservation.email, "jane@example.com");
        assert_eq!(reservation.phone, "555-0100");
    }

    #[test]
    fn test_build_reports_first_missing_field() {
        let mut draft = filled_draft();
        draft.time = None;
        assert_eq!(
            draft.build().unwrap_err(),
            DraftError::Incomplete { field: "time" }
        );
    }

    #[test]
    fn test_guest_count_parsed_from_string() {
        let mut draft = filled_draft();
        draft.guests = Some("8".into());
        assert_eq!(draft.build().unwrap().guests, 8);
    }

    #[test]
    fn test_guest_count_out_of_range() {
        let mut draft = filled_draft();
        draft.guests = Some("9".into());
        assert_eq!(draft.build().unwrap_err(), DraftError::GuestsOutOfRange(9));

        draft.guests = Some("0".into());
        assert_eq!(draft.build().unwrap_err(), DraftError::GuestsOutOfRange(0));
    }

    #[test]
    fn test_guest_count_not_a_number() {
        let mut draft = filled_draft();
        draft.guests = Some("two".into());
        assert_eq!(
            draft.build().unwrap_err(),
            DraftError::GuestsNotANumber("two".into())
        );
    }
}

//! Confirmation step: read-only summary of the completed reservation.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use savory_core::{guests_label, long_date, Reservation};

use super::{centered_rect, View};
use crate::theme;

/// House policies shown with every confirmation.
const POLICY_LINES: [&str; 4] = [
    "• Please arrive 10 minutes before your reservation time",
    "• Your table will be held for 15 minutes past the reservation time",
    "• For parties of 6 or more, a 18% gratuity will be added",
    "• To modify or cancel, please call us at (555) 123-4567",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationEvent {
    NewReservation,
}

pub struct ConfirmationView {
    reservation: Reservation,
}

impl ConfirmationView {
    pub fn new(reservation: Reservation) -> Self {
        Self { reservation }
    }
}

impl View for ConfirmationView {
    type Event = ConfirmationEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Option<ConfirmationEvent> {
        match key.code {
            KeyCode::Enter | KeyCode::Char('n') => Some(ConfirmationEvent::NewReservation),
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let card = centered_rect(70, 100, area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),  // Heading
                Constraint::Length(11), // Reservation details
                Constraint::Length(6),  // Policies
                Constraint::Length(3),  // New reservation
            ])
            .split(card);

        let heading = Paragraph::new(vec![
            Line::from(Span::styled("✓ Reservation Confirmed!", theme::success())),
            Line::from(Span::styled(
                "Thank you for choosing Savory Haven. Your table has been reserved.",
                theme::text_muted(),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(heading, chunks[0]);

        let r = &self.reservation;
        let details = Paragraph::new(vec![
            detail_line("Date", long_date(r.date)),
            detail_line("Time", r.time.clone()),
            detail_line("Party Size", guests_label(r.guests)),
            detail_line("Table", format!("Table {}", r.table_id)),
            Line::default(),
            Line::from(Span::styled("Contact Information", theme::heading())),
            detail_line("Name", r.name.clone()),
            detail_line("Email", r.email.clone()),
            detail_line("Phone", r.phone.clone()),
        ])
        .block(
            Block::default()
                .title(" Reservation Details ")
                .borders(Borders::ALL)
                .border_style(theme::border_style(false)),
        );
        frame.render_widget(details, chunks[1]);

        let policies = Paragraph::new(
            POLICY_LINES
                .iter()
                .map(|line| Line::from(Span::styled(*line, theme::text_muted())))
                .collect::<Vec<_>>(),
        )
        .block(
            Block::default()
                .title(" Important Information ")
                .borders(Borders::ALL)
                .border_style(theme::border_style(false)),
        );
        frame.render_widget(policies, chunks[2]);

        let action = Paragraph::new(Line::from(Span::styled(
            "Make Another Reservation",
            theme::submit(true),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_style(true)),
        );
        frame.render_widget(action, chunks[3]);
    }
}

fn detail_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<12}"), theme::heading()),
        Span::raw(value),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use crossterm::event::KeyModifiers;
    use savory_core::ReservationDraft;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn view() -> ConfirmationView {
        let reservation = ReservationDraft {
            table_id: "1".into(),
            date: Some(NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()),
            time: Some("19:00".into()),
            guests: Some("2".into()),
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "555-0100".into(),
        }
        .build()
        .unwrap();
        ConfirmationView::new(reservation)
    }

    #[test]
    fn test_enter_starts_a_new_reservation() {
        assert_eq!(
            view().handle_key(key(KeyCode::Enter)),
            Some(ConfirmationEvent::NewReservation)
        );
        assert_eq!(
            view().handle_key(key(KeyCode::Char('n'))),
            Some(ConfirmationEvent::NewReservation)
        );
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut view = view();
        for code in [
            KeyCode::Esc,
            KeyCode::Tab,
            KeyCode::Left,
            KeyCode::Char('x'),
        ] {
            assert_eq!(view.handle_key(key(code)), None);
        }
    }
}

//! Reservation form step.
//!
//! Collects date, time slot, party size, and contact details for the
//! chosen table. Validation is presence-only and preventive: the confirm
//! control stays dimmed until every field is set, recomputed from the
//! field state on each keystroke, so an incomplete reservation cannot be
//! submitted. Esc backs out unconditionally, discarding the entry.
//!
//! The date stepper clamps at its minimum (today): earlier dates are
//! unreachable rather than rejected with a message.

use chrono::NaiveDate;
use crossterm::event::{Event, KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use savory_core::{
    guests_label, medium_date, Reservation, ReservationDraft, MAX_GUESTS, MIN_GUESTS, TIME_SLOTS,
};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::{centered_rect, View};
use crate::theme;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submitted(Reservation),
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Focus {
    Date,
    Time,
    Guests,
    Name,
    Email,
    Phone,
    Confirm,
}

impl Focus {
    const ORDER: [Focus; 7] = [
        Focus::Date,
        Focus::Time,
        Focus::Guests,
        Focus::Name,
        Focus::Email,
        Focus::Phone,
        Focus::Confirm,
    ];

    fn shifted(self, delta: isize) -> Focus {
        let len = Self::ORDER.len() as isize;
        let pos = Self::ORDER
            .iter()
            .position(|f| *f == self)
            .unwrap_or(0) as isize;
        Self::ORDER[(pos + delta).rem_euclid(len) as usize]
    }

    fn next(self) -> Focus {
        self.shifted(1)
    }

    fn prev(self) -> Focus {
        self.shifted(-1)
    }
}

pub struct FormView {
    table_id: String,
    min_date: NaiveDate,
    focus: Focus,
    date: Option<NaiveDate>,
    time: Option<usize>,
    guests: Option<u8>,
    name: Input,
    email: Input,
    phone: Input,
}

impl FormView {
    /// Empty form for `table_id`; `min_date` is the earliest date the
    /// stepper can reach.
    pub fn new(table_id: impl Into<String>, min_date: NaiveDate) -> Self {
        Self {
            table_id: table_id.into(),
            min_date,
            focus: Focus::Date,
            date: None,
            time: None,
            guests: None,
            name: Input::default(),
            email: Input::default(),
            phone: Input::default(),
        }
    }

    /// Current field contents as a draft.
    pub fn draft(&self) -> ReservationDraft {
        ReservationDraft {
            table_id: self.table_id.clone(),
            date: self.date,
            time: self.time.map(|i| TIME_SLOTS[i].to_string()),
            guests: self.guests.map(|g| g.to_string()),
            name: self.name.value().to_string(),
            email: self.email.value().to_string(),
            phone: self.phone.value().to_string(),
        }
    }

    fn step_date(&mut self, forward: bool) {
        self.date = Some(match self.date {
            None => self.min_date,
            Some(d) if forward => d.succ_opt().unwrap_or(d),
            Some(d) => d.pred_opt().unwrap_or(d).max(self.min_date),
        });
    }

    fn step_time(&mut self, forward: bool) {
        let len = TIME_SLOTS.len();
        self.time = Some(match self.time {
            None if forward => 0,
            None => len - 1,
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
        });
    }

    fn step_guests(&mut self, forward: bool) {
        self.guests = Some(match self.guests {
            None if forward => MIN_GUESTS,
            None => MAX_GUESTS,
            Some(g) if forward && g >= MAX_GUESTS => MIN_GUESTS,
            Some(g) if forward => g + 1,
            Some(g) if g <= MIN_GUESTS => MAX_GUESTS,
            Some(g) => g - 1,
        });
    }

    fn submit(&self) -> Option<FormEvent> {
        let draft = self.draft();
        if !draft.is_complete() {
            tracing::debug!("submit ignored, form incomplete");
            return None;
        }
        match draft.build() {
            Ok(reservation) => Some(FormEvent::Submitted(reservation)),
            Err(e) => {
                tracing::warn!("failed to build reservation: {e}");
                None
            }
        }
    }

    fn focused_input(&mut self) -> Option<&mut Input> {
        match self.focus {
            Focus::Name => Some(&mut self.name),
            Focus::Email => Some(&mut self.email),
            Focus::Phone => Some(&mut self.phone),
            _ => None,
        }
    }
}

impl View for FormView {
    type Event = FormEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Option<FormEvent> {
        match key.code {
            KeyCode::Esc => return Some(FormEvent::Back),
            KeyCode::Tab | KeyCode::Down => {
                self.focus = self.focus.next();
                return None;
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus = self.focus.prev();
                return None;
            }
            KeyCode::Enter => {
                if self.focus == Focus::Confirm {
                    return self.submit();
                }
                self.focus = self.focus.next();
                return None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Date => match key.code {
                KeyCode::Left => self.step_date(false),
                KeyCode::Right => self.step_date(true),
                _ => {}
            },
            Focus::Time => match key.code {
                KeyCode::Left => self.step_time(false),
                KeyCode::Right => self.step_time(true),
                _ => {}
            },
            Focus::Guests => match key.code {
                KeyCode::Left => self.step_guests(false),
                KeyCode::Right => self.step_guests(true),
                _ => {}
            },
            Focus::Name | Focus::Email | Focus::Phone => {
                if let Some(input) = self.focused_input() {
                    input.handle_event(&Event::Key(key));
                }
            }
            Focus::Confirm => {}
        }
        None
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let card = centered_rect(70, 100, area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Heading
                Constraint::Length(3), // Date | Time
                Constraint::Length(3), // Guests
                Constraint::Length(1), // Contact Information
                Constraint::Length(3), // Name
                Constraint::Length(3), // Email
                Constraint::Length(3), // Phone
                Constraint::Length(3), // Confirm
            ])
            .split(card);

        let heading = Paragraph::new(vec![
            Line::from(Span::styled("Complete Your Reservation", theme::heading())),
            Line::from(Span::styled(
                format!("Table {} Reservation Details", self.table_id),
                theme::text_muted(),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(heading, chunks[0]);

        let date_time = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        frame.render_widget(
            select_box(
                "Select Date",
                self.date.map(medium_date),
                "Pick a date",
                self.focus == Focus::Date,
            ),
            date_time[0],
        );
        frame.render_widget(
            select_box(
                "Select Time",
                self.time.map(|i| TIME_SLOTS[i].to_string()),
                "Choose time slot",
                self.focus == Focus::Time,
            ),
            date_time[1],
        );
        frame.render_widget(
            select_box(
                "Number of Guests",
                self.guests.map(guests_label),
                "Select number of guests",
                self.focus == Focus::Guests,
            ),
            chunks[2],
        );

        frame.render_widget(
            Paragraph::new(Span::styled("Contact Information", theme::heading())),
            chunks[3],
        );
        render_input(
            frame,
            chunks[4],
            "Full Name",
            "Enter your full name",
            &self.name,
            self.focus == Focus::Name,
        );
        render_input(
            frame,
            chunks[5],
            "Email Address",
            "Enter your email address",
            &self.email,
            self.focus == Focus::Email,
        );
        render_input(
            frame,
            chunks[6],
            "Phone Number",
            "Enter your phone number",
            &self.phone,
            self.focus == Focus::Phone,
        );

        let complete = self.draft().is_complete();
        let confirm = Paragraph::new(Line::from(Span::styled(
            "Confirm Reservation",
            theme::submit(complete),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border_style(self.focus == Focus::Confirm)),
        );
        frame.render_widget(confirm, chunks[7]);
    }
}

/// Stepper control: current value between `<` `>` arrows, or the
/// placeholder while unset.
fn select_box(
    title: &'static str,
    value: Option<String>,
    placeholder: &'static str,
    focused: bool,
) -> Paragraph<'static> {
    let content = match value {
        Some(v) => Line::from(format!("< {v} >")),
        None => Line::from(Span::styled(placeholder, theme::text_muted())),
    };
    Paragraph::new(content).block(
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(theme::border_style(focused)),
    )
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
    title: &'static str,
    placeholder: &'static str,
    input: &Input,
    focused: bool,
) {
    let block = Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(theme::border_style(focused));

    let width = area.width.max(3) - 3;
    let scroll = input.visual_scroll(width as usize);
    let text = if input.value().is_empty() {
        Paragraph::new(Span::styled(placeholder, theme::text_muted()))
    } else {
        Paragraph::new(input.value())
    };
    frame.render_widget(text.scroll((0, scroll as u16)).block(block), area);

    if focused {
        frame.set_cursor_position((
            area.x + ((input.visual_cursor().max(scroll) - scroll) as u16) + 1,
            area.y + 1,
        ));
    }
}

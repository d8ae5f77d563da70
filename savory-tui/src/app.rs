//! Application shell: the wizard loop.
//!
//! `App` owns the flow state machine, the table catalog, and exactly one
//! live step view at a time. The view is rebuilt on every accepted
//! transition, so a form can only exist while the flow is in the form
//! step and always starts from a clean slate. Key events go to the
//! active view; the typed event it returns (if any) is mapped onto a
//! flow event and applied.

use std::io::{self, Stdout};
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use savory_core::{Catalog, Flow, FlowEvent, Step};

use crate::theme;
use crate::views::{
    header, ConfirmationEvent, ConfirmationView, FormEvent, FormView, SelectionEvent,
    SelectionView, View,
};

enum ActiveView {
    Selection(SelectionView),
    Form(FormView),
    Confirmation(ConfirmationView),
}

pub struct App {
    flow: Flow,
    catalog: Catalog,
    view: ActiveView,
    should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        let view = ActiveView::Selection(SelectionView::new(&catalog));
        Self {
            flow: Flow::new(),
            catalog,
            view,
            should_quit: false,
        }
    }

    pub fn step(&self) -> &Step {
        self.flow.step()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            // The form needs the letter for text entry
            (KeyCode::Char('q'), _) if !matches!(self.view, ActiveView::Form(_)) => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        let flow_event = match &mut self.view {
            ActiveView::Selection(view) => view
                .handle_key(key)
                .map(|SelectionEvent::TableChosen(id)| FlowEvent::SelectTable(id)),
            ActiveView::Form(view) => view.handle_key(key).map(|event| match event {
                FormEvent::Submitted(reservation) => FlowEvent::SubmitReservation(reservation),
                FormEvent::Back => FlowEvent::GoBack,
            }),
            ActiveView::Confirmation(view) => view
                .handle_key(key)
                .map(|ConfirmationEvent::NewReservation| FlowEvent::StartNew),
        };

        if let Some(event) = flow_event {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: FlowEvent) {
        match self.flow.apply(event) {
            Ok(step) => self.view = Self::view_for(step, &self.catalog),
            Err(e) => tracing::warn!("rejected wizard event: {e}"),
        }
    }

    fn view_for(step: &Step, catalog: &Catalog) -> ActiveView {
        match step {
            Step::Selection => ActiveView::Selection(SelectionView::new(catalog)),
            Step::Form { table_id } => ActiveView::Form(FormView::new(
                table_id.clone(),
                Local::now().date_naive(),
            )),
            Step::Confirmation { reservation } => {
                ActiveView::Confirmation(ConfirmationView::new(reservation.clone()))
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Banner
                Constraint::Min(10),   // Active step
                Constraint::Length(1), // Key hints
            ])
            .split(frame.area());

        header::render(frame, chunks[0]);

        match &mut self.view {
            ActiveView::Selection(view) => view.render(frame, chunks[1]),
            ActiveView::Form(view) => view.render(frame, chunks[1]),
            ActiveView::Confirmation(view) => view.render(frame, chunks[1]),
        }

        let hints = match &self.view {
            ActiveView::Selection(_) => "↑↓←→ move · Enter reserve · q quit",
            ActiveView::Form(_) => {
                "Tab/↓ next · Shift-Tab/↑ previous · ←/→ adjust · Enter confirm · Esc back"
            }
            ActiveView::Confirmation(_) => "Enter/n new reservation · q quit",
        };
        frame.render_widget(
            Paragraph::new(Span::styled(hints, theme::text_muted())).alignment(Alignment::Center),
            chunks[2],
        );
    }
}

/// Drive the wizard until quit: draw, poll with a short timeout, apply
/// one key at a time.
pub fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| app.render(f))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    app.handle_key(key);
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(Catalog::builtin().unwrap())
    }

    #[test]
    fn test_starts_on_selection() {
        assert_eq!(app().step(), &Step::Selection);
    }

    #[test]
    fn test_quit_keys() {
        let mut by_q = app();
        by_q.handle_key(key(KeyCode::Char('q')));
        assert!(by_q.should_quit());

        let mut by_ctrl_c = app();
        by_ctrl_c.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(by_ctrl_c.should_quit());
    }

    #[test]
    fn test_q_types_into_the_form_instead_of_quitting() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter)); // table 1
        assert_eq!(app.step(), &Step::Form { table_id: "1".into() });

        app.handle_key(key(KeyCode::Char('q')));
        assert!(!app.should_quit());
        assert_eq!(app.step().name(), "form");
    }

    #[test]
    fn test_unavailable_table_keeps_selection() {
        let mut app = app();
        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Right)); // cursor on table 3
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.step(), &Step::Selection);
    }

    #[test]
    fn test_esc_returns_from_form_to_selection() {
        let mut app = app();
        for _ in 0..3 {
            app.handle_key(key(KeyCode::Right));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.step(), &Step::Form { table_id: "4".into() });

        app.handle_key(key(KeyCode::Esc));
        assert_eq!(app.step(), &Step::Selection);
    }
}

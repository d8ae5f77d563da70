//! View components, one per wizard step.
//!
//! All step views implement the [`View`] trait which provides a consistent
//! interface for handling keyboard input and rendering. Views own their
//! ephemeral UI state (cursor, focus, field contents) and return a typed
//! event when an interaction should move the wizard.

pub mod confirmation;
pub mod form;
pub mod header;
pub mod selection;

pub use confirmation::{ConfirmationEvent, ConfirmationView};
pub use form::{FormEvent, FormView};
pub use selection::{SelectionEvent, SelectionView};

use crossterm::event::KeyEvent;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

/// Trait for the wizard step views.
pub trait View {
    /// The event type returned by this view.
    type Event;

    /// Handle a key event. Returns `Some(event)` if the key triggered an
    /// action the wizard should handle.
    fn handle_key(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Render the view to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Center a percent-sized rect inside `area`, used by the form and
/// confirmation cards.
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

//! Persistent restaurant banner shown above every wizard step.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::theme;

pub fn render(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(" Savory Haven ", theme::heading()),
        Span::styled("Fine Dining Experience", theme::text_muted()),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme::border_style(false))
            .title(" Table Reservations "),
    );
    frame.render_widget(banner, area);

    let tagline = Paragraph::new(Line::from(Span::styled(
        "Reserve your perfect dining experience ",
        theme::text_muted(),
    )))
    .alignment(Alignment::Right);
    let inner = area.inner(Margin::new(1, 1));
    frame.render_widget(tagline, inner);
}

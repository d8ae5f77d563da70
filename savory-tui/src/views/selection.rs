//! Table selection step: the restaurant floor plan.
//!
//! All eight tables render at their floor-plan positions; a cursor moves
//! over every table (the hover analog) while a side panel lists only the
//! available ones. Enter on an available table chooses it; unavailable
//! tables are rendered dimmed and ignore Enter entirely, so a selection
//! event can only ever carry an available table's id.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use savory_core::{Catalog, Table, TableType};

use super::View;
use crate::theme;

/// Floor-plan table footprint in terminal cells.
const TABLE_BOX: (u16, u16) = (6, 3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent {
    TableChosen(String),
}

pub struct SelectionView {
    tables: Vec<Table>,
    cursor: usize,
}

impl SelectionView {
    pub fn new(catalog: &Catalog) -> Self {
        Self {
            tables: catalog.tables().to_vec(),
            cursor: 0,
        }
    }

    /// The table under the cursor.
    pub fn highlighted(&self) -> &Table {
        &self.tables[self.cursor]
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.tables.len() as isize;
        self.cursor = (self.cursor as isize + delta).rem_euclid(len) as usize;
    }

    fn render_floor_plan(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Restaurant Floor Plan ")
            .borders(Borders::ALL)
            .border_style(theme::border_style(false));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        for (idx, table) in self.tables.iter().enumerate() {
            let rect = table_rect(table, inner);
            if rect.is_empty() {
                continue;
            }
            let border = if idx == self.cursor {
                theme::highlight()
            } else if table.available {
                Style::default().fg(theme::table_color(table.table_type))
            } else {
                theme::unavailable()
            };
            let label = if table.available {
                Style::default().fg(theme::table_color(table.table_type))
            } else {
                theme::unavailable()
            };
            let seat = Paragraph::new(Line::from(Span::styled(
                format!("T{}", table.number),
                label,
            )))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border));
            frame.render_widget(seat, rect);
        }
    }

    fn render_available_list(&self, frame: &mut Frame, area: Rect) {
        let available: Vec<&Table> = self.tables.iter().filter(|t| t.available).collect();
        let items: Vec<ListItem> = available
            .iter()
            .map(|t| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("Table {}", t.number),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("  Up to {} guests  ", t.capacity)),
                    Span::styled(
                        t.table_type.label(),
                        Style::default().fg(theme::table_color(t.table_type)),
                    ),
                ]))
            })
            .collect();

        // Kept in sync with the floor-plan cursor; no highlight while the
        // cursor sits on an unavailable table.
        let mut state = ListState::default();
        state.select(
            available
                .iter()
                .position(|t| t.id == self.tables[self.cursor].id),
        );

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Available Tables ")
                    .borders(Borders::ALL)
                    .border_style(theme::border_style(false)),
            )
            .highlight_style(theme::highlight())
            .highlight_symbol("» ");
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_details(&self, frame: &mut Frame, area: Rect) {
        let table = self.highlighted();
        let mut spans = vec![
            Span::styled(format!("Table {}", table.number), theme::highlight()),
            Span::raw(format!("  {} guests  ", table.capacity)),
            Span::styled(
                table.table_type.label(),
                Style::default().fg(theme::table_color(table.table_type)),
            ),
        ];
        if table.available {
            spans.push(Span::styled(
                "  Enter to reserve this table",
                theme::text_muted(),
            ));
        } else {
            spans.push(Span::styled(
                "  currently unavailable",
                Style::default().fg(Color::Red),
            ));
        }
        let details = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(" Table Details ")
                .borders(Borders::ALL)
                .border_style(theme::border_style(false)),
        );
        frame.render_widget(details, area);
    }
}

impl View for SelectionView {
    type Event = SelectionEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Option<SelectionEvent> {
        match key.code {
            KeyCode::Left | KeyCode::Up => {
                self.move_cursor(-1);
                None
            }
            KeyCode::Right | KeyCode::Down => {
                self.move_cursor(1);
                None
            }
            KeyCode::Enter => {
                let table = self.highlighted();
                if table.available {
                    Some(SelectionEvent::TableChosen(table.id.clone()))
                } else {
                    tracing::debug!(table_id = %table.id, "table unavailable, selection ignored");
                    None
                }
            }
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Heading
                Constraint::Min(8),    // Floor plan + side panels
                Constraint::Length(3), // Highlighted table details
            ])
            .split(area);

        let heading = Paragraph::new(vec![
            Line::from(Span::styled("Select Your Table", theme::heading())),
            Line::from(Span::styled(
                "Choose from our available tables for your dining experience",
                theme::text_muted(),
            )),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(heading, chunks[0]);

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(62), Constraint::Percentage(38)])
            .split(chunks[1]);
        self.render_floor_plan(frame, main[0]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(6)])
            .split(main[1]);
        self.render_available_list(frame, side[0]);
        render_legend(frame, side[1]);

        self.render_details(frame, chunks[2]);
    }
}

/// Scale a table's percentage offsets into `inner`, anchored so every
/// footprint stays inside the plan.
fn table_rect(table: &Table, inner: Rect) -> Rect {
    let (w, h) = TABLE_BOX;
    let span_x = inner.width.saturating_sub(w) as u32;
    let span_y = inner.height.saturating_sub(h) as u32;
    let x = inner.x + (span_x * table.x as u32 / 100) as u16;
    let y = inner.y + (span_y * table.y as u32 / 100) as u16;
    Rect::new(x, y, w, h).intersection(inner)
}

fn render_legend(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = TableType::ALL
        .iter()
        .map(|t| {
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(theme::table_color(*t))),
                Span::raw(t.label()),
            ])
        })
        .collect();
    let legend = Paragraph::new(lines).block(
        Block::default()
            .title(" Table Types ")
            .borders(Borders::ALL)
            .border_style(theme::border_style(false)),
    );
    frame.render_widget(legend, area);
}

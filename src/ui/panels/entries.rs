use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::{App, InputMode};
use crate::ui::theme;
use crate::ui::util::{format_currency, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = Span::styled(
        format!(" Expenses {} ({}) ", app.filter_month, app.summary.count()),
        Style::default()
            .fg(theme::TEXT_DIM)
            .add_modifier(Modifier::BOLD),
    );

    if app.summary.entries.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No expenses for this month", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press a to add one, or H/L to change month",
                theme::dim_style(),
            )),
        ];
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(title);
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Category", "Note", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let show_cursor = app.input_mode == InputMode::Normal;
    let note_width = area.width.saturating_sub(44).max(8) as usize;

    let rows: Vec<Row> = app
        .summary
        .entries
        .iter()
        .enumerate()
        .skip(app.entry_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, e)| {
            let style = if show_cursor && i == app.entry_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(e.date.clone()),
                Cell::from(e.category.as_str()),
                Cell::from(truncate(&e.note, note_width)),
                Cell::from(Span::styled(format_currency(e.amount), theme::expense_style())),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(15),
        Constraint::Min(8),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(title),
    );

    f.render_widget(table, area);
}

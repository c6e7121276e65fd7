use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, FormField, InputMode};
use crate::ui::theme;
use crate::ui::util::{format_currency_text, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let editing = app.input_mode == InputMode::Form;
    let inner_width = area.width.saturating_sub(14) as usize;

    let mut lines: Vec<Line> = FormField::all()
        .iter()
        .map(|field| {
            let focused = editing && *field == app.form_field;
            let value = match field {
                FormField::Date => app.form.date.clone(),
                FormField::Amount => app.form.amount.clone(),
                FormField::Category => format!("‹ {} ›", app.form.category),
                FormField::Note => truncate(&app.form.note, inner_width.max(1)),
            };
            let value_style = if focused {
                theme::selected_style()
            } else {
                theme::normal_style()
            };
            let cursor = if focused && *field != FormField::Category {
                "▏"
            } else {
                ""
            };
            Line::from(vec![
                Span::styled(
                    format!(" {:<9}", field.label()),
                    if focused {
                        Style::default()
                            .fg(theme::ACCENT)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        theme::dim_style()
                    },
                ),
                Span::styled(format!(" {value}{cursor} "), value_style),
            ])
        })
        .collect();

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled(" Preview   ", theme::dim_style()),
        Span::styled(
            format_currency_text(&app.form.amount),
            Style::default().fg(theme::RED),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        if editing {
            " Enter add · Tab next · ↑/↓ adjust · Esc done"
        } else {
            " Press a to add an expense"
        },
        theme::dim_style(),
    )));

    let border = if editing { theme::ACCENT } else { theme::OVERLAY };
    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                " New Expense ",
                Style::default()
                    .fg(theme::TEXT_DIM)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(form, area);
}

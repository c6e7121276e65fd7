use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;

/// Title plus the month selector, with the shown month between its
/// neighbours.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let options = app.month_options();
    let idx = options
        .iter()
        .position(|m| *m == app.filter_month)
        .unwrap_or(0);

    let mut spans = vec![
        Span::styled(
            " SpendTUI ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" Month: ", theme::dim_style()),
    ];

    // Options are newest first; older months sit on the left
    let newer = idx.checked_sub(1).and_then(|i| options.get(i));
    let older = options.get(idx + 1);

    spans.push(Span::styled(
        if older.is_some() { "◀ H " } else { "    " },
        theme::dim_style(),
    ));
    if let Some(m) = older {
        spans.push(Span::styled(format!("{m}  "), theme::dim_style()));
    }
    spans.push(Span::styled(
        format!("[{}]", app.filter_month),
        Style::default()
            .fg(theme::YELLOW)
            .add_modifier(Modifier::BOLD),
    ));
    if let Some(m) = newer {
        spans.push(Span::styled(format!("  {m}"), theme::dim_style()));
    }
    spans.push(Span::styled(
        if newer.is_some() { " L ▶" } else { "    " },
        theme::dim_style(),
    ));
    spans.push(Span::styled(
        format!("   {} of {} months", idx + 1, options.len()),
        theme::dim_style(),
    ));

    let header = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(header, area);
}

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Category;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{bar, format_currency};

/// One bar per category in selector order; categories with no spending
/// show an empty bar.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " By Category ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let agg = &app.summary.aggregate;
    if agg.by_category.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "Nothing spent this month",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    // label(14) + amount(13) + percent(7) + borders/padding
    let bar_width = area.width.saturating_sub(38).max(4) as usize;

    let lines: Vec<Line> = Category::all()
        .iter()
        .map(|&category| {
            let amount = agg.amount_for(category);
            let pct = agg.share_percent(category);
            Line::from(vec![
                Span::styled(format!(" {:<13}", category.as_str()), theme::normal_style()),
                Span::styled(bar(pct, bar_width), Style::default().fg(theme::ACCENT)),
                Span::styled(format!(" {:>6}%", pct.to_string()), theme::dim_style()),
                Span::styled(
                    format!(" {:>12}", format_currency(amount)),
                    theme::expense_style(),
                ),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(block), area);
}

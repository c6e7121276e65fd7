use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::format_currency;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let agg = &app.summary.aggregate;
    let count = app.summary.count();

    render_card(
        f,
        cards[0],
        "Total Spent",
        format_currency(agg.total),
        theme::RED,
        format!("in {}", app.filter_month),
    );
    render_card(
        f,
        cards[1],
        "Transactions",
        count.to_string(),
        theme::ACCENT,
        format!("{} all time", app.total_entries),
    );

    let (top, sub) = match agg.top_category() {
        Some((category, amount)) => (
            category.to_string(),
            format!(
                "{} ({}%)",
                format_currency(amount),
                agg.share_percent(category)
            ),
        ),
        None => ("—".to_string(), String::new()),
    };
    render_card(f, cards[2], "Top Category", top, theme::YELLOW, sub);
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, color: Color, subtitle: String) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

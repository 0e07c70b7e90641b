use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_rupiah, truncate};

/// Server-side view: whole-account totals for the selected month, unfiltered
/// by category. A failed refresh leaves the previous figures in place.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4)])
        .split(area);

    render_total_card(f, chunks[0], app);
    render_breakdown(f, chunks[1], app);
}

fn render_total_card(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" Total {} ", app.filter.month_key()),
            theme::title_style(),
        ));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_rupiah(app.summary.view().total),
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_breakdown(f: &mut Frame, area: Rect, app: &App) {
    let per_category = &app.summary.view().per_category;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(" Per Category ", theme::title_style()));

    if per_category.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled(
                "No summary for this month",
                theme::dim_style(),
            )),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let rows: Vec<Row> = per_category
        .iter()
        .enumerate()
        .map(|(i, (name, amount))| {
            let style = if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(truncate(name, 24)),
                Cell::from(
                    Line::from(Span::styled(format_rupiah(*amount), theme::amount_style()))
                        .right_aligned(),
                ),
            ])
            .style(style)
        })
        .collect();

    let widths = [Constraint::Min(16), Constraint::Length(16)];
    f.render_widget(Table::new(rows, widths).block(block), area);
}

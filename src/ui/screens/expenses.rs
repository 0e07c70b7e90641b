use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_rupiah, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let has_error = app.expenses.error.is_some();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(if has_error { 1 } else { 0 }),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    if let Some(err) = app.expenses.error.as_ref() {
        let line = Line::from(Span::styled(
            format!(" Failed to load expenses: {}", truncate(err, 90)),
            theme::error_style(),
        ));
        f.render_widget(Paragraph::new(line), chunks[0]);
    }

    render_table(f, chunks[1], app);
    render_total_bar(f, chunks[2], app);
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let monthly = app.monthly_records();

    let filter_label = match app.filter.category {
        Some(category) => format!(" [{category}]"),
        None => String::new(),
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(ratatui::style::Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(
                " Expenses {} ({}){} ",
                app.filter.month_key(),
                monthly.len(),
                filter_label
            ),
            theme::title_style(),
        ));

    // The loading flag gates the rows only; the rest of the frame stays live.
    if app.expenses.loading {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("Loading…", theme::dim_style())),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    if monthly.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled(
                "No expenses for this month",
                theme::dim_style(),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Add one with :add, or switch months with H/L",
                theme::dim_style(),
            )),
        ];
        f.render_widget(Paragraph::new(msg).centered().block(block), area);
        return;
    }

    let header_cells = ["Date", "Category", "Merchant", "Notes", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let page = area.height.saturating_sub(3) as usize;
    let rows: Vec<Row> = monthly
        .iter()
        .enumerate()
        .skip(app.expense_scroll)
        .take(page)
        .map(|(i, rec)| {
            let amount = format_rupiah(rec.amount_value().unwrap_or(f64::NAN));

            let style = if i == app.expense_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(rec.date.clone()),
                Cell::from(truncate(&rec.category, 16)),
                Cell::from(truncate(rec.merchant.as_deref().unwrap_or("-"), 20)),
                Cell::from(truncate(rec.notes.as_deref().unwrap_or("-"), 28)),
                Cell::from(Line::from(Span::styled(amount, theme::amount_style())).right_aligned()),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(16),
        Constraint::Min(12),
        Constraint::Min(14),
        Constraint::Length(14),
    ];

    let table = Table::new(rows, widths).header(header).block(block);
    f.render_widget(table, area);
}

fn render_total_bar(f: &mut Frame, area: Rect, app: &App) {
    let line = Line::from(vec![
        Span::styled(" Total this month ", theme::dim_style()),
        Span::styled(
            format_rupiah(app.monthly_total()),
            ratatui::style::Style::default()
                .fg(theme::ACCENT)
                .add_modifier(ratatui::style::Modifier::BOLD),
        ),
        Span::raw(" "),
    ]);
    f.render_widget(Paragraph::new(line).right_aligned(), area);
}

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::app::{App, FormField, InputMode};
use crate::ui::theme;
use crate::ui::util::format_rupiah;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(" Add Expense ", theme::title_style()));

    let mut lines: Vec<Line> = vec![Line::from("")];

    for field in FormField::all() {
        let selected = *field == app.selected_field();
        let editing = selected && app.input_mode == InputMode::Editing;

        let value = match field {
            FormField::Amount => app.form.amount.clone(),
            FormField::Category => format!("< {} >", app.form.category),
            FormField::Date => app.form.date.clone(),
            FormField::PaymentMethod => app.form.payment_method.clone(),
            FormField::Merchant => app.form.merchant.clone(),
            FormField::Notes => app.form.notes.clone(),
        };

        let marker = if selected { "▸ " } else { "  " };
        let value_style = if editing {
            Style::default().fg(theme::YELLOW).add_modifier(Modifier::BOLD)
        } else if selected {
            Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
        } else {
            theme::normal_style()
        };

        let mut spans = vec![
            Span::styled(marker, theme::dim_style()),
            Span::styled(format!("{:<16}", field.label()), theme::dim_style()),
            Span::styled(value, value_style),
        ];
        if editing {
            spans.push(Span::styled("▏", Style::default().fg(theme::YELLOW)));
        }
        if *field == FormField::Amount && !app.form.amount.is_empty() {
            spans.push(Span::styled(
                format!("  = {}", format_rupiah(app.form.amount_value())),
                theme::dim_style(),
            ));
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    if app.submitting {
        lines.push(Line::from(Span::styled(
            "  Saving…",
            Style::default().fg(theme::YELLOW),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "  j/k field | Enter edit | +/- category | Ctrl-s submit",
            theme::dim_style(),
        )));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}

use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let txns = app.ledger.transactions();
    if txns.is_empty() {
        let msg = vec![
            Line::from(""),
            Line::from(Span::styled("No transactions yet", theme::dim_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Press a to add one, or :add <date> <description> <amount>",
                theme::dim_style(),
            )),
        ];
        f.render_widget(
            Paragraph::new(msg).centered().block(theme::panel("Transactions (0)")),
            area,
        );
        return;
    }

    let header_cells = ["Date", "Description", "Type", "Category", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme::header_style()));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = txns
        .iter()
        .enumerate()
        .skip(app.transaction_scroll)
        .take(area.height.saturating_sub(3) as usize)
        .map(|(i, txn)| {
            let style = if i == app.transaction_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            let sign = if txn.is_income() { "+" } else { "" };
            let amount_str = format!("{sign}{}", app.money(txn.amount));

            Row::new(vec![
                Cell::from(format!("  {}", txn.date.format("%-d/%-m/%Y"))),
                Cell::from(truncate(&txn.description, 40)),
                Cell::from(Span::styled(txn.txn_type.as_str(), theme::txn_style(txn.txn_type))),
                Cell::from(txn.category.as_str()),
                Cell::from(Span::styled(amount_str, theme::txn_style(txn.txn_type))),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(13),
        Constraint::Min(20),
        Constraint::Length(9),
        Constraint::Length(15),
        Constraint::Length(16),
    ];

    let title = format!("Transactions ({})", txns.len());
    let table = Table::new(rows, widths).header(header).block(theme::panel(&title));

    f.render_widget(table, area);
}

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::analytics::{pie_slices, percent_of};
use crate::models::TxnType;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{share_bar, truncate};

const SHARE_BAR_WIDTH: usize = 20;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6),  // Summary cards
            Constraint::Min(8),     // Category shares
            Constraint::Length(12), // Monthly chart
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);
    render_category_shares(f, chunks[1], app);
    render_monthly_chart(f, chunks[2], app);
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(33),
            Constraint::Percentage(34),
        ])
        .split(area);

    let s = &app.view.summary;
    render_card(
        f,
        cards[0],
        "Total Income",
        app.money(s.total_income),
        theme::income_style(),
        format!("{} txns", s.income_count),
    );
    render_card(
        f,
        cards[1],
        "Total Expenses",
        app.money(s.total_expense),
        theme::expense_style(),
        format!("{} txns", s.expense_count),
    );

    let last = match &s.most_recent {
        Some(tx) => format!(
            "Last: {} • {} on {}",
            truncate(&tx.description, 20),
            app.money(tx.amount),
            tx.date.format("%d %b %Y")
        ),
        None => "No transactions yet".to_string(),
    };
    let net_style = if s.net_balance >= Decimal::ZERO {
        theme::income_style()
    } else {
        theme::expense_style()
    };
    render_card(
        f,
        cards[2],
        "Net Balance",
        app.money(s.net_balance),
        net_style,
        last,
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, value: String, style: Style, subtitle: String) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(value, style.add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(subtitle, theme::dim_style())),
    ])
    .centered()
    .block(theme::panel(title));

    f.render_widget(text, area);
}

fn render_category_shares(f: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_share_panel(f, halves[0], app, TxnType::Income, "Income by Category");
    render_share_panel(f, halves[1], app, TxnType::Expense, "Expenses by Category");
}

fn render_share_panel(f: &mut Frame, area: Rect, app: &App, side: TxnType, title: &str) {
    let slices = pie_slices(app.view.categories.side(side));
    let total = slices
        .iter()
        .fold(Decimal::ZERO, |acc, s| acc.saturating_add(s.value));

    let lines: Vec<Line> = slices
        .iter()
        .map(|slice| {
            let bar = share_bar(slice.value, total, SHARE_BAR_WIDTH);
            if slice.placeholder {
                return Line::from(vec![
                    Span::styled(format!(" {:<14}", slice.label), theme::dim_style()),
                    Span::styled(bar, Style::default().fg(theme::OVERLAY)),
                ]);
            }
            // All-zero amounts leave nothing to divide by
            let pct = if total.is_zero() {
                Decimal::ZERO
            } else {
                percent_of(slice.value, total)
            };
            Line::from(vec![
                Span::styled(format!(" {:<14}", slice.label), theme::normal_style()),
                Span::styled(bar, theme::txn_style(side)),
                Span::styled(format!(" {:>4}% ", pct.to_string()), theme::dim_style()),
                Span::styled(app.money(slice.value), theme::normal_style()),
            ])
        })
        .collect();

    f.render_widget(Paragraph::new(lines).block(theme::panel(title)), area);
}

fn render_monthly_chart(f: &mut Frame, area: Rect, app: &App) {
    let block = theme::panel("Monthly Income vs Expenses");
    if app.view.monthly.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No transactions yet. Press 2 then a to add one",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    // Most recent months that fit, oldest on the left
    let fits = (area.width.saturating_sub(2) / 12).max(1) as usize;
    let skip = app.view.monthly.len().saturating_sub(fits);

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(5)
        .bar_gap(0)
        .group_gap(2)
        .value_style(Style::default().fg(theme::TEXT));

    for m in app.view.monthly.iter().skip(skip) {
        let bars = [
            Bar::default()
                .value(m.income.to_u64().unwrap_or(0))
                .text_value(String::new())
                .style(theme::income_style()),
            Bar::default()
                .value(m.expense.to_u64().unwrap_or(0))
                .text_value(String::new())
                .style(theme::expense_style()),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(m.month.to_string()))
                .bars(&bars),
        );
    }

    f.render_widget(chart, area);
}

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;

use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::truncate;

pub(crate) const EMPTY_INSIGHTS: &str = "No spending insights yet. Keep tracking your expenses!";

const BAR_WIDTH: u16 = 7;
const GROUP_GAP: u16 = 2;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    render_variance_chart(f, chunks[0], app);
    render_insight_list(f, chunks[1], app);
}

fn render_variance_chart(f: &mut Frame, area: Rect, app: &App) {
    let legend = Line::from(vec![
        Span::styled(" Budget vs Actual ", theme::dim_style()),
        Span::styled("■ Budgeted ", Style::default().fg(theme::BUDGETED)),
        Span::styled("■ Actual ", Style::default().fg(theme::ACTUAL)),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(legend);

    if app.view.variance.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "Nothing to compare yet. Set a budget or add a transaction",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let group_width = BAR_WIDTH * 2 + GROUP_GAP;
    let fits = (area.width.saturating_sub(2) / group_width).max(1) as usize;
    let label_width = (BAR_WIDTH * 2) as usize;

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(BAR_WIDTH)
        .bar_gap(0)
        .group_gap(GROUP_GAP)
        .value_style(Style::default().fg(theme::HEADER_BG));

    for row in app.view.variance.iter().take(fits) {
        let bars = [
            Bar::default()
                .value(row.budgeted.to_u64().unwrap_or(0))
                .text_value(app.money(row.budgeted))
                .style(Style::default().fg(theme::BUDGETED)),
            Bar::default()
                .value(row.actual.to_u64().unwrap_or(0))
                .text_value(app.money(row.actual))
                .style(Style::default().fg(theme::ACTUAL)),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(truncate(&row.key(), label_width)))
                .bars(&bars),
        );
    }

    f.render_widget(chart, area);
}

fn render_insight_list(f: &mut Frame, area: Rect, app: &App) {
    let insights = &app.view.insights;
    let title = format!("Insights ({})", insights.len());

    if insights.is_empty() {
        let msg = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(EMPTY_INSIGHTS, theme::dim_style())),
        ])
        .centered()
        .block(theme::panel(&title));
        f.render_widget(msg, area);
        return;
    }

    let items: Vec<ListItem> = insights
        .iter()
        .skip(app.insight_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|insight| {
            let (marker, style) = if insight.is_overspent() {
                ("▲ ", theme::overspent_style())
            } else {
                ("● ", theme::within_budget_style())
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!(" {marker}"), style),
                Span::styled(insight.message(&app.config.currency_symbol), style),
            ]))
        })
        .collect();

    f.render_widget(List::new(items).block(theme::panel(&title)), area);
}

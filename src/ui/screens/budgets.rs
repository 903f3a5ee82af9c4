use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};
use rust_decimal::Decimal;

use crate::analytics::percent_of;
use crate::models::Category;
use crate::ui::app::{App, InputMode};
use crate::ui::theme;
use crate::ui::util::share_bar;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_month_selector(f, chunks[0], app);
    render_inputs(f, chunks[1], app);
}

fn render_month_selector(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.budget_form;
    let spans: Vec<Span> = form
        .months
        .iter()
        .enumerate()
        .flat_map(|(i, m)| {
            let style = if i == form.month_index {
                theme::selected_style().add_modifier(Modifier::BOLD)
            } else {
                theme::dim_style()
            };
            [Span::styled(format!(" {} ", m.abbreviation()), style), Span::raw(" ")]
        })
        .collect();

    let title = format!("Month {}  [ / ] to change", form.month().year());
    f.render_widget(Paragraph::new(Line::from(spans)).block(theme::panel(&title)), area);
}

fn render_inputs(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.budget_form;
    let month = form.month();
    let editing = app.input_mode == InputMode::Budget;

    let items: Vec<ListItem> = Category::all()
        .iter()
        .zip(&form.inputs)
        .map(|(cat, raw)| {
            let focused = *cat == form.focused_category();
            let style = if focused && editing {
                Style::default().fg(theme::HEADER_BG).bg(theme::YELLOW)
            } else if focused {
                theme::selected_style()
            } else {
                theme::normal_style()
            };

            let input = if raw.is_empty() && !(focused && editing) {
                "—".to_string()
            } else if focused && editing {
                format!("{raw}▏")
            } else {
                raw.clone()
            };

            let mut spans = vec![
                Span::styled(format!(" {:<14}", cat.as_str()), style),
                Span::styled(format!(" {input:<14}"), style),
            ];

            // Progress against what is already saved for this month
            let budgeted = app.ledger.budgets().get(month, *cat);
            if budgeted > Decimal::ZERO {
                let spent = app
                    .view
                    .spending
                    .get(&(month, *cat))
                    .copied()
                    .unwrap_or(Decimal::ZERO);
                let over = spent > budgeted;
                let bar_style = if over {
                    theme::overspent_style()
                } else {
                    theme::within_budget_style()
                };
                spans.push(Span::styled(format!(" {}", share_bar(spent, budgeted, 20)), bar_style));
                spans.push(Span::styled(
                    format!(
                        " {} / {} ({}%)",
                        app.money(spent),
                        app.money(budgeted),
                        percent_of(spent, budgeted)
                    ),
                    bar_style,
                ));
            }

            ListItem::new(Line::from(spans))
        })
        .collect();

    let title = if editing {
        format!("Budget for {month}  Enter save, Esc discard")
    } else {
        format!("Budget for {month}  e edit, s save")
    };
    f.render_widget(List::new(items).block(theme::panel(&title)), area);
}

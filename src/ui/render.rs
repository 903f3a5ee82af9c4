use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::commands;
use super::form::TxnField;
use super::theme;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(5),    // Main content
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Command bar
        ])
        .split(f.area());

    render_tab_bar(f, chunks[0], app);
    render_screen(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_command_bar(f, chunks[3], app);

    if app.input_mode == InputMode::Editing {
        render_form_overlay(f, f.area(), app);
    }
    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Screen::all()
        .iter()
        .enumerate()
        .map(|(i, s)| {
            let num = format!("{}", i + 1);
            if *s == app.screen {
                Line::from(vec![
                    Span::styled(format!("{num}:"), theme::dim_style()),
                    Span::styled(
                        format!("{s}"),
                        Style::default()
                            .fg(theme::ACCENT)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(Span::styled(format!("{num}:{s}"), theme::dim_style()))
            }
        })
        .collect();

    let tabs = Tabs::new(titles)
        .divider(Span::styled(" | ", Style::default().fg(theme::OVERLAY)))
        .style(Style::default().bg(theme::HEADER_BG));

    f.render_widget(tabs, area);
}

fn render_screen(f: &mut Frame, area: Rect, app: &App) {
    match app.screen {
        Screen::Dashboard => super::screens::dashboard::render(f, area, app),
        Screen::Transactions => super::screens::transactions::render(f, area, app),
        Screen::Budgets => super::screens::budgets::render(f, area, app),
        Screen::Insights => super::screens::insights::render(f, area, app),
    }
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_bg = match app.input_mode {
        InputMode::Normal => theme::ACCENT,
        InputMode::Command | InputMode::Editing => theme::GREEN,
        InputMode::Budget => theme::YELLOW,
        InputMode::Confirm => theme::RED,
    };
    let mode_style = Style::default()
        .fg(theme::HEADER_BG)
        .bg(mode_bg)
        .add_modifier(Modifier::BOLD);

    let info = format!(
        " {} | {} txns | {} insights",
        app.screen,
        app.ledger.transactions().len(),
        app.view.insights.len()
    );

    let right = match app.screen {
        Screen::Dashboard => " 1-4 tabs | : command | ? help ",
        Screen::Transactions => " a add | e edit | D delete | ? help ",
        Screen::Budgets => " [/] month | e edit | s save | ? help ",
        Screen::Insights => " j/k scroll | ? help ",
    };

    let available = area.width as usize;
    let used = mode_label.chars().count() + info.chars().count() + right.chars().count();
    let pad = available.saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let (content, cursor_offset) = match app.input_mode {
        InputMode::Command => (
            Line::from(vec![
                Span::styled(":", Style::default().fg(theme::ACCENT)),
                Span::styled(&app.command_input, theme::command_bar_style()),
            ]),
            Some(1 + app.command_input.chars().count() as u16),
        ),
        InputMode::Confirm => (
            Line::from(vec![
                Span::styled(&app.confirm_message, Style::default().fg(theme::YELLOW)),
                Span::styled(" [y/N] ", Style::default().fg(theme::RED)),
            ]),
            None,
        ),
        InputMode::Normal | InputMode::Editing | InputMode::Budget => (
            if app.status_message.is_empty() {
                Line::from(Span::styled(
                    " Press : for commands, ? for help",
                    theme::dim_style(),
                ))
            } else {
                Line::from(Span::styled(
                    &app.status_message,
                    theme::command_bar_style(),
                ))
            },
            None,
        ),
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);

    if let Some(offset) = cursor_offset {
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let height = height.min(area.height.saturating_sub(2));
    let width = width.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

fn render_form_overlay(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.txn_form;
    let title = if form.editing.is_some() {
        " Edit Transaction "
    } else {
        " Add Transaction "
    };

    let mut lines = vec![Line::from("")];
    let mut cursor = None;
    for (i, field) in TxnField::all().iter().enumerate() {
        let focused = i == form.focus;
        let value = form.value_of(*field);
        let label_style = if focused {
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD)
        } else {
            theme::dim_style()
        };
        let value_span = if field.is_choice() {
            let text = if focused {
                format!("◀ {value} ▶")
            } else {
                format!("  {value}  ")
            };
            Span::styled(text, theme::normal_style())
        } else {
            let style = if focused {
                Style::default().fg(theme::TEXT).bg(theme::SURFACE)
            } else {
                theme::normal_style()
            };
            if focused {
                cursor = Some((lines.len() as u16, 16 + value.chars().count() as u16));
            }
            Span::styled(value, style)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:<13}", field.label()), label_style),
            Span::raw(" "),
            value_span,
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Tab/Shift-Tab field | ←/→ choice | Enter save | Esc cancel",
        theme::dim_style(),
    )));

    let popup = centered(area, 64, lines.len() as u16 + 2);
    f.render_widget(Clear, popup);
    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .title(Span::styled(title, Style::default().fg(theme::ACCENT)))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(widget, popup);

    if let Some((row, col)) = cursor {
        // +1 for the border
        f.set_cursor_position((popup.x + 1 + col, popup.y + 1 + row));
    }
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let mut help_text = vec![
        Line::from(Span::styled(
            " BudgetDash Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(" Navigation", theme::heading_style())),
        Line::from(Span::styled(
            "  j/k or Up/Down   Move cursor           1-4        Switch tabs",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Tab/Shift-Tab    Cycle tabs            g/G        Top/Bottom",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Ctrl-d/u         Page Down/Up          q/Ctrl-q   Quit",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Actions", theme::heading_style())),
        Line::from(Span::styled(
            "  a (Transactions) Add transaction       e          Edit selected",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  D (Transactions) Delete transaction    :          Command mode",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  [/] (Budgets)    Prev/Next month       e/s        Edit/Save budget",
            theme::normal_style(),
        )),
        Line::from(""),
        Line::from(Span::styled(" Commands", theme::heading_style())),
    ];

    // Build command list dynamically from COMMANDS registry
    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 1 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<14} {desc}"),
            theme::normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        theme::dim_style(),
    )));

    let popup_area = centered(area, 92, help_text.len() as u16 + 2);
    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;

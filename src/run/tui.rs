use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::config::Config;
use crate::ledger::Ledger;
use crate::ui::app::{App, InputMode, Screen};
use crate::ui::commands;
use crate::ui::util::{scroll_down, scroll_to_bottom, scroll_to_top, scroll_up};

pub(crate) fn as_tui(config: Config, ledger: Ledger) -> Result<()> {
    let mut app = App::new(config, ledger);
    tracing::info!(
        transactions = app.ledger.transactions().len(),
        "starting dashboard"
    );

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = ?e, "dashboard exited with error");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // 1 tab + 1 status + 1 cmd + 2 borders + 1 header
            let content_height = f.area().height.saturating_sub(6) as usize;
            app.visible_rows = content_height.max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            // Windows reports releases too
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app)?,
                InputMode::Command => handle_command_input(key, app)?,
                InputMode::Editing => handle_form_input(key, app),
                InputMode::Budget => handle_budget_input(key, app),
                InputMode::Confirm => handle_confirm_input(key, app),
            }
        }
    }
    Ok(())
}

fn handle_normal_input(key: KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_down(app);
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let half_page = app.visible_rows / 2;
            for _ in 0..half_page {
                handle_move_up(app);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => handle_move_down(app),
        KeyCode::Char('k') | KeyCode::Up => handle_move_up(app),
        KeyCode::Char('g') => handle_goto_top(app),
        KeyCode::Char('G') => handle_goto_bottom(app),
        KeyCode::Char(c @ '1'..='4') => {
            let idx = (c as usize) - ('1' as usize);
            if let Some(&screen) = Screen::all().get(idx) {
                switch_screen(app, screen);
            }
        }
        KeyCode::Tab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            switch_screen(app, screens[(idx + 1) % screens.len()]);
        }
        KeyCode::BackTab => {
            let screens = Screen::all();
            let idx = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
            let prev = if idx == 0 { screens.len() - 1 } else { idx - 1 };
            switch_screen(app, screens[prev]);
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Char('a') if app.screen == Screen::Transactions => app.begin_add(),
        KeyCode::Char('e') | KeyCode::Enter if app.screen == Screen::Transactions => {
            app.begin_edit()
        }
        KeyCode::Char('D') if app.screen == Screen::Transactions => app.request_delete(),
        KeyCode::Char('[') if app.screen == Screen::Budgets => app.change_budget_month(-1),
        KeyCode::Char(']') if app.screen == Screen::Budgets => app.change_budget_month(1),
        KeyCode::Char('e') | KeyCode::Enter if app.screen == Screen::Budgets => {
            app.input_mode = InputMode::Budget;
            app.set_status("Type amounts: Tab/↑/↓ move, Enter save, Esc discard");
        }
        KeyCode::Char('s') if app.screen == Screen::Budgets => app.save_budget(),
        KeyCode::Esc => app.set_status(""),
        _ => {}
    }
    Ok(())
}

fn handle_command_input(key: KeyEvent, app: &mut App) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app)?;
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let trimmed = app.command_input.trim_end();
            if let Some(pos) = trimmed.rfind(' ') {
                app.command_input.truncate(pos + 1);
            } else {
                app.command_input.clear();
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

fn handle_form_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.submit_form(),
        KeyCode::Esc => app.cancel_form(),
        KeyCode::Tab | KeyCode::Down => app.txn_form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.txn_form.focus_prev(),
        KeyCode::Left => app.txn_form.cycle(false),
        KeyCode::Right | KeyCode::Char(' ') if app.txn_form.focused().is_choice() => {
            app.txn_form.cycle(true)
        }
        KeyCode::Backspace => app.txn_form.pop_char(),
        KeyCode::Char(c) => app.txn_form.push_char(c),
        _ => {}
    }
}

fn handle_budget_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => app.save_budget(),
        KeyCode::Esc => app.discard_budget_edits(),
        KeyCode::Tab | KeyCode::Down => app.budget_form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => app.budget_form.focus_prev(),
        KeyCode::Backspace => app.budget_form.pop_char(),
        KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == ',' => {
            app.budget_form.push_char(c)
        }
        _ => {}
    }
}

fn handle_confirm_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_pending(),
        _ => app.cancel_pending(),
    }
}

fn switch_screen(app: &mut App, screen: Screen) {
    app.screen = screen;
    app.set_status(format!("{screen}"));
}

fn handle_move_down(app: &mut App) {
    match app.screen {
        Screen::Transactions => {
            let page = app.transaction_page();
            scroll_down(
                &mut app.transaction_index,
                &mut app.transaction_scroll,
                app.ledger.transactions().len(),
                page,
            );
        }
        Screen::Budgets => app.budget_form.focus_next(),
        Screen::Insights => {
            if app.insight_scroll + 1 < app.view.insights.len() {
                app.insight_scroll += 1;
            }
        }
        Screen::Dashboard => {}
    }
}

fn handle_move_up(app: &mut App) {
    match app.screen {
        Screen::Transactions => {
            scroll_up(&mut app.transaction_index, &mut app.transaction_scroll)
        }
        Screen::Budgets => app.budget_form.focus_prev(),
        Screen::Insights => app.insight_scroll = app.insight_scroll.saturating_sub(1),
        Screen::Dashboard => {}
    }
}

fn handle_goto_top(app: &mut App) {
    match app.screen {
        Screen::Transactions => {
            scroll_to_top(&mut app.transaction_index, &mut app.transaction_scroll)
        }
        Screen::Budgets => app.budget_form.focus = 0,
        Screen::Insights => app.insight_scroll = 0,
        Screen::Dashboard => {}
    }
}

fn handle_goto_bottom(app: &mut App) {
    match app.screen {
        Screen::Transactions => {
            let page = app.transaction_page();
            scroll_to_bottom(
                &mut app.transaction_index,
                &mut app.transaction_scroll,
                app.ledger.transactions().len(),
                page,
            );
        }
        Screen::Budgets => {
            app.budget_form.focus = app.budget_form.inputs.len().saturating_sub(1)
        }
        Screen::Insights => app.insight_scroll = app.view.insights.len().saturating_sub(1),
        Screen::Dashboard => {}
    }
}

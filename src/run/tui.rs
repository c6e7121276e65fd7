use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::store::ExpenseStore;
use crate::ui::app::{App, FormField, InputMode};
use crate::ui::commands;
use crate::ui::render::table_rows_for;
use crate::ui::util::format_currency;

pub(crate) fn as_tui(store: &mut ExpenseStore) -> Result<()> {
    let mut app = App::new(crate::period::today());
    app.refresh(store);

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    tracing::info!(entries = store.expenses().len(), "screen started");

    let result = run_app(&mut terminal, &mut app, store);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        tracing::error!(error = ?e, "screen loop failed");
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    store: &mut ExpenseStore,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            app.visible_rows = table_rows_for(f.area().height);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.set_today(crate::period::today(), store);
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Normal => handle_normal_input(key, app, store)?,
                InputMode::Form => handle_form_input(key, app, store),
                InputMode::Command => handle_command_input(key, app, store)?,
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_normal_input(key: KeyEvent, app: &mut App, store: &mut ExpenseStore) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                app.move_down();
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            for _ in 0..app.visible_rows / 2 {
                app.move_up();
            }
        }
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => {
            app.input_mode = InputMode::Form;
        }
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') => app.goto_top(),
        KeyCode::Char('G') => app.goto_bottom(),
        KeyCode::Char('H') => commands::handle_command("prev-month", app, store)?,
        KeyCode::Char('L') => commands::handle_command("next-month", app, store)?,
        KeyCode::Char('D') | KeyCode::Char('x') => {
            commands::handle_command("delete", app, store)?;
        }
        KeyCode::Char('?') => {
            app.show_help = true;
        }
        KeyCode::Esc => app.status_message.clear(),
        _ => {}
    }
    Ok(())
}

fn handle_form_input(key: KeyEvent, app: &mut App, store: &mut ExpenseStore) {
    match key.code {
        KeyCode::Esc => {
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Enter => {
            let (amount, category) = (app.form.amount.clone(), app.form.category);
            if app.submit_form(store) {
                app.set_status(format!(
                    "Added {} {category}",
                    crate::models::parse_amount(&amount)
                        .map(format_currency)
                        .unwrap_or(amount)
                ));
            }
        }
        KeyCode::Tab => app.form_field = app.form_field.next(),
        KeyCode::BackTab => app.form_field = app.form_field.prev(),
        KeyCode::Up => app.form_step(1),
        KeyCode::Down => app.form_step(-1),
        KeyCode::PageUp => app.form_jump_month(-1),
        KeyCode::PageDown => app.form_jump_month(1),
        KeyCode::Left if app.form_field == FormField::Category => {
            app.form.category = app.form.category.prev();
        }
        KeyCode::Right if app.form_field == FormField::Category => {
            app.form.category = app.form.category.next();
        }
        KeyCode::Backspace => app.form_pop(),
        KeyCode::Char(c) => app.form_push(c),
        _ => {}
    }
}

fn handle_command_input(key: KeyEvent, app: &mut App, store: &mut ExpenseStore) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Normal;
            app.command_input.clear();
            commands::handle_command(&input, app, store)?;
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
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
    Ok(())
}

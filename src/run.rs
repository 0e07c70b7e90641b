use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use crate::api::ApiClient;
use crate::models::{ExpenseRecord, Summary};
use crate::ui::app::{App, FormField, InputMode, Screen};
use crate::ui::{commands, render, util};

/// Everything the event loop reacts to. Keyboard input and finished network
/// requests arrive over the same channel, so all state changes happen on one
/// task in arrival order.
pub(crate) enum Msg {
    Input(KeyEvent),
    ExpensesFetched {
        generation: u64,
        outcome: Result<Vec<ExpenseRecord>, String>,
    },
    SummaryFetched {
        generation: u64,
        outcome: Result<Summary, String>,
    },
    SubmitFinished {
        outcome: Result<(), String>,
    },
}

/// Spawns request tasks and routes their completions back into the loop.
pub(crate) struct Runtime {
    api: ApiClient,
    tx: mpsc::UnboundedSender<Msg>,
}

impl Runtime {
    pub(crate) fn new(api: ApiClient, tx: mpsc::UnboundedSender<Msg>) -> Self {
        Self { api, tx }
    }

    /// Refetches the expense collection for the active category filter.
    pub(crate) fn fetch_expenses(&self, app: &mut App) {
        let generation = app.expenses.begin_refresh();
        let category = app.filter.category;
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = api
                .list_expenses(category)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(Msg::ExpensesFetched { generation, outcome });
        });
    }

    /// Refetches the server summary for the selected month/year.
    pub(crate) fn fetch_summary(&self, app: &mut App) {
        let generation = app.summary.begin_refresh();
        let (month, year) = (app.filter.month, app.filter.year);
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = api
                .fetch_summary(month, year)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(Msg::SummaryFetched { generation, outcome });
        });
    }

    /// Submits whatever the form currently holds. No client-side amount
    /// validation; the server is the judge of the payload.
    pub(crate) fn submit(&self, app: &mut App) {
        if app.submitting {
            return;
        }
        app.submitting = true;
        app.set_status("Saving…");

        let payload = app.form.payload();
        let api = self.api.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = api
                .create_expense(&payload)
                .await
                .map_err(|e| e.to_string());
            let _ = tx.send(Msg::SubmitFinished { outcome });
        });
    }
}

pub(crate) async fn as_tui(api: ApiClient) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, rx) = mpsc::unbounded_channel();
    spawn_input_thread(tx.clone());

    let runtime = Runtime::new(api, tx);
    let result = run_app(&mut terminal, runtime, rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err}");
    }

    Ok(())
}

/// Blocking terminal reads live on a plain thread; the async side only ever
/// sees ready key events. The thread exits when the channel closes.
fn spawn_input_thread(tx: mpsc::UnboundedSender<Msg>) {
    std::thread::spawn(move || loop {
        match event::read() {
            Ok(Event::Key(key)) => {
                if tx.send(Msg::Input(key)).is_err() {
                    break;
                }
            }
            Ok(_) => {}
            Err(_) => break,
        }
    });
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    runtime: Runtime,
    mut rx: mpsc::UnboundedReceiver<Msg>,
) -> Result<()> {
    let mut app = App::new();

    // Both fetches go out together at startup.
    runtime.fetch_expenses(&mut app);
    runtime.fetch_summary(&mut app);

    while app.running {
        terminal.draw(|f| {
            app.visible_rows = (f.area().height.saturating_sub(6)) as usize;
            render::render(f, &app);
        })?;

        let Some(msg) = rx.recv().await else {
            break;
        };

        match msg {
            Msg::Input(key) => handle_key(key, &mut app, &runtime)?,
            Msg::ExpensesFetched { generation, outcome } => {
                app.expenses.apply(generation, outcome);
                app.clamp_expense_cursor();
            }
            Msg::SummaryFetched { generation, outcome } => {
                app.summary.apply(generation, outcome);
            }
            Msg::SubmitFinished { outcome } => {
                app.submitting = false;
                match outcome {
                    Ok(()) => {
                        // Sticky fields (category, date, payment method)
                        // survive; amount, notes and merchant reset.
                        app.form.clear_transient();
                        app.set_status("Expense saved");
                        runtime.fetch_expenses(&mut app);
                        runtime.fetch_summary(&mut app);
                    }
                    Err(_) => {
                        app.set_status("Failed to add expense");
                    }
                }
            }
        }
    }

    Ok(())
}

fn handle_key(key: KeyEvent, app: &mut App, runtime: &Runtime) -> Result<()> {
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_input(key, app, runtime)?,
        InputMode::Command => handle_command_input(key, app, runtime)?,
        InputMode::Editing => handle_editing_input(key, app),
    }

    Ok(())
}

fn handle_normal_input(key: KeyEvent, app: &mut App, runtime: &Runtime) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.screen == Screen::Add {
                runtime.submit(app);
            }
        }
        KeyCode::Char(':') => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('1') => switch_screen(app, Screen::Expenses),
        KeyCode::Char('2') => switch_screen(app, Screen::Summary),
        KeyCode::Char('3') => switch_screen(app, Screen::Add),
        KeyCode::Tab => cycle_screen(app, 1),
        KeyCode::BackTab => cycle_screen(app, -1),
        KeyCode::Char('j') | KeyCode::Down => match app.screen {
            Screen::Expenses => {
                let len = app.monthly_records().len();
                util::scroll_down(
                    &mut app.expense_index,
                    &mut app.expense_scroll,
                    len,
                    app.visible_rows,
                );
            }
            Screen::Add => {
                if app.form_field + 1 < FormField::all().len() {
                    app.form_field += 1;
                }
            }
            Screen::Summary => {}
        },
        KeyCode::Char('k') | KeyCode::Up => match app.screen {
            Screen::Expenses => {
                util::scroll_up(&mut app.expense_index, &mut app.expense_scroll);
            }
            Screen::Add => {
                app.form_field = app.form_field.saturating_sub(1);
            }
            Screen::Summary => {}
        },
        KeyCode::Char('g') => {
            if app.screen == Screen::Expenses {
                util::scroll_to_top(&mut app.expense_index, &mut app.expense_scroll);
            }
        }
        KeyCode::Char('G') => {
            if app.screen == Screen::Expenses {
                let len = app.monthly_records().len();
                util::scroll_to_bottom(
                    &mut app.expense_index,
                    &mut app.expense_scroll,
                    len,
                    app.visible_rows,
                );
            }
        }
        KeyCode::Char('H') => commands::handle_command("prev-month", app, runtime)?,
        KeyCode::Char('L') => commands::handle_command("next-month", app, runtime)?,
        KeyCode::Char('f') => {
            cycle_filter(app);
            app.reset_expense_cursor();
            runtime.fetch_expenses(app);
        }
        KeyCode::Char('r') => commands::handle_command("refresh", app, runtime)?,
        KeyCode::Char('+') | KeyCode::Char('-') if app.screen == Screen::Add => {
            if app.selected_field() == FormField::Category {
                app.form.category = if key.code == KeyCode::Char('+') {
                    app.form.category.next()
                } else {
                    app.form.category.prev()
                };
            }
        }
        KeyCode::Enter if app.screen == Screen::Add => {
            if app.selected_field() == FormField::Category {
                app.form.category = app.form.category.next();
            } else {
                app.input_mode = InputMode::Editing;
            }
        }
        KeyCode::Esc => app.set_status(""),
        _ => {}
    }

    Ok(())
}

fn handle_command_input(key: KeyEvent, app: &mut App, runtime: &Runtime) -> Result<()> {
    match key.code {
        KeyCode::Enter => {
            let input = std::mem::take(&mut app.command_input);
            app.input_mode = InputMode::Normal;
            commands::handle_command(&input, app, runtime)?;
        }
        KeyCode::Esc => {
            app.command_input.clear();
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Backspace => {
            if app.command_input.pop().is_none() {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Char(c) => app.command_input.push(c),
        _ => {}
    }

    Ok(())
}

fn handle_editing_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter => {
            if app.form_field + 1 < FormField::all().len() {
                app.form_field += 1;
                if app.field_value_mut().is_none() {
                    // Category is cycled, not typed.
                    app.input_mode = InputMode::Normal;
                }
            } else {
                app.input_mode = InputMode::Normal;
            }
        }
        KeyCode::Esc => app.input_mode = InputMode::Normal,
        KeyCode::Backspace => {
            if let Some(value) = app.field_value_mut() {
                value.pop();
            }
        }
        KeyCode::Char(c) => {
            if let Some(value) = app.field_value_mut() {
                value.push(c);
            }
        }
        _ => {}
    }
}

fn switch_screen(app: &mut App, screen: Screen) {
    // Switching tabs never refetches; every screen reads the caches as-is.
    app.screen = screen;
    app.set_status("");
}

fn cycle_screen(app: &mut App, step: isize) {
    let all = Screen::all();
    let current = all
        .iter()
        .position(|s| *s == app.screen)
        .unwrap_or_default();
    let next = (current as isize + step).rem_euclid(all.len() as isize) as usize;
    switch_screen(app, all[next]);
}

/// Hotkey filter cycle: All -> each category in order -> All.
fn cycle_filter(app: &mut App) {
    use crate::models::Category;

    let next = match app.filter.category {
        None => Some(Category::all()[0]),
        Some(current) => {
            let all = Category::all();
            let idx = all.iter().position(|c| *c == current).unwrap_or_default();
            if idx + 1 < all.len() {
                Some(all[idx + 1])
            } else {
                None
            }
        }
    };

    app.filter.category = next;
    match next {
        Some(category) => app.set_status(format!("Filter: {category}")),
        None => app.set_status("Filter cleared"),
    }
}

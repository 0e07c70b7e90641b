use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Screen};
use crate::models::Category;
use crate::run::Runtime;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &Runtime) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit SpendTUI", cmd_quit, r);
    register_command!("quit", "Quit SpendTUI", cmd_quit, r);
    register_command!("e", "Go to Expenses", cmd_expenses, r);
    register_command!("expenses", "Go to Expenses", cmd_expenses, r);
    register_command!("summary", "Go to Summary", cmd_summary, r);
    register_command!("a", "Go to Add Expense", cmd_add, r);
    register_command!("add", "Go to Add Expense", cmd_add, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("month", "Set month 1-12 (e.g. :month 6)", cmd_month, r);
    register_command!("m", "Set month 1-12 (e.g. :m 6)", cmd_month, r);
    register_command!("year", "Set year (e.g. :year 2024)", cmd_year, r);
    register_command!("y", "Set year (e.g. :y 2024)", cmd_year, r);
    register_command!("next-month", "Go to next month", cmd_next_month, r);
    register_command!("prev-month", "Go to previous month", cmd_prev_month, r);
    register_command!(
        "filter",
        "Filter by category (e.g. :filter Bills)",
        cmd_filter,
        r
    );
    register_command!("f", "Filter by category (e.g. :f Bills)", cmd_filter, r);
    register_command!("clear-filter", "Show all categories", cmd_clear_filter, r);
    register_command!("cf", "Show all categories", cmd_clear_filter, r);
    register_command!("refresh", "Refetch expenses and summary", cmd_refresh, r);
    register_command!("r", "Refetch expenses and summary", cmd_refresh, r);
    register_command!("submit", "Submit the entry form", cmd_submit, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, runtime: &Runtime) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, runtime)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 2) // skip short aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _runtime: &Runtime) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_expenses(_args: &str, app: &mut App, _runtime: &Runtime) -> anyhow::Result<()> {
    app.screen = Screen::Expenses;
    Ok(())
}

fn cmd_summary(_args: &str, app: &mut App, _runtime: &Runtime) -> anyhow::Result<()> {
    app.screen = Screen::Summary;
    Ok(())
}

fn cmd_add(_args: &str, app: &mut App, _runtime: &Runtime) -> anyhow::Result<()> {
    app.screen = Screen::Add;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _runtime: &Runtime) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

/// Month/year changes refetch the summary only; the monthly list re-derives
/// locally from the cached collection.
fn cmd_month(args: &str, app: &mut App, runtime: &Runtime) -> anyhow::Result<()> {
    match args.parse::<u32>() {
        Ok(month) if (1..=12).contains(&month) => {
            app.filter.month = month;
            app.reset_expense_cursor();
            runtime.fetch_summary(app);
            app.set_status(format!("Month: {}", app.filter.month_key()));
        }
        _ => app.set_status("Usage: :month <1-12>"),
    }
    Ok(())
}

fn cmd_year(args: &str, app: &mut App, runtime: &Runtime) -> anyhow::Result<()> {
    match args.parse::<i32>() {
        Ok(year) => {
            app.filter.year = year;
            app.reset_expense_cursor();
            runtime.fetch_summary(app);
            app.set_status(format!("Month: {}", app.filter.month_key()));
        }
        Err(_) => app.set_status("Usage: :year <year>"),
    }
    Ok(())
}

fn cmd_next_month(_args: &str, app: &mut App, runtime: &Runtime) -> anyhow::Result<()> {
    app.filter.next_month();
    app.reset_expense_cursor();
    runtime.fetch_summary(app);
    app.set_status(format!("Month: {}", app.filter.month_key()));
    Ok(())
}

fn cmd_prev_month(_args: &str, app: &mut App, runtime: &Runtime) -> anyhow::Result<()> {
    app.filter.prev_month();
    app.reset_expense_cursor();
    runtime.fetch_summary(app);
    app.set_status(format!("Month: {}", app.filter.month_key()));
    Ok(())
}

/// Category changes refetch the expense collection; the summary stays
/// whole-account and is not touched.
fn cmd_filter(args: &str, app: &mut App, runtime: &Runtime) -> anyhow::Result<()> {
    match Category::parse(args) {
        Some(category) => {
            app.filter.category = Some(category);
            app.reset_expense_cursor();
            runtime.fetch_expenses(app);
            app.set_status(format!("Filter: {category}"));
        }
        None => {
            let labels: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
            app.set_status(format!("Unknown category. One of: {}", labels.join(", ")));
        }
    }
    Ok(())
}

fn cmd_clear_filter(_args: &str, app: &mut App, runtime: &Runtime) -> anyhow::Result<()> {
    if app.filter.category.take().is_some() {
        app.reset_expense_cursor();
        runtime.fetch_expenses(app);
    }
    app.set_status("Filter cleared");
    Ok(())
}

fn cmd_refresh(_args: &str, app: &mut App, runtime: &Runtime) -> anyhow::Result<()> {
    runtime.fetch_expenses(app);
    runtime.fetch_summary(app);
    app.set_status("Refreshing…");
    Ok(())
}

fn cmd_submit(_args: &str, app: &mut App, runtime: &Runtime) -> anyhow::Result<()> {
    runtime.submit(app);
    Ok(())
}

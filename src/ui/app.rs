use chrono::Local;

use crate::models::{ExpenseForm, ExpenseRecord, FilterState};
use crate::store::{self, RecordStore, SummaryCell};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Expenses,
    Summary,
    Add,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Expenses, Self::Summary, Self::Add]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Expenses => write!(f, "Expenses"),
            Self::Summary => write!(f, "Summary"),
            Self::Add => write!(f, "Add Expense"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "EDIT"),
        }
    }
}

/// Form fields in display order; the cursor on the Add screen walks these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Amount,
    Category,
    Date,
    PaymentMethod,
    Merchant,
    Notes,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[
            Self::Amount,
            Self::Category,
            Self::Date,
            Self::PaymentMethod,
            Self::Merchant,
            Self::Notes,
        ]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Amount => "Amount",
            Self::Category => "Category",
            Self::Date => "Date",
            Self::PaymentMethod => "Payment method",
            Self::Merchant => "Merchant",
            Self::Notes => "Notes",
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    /// Category scope + selected month/year.
    pub(crate) filter: FilterState,
    /// Cached expense collection and its fetch lifecycle.
    pub(crate) expenses: RecordStore,
    /// Server-computed monthly summary.
    pub(crate) summary: SummaryCell,

    pub(crate) form: ExpenseForm,
    pub(crate) form_field: usize,
    pub(crate) submitting: bool,

    pub(crate) expense_index: usize,
    pub(crate) expense_scroll: usize,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new() -> Self {
        let today = Local::now().format("%Y-%m-%d").to_string();

        Self {
            running: true,
            screen: Screen::Expenses,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            filter: FilterState::current_month(),
            expenses: RecordStore::default(),
            summary: SummaryCell::default(),

            form: ExpenseForm::new(today),
            form_field: 0,
            submitting: false,

            expense_index: 0,
            expense_scroll: 0,

            visible_rows: 20,
        }
    }

    /// Records belonging to the selected month, derived on demand from the
    /// cached collection. Pure with respect to its inputs; may run against a
    /// collection that is momentarily stale after a category change.
    pub(crate) fn monthly_records(&self) -> Vec<&ExpenseRecord> {
        store::monthly_subset(self.expenses.records(), self.filter.month_key())
    }

    /// Locally computed total for the selected month. Independent of the
    /// server summary.
    pub(crate) fn monthly_total(&self) -> f64 {
        store::monthly_total(&self.monthly_records())
    }

    pub(crate) fn reset_expense_cursor(&mut self) {
        self.expense_index = 0;
        self.expense_scroll = 0;
    }

    pub(crate) fn clamp_expense_cursor(&mut self) {
        let len = self.monthly_records().len();
        if self.expense_index >= len {
            self.expense_index = len.saturating_sub(1);
        }
        if self.expense_scroll > self.expense_index {
            self.expense_scroll = self.expense_index;
        }
    }

    pub(crate) fn selected_field(&self) -> FormField {
        let all = FormField::all();
        all[self.form_field.min(all.len() - 1)]
    }

    /// Mutable text of the selected form field. None for Category, which is
    /// cycled rather than typed.
    pub(crate) fn field_value_mut(&mut self) -> Option<&mut String> {
        match self.selected_field() {
            FormField::Amount => Some(&mut self.form.amount),
            FormField::Category => None,
            FormField::Date => Some(&mut self.form.date),
            FormField::PaymentMethod => Some(&mut self.form.payment_method),
            FormField::Merchant => Some(&mut self.form.merchant),
            FormField::Notes => Some(&mut self.form.notes),
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

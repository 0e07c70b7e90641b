use std::sync::LazyLock;

use regex::Regex;

use super::category::Category;
use super::expense::NewExpense;

#[allow(clippy::unwrap_used)] // fixed pattern
static AMOUNT_JUNK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^0-9.]").unwrap());

#[allow(clippy::unwrap_used)] // fixed pattern
static DOT_GROUPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,3}(\.[0-9]{3})+$").unwrap());

/// Entry form state. Amount, notes and merchant are transient (cleared after
/// a successful submit); category, date and payment method are sticky and
/// survive into the next entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseForm {
    pub amount: String,
    pub category: Category,
    pub date: String,
    pub payment_method: String,
    pub merchant: String,
    pub notes: String,
}

impl ExpenseForm {
    pub fn new(today: String) -> Self {
        Self {
            amount: String::new(),
            category: Category::all()[0],
            date: today,
            payment_method: String::new(),
            merchant: String::new(),
            notes: String::new(),
        }
    }

    /// Normalized amount. NaN when nothing parseable remains; submission
    /// does not reject that (the server then receives a null amount).
    pub fn amount_value(&self) -> f64 {
        normalize_amount(&self.amount)
    }

    pub fn payload(&self) -> NewExpense {
        NewExpense {
            amount: self.amount_value(),
            category: self.category.as_str().to_string(),
            date: self.date.clone(),
            notes: opt_field(&self.notes),
            payment_method: opt_field(&self.payment_method),
            merchant: opt_field(&self.merchant),
        }
    }

    pub fn clear_transient(&mut self) {
        self.amount.clear();
        self.notes.clear();
        self.merchant.clear();
    }
}

/// Strips everything that is not a digit or `.`, then parses. Dots acting as
/// rupiah thousand grouping are dropped first, so `"Rp12.500"` and `"12500"`
/// both come out as `12500`, while `"12.5"` stays a plain decimal.
pub fn normalize_amount(raw: &str) -> f64 {
    let stripped = AMOUNT_JUNK.replace_all(raw, "");
    if DOT_GROUPED.is_match(&stripped) {
        return stripped.replace('.', "").parse().unwrap_or(f64::NAN);
    }
    stripped.parse().unwrap_or(f64::NAN)
}

/// Empty or whitespace-only input means "not provided", not empty string.
fn opt_field(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

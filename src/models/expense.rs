use serde::{Deserialize, Serialize};

use super::filter::MonthKey;

/// The `amount` field as it arrives off the wire. The server normally sends
/// a JSON number, but string amounts occur; a value that fails to parse
/// counts as zero in totals while the record stays visible in the list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
}

impl Default for RawAmount {
    fn default() -> Self {
        Self::Number(0.0)
    }
}

impl RawAmount {
    /// The amount as a finite number, or None when unparsable.
    pub fn parsed(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

/// One expense as held by the server. All fields default so a sparse or
/// oddly-typed record deserializes instead of poisoning the whole list.
#[derive(Debug, Clone, Deserialize)]
pub struct ExpenseRecord {
    /// Server-assigned, opaque. Kept as raw JSON since the client never
    /// interprets it.
    #[serde(default)]
    pub id: serde_json::Value,
    #[serde(default)]
    pub amount: RawAmount,
    #[serde(default)]
    pub category: String,
    /// ISO-8601 calendar date, no time-of-day.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub merchant: Option<String>,
}

impl ExpenseRecord {
    pub fn amount_value(&self) -> Option<f64> {
        self.amount.parsed()
    }

    /// Calendar-month key of this record's date; None when the date string
    /// is not a valid calendar date.
    pub fn month_key(&self) -> Option<MonthKey> {
        MonthKey::from_iso(&self.date)
    }
}

/// Creation payload for `POST /api/expenses`. Optional fields are skipped
/// when absent so the server applies its own defaulting, never sent as `""`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewExpense {
    pub amount: f64,
    pub category: String,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,
}

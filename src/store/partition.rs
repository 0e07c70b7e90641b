use crate::models::{ExpenseRecord, MonthKey};

/// Records whose date falls in the target month, in fetch order. A record
/// with an unparsable date never matches any key.
pub(crate) fn monthly_subset(records: &[ExpenseRecord], key: MonthKey) -> Vec<&ExpenseRecord> {
    records
        .iter()
        .filter(|r| r.month_key() == Some(key))
        .collect()
}

/// Sum of the parsed amounts over a subset. An unparsable amount contributes
/// zero; the record itself stays in the subset for display.
pub(crate) fn monthly_total(subset: &[&ExpenseRecord]) -> f64 {
    subset.iter().map(|r| r.amount_value().unwrap_or(0.0)).sum()
}

mod category;
mod expense;
mod filter;
mod form;
mod summary;

pub use category::Category;
pub use expense::{ExpenseRecord, NewExpense, RawAmount};
pub use filter::{FilterState, MonthKey};
pub use form::{normalize_amount, ExpenseForm};
pub use summary::Summary;

#[cfg(test)]
mod tests;

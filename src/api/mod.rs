use anyhow::{anyhow, Result};
use reqwest::Client;

use crate::models::{Category, ExpenseRecord, NewExpense, Summary};

/// Thin client over the expense API. Cheap to clone; each request task gets
/// its own handle.
#[derive(Debug, Clone)]
pub(crate) struct ApiClient {
    http: Client,
    base: String,
}

impl ApiClient {
    pub(crate) fn new(base: impl Into<String>) -> Result<Self> {
        let base = base.into().trim_end_matches('/').to_string();
        Ok(Self {
            http: Client::builder().build()?,
            base,
        })
    }

    /// The expense collection, optionally scoped by category. The query
    /// parameter is omitted entirely when no filter is active, never sent
    /// as an empty string.
    pub(crate) async fn list_expenses(
        &self,
        category: Option<Category>,
    ) -> Result<Vec<ExpenseRecord>> {
        let url = format!("{}/api/expenses", self.base);
        let mut request = self.http.get(&url);
        if let Some(category) = category {
            request = request.query(&[("category", category.as_str())]);
        }
        let body: serde_json::Value = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(parse_items(&body))
    }

    /// Whole-account aggregation for one calendar month. Never scoped by the
    /// category filter.
    pub(crate) async fn fetch_summary(&self, month: u32, year: i32) -> Result<Summary> {
        let url = format!("{}/api/summary", self.base);
        let summary = self
            .http
            .get(&url)
            .query(&[("month", month.to_string()), ("year", year.to_string())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(summary)
    }

    /// Creates an expense. Any 2xx counts as success and the body is
    /// ignored; on failure the response body is captured as the error
    /// detail (callers show a generic message, not this text).
    pub(crate) async fn create_expense(&self, expense: &NewExpense) -> Result<()> {
        let url = format!("{}/api/expenses", self.base);
        let response = self.http.post(&url).json(expense).send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(anyhow!("create expense failed ({status}): {detail}"));
        }
        Ok(())
    }
}

/// The list endpoint wraps records in `{ items: [...] }`. An absent or
/// malformed `items` field reads as an empty collection.
fn parse_items(body: &serde_json::Value) -> Vec<ExpenseRecord> {
    match body.get("items") {
        Some(items) => serde_json::from_value(items.clone()).unwrap_or_default(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests;

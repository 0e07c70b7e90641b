//! Client-held caches and the fetch lifecycle around them.
//!
//! Every fetch target carries a monotonically increasing generation token.
//! A completion is applied only if it belongs to the latest issued request,
//! so a slow response can never overwrite newer data.

mod partition;

pub(crate) use partition::{monthly_subset, monthly_total};

use crate::models::{ExpenseRecord, Summary};

/// Cache of the most recently fetched expense collection, scoped by the
/// active category filter but never by month (the partitioner handles that
/// locally).
#[derive(Debug, Default)]
pub(crate) struct RecordStore {
    records: Vec<ExpenseRecord>,
    pub(crate) loading: bool,
    pub(crate) error: Option<String>,
    generation: u64,
}

impl RecordStore {
    /// Marks a refresh in flight and returns its generation token.
    pub(crate) fn begin_refresh(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    /// Applies a finished refresh. Stale generations are dropped outright.
    /// A failure keeps the previously held collection, no partial overwrite.
    pub(crate) fn apply(&mut self, generation: u64, outcome: Result<Vec<ExpenseRecord>, String>) {
        if generation != self.generation {
            return;
        }
        self.loading = false;
        match outcome {
            Ok(records) => self.records = records,
            Err(message) => self.error = Some(message),
        }
    }

    pub(crate) fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }
}

/// Holder for the server-computed monthly summary. Failure policy is silent
/// by contract: the previous summary stays on screen and no error surfaces.
#[derive(Debug, Default)]
pub(crate) struct SummaryCell {
    summary: Summary,
    generation: u64,
}

impl SummaryCell {
    pub(crate) fn begin_refresh(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub(crate) fn apply(&mut self, generation: u64, outcome: Result<Summary, String>) {
        if generation != self.generation {
            return;
        }
        if let Ok(summary) = outcome {
            self.summary = summary;
        }
    }

    pub(crate) fn view(&self) -> &Summary {
        &self.summary
    }
}

#[cfg(test)]
mod tests;

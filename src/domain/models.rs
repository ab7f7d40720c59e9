use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

/// Maximum number of calculations kept in the history.
pub const HISTORY_CAPACITY: usize = 20;

/// A successful evaluation: the finite value and its display string.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub value: f64,
    pub display: String,
}

/// One past calculation as it was typed and as it was displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub expression: String,
    pub result: String,
}

impl LedgerEntry {
    pub fn new(expression: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            result: result.into(),
        }
    }
}

/// Bounded history of calculations, newest first.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: VecDeque<LedgerEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an entry at the front, evicting the oldest past capacity.
    pub fn record(&mut self, expression: &str, result: &str) {
        self.entries.push_front(LedgerEntry::new(expression, result));
        while self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_back();
        }
    }

    pub fn snapshot(&self) -> Vec<LedgerEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn clear(&mut self) {
        self.entries = VecDeque::new();
    }

    pub fn get(&self, index: usize) -> Option<&LedgerEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The process-wide history, shared between request handlers.
///
/// Every read and write goes through one mutex over the whole [`Ledger`].
///
/// # Examples
///
/// ```
/// use tcalc::domain::HistoryLedger;
///
/// let history = HistoryLedger::new();
/// history.record("2+2", "4");
/// assert_eq!(history.snapshot()[0].result, "4");
///
/// history.clear();
/// assert!(history.snapshot().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct HistoryLedger {
    inner: Mutex<Ledger>,
}

impl HistoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, expression: &str, result: &str) {
        self.lock().record(expression, result);
    }

    pub fn snapshot(&self) -> Vec<LedgerEntry> {
        self.lock().snapshot()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // Each ledger operation is a single step, so a panic elsewhere cannot
    // leave it half-updated and a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Ledger> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

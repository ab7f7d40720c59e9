//! Calculator service shared by every front end.
//!
//! The service owns a handle to the process-wide [`HistoryLedger`] and turns
//! each request into a serializable response: evaluate, record on success,
//! report the cause on failure.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::domain::{evaluate, EvalErrorKind, HistoryLedger, LedgerEntry};

/// Display text used in place of a result when evaluation fails.
pub const ERROR_MARKER: &str = "Error";

/// Response to a calculation request.
///
/// On success `history` carries the ledger snapshot; on failure `result` is
/// [`ERROR_MARKER`] and `error` carries the human-readable cause.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResponse {
    pub result: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<EvalErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<LedgerEntry>>,
}

impl CalculationResponse {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Response to a history read or clear request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<LedgerEntry>,
}

/// Entry point for calculation and history requests.
///
/// # Examples
///
/// ```
/// use tcalc::application::CalculatorService;
///
/// let service = CalculatorService::default();
/// let response = service.calculate("2×3");
/// assert_eq!(response.result, "6");
/// assert_eq!(service.history().history.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorService {
    ledger: Arc<HistoryLedger>,
}

impl CalculatorService {
    pub fn new(ledger: Arc<HistoryLedger>) -> Self {
        Self { ledger }
    }

    pub fn ledger(&self) -> &Arc<HistoryLedger> {
        &self.ledger
    }

    /// Evaluates `expression` and records it in the history on success.
    pub fn calculate(&self, expression: &str) -> CalculationResponse {
        match evaluate(expression) {
            Ok(evaluation) => {
                self.ledger.record(expression, &evaluation.display);
                info!(expression, result = %evaluation.display, "calculation recorded");
                CalculationResponse {
                    result: evaluation.display,
                    error: None,
                    kind: None,
                    history: Some(self.ledger.snapshot()),
                }
            }
            Err(err) => {
                warn!(expression, kind = ?err.kind(), "calculation rejected: {}", err);
                CalculationResponse {
                    result: ERROR_MARKER.to_string(),
                    error: Some(err.to_string()),
                    kind: Some(err.kind()),
                    history: None,
                }
            }
        }
    }

    pub fn history(&self) -> HistoryResponse {
        HistoryResponse {
            history: self.ledger.snapshot(),
        }
    }

    pub fn clear_history(&self) -> HistoryResponse {
        self.ledger.clear();
        info!("history cleared");
        self.history()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::HISTORY_CAPACITY;

    #[test]
    fn test_successful_calculation_records_history() {
        let service = CalculatorService::default();
        let response = service.calculate("√(16)");

        assert!(response.is_success());
        assert_eq!(response.result, "4");
        assert_eq!(
            response.history,
            Some(vec![LedgerEntry::new("√(16)", "4")])
        );
    }

    #[test]
    fn test_failed_calculation_leaves_history_untouched() {
        let service = CalculatorService::default();
        service.calculate("1+1");

        let response = service.calculate("1/0");
        assert!(!response.is_success());
        assert_eq!(response.result, ERROR_MARKER);
        assert_eq!(response.kind, Some(EvalErrorKind::MathDomainError));
        assert!(response.error.unwrap().contains("division by zero"));
        assert!(response.history.is_none());

        assert_eq!(service.history().history, vec![LedgerEntry::new("1+1", "2")]);
    }

    #[test]
    fn test_empty_expression_reported() {
        let service = CalculatorService::default();
        let response = service.calculate("");
        assert_eq!(response.result, ERROR_MARKER);
        assert_eq!(response.error.as_deref(), Some("Empty expression"));
        assert!(service.history().history.is_empty());
    }

    #[test]
    fn test_history_bounded_and_newest_first() {
        let service = CalculatorService::default();
        for i in 1..=25 {
            service.calculate(&format!("{i}×1"));
        }

        let history = service.history().history;
        assert_eq!(history.len(), HISTORY_CAPACITY);
        assert_eq!(history[0], LedgerEntry::new("25×1", "25"));
        assert_eq!(history[HISTORY_CAPACITY - 1], LedgerEntry::new("6×1", "6"));
    }

    #[test]
    fn test_clear_history() {
        let service = CalculatorService::default();
        service.calculate("1+1");
        service.calculate("2+2");

        assert!(service.clear_history().history.is_empty());
        assert!(service.history().history.is_empty());
    }

    #[test]
    fn test_services_share_one_ledger() {
        let ledger = Arc::new(HistoryLedger::new());
        let first = CalculatorService::new(Arc::clone(&ledger));
        let second = CalculatorService::new(Arc::clone(&ledger));

        first.calculate("1+1");
        second.calculate("2+2");
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_response_json_shape() {
        let service = CalculatorService::default();

        let ok = serde_json::to_value(service.calculate("2^10")).unwrap();
        assert_eq!(
            ok,
            serde_json::json!({
                "result": "1024",
                "history": [{"expression": "2^10", "result": "1024"}]
            })
        );

        let err = serde_json::to_value(service.calculate("2+*3")).unwrap();
        assert_eq!(err["result"], "Error");
        assert_eq!(err["kind"], "syntax_error");
        assert!(err.get("history").is_none());
    }
}

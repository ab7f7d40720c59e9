//! Calculation pipeline for keypad expressions.
//!
//! Raw keypad text goes through four stages: the empty and length checks,
//! glyph normalization, restricted parsing and evaluation, and finally
//! rounding for display. The pipeline is a pure function; recording the
//! result in the history is left to the caller.

use tracing::debug;

use super::errors::{EvalError, EvalResult};
use super::format::format_result;
use super::models::Evaluation;
use super::normalize::normalize;
use super::parser::{ExpressionEvaluator, Parser};

/// Longest expression accepted, in characters.
pub const MAX_EXPRESSION_LEN: usize = 1024;

/// Evaluates a calculator expression.
///
/// Supported features:
/// - Arithmetic operators: `+`, `-`/`−`, `*`/`×`, `/`/`÷`, `^`/`**`
/// - Postfix percent: `50%` is `0.5`
/// - Functions: `sin(`, `cos(`, `tan(` (radians), `log(` (base 10), `ln(`, `√(`
/// - Constants: `π`/`pi`, `e`
///
/// # Errors
///
/// Returns [`EvalError::EmptyExpression`] for blank input,
/// [`EvalError::UnsupportedConstruct`] for names or symbols outside the
/// calculator language, [`EvalError::SyntaxError`] for malformed input,
/// [`EvalError::MathDomainError`] for undefined or non-finite results and
/// [`EvalError::InputTooComplex`] for oversized or overly nested input.
///
/// # Examples
///
/// ```
/// use tcalc::domain::{evaluate, EvalError};
///
/// assert_eq!(evaluate("2^10").unwrap().display, "1024");
/// assert_eq!(evaluate("50%").unwrap().display, "0.5");
/// assert!(matches!(evaluate("1/0"), Err(EvalError::MathDomainError(_))));
/// ```
pub fn evaluate(raw: &str) -> EvalResult<Evaluation> {
    if raw.trim().is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    let length = raw.chars().count();
    if length > MAX_EXPRESSION_LEN {
        return Err(EvalError::InputTooComplex(format!(
            "expression is {} characters long, the limit is {}",
            length, MAX_EXPRESSION_LEN
        )));
    }

    let canonical = normalize(raw);
    debug!(raw, canonical = %canonical, "normalized expression");

    let mut parser = Parser::new(&canonical)?;
    let ast = parser.parse()?;
    let value = ExpressionEvaluator::new().evaluate(&ast)?;

    let shown = format_result(value);
    debug!(value, display = %shown, "evaluated expression");

    Ok(Evaluation {
        value,
        display: shown,
    })
}

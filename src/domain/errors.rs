use serde::Serialize;

/// Errors produced while turning expression text into a value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("Empty expression")]
    EmptyExpression,

    #[error("Unsupported construct: {0}")]
    UnsupportedConstruct(String),

    #[error("Math domain error: {0}")]
    MathDomainError(String),

    #[error("Syntax error: {0}")]
    SyntaxError(String),

    #[error("Input too complex: {0}")]
    InputTooComplex(String),
}

/// Fieldless discriminant of [`EvalError`], used in responses and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalErrorKind {
    EmptyExpression,
    UnsupportedConstruct,
    MathDomainError,
    SyntaxError,
    InputTooComplex,
}

impl EvalError {
    pub fn kind(&self) -> EvalErrorKind {
        match self {
            EvalError::EmptyExpression => EvalErrorKind::EmptyExpression,
            EvalError::UnsupportedConstruct(_) => EvalErrorKind::UnsupportedConstruct,
            EvalError::MathDomainError(_) => EvalErrorKind::MathDomainError,
            EvalError::SyntaxError(_) => EvalErrorKind::SyntaxError,
            EvalError::InputTooComplex(_) => EvalErrorKind::InputTooComplex,
        }
    }

    pub(crate) fn syntax(msg: impl Into<String>) -> Self {
        EvalError::SyntaxError(msg.into())
    }

    pub(crate) fn unsupported(msg: impl Into<String>) -> Self {
        EvalError::UnsupportedConstruct(msg.into())
    }

    pub(crate) fn domain(msg: impl Into<String>) -> Self {
        EvalError::MathDomainError(msg.into())
    }
}

pub type EvalResult<T> = Result<T, EvalError>;

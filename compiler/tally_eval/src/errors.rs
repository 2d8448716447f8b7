//! Evaluation errors.

use tally_diagnostic::{Diagnostic, ErrorCode};
use tally_ir::Span;

/// Evaluation failure. Fatal to the whole evaluation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The program holds a statement form the evaluator cannot classify.
    #[error("unknown statement kind `{kind}`")]
    UnknownStatementKind { kind: &'static str, span: Span },
}

impl EvalError {
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::UnknownStatementKind { .. } => ErrorCode::E6001,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            EvalError::UnknownStatementKind { span, .. } => *span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(self.span(), "cannot be evaluated")
    }
}

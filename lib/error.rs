use thiserror::Error;

use crate::position::Range;

/// Raised by the parser. The first structural mismatch aborts the whole parse.
#[derive(Debug, PartialEq, Clone, Error)]
pub enum SyntaxError {
    #[error("bad number literal at {range}: expected {expected}, received `{received}`")]
    BadNumberLiteral {
        received: String,
        expected: String,
        range: Range,
    },
    /// Only a hand-built `TokenSource` can produce a boolean token the
    /// lexer would not.
    #[error("bad boolean literal at {range}: expected {expected}, received `{received}`")]
    BadBooleanLiteral {
        received: String,
        expected: String,
        range: Range,
    },
    #[error("bad prefix operator at {range}: expected {expected}, received `{received}`")]
    BadPrefix {
        received: String,
        expected: String,
        range: Range,
    },
    /// Raised when the binding-power table admits a lexeme that has no
    /// `InfixOperator`. The two sets are kept in step, so the lexer's output
    /// never triggers it.
    #[error("bad infix operator at {range}: expected {expected}, received `{received}`")]
    BadInfix {
        received: String,
        expected: String,
        range: Range,
    },
    #[error("bad expression at {range}: expected {expected}, received {received}")]
    BadExpression {
        received: String,
        expected: String,
        range: Range,
    },
    #[error("bad group delimiter at {range}: expected {expected}, received `{received}`")]
    BadGroupDelimiter {
        received: String,
        expected: String,
        range: Range,
    },
    #[error("bad block delimiter at {range}: expected {expected}, received `{received}`")]
    BadBlockDelimiter {
        received: String,
        expected: String,
        range: Range,
    },
    #[error("bad list delimiter at {range}: expected {expected}, received `{received}`")]
    BadListDelimiter {
        received: String,
        expected: String,
        range: Range,
    },
    #[error("bad assignment target at {range}: expected {expected}, received `{received}`")]
    BadAssignmentTarget {
        received: String,
        expected: String,
        range: Range,
    },
    #[error("bad identifier at {range}: expected {expected}, received `{received}`")]
    BadIdentifier {
        received: String,
        expected: String,
        range: Range,
    },
    #[error("bad separator at {range}: expected {expected}, received `{received}`")]
    BadSeparator {
        received: String,
        expected: String,
        range: Range,
    },
    #[error("bad keyword at {range}: expected {expected}, received `{received}`")]
    BadKeyword {
        received: String,
        expected: String,
        range: Range,
    },
}

impl SyntaxError {
    pub fn range(&self) -> Range {
        match self {
            SyntaxError::BadNumberLiteral { range, .. }
            | SyntaxError::BadBooleanLiteral { range, .. }
            | SyntaxError::BadPrefix { range, .. }
            | SyntaxError::BadInfix { range, .. }
            | SyntaxError::BadExpression { range, .. }
            | SyntaxError::BadGroupDelimiter { range, .. }
            | SyntaxError::BadBlockDelimiter { range, .. }
            | SyntaxError::BadListDelimiter { range, .. }
            | SyntaxError::BadAssignmentTarget { range, .. }
            | SyntaxError::BadIdentifier { range, .. }
            | SyntaxError::BadSeparator { range, .. }
            | SyntaxError::BadKeyword { range, .. } => *range,
        }
    }
}

/// Raised by the evaluator. The first failure aborts the whole evaluation.
#[derive(Debug, PartialEq, Clone, Error)]
pub enum EvalError {
    #[error("return outside of a function at {range}: expected {expected}, received `{received}`")]
    TopLevelReturn {
        received: String,
        expected: String,
        range: Range,
    },
    #[error("bad predicate at {range}: expected {expected}, received {received}")]
    BadPredicate {
        received: String,
        expected: String,
        range: Range,
    },
    #[error("unbound identifier at {range}: expected {expected}, received `{received}`")]
    BadIdentifier {
        received: String,
        expected: String,
        range: Range,
    },
    #[error("bad operand at {range}: expected {expected}, received {received}")]
    BadOperand {
        received: String,
        expected: String,
        range: Range,
    },
    #[error("bad call target at {range}: expected {expected}, received {received}")]
    BadCallTarget {
        received: String,
        expected: String,
        range: Range,
    },
    #[error("bad builtin argument at {range}: expected {expected}, received {received}")]
    BadBuiltinArgument {
        received: String,
        expected: String,
        range: Range,
    },
    #[error("bad table key at {range}: expected {expected}, received {received}")]
    BadTableKey {
        received: String,
        expected: String,
        range: Range,
    },
}

impl EvalError {
    pub fn range(&self) -> Range {
        match self {
            EvalError::TopLevelReturn { range, .. }
            | EvalError::BadPredicate { range, .. }
            | EvalError::BadIdentifier { range, .. }
            | EvalError::BadOperand { range, .. }
            | EvalError::BadCallTarget { range, .. }
            | EvalError::BadBuiltinArgument { range, .. }
            | EvalError::BadTableKey { range, .. } => *range,
        }
    }
}

#[derive(Debug, PartialEq, Clone, Error)]
pub enum Error {
    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),
    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),
}

impl Error {
    pub fn range(&self) -> Range {
        match self {
            Error::Syntax(error) => error.range(),
            Error::Eval(error) => error.range(),
        }
    }
}

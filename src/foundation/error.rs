/// Convenience result type used across plotexpr.
pub type PlotexprResult<T> = Result<T, PlotexprError>;

/// Top-level error taxonomy used by the compiler pipeline.
///
/// Every variant renders to a short, stable, user-displayable message; the
/// messages are the API, so callers can show them next to the offending
/// expression without further sanitization.
#[derive(thiserror::Error, Debug)]
pub enum PlotexprError {
    /// Input was empty after normalization; the idle state, not a hard failure.
    #[error("Enter expression")]
    EmptyInput,

    /// The scanner or parser met a token it cannot place.
    #[error("Unexpected token \"{0}\"")]
    UnexpectedToken(String),

    /// The token stream ended in the middle of an expression.
    #[error("Unexpected end of input")]
    UnexpectedEnd,

    /// An identifier matched no function, constant, or declared variable.
    #[error("Unknown identifier \"{0}\"")]
    UnknownIdentifier(String),

    /// A call's argument count fell outside the function's arity bounds.
    #[error("{name} expects {expected} args")]
    Arity {
        /// Function name as it appears in the table.
        name: String,
        /// Rendered arity range: `"N"`, `"N-M"`, or `"at least N"`.
        expected: String,
    },

    /// A variable was missing from the evaluation scope.
    ///
    /// Defensive: unreachable when the scope keys match the `variables` list
    /// the expression was compiled with.
    #[error("Variable \"{0}\" is not defined")]
    UndefinedVariable(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PlotexprError {
    /// Build a [`PlotexprError::UnexpectedToken`] value.
    pub fn unexpected_token(token: impl std::fmt::Display) -> Self {
        Self::UnexpectedToken(token.to_string())
    }

    /// Build a [`PlotexprError::UnknownIdentifier`] value.
    pub fn unknown_identifier(name: impl Into<String>) -> Self {
        Self::UnknownIdentifier(name.into())
    }

    /// Build a [`PlotexprError::UndefinedVariable`] value.
    pub fn undefined_variable(name: impl Into<String>) -> Self {
        Self::UndefinedVariable(name.into())
    }

    /// Build a [`PlotexprError::Arity`] value from inclusive bounds.
    ///
    /// `max == usize::MAX` means unbounded and renders as `"at least N"`.
    pub fn arity(name: impl Into<String>, min: usize, max: usize) -> Self {
        let expected = if max == usize::MAX {
            format!("at least {min}")
        } else if min == max {
            format!("{min}")
        } else {
            format!("{min}-{max}")
        };
        Self::Arity {
            name: name.into(),
            expected,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

#[derive(Debug)]
/// Represents all errors that can occur during evaluation and table
/// assembly.
pub enum EvalError {
    /// The formula references a variable the assignment does not bind.
    UnboundVariable {
        /// The name of the variable.
        name: char,
    },
    /// The formula uses more distinct variables than a truth table can
    /// reasonably enumerate (the table grows as 2ⁿ).
    TooManyVariables {
        /// The number of distinct variables found.
        count: usize,
        /// The maximum supported number of distinct variables.
        limit: usize,
    },
    /// An internal invariant was violated. The operator enums are closed
    /// and matched exhaustively, so the current pipeline never produces
    /// this; it is kept so callers can match every kind the error
    /// taxonomy defines.
    Internal {
        /// Details about the violated invariant.
        reason: String,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { name } => {
                write!(f, "Variable '{name}' is not bound by the assignment.")
            },
            Self::TooManyVariables { count, limit } => {
                write!(f,
                       "The formula uses {count} distinct variables; at most {limit} are supported.")
            },
            Self::Internal { reason } => write!(f, "Internal error: {reason}."),
        }
    }
}

impl std::error::Error for EvalError {}

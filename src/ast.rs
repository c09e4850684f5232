use serde::Serialize;

/// An abstract syntax tree (AST) node representing a propositional formula.
///
/// `Expr` covers the three shapes a formula can take: a bare variable, a
/// negation applied to one operand, and a binary connective joining two
/// operands. Each node owns its children, so the tree is finite and acyclic
/// by construction, and it is never mutated after parsing: one tree can be
/// evaluated against any number of assignments.
///
/// Serialization produces the tagged tree form consumed by external
/// displays: `{"kind": "variable", "name": …}`,
/// `{"kind": "unary", "operator": "¬", "operand": …}` and
/// `{"kind": "binary", "operator": …, "left": …, "right": …}`, with
/// operators rendered as their source symbols.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Expr {
    /// A propositional variable: one uppercase ASCII letter.
    Variable {
        /// The variable's single-letter name.
        name: char,
    },
    /// A unary operation: negation applied to one operand.
    Unary {
        /// The unary operator to apply.
        operator: UnaryOperator,
        /// The operand expression.
        operand:  Box<Self>,
    },
    /// A binary connective joining two operands.
    Binary {
        /// The connective.
        operator: BinaryOperator,
        /// Left operand.
        left:     Box<Self>,
        /// Right operand.
        right:    Box<Self>,
    },
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum UnaryOperator {
    /// Logical negation (`¬`).
    #[serde(rename = "¬")]
    Negate,
}

/// Represents a binary connective.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub enum BinaryOperator {
    /// Conjunction (`∧`).
    #[serde(rename = "∧")]
    And,
    /// Disjunction (`∨`).
    #[serde(rename = "∨")]
    Or,
    /// Material implication (`→`).
    #[serde(rename = "→")]
    Implies,
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "¬"),
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let connective = match self {
            Self::And => "∧",
            Self::Or => "∨",
            Self::Implies => "→",
        };
        write!(f, "{connective}")
    }
}

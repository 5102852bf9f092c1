/*! Defines an abstract syntax tree (AST) for first-order terms and formulae with equality.

Terms and formulae are immutable once built. Every symbol in a tree is validated against
its lexical class when it is constructed, so two trees are equal exactly when their
canonical string representations are equal. */

mod formula;
mod symbol;
mod term;

pub use formula::{Atom, Binary, BinaryOp, Equals, Formula, Not, Operands, Quantified, Quantifier};
pub use symbol::{
    is_binary, is_constant, is_equality, is_function, is_quantifier, is_relation, is_unary,
    is_variable, Pred, Symbol, SymbolKind, C, EQ_SYM, F, NOT_SYM, V,
};
pub use term::{App, Term};

use thiserror::Error;

/// Is the type of errors returned when a term or a formula is constructed from
/// ingredients that violate its structural invariants.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// Is returned when a symbol does not belong to the expected lexical class.
    #[error("`{symbol}` is not a valid {expected} symbol")]
    InvalidSymbol { symbol: String, expected: SymbolKind },

    /// Is returned when a substitution key is neither a variable nor a constant.
    #[error("`{symbol}` is neither a variable nor a constant symbol")]
    InvalidKey { symbol: String },

    /// Is returned when a name is not a propositional variable.
    #[error("`{symbol}` is not a valid propositional variable")]
    InvalidPropVariable { symbol: String },

    /// Is returned when the prefix of placeholder names is not a letter between `p` and `z`.
    #[error("invalid placeholder prefix `{prefix}`; expecting a letter between `p` and `z`")]
    InvalidPrefix { prefix: String },

    /// Is returned when arguments are supplied to a variable or a constant.
    #[error("symbol `{symbol}` does not take arguments")]
    UnexpectedArguments { symbol: String },

    /// Is returned when a function is applied to no arguments.
    #[error("function `{symbol}` must be applied to at least one argument")]
    MissingArguments { symbol: String },

    /// Is returned when an equality is not made of exactly two terms.
    #[error("equality expects exactly 2 terms, found {found}")]
    EqualityArity { found: usize },

    /// Is returned when the operands given to a formula constructor do not fit its root.
    #[error("operands do not match the root `{root}`")]
    OperandMismatch { root: String },

    /// Is returned when the root of a term or a formula belongs to no lexical class.
    #[error("unknown root symbol `{root}`")]
    UnknownRoot { root: String },
}

/*! Implements the transformations on first-order terms and formulae: capture-avoiding
substitution and the bridge between formulae and their propositional skeletons. */
mod skeleton;
mod substitution;

pub use skeleton::{SkeletonMap, ToSkeleton};
pub use substitution::{Substitute, Substitution};

use crate::syntax::V;
use thiserror::Error;

/// Is the type of errors arising from transforming terms and formulae.
#[derive(Error, Clone, PartialEq, Eq, Debug)]
pub enum Error {
    /// Is returned when a replacement term mentions a variable that the substitution is not
    /// allowed to introduce, because it would be captured by an enclosing quantifier.
    #[error("substitution would capture the variable `{}`", .variable.to_string())]
    ForbiddenVariable { variable: V },

    /// Is returned when a propositional variable has no formula in a [`SkeletonMap`].
    #[error("no formula for the placeholder `{name}`")]
    MissingPlaceholder { name: String },

    /// Is returned when a propositional formula mentions a connective or a constant that
    /// has no first-order counterpart.
    #[error("`{symbol}` has no first-order counterpart")]
    UnsupportedConnective { symbol: String },

    /// Is returned when a substitution pair cannot be read.
    #[error("invalid substitution pair `{pair}`: {reason}")]
    InvalidPair { pair: String, reason: String },
}

/*! Defines propositional formulae, the target of [propositional skeletons].

Propositional formulae are built over atomic variables, whose names are a lowercase
letter between `p` and `z` followed by zero or more digits (`p`, `q7`, `z12`), and the
constants `T` (truth) and `F` (falsehood). Their canonical syntax follows that of
first-order formulae: `~P`, `(P&Q)`, `(P|Q)` and `(P->Q)`.

[propositional skeletons]: crate::transform::ToSkeleton
*/

use crate::syntax::{BinaryOp, Error};
use std::{collections::HashSet, fmt};

/// Returns true if `s` is the name of a propositional variable.
///
/// **Example**:
/// ```rust
/// use sigil_fol::prop::is_prop_variable;
///
/// assert!(is_prop_variable("z12"));
/// assert!(is_prop_variable("p"));
/// assert!(!is_prop_variable("z1a"));
/// assert!(!is_prop_variable("a1"));
/// ```
pub fn is_prop_variable(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(chars.next(), Some('p'..='z')) && chars.all(|c| c.is_ascii_digit())
}

/// Is an atomic propositional variable.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropVar(String);

impl PropVar {
    /// Creates a propositional variable. It fails if `name` is not a
    /// [propositional variable name](is_prop_variable).
    pub fn new<S: Into<String>>(name: S) -> Result<Self, Error> {
        let name = name.into();
        if is_prop_variable(&name) {
            Ok(Self(name))
        } else {
            Err(Error::InvalidPropVariable { symbol: name })
        }
    }

    pub(crate) fn new_unchecked<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Returns the name of the variable.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropVar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for PropVar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Is a propositional formula.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum PropFormula {
    /// Is an atomic propositional variable.
    Var(PropVar),

    /// Is the constant truth, printed `T`.
    Top,

    /// Is the constant falsehood, printed `F`.
    Bottom,

    Not(Box<PropFormula>),
    And(Box<PropFormula>, Box<PropFormula>),
    Or(Box<PropFormula>, Box<PropFormula>),
    Implies(Box<PropFormula>, Box<PropFormula>),
}

impl PropFormula {
    /// Returns the negation of `formula`.
    pub fn not(formula: Self) -> Self {
        Self::Not(Box::new(formula))
    }

    /// Connects `first` and `second` with the binary operator `op`.
    ///
    /// **Example**:
    /// ```rust
    /// use sigil_fol::prop::{PropFormula, PropVar};
    /// use sigil_fol::syntax::BinaryOp;
    ///
    /// let p: PropFormula = PropVar::new("p").unwrap().into();
    /// let q: PropFormula = PropVar::new("q1").unwrap().into();
    /// assert_eq!("(p->q1)", PropFormula::binary(BinaryOp::Implies, p, q).to_string());
    /// ```
    pub fn binary(op: BinaryOp, first: Self, second: Self) -> Self {
        let (first, second) = (Box::new(first), Box::new(second));
        match op {
            BinaryOp::And => Self::And(first, second),
            BinaryOp::Or => Self::Or(first, second),
            BinaryOp::Implies => Self::Implies(first, second),
        }
    }

    /// Returns true if the receiver is an atomic variable.
    pub fn is_variable(&self) -> bool {
        matches!(self, Self::Var(_))
    }

    /// Returns the variables that appear in the receiver.
    pub fn variables(&self) -> HashSet<&PropVar> {
        match self {
            Self::Var(v) => std::iter::once(v).collect(),
            Self::Top | Self::Bottom => HashSet::new(),
            Self::Not(this) => this.variables(),
            Self::And(l, r) | Self::Or(l, r) | Self::Implies(l, r) => {
                let mut vs = l.variables();
                vs.extend(r.variables());
                vs
            }
        }
    }
}

impl From<PropVar> for PropFormula {
    fn from(variable: PropVar) -> Self {
        Self::Var(variable)
    }
}

impl fmt::Display for PropFormula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Var(v) => write!(f, "{}", v),
            Self::Top => write!(f, "T"),
            Self::Bottom => write!(f, "F"),
            Self::Not(this) => write!(f, "~{}", this),
            Self::And(l, r) => write!(f, "({}&{})", l, r),
            Self::Or(l, r) => write!(f, "({}|{})", l, r),
            Self::Implies(l, r) => write!(f, "({}->{})", l, r),
        }
    }
}

impl fmt::Debug for PropFormula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_debug_string, assert_eq_sorted_vecs};

    fn prop(s: &str) -> PropFormula {
        s.parse().unwrap()
    }

    #[test]
    fn test_prop_var() {
        assert_eq!("q12", PropVar::new("q12").unwrap().name());
        assert_eq!(
            Err(Error::InvalidPropVariable { symbol: "c".into() }),
            PropVar::new("c")
        );
        assert_eq!(
            "`a1` is not a valid propositional variable",
            PropVar::new("a1").unwrap_err().to_string()
        );
        assert!(PropVar::new("").is_err());
        assert!(PropVar::new("x_1").is_err());
    }

    #[test]
    fn test_print() {
        assert_debug_string!("z1", prop("z1"));
        assert_debug_string!("T", prop("T"));
        assert_debug_string!("~F", prop("~F"));
        assert_debug_string!("((p&q)|~r)", prop("((p&q)|~r)"));
        assert_debug_string!("(z1->(z2->z1))", prop("(z1->(z2->z1))"));
    }

    #[test]
    fn test_parse_failure() {
        assert!("".parse::<PropFormula>().is_err());
        assert!("a".parse::<PropFormula>().is_err());
        assert!("(p&q".parse::<PropFormula>().is_err());
        assert!("p&q".parse::<PropFormula>().is_err());
        assert!("z1a".parse::<PropFormula>().is_err());
        assert!("R(x)".parse::<PropFormula>().is_err());
    }

    #[test]
    fn test_shape() {
        assert!(prop("z3").is_variable());
        assert!(!prop("~z3").is_variable());
        assert_eq!(
            PropFormula::binary(BinaryOp::Or, prop("p"), prop("~q")),
            prop("(p|~q)")
        );
    }

    #[test]
    fn test_variables() {
        assert!(prop("(T&~F)").variables().is_empty());
        assert_eq_sorted_vecs!(
            vec!["p", "q2", "z1"],
            prop("((p&~q2)->(z1|p))")
                .variables()
                .into_iter()
                .map(PropVar::name)
                .collect::<Vec<_>>()
        );
    }
}

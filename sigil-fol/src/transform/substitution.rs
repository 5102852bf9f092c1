/*! Provides capture-avoiding substitution of terms for the variables and constants of
terms and formulae.*/

use super::Error;
use crate::syntax::{Atom, Binary, Equals, Formula, Not, Quantified, Symbol, Term, C, V};
use std::{
    collections::{HashMap, HashSet},
    iter::FromIterator,
};
use tracing::debug;

/// Is a map from variable and constant symbols to the terms that replace them.
///
/// **Example**:
/// ```rust
/// use sigil_fol::syntax::{Symbol, Term};
/// use sigil_fol::transform::{Substitute, Substitution};
///
/// let mut sub = Substitution::new();
/// sub.insert(Symbol::new("c").unwrap(), "plus(d,x)".parse().unwrap());
/// sub.insert(Symbol::new("x").unwrap(), "c".parse().unwrap());
///
/// // replacements are never substituted again:
/// let t: Term = "f(x,c)".parse().unwrap();
/// assert_eq!("f(c,plus(d,x))", t.substitute_free(&sub).unwrap().to_string());
/// ```
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct Substitution {
    variables: HashMap<V, Term>,
    constants: HashMap<C, Term>,
}

impl Substitution {
    /// Creates an empty substitution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `symbol` to `term`, returning the term `symbol` was previously mapped to.
    pub fn insert<S: Into<Symbol>>(&mut self, symbol: S, term: Term) -> Option<Term> {
        match symbol.into() {
            Symbol::Var(v) => self.variables.insert(v, term),
            Symbol::Const(c) => self.constants.insert(c, term),
        }
    }

    /// Returns the term that `symbol` is mapped to, if any.
    pub fn get(&self, symbol: &Symbol) -> Option<&Term> {
        match symbol {
            Symbol::Var(v) => self.variables.get(v),
            Symbol::Const(c) => self.constants.get(c),
        }
    }

    /// Returns the number of mapped symbols.
    pub fn len(&self) -> usize {
        self.variables.len() + self.constants.len()
    }

    /// Returns true if no symbol is mapped.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads a substitution from pairs of the form `NAME=TERM`, where `NAME` is a variable
    /// or a constant and `TERM` is a term in canonical syntax.
    ///
    /// **Example**:
    /// ```rust
    /// use sigil_fol::syntax::Symbol;
    /// use sigil_fol::transform::Substitution;
    ///
    /// let sub = Substitution::parse_pairs(&["x=f(y)", "c=_"]).unwrap();
    /// assert_eq!(2, sub.len());
    /// assert_eq!("f(y)", sub.get(&Symbol::new("x").unwrap()).unwrap().to_string());
    ///
    /// assert!(Substitution::parse_pairs(&["f=x"]).is_err());
    /// assert!(Substitution::parse_pairs(&["x"]).is_err());
    /// ```
    pub fn parse_pairs<I, S>(pairs: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut result = Self::new();
        for pair in pairs {
            let pair = pair.as_ref();
            let invalid = |reason: String| Error::InvalidPair {
                pair: pair.to_string(),
                reason,
            };

            let mut parts = pair.splitn(2, '=');
            let (name, term) = match (parts.next(), parts.next()) {
                (Some(name), Some(term)) => (name, term),
                _ => return Err(invalid("expecting `NAME=TERM`".into())),
            };
            let symbol = Symbol::new(name).map_err(|e| invalid(e.to_string()))?;
            let term = term.parse::<Term>().map_err(|e| invalid(e.to_string()))?;
            result.insert(symbol, term);
        }
        Ok(result)
    }

    // a copy of the receiver that leaves `variable` alone
    fn without(&self, variable: &V) -> Self {
        let mut result = self.clone();
        result.variables.remove(variable);
        result
    }

    fn lookup(&self, term: &Term) -> Option<&Term> {
        match term {
            Term::Var(v) => self.variables.get(v),
            Term::Const(c) => self.constants.get(c),
            Term::App(_) => None,
        }
    }
}

impl FromIterator<(Symbol, Term)> for Substitution {
    fn from_iter<T: IntoIterator<Item = (Symbol, Term)>>(iter: T) -> Self {
        let mut result = Self::new();
        iter.into_iter().for_each(|(s, t)| {
            result.insert(s, t);
        });
        result
    }
}

/// Is the trait of syntactic objects that admit capture-avoiding substitution.
pub trait Substitute: Sized {
    /// Replaces every occurrence of a symbol in the domain of `sub` by the term it maps to,
    /// in a single pass. It fails if a replacement term mentions a variable in `forbidden`
    /// (or one bound by an enclosing quantifier), returning the offending variable.
    ///
    /// **Example**:
    /// ```rust
    /// use sigil_fol::syntax::Formula;
    /// use sigil_fol::transform::{Substitute, Substitution};
    ///
    /// let formula: Formula = "Ay[x=c]".parse().unwrap();
    ///
    /// let sub = Substitution::parse_pairs(&["c=plus(d,x)"]).unwrap();
    /// assert_eq!("Ay[x=plus(d,x)]", formula.substitute_free(&sub).unwrap().to_string());
    ///
    /// // `y` would be captured by `Ay`:
    /// let sub = Substitution::parse_pairs(&["c=plus(d,y)"]).unwrap();
    /// assert!(formula.substitute_free(&sub).is_err());
    /// ```
    fn substitute(&self, sub: &Substitution, forbidden: &HashSet<V>) -> Result<Self, Error>;

    /// Substitutes with no forbidden variables.
    fn substitute_free(&self, sub: &Substitution) -> Result<Self, Error> {
        self.substitute(sub, &HashSet::new())
    }
}

impl Substitute for Term {
    fn substitute(&self, sub: &Substitution, forbidden: &HashSet<V>) -> Result<Self, Error> {
        if let Term::App(app) = self {
            let terms = app
                .terms()
                .iter()
                .map(|t| t.substitute(sub, forbidden))
                .collect::<Result<Vec<_>, _>>()?;
            return Ok(app.with_terms(terms).into());
        }

        match sub.lookup(self) {
            Some(replacement) => {
                let captured = replacement
                    .variables()
                    .into_iter()
                    .filter(|v| forbidden.contains(*v))
                    .min();
                if let Some(variable) = captured {
                    debug!(
                        event = crate::trace::CAPTURE,
                        term = %replacement,
                        variable = %variable,
                    );
                    return Err(Error::ForbiddenVariable {
                        variable: variable.clone(),
                    });
                }
                Ok(replacement.clone())
            }
            None => Ok(self.clone()),
        }
    }
}

impl Substitute for Formula {
    fn substitute(&self, sub: &Substitution, forbidden: &HashSet<V>) -> Result<Self, Error> {
        match self {
            Formula::Equals(this) => Ok(Equals::new(
                this.left().substitute(sub, forbidden)?,
                this.right().substitute(sub, forbidden)?,
            )
            .into()),
            Formula::Atom(this) => {
                let terms = this
                    .terms()
                    .iter()
                    .map(|t| t.substitute(sub, forbidden))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Atom::new(this.predicate().clone(), terms).into())
            }
            Formula::Not(this) => Ok(Not::new(this.formula().substitute(sub, forbidden)?).into()),
            Formula::Binary(this) => Ok(Binary::new(
                this.op(),
                this.first().substitute(sub, forbidden)?,
                this.second().substitute(sub, forbidden)?,
            )
            .into()),
            Formula::Quantified(this) => {
                let variable = this.variable();
                let mut inner = forbidden.clone();
                inner.insert(variable.clone());
                let formula = this.formula().substitute(&sub.without(variable), &inner)?;
                Ok(Quantified::new(this.quantifier(), variable.clone(), formula).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_debug_string, fof, term, v};

    fn sub(pairs: &[&str]) -> Substitution {
        Substitution::parse_pairs(pairs).unwrap()
    }

    fn forbid(names: &[&str]) -> HashSet<V> {
        names.iter().map(|n| V::new(*n).unwrap()).collect()
    }

    #[test]
    fn test_substitution_map() {
        let mut s = Substitution::new();
        assert!(s.is_empty());
        assert_eq!(None, s.insert(v!(x), term!(c)));
        assert_eq!(Some(term!(c)), s.insert(v!(x), term!(d)));
        s.insert(C::new("c").unwrap(), term!(f(x)));
        assert_eq!(2, s.len());
        assert_eq!(Some(&term!(d)), s.get(&Symbol::new("x").unwrap()));
        assert_eq!(Some(&term!(f(x))), s.get(&Symbol::new("c").unwrap()));
        assert_eq!(None, s.get(&Symbol::new("y").unwrap()));

        let collected: Substitution = vec![
            (Symbol::new("x").unwrap(), term!(d)),
            (Symbol::new("c").unwrap(), term!(f(x))),
        ]
        .into_iter()
        .collect();
        assert_eq!(s, collected);
    }

    #[test]
    fn test_parse_pairs_failure() {
        assert_eq!(
            Err(Error::InvalidPair {
                pair: "x".into(),
                reason: "expecting `NAME=TERM`".into(),
            }),
            Substitution::parse_pairs(&["x"])
        );
        assert!(Substitution::parse_pairs(&["R=x"]).is_err());
        assert!(Substitution::parse_pairs(&["x=f()"]).is_err());
        assert!(Substitution::parse_pairs(&["x="]).is_err());
    }

    #[test]
    fn test_substitute_term() {
        assert_debug_string!("x", term!(x).substitute_free(&Substitution::new()).unwrap());
        assert_debug_string!("c", term!(x).substitute_free(&sub(&["x=c"])).unwrap());
        assert_debug_string!("y", term!(y).substitute_free(&sub(&["x=c"])).unwrap());
        assert_debug_string!(
            "f(g(y),d,g(y))",
            term!(f(x, c, x))
                .substitute_free(&sub(&["x=g(y)", "c=d"]))
                .unwrap()
        );
        assert_debug_string!(
            "f(c,plus(d,x))",
            term!(f(x, c))
                .substitute(&sub(&["c=plus(d,x)", "x=c"]), &forbid(&["y"]))
                .unwrap()
        );
    }

    #[test]
    fn test_substitute_term_forbidden() {
        assert_eq!(
            Err(Error::ForbiddenVariable { variable: v!(y) }),
            term!(f(x)).substitute(&sub(&["x=g(y)"]), &forbid(&["y"]))
        );
        assert_eq!(
            Err(Error::ForbiddenVariable { variable: v!(u) }),
            term!(f(x)).substitute(&sub(&["x=g(y,u)"]), &forbid(&["y", "u"]))
        );
        // only the terms that are actually substituted are checked:
        assert_debug_string!(
            "f(y)",
            term!(f(y)).substitute(&sub(&["x=g(y)"]), &forbid(&["y"])).unwrap()
        );
    }

    #[test]
    fn test_substitute_formula() {
        assert_debug_string!(
            "f(d)=g(d,y)",
            fof!(f(x) = g(x, y)).substitute_free(&sub(&["x=d"])).unwrap()
        );
        assert_debug_string!(
            "(R(d,c)|~Q())",
            fof!((R(x, c) | ~Q())).substitute_free(&sub(&["x=d"])).unwrap()
        );
        assert_debug_string!(
            "Ay[x=plus(d,x)]",
            fof!(Ay[x = c])
                .substitute_free(&sub(&["c=plus(d,x)"]))
                .unwrap()
        );
    }

    #[test]
    fn test_substitute_bound_variable() {
        // the bound occurrences are left alone:
        assert_debug_string!(
            "(R(c)&Ax[R(x)])",
            fof!((R(x) & Ax[R(x)])).substitute_free(&sub(&["x=c"])).unwrap()
        );
        // siblings of a quantifier are not affected by it:
        assert_debug_string!(
            "(Ay[R(y)]->Q(f(y)))",
            fof!((Ay[R(y)] -> Q(x)))
                .substitute_free(&sub(&["x=f(y)"]))
                .unwrap()
        );
    }

    #[test]
    fn test_substitute_capture() {
        assert_eq!(
            Err(Error::ForbiddenVariable { variable: v!(y) }),
            fof!(Ay[x = c]).substitute_free(&sub(&["c=plus(d,y)"]))
        );
        assert_eq!(
            Err(Error::ForbiddenVariable { variable: v!(z) }),
            fof!(Ey[Az[R(x, y, z)]]).substitute_free(&sub(&["x=f(z)"]))
        );
        assert_eq!(
            "substitution would capture the variable `y`",
            fof!(Ay[x = c])
                .substitute_free(&sub(&["c=plus(d,y)"]))
                .unwrap_err()
                .to_string()
        );
    }
}

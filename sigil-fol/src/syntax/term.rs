/*! Defines the syntax for first-order terms. */

use super::{is_constant, is_function, is_variable, Error, Formula, SymbolKind, C, F, V};
use std::{collections::HashSet, fmt};

/// Represents the application of a function symbol on a non-empty list of terms.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct App {
    function: F,
    terms: Vec<Term>,
}

impl App {
    /// Creates a new function application. It fails if `terms` is empty.
    pub fn new(function: F, terms: Vec<Term>) -> Result<Self, Error> {
        if terms.is_empty() {
            return Err(Error::MissingArguments {
                symbol: function.name().to_string(),
            });
        }
        Ok(Self { function, terms })
    }

    /// Returns the function symbol of the receiver.
    #[inline(always)]
    pub fn function(&self) -> &F {
        &self.function
    }

    /// Returns the arguments of the receiver.
    #[inline(always)]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the number of arguments the function is applied to.
    #[inline(always)]
    pub fn arity(&self) -> usize {
        self.terms.len()
    }

    // the same function applied on `terms`; callers preserve the arity
    pub(crate) fn with_terms(&self, terms: Vec<Term>) -> Self {
        Self {
            function: self.function.clone(),
            terms,
        }
    }
}

/// Represents a first-order term and consists of variables, constants and function applications.
///
/// **Note**: Terms are compared and hashed structurally. Since every symbol of a term is
/// validated against its lexical class, two terms are equal exactly when their string
/// representations are equal.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// Is a variable term, wrapping a [variable symbol].
    ///
    /// [variable symbol]: crate::syntax::V
    Var(V),

    /// Is a constant term, wrapping a [constant symbol].
    ///
    /// [constant symbol]: crate::syntax::C
    Const(C),

    /// Is a composite term, made by applying a function on a list of terms.
    App(App),
}

impl Term {
    /// Creates a term from the name of its root and the arguments of the root. Variables
    /// and constants take no arguments (`None`) and functions take a non-empty list.
    ///
    /// **Example**:
    /// ```rust
    /// use sigil_fol::syntax::Term;
    ///
    /// let x = Term::new("x", None).unwrap();
    /// let c = Term::new("c", None).unwrap();
    /// let t = Term::new("plus", Some(vec![x, c])).unwrap();
    /// assert_eq!("plus(x,c)", t.to_string());
    ///
    /// assert!(Term::new("plus", Some(vec![])).is_err());
    /// assert!(Term::new("x", Some(vec![t])).is_err());
    /// ```
    pub fn new(root: &str, arguments: Option<Vec<Term>>) -> Result<Self, Error> {
        if is_variable(root) || is_constant(root) {
            if arguments.is_some() {
                return Err(Error::UnexpectedArguments {
                    symbol: root.to_string(),
                });
            }
            if is_variable(root) {
                Ok(V::new_unchecked(root).into())
            } else {
                Ok(C::new_unchecked(root).into())
            }
        } else if is_function(root) {
            match arguments {
                Some(terms) => F::new_unchecked(root).app(terms),
                None => Err(Error::MissingArguments {
                    symbol: root.to_string(),
                }),
            }
        } else {
            Err(Error::InvalidSymbol {
                symbol: root.to_string(),
                expected: SymbolKind::Function,
            })
        }
    }

    /// Returns the name of the symbol at the root of the receiver.
    pub fn root(&self) -> &str {
        match self {
            Self::Var(variable) => variable.name(),
            Self::Const(constant) => constant.name(),
            Self::App(app) => app.function.name(),
        }
    }

    /// Returns the arguments of the root of the receiver; empty for variables and constants.
    pub fn arguments(&self) -> &[Term] {
        match self {
            Self::App(app) => &app.terms,
            _ => &[],
        }
    }

    /// Returns the constant symbols that appear in the receiver.
    pub fn constants(&self) -> HashSet<&C> {
        match self {
            Self::Var(_) => HashSet::new(),
            Self::Const(constant) => std::iter::once(constant).collect(),
            Self::App(app) => app.terms.iter().flat_map(|t| t.constants()).collect(),
        }
    }

    /// Returns the variable symbols that appear in the receiver.
    ///
    /// **Example**:
    /// ```rust
    /// use sigil_fol::syntax::{Term, V};
    ///
    /// let t: Term = "f(x,g(y,c,x))".parse().unwrap();
    /// let mut vars: Vec<_> = t.variables().into_iter().map(V::name).collect();
    /// vars.sort();
    /// assert_eq!(vec!["x", "y"], vars);
    /// ```
    pub fn variables(&self) -> HashSet<&V> {
        match self {
            Self::Var(variable) => std::iter::once(variable).collect(),
            Self::Const(_) => HashSet::new(),
            Self::App(app) => app.terms.iter().flat_map(|t| t.variables()).collect(),
        }
    }

    /// Returns the function symbols that appear in the receiver, each paired with the
    /// number of arguments it is applied to.
    pub fn functions(&self) -> HashSet<(&F, usize)> {
        match self {
            Self::Var(_) | Self::Const(_) => HashSet::new(),
            Self::App(app) => {
                let mut result: HashSet<_> =
                    app.terms.iter().flat_map(|t| t.functions()).collect();
                result.insert((&app.function, app.arity()));
                result
            }
        }
    }

    /// Returns an equation (formula) between the receiver and `term`.
    pub fn equals(self, term: Term) -> Formula {
        super::Equals::new(self, term).into()
    }
}

impl From<V> for Term {
    fn from(variable: V) -> Self {
        Self::Var(variable)
    }
}

impl From<C> for Term {
    fn from(constant: C) -> Self {
        Self::Const(constant)
    }
}

impl From<App> for Term {
    fn from(app: App) -> Self {
        Self::App(app)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Var(variable) => write!(f, "{}", variable),
            Self::Const(constant) => write!(f, "{}", constant),
            Self::App(app) => {
                let ts: Vec<String> = app.terms.iter().map(|t| t.to_string()).collect();
                write!(f, "{}({})", app.function, ts.join(","))
            }
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

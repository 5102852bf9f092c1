/*! Defines the lexical classes of symbols and the symbol types [`V`], [`C`], [`F`] and
[`Pred`] for making terms and formulae.

The class of a symbol is decided by its first character, together with the requirement
that every character of a name is alphanumeric:

| class      | first character            |
|------------|----------------------------|
| variable   | `u` to `z`                 |
| constant   | `0` to `9`, `a` to `d`; or the symbol `_` alone |
| function   | `f` to `t`                 |
| relation   | `F` to `T`                 |

[`V`]: crate::syntax::V
[`C`]: crate::syntax::C
[`F`]: crate::syntax::F
[`Pred`]: crate::syntax::Pred
*/

use super::{Atom, Error, Formula, Term};
use std::fmt;

/// Symbol of the equality relation.
pub const EQ_SYM: &str = "=";

/// Symbol of negation, the only unary operator.
pub const NOT_SYM: &str = "~";

#[inline]
fn alphanumeric(s: &str) -> bool {
    s.chars().all(char::is_alphanumeric)
}

/// Returns true if `s` is a variable name.
///
/// **Example**:
/// ```rust
/// use sigil_fol::syntax::is_variable;
///
/// assert!(is_variable("x12"));
/// assert!(!is_variable("c"));
/// assert!(!is_variable(""));
/// ```
pub fn is_variable(s: &str) -> bool {
    matches!(s.chars().next(), Some('u'..='z')) && alphanumeric(s)
}

/// Returns true if `s` is a constant name.
pub fn is_constant(s: &str) -> bool {
    s == "_"
        || (matches!(s.chars().next(), Some('0'..='9') | Some('a'..='d')) && alphanumeric(s))
}

/// Returns true if `s` is a function name.
pub fn is_function(s: &str) -> bool {
    matches!(s.chars().next(), Some('f'..='t')) && alphanumeric(s)
}

/// Returns true if `s` is a relation name.
pub fn is_relation(s: &str) -> bool {
    matches!(s.chars().next(), Some('F'..='T')) && alphanumeric(s)
}

/// Returns true if `s` is the equality relation.
pub fn is_equality(s: &str) -> bool {
    s == EQ_SYM
}

/// Returns true if `s` is a unary operator.
pub fn is_unary(s: &str) -> bool {
    s == NOT_SYM
}

/// Returns true if `s` is a binary operator.
pub fn is_binary(s: &str) -> bool {
    s == "&" || s == "|" || s == "->"
}

/// Returns true if `s` is a quantifier.
pub fn is_quantifier(s: &str) -> bool {
    s == "A" || s == "E"
}

/// Is the lexical class of a symbol.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SymbolKind {
    Variable,
    Constant,
    Function,
    Relation,
    Equality,
    Unary,
    Binary,
    Quantifier,
}

impl SymbolKind {
    /// Returns the class of `symbol`, or `None` if it belongs to no class.
    ///
    /// **Example**:
    /// ```rust
    /// use sigil_fol::syntax::SymbolKind;
    ///
    /// assert_eq!(Some(SymbolKind::Function), SymbolKind::of("plus"));
    /// assert_eq!(Some(SymbolKind::Binary), SymbolKind::of("->"));
    /// assert_eq!(None, SymbolKind::of("e"));
    /// ```
    pub fn of(symbol: &str) -> Option<Self> {
        if is_variable(symbol) {
            Some(Self::Variable)
        } else if is_constant(symbol) {
            Some(Self::Constant)
        } else if is_function(symbol) {
            Some(Self::Function)
        } else if is_relation(symbol) {
            Some(Self::Relation)
        } else if is_equality(symbol) {
            Some(Self::Equality)
        } else if is_unary(symbol) {
            Some(Self::Unary)
        } else if is_binary(symbol) {
            Some(Self::Binary)
        } else if is_quantifier(symbol) {
            Some(Self::Quantifier)
        } else {
            None
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Variable => "variable",
            Self::Constant => "constant",
            Self::Function => "function",
            Self::Relation => "relation",
            Self::Equality => "equality",
            Self::Unary => "unary operator",
            Self::Binary => "binary operator",
            Self::Quantifier => "quantifier",
        };
        write!(f, "{}", name)
    }
}

fn check(name: String, expected: SymbolKind, valid: fn(&str) -> bool) -> Result<String, Error> {
    if valid(&name) {
        Ok(name)
    } else {
        Err(Error::InvalidSymbol {
            symbol: name,
            expected,
        })
    }
}

/// Represents a variable symbol with a given name.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct V(String);

impl V {
    /// Creates a variable symbol, failing if `name` is not a variable name.
    pub fn new<S: Into<String>>(name: S) -> Result<Self, Error> {
        check(name.into(), SymbolKind::Variable, is_variable).map(Self)
    }

    // only for names already known to be variables, e.g., lexemes read by the parser
    pub(crate) fn new_unchecked<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Returns the name of the variable.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for V {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for V {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a constant symbol with a given name.
///
/// **Note**: Unlike nullary functions (which the syntax does not admit), constants
/// are atomic terms.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct C(String);

impl C {
    /// Creates a constant symbol, failing if `name` is not a constant name.
    pub fn new<S: Into<String>>(name: S) -> Result<Self, Error> {
        check(name.into(), SymbolKind::Constant, is_constant).map(Self)
    }

    pub(crate) fn new_unchecked<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Returns the name of the constant.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for C {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for C {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents an uninterpreted function symbol with a given name.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct F(String);

impl F {
    /// Creates a function symbol, failing if `name` is not a function name.
    pub fn new<S: Into<String>>(name: S) -> Result<Self, Error> {
        check(name.into(), SymbolKind::Function, is_function).map(Self)
    }

    pub(crate) fn new_unchecked<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Returns the name of the function.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Applies the receiver on a list of terms. It fails if `terms` is empty.
    ///
    /// **Note**: the arity of a function is not declared anywhere; it is the number of
    /// arguments the function is applied to.
    pub fn app(self, terms: Vec<Term>) -> Result<Term, Error> {
        super::App::new(self, terms).map(Term::App)
    }
}

impl fmt::Display for F {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for F {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents a relation (predicate) symbol with a given name.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Pred(String);

impl Pred {
    /// Creates a relation symbol, failing if `name` is not a relation name.
    pub fn new<S: Into<String>>(name: S) -> Result<Self, Error> {
        check(name.into(), SymbolKind::Relation, is_relation).map(Self)
    }

    pub(crate) fn new_unchecked<S: Into<String>>(name: S) -> Self {
        Self(name.into())
    }

    /// Returns the name of the relation.
    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Applies the receiver on a (possibly empty) list of terms.
    pub fn app(self, terms: Vec<Term>) -> Formula {
        Atom::new(self, terms).into()
    }
}

impl fmt::Display for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Pred {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Is an atomic symbol that may be substituted: a variable or a constant.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub enum Symbol {
    Var(V),
    Const(C),
}

impl Symbol {
    /// Creates a substitutable symbol, failing if `name` is neither a variable nor a
    /// constant name.
    ///
    /// **Example**:
    /// ```rust
    /// use sigil_fol::syntax::{Symbol, V};
    ///
    /// assert_eq!(Symbol::Var(V::new("x").unwrap()), Symbol::new("x").unwrap());
    /// assert!(Symbol::new("f").is_err());
    /// ```
    pub fn new<S: Into<String>>(name: S) -> Result<Self, Error> {
        let name = name.into();
        if is_variable(&name) {
            Ok(Self::Var(V(name)))
        } else if is_constant(&name) {
            Ok(Self::Const(C(name)))
        } else {
            Err(Error::InvalidKey { symbol: name })
        }
    }

    /// Returns the name of the symbol.
    pub fn name(&self) -> &str {
        match self {
            Self::Var(v) => v.name(),
            Self::Const(c) => c.name(),
        }
    }
}

impl From<V> for Symbol {
    fn from(variable: V) -> Self {
        Self::Var(variable)
    }
}

impl From<C> for Symbol {
    fn from(constant: C) -> Self {
        Self::Const(constant)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_variables() {
        assert!(is_variable("x"));
        assert!(is_variable("u"));
        assert!(is_variable("z12"));
        assert!(is_variable("xAb1"));
        assert!(!is_variable("t"));
        assert!(!is_variable("X"));
        assert!(!is_variable("x_1"));
        assert!(!is_variable(""));
    }

    #[test]
    fn test_classify_constants() {
        assert!(is_constant("a"));
        assert!(is_constant("d7"));
        assert!(is_constant("0"));
        assert!(is_constant("12"));
        assert!(is_constant("_"));
        assert!(!is_constant("__"));
        assert!(!is_constant("_a"));
        assert!(!is_constant("e"));
        assert!(!is_constant("c-1"));
    }

    #[test]
    fn test_classify_functions_and_relations() {
        assert!(is_function("f"));
        assert!(is_function("plus"));
        assert!(is_function("s1"));
        assert!(!is_function("u"));
        assert!(!is_function("e"));
        assert!(is_relation("F"));
        assert!(is_relation("R12"));
        assert!(is_relation("Tx"));
        assert!(!is_relation("A"));
        assert!(!is_relation("E"));
        assert!(!is_relation("U"));
    }

    #[test]
    fn test_classify_operators() {
        assert!(is_equality("="));
        assert!(is_unary("~"));
        assert!(is_binary("&"));
        assert!(is_binary("|"));
        assert!(is_binary("->"));
        assert!(!is_binary("-"));
        assert!(is_quantifier("A"));
        assert!(is_quantifier("E"));
        assert!(!is_quantifier("Ax"));
    }

    #[test]
    fn test_symbol_kind() {
        assert_eq!(Some(SymbolKind::Variable), SymbolKind::of("x"));
        assert_eq!(Some(SymbolKind::Constant), SymbolKind::of("_"));
        assert_eq!(Some(SymbolKind::Function), SymbolKind::of("f"));
        assert_eq!(Some(SymbolKind::Relation), SymbolKind::of("R"));
        assert_eq!(Some(SymbolKind::Equality), SymbolKind::of("="));
        assert_eq!(Some(SymbolKind::Unary), SymbolKind::of("~"));
        assert_eq!(Some(SymbolKind::Binary), SymbolKind::of("&"));
        assert_eq!(Some(SymbolKind::Quantifier), SymbolKind::of("E"));
        assert_eq!(None, SymbolKind::of("B"));
        assert_eq!(None, SymbolKind::of(""));
    }

    #[test]
    fn test_validated_symbols() {
        assert_eq!("x", V::new("x").unwrap().to_string());
        assert_eq!("c", C::new("c").unwrap().to_string());
        assert_eq!("plus", F::new("plus").unwrap().to_string());
        assert_eq!("R", Pred::new("R").unwrap().to_string());
        assert_eq!(
            Err(Error::InvalidSymbol {
                symbol: "c".to_string(),
                expected: SymbolKind::Variable
            }),
            V::new("c")
        );
        assert!(C::new("x").is_err());
        assert!(F::new("R").is_err());
        assert!(Pred::new("f").is_err());
        assert_eq!(
            "`Q` is not a valid function symbol",
            F::new("Q").unwrap_err().to_string()
        );
    }

    #[test]
    fn test_substitutable_symbols() {
        assert_eq!(Symbol::Var(V::new("x").unwrap()), Symbol::new("x").unwrap());
        assert_eq!(Symbol::Const(C::new("_").unwrap()), Symbol::new("_").unwrap());
        assert_eq!(
            Err(Error::InvalidKey {
                symbol: "f".to_string()
            }),
            Symbol::new("f")
        );
        assert_eq!(
            "`R` is neither a variable nor a constant symbol",
            Symbol::new("R").unwrap_err().to_string()
        );
    }
}

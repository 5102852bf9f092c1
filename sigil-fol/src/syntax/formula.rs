/*! Defines the syntax of first-order formulae with equality and the ingredients for
constructing them. */
use super::{
    is_binary, is_equality, is_quantifier, is_relation, is_unary, is_variable, Error, Pred,
    SymbolKind, Term, C, EQ_SYM, F, NOT_SYM, V,
};
use itertools::Itertools;
use std::{collections::HashSet, fmt};

/// Represents an equation between two terms.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Equals {
    left: Term,
    right: Term,
}

impl Equals {
    /// Creates a new equation.
    pub fn new(left: Term, right: Term) -> Self {
        Self { left, right }
    }

    /// Returns the term on the left of the equation.
    #[inline(always)]
    pub fn left(&self) -> &Term {
        &self.left
    }

    /// Returns the term on the right of the equation.
    #[inline(always)]
    pub fn right(&self) -> &Term {
        &self.right
    }
}

/// Represents an atomic formula, obtained by applying a relation on a list of terms.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Atom {
    predicate: Pred,
    terms: Vec<Term>,
}

impl Atom {
    /// Creates a new atom.
    pub fn new(predicate: Pred, terms: Vec<Term>) -> Self {
        Self { predicate, terms }
    }

    /// Returns the relation symbol of the receiver.
    #[inline(always)]
    pub fn predicate(&self) -> &Pred {
        &self.predicate
    }

    /// Returns the terms of the receiver.
    #[inline(always)]
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }
}

/// Represents the negation of a formula.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Not {
    formula: Formula,
}

impl Not {
    /// Wraps `formula` in a new instance of [`Not`].
    pub fn new(formula: Formula) -> Self {
        Self { formula }
    }

    /// Returns the formula wrapped in the receiver.
    #[inline(always)]
    pub fn formula(&self) -> &Formula {
        &self.formula
    }
}

/// Is a binary connective.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum BinaryOp {
    /// Conjunction, written `&`.
    And,

    /// Disjunction, written `|`.
    Or,

    /// Implication, written `->`.
    Implies,
}

impl BinaryOp {
    /// Returns the symbol of the connective.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::And => "&",
            Self::Or => "|",
            Self::Implies => "->",
        }
    }

    /// Returns the connective written as `symbol`, if any.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "&" => Some(Self::And),
            "|" => Some(Self::Or),
            "->" => Some(Self::Implies),
            _ => None,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents the application of a binary connective on two formulae.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Binary {
    op: BinaryOp,
    first: Formula,
    second: Formula,
}

impl Binary {
    /// Returns the application of `op` on `first` and `second`.
    pub fn new(op: BinaryOp, first: Formula, second: Formula) -> Self {
        Self { op, first, second }
    }

    /// Returns the connective of the receiver.
    #[inline(always)]
    pub fn op(&self) -> BinaryOp {
        self.op
    }

    /// Returns the first operand of the receiver.
    #[inline(always)]
    pub fn first(&self) -> &Formula {
        &self.first
    }

    /// Returns the second operand of the receiver.
    #[inline(always)]
    pub fn second(&self) -> &Formula {
        &self.second
    }
}

/// Is a quantifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Quantifier {
    /// Universal quantifier, written `A`.
    Forall,

    /// Existential quantifier, written `E`.
    Exists,
}

impl Quantifier {
    /// Returns the symbol of the quantifier.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Forall => "A",
            Self::Exists => "E",
        }
    }

    /// Returns the quantifier written as `symbol`, if any.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "A" => Some(Self::Forall),
            "E" => Some(Self::Exists),
            _ => None,
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Represents a formula quantified over a single variable.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Quantified {
    quantifier: Quantifier,
    variable: V,
    formula: Formula,
}

impl Quantified {
    /// Returns `formula` quantified by `quantifier` over `variable`.
    pub fn new(quantifier: Quantifier, variable: V, formula: Formula) -> Self {
        Self {
            quantifier,
            variable,
            formula,
        }
    }

    /// Returns the quantifier of the receiver.
    #[inline(always)]
    pub fn quantifier(&self) -> Quantifier {
        self.quantifier
    }

    /// Returns the bound variable of the receiver.
    #[inline(always)]
    pub fn variable(&self) -> &V {
        &self.variable
    }

    /// Returns the quantified formula (the predicate) of the receiver.
    #[inline(always)]
    pub fn formula(&self) -> &Formula {
        &self.formula
    }
}

/// Is the list of operands passed to [`Formula::new`] next to the root symbol.
#[derive(Clone, Debug)]
pub enum Operands {
    /// The arguments of a relation or of the equality.
    Terms(Vec<Term>),

    /// The operand of a unary operator.
    Unary(Formula),

    /// The operands of a binary operator.
    Binary(Formula, Formula),

    /// The bound variable (by name) and the predicate of a quantifier.
    Quantified(String, Formula),
}

/// Is an abstract syntax tree (AST) for first-order formulae.
///
/// **Note**: Formulae are compared and hashed structurally. Since every symbol of a
/// formula is validated against its lexical class, two formulae are equal exactly when
/// their string representations are equal.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Formula {
    /// Is an equation between two terms, wrapping an [`Equals`].
    Equals(Equals),

    /// Is a relation applied on a list of terms, wrapping an [`Atom`].
    Atom(Atom),

    /// Is the negation of a formula, wrapping a [`Not`].
    Not(Box<Not>),

    /// Is a binary connective applied on two formulae, wrapping a [`Binary`].
    Binary(Box<Binary>),

    /// Is a quantified formula, wrapping a [`Quantified`].
    Quantified(Box<Quantified>),
}

impl From<Equals> for Formula {
    fn from(value: Equals) -> Self {
        Self::Equals(value)
    }
}

impl From<Atom> for Formula {
    fn from(value: Atom) -> Self {
        Self::Atom(value)
    }
}

impl From<Not> for Formula {
    fn from(value: Not) -> Self {
        Self::Not(Box::new(value))
    }
}

impl From<Binary> for Formula {
    fn from(value: Binary) -> Self {
        Self::Binary(Box::new(value))
    }
}

impl From<Quantified> for Formula {
    fn from(value: Quantified) -> Self {
        Self::Quantified(Box::new(value))
    }
}

impl Formula {
    /// Creates a formula from the symbol at its root and the operands of the root.
    /// The shape of the operands must fit the class of `root`:
    ///
    /// * `=` takes exactly two terms and a relation takes any number of terms;
    /// * `~` takes one formula and `&`, `|` and `->` take two;
    /// * `A` and `E` take a variable name and a formula.
    ///
    /// **Example**:
    /// ```rust
    /// use sigil_fol::syntax::{Formula, Operands, Term};
    ///
    /// let x: Term = "x".parse().unwrap();
    /// let c: Term = "c".parse().unwrap();
    /// let eq = Formula::new("=", Operands::Terms(vec![x, c])).unwrap();
    /// let fmla = Formula::new("A", Operands::Quantified("y".into(), eq.clone())).unwrap();
    /// assert_eq!("Ay[x=c]", fmla.to_string());
    ///
    /// assert!(Formula::new("&", Operands::Unary(eq)).is_err());
    /// ```
    pub fn new(root: &str, operands: Operands) -> Result<Self, Error> {
        let mismatch = || Error::OperandMismatch {
            root: root.to_string(),
        };

        if is_equality(root) {
            match operands {
                Operands::Terms(terms) => {
                    if terms.len() != 2 {
                        return Err(Error::EqualityArity { found: terms.len() });
                    }
                    let mut terms = terms.into_iter();
                    match (terms.next(), terms.next()) {
                        (Some(left), Some(right)) => Ok(left.equals(right)),
                        _ => Err(mismatch()),
                    }
                }
                _ => Err(mismatch()),
            }
        } else if is_relation(root) {
            match operands {
                Operands::Terms(terms) => Ok(Pred::new_unchecked(root).app(terms)),
                _ => Err(mismatch()),
            }
        } else if is_unary(root) {
            match operands {
                Operands::Unary(formula) => Ok(Self::not(formula)),
                _ => Err(mismatch()),
            }
        } else if is_binary(root) {
            match (operands, BinaryOp::from_symbol(root)) {
                (Operands::Binary(first, second), Some(op)) => {
                    Ok(Binary::new(op, first, second).into())
                }
                _ => Err(mismatch()),
            }
        } else if is_quantifier(root) {
            match (operands, Quantifier::from_symbol(root)) {
                (Operands::Quantified(variable, formula), Some(quantifier)) => {
                    if !is_variable(&variable) {
                        return Err(Error::InvalidSymbol {
                            symbol: variable,
                            expected: SymbolKind::Variable,
                        });
                    }
                    Ok(Quantified::new(quantifier, V::new_unchecked(variable), formula).into())
                }
                _ => Err(mismatch()),
            }
        } else {
            Err(Error::UnknownRoot {
                root: root.to_string(),
            })
        }
    }

    /// Returns the negation of `formula`.
    pub fn not(formula: Self) -> Self {
        Not::new(formula).into()
    }

    /// Returns the application of `op` on the receiver and `formula`.
    pub fn binary(self, op: BinaryOp, formula: Self) -> Self {
        Binary::new(op, self, formula).into()
    }

    /// Returns a conjunction of the receiver and `formula`.
    pub fn and(self, formula: Self) -> Self {
        self.binary(BinaryOp::And, formula)
    }

    /// Returns a disjunction of the receiver and `formula`.
    pub fn or(self, formula: Self) -> Self {
        self.binary(BinaryOp::Or, formula)
    }

    /// Returns an implication between the receiver and `formula`.
    pub fn implies(self, formula: Self) -> Self {
        self.binary(BinaryOp::Implies, formula)
    }

    /// Returns `formula` universally quantified over `variable`.
    pub fn forall(variable: V, formula: Self) -> Self {
        Quantified::new(Quantifier::Forall, variable, formula).into()
    }

    /// Returns `formula` existentially quantified over `variable`.
    pub fn exists(variable: V, formula: Self) -> Self {
        Quantified::new(Quantifier::Exists, variable, formula).into()
    }

    /// Returns the symbol at the root of the receiver.
    pub fn root(&self) -> &str {
        match self {
            Self::Equals(_) => EQ_SYM,
            Self::Atom(this) => this.predicate.name(),
            Self::Not(_) => NOT_SYM,
            Self::Binary(this) => this.op.symbol(),
            Self::Quantified(this) => this.quantifier.symbol(),
        }
    }

    /// Returns the constant symbols that appear in the receiver.
    pub fn constants(&self) -> HashSet<&C> {
        match self {
            Self::Equals(this) => {
                let mut cs = this.left.constants();
                cs.extend(this.right.constants());
                cs
            }
            Self::Atom(this) => this.terms.iter().flat_map(|t| t.constants()).collect(),
            Self::Not(this) => this.formula.constants(),
            Self::Binary(this) => {
                let mut cs = this.first.constants();
                cs.extend(this.second.constants());
                cs
            }
            Self::Quantified(this) => this.formula.constants(),
        }
    }

    /// Returns the variable symbols that appear in the receiver, including the
    /// variables that are bound by quantifiers.
    pub fn variables(&self) -> HashSet<&V> {
        match self {
            Self::Equals(this) => {
                let mut vs = this.left.variables();
                vs.extend(this.right.variables());
                vs
            }
            Self::Atom(this) => this.terms.iter().flat_map(|t| t.variables()).collect(),
            Self::Not(this) => this.formula.variables(),
            Self::Binary(this) => {
                let mut vs = this.first.variables();
                vs.extend(this.second.variables());
                vs
            }
            Self::Quantified(this) => {
                let mut vs = this.formula.variables();
                vs.insert(&this.variable);
                vs
            }
        }
    }

    /// Returns the variable symbols that have a free occurrence in the receiver, i.e.,
    /// an occurrence outside the scope of every quantifier on them.
    ///
    /// **Example**:
    /// ```rust
    /// use sigil_fol::syntax::{Formula, V};
    ///
    /// let formula: Formula = "(Ay[x=c]&R(y))".parse().unwrap();
    /// let mut free: Vec<_> = formula.free_variables().into_iter().map(V::name).collect();
    /// free.sort();
    /// assert_eq!(vec!["x", "y"], free);
    /// ```
    pub fn free_variables(&self) -> HashSet<&V> {
        match self {
            Self::Equals(_) | Self::Atom(_) => self.variables(),
            Self::Not(this) => this.formula.free_variables(),
            Self::Binary(this) => {
                let mut vs = this.first.free_variables();
                vs.extend(this.second.free_variables());
                vs
            }
            Self::Quantified(this) => {
                let mut vs = this.formula.free_variables();
                vs.remove(&this.variable);
                vs
            }
        }
    }

    /// Returns the function symbols that appear in the receiver, each paired with the
    /// number of arguments it is applied to.
    pub fn functions(&self) -> HashSet<(&F, usize)> {
        match self {
            Self::Equals(this) => {
                let mut fs = this.left.functions();
                fs.extend(this.right.functions());
                fs
            }
            Self::Atom(this) => this.terms.iter().flat_map(|t| t.functions()).collect(),
            Self::Not(this) => this.formula.functions(),
            Self::Binary(this) => {
                let mut fs = this.first.functions();
                fs.extend(this.second.functions());
                fs
            }
            Self::Quantified(this) => this.formula.functions(),
        }
    }

    /// Returns the relation symbols that appear in the receiver, each paired with the
    /// number of arguments it is applied to.
    ///
    /// **Note**: The equality is not a relation symbol.
    pub fn relations(&self) -> HashSet<(&Pred, usize)> {
        match self {
            Self::Equals(_) => HashSet::new(),
            Self::Atom(this) => std::iter::once((&this.predicate, this.terms.len())).collect(),
            Self::Not(this) => this.formula.relations(),
            Self::Binary(this) => {
                let mut rs = this.first.relations();
                rs.extend(this.second.relations());
                rs
            }
            Self::Quantified(this) => this.formula.relations(),
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            Self::Equals(this) => write!(f, "{}={}", this.left, this.right),
            Self::Atom(this) => {
                write!(f, "{}({})", this.predicate, this.terms.iter().join(","))
            }
            Self::Not(this) => write!(f, "{}{}", NOT_SYM, this.formula),
            Self::Binary(this) => write!(f, "({}{}{})", this.first, this.op, this.second),
            Self::Quantified(this) => write!(
                f,
                "{}{}[{}]",
                this.quantifier, this.variable, this.formula
            ),
        }
    }
}

impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq_sorted_vecs, fof, term};

    fn names<T: AsRef<str>>(items: impl IntoIterator<Item = T>) -> Vec<String> {
        items.into_iter().map(|i| i.as_ref().to_string()).collect()
    }

    #[test]
    fn test_formula_new() {
        assert_eq!(
            "x=c",
            Formula::new("=", Operands::Terms(vec![term!(x), term!(c)]))
                .unwrap()
                .to_string()
        );
        assert_eq!(
            "R()",
            Formula::new("R", Operands::Terms(vec![]))
                .unwrap()
                .to_string()
        );
        assert_eq!(
            "~R(x)",
            Formula::new("~", Operands::Unary(fof!(R(x))))
                .unwrap()
                .to_string()
        );
        assert_eq!(
            "(R(x)->Q(y))",
            Formula::new("->", Operands::Binary(fof!(R(x)), fof!(Q(y))))
                .unwrap()
                .to_string()
        );
        assert_eq!(
            "Ex1[R(x1)]",
            Formula::new("E", Operands::Quantified("x1".into(), fof!(R(x1))))
                .unwrap()
                .to_string()
        );
    }

    #[test]
    fn test_formula_new_mismatch() {
        assert_eq!(
            Err(Error::EqualityArity { found: 3 }),
            Formula::new("=", Operands::Terms(vec![term!(x), term!(y), term!(z)]))
        );
        assert_eq!(
            Err(Error::OperandMismatch {
                root: "&".to_string()
            }),
            Formula::new("&", Operands::Unary(fof!(R(x))))
        );
        assert_eq!(
            Err(Error::OperandMismatch {
                root: "~".to_string()
            }),
            Formula::new("~", Operands::Terms(vec![]))
        );
        assert_eq!(
            Err(Error::InvalidSymbol {
                symbol: "c".to_string(),
                expected: SymbolKind::Variable
            }),
            Formula::new("A", Operands::Quantified("c".into(), fof!(R(x))))
        );
        assert_eq!(
            Err(Error::UnknownRoot {
                root: "f".to_string()
            }),
            Formula::new("f", Operands::Terms(vec![term!(x)]))
        );
    }

    #[test]
    fn test_formula_to_string() {
        assert_eq!("x=f(y,c)", term!(x).equals(term!(f(y, c))).to_string());
        assert_eq!("R(x,_)", fof!(R(x, _)).to_string());
        assert_eq!("~~R()", Formula::not(Formula::not(fof!(R()))).to_string());
        assert_eq!(
            "((R(x)&Q(y))|x=y)",
            fof!(R(x)).and(fof!(Q(y))).or(fof!(x = y)).to_string()
        );
        assert_eq!(
            "Ax[Ey[(R(x)->Q(y))]]",
            Formula::forall(
                V::new("x").unwrap(),
                Formula::exists(V::new("y").unwrap(), fof!(R(x)).implies(fof!(Q(y))))
            )
            .to_string()
        );
    }

    #[test]
    fn test_formula_root() {
        assert_eq!("=", fof!(x = y).root());
        assert_eq!("R12", fof!(R12(x)).root());
        assert_eq!("~", fof!(~R(x)).root());
        assert_eq!("->", fof!((R(x) -> R(y))).root());
        assert_eq!("E", fof!(Ex[R(x)]).root());
    }

    #[test]
    fn test_equality_is_textual() {
        let built = Formula::forall(
            V::new("y").unwrap(),
            Term::new("x", None)
                .unwrap()
                .equals(Term::new("c", None).unwrap()),
        );
        assert_eq!(fof!(Ay[x = c]), built);
        assert_ne!(fof!(Ey[x = c]), built);
        assert_ne!(fof!(Ay[c = x]), built);
    }

    #[test]
    fn test_formula_constants() {
        assert_eq_sorted_vecs!(
            names(vec!["c", "d", "0"]),
            names(
                fof!(Ax[(R(c, f(d)) | ~g(x) = 0)])
                    .constants()
                    .into_iter()
                    .map(C::name)
            )
        );
    }

    #[test]
    fn test_formula_variables() {
        assert_eq_sorted_vecs!(
            names(vec!["w", "x", "y", "z"]),
            names(
                fof!((Ax[R(x, y)] & Ew[z = f(y)]))
                    .variables()
                    .into_iter()
                    .map(V::name)
            )
        );
    }

    #[test]
    fn test_formula_free_variables() {
        assert_eq_sorted_vecs!(
            names(vec!["x"]),
            names(fof!(Ay[x = c]).free_variables().into_iter().map(V::name))
        );
        assert_eq_sorted_vecs!(
            names(vec!["x", "y"]),
            names(
                fof!((Ax[R(x, y)] & R(x)))
                    .free_variables()
                    .into_iter()
                    .map(V::name)
            )
        );
        assert!(fof!(Ax[Ay[x = y]]).free_variables().is_empty());
        assert!(fof!(Az[R(c)]).free_variables().is_empty());
    }

    #[test]
    fn test_formula_functions() {
        assert_eq_sorted_vecs!(
            vec![("f", 1), ("f", 2), ("g", 1)],
            fof!((R(f(x)) & Ex[f(x, y) = g(c)]))
                .functions()
                .into_iter()
                .map(|(f, n)| (f.name(), n))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_formula_relations() {
        assert!(fof!(x = y).relations().is_empty());
        assert_eq_sorted_vecs!(
            vec![("Q", 0), ("R", 1), ("R", 2)],
            fof!(((R(x) & ~R(x, y)) -> Ez[(Q() | x = z)]))
                .relations()
                .into_iter()
                .map(|(p, n)| (p.name(), n))
                .collect::<Vec<_>>()
        );
    }
}

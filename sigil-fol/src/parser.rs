//! Implements a recursive-descent parser for first-order terms and formulae, and for
//! propositional formulae, in their canonical syntax.
//!
//! The parser is used through the [`FromStr`] implementations of [`Term`], [`Formula`]
//! and [`PropFormula`], or through [`Term::parse_prefix`] and [`Formula::parse_prefix`]
//! to read a term or a formula at the beginning of a string.
//!
//! **Example**:
//! The following example parses a string into a [`Formula`]:
//! ```rust
//! use sigil_fol::syntax::Formula;
//!
//! let formula: Formula = "Ax[(R(x)->Ey[f(x)=y])]".parse().unwrap();
//! assert_eq!("Ax[(R(x)->Ey[f(x)=y])]", formula.to_string());
//!
//! // the canonical syntax has no whitespace:
//! assert!("Ax[(R(x) -> Ey[f(x)=y])]".parse::<Formula>().is_err());
//! ```
//!
//! A term may be read off the beginning of a string, leaving the rest unparsed:
//! ```rust
//! use sigil_fol::syntax::Term;
//!
//! let (term, rest) = Term::parse_prefix("plus(x12,c)=y").unwrap();
//! assert_eq!("plus(x12,c)", term.to_string());
//! assert_eq!("=y", rest);
//! ```
//!
//! [`Term`]: crate::syntax::Term
//! [`Formula`]: crate::syntax::Formula
//! [`PropFormula`]: crate::prop::PropFormula
//! [`FromStr`]: std::str::FromStr
use crate::prop::{PropFormula, PropVar};
use crate::syntax::{
    App, BinaryOp, Formula, Pred, Quantified, Quantifier, SymbolKind, Term, C, F, V,
};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Is the maximum nesting depth of parenthesized, bracketed and negated constructs. Trees
/// of this depth are parsed, printed and transformed within the stack of a default thread.
pub const MAX_DEPTH: usize = 128;

#[derive(PartialEq, Debug)]
pub enum TokenType {
    Comma,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Equal,
    Not,
    And,
    Or,
    Implies,
    Variable,
    Term,
    Formula,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::Comma => "`,`",
            Self::LParen => "`(`",
            Self::RParen => "`)`",
            Self::LBracket => "`[`",
            Self::RBracket => "`]`",
            Self::Equal => "`=`",
            Self::Not => "`~`",
            Self::And => "`&`",
            Self::Or => "`|`",
            Self::Implies => "`->`",
            Self::Variable => "`variable`",
            Self::Term => "`term`",
            Self::Formula => "`formula`",
        };
        write!(f, "{}", s)
    }
}

/// Is the type of errors returned by the parser.
#[derive(Error, PartialEq, Debug)]
pub enum Error {
    #[error("found `{found}` at {position}; expecting {}",
            Error::pretty_expected_tokens(&*.expected),
    )]
    UnexpectedChar {
        found: char,
        position: Position,
        expected: Vec<TokenType>,
    },
    #[error("unexpected end of input at {position}; expecting {}",
            Error::pretty_expected_tokens(&*.expected)
    )]
    UnexpectedEof {
        position: Position,
        expected: Vec<TokenType>,
    },
    #[error("unexpected input `{found}` at {position}")]
    TrailingInput { found: String, position: Position },
    #[error("input is nested deeper than {limit} levels at {position}")]
    TooDeep { position: Position, limit: usize },
    #[error("{}", .source.to_string())]
    Syntax {
        #[from]
        source: crate::syntax::Error,
    },
}

impl Error {
    fn pretty_expected_tokens(items: &[TokenType]) -> String {
        let strs = items.iter().map(ToString::to_string).collect::<Vec<_>>();
        match items.len() {
            0 => "".into(),
            1 => strs[0].to_string(),
            2 => format!("{} or {}", strs[0], strs[1]),
            n => format!("{}, or {}", strs[0..n - 1].join(", "), strs[n - 1]),
        }
    }
}

/// Is the byte offset of an error in the string handed to the parser.
#[derive(PartialEq, Clone, Copy, Debug)]
pub struct Position {
    offset: usize,
}

impl Position {
    /// Returns the byte offset of the position.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "offset {}", self.offset)
    }
}

// the class of a symbol that starts with `c`:
fn class_of(c: char) -> Option<SymbolKind> {
    let mut buf = [0u8; 4];
    SymbolKind::of(c.encode_utf8(&mut buf))
}

// A cursor over the source, reading one construct at a time.
pub(crate) struct Parser<'s> {
    source: &'s str,
    position: usize,
    depth: usize,
}

impl<'s> Parser<'s> {
    pub(crate) fn new(source: &'s str) -> Self {
        Self {
            source,
            position: 0,
            depth: 0,
        }
    }

    /// Returns the unparsed suffix of the source.
    pub(crate) fn rest(&self) -> &'s str {
        &self.source[self.position..]
    }

    /// Fails if any input is left unparsed.
    pub(crate) fn finish(&self) -> Result<(), Error> {
        if self.position < self.source.len() {
            Err(Error::TrailingInput {
                found: self.rest().to_string(),
                position: self.here(),
            })
        } else {
            Ok(())
        }
    }

    pub(crate) fn term(&mut self) -> Result<Term, Error> {
        match self.peek().and_then(class_of) {
            Some(SymbolKind::Variable) => Ok(V::new_unchecked(self.name()).into()),
            Some(SymbolKind::Constant) => Ok(C::new_unchecked(self.name()).into()),
            Some(SymbolKind::Function) => {
                let function = F::new_unchecked(self.name());
                self.expect('(', TokenType::LParen)?;
                self.enter()?;
                let terms = self.arguments()?;
                self.exit();
                Ok(App::new(function, terms)?.into())
            }
            _ => Err(self.unexpected(vec![TokenType::Term])),
        }
    }

    pub(crate) fn formula(&mut self) -> Result<Formula, Error> {
        let first = match self.peek() {
            Some(c) => c,
            None => return Err(self.unexpected(vec![TokenType::Formula])),
        };

        match first {
            '~' => {
                self.bump(first);
                self.enter()?;
                let formula = self.formula()?;
                self.exit();
                Ok(Formula::not(formula))
            }
            '(' => {
                self.bump(first);
                self.enter()?;
                let left = self.formula()?;
                let op = self.binary_op()?;
                let right = self.formula()?;
                self.expect(')', TokenType::RParen)?;
                self.exit();
                Ok(left.binary(op, right))
            }
            _ => match class_of(first) {
                Some(SymbolKind::Variable)
                | Some(SymbolKind::Constant)
                | Some(SymbolKind::Function) => {
                    let left = self.term()?;
                    self.expect('=', TokenType::Equal)?;
                    let right = self.term()?;
                    Ok(left.equals(right))
                }
                Some(SymbolKind::Relation) => {
                    let predicate = Pred::new_unchecked(self.name());
                    self.expect('(', TokenType::LParen)?;
                    self.enter()?;
                    let terms = if self.eat(')') {
                        Vec::new()
                    } else {
                        self.arguments()?
                    };
                    self.exit();
                    Ok(predicate.app(terms))
                }
                Some(SymbolKind::Quantifier) => {
                    let quantifier = if first == 'A' {
                        Quantifier::Forall
                    } else {
                        Quantifier::Exists
                    };
                    self.bump(first);
                    let variable = match self.peek().and_then(class_of) {
                        Some(SymbolKind::Variable) => V::new_unchecked(self.name()),
                        _ => return Err(self.unexpected(vec![TokenType::Variable])),
                    };
                    self.expect('[', TokenType::LBracket)?;
                    self.enter()?;
                    let formula = self.formula()?;
                    self.expect(']', TokenType::RBracket)?;
                    self.exit();
                    Ok(Quantified::new(quantifier, variable, formula).into())
                }
                _ => Err(self.unexpected(vec![TokenType::Formula])),
            },
        }
    }

    pub(crate) fn prop_formula(&mut self) -> Result<PropFormula, Error> {
        let first = match self.peek() {
            Some(c) => c,
            None => return Err(self.unexpected(vec![TokenType::Formula])),
        };

        match first {
            '~' => {
                self.bump(first);
                self.enter()?;
                let formula = self.prop_formula()?;
                self.exit();
                Ok(PropFormula::not(formula))
            }
            '(' => {
                self.bump(first);
                self.enter()?;
                let left = self.prop_formula()?;
                let op = self.binary_op()?;
                let right = self.prop_formula()?;
                self.expect(')', TokenType::RParen)?;
                self.exit();
                Ok(PropFormula::binary(op, left, right))
            }
            'T' => {
                self.bump(first);
                Ok(PropFormula::Top)
            }
            'F' => {
                self.bump(first);
                Ok(PropFormula::Bottom)
            }
            'p'..='z' => {
                let start = self.position;
                self.bump(first);
                while let Some(c) = self.peek() {
                    if c.is_ascii_digit() {
                        self.bump(c);
                    } else {
                        break;
                    }
                }
                Ok(PropVar::new_unchecked(&self.source[start..self.position]).into())
            }
            _ => Err(self.unexpected(vec![TokenType::Formula])),
        }
    }

    // after `(`: one or more terms separated by `,` and closed by `)`
    fn arguments(&mut self) -> Result<Vec<Term>, Error> {
        let mut terms = Vec::new();
        loop {
            terms.push(self.term()?);
            match self.peek() {
                Some(',') => self.bump(','),
                Some(')') => {
                    self.bump(')');
                    return Ok(terms);
                }
                _ => return Err(self.unexpected(vec![TokenType::Comma, TokenType::RParen])),
            }
        }
    }

    fn binary_op(&mut self) -> Result<BinaryOp, Error> {
        match self.peek() {
            Some('&') => {
                self.bump('&');
                Ok(BinaryOp::And)
            }
            Some('|') => {
                self.bump('|');
                Ok(BinaryOp::Or)
            }
            Some('-') => {
                self.bump('-');
                self.expect('>', TokenType::Implies)?;
                Ok(BinaryOp::Implies)
            }
            _ => Err(self.unexpected(vec![TokenType::And, TokenType::Or, TokenType::Implies])),
        }
    }

    // reads the longest name at the cursor; `_` is a name on its own
    fn name(&mut self) -> &'s str {
        let start = self.position;
        if let Some(c) = self.peek() {
            self.bump(c);
            if c == '_' {
                return &self.source[start..self.position];
            }
        }
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() {
                self.bump(c);
            } else {
                break;
            }
        }
        &self.source[start..self.position]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self, c: char) {
        self.position += c.len_utf8();
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump(expected);
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char, token: TokenType) -> Result<(), Error> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.unexpected(vec![token]))
        }
    }

    fn enter(&mut self) -> Result<(), Error> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(Error::TooDeep {
                position: self.here(),
                limit: MAX_DEPTH,
            });
        }
        Ok(())
    }

    fn exit(&mut self) {
        self.depth -= 1;
    }

    fn here(&self) -> Position {
        Position {
            offset: self.position,
        }
    }

    fn unexpected(&self, expected: Vec<TokenType>) -> Error {
        match self.peek() {
            Some(found) => Error::UnexpectedChar {
                found,
                position: self.here(),
                expected,
            },
            None => Error::UnexpectedEof {
                position: self.here(),
                expected,
            },
        }
    }
}

impl Term {
    /// Parses the longest prefix of `s` that is a term and returns the term together with
    /// the unparsed suffix of `s`. Variable and constant names are read in full, so the
    /// prefix of `"x12)"` is `x12` and not `x1`.
    pub fn parse_prefix(s: &str) -> Result<(Self, &str), Error> {
        let mut parser = Parser::new(s);
        let term = parser.term()?;
        Ok((term, parser.rest()))
    }

    /// Parses `s` as a term; the whole of `s` must be consumed.
    pub fn parse(s: &str) -> Result<Self, Error> {
        s.parse()
    }
}

impl FromStr for Term {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new(s);
        let term = parser.term()?;
        parser.finish()?;
        Ok(term)
    }
}

impl Formula {
    /// Parses the longest prefix of `s` that is a formula and returns the formula together
    /// with the unparsed suffix of `s`.
    ///
    /// **Example**:
    /// ```rust
    /// use sigil_fol::syntax::Formula;
    ///
    /// let (formula, rest) = Formula::parse_prefix("~R(x,c1)&Q()").unwrap();
    /// assert_eq!("~R(x,c1)", formula.to_string());
    /// assert_eq!("&Q()", rest);
    /// ```
    pub fn parse_prefix(s: &str) -> Result<(Self, &str), Error> {
        let mut parser = Parser::new(s);
        let formula = parser.formula()?;
        Ok((formula, parser.rest()))
    }

    /// Parses `s` as a formula; the whole of `s` must be consumed.
    pub fn parse(s: &str) -> Result<Self, Error> {
        s.parse()
    }
}

impl FromStr for Formula {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new(s);
        let formula = parser.formula()?;
        parser.finish()?;
        Ok(formula)
    }
}

impl FromStr for PropFormula {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new(s);
        let formula = parser.prop_formula()?;
        parser.finish()?;
        Ok(formula)
    }
}

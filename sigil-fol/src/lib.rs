/*! Provides a set of tools for parsing first-order terms and formulae, printing them in their
canonical form, applying capture-avoiding substitutions and abstracting formulae into their
propositional skeletons. */

pub mod fresh;
pub mod parser;
pub mod prop;
pub mod syntax;
#[cfg(test)]
pub mod test_macros;
pub mod trace;
pub mod transform;

/*! Provides a generator of fresh names for propositional placeholders. */

use crate::syntax::Error;

/// Is the default prefix of the names generated by [`FreshNames`].
pub const DEFAULT_PREFIX: &str = "z";

/// Generates the names `z1`, `z2`, `z3`, ... (or the same sequence under a different
/// prefix). The generator is owned by its caller: two generators never share state.
///
/// **Example**:
/// ```rust
/// use sigil_fol::fresh::FreshNames;
///
/// let mut names = FreshNames::new();
/// assert_eq!(Some("z1".to_string()), names.next());
/// assert_eq!(Some("z2".to_string()), names.next());
///
/// let names = FreshNames::with_prefix("p").unwrap();
/// assert_eq!(vec!["p1", "p2"], names.take(2).collect::<Vec<_>>());
///
/// // every generated name must be a propositional variable:
/// assert!(FreshNames::with_prefix("a").is_err());
/// ```
#[derive(Clone, Debug)]
pub struct FreshNames {
    prefix: String,
    index: u64,
}

impl FreshNames {
    /// Creates a generator of names with the default prefix `z`.
    pub fn new() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            index: 0,
        }
    }

    /// Creates a generator of names starting with `prefix`, which must be a single letter
    /// between `p` and `z` so that every name is a [propositional variable].
    ///
    /// [propositional variable]: crate::prop::is_prop_variable
    pub fn with_prefix<S: Into<String>>(prefix: S) -> Result<Self, Error> {
        let prefix = prefix.into();
        let mut chars = prefix.chars();
        match (chars.next(), chars.next()) {
            (Some('p'..='z'), None) => Ok(Self { prefix, index: 0 }),
            _ => Err(Error::InvalidPrefix { prefix }),
        }
    }

    /// Returns the next name of the sequence.
    pub fn fresh(&mut self) -> String {
        self.index += 1;
        format!("{}{}", self.prefix, self.index)
    }

    /// Returns the prefix of the generated names.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for FreshNames {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FreshNames {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.fresh())
    }
}

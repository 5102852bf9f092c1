/*! Implements the conversion of first-order formulae to and from their propositional
skeletons.

The skeleton of a formula keeps its Boolean structure (negations and binary connectives)
and replaces every maximal subformula that is an equation, a relation or a quantified
formula with a propositional variable. The subformulae are recorded in a [`SkeletonMap`],
which is enough to rebuild the original formula.*/

use super::Error;
use crate::{
    fresh::FreshNames,
    prop::{PropFormula, PropVar},
    syntax::{BinaryOp, Formula},
};
use tracing::{debug, span, trace};

/// Maps the placeholders of a propositional skeleton to the first-order formulae they stand
/// for, in the order in which the placeholders were introduced.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct SkeletonMap {
    entries: Vec<(PropVar, Formula)>,
}

impl SkeletonMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of placeholders in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no placeholders.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the formula that `placeholder` stands for.
    pub fn get(&self, placeholder: &PropVar) -> Option<&Formula> {
        self.entries
            .iter()
            .find(|(p, _)| p == placeholder)
            .map(|(_, f)| f)
    }

    /// Returns the placeholder of `formula`, if `formula` is in the map.
    pub fn placeholder_of(&self, formula: &Formula) -> Option<&PropVar> {
        self.entries
            .iter()
            .find(|(_, f)| f == formula)
            .map(|(p, _)| p)
    }

    /// Adds a placeholder to the map, replacing the formula of an existing one.
    pub fn insert(&mut self, placeholder: PropVar, formula: Formula) {
        match self.entries.iter_mut().find(|(p, _)| *p == placeholder) {
            Some(entry) => entry.1 = formula,
            None => self.entries.push((placeholder, formula)),
        }
    }

    /// Returns an iterator over the placeholders and their formulae, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&PropVar, &Formula)> {
        self.entries.iter().map(|(p, f)| (p, f))
    }
}

/// Is the trait of formulae that can be abstracted to a propositional skeleton.
pub trait ToSkeleton {
    /// Returns the propositional skeleton of the receiver together with the map from its
    /// placeholders to the subformulae they replace. Placeholders are drawn from `names`
    /// in order; identical subformulae share a placeholder.
    ///
    /// **Example**:
    /// ```rust
    /// use sigil_fol::{fresh::FreshNames, syntax::Formula};
    /// use sigil_fol::transform::ToSkeleton;
    ///
    /// let formula: Formula = "(R(x)->(~x=y&R(x)))".parse().unwrap();
    /// let mut names = FreshNames::new();
    /// let (skeleton, map) = formula.propositional_skeleton_with(&mut names);
    /// assert_eq!("(z1->(~z2&z1))", skeleton.to_string());
    /// assert_eq!(2, map.len());
    ///
    /// // the generator carries on where it stopped:
    /// let (skeleton, _) = formula.propositional_skeleton_with(&mut names);
    /// assert_eq!("(z3->(~z4&z3))", skeleton.to_string());
    /// ```
    fn propositional_skeleton_with(&self, names: &mut FreshNames) -> (PropFormula, SkeletonMap);

    /// Returns the propositional skeleton of the receiver with placeholders `z1`, `z2`, ...
    fn propositional_skeleton(&self) -> (PropFormula, SkeletonMap) {
        self.propositional_skeleton_with(&mut FreshNames::new())
    }
}

impl ToSkeleton for Formula {
    fn propositional_skeleton_with(&self, names: &mut FreshNames) -> (PropFormula, SkeletonMap) {
        let span = span!(
            tracing::Level::TRACE,
            crate::trace::SKELETON,
            formula = %self
        );
        let _enter = span.enter();

        let mut map = SkeletonMap::new();
        let skeleton = skeleton(self, names, &mut map);
        (skeleton, map)
    }
}

fn skeleton(formula: &Formula, names: &mut FreshNames, map: &mut SkeletonMap) -> PropFormula {
    match formula {
        Formula::Not(this) => PropFormula::not(skeleton(this.formula(), names, map)),
        Formula::Binary(this) => {
            let first = skeleton(this.first(), names, map);
            let second = skeleton(this.second(), names, map);
            PropFormula::binary(this.op(), first, second)
        }
        _ => {
            if let Some(placeholder) = map.placeholder_of(formula) {
                trace!(
                    event = crate::trace::REUSE,
                    placeholder = %placeholder,
                    formula = %formula,
                );
                return placeholder.clone().into();
            }

            let placeholder = PropVar::new_unchecked(names.fresh());
            debug!(
                event = crate::trace::MINT,
                placeholder = %placeholder,
                formula = %formula,
            );
            map.insert(placeholder.clone(), formula.clone());
            placeholder.into()
        }
    }
}

impl Formula {
    /// Rebuilds a first-order formula from a propositional skeleton by replacing its
    /// variables with the formulae they stand for in `map`.
    ///
    /// **Example**:
    /// ```rust
    /// use sigil_fol::{prop::PropFormula, syntax::Formula};
    /// use sigil_fol::transform::ToSkeleton;
    ///
    /// let formula: Formula = "(Ax[R(x)]|~c=d)".parse().unwrap();
    /// let (skeleton, map) = formula.propositional_skeleton();
    /// assert_eq!(formula, Formula::from_propositional_skeleton(&skeleton, &map).unwrap());
    ///
    /// let other: PropFormula = "(z2&z1)".parse().unwrap();
    /// assert_eq!(
    ///     "(c=d&Ax[R(x)])",
    ///     Formula::from_propositional_skeleton(&other, &map).unwrap().to_string(),
    /// );
    /// ```
    pub fn from_propositional_skeleton(
        skeleton: &PropFormula,
        map: &SkeletonMap,
    ) -> Result<Self, Error> {
        match skeleton {
            PropFormula::Var(placeholder) => {
                map.get(placeholder)
                    .cloned()
                    .ok_or_else(|| Error::MissingPlaceholder {
                        name: placeholder.name().to_string(),
                    })
            }
            PropFormula::Top => Err(Error::UnsupportedConnective { symbol: "T".into() }),
            PropFormula::Bottom => Err(Error::UnsupportedConnective { symbol: "F".into() }),
            PropFormula::Not(this) => {
                let formula = Self::from_propositional_skeleton(this, map)?;
                Ok(Formula::not(formula))
            }
            PropFormula::And(l, r) => Self::rebuild(BinaryOp::And, l, r, map),
            PropFormula::Or(l, r) => Self::rebuild(BinaryOp::Or, l, r, map),
            PropFormula::Implies(l, r) => Self::rebuild(BinaryOp::Implies, l, r, map),
        }
    }

    fn rebuild(
        op: BinaryOp,
        first: &PropFormula,
        second: &PropFormula,
        map: &SkeletonMap,
    ) -> Result<Self, Error> {
        let first = Self::from_propositional_skeleton(first, map)?;
        let second = Self::from_propositional_skeleton(second, map)?;
        Ok(first.binary(op, second))
    }
}

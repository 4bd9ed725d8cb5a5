//! The nine semantic categories a formula string can classify into.

use std::fmt;

/// Classification outcome for a formula string.
///
/// Discriminants match the numeric codes used by the external driver, so
/// `category as u8` (or the `From<Category> for u8` impl below) always
/// agrees with the documented verdict/category table.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Category {
    /// Not a formula.
    NotAFormula = 0,
    /// Atom: `P(t1,t2)`.
    Atom = 1,
    /// Negation of a first-order formula.
    NegFirstOrder = 2,
    /// Universally quantified formula `Av phi`.
    Universal = 3,
    /// Existentially quantified formula `Ev phi`.
    Existential = 4,
    /// Binary first-order formula `(phi1 . phi2)`.
    BinaryFirstOrder = 5,
    /// Proposition `p`, `q`, `r`, or `s`.
    Proposition = 6,
    /// Negation of a propositional formula.
    NegPropositional = 7,
    /// Binary propositional formula.
    BinaryPropositional = 8,
}

impl Category {
    /// First-order categories, 1..=5.
    pub fn is_first_order(self) -> bool {
        matches!(
            self,
            Category::Atom
                | Category::NegFirstOrder
                | Category::Universal
                | Category::Existential
                | Category::BinaryFirstOrder
        )
    }

    /// Propositional categories, 6..=8.
    pub fn is_propositional(self) -> bool {
        matches!(
            self,
            Category::Proposition | Category::NegPropositional | Category::BinaryPropositional
        )
    }

    /// True for a node that carries no further tableau expansion: it is left
    /// in place for the closure check.
    pub fn is_literal(self) -> bool {
        matches!(self, Category::Atom | Category::Proposition)
    }
}

impl From<Category> for u8 {
    fn from(value: Category) -> Self {
        value as u8
    }
}

impl fmt::Display for Category {
    /// Human-readable name, used by the driver's `PARSE` mode.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let text = match self {
            Category::NotAFormula => "not a formula",
            Category::Atom => "an atom",
            Category::NegFirstOrder => "a negation of a first order logic formula",
            Category::Universal => "a universally quantified formula",
            Category::Existential => "an existentially quantified formula",
            Category::BinaryFirstOrder => "a binary connective first order formula",
            Category::Proposition => "a proposition",
            Category::NegPropositional => "a negation of a propositional formula",
            Category::BinaryPropositional => "a binary connective propositional formula",
        };
        write!(f, "{text}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_order_and_propositional_ranges_are_disjoint() {
        let first_order = [
            Category::Atom,
            Category::NegFirstOrder,
            Category::Universal,
            Category::Existential,
            Category::BinaryFirstOrder,
        ];
        let propositional = [
            Category::Proposition,
            Category::NegPropositional,
            Category::BinaryPropositional,
        ];
        for c in first_order {
            assert!(c.is_first_order());
            assert!(!c.is_propositional());
        }
        for c in propositional {
            assert!(c.is_propositional());
            assert!(!c.is_first_order());
        }
        assert!(!Category::NotAFormula.is_first_order());
        assert!(!Category::NotAFormula.is_propositional());
    }

    #[test]
    fn discriminants_match_documented_codes() {
        assert_eq!(u8::from(Category::NotAFormula), 0);
        assert_eq!(u8::from(Category::Atom), 1);
        assert_eq!(u8::from(Category::NegFirstOrder), 2);
        assert_eq!(u8::from(Category::Universal), 3);
        assert_eq!(u8::from(Category::Existential), 4);
        assert_eq!(u8::from(Category::BinaryFirstOrder), 5);
        assert_eq!(u8::from(Category::Proposition), 6);
        assert_eq!(u8::from(Category::NegPropositional), 7);
        assert_eq!(u8::from(Category::BinaryPropositional), 8);
    }
}

//! School-dependent element assignments.
//!
//! Two symbols are disputed between schools of the tradition: Lingering is
//! earth in one lineage and water in another; Small Luck is water in one and
//! wood in another. The engine takes the chosen assignments as an injected
//! value rather than hard-wiring either school. Only these two symbols are
//! overridable.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::symbol::Symbol;

/// Element overrides for the two disputed symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementOverrides {
    /// Element for Lingering (留连). `None` keeps the default, earth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lingering: Option<Element>,

    /// Element for Small Luck (小吉). `None` keeps the default, water.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub small_luck: Option<Element>,
}

impl ElementOverrides {
    /// No overrides; every symbol keeps its default element.
    pub fn none() -> Self {
        Self::default()
    }

    /// The alternative school: Lingering as water, Small Luck as wood.
    pub fn alternative_school() -> Self {
        Self {
            lingering: Some(Element::Water),
            small_luck: Some(Element::Wood),
        }
    }

    /// The effective element of a symbol under these overrides.
    ///
    /// Only Lingering and Small Luck are affected; every other symbol always
    /// resolves to its default element. Applying the same overrides twice is
    /// the same as applying them once.
    pub fn element_of(&self, symbol: Symbol) -> Element {
        match symbol {
            Symbol::Lingering => self.lingering.unwrap_or_else(|| symbol.default_element()),
            Symbol::SmallLuck => self.small_luck.unwrap_or_else(|| symbol.default_element()),
            _ => symbol.default_element(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_overrides_resolve_to_defaults() {
        let ov = ElementOverrides::none();
        for s in Symbol::all() {
            assert_eq!(ov.element_of(*s), s.default_element());
        }
    }

    #[test]
    fn overrides_affect_only_the_two_disputed_symbols() {
        let ov = ElementOverrides {
            lingering: Some(Element::Water),
            small_luck: Some(Element::Wood),
        };
        assert_eq!(ov.element_of(Symbol::Lingering), Element::Water);
        assert_eq!(ov.element_of(Symbol::SmallLuck), Element::Wood);
        assert_eq!(ov.element_of(Symbol::GreatPeace), Element::Wood);
        assert_eq!(ov.element_of(Symbol::RedMouth), Element::Metal);
        assert_eq!(ov.element_of(Symbol::Emptiness), Element::Earth);
    }

    #[test]
    fn resolution_is_idempotent() {
        let ov = ElementOverrides::alternative_school();
        for s in Symbol::all() {
            assert_eq!(ov.element_of(*s), ov.element_of(*s));
        }
    }

    #[test]
    fn serde_skips_absent_fields() {
        let json = serde_json::to_string(&ElementOverrides::none()).unwrap();
        assert_eq!(json, "{}");
        let ov: ElementOverrides = serde_json::from_str("{\"lingering\":\"water\"}").unwrap();
        assert_eq!(ov.lingering, Some(Element::Water));
        assert_eq!(ov.small_luck, None);
    }
}

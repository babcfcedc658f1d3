//! Five-element (wuxing) cycles and ordered-pair classification.
//!
//! The generating cycle runs wood→fire→earth→metal→water→wood; the
//! overcoming cycle runs wood→earth→water→fire→metal→wood. Every ordered
//! pair of distinct elements falls into exactly one of four relations;
//! identical elements are "same nature".

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the five traditional elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// 木
    Wood,
    /// 火
    Fire,
    /// 土
    Earth,
    /// 金
    Metal,
    /// 水
    Water,
}

impl Element {
    /// All elements in generating-cycle order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Wood,
            Self::Fire,
            Self::Earth,
            Self::Metal,
            Self::Water,
        ]
    }

    /// The element this one generates (sheng cycle).
    pub fn generates(self) -> Self {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one overcomes (ke cycle).
    pub fn overcomes(self) -> Self {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }

    /// Single-character Chinese name.
    pub fn name_zh(self) -> &'static str {
        match self {
            Self::Wood => "木",
            Self::Fire => "火",
            Self::Earth => "土",
            Self::Metal => "金",
            Self::Water => "水",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Element {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "wood" | "木" => Ok(Self::Wood),
            "fire" | "火" => Ok(Self::Fire),
            "earth" | "土" => Ok(Self::Earth),
            "metal" | "金" => Ok(Self::Metal),
            "water" | "水" => Ok(Self::Water),
            _ => Err(CoreError::UnknownElement(s.to_string())),
        }
    }
}

/// How a subject element stands to another element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    /// Subject generates the other (相生).
    Generating,
    /// Subject overcomes the other (相克).
    Overcoming,
    /// The other generates the subject, which is drained toward it (被泄).
    Weakening,
    /// The other overcomes the subject (被克).
    Counteracting,
    /// Identical elements (同性).
    Same,
}

impl Relation {
    /// Classify the ordered pair subject→other.
    ///
    /// In a five-element system each element has exactly one generate-target,
    /// one generate-source, one overcome-target, and one overcome-source, so
    /// the four non-identical relations partition all distinct pairs.
    pub fn classify(subject: Element, other: Element) -> Self {
        if subject == other {
            Self::Same
        } else if subject.generates() == other {
            Self::Generating
        } else if subject.overcomes() == other {
            Self::Overcoming
        } else if other.generates() == subject {
            Self::Weakening
        } else {
            Self::Counteracting
        }
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Generating => "generating",
            Self::Overcoming => "overcoming",
            Self::Weakening => "weakening",
            Self::Counteracting => "counteracting",
            Self::Same => "same",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generating_cycle_closes() {
        let mut e = Element::Wood;
        for _ in 0..5 {
            e = e.generates();
        }
        assert_eq!(e, Element::Wood);
    }

    #[test]
    fn overcoming_cycle_closes() {
        let mut e = Element::Wood;
        for _ in 0..5 {
            e = e.overcomes();
        }
        assert_eq!(e, Element::Wood);
    }

    #[test]
    fn generate_and_overcome_targets_differ() {
        for e in Element::all() {
            assert_ne!(e.generates(), e.overcomes());
            assert_ne!(e.generates(), *e);
            assert_ne!(e.overcomes(), *e);
        }
    }

    #[test]
    fn classify_known_pairs() {
        assert_eq!(
            Relation::classify(Element::Wood, Element::Fire),
            Relation::Generating
        );
        assert_eq!(
            Relation::classify(Element::Wood, Element::Earth),
            Relation::Overcoming
        );
        assert_eq!(
            Relation::classify(Element::Fire, Element::Wood),
            Relation::Weakening
        );
        assert_eq!(
            Relation::classify(Element::Wood, Element::Metal),
            Relation::Counteracting
        );
        assert_eq!(
            Relation::classify(Element::Earth, Element::Earth),
            Relation::Same
        );
    }

    #[test]
    fn every_distinct_pair_has_one_relation() {
        // 20 ordered distinct pairs, none may fall through to "same".
        for a in Element::all() {
            for b in Element::all() {
                let rel = Relation::classify(*a, *b);
                if a == b {
                    assert_eq!(rel, Relation::Same);
                } else {
                    assert_ne!(rel, Relation::Same, "{a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn parse_accepts_both_scripts() {
        assert_eq!("wood".parse::<Element>().unwrap(), Element::Wood);
        assert_eq!("水".parse::<Element>().unwrap(), Element::Water);
        assert_eq!("METAL".parse::<Element>().unwrap(), Element::Metal);
        assert!("aether".parse::<Element>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Element::Wood).unwrap();
        assert_eq!(json, "\"wood\"");
        let e: Element = serde_json::from_str("\"water\"").unwrap();
        assert_eq!(e, Element::Water);
    }
}

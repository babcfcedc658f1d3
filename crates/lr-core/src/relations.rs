//! Per-symbol five-element relationship analysis.
//!
//! For a subject symbol, classifies its effective element against each of
//! the other five symbols and renders the traditional one-line description
//! (e.g. `大安(木)生速喜(火)`, `速喜(火)被小吉(水)克`).

use serde::{Deserialize, Serialize};

use crate::element::{Element, Relation};
use crate::overrides::ElementOverrides;
use crate::symbol::Symbol;

/// One row of a symbol's relationship analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationEntry {
    /// The other symbol.
    pub other: Symbol,
    /// The other symbol's effective element.
    pub other_element: Element,
    /// How the subject stands to the other.
    pub relation: Relation,
    /// Rendered description line.
    pub description: String,
}

/// Classify a subject symbol against each of the other five.
///
/// Overrides are applied to both sides before classification, so a school
/// that reads Small Luck as wood changes every pairing that touches it.
/// Always returns exactly five entries, in wheel order.
pub fn relationships_of(subject: Symbol, overrides: &ElementOverrides) -> Vec<RelationEntry> {
    let subject_element = overrides.element_of(subject);

    Symbol::all()
        .iter()
        .filter(|s| **s != subject)
        .map(|other| {
            let other_element = overrides.element_of(*other);
            let relation = Relation::classify(subject_element, other_element);
            let description =
                describe(subject, subject_element, *other, other_element, relation);
            RelationEntry {
                other: *other,
                other_element,
                relation,
                description,
            }
        })
        .collect()
}

fn describe(
    subject: Symbol,
    subject_element: Element,
    other: Symbol,
    other_element: Element,
    relation: Relation,
) -> String {
    let s = format!("{}({})", subject.name_zh(), subject_element.name_zh());
    let o = format!("{}({})", other.name_zh(), other_element.name_zh());
    match relation {
        Relation::Generating => format!("{s}生{o}"),
        Relation::Overcoming => format!("{s}克{o}"),
        Relation::Weakening => format!("{s}被{o}泄"),
        Relation::Counteracting => format!("{s}被{o}克"),
        Relation::Same => format!("{s}与{o}同性"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn always_five_entries_excluding_the_subject() {
        for s in Symbol::all() {
            let rels = relationships_of(*s, &ElementOverrides::none());
            assert_eq!(rels.len(), 5);
            assert!(rels.iter().all(|r| r.other != *s));
        }
    }

    #[test]
    fn great_peace_relations_under_defaults() {
        // 大安 is wood: generates fire (速喜), overcomes earth (留连, 空亡),
        // drained by water (小吉), overcome by metal (赤口).
        let rels = relationships_of(Symbol::GreatPeace, &ElementOverrides::none());
        let by_other = |sym: Symbol| rels.iter().find(|r| r.other == sym).unwrap();

        assert_eq!(by_other(Symbol::QuickJoy).relation, Relation::Generating);
        assert_eq!(by_other(Symbol::Lingering).relation, Relation::Overcoming);
        assert_eq!(by_other(Symbol::Emptiness).relation, Relation::Overcoming);
        assert_eq!(by_other(Symbol::SmallLuck).relation, Relation::Weakening);
        assert_eq!(by_other(Symbol::RedMouth).relation, Relation::Counteracting);
    }

    #[test]
    fn same_element_pairs_read_as_same_nature() {
        // 留连 and 空亡 are both earth by default.
        let rels = relationships_of(Symbol::Lingering, &ElementOverrides::none());
        let e = rels.iter().find(|r| r.other == Symbol::Emptiness).unwrap();
        assert_eq!(e.relation, Relation::Same);
        assert_eq!(e.description, "留连(土)与空亡(土)同性");
    }

    #[test]
    fn descriptions_interpolate_both_names_and_elements() {
        let rels = relationships_of(Symbol::GreatPeace, &ElementOverrides::none());
        let q = rels.iter().find(|r| r.other == Symbol::QuickJoy).unwrap();
        assert_eq!(q.description, "大安(木)生速喜(火)");
        let r = rels.iter().find(|r| r.other == Symbol::RedMouth).unwrap();
        assert_eq!(r.description, "大安(木)被赤口(金)克");
        let s = rels.iter().find(|r| r.other == Symbol::SmallLuck).unwrap();
        assert_eq!(s.description, "大安(木)被小吉(水)泄");
    }

    #[test]
    fn overrides_apply_before_classification() {
        // Alternative school: 小吉 becomes wood, so 大安(wood) reads it as
        // same nature instead of being drained by water.
        let rels = relationships_of(Symbol::GreatPeace, &ElementOverrides::alternative_school());
        let s = rels.iter().find(|r| r.other == Symbol::SmallLuck).unwrap();
        assert_eq!(s.relation, Relation::Same);
        assert_eq!(s.description, "大安(木)与小吉(木)同性");
    }

    #[test]
    fn every_pair_is_classified() {
        // 30 ordered pairs; each either same-element or one of the four
        // directed relations. None escape classification.
        for s in Symbol::all() {
            for entry in relationships_of(*s, &ElementOverrides::none()) {
                let expected = Relation::classify(
                    ElementOverrides::none().element_of(*s),
                    entry.other_element,
                );
                assert_eq!(entry.relation, expected);
            }
        }
    }
}

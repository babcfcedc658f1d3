//! Aggregate verdict over a three-chamber reading.

use serde::{Deserialize, Serialize};

use crate::symbol::Symbol;

/// The overall grade of a reading, by count of auspicious chambers.
///
/// The mapping is count-only: no weighting by chamber, no partial credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// All three chambers auspicious.
    AllAuspicious,
    /// Two of three auspicious.
    MostlyAuspicious,
    /// One of three auspicious.
    MostlyAdverse,
    /// No auspicious chamber.
    AllAdverse,
}

impl Verdict {
    /// Grade three chamber symbols.
    pub fn of(symbols: [Symbol; 3]) -> Self {
        match symbols.iter().filter(|s| s.is_auspicious()).count() {
            3 => Self::AllAuspicious,
            2 => Self::MostlyAuspicious,
            1 => Self::MostlyAdverse,
            _ => Self::AllAdverse,
        }
    }

    /// How many chambers were auspicious.
    pub fn auspicious_count(self) -> u8 {
        match self {
            Self::AllAuspicious => 3,
            Self::MostlyAuspicious => 2,
            Self::MostlyAdverse => 1,
            Self::AllAdverse => 0,
        }
    }

    /// The traditional verdict text.
    pub fn text_zh(self) -> &'static str {
        match self {
            Self::AllAuspicious => "三宫皆吉，事事顺遂，可大胆行事，有贵人相助。",
            Self::MostlyAuspicious => "两吉一凶，大势向好，但需注意细节，谨慎行事可成。",
            Self::MostlyAdverse => "一吉两凶，事多阻滞，需耐心等待，不宜强求。",
            Self::AllAdverse => "三宫皆凶，不宜行事，应退守观望，待时而动。",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text_zh())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_map_to_the_four_verdicts() {
        use Symbol::*;
        assert_eq!(
            Verdict::of([GreatPeace, QuickJoy, SmallLuck]),
            Verdict::AllAuspicious
        );
        assert_eq!(
            Verdict::of([GreatPeace, QuickJoy, RedMouth]),
            Verdict::MostlyAuspicious
        );
        assert_eq!(
            Verdict::of([GreatPeace, Lingering, RedMouth]),
            Verdict::MostlyAdverse
        );
        assert_eq!(
            Verdict::of([Lingering, RedMouth, Emptiness]),
            Verdict::AllAdverse
        );
    }

    #[test]
    fn repeated_symbols_count_individually() {
        assert_eq!(
            Verdict::of([Symbol::GreatPeace; 3]),
            Verdict::AllAuspicious
        );
        assert_eq!(Verdict::of([Symbol::Emptiness; 3]), Verdict::AllAdverse);
    }

    #[test]
    fn verdict_is_pure_in_the_symbols() {
        // Chamber order never changes the grade.
        use Symbol::*;
        let a = Verdict::of([GreatPeace, RedMouth, SmallLuck]);
        let b = Verdict::of([RedMouth, SmallLuck, GreatPeace]);
        assert_eq!(a, b);
    }

    #[test]
    fn texts_are_distinct() {
        let texts = [
            Verdict::AllAuspicious.text_zh(),
            Verdict::MostlyAuspicious.text_zh(),
            Verdict::MostlyAdverse.text_zh(),
            Verdict::AllAdverse.text_zh(),
        ];
        for (i, a) in texts.iter().enumerate() {
            for b in &texts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}

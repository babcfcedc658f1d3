//! The three-chamber calculator.
//!
//! A reading resolves three chambers, Sky (月), Earth (日), and Human (时),
//! onto the six-symbol wheel. The calendar path counts cumulatively: the
//! Earth count starts where Sky landed, the Human count where Earth landed.
//! The numbers path resolves each chamber independently. All inputs are
//! normalized with `rem_euclid`, so any integer (including negatives) lands
//! on the wheel and nothing panics.

use rand::Rng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::overrides::ElementOverrides;
use crate::symbol::{GuardianSpirit, Kinship, Symbol};
use crate::verdict::Verdict;

/// One of the three positional slots of a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Chamber {
    /// 天宫: resolved from the month (or the first number).
    Sky,
    /// 地宫: resolved from the day (or the second number).
    Earth,
    /// 人宫: resolved from the hour (or the third number).
    Human,
}

impl Chamber {
    /// Chinese name.
    pub fn name_zh(self) -> &'static str {
        match self {
            Self::Sky => "天宫",
            Self::Earth => "地宫",
            Self::Human => "人宫",
        }
    }
}

impl std::fmt::Display for Chamber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Sky => "Sky",
            Self::Earth => "Earth",
            Self::Human => "Human",
        };
        write!(f, "{name}")
    }
}

/// A symbol resolved into one chamber, with its effective attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChamberOutcome {
    /// Which chamber this outcome fills.
    pub chamber: Chamber,
    /// The resolved symbol.
    pub symbol: Symbol,
    /// Effective element, with school overrides applied.
    pub element: Element,
    /// 1-based palace position.
    pub palace_position: u8,
    /// Guardian spirit of the palace.
    pub guardian: GuardianSpirit,
    /// Kinship relation of the palace.
    pub kinship: Kinship,
    /// Display line, e.g. `天宫(月): 大安 - 大安事事昌，…`.
    pub description: String,
}

impl ChamberOutcome {
    /// Resolve a wheel index into a chamber outcome.
    ///
    /// `source` labels where the count came from (月/日/时 or 第一数…).
    fn resolve(
        chamber: Chamber,
        source: &str,
        index: usize,
        overrides: &ElementOverrides,
    ) -> Self {
        let symbol = Symbol::from_index(index);
        let description = format!(
            "{}({}): {} - {}",
            chamber.name_zh(),
            source,
            symbol.name_zh(),
            symbol.verse()
        );
        Self {
            chamber,
            symbol,
            element: overrides.element_of(symbol),
            palace_position: symbol.palace_position(),
            guardian: symbol.guardian_spirit(),
            kinship: symbol.kinship(),
            description,
        }
    }
}

/// A full three-chamber reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreePalaces {
    /// The Sky chamber outcome.
    pub sky: ChamberOutcome,
    /// The Earth chamber outcome.
    pub earth: ChamberOutcome,
    /// The Human chamber outcome.
    pub human: ChamberOutcome,
    /// Aggregate grade of the three chambers.
    pub verdict: Verdict,
}

/// Normalize any integer onto the six-spoke wheel.
fn wheel_index(n: i64) -> usize {
    n.rem_euclid(6) as usize
}

impl ThreePalaces {
    /// Cast from a lunar calendar moment.
    ///
    /// Sky counts from the wheel's start to the month; Earth continues from
    /// Sky's landing spot to the day; Human continues from Earth's spot to
    /// the double-hour. `hour_bucket` is 0-based (0 = 子时, 23:00-01:00);
    /// the 1-based counting step and the `- 1` of "count N from here"
    /// cancel, leaving a plain addition.
    ///
    /// Nominal domains are month 1-12, day 1-30, hour bucket 0-11, but any
    /// integers are accepted and wrapped.
    pub fn from_calendar(
        lunar_month: i64,
        lunar_day: i64,
        hour_bucket: i64,
        overrides: &ElementOverrides,
    ) -> Self {
        // Wrap each operand before adding; modular arithmetic distributes, so
        // this matches (month-1), (sky+day-1), (earth+hour) mod 6 while
        // keeping intermediates small for extreme inputs.
        let sky = wheel_index(wheel_index(lunar_month) as i64 - 1);
        let earth = wheel_index(sky as i64 + wheel_index(lunar_day) as i64 - 1);
        let human = wheel_index(earth as i64 + wheel_index(hour_bucket) as i64);

        Self::assemble(
            ChamberOutcome::resolve(Chamber::Sky, "月", sky, overrides),
            ChamberOutcome::resolve(Chamber::Earth, "日", earth, overrides),
            ChamberOutcome::resolve(Chamber::Human, "时", human, overrides),
        )
    }

    /// Cast from three numbers.
    ///
    /// Unlike the calendar path the chambers are independent: each number
    /// lands on the wheel by itself. Numbers are conventionally drawn from
    /// 1-100, but any integers are accepted; 0 is a valid input here (any
    /// "empty field means 10" convention belongs to the input layer).
    pub fn from_numbers(a: i64, b: i64, c: i64, overrides: &ElementOverrides) -> Self {
        Self::assemble(
            ChamberOutcome::resolve(Chamber::Sky, "第一数", wheel_index(a), overrides),
            ChamberOutcome::resolve(Chamber::Earth, "第二数", wheel_index(b), overrides),
            ChamberOutcome::resolve(Chamber::Human, "第三数", wheel_index(c), overrides),
        )
    }

    fn assemble(sky: ChamberOutcome, earth: ChamberOutcome, human: ChamberOutcome) -> Self {
        let verdict = Verdict::of([sky.symbol, earth.symbol, human.symbol]);
        Self {
            sky,
            earth,
            human,
            verdict,
        }
    }

    /// The three chamber symbols in Sky, Earth, Human order.
    pub fn symbols(&self) -> [Symbol; 3] {
        [self.sky.symbol, self.earth.symbol, self.human.symbol]
    }

    /// The three outcomes in Sky, Earth, Human order.
    pub fn outcomes(&self) -> [&ChamberOutcome; 3] {
        [&self.sky, &self.earth, &self.human]
    }
}

/// Draw three numbers in 1-100 for a numbers-path cast.
pub fn random_triplet(rng: &mut StdRng) -> [u32; 3] {
    [
        rng.random_range(1..=100),
        rng.random_range(1..=100),
        rng.random_range(1..=100),
    ]
}

//! The six-symbol wheel and its fixed attributes.
//!
//! The wheel order is the traditional counting order: 大安, 留连, 速喜,
//! 赤口, 小吉, 空亡. Palace positions are the 1-based wheel indices;
//! guardian spirits cycle through six values in step with the wheel and
//! kinship relations cycle through five (`index mod 5`). The verse and
//! interpretation prose are the traditional texts, carried as static data.

use serde::{Deserialize, Serialize};

use crate::element::Element;
use crate::error::CoreError;

/// One of the six divinatory outcomes, in fixed wheel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// 大安: stability and safety; the most favorable outcome.
    GreatPeace,
    /// 留连: delay and entanglement; progress stalls.
    Lingering,
    /// 速喜: swift good news.
    QuickJoy,
    /// 赤口: quarrels and sharp words.
    RedMouth,
    /// 小吉: modest good fortune.
    SmallLuck,
    /// 空亡: emptiness; plans come to nothing.
    Emptiness,
}

/// The six guardian spirits (六神), one per palace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuardianSpirit {
    /// 青龙
    AzureDragon,
    /// 腾蛇
    SoaringSnake,
    /// 朱雀
    VermilionBird,
    /// 白虎
    WhiteTiger,
    /// 玄武
    DarkWarrior,
    /// 勾陈
    HookArray,
}

/// The five kinship relations (六亲), cycling over the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kinship {
    /// 父母
    Parents,
    /// 子孙
    Offspring,
    /// 官鬼
    Officials,
    /// 妻财
    Wealth,
    /// 兄弟
    Siblings,
}

/// Guardian spirits in wheel order.
const GUARDIAN_SPIRITS: [GuardianSpirit; 6] = [
    GuardianSpirit::AzureDragon,
    GuardianSpirit::SoaringSnake,
    GuardianSpirit::VermilionBird,
    GuardianSpirit::WhiteTiger,
    GuardianSpirit::DarkWarrior,
    GuardianSpirit::HookArray,
];

/// Kinship relations in cycling order.
const KINSHIPS: [Kinship; 5] = [
    Kinship::Parents,
    Kinship::Offspring,
    Kinship::Officials,
    Kinship::Wealth,
    Kinship::Siblings,
];

impl Symbol {
    /// All symbols in wheel order.
    pub fn all() -> &'static [Self] {
        &[
            Self::GreatPeace,
            Self::Lingering,
            Self::QuickJoy,
            Self::RedMouth,
            Self::SmallLuck,
            Self::Emptiness,
        ]
    }

    /// 0-based wheel index.
    pub fn index(self) -> usize {
        match self {
            Self::GreatPeace => 0,
            Self::Lingering => 1,
            Self::QuickJoy => 2,
            Self::RedMouth => 3,
            Self::SmallLuck => 4,
            Self::Emptiness => 5,
        }
    }

    /// Symbol at a wheel index; wraps modulo 6.
    pub fn from_index(index: usize) -> Self {
        Self::all()[index % 6]
    }

    /// 1-based palace position.
    pub fn palace_position(self) -> u8 {
        self.index() as u8 + 1
    }

    /// The guardian spirit bound to this palace.
    pub fn guardian_spirit(self) -> GuardianSpirit {
        GUARDIAN_SPIRITS[self.index()]
    }

    /// The kinship relation bound to this palace (`index mod 5`).
    pub fn kinship(self) -> Kinship {
        KINSHIPS[self.index() % 5]
    }

    /// Default element assignment.
    ///
    /// Lingering and Small Luck are disputed between schools; see
    /// [`crate::ElementOverrides`] for the alternative assignments.
    pub fn default_element(self) -> Element {
        match self {
            Self::GreatPeace => Element::Wood,
            Self::Lingering => Element::Earth,
            Self::QuickJoy => Element::Fire,
            Self::RedMouth => Element::Metal,
            Self::SmallLuck => Element::Water,
            Self::Emptiness => Element::Earth,
        }
    }

    /// Whether the symbol counts as auspicious.
    ///
    /// Fixed 3-of-6 partition: 大安, 速喜, 小吉 are auspicious; 留连, 赤口,
    /// 空亡 are not. Independent of element and every other attribute.
    pub fn is_auspicious(self) -> bool {
        matches!(self, Self::GreatPeace | Self::QuickJoy | Self::SmallLuck)
    }

    /// Chinese name.
    pub fn name_zh(self) -> &'static str {
        match self {
            Self::GreatPeace => "大安",
            Self::Lingering => "留连",
            Self::QuickJoy => "速喜",
            Self::RedMouth => "赤口",
            Self::SmallLuck => "小吉",
            Self::Emptiness => "空亡",
        }
    }

    /// The traditional four-line verse.
    pub fn verse(self) -> &'static str {
        match self {
            Self::GreatPeace => "大安事事昌，求财在北方，失物去不远，宅舍保安康。",
            Self::Lingering => "留连事难成，求谋日未明，官事有忧疑，行人未归程。",
            Self::QuickJoy => "速喜喜气生，求财向南行，失物在内处，婚姻有喜庆。",
            Self::RedMouth => "赤口主口舌，官司且慢行，失物寻不见，是非在口中。",
            Self::SmallLuck => "小吉报君知，求财向东移，失物虽已失，尽好在家里。",
            Self::Emptiness => "空亡无所得，求谋终不成，官事凶多吉，失物寻无踪。",
        }
    }

    /// Interpretation prose for the symbol.
    pub fn interpretation(self) -> &'static str {
        match self {
            Self::GreatPeace => {
                "大安代表平安、顺利，是最吉利的卦象。事业、健康、财运等方面都会有所收获，人际关系融洽，整体运势良好。"
            }
            Self::Lingering => {
                "留连代表拖延、停滞，事情的进展会比较缓慢。需要耐心等待，不宜操之过急。建议调整心态，适当放慢节奏。"
            }
            Self::QuickJoy => {
                "速喜代表好消息即将到来，事情会有转机，特别是在人际关系、感情和社交方面。可以积极把握机会，主动出击。"
            }
            Self::RedMouth => {
                "赤口代表言语冲突，容易与人产生口角是非。建议谨言慎行，避免不必要的争端。处理事情需要更加谨慎。"
            }
            Self::SmallLuck => {
                "小吉代表小幸运，虽然不是大的突破，但也会有令人愉快的小事发生。适合稳健前行，不宜冒大险。"
            }
            Self::Emptiness => {
                "空亡代表空虚、无结果，事情可能会有波折或者遇到挫折。建议调整期望，避免做重大决策，保持平和心态。"
            }
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::GreatPeace => "Great Peace",
            Self::Lingering => "Lingering",
            Self::QuickJoy => "Quick Joy",
            Self::RedMouth => "Red Mouth",
            Self::SmallLuck => "Small Luck",
            Self::Emptiness => "Emptiness",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for Symbol {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "great peace" | "greatpeace" | "da an" | "daan" | "大安" => Ok(Self::GreatPeace),
            "lingering" | "liu lian" | "liulian" | "留连" | "留連" => Ok(Self::Lingering),
            "quick joy" | "quickjoy" | "su xi" | "suxi" | "速喜" => Ok(Self::QuickJoy),
            "red mouth" | "redmouth" | "chi kou" | "chikou" | "赤口" => Ok(Self::RedMouth),
            "small luck" | "smallluck" | "xiao ji" | "xiaoji" | "小吉" => Ok(Self::SmallLuck),
            "emptiness" | "kong wang" | "kongwang" | "空亡" => Ok(Self::Emptiness),
            _ => Err(CoreError::UnknownSymbol(s.to_string())),
        }
    }
}

impl std::fmt::Display for GuardianSpirit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name_zh())
    }
}

impl GuardianSpirit {
    /// Chinese name.
    pub fn name_zh(self) -> &'static str {
        match self {
            Self::AzureDragon => "青龙",
            Self::SoaringSnake => "腾蛇",
            Self::VermilionBird => "朱雀",
            Self::WhiteTiger => "白虎",
            Self::DarkWarrior => "玄武",
            Self::HookArray => "勾陈",
        }
    }
}

impl std::fmt::Display for Kinship {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name_zh())
    }
}

impl Kinship {
    /// Chinese name.
    pub fn name_zh(self) -> &'static str {
        match self {
            Self::Parents => "父母",
            Self::Offspring => "子孙",
            Self::Officials => "官鬼",
            Self::Wealth => "妻财",
            Self::Siblings => "兄弟",
        }
    }
}

//! Offline markdown reading.

use serde::{Deserialize, Serialize};

use lr_core::{DivinationRecord, ElementOverrides, relationships_of};

/// How much detail the composed reading carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Chambers and verdict only.
    Brief,
    /// Adds interpretation prose and the primary symbol's relations.
    #[default]
    Full,
}

/// Configuration for reading composition.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ReadingConfig {
    /// Detail level.
    pub verbosity: Verbosity,
    /// Overrides used when analyzing the primary symbol's relations.
    pub overrides: ElementOverrides,
}

/// Compose a markdown reading from a record.
pub fn compose(record: &DivinationRecord, config: &ReadingConfig) -> String {
    let mut out = String::from("# 卦象解读\n\n");

    if let Some(ref info) = record.meta.time_info {
        out.push_str(&format!("起卦：{}\n\n", info.lunar_date));
    } else if let Some(numbers) = record.meta.numbers {
        out.push_str(&format!(
            "起卦数字：{} {} {}\n\n",
            numbers[0], numbers[1], numbers[2]
        ));
    }

    if let Some(ref query) = record.meta.query {
        out.push_str(&format!("所问：{query}\n\n"));
    }

    if let Some(ref palaces) = record.palaces {
        for outcome in palaces.outcomes() {
            out.push_str(&format!("- {}\n", outcome.description));
        }
        out.push('\n');
        out.push_str(&format!("**断语**：{}\n\n", palaces.verdict.text_zh()));
    } else {
        out.push_str(&format!("- {}\n\n", record.primary.description));
    }

    if config.verbosity == Verbosity::Full {
        let primary = record.primary.symbol;
        out.push_str(&format!(
            "## {}\n\n{}\n\n",
            primary.name_zh(),
            primary.interpretation()
        ));
        out.push_str("## 五行关系\n\n");
        for rel in relationships_of(primary, &config.overrides) {
            out.push_str(&format!("- {}\n", rel.description));
        }
    }

    out
}

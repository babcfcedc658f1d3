//! Terminal rendering for readings and history.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use lr_core::{DivinationRecord, ThreePalaces, Verdict};

/// Build the three-chamber table.
pub fn palaces_table(palaces: &ThreePalaces) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["宫位", "卦", "五行", "六神", "六亲"]);
    for o in palaces.outcomes() {
        table.add_row(vec![
            o.chamber.name_zh().to_string(),
            format!("{} ({})", o.symbol.name_zh(), o.symbol),
            o.element.name_zh().to_string(),
            o.guardian.name_zh().to_string(),
            o.kinship.name_zh().to_string(),
        ]);
    }
    table
}

/// Color the verdict by how auspicious the reading came out.
pub fn colored_verdict(verdict: Verdict) -> String {
    let text = verdict.text_zh();
    match verdict.auspicious_count() {
        3 => text.green().bold().to_string(),
        2 => text.green().to_string(),
        1 => text.yellow().to_string(),
        _ => text.red().to_string(),
    }
}

/// Print a full reading for a fresh or stored record.
pub fn print_record(record: &DivinationRecord) {
    if let Some(ref info) = record.meta.time_info {
        println!("  起卦：{}", info.lunar_date);
    }
    if let Some(numbers) = record.meta.numbers {
        println!("  起卦数字：{} {} {}", numbers[0], numbers[1], numbers[2]);
    }
    if let Some(ref query) = record.meta.query {
        println!("  所问：{query}");
    }
    println!();

    match record.palaces {
        Some(ref palaces) => {
            println!("{}", palaces_table(palaces));
            println!();
            for o in palaces.outcomes() {
                println!("  {}", o.description);
            }
            println!();
            println!("  {}", colored_verdict(palaces.verdict));
        }
        None => {
            println!("  {}", record.primary.description);
            println!("  {}", record.primary.symbol.interpretation());
        }
    }

    if let Some(ref notes) = record.notes {
        println!();
        println!("  {} {notes}", "notes:".dimmed());
    }
    if let Some(ref reading) = record.ai_reading {
        println!();
        for line in reading.lines() {
            println!("  {line}");
        }
    }
    println!();
}

/// Build the history listing table.
pub fn history_table(records: &[DivinationRecord]) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["id", "time", "三宫", "断语", "所问"]);
    for r in records {
        let palaces = match r.palaces {
            Some(ref p) => p
                .outcomes()
                .iter()
                .map(|o| o.symbol.name_zh())
                .collect::<Vec<_>>()
                .join(" "),
            None => r.primary.symbol.name_zh().to_string(),
        };
        let verdict = match r.palaces {
            Some(ref p) => truncate(p.verdict.text_zh(), 8),
            None => "—".to_string(),
        };
        let query = match r.meta.query {
            Some(ref q) => truncate(q, 12),
            None => "—".to_string(),
        };
        table.add_row(vec![
            r.id.to_string(),
            r.timestamp.format("%Y-%m-%d %H:%M").to_string(),
            palaces,
            verdict,
            query,
        ]);
    }
    table
}

/// Truncate to a character count (these strings are mostly CJK, so byte
/// slicing would split glyphs).
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_chars).collect();
        format!("{head}…")
    }
}

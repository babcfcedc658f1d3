use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use lr_core::{ElementOverrides, Symbol, flow_path, relationships_of};

pub fn run(name: &str, overrides: &ElementOverrides) -> Result<(), String> {
    let symbol: Symbol = name.parse().map_err(|e| format!("{e}"))?;
    let element = overrides.element_of(symbol);

    println!(
        "  {} [{}]",
        symbol.name_zh().bold(),
        symbol.to_string().dimmed()
    );
    println!();
    println!("  五行:     {}", element.name_zh());
    println!("  宫位:     {}", symbol.palace_position());
    println!("  六神:     {}", symbol.guardian_spirit().name_zh());
    println!("  六亲:     {}", symbol.kinship().name_zh());
    println!(
        "  吉凶:     {}",
        if symbol.is_auspicious() {
            "吉".green()
        } else {
            "凶".red()
        }
    );
    println!();
    println!("  {}", symbol.verse());
    println!();
    for line in textwrap(symbol.interpretation(), 36) {
        println!("  {line}");
    }
    println!();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["卦", "关系", "说明"]);
    for rel in relationships_of(symbol, overrides) {
        table.add_row(vec![
            rel.other.name_zh().to_string(),
            rel.relation.to_string(),
            rel.description,
        ]);
    }
    println!("{table}");
    println!();

    let path: Vec<&str> = flow_path(symbol, 5).iter().map(|s| s.name_zh()).collect();
    println!("  {} {}", "流转:".dimmed(), path.join(" → "));

    Ok(())
}

/// Naive character-count wrapping for CJK prose.
fn textwrap(text: &str, width: usize) -> Vec<String> {
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

//! The language-model prompt for a richer reading.
//!
//! The prompt carries the cast time, the caster's question when present, and
//! the three-chamber summary with elements and guardian spirits, followed by
//! a fixed instruction block that pins down the answer structure.

use lr_core::{ChamberOutcome, DivinationRecord};

/// System-role text for the reading request.
pub const SYSTEM_ROLE: &str = "你是一名经验丰富的易学专家，精通小六壬占卜的解读和应用。\
你有多年研究传统中国预测学的经验，能够从卦象中解读出深刻的含义并给予有益的指导。";

fn palace_line(outcome: &ChamberOutcome) -> String {
    format!(
        "{}: {} (五行:{}) (六神:{})",
        outcome.chamber.name_zh(),
        outcome.symbol.name_zh(),
        outcome.element.name_zh(),
        outcome.guardian.name_zh()
    )
}

/// Build the user prompt for a record.
pub fn llm_prompt(record: &DivinationRecord) -> String {
    let mut prompt = String::from("我需要你根据以下小六壬卦象信息，提供一个详细的解读。\n");

    let time = record.timestamp.format("%Y-%m-%d %H:%M:%S");
    prompt.push_str(&format!("\n起卦时间: {time}\n"));

    if let Some(ref query) = record.meta.query {
        prompt.push_str(&format!("\n用户占问: {query}\n"));
    }

    if let Some(ref palaces) = record.palaces {
        prompt.push_str(&format!(
            "\n三宫卦信息：\n{}\n{}\n{}\n",
            palace_line(&palaces.sky),
            palace_line(&palaces.earth),
            palace_line(&palaces.human)
        ));
    }

    prompt.push_str(
        "\n请给出详细的解读，包括以下内容：\n\
         1. 卦象综合解析（包括三宫关系和互动的深层含义）\n\
         2. 对用户问题的针对性回答（如果有问题）\n\
         3. 宜忌建议\n\
         4. 未来发展趋势\n\
         5. 化解方法或行动建议\n\
         如果是标题，请用中文数字+顿号开头，如“一、”；副标题，请用中文数字+.开头，如“1.”；\
         内容，如果有顺序请用如“①②③④⑤⑥⑦⑧⑨⑩” 无顺序用“-”\n",
    );

    prompt
}

//! Advisory prompt construction.

use serde::Serialize;

use tianji_charts::BaziChart;

/// JSON fields every advisory reply must carry.
pub const REPORT_FIELDS: [&str; 12] = [
    "overview",
    "personality",
    "career",
    "wealth",
    "relationships",
    "health",
    "study",
    "family",
    "luck_cycle",
    "annual_outlook",
    "favorable_elements",
    "advice",
];

/// The parts of a BaZi chart sent to the text service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSummary {
    /// Year, month, day, hour pillars as glyph pairs.
    pub pillars: [String; 4],
    pub day_master: String,
    pub day_master_element: String,
    /// `element:count` in display order.
    pub histogram: String,
    pub strength: String,
    pub dominant_element: String,
    pub season: String,
    pub zodiac: String,
    pub gender: String,
    pub luck_direction: String,
}

impl ChartSummary {
    pub fn from_chart(chart: &BaziChart) -> Self {
        let histogram = chart
            .histogram
            .iter()
            .map(|(e, n)| format!("{}:{n}", e.name()))
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            pillars: chart.plain_pillars().map(|p| p.glyphs()),
            day_master: chart.day_master.glyph().to_string(),
            day_master_element: chart.day_master_element.name().to_string(),
            histogram,
            strength: chart.strength.strength.name().to_string(),
            dominant_element: chart.strength.dominant.name().to_string(),
            season: chart.season.name().to_string(),
            zodiac: chart.zodiac.name().to_string(),
            gender: chart.gender.name().to_string(),
            luck_direction: chart.luck_direction.name().to_string(),
        }
    }
}

/// Render the prompt for `summary` looking ahead to `target_year`.
pub fn build_prompt(summary: &ChartSummary, target_year: i32) -> String {
    let fields = REPORT_FIELDS
        .iter()
        .map(|f| format!("  \"{f}\": string"))
        .collect::<Vec<_>>()
        .join(",\n");
    format!(
        "You are an experienced BaZi (Four Pillars) consultant.\n\
         Chart:\n\
         - Pillars (year month day hour): {pillars}\n\
         - Day master: {dm} ({dm_el})\n\
         - Five elements: {hist}\n\
         - Strength: {strength}; dominant element: {dominant}; season status: {season}\n\
         - Zodiac: {zodiac}; gender: {gender}; luck cycles run {luck}\n\
         Target year: {target_year}\n\
         \n\
         Reply with exactly one JSON object and nothing else:\n\
         {{\n{fields}\n}}\n",
        pillars = summary.pillars.join(" "),
        dm = summary.day_master,
        dm_el = summary.day_master_element,
        hist = summary.histogram,
        strength = summary.strength,
        dominant = summary.dominant_element,
        season = summary.season,
        zodiac = summary.zodiac,
        gender = summary.gender,
        luck = summary.luck_direction,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> ChartSummary {
        ChartSummary {
            pillars: ["癸卯".into(), "乙丑".into(), "戊戌".into(), "戊午".into()],
            day_master: "戊".into(),
            day_master_element: "earth".into(),
            histogram: "wood:2 fire:1 earth:4 metal:0 water:1".into(),
            strength: "strong".into(),
            dominant_element: "earth".into(),
            season: "prosperous".into(),
            zodiac: "Rabbit".into(),
            gender: "male".into(),
            luck_direction: "backward".into(),
        }
    }

    #[test]
    fn prompt_lists_every_field_and_the_year() {
        let p = build_prompt(&summary(), 2026);
        for f in REPORT_FIELDS {
            assert!(p.contains(&format!("\"{f}\"")), "{f}");
        }
        assert!(p.contains("Target year: 2026"));
        assert!(p.contains("癸卯 乙丑 戊戌 戊午"));
    }
}

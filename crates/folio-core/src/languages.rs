//! Spoken-language cards rendered from a static table.

use crate::constants::{LEVEL_MAX, LEVEL_MIN};
use crate::page::Page;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LanguageEntry {
    pub name: &'static str,
    pub proficiency: &'static str,
    pub description: &'static str,
    /// Proficiency in percent; out-of-range values are clamped when rendered.
    pub level: Option<i32>,
}

// Order is the display order.
pub const LANGUAGES: &[LanguageEntry] = &[
    LanguageEntry {
        name: "English",
        proficiency: "Native",
        description: "Daily academic, research, and professional collaboration across technical and design teams.",
        level: Some(100),
    },
    LanguageEntry {
        name: "Russian",
        proficiency: "Native",
        description: "Native fluency for technical deep-dives, mission planning, and family conversations.",
        level: Some(100),
    },
    LanguageEntry {
        name: "Spanish",
        proficiency: "Intermediate",
        description: "Collaborative working proficiency for outreach events, teammate pairing, and travel logistics.",
        level: Some(70),
    },
    LanguageEntry {
        name: "French",
        proficiency: "Intermediate",
        description: "Comfortable navigating design reviews, documentation, and day-to-day discussions with francophone teams.",
        level: Some(60),
    },
    LanguageEntry {
        name: "Mandarin Chinese",
        proficiency: "Beginner",
        description: "HSK 2 foundation supporting travel, cultural exchange, and introductory technical syncs.",
        level: Some(35),
    },
];

/// Everything the page needs to draw one card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageCard {
    pub name: String,
    pub proficiency: String,
    pub badge_label: String,
    pub description: String,
    pub meter: Option<LanguageMeter>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageMeter {
    pub id: String,
    pub label: String,
    pub value: i32,
    pub min: i32,
    pub max: i32,
    pub aria_label: String,
}

pub fn build_cards(entries: &[LanguageEntry]) -> Vec<LanguageCard> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| LanguageCard {
            name: entry.name.to_string(),
            proficiency: entry.proficiency.to_string(),
            badge_label: format!("Proficiency level: {}", entry.proficiency),
            description: entry.description.to_string(),
            meter: entry.level.map(|level| {
                let value = level.clamp(LEVEL_MIN, LEVEL_MAX);
                LanguageMeter {
                    id: format!("language-meter-{}", index),
                    label: format!("{} proficiency", entry.proficiency),
                    value,
                    min: LEVEL_MIN,
                    max: LEVEL_MAX,
                    aria_label: format!(
                        "{} proficiency {} out of {}",
                        entry.proficiency, value, LEVEL_MAX
                    ),
                }
            }),
        })
        .collect()
}

/// Replace the list contents. Skipped when there is nothing to show, so
/// server-rendered fallback markup stays in place.
pub fn render_languages<P: Page>(entries: &[LanguageEntry], has_list: bool, page: &mut P) {
    if !has_list || entries.is_empty() {
        return;
    }
    page.render_languages(&build_cards(entries));
}

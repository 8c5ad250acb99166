//! Password evaluation sections
//!
//! Each section scores a specific aspect of password strength and reports
//! the problems it found.

mod criteria;
mod dictionary;
mod length;
mod pattern;
mod variety;

pub use criteria::criteria_section;
pub use dictionary::dictionary_section;
pub use length::length_section;
pub use pattern::pattern_analysis_section;
pub use variety::character_variety_section;

use crate::dictionary::WeakTokenDictionary;

/// What every section sees: the exposed candidate and the active dictionary.
pub struct SectionInput<'a> {
    pub password: &'a str,
    pub dictionary: &'a WeakTokenDictionary,
}

/// Score delta and human-readable reasons produced by one section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionScore {
    pub points: i64,
    pub reasons: Vec<String>,
}

impl SectionScore {
    pub fn add(&mut self, points: i64) {
        self.points += points;
    }

    pub fn penalize(&mut self, points: i64, reason: impl Into<String>) {
        self.points -= points;
        self.reasons.push(reason.into());
    }
}

/// Signature shared by all sections.
pub type Section = fn(&SectionInput<'_>) -> SectionScore;

#[cfg(test)]
pub(crate) fn run(section: Section, password: &str) -> SectionScore {
    let dictionary = WeakTokenDictionary::builtin();
    section(&SectionInput {
        password,
        dictionary: &dictionary,
    })
}

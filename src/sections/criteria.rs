//! Criteria section - fixed points for each satisfied criterion.

use super::{SectionInput, SectionScore};
use crate::types::{CriteriaReport, Criterion};

/// Points awarded per satisfied criterion.
pub const CRITERION_POINTS: i64 = 20;

/// Awards 20 points per satisfied criterion and lists the missing ones.
pub fn criteria_section(input: &SectionInput<'_>) -> SectionScore {
    let report = CriteriaReport::check(input.password);
    let mut score = SectionScore::default();
    score.add(report.met_count() as i64 * CRITERION_POINTS);

    let missing: Vec<&str> = report
        .missing()
        .into_iter()
        .map(|c| match c {
            Criterion::Length => "length",
            Criterion::Uppercase => "uppercase",
            Criterion::Lowercase => "lowercase",
            Criterion::Number => "numbers",
            Criterion::Special => "special characters",
        })
        .collect();

    if !missing.is_empty() {
        score.reasons.push(format!("Missing: {}", missing.join(", ")));
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::run;

    #[test]
    fn test_criteria_section_all_met() {
        let score = run(criteria_section, "HasAll123!@#");
        assert_eq!(score.points, 100);
        assert!(score.reasons.is_empty());
    }

    #[test]
    fn test_criteria_section_short_lowercase() {
        let score = run(criteria_section, "abc");
        assert_eq!(score.points, 20);
        assert_eq!(
            score.reasons,
            vec!["Missing: length, uppercase, numbers, special characters".to_string()]
        );
    }

    #[test]
    fn test_criteria_section_nothing_met() {
        let score = run(criteria_section, "    ");
        assert_eq!(score.points, 0);
    }
}

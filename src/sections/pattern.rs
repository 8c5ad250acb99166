//! Pattern analysis section - detects repetitive and sequential patterns.

use super::{SectionInput, SectionScore};

const PATTERN_PENALTY: i64 = 15;

// Every 3-character window of these strings is a forbidden ascending run.
const DIGIT_RUN: &str = "01234567890";
const ALPHA_RUN: &str = "abcdefghijklmnopqrstuvwxyz";

/// -15 for a character repeated three times in a row, -15 for a
/// 3-character ascending run ("123", "abc", case-insensitive).
pub fn pattern_analysis_section(input: &SectionInput<'_>) -> SectionScore {
    let chars: Vec<char> = input.password.chars().collect();
    let mut score = SectionScore::default();

    if has_repeated_run(&chars) {
        score.penalize(PATTERN_PENALTY, "Password contains repetitive patterns");
    }
    if has_ascending_run(&chars) {
        score.penalize(PATTERN_PENALTY, "Password contains sequential patterns");
    }
    score
}

fn has_repeated_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

fn has_ascending_run(chars: &[char]) -> bool {
    chars.windows(3).any(|w| {
        let window: String = w.iter().map(|c| c.to_ascii_lowercase()).collect();
        DIGIT_RUN.contains(&window) || ALPHA_RUN.contains(&window)
    })
}

//! Length section - bonuses for long passwords.

use super::{SectionInput, SectionScore};

const LONG_LENGTH: usize = 12;
const VERY_LONG_LENGTH: usize = 16;
const LENGTH_BONUS: i64 = 10;

/// +10 at 12 characters and another +10 at 16. The checks are independent.
pub fn length_section(input: &SectionInput<'_>) -> SectionScore {
    let len = input.password.chars().count();
    let mut score = SectionScore::default();
    if len >= LONG_LENGTH {
        score.add(LENGTH_BONUS);
    }
    if len >= VERY_LONG_LENGTH {
        score.add(LENGTH_BONUS);
    }
    score
}

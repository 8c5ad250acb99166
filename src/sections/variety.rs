//! Character variety section - bonuses for repeated use of a character class.

use super::{SectionInput, SectionScore};
use crate::types::is_special;

const VARIETY_BONUS: i64 = 5;

/// +5 each for at least two uppercase letters, two digits and two special
/// characters, wherever they occur.
pub fn character_variety_section(input: &SectionInput<'_>) -> SectionScore {
    let pwd = input.password;
    let upper = pwd.chars().filter(|c| c.is_ascii_uppercase()).count();
    let digits = pwd.chars().filter(|c| c.is_ascii_digit()).count();
    let special = pwd.chars().filter(|&c| is_special(c)).count();

    let mut score = SectionScore::default();
    for count in [upper, digits, special] {
        if count >= 2 {
            score.add(VARIETY_BONUS);
        }
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::run;

    #[test]
    fn test_variety_section_none() {
        assert_eq!(run(character_variety_section, "Aa1!").points, 0);
    }

    #[test]
    fn test_variety_section_non_adjacent() {
        assert_eq!(run(character_variety_section, "AxxA").points, 5);
        assert_eq!(run(character_variety_section, "1abc2").points, 5);
        assert_eq!(run(character_variety_section, "!word?").points, 5);
    }

    #[test]
    fn test_variety_section_all() {
        assert_eq!(run(character_variety_section, "AB12!@").points, 15);
    }
}

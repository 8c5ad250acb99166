//! Dictionary section - penalizes common weak tokens anywhere in the password.

use super::{SectionInput, SectionScore};

const DICTIONARY_PENALTY: i64 = 25;

/// -25 once if any dictionary token appears in the password, ignoring case.
pub fn dictionary_section(input: &SectionInput<'_>) -> SectionScore {
    let mut score = SectionScore::default();
    if let Some(token) = input.dictionary.find_in(input.password) {
        score.penalize(
            DICTIONARY_PENALTY,
            format!("Password contains the common word \"{}\"", token),
        );
    }
    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WeakTokenDictionary;
    use crate::sections::run;

    #[test]
    fn test_dictionary_section_common_word() {
        let score = run(dictionary_section, "SuperMan2024");
        assert_eq!(score.points, -25);
        assert!(score.reasons[0].contains("superman"));
    }

    #[test]
    fn test_dictionary_section_penalty_applied_once() {
        let score = run(dictionary_section, "adminpasswordqwerty");
        assert_eq!(score.points, -25);
        assert_eq!(score.reasons.len(), 1);
    }

    #[test]
    fn test_dictionary_section_clean_password() {
        assert_eq!(run(dictionary_section, "CorrectHorseBatteryStaple").points, 0);
    }

    #[test]
    fn test_dictionary_section_custom_dictionary() {
        let dictionary = WeakTokenDictionary::with_tokens(["horse"]);
        let score = dictionary_section(&SectionInput {
            password: "CorrectHorseBatteryStaple",
            dictionary: &dictionary,
        });
        assert_eq!(score.points, -25);
    }
}

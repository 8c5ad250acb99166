//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::dictionary::WeakTokenDictionary;
use crate::sections::{
    Section, SectionInput, character_variety_section, criteria_section, dictionary_section,
    length_section, pattern_analysis_section,
};
use crate::types::{CriteriaReport, PasswordEvaluation, PasswordScore};

/// Debounce interval applied by [`evaluate_password_strength_tx`].
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

const SECTIONS: [(&str, Section); 5] = [
    ("criteria", criteria_section),
    ("length", length_section),
    ("variety", character_variety_section),
    ("pattern", pattern_analysis_section),
    ("dictionary", dictionary_section),
];

/// Scores passwords against a weak-token dictionary.
///
/// Holds no mutable state: evaluating the same password twice gives the
/// same result.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    dictionary: WeakTokenDictionary,
}

impl Evaluator {
    /// Evaluator backed by the built-in dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dictionary(dictionary: WeakTokenDictionary) -> Self {
        Self { dictionary }
    }

    pub fn dictionary(&self) -> &WeakTokenDictionary {
        &self.dictionary
    }

    /// Evaluates password strength and returns a detailed evaluation.
    ///
    /// An empty password is not evaluated: the result has no score and
    /// every criterion fails.
    ///
    /// # Arguments
    /// * `password` - The password to evaluate
    /// * `token` - Optional cancellation token (async feature only)
    pub fn evaluate(
        &self,
        password: &SecretString,
        #[cfg(feature = "async")] token: Option<&CancellationToken>,
    ) -> PasswordEvaluation {
        let pwd = password.expose_secret();
        if pwd.is_empty() {
            return PasswordEvaluation::not_evaluated();
        }

        let input = SectionInput {
            password: pwd,
            dictionary: &self.dictionary,
        };
        let mut reasons = Vec::new();
        let mut total: i64 = 0;

        // Orchestrator: execute sections in sequence
        for (_section_name, section_fn) in SECTIONS {
            #[cfg(feature = "async")]
            {
                if token.is_some_and(|t| t.is_cancelled()) {
                    #[cfg(feature = "tracing")]
                    tracing::debug!("Evaluation cancelled before section: {}", _section_name);
                    return PasswordEvaluation {
                        score: None,
                        criteria: CriteriaReport::check(pwd),
                        reasons: vec!["Evaluation cancelled".to_string()],
                    };
                }
            }

            let section = section_fn(&input);
            total += section.points;
            reasons.extend(section.reasons);
        }

        let score = PasswordScore::new(total);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Password evaluated: raw={} score={} strength={:?}",
            total,
            score,
            score.strength()
        );

        PasswordEvaluation {
            score: Some(score),
            criteria: CriteriaReport::check(pwd),
            reasons,
        }
    }
}

/// Evaluates password strength with the built-in dictionary.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// A `PasswordEvaluation` containing score, criteria and reasons.
pub fn evaluate_password_strength(
    password: &SecretString,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> PasswordEvaluation {
    #[cfg(feature = "async")]
    return Evaluator::new().evaluate(password, token.as_ref());

    #[cfg(not(feature = "async"))]
    return Evaluator::new().evaluate(password);
}

/// Async version that debounces, evaluates and sends the result via channel.
///
/// Nothing is sent if `token` is cancelled during the debounce interval, so
/// the receiver only sees the result of the latest input.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    evaluate_with_tx(&Evaluator::new(), password, token, tx).await
}

#[cfg(feature = "async")]
pub(crate) async fn evaluate_with_tx(
    evaluator: &Evaluator,
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation superseded during debounce");
            return;
        }
        _ = tokio::time::sleep(DEBOUNCE) => {}
    }

    let evaluation = evaluator.evaluate(password, Some(&token));
    if superseded(&token, &evaluation) {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation superseded after debounce");
        return;
    }

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

/// A result is dropped once its token is cancelled, including a cancel that
/// lands between the debounce and the send.
#[cfg(feature = "async")]
fn superseded(token: &CancellationToken, evaluation: &PasswordEvaluation) -> bool {
    token.is_cancelled() || !evaluation.is_evaluated()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Criterion, PasswordStrength};

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn evaluate(s: &str) -> PasswordEvaluation {
        #[cfg(feature = "async")]
        return evaluate_password_strength(&secret(s), None);

        #[cfg(not(feature = "async"))]
        return evaluate_password_strength(&secret(s));
    }

    fn score_of(s: &str) -> u8 {
        evaluate(s).score.expect("should be scored").value()
    }

    #[test]
    fn test_evaluate_empty_password() {
        let evaluation = evaluate("");
        assert_eq!(evaluation.strength(), PasswordStrength::NotEvaluated);
        assert!(evaluation.score.is_none());
        assert!(evaluation.reasons.is_empty());
        assert_eq!(evaluation.met_criteria(), 0);
    }

    #[test]
    fn test_evaluate_dictionary_word_penalized() {
        // 5 criteria = 100; "Passw0rd" does not contain "password"
        let evaluation = evaluate("Passw0rd!");
        assert_eq!(evaluation.met_criteria(), 5);
        assert_eq!(evaluation.score.unwrap().value(), 100);
        assert_eq!(evaluation.strength(), PasswordStrength::Strong);
        assert!(evaluation.reasons.is_empty());

        // "Password1!" holds the token: 100 - 25
        let evaluation = evaluate("Password1!");
        assert_eq!(evaluation.met_criteria(), 5);
        assert_eq!(evaluation.score.unwrap().value(), 75);
        assert_eq!(evaluation.strength(), PasswordStrength::Strong);
        assert!(evaluation.reasons.iter().any(|r| r.contains("password")));
    }

    #[test]
    fn test_evaluate_substituted_words_not_penalized() {
        for pwd in ["Qx!M@ster9Z", "Zk#4dm1nQ", "Xy$h@d0w9!"] {
            let evaluation = evaluate(pwd);
            assert_eq!(evaluation.score.unwrap().value(), 100, "score for '{}'", pwd);
            assert!(evaluation.reasons.is_empty(), "reasons for '{}'", pwd);
        }
    }

    #[test]
    fn test_evaluate_penalty_applied_before_clamp() {
        // 100 + 10 (len 13) + 5 (two uppercase) + 5 (two digits) - 25 = 95
        assert_eq!(score_of("MyPassword12!"), 95);
    }

    #[test]
    fn test_evaluate_repeated_lowercase() {
        let evaluation = evaluate("aaaaaaaa");
        // length + lowercase = 40, repeat -15 = 25
        assert!(evaluation.criteria.is_met(Criterion::Length));
        assert!(evaluation.criteria.is_met(Criterion::Lowercase));
        assert!(!evaluation.criteria.is_met(Criterion::Uppercase));
        assert!(!evaluation.criteria.is_met(Criterion::Number));
        assert!(!evaluation.criteria.is_met(Criterion::Special));
        assert_eq!(evaluation.score.unwrap().value(), 25);
        assert_eq!(evaluation.strength(), PasswordStrength::Fair);
        assert!(evaluation.reasons.iter().any(|r| r.contains("repetitive")));
    }

    #[test]
    fn test_evaluate_short_lowercase_sequence_is_weak() {
        // lowercase 20, "abc" -15 = 5
        let evaluation = evaluate("abc");
        assert_eq!(evaluation.score.unwrap().value(), 5);
        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
    }

    #[test]
    fn test_evaluate_clamps_to_zero() {
        // length 20 + number 20 + two digits 5, then "111" -15, "123" -15, "123456" -25
        let evaluation = evaluate("111123456");
        assert_eq!(evaluation.score.unwrap().value(), 0);
        assert_eq!(evaluation.strength(), PasswordStrength::Weak);
    }

    #[test]
    fn test_evaluate_clamps_to_hundred() {
        // 100 + 20 + 15 = 135
        let evaluation = evaluate("Zq7#Vx2!Mn8$Kp4&");
        assert_eq!(evaluation.score.unwrap().value(), 100);
        assert_eq!(evaluation.strength(), PasswordStrength::Strong);
        assert!(evaluation.reasons.is_empty());
    }

    #[test]
    fn test_evaluate_fair_and_good_tiers() {
        // lower 20 + number 20 = 40
        assert_eq!(evaluate("zq7x").strength(), PasswordStrength::Fair);
        // length 20 + lower 20 + number 20 = 60
        assert_eq!(evaluate("zq7xmwpt").strength(), PasswordStrength::Good);
    }

    #[test]
    fn test_criteria_reported_regardless_of_score() {
        let evaluation = evaluate("Aaa");
        assert!(evaluation.criteria.is_met(Criterion::Uppercase));
        assert!(evaluation.criteria.is_met(Criterion::Lowercase));
        assert_eq!(evaluation.met_criteria(), 2);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        for pwd in ["", "a", "Password1!", "Zq7#Vx2!Mn8$Kp4&", "aaaaaaaa"] {
            assert_eq!(evaluate(pwd), evaluate(pwd));
        }
    }

    #[test]
    fn test_evaluate_score_boundaries() {
        for pwd in ["a", "!", "password", "MyPass123!", "VeryStrongPassword123!@#"] {
            let score = evaluate(pwd).score.unwrap();
            assert!(score.value() <= 100, "Score {} out of bounds for '{}'", score, pwd);
        }
    }

    #[test]
    fn test_evaluator_with_custom_dictionary() {
        let evaluator = Evaluator::with_dictionary(WeakTokenDictionary::with_tokens(["zq7"]));
        let pwd = secret("zq7xmwpt");

        #[cfg(feature = "async")]
        let evaluation = evaluator.evaluate(&pwd, None);

        #[cfg(not(feature = "async"))]
        let evaluation = evaluator.evaluate(&pwd);

        // 60 - 25
        assert_eq!(evaluation.score.unwrap().value(), 35);
    }
}

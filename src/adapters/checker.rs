//! Strength checker adapter - evaluates on every input change.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::evaluator::Evaluator;
use crate::types::PasswordEvaluation;

/// Displays evaluation results.
pub trait StrengthView {
    /// Shows a scored result: strength bar, description and criteria.
    fn render(&mut self, evaluation: &PasswordEvaluation);

    /// Returns to the neutral "enter a password" state.
    fn reset(&mut self);
}

pub struct PasswordChecker<V> {
    evaluator: Arc<Evaluator>,
    view: V,
}

impl<V: StrengthView> PasswordChecker<V> {
    pub fn new(evaluator: Arc<Evaluator>, view: V) -> Self {
        Self { evaluator, view }
    }

    /// Handles an input-change event.
    ///
    /// Blank input resets the view instead of rendering a score.
    pub fn on_input(&mut self, password: &SecretString) -> PasswordEvaluation {
        if password.expose_secret().is_empty() {
            self.view.reset();
            return PasswordEvaluation::not_evaluated();
        }

        #[cfg(feature = "async")]
        let evaluation = self.evaluator.evaluate(password, None);

        #[cfg(not(feature = "async"))]
        let evaluation = self.evaluator.evaluate(password);

        self.view.render(&evaluation);
        evaluation
    }

    pub fn view(&self) -> &V {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Criterion, PasswordStrength};

    #[derive(Default)]
    struct RecordingView {
        rendered: Vec<PasswordEvaluation>,
        resets: usize,
    }

    impl StrengthView for RecordingView {
        fn render(&mut self, evaluation: &PasswordEvaluation) {
            self.rendered.push(evaluation.clone());
        }

        fn reset(&mut self) {
            self.resets += 1;
        }
    }

    fn checker() -> PasswordChecker<RecordingView> {
        PasswordChecker::new(Arc::new(Evaluator::new()), RecordingView::default())
    }

    #[test]
    fn test_checker_renders_each_input() {
        let mut checker = checker();
        checker.on_input(&SecretString::new("a".to_string().into()));
        let last = checker.on_input(&SecretString::new("aB3$xyzw".to_string().into()));

        assert_eq!(checker.view().rendered.len(), 2);
        assert_eq!(checker.view().rendered[1], last);
        assert_eq!(checker.view().resets, 0);
        assert!(last.criteria.is_met(Criterion::Special));
    }

    #[test]
    fn test_checker_resets_on_blank_input() {
        let mut checker = checker();
        checker.on_input(&SecretString::new("abc".to_string().into()));
        let evaluation = checker.on_input(&SecretString::new(String::new().into()));

        assert_eq!(evaluation.strength(), PasswordStrength::NotEvaluated);
        assert_eq!(checker.view().resets, 1);
        assert_eq!(checker.view().rendered.len(), 1);
    }
}

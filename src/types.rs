//! Evaluation result types: criteria, score and strength tiers.

use std::fmt;

/// Characters that satisfy the special-character criterion.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Minimum number of characters for the length criterion.
pub const MIN_LENGTH: usize = 8;

/// Returns `true` if `c` counts as a special character.
pub fn is_special(c: char) -> bool {
    SPECIAL_CHARS.contains(c)
}

/// One of the five fixed password-quality predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Length = 0,
    Uppercase = 1,
    Lowercase = 2,
    Number = 3,
    Special = 4,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Number,
        Criterion::Special,
    ];

    /// Tests the predicate against a password.
    pub fn test(self, password: &str) -> bool {
        match self {
            Criterion::Length => password.chars().count() >= MIN_LENGTH,
            Criterion::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Criterion::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Criterion::Number => password.chars().any(|c| c.is_ascii_digit()),
            Criterion::Special => password.chars().any(is_special),
        }
    }

    /// Short label shown next to the criterion in a checklist.
    pub fn label(self) -> &'static str {
        match self {
            Criterion::Length => "At least 8 characters",
            Criterion::Uppercase => "Uppercase letter",
            Criterion::Lowercase => "Lowercase letter",
            Criterion::Number => "Number",
            Criterion::Special => "Special character",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Pass/fail state of every criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CriteriaReport {
    met: [bool; 5],
}

impl CriteriaReport {
    /// Evaluates all five criteria independently.
    pub fn check(password: &str) -> Self {
        let mut met = [false; 5];
        for criterion in Criterion::ALL {
            met[criterion.index()] = criterion.test(password);
        }
        Self { met }
    }

    pub fn is_met(&self, criterion: Criterion) -> bool {
        self.met[criterion.index()]
    }

    pub fn met_count(&self) -> usize {
        self.met.iter().filter(|&&m| m).count()
    }

    /// Iterates `(criterion, met)` pairs in the fixed criterion order.
    pub fn iter(&self) -> impl Iterator<Item = (Criterion, bool)> + '_ {
        Criterion::ALL.into_iter().map(|c| (c, self.is_met(c)))
    }

    pub fn missing(&self) -> Vec<Criterion> {
        self.iter().filter(|(_, met)| !met).map(|(c, _)| c).collect()
    }
}

/// Score clamped to `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: i64 = 100;

    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(0, Self::MAX) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn strength(&self) -> PasswordStrength {
        match self.0 {
            0..=24 => PasswordStrength::Weak,
            25..=49 => PasswordStrength::Fair,
            50..=74 => PasswordStrength::Good,
            _ => PasswordStrength::Strong,
        }
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strength category. Scored tiers are ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    NotEvaluated,
    Weak,
    Fair,
    Good,
    Strong,
}

impl PasswordStrength {
    pub fn label(&self) -> &'static str {
        match self {
            PasswordStrength::NotEvaluated => "",
            PasswordStrength::Weak => "weak",
            PasswordStrength::Fair => "fair",
            PasswordStrength::Good => "good",
            PasswordStrength::Strong => "strong",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PasswordStrength::NotEvaluated => "Enter a password to see its strength",
            PasswordStrength::Weak => "Weak - This password is easily guessable",
            PasswordStrength::Fair => "Fair - This password could be stronger",
            PasswordStrength::Good => "Good - This is a decent password",
            PasswordStrength::Strong => "Strong - This is a very secure password",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Outcome of a single evaluation.
///
/// `score == None` means the password was not evaluated (blank input or
/// cancellation). Criteria are always reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: Option<PasswordScore>,
    pub criteria: CriteriaReport,
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    /// The neutral state shown before anything was typed.
    pub fn not_evaluated() -> Self {
        Self::default()
    }

    pub fn strength(&self) -> PasswordStrength {
        self.score
            .map(|s| s.strength())
            .unwrap_or(PasswordStrength::NotEvaluated)
    }

    pub fn met_criteria(&self) -> usize {
        self.criteria.met_count()
    }

    pub fn is_evaluated(&self) -> bool {
        self.score.is_some()
    }
}

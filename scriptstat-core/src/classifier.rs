//! Code point classification

use crate::category::{Category, CharacterClass, Language};
use crate::rules::{Rule, RULES};

/// Assigns every code point to exactly one bucket
pub trait CodePointClassifier: Send + Sync {
    /// Classify a scalar value (or the raw value of an unpaired surrogate)
    fn classify(&self, code: u32) -> Category;

    /// Classify a character
    fn classify_char(&self, ch: char) -> Category {
        self.classify(u32::from(ch))
    }

    /// Language bucket of a code point, if any
    fn language_of(&self, code: u32) -> Option<Language> {
        self.classify(code).language()
    }

    /// Check if the code point lands in a structural bucket
    fn is_structural(&self, code: u32) -> bool {
        !self.classify(code).is_language()
    }
}

/// First-match-wins classifier over an ordered rule table
#[derive(Clone, Copy, Debug)]
pub struct RuleClassifier {
    rules: &'static [Rule],
}

impl RuleClassifier {
    /// Classifier over the built-in [`RULES`]
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    /// Classifier over a custom table, evaluated top-down
    pub const fn with_rules(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    /// The rule that decides `code`, or `None` when it falls through to `other`
    pub fn matching_rule(&self, code: u32) -> Option<&'static Rule> {
        self.rules.iter().find(|rule| rule.matcher.matches(code))
    }

    /// The table this classifier evaluates
    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }
}

impl Default for RuleClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CodePointClassifier for RuleClassifier {
    #[inline]
    fn classify(&self, code: u32) -> Category {
        self.rules
            .iter()
            .find_map(|rule| rule.apply(code))
            .unwrap_or(Category::Class(CharacterClass::Other))
    }
}

/// Classify a code point with the built-in rules
#[inline]
pub fn classify(code: u32) -> Category {
    RuleClassifier::new().classify(code)
}

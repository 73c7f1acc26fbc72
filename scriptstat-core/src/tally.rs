//! Per-bucket counters and percentage rounding

use crate::category::{Category, CharacterClass, Language};

/// Thirteen counters, one per bucket
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tally {
    languages: [usize; Language::COUNT],
    classes: [usize; CharacterClass::COUNT],
}

impl Tally {
    /// All counters at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one classification unit
    #[inline]
    pub fn record(&mut self, category: Category) {
        match category {
            Category::Language(lang) => self.languages[lang.index()] += 1,
            Category::Class(class) => self.classes[class.index()] += 1,
        }
    }

    /// Count of any bucket
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Language(lang) => self.language(lang),
            Category::Class(class) => self.class(class),
        }
    }

    /// Count of a language bucket
    pub fn language(&self, lang: Language) -> usize {
        self.languages[lang.index()]
    }

    /// Count of a structural bucket
    pub fn class(&self, class: CharacterClass) -> usize {
        self.classes[class.index()]
    }

    /// Sum over every bucket
    pub fn total(&self) -> usize {
        self.languages.iter().sum::<usize>() + self.classes.iter().sum::<usize>()
    }

    /// Language counts in report order
    pub fn languages(&self) -> impl Iterator<Item = (Language, usize)> + '_ {
        Language::ALL.into_iter().zip(self.languages.iter().copied())
    }

    /// Structural counts in report order
    pub fn classes(&self) -> impl Iterator<Item = (CharacterClass, usize)> + '_ {
        CharacterClass::ALL
            .into_iter()
            .zip(self.classes.iter().copied())
    }
}

/// `count / total` as a percentage rounded to two decimal places
///
/// Returns 0 when `total` is 0.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    ((count as f64 / total as f64) * 10000.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_hits_one_counter() {
        let mut tally = Tally::new();
        tally.record(Language::Russian.into());
        tally.record(Language::Russian.into());
        tally.record(CharacterClass::Other.into());

        assert_eq!(tally.language(Language::Russian), 2);
        assert_eq!(tally.class(CharacterClass::Other), 1);
        assert_eq!(tally.count(Language::Ukrainian.into()), 0);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_iteration_order() {
        let tally = Tally::new();
        let tags: Vec<_> = tally.classes().map(|(class, _)| class.tag()).collect();
        assert_eq!(
            tags,
            ["digits", "punctuation", "symbols", "whitespace", "other"]
        );
        assert_eq!(tally.languages().count(), 8);
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(10, 11), 90.91);
        assert_eq!(percentage(1, 11), 9.09);
        assert_eq!(percentage(1, 3), 33.33);
        assert_eq!(percentage(2, 3), 66.67);
        assert_eq!(percentage(1, 8), 12.5);
        assert_eq!(percentage(5, 5), 100.0);
        assert_eq!(percentage(0, 5), 0.0);
    }

    #[test]
    fn test_percentage_of_empty_total() {
        assert_eq!(percentage(0, 0), 0.0);
    }
}

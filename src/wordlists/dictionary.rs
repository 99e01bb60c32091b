//! Dictionary membership
//!
//! The set of words accepted as valid guesses, distinct from the target
//! pool. Built once at startup and read-only afterwards.

use crate::core::Word;
use rustc_hash::FxHashSet;

/// Immutable set of valid guessable words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from validated words
    #[must_use]
    pub fn new(words: &[Word]) -> Self {
        Self {
            words: words.iter().map(|w| w.text().to_string()).collect(),
        }
    }

    /// Case-insensitive membership test
    ///
    /// An unknown word is `false`, never an error; the caller decides the
    /// user-facing messaging.
    ///
    /// # Examples
    /// ```
    /// use kelimele::core::Word;
    /// use kelimele::wordlists::Dictionary;
    ///
    /// let dict = Dictionary::new(&[Word::new("kalem").unwrap()]);
    /// assert!(dict.contains("kalem"));
    /// assert!(dict.contains("KALEM"));
    /// assert!(!dict.contains("zzzzz"));
    /// ```
    #[must_use]
    pub fn contains(&self, raw: &str) -> bool {
        self.words.contains(&Word::fold_text(raw))
    }

    /// Membership test for an already-validated word
    #[must_use]
    pub fn contains_word(&self, word: &Word) -> bool {
        self.words.contains(word.text())
    }

    /// Number of words in the dictionary
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True when the dictionary holds no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn dict(words: &[&str]) -> Dictionary {
        Dictionary::new(&words_from_slice(words))
    }

    #[test]
    fn membership_is_case_insensitive() {
        let d = dict(&["kalem", "kitap"]);
        assert!(d.contains("kalem"));
        assert!(d.contains("KALEM"));
        assert!(d.contains("KaLeM"));
    }

    #[test]
    fn membership_folds_turkish_uppercase() {
        let d = dict(&["kadın", "kitap", "şeker"]);
        // KADIN folds I -> ı, KİTAP folds İ -> i
        assert!(d.contains("KADIN"));
        assert!(d.contains("KİTAP"));
        assert!(d.contains("ŞEKER"));
    }

    #[test]
    fn unknown_word_is_false_not_error() {
        let d = dict(&["kalem"]);
        assert!(!d.contains("zzzzz"));
        assert!(!d.contains(""));
        assert!(!d.contains("kale")); // wrong length never matches
    }

    #[test]
    fn contains_word_matches_contains() {
        let d = dict(&["deniz"]);
        let word = crate::core::Word::new("DENİZ").unwrap();
        assert!(d.contains_word(&word));
    }

    #[test]
    fn len_and_empty() {
        assert!(dict(&[]).is_empty());
        assert_eq!(dict(&["kalem", "kitap"]).len(), 2);
    }
}

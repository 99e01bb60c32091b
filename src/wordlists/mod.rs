//! Word lists for the game
//!
//! Provides embedded word lists compiled into the binary and the dictionary
//! membership set built from them.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{DICTIONARY, DICTIONARY_COUNT, TARGETS, TARGETS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ALPHABET;

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn targets_count_matches_const() {
        assert_eq!(TARGETS.len(), TARGETS_COUNT);
    }

    #[test]
    fn dictionary_words_are_valid() {
        // All words should be 5 letters of the Turkish alphabet, lowercase
        for &word in DICTIONARY {
            assert_eq!(word.chars().count(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| ALPHABET.contains(&c)),
                "Word '{word}' contains chars outside the alphabet"
            );
        }
    }

    #[test]
    fn target_words_are_valid() {
        for &word in TARGETS {
            assert_eq!(word.chars().count(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| ALPHABET.contains(&c)),
                "Word '{word}' contains chars outside the alphabet"
            );
        }
    }

    #[test]
    fn targets_subset_of_dictionary() {
        // Every target must be guessable
        let dictionary_set: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for &target in TARGETS {
            assert!(
                dictionary_set.contains(&target),
                "Target '{target}' not in dictionary"
            );
        }
    }

    #[test]
    fn target_pool_size() {
        assert_eq!(TARGETS_COUNT, 80, "Expected an 80-word target pool");
    }
}

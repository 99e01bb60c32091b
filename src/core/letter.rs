//! Turkish alphabet handling
//!
//! The game recognizes the 29 letters of the Turkish alphabet. Case folding
//! is locale-aware and therefore done by hand: Rust's `char::to_lowercase`
//! maps `I` to `i`, but in Turkish `I` folds to dotless `ı` and dotted `İ`
//! folds to `i`.

use std::fmt;

/// The 29 letters of the Turkish alphabet, in alphabet order.
///
/// Note the absence of ASCII `q`, `w` and `x`.
pub const ALPHABET: [char; 29] = [
    'a', 'b', 'c', 'ç', 'd', 'e', 'f', 'g', 'ğ', 'h', 'ı', 'i', 'j', 'k', 'l',
    'm', 'n', 'o', 'ö', 'p', 'r', 's', 'ş', 't', 'u', 'ü', 'v', 'y', 'z',
];

/// Fold a single character to its Turkish lowercase form
///
/// Characters without a special Turkish mapping go through the regular
/// Unicode lowercase mapping (taking the first char, which is exact for
/// every letter the alphabet check will accept afterwards).
#[must_use]
pub fn fold_lower(ch: char) -> char {
    match ch {
        'I' => 'ı',
        'İ' => 'i',
        _ => ch.to_lowercase().next().unwrap_or(ch),
    }
}

/// Uppercase a folded letter for display
///
/// Tiles and revealed words render uppercase, so the dotted/dotless pair
/// needs the inverse of [`fold_lower`]: `i` becomes `İ` and `ı` becomes `I`.
#[must_use]
pub fn display_upper(ch: char) -> char {
    match ch {
        'i' => 'İ',
        'ı' => 'I',
        _ => ch.to_uppercase().next().unwrap_or(ch),
    }
}

/// Uppercase a whole word for display
#[must_use]
pub fn display_upper_word(word: &str) -> String {
    word.chars().map(display_upper).collect()
}

/// A single normalized letter of the Turkish alphabet
///
/// Invariant: the wrapped char is always lowercase-folded and a member of
/// [`ALPHABET`]. Construction through [`Letter::new`] is the only way in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter(char);

impl Letter {
    /// Normalize a raw input character
    ///
    /// Returns `None` when the folded character is not in the alphabet;
    /// callers ignore such input (a key press that isn't a letter).
    ///
    /// # Examples
    /// ```
    /// use kelimele::core::Letter;
    ///
    /// assert_eq!(Letter::new('K').unwrap().as_char(), 'k');
    /// assert_eq!(Letter::new('I').unwrap().as_char(), 'ı');
    /// assert!(Letter::new('7').is_none());
    /// assert!(Letter::new('q').is_none());
    /// ```
    #[must_use]
    pub fn new(raw: char) -> Option<Self> {
        let folded = fold_lower(raw);
        ALPHABET.contains(&folded).then_some(Self(folded))
    }

    /// The normalized lowercase char
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_letters_fold_to_lowercase() {
        assert_eq!(Letter::new('A').unwrap().as_char(), 'a');
        assert_eq!(Letter::new('z').unwrap().as_char(), 'z');
    }

    #[test]
    fn dotted_and_dotless_i_fold_the_turkish_way() {
        // I -> ı and İ -> i, never I -> i
        assert_eq!(Letter::new('I').unwrap().as_char(), 'ı');
        assert_eq!(Letter::new('İ').unwrap().as_char(), 'i');
        assert_eq!(Letter::new('ı').unwrap().as_char(), 'ı');
        assert_eq!(Letter::new('i').unwrap().as_char(), 'i');
    }

    #[test]
    fn accented_uppercase_folds() {
        assert_eq!(Letter::new('Ç').unwrap().as_char(), 'ç');
        assert_eq!(Letter::new('Ğ').unwrap().as_char(), 'ğ');
        assert_eq!(Letter::new('Ö').unwrap().as_char(), 'ö');
        assert_eq!(Letter::new('Ş').unwrap().as_char(), 'ş');
        assert_eq!(Letter::new('Ü').unwrap().as_char(), 'ü');
    }

    #[test]
    fn non_letters_rejected() {
        for ch in ['1', ' ', '!', '\n', 'é', '😀'] {
            assert!(Letter::new(ch).is_none(), "accepted {ch:?}");
        }
    }

    #[test]
    fn q_w_x_are_not_turkish() {
        assert!(Letter::new('q').is_none());
        assert!(Letter::new('w').is_none());
        assert!(Letter::new('x').is_none());
        assert!(Letter::new('X').is_none());
    }

    #[test]
    fn display_upper_inverts_folding() {
        for &ch in &ALPHABET {
            let upper = display_upper(ch);
            assert_eq!(fold_lower(upper), ch, "round trip failed for {ch}");
        }
        assert_eq!(display_upper('i'), 'İ');
        assert_eq!(display_upper('ı'), 'I');
    }

    #[test]
    fn display_upper_word_matches_locale() {
        assert_eq!(display_upper_word("kitap"), "KİTAP");
        assert_eq!(display_upper_word("kadın"), "KADIN");
    }

    #[test]
    fn alphabet_has_29_letters() {
        assert_eq!(ALPHABET.len(), 29);
    }
}

//! Contiguous alphabet ranges.
//!
//! An [`Alphabet`] is an inclusive range of Unicode code points, e.g.
//! `А..Я` for Russian or `A..Z` for English. The catalog keys every item
//! by its first character, so the range decides which lines of a word
//! list are playable at all.

use serde::{Deserialize, Serialize};

use crate::error::{ChainError, ChainResult};

/// An inclusive, contiguous range of letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet {
    first: char,
    last: char,
}

impl Alphabet {
    /// Create an alphabet spanning `first..=last` by code point.
    ///
    /// Returns [`ChainError::InvalidAlphabet`] if `first` comes after
    /// `last`.
    pub fn new(first: char, last: char) -> ChainResult<Self> {
        if first > last {
            return Err(ChainError::InvalidAlphabet { first, last });
        }
        Ok(Self { first, last })
    }

    /// The first letter of the range.
    pub fn first(&self) -> char {
        self.first
    }

    /// The last letter of the range.
    pub fn last(&self) -> char {
        self.last
    }

    /// Whether `ch` falls inside the range.
    pub fn contains(&self, ch: char) -> bool {
        self.first <= ch && ch <= self.last
    }

    /// All letters of the range in ascending code-point order.
    ///
    /// Code points that are not valid `char`s (the surrogate gap) are
    /// skipped, so a range such as `A..Z` yields exactly 26 letters.
    pub fn letters(&self) -> impl Iterator<Item = char> + use<> {
        let (first, last) = (self.first as u32, self.last as u32);
        (first..=last).filter_map(char::from_u32)
    }

    /// Number of letters in the range.
    pub fn len(&self) -> usize {
        self.letters().count()
    }

    /// Whether the range is empty. A valid range never is, since it
    /// always contains at least `first`.
    pub fn is_empty(&self) -> bool {
        self.letters().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_range() {
        let a = Alphabet::new('A', 'Z').unwrap();
        assert_eq!(a.len(), 26);
        assert!(a.contains('A'));
        assert!(a.contains('M'));
        assert!(a.contains('Z'));
        assert!(!a.contains('a'));
        assert!(!a.contains('0'));
    }

    #[test]
    fn cyrillic_range() {
        let a = Alphabet::new('А', 'Я').unwrap();
        assert_eq!(a.len(), 32);
        assert!(a.contains('М'));
        assert!(a.contains('Ь'));
        // Ё sits outside the contiguous А..Я block
        assert!(!a.contains('Ё'));
    }

    #[test]
    fn single_letter_range() {
        let a = Alphabet::new('X', 'X').unwrap();
        assert_eq!(a.letters().collect::<Vec<_>>(), vec!['X']);
        assert!(!a.is_empty());
    }

    #[test]
    fn reversed_range_rejected() {
        let err = Alphabet::new('Z', 'A').unwrap_err();
        assert!(matches!(
            err,
            ChainError::InvalidAlphabet {
                first: 'Z',
                last: 'A'
            }
        ));
    }

    #[test]
    fn letters_in_order() {
        let a = Alphabet::new('A', 'E').unwrap();
        assert_eq!(
            a.letters().collect::<Vec<_>>(),
            vec!['A', 'B', 'C', 'D', 'E']
        );
    }

    #[test]
    fn round_trip_serde() {
        let a = Alphabet::new('А', 'Я').unwrap();
        let json = serde_json::to_string(&a).unwrap();
        let b: Alphabet = serde_json::from_str(&json).unwrap();
        assert_eq!(a, b);
    }
}

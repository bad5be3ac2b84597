use crate::Error;
use std::collections::HashSet;
use std::fmt;
use std::fs::read_to_string;
use std::ops::Range;

/// The words that may be played.
///
/// The words keep their order, which fixes the order in which placements are found.
/// Membership ignores order and duplicates.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    index: HashSet<String>,
    /// Path of the file used to build the dictionary.
    /// Empty if the dictionary is not read from a file.
    pub wordfile: String,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words, {} distinct from '{}'>",
            self.words.len(),
            self.index.len(),
            self.wordfile
        )
    }
}

/// Uppercase `word`, or `None` if it has anything but `A`..`Z`.
fn normalize(word: &str) -> Option<String> {
    if !word.is_empty() && word.bytes().all(|b| b.is_ascii_alphabetic()) {
        Some(word.to_ascii_uppercase())
    } else {
        None
    }
}

impl Dictionary {
    /// Build a dictionary from a list of words.
    /// Words are trimmed and uppercased, empty words are skipped.
    /// ## Errors
    /// If a word has something else than the letters `A`..`Z`.
    /// ## Examples
    /// ```
    /// # use wordgrid_solver::{Dictionary, Error};
    /// let dictionary = Dictionary::from_words(&["cat", "AT", "cats", "at"])?;
    /// assert_eq!(dictionary.len(), 4);
    /// assert!(dictionary.contains("CAT"));
    /// assert!(!dictionary.contains("CA"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Dictionary, Error> {
        let mut dictionary = Dictionary::default();
        for word in words {
            dictionary.push(word.as_ref())?;
        }
        Ok(dictionary)
    }

    /// Read the dictionary from a file. The file must be encoded in utf-8 and
    /// have one word per line.
    /// ## Errors
    /// Fails if the file can not be read, or a word is not valid.
    pub fn from_file(wordfile: &str) -> Result<Dictionary, Error> {
        let text = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let lines: Vec<&str> = text.lines().collect();
        let mut dictionary = Dictionary::from_words(&lines)?;
        dictionary.wordfile = String::from(wordfile);
        Ok(dictionary)
    }

    fn push(&mut self, word: &str) -> Result<(), Error> {
        let word = word.trim();
        if word.is_empty() {
            return Ok(());
        }
        let word = normalize(word).ok_or_else(|| Error::InvalidWord(String::from(word)))?;
        self.index.insert(word.clone());
        self.words.push(word);
        Ok(())
    }

    /// Returns true if `word` is in the dictionary. Case sensitive: words are stored uppercase.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(word)
    }

    /// Number of words, duplicates included
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// The words in order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate over the words in order
    pub fn iter(&self) -> std::slice::Iter<String> {
        self.words.iter()
    }

    /// Index range of `count` words from `start`, clamped to the dictionary.
    pub fn slice_range(&self, start: usize, count: usize) -> Range<usize> {
        let start = start.min(self.len());
        let end = start.saturating_add(count).min(self.len());
        start..end
    }

    /// Up to `count` words from `start`. Out of range parts are ignored.
    pub fn slice(&self, start: usize, count: usize) -> &[String] {
        &self.words[self.slice_range(start, count)]
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;
    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    type Result<T> = std::result::Result<T, Error>;

    const WORDS: &[&str] = &["cat", "at", "cats", "ta", "at", " tac\r", ""];

    #[test]
    fn test_from_words() -> Result<()> {
        let dictionary = Dictionary::from_words(WORDS)?;
        assert_eq!(dictionary.len(), 6);
        assert_eq!(dictionary.words()[5], "TAC");
        for &word in &["CAT", "AT", "CATS", "TA", "TAC"] {
            assert!(dictionary.contains(word), "{}", word);
        }
        assert!(!dictionary.contains("cat"));
        assert!(!dictionary.contains(""));
        Ok(())
    }

    #[test]
    fn test_slice_clamps() -> Result<()> {
        let dictionary = Dictionary::from_words(&["A", "B", "C"])?;
        assert_eq!(dictionary.slice(1, 1), &["B"]);
        assert_eq!(dictionary.slice(2, 10), &["C"]);
        assert!(dictionary.slice(5, 2).is_empty());
        assert_eq!(dictionary.slice_range(1, usize::MAX), 1..3);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "InvalidWord(\"don't\")")]
    fn test_invalid_word() {
        Dictionary::from_words(&["don't"]).unwrap();
    }

    #[test]
    fn test_missing_file() {
        let err = Dictionary::from_file("no/such/wordfile.txt").unwrap_err();
        assert!(matches!(err, Error::ReadError { .. }));
    }
}

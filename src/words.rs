//! The word index: a [`Tree`] of [`WordInfo`] recording every file and line
//! each word was seen on.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Error, Result};
use crate::tree::Tree;

/// Every place one word has been seen.
///
/// Ordering and equality only look at `word`, so a `WordInfo` can be found
/// in a tree by its word alone and its locations can grow in place.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WordInfo {
    word: String,
    locations: BTreeMap<String, Vec<u32>>,
}

impl WordInfo {
    /// A word that hasn't been seen anywhere yet.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            locations: BTreeMap::new(),
        }
    }

    /// The (already case-folded) word.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Line numbers per file, files in name order, lines in the order they
    /// were recorded. A line repeats when the word appears on it more than
    /// once.
    pub fn locations(&self) -> &BTreeMap<String, Vec<u32>> {
        &self.locations
    }

    /// Records that the word appears on `line` of `file`.
    pub fn add_occurrence(&mut self, file: &str, line: u32) {
        match self.locations.get_mut(file) {
            Some(lines) => lines.push(line),
            None => {
                self.locations.insert(file.to_owned(), vec![line]);
            }
        }
    }

    /// How many times the word was recorded, across all files.
    pub fn total_occurrences(&self) -> usize {
        self.locations.values().map(Vec::len).sum()
    }
}

impl PartialEq for WordInfo {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for WordInfo {}

impl PartialOrd for WordInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WordInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.word.cmp(&other.word)
    }
}

impl Borrow<str> for WordInfo {
    fn borrow(&self) -> &str {
        &self.word
    }
}

/// Splits a raw line into lower-cased words.
///
/// Everything other than ASCII letters and spaces is deleted first, so
/// `don't` becomes `dont` and `e-mail` becomes `email`. What remains is split
/// on runs of spaces.
///
/// # Examples
///
/// ```
/// use wordtrack::words::tokenize;
///
/// assert_eq!(tokenize("Hello,  World! it's 2024"), ["hello", "world", "its"]);
/// ```
pub fn tokenize(line: &str) -> Vec<String> {
    let letters: String = line
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || *c == ' ')
        .collect();

    letters
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_ascii_lowercase)
        .collect()
}

/// One line of input text and where it came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLine {
    /// Name the file is recorded under.
    pub file: String,
    /// 1-indexed line number.
    pub number: u32,
    /// The raw line, without its terminator.
    pub text: String,
}

impl SourceLine {
    /// Bundles up a line of text.
    pub fn new(file: impl Into<String>, number: u32, text: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            number,
            text: text.into(),
        }
    }
}

/// A tree of words and their occurrences.
#[derive(Clone, Debug, Default)]
pub struct WordIndex {
    tree: Tree<WordInfo>,
}

impl WordIndex {
    /// An index with no words.
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying tree, for traversal.
    pub fn tree(&self) -> &Tree<WordInfo> {
        &self.tree
    }

    /// Gives up the underlying tree.
    pub fn into_tree(self) -> Tree<WordInfo> {
        self.tree
    }

    /// The number of distinct words.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Whether no words have been recorded.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Looks up a word. The probe must already be lower case.
    pub fn get(&self, word: &str) -> Option<&WordInfo> {
        self.tree.search(word).map(|node| node.value())
    }

    /// Records one occurrence of `word` on `line` of `file`. A new word gets a
    /// fresh entry; a known word has the occurrence appended to its entry.
    ///
    /// # Errors
    ///
    /// [`Error::NullArgument`] if `word` or `file` is empty.
    pub fn record(&mut self, word: &str, file: &str, line: u32) -> Result<()> {
        if word.is_empty() {
            return Err(Error::NullArgument("word"));
        }
        if file.is_empty() {
            return Err(Error::NullArgument("file"));
        }

        match self.tree.search_mut(word) {
            Some(info) => info.add_occurrence(file, line),
            None => {
                let mut info = WordInfo::new(word);
                info.add_occurrence(file, line);
                self.tree.add(info);
            }
        }
        Ok(())
    }

    /// Tokenizes one line and records every word on it. Returns how many
    /// words were recorded.
    pub fn ingest_line(&mut self, line: &SourceLine) -> Result<usize> {
        let mut recorded = 0;
        for word in tokenize(&line.text) {
            self.record(&word, &line.file, line.number)?;
            recorded += 1;
        }
        trace!(file = %line.file, line = line.number, recorded, "ingested line");
        Ok(recorded)
    }

    /// Ingests every line from `source`. Returns how many words were
    /// recorded.
    pub fn ingest<I>(&mut self, source: I) -> Result<usize>
    where
        I: IntoIterator<Item = SourceLine>,
    {
        let mut total = 0;
        for line in source {
            total += self.ingest_line(&line)?;
        }
        Ok(total)
    }
}

impl From<Tree<WordInfo>> for WordIndex {
    fn from(tree: Tree<WordInfo>) -> Self {
        Self { tree }
    }
}

use std::collections::HashMap;

use crate::{tokenize, CloudError, SeparatorSet};

/// Canonical lowercase form used as the counting key.
pub fn fold_case(word: &str) -> String {
    word.to_lowercase()
}

/// Case-folded word to occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WordCount {
    counts: HashMap<String, u32>,
    total: u64,
}

impl WordCount {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts every word token of every line.
    ///
    /// Lines are folded before tokenizing, so a key never holds a character
    /// that is a separator in its folded form.
    pub fn from_lines<I, S>(lines: I, separators: &SeparatorSet) -> Result<Self, CloudError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut counts = Self::new();
        for line in lines {
            let folded = fold_case(line.as_ref());
            for token in tokenize(&folded, separators).filter(|t| t.is_word()) {
                counts.insert_folded(token.text)?;
            }
        }
        Ok(counts)
    }

    /// Folds `word` and increments its count.
    pub fn add(&mut self, word: &str) -> Result<(), CloudError> {
        self.insert_folded(&fold_case(word))
    }

    fn insert_folded(&mut self, word: &str) -> Result<(), CloudError> {
        if word.is_empty() {
            return Err(CloudError::EmptyToken);
        }
        *self.counts.entry(word.to_owned()).or_insert(0) += 1;
        self.total += 1;
        Ok(())
    }

    pub fn get(&self, word: &str) -> Option<u32> {
        self.counts.get(word).copied()
    }

    /// Number of distinct keys.
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Number of word tokens consumed.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

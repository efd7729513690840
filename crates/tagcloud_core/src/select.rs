use std::cmp::Reverse;

use tagcloud_logging::cloud_debug;

use crate::{CloudError, CountRange, WordCount};

/// Requested number of words, known to be non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct WordLimit(usize);

impl WordLimit {
    pub fn new(limit: usize) -> Self {
        Self(limit)
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for WordLimit {
    type Error = CloudError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        usize::try_from(value)
            .map(Self)
            .map_err(|_| CloudError::NegativeWordLimit(value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordFrequency {
    pub word: String,
    pub count: u32,
}

/// The top-N entries of a [`WordCount`] plus the count bounds among them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    entries: Vec<WordFrequency>,
    range: Option<CountRange>,
}

impl Selection {
    /// Entries in rank order, or alphabetical order after [`Selection::into_alphabetical`].
    pub fn entries(&self) -> &[WordFrequency] {
        &self.entries
    }

    /// `None` when nothing was selected.
    pub fn range(&self) -> Option<CountRange> {
        self.range
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Re-sorts the selected entries by word, ascending by code point.
    pub fn into_alphabetical(mut self) -> Self {
        self.entries.sort_by(|a, b| a.word.cmp(&b.word));
        self
    }

    pub fn into_entries(self) -> Vec<WordFrequency> {
        self.entries
    }
}

/// Picks the `limit` most frequent words.
///
/// Higher counts rank first; equal counts rank by word ascending, so the
/// result does not depend on map iteration order.
pub fn select_top(counts: &WordCount, limit: WordLimit) -> Result<Selection, CloudError> {
    let requested = limit.get();
    let available = counts.distinct();
    if requested > available {
        return Err(CloudError::InsufficientData {
            requested,
            available,
        });
    }

    let mut ranked: Vec<WordFrequency> = counts
        .iter()
        .map(|(word, count)| WordFrequency {
            word: word.to_owned(),
            count,
        })
        .collect();
    ranked.sort_unstable_by(|a, b| {
        Reverse(a.count)
            .cmp(&Reverse(b.count))
            .then_with(|| a.word.cmp(&b.word))
    });
    ranked.truncate(requested);

    let range = match (ranked.first(), ranked.last()) {
        (Some(first), Some(last)) => Some(CountRange {
            max: first.count,
            min: last.count,
        }),
        _ => None,
    };
    cloud_debug!(
        "selected {} of {} distinct words, range {:?}",
        ranked.len(),
        available,
        range
    );

    Ok(Selection {
        entries: ranked,
        range,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeparatorSet;
    use pretty_assertions::assert_eq;

    fn counts(text: &str) -> WordCount {
        WordCount::from_lines([text], &SeparatorSet::new(" ").unwrap()).unwrap()
    }

    fn words(selection: &Selection) -> Vec<(&str, u32)> {
        selection
            .entries()
            .iter()
            .map(|e| (e.word.as_str(), e.count))
            .collect()
    }

    #[test]
    fn ties_break_by_word() {
        let selection = select_top(&counts("b a c a d d"), WordLimit::new(3)).unwrap();
        assert_eq!(words(&selection), vec![("a", 2), ("d", 2), ("b", 1)]);
        assert_eq!(selection.range(), Some(CountRange { max: 2, min: 1 }));
    }

    #[test]
    fn zero_limit_selects_nothing() {
        let selection = select_top(&counts("a b"), WordLimit::new(0)).unwrap();
        assert!(selection.is_empty());
        assert_eq!(selection.range(), None);
    }

    #[test]
    fn limit_equal_to_distinct_selects_all() {
        let selection = select_top(&counts("x y y"), WordLimit::new(2)).unwrap();
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn limit_above_distinct_fails() {
        assert_eq!(
            select_top(&counts("a b"), WordLimit::new(3)),
            Err(CloudError::InsufficientData {
                requested: 3,
                available: 2
            })
        );
    }

    #[test]
    fn alphabetical_keeps_same_entries() {
        let selection = select_top(&counts("z z z m m a"), WordLimit::new(3)).unwrap();
        let sorted = selection.clone().into_alphabetical();
        assert_eq!(words(&sorted), vec![("a", 1), ("m", 2), ("z", 3)]);
        assert_eq!(sorted.range(), selection.range());
    }

    #[test]
    fn negative_limit_is_rejected() {
        assert_eq!(
            WordLimit::try_from(-1i64),
            Err(CloudError::NegativeWordLimit(-1))
        );
        assert_eq!(WordLimit::try_from(4i64), Ok(WordLimit::new(4)));
    }
}

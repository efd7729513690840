use std::collections::BTreeSet;
use std::fmt;

use crate::CloudError;

/// Immutable set of characters that delimit words.
#[derive(Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: BTreeSet<char>,
}

impl SeparatorSet {
    /// Builds the set from every character of `chars`; duplicates collapse.
    pub fn new(chars: &str) -> Result<Self, CloudError> {
        let chars: BTreeSet<char> = chars.chars().collect();
        if chars.is_empty() {
            return Err(CloudError::EmptySeparatorSet);
        }
        Ok(Self { chars })
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

impl fmt::Debug for SeparatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: String = self.chars.iter().collect();
        f.debug_tuple("SeparatorSet").field(&joined).finish()
    }
}

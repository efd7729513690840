use serde::{Deserialize, Serialize};
use tagcloud_logging::cloud_trace;

use crate::CloudError;

/// Inclusive bounds of the size classes, `min < max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontRange {
    pub min: u32,
    pub max: u32,
}

impl Default for FontRange {
    fn default() -> Self {
        Self { min: 11, max: 48 }
    }
}

/// Highest and lowest count among the selected words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub max: u32,
    pub min: u32,
}

impl FontRange {
    pub fn new(min: u32, max: u32) -> Result<Self, CloudError> {
        let range = Self { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), CloudError> {
        if self.min >= self.max {
            return Err(CloudError::InvalidFontRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Maps `count` linearly onto `min..=max`, rounding down.
    ///
    /// When every selected word has the same count there is no spread to map,
    /// and all of them get `max`. Counts outside `counts` are clamped.
    pub fn size_class(&self, count: u32, counts: CountRange) -> u32 {
        if counts.max <= counts.min {
            cloud_trace!("zero-width count range {:?}, using max font", counts);
            return self.max;
        }
        let count = count.clamp(counts.min, counts.max);
        let span = u64::from(self.max.saturating_sub(self.min));
        let offset = u64::from(count - counts.min);
        let width = u64::from(counts.max - counts.min);
        // offset <= width, so the quotient is at most span.
        self.min + (span * offset / width) as u32
    }
}

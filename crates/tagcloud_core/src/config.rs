use serde::{Deserialize, Serialize};

use crate::{CloudError, FontRange, SeparatorSet};

/// Whitespace plus the punctuation that delimits words by default.
pub const DEFAULT_SEPARATORS: &str = " \t\n\r,-.!?[]';:/()*\"";

pub const DEFAULT_STYLESHEETS: &[&str] = &[
    "http://web.cse.ohio-state.edu/software/2231/web-sw2/assignments/projects/tag-cloud-generator/data/tagcloud.css",
    "tagcloud.css",
];

/// Startup constants of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    pub separators: String,
    pub font: FontRange,
    pub stylesheets: Vec<String>,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.to_string(),
            font: FontRange::default(),
            stylesheets: DEFAULT_STYLESHEETS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CloudConfig {
    pub fn validate(&self) -> Result<(), CloudError> {
        self.font.validate()?;
        self.separator_set().map(|_| ())
    }

    pub fn separator_set(&self) -> Result<SeparatorSet, CloudError> {
        SeparatorSet::new(&self.separators)
    }
}

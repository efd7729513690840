//! Tag cloud core: pure word-frequency pipeline from text lines to sized entries.
mod cloud;
mod config;
mod count;
mod error;
mod font;
mod select;
mod separators;
mod tokenizer;

pub use cloud::{build_tag_cloud, TagCloud, TagCloudEntry};
pub use config::{CloudConfig, DEFAULT_SEPARATORS, DEFAULT_STYLESHEETS};
pub use count::{fold_case, WordCount};
pub use error::CloudError;
pub use font::{CountRange, FontRange};
pub use select::{select_top, Selection, WordFrequency, WordLimit};
pub use separators::SeparatorSet;
pub use tokenizer::{next_word_or_separator, tokenize, Token, TokenKind, Tokens};

use tagcloud_logging::cloud_debug;

use crate::{select_top, CloudConfig, CloudError, CountRange, WordCount, WordLimit};

/// One rendered word: case-folded text, raw count and size class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCloudEntry {
    pub word: String,
    pub count: u32,
    pub size_class: u32,
}

/// Finished cloud, entries in alphabetical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCloud {
    pub limit: WordLimit,
    pub total_words: u64,
    pub distinct_words: usize,
    pub range: Option<CountRange>,
    pub entries: Vec<TagCloudEntry>,
}

/// Runs the whole pipeline over `lines`: count, select, order, size.
pub fn build_tag_cloud<I, S>(
    lines: I,
    limit: WordLimit,
    config: &CloudConfig,
) -> Result<TagCloud, CloudError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    config.font.validate()?;
    let separators = config.separator_set()?;

    let counts = WordCount::from_lines(lines, &separators)?;
    cloud_debug!(
        "counted {} word tokens, {} distinct",
        counts.total(),
        counts.distinct()
    );

    let selection = select_top(&counts, limit)?.into_alphabetical();
    let range = selection.range();
    let entries = selection
        .into_entries()
        .into_iter()
        .map(|entry| {
            // Non-empty selection always carries a range.
            let size_class = range
                .map(|r| config.font.size_class(entry.count, r))
                .unwrap_or(config.font.max);
            TagCloudEntry {
                word: entry.word,
                count: entry.count,
                size_class,
            }
        })
        .collect();

    Ok(TagCloud {
        limit,
        total_words: counts.total(),
        distinct_words: counts.distinct(),
        range,
        entries,
    })
}

use serde_json::{json, Value};
use tagcloud_core::TagCloud;

/// Machine-readable companion to the HTML page.
pub fn build_summary(source_name: &str, cloud: &TagCloud) -> Value {
    json!({
        "source": source_name,
        "requested": cloud.limit.get(),
        "total_words": cloud.total_words,
        "distinct_words": cloud.distinct_words,
        "max_count": cloud.range.map(|r| r.max),
        "min_count": cloud.range.map(|r| r.min),
        "entries": cloud.entries.iter().map(|e| {
            json!({
                "word": e.word,
                "count": e.count,
                "size_class": e.size_class
            })
        }).collect::<Vec<_>>()
    })
}

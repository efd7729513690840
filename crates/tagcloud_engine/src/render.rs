use std::io::{self, Write};

use tagcloud_core::{TagCloud, TagCloudEntry};

/// Values interpolated into the fixed document header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageHeader<'a> {
    pub limit: usize,
    pub source_name: &'a str,
    pub stylesheets: &'a [String],
}

/// Writes the complete HTML document: header, one span per entry, footer.
///
/// Entries are emitted in the order stored in `cloud`; no sorting happens here.
pub fn render_document<W: Write>(
    out: &mut W,
    header: &PageHeader<'_>,
    cloud: &TagCloud,
) -> io::Result<()> {
    write_header(out, header)?;
    for entry in &cloud.entries {
        write_entry(out, entry)?;
    }
    write_footer(out)
}

pub fn render_to_string(header: &PageHeader<'_>, cloud: &TagCloud) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render_document(&mut buffer, header, cloud);
    String::from_utf8_lossy(&buffer).into_owned()
}

fn write_header<W: Write>(out: &mut W, header: &PageHeader<'_>) -> io::Result<()> {
    let mut title = String::new();
    html_escape_into(&mut title, header.source_name);
    let limit = header.limit;

    writeln!(out, "<html>")?;
    writeln!(out, "<head>")?;
    writeln!(out, "<title>Top {limit} words in {title}</title>")?;
    for href in header.stylesheets {
        let mut escaped = String::new();
        html_escape_into(&mut escaped, href);
        writeln!(
            out,
            "<link href=\"{escaped}\" rel=\"stylesheet\" type=\"text/css\">"
        )?;
    }
    writeln!(out, "</head>")?;
    writeln!(out, "<body>")?;
    writeln!(out, "<h2>Top {limit} words in {title}</h2>")?;
    writeln!(out, "<hr>")?;
    writeln!(out, "<div class=\"cdiv\">")?;
    writeln!(out, "<p class=\"cbox\">")
}

fn write_entry<W: Write>(out: &mut W, entry: &TagCloudEntry) -> io::Result<()> {
    let mut word = String::with_capacity(entry.word.len());
    html_escape_into(&mut word, &entry.word);
    writeln!(
        out,
        "<span class=\"f{}\" title=\"count: {}\">{}</span>",
        entry.size_class, entry.count, word
    )
}

fn write_footer<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "</p>")?;
    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}

/// HTML-escape a string into the output buffer.
pub fn html_escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagcloud_core::WordLimit;

    #[test]
    fn escapes_markup_characters() {
        let mut out = String::new();
        html_escape_into(&mut out, "<a href=\"x\">&</a>");
        assert_eq!(out, "&lt;a href=&quot;x&quot;&gt;&amp;&lt;/a&gt;");
    }

    #[test]
    fn entry_line_carries_size_and_count() {
        let mut buffer = Vec::new();
        let entry = TagCloudEntry {
            word: "r&d".to_string(),
            count: 7,
            size_class: 30,
        };
        write_entry(&mut buffer, &entry).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "<span class=\"f30\" title=\"count: 7\">r&amp;d</span>\n"
        );
    }

    #[test]
    fn empty_cloud_is_header_and_footer_only() {
        let cloud = TagCloud {
            limit: WordLimit::new(0),
            total_words: 0,
            distinct_words: 0,
            range: None,
            entries: Vec::new(),
        };
        let header = PageHeader {
            limit: 0,
            source_name: "empty.txt",
            stylesheets: &[],
        };
        let html = render_to_string(&header, &cloud);
        assert!(html.contains("<title>Top 0 words in empty.txt</title>"));
        assert!(!html.contains("<span"));
        assert!(html.ends_with("</p>\n</div>\n</body>\n</html>\n"));
    }
}

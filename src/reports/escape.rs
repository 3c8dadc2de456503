//! Escaping utilities for safe report generation.
//!
//! Question text, remediation descriptions and client details may come
//! from user-supplied catalog or session files. Markdown and CSV reports
//! embed them verbatim, so unescaped input could:
//! - break Markdown tables with `|` or newlines
//! - turn into links or emphasis
//! - split CSV rows on embedded quotes or line breaks
//!
//! Every externally sourced string MUST go through one of these helpers.

/// Escape a string for safe inclusion in Markdown table cells.
///
/// # Examples
///
/// ```
/// use cyber_maturity::reports::escape::escape_markdown_table;
///
/// assert_eq!(escape_markdown_table("EDR | XDR"), "EDR \\| XDR");
/// assert_eq!(escape_markdown_table("line1\nline2"), "line1 line2");
/// ```
#[must_use]
pub fn escape_markdown_table(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '|' => result.push_str("\\|"),
            '\n' => result.push(' '),
            '\r' => {}
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for safe inclusion in Markdown inline content
/// (headings, paragraphs).
///
/// # Examples
///
/// ```
/// use cyber_maturity::reports::escape::escape_markdown_inline;
///
/// assert_eq!(escape_markdown_inline("**bold**"), "\\*\\*bold\\*\\*");
/// assert_eq!(escape_markdown_inline("# Town hall"), "\\# Town hall");
/// ```
#[must_use]
pub fn escape_markdown_inline(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '_' => result.push_str("\\_"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '#' => result.push_str("\\#"),
            '!' => result.push_str("\\!"),
            '~' => result.push_str("\\~"),
            '|' => result.push_str("\\|"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push(' '),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Escape a string for use in Markdown list items.
///
/// Lighter than inline escaping: underscores and `#` are harmless
/// mid-line, so vendor names like `Stormshield_SN` stay readable.
#[must_use]
pub fn escape_markdown_list(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '*' => result.push_str("\\*"),
            '`' => result.push_str("\\`"),
            '[' => result.push_str("\\["),
            ']' => result.push_str("\\]"),
            '<' => result.push_str("\\<"),
            '>' => result.push_str("\\>"),
            '\n' => result.push_str("; "),
            '\r' => {}
            _ => result.push(c),
        }
    }
    result
}

/// Escape an optional value for a Markdown table, `-` when absent.
#[must_use]
pub fn escape_md_opt(s: Option<&str>) -> String {
    s.map_or_else(|| "-".to_string(), escape_markdown_table)
}

/// Quote a CSV field (RFC 4180), flattening line breaks.
///
/// # Examples
///
/// ```
/// use cyber_maturity::reports::escape::csv_field;
///
/// assert_eq!(csv_field("Backup \"3-2-1\""), "\"Backup \"\"3-2-1\"\"\"");
/// ```
#[must_use]
pub fn csv_field(s: &str) -> String {
    let flattened = s.replace("\r\n", " ").replace(['\n', '\r'], " ");
    format!("\"{}\"", flattened.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_markdown_table_basic() {
        assert_eq!(escape_markdown_table("hello"), "hello");
        assert_eq!(escape_markdown_table("a | b"), "a \\| b");
        assert_eq!(escape_markdown_table("`code`"), "\\`code\\`");
    }

    #[test]
    fn test_escape_markdown_table_row_injection() {
        // a category title trying to open a new row
        assert_eq!(
            escape_markdown_table("Network\n| 100% | fake |"),
            "Network \\| 100% \\| fake \\|"
        );
        assert_eq!(
            escape_markdown_table("[click](http://evil.example)"),
            "\\[click\\](http://evil.example)"
        );
    }

    #[test]
    fn test_escape_markdown_inline() {
        assert_eq!(escape_markdown_inline("_italic_"), "\\_italic\\_");
        assert_eq!(escape_markdown_inline("<b>"), "\\<b\\>");
        assert_eq!(escape_markdown_inline("a\r\nb"), "a b");
    }

    #[test]
    fn test_escape_markdown_list() {
        assert_eq!(escape_markdown_list("Stormshield_SN"), "Stormshield_SN");
        assert_eq!(escape_markdown_list("multi\nline"), "multi; line");
        assert_eq!(escape_markdown_list("[link]"), "\\[link\\]");
    }

    #[test]
    fn test_escape_md_opt() {
        assert_eq!(escape_md_opt(Some("a | b")), "a \\| b");
        assert_eq!(escape_md_opt(None), "-");
    }

    #[test]
    fn test_csv_field() {
        assert_eq!(csv_field(""), "\"\"");
        assert_eq!(csv_field("plain"), "\"plain\"");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("two\r\nlines\nhere"), "\"two lines here\"");
    }

    #[test]
    fn test_unicode_preservation() {
        assert_eq!(escape_markdown_table("Préfecture 🛡️"), "Préfecture 🛡️");
        assert_eq!(csv_field("Collectivité"), "\"Collectivité\"");
    }
}

//! Line-oriented parser for the host inventory format.
//!
//! ```text
//! [default]
//! user = soso
//! password = test
//! port = 36000
//!
//! [wap0]
//! host = 192.168.1.100
//! ```
//!
//! - `[name]` opens a section. Names are case-sensitive; repeating a header
//!   reopens the earlier section.
//! - `key = value` (or `key: value`) adds an entry. Whitespace around keys and
//!   values is trimmed and keys are lowercased. Values are always strings.
//! - Lines starting with `#` or `;` are comments; blank lines are ignored. A
//!   header may be followed by a comment: `[wap0]  ; web`.
//! - An indented line right after an entry continues that entry's value.
//!
//! Any other line is a [`ParseError`](HostiniError::ParseError) and aborts the
//! whole parse.

use std::path::Path;

use crate::error::HostiniError;
use crate::section::Section;

/// Parse `content` into raw (not yet merged) sections, in declaration order.
///
/// `path` is only used for error reporting.
pub fn parse_sections(content: &str, path: &Path) -> Result<Vec<Section>, HostiniError> {
    let mut sections: Vec<Section> = Vec::new();
    let mut current: Option<usize> = None;
    let mut last_key: Option<String> = None;

    for (index, raw) in content.lines().enumerate() {
        let error = |reason: &str| HostiniError::ParseError {
            path: path.to_path_buf(),
            line: index + 1,
            content: raw.to_string(),
            reason: reason.to_string(),
        };

        let line = raw.trim();
        if line.is_empty() {
            last_key = None;
            continue;
        }
        if line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        // Continuation of the previous entry's value.
        if raw.starts_with(char::is_whitespace)
            && let (Some(idx), Some(key)) = (current, last_key.as_deref())
            && let Some(value) = sections[idx].get_mut(key)
        {
            value.push('\n');
            value.push_str(line);
            continue;
        }

        if line.starts_with('[') {
            let name = parse_header(line).map_err(error)?;
            current = Some(match sections.iter().position(|s| s.name() == name) {
                Some(existing) => existing,
                None => {
                    sections.push(Section::new(name));
                    sections.len() - 1
                }
            });
            last_key = None;
            continue;
        }

        let Some(idx) = current else {
            return Err(error("entry before any section header"));
        };
        let (key, value) = parse_entry(line).map_err(error)?;
        sections[idx].insert(&key, value);
        last_key = Some(key);
    }

    tracing::debug!(
        path = %path.display(),
        sections = sections.len(),
        "parsed host inventory"
    );
    Ok(sections)
}

fn parse_header(line: &str) -> Result<&str, &'static str> {
    let rest = line.strip_prefix('[').unwrap_or(line);
    let (inner, trailing) = rest.split_once(']').ok_or("unterminated section header")?;
    let trailing = trailing.trim_start();
    if !(trailing.is_empty() || trailing.starts_with(';') || trailing.starts_with('#')) {
        return Err("unexpected text after section header");
    }
    let name = inner.trim();
    if name.is_empty() {
        return Err("empty section name");
    }
    if name.contains('[') {
        return Err("brackets inside section name");
    }
    Ok(name)
}

fn parse_entry(line: &str) -> Result<(String, &str), &'static str> {
    let sep = line
        .find(['=', ':'])
        .ok_or("expected `key = value`")?;
    let key = line[..sep].trim();
    if key.is_empty() {
        return Err("missing key before separator");
    }
    Ok((key.to_lowercase(), line[sep + 1..].trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::SAMPLE;

    fn parse(content: &str) -> Result<Vec<Section>, HostiniError> {
        parse_sections(content, Path::new("test.ini"))
    }

    fn parse_error_line(content: &str) -> (usize, String) {
        match parse(content) {
            Err(HostiniError::ParseError { line, content, .. }) => (line, content),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn sample_sections_in_order() {
        let sections = parse(SAMPLE).unwrap();
        let names: Vec<&str> = sections.iter().map(Section::name).collect();
        assert_eq!(names, vec!["default", "wap0", "db1"]);
        assert_eq!(sections[0].get("port"), Some("36000"));
        assert_eq!(sections[1].get("host"), Some("192.168.1.100"));
    }

    #[test]
    fn trims_keys_and_values() {
        let sections = parse("[s]\n   key   =   spaced value  \n").unwrap();
        assert_eq!(sections[0].get("key"), Some("spaced value"));
    }

    #[test]
    fn value_may_contain_separators() {
        let sections = parse("[s]\npassword = a=b:c\n").unwrap();
        assert_eq!(sections[0].get("password"), Some("a=b:c"));
    }

    #[test]
    fn colon_separator() {
        let sections = parse("[s]\nport: 22\n").unwrap();
        assert_eq!(sections[0].get("port"), Some("22"));
    }

    #[test]
    fn keys_are_lowercased_section_names_are_not() {
        let sections = parse("[Wap0]\nHost = x\n").unwrap();
        assert_eq!(sections[0].name(), "Wap0");
        assert_eq!(sections[0].get("host"), Some("x"));
    }

    #[test]
    fn empty_value_is_allowed() {
        let sections = parse("[s]\npassword =\n").unwrap();
        assert_eq!(sections[0].get("password"), Some(""));
    }

    #[test]
    fn duplicate_key_last_wins() {
        let sections = parse("[s]\nport = 1\nport = 2\n").unwrap();
        assert_eq!(sections[0].get("port"), Some("2"));
        assert_eq!(sections[0].len(), 1);
    }

    #[test]
    fn repeated_header_reopens_section() {
        let sections = parse("[a]\nx = 1\n[b]\ny = 2\n[a]\nz = 3\n").unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].get("x"), Some("1"));
        assert_eq!(sections[0].get("z"), Some("3"));
    }

    #[test]
    fn comments_are_skipped() {
        let sections = parse("# top\n[s]\n; note\nkey = v\n  # indented\n").unwrap();
        assert_eq!(sections[0].len(), 1);
        assert_eq!(sections[0].get("key"), Some("v"));
    }

    #[test]
    fn indented_line_continues_value() {
        let sections = parse("[s]\nmotd = first\n  second\n").unwrap();
        assert_eq!(sections[0].get("motd"), Some("first\nsecond"));
    }

    #[test]
    fn blank_line_ends_continuation() {
        let err = parse("[s]\nmotd = first\n\n  second\n");
        assert!(err.is_err());
    }

    #[test]
    fn empty_section_is_kept() {
        let sections = parse("[empty]\n\n[next]\nk = v\n").unwrap();
        assert!(sections[0].is_empty());
    }

    #[test]
    fn empty_input() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("\n\n   \n").unwrap().is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        let sections = parse("[s]\r\nhost = x\r\n").unwrap();
        assert_eq!(sections[0].get("host"), Some("x"));
    }

    #[test]
    fn unterminated_header_reports_line() {
        let (line, content) = parse_error_line("[ok]\nk = v\n[broken\n");
        assert_eq!(line, 3);
        assert_eq!(content, "[broken");
    }

    #[test]
    fn comment_after_header() {
        let sections = parse("[wap0]  ; web\nhost = a\n[db1] # primary\nhost = b\n").unwrap();
        let names: Vec<&str> = sections.iter().map(Section::name).collect();
        assert_eq!(names, vec!["wap0", "db1"]);
        assert_eq!(sections[0].get("host"), Some("a"));
    }

    #[test]
    fn text_after_header_is_error() {
        let (line, content) = parse_error_line("[wap0] web\n");
        assert_eq!(line, 1);
        assert_eq!(content, "[wap0] web");
    }

    #[test]
    fn nested_bracket_is_error() {
        assert!(parse("[a[b]\n").is_err());
    }

    #[test]
    fn empty_header_is_error() {
        let (line, _) = parse_error_line("[  ]\n");
        assert_eq!(line, 1);
    }

    #[test]
    fn entry_before_header_is_error() {
        let (line, content) = parse_error_line("host = x\n[s]\n");
        assert_eq!(line, 1);
        assert_eq!(content, "host = x");
    }

    #[test]
    fn line_without_separator_is_error() {
        let (line, content) = parse_error_line("[s]\nk = v\njust words\n");
        assert_eq!(line, 3);
        assert_eq!(content, "just words");
    }

    #[test]
    fn missing_key_is_error() {
        let (line, _) = parse_error_line("[s]\n= value\n");
        assert_eq!(line, 2);
    }

    #[test]
    fn error_carries_path_and_reason() {
        let err = parse_sections("[s\n", Path::new("/etc/xtools.ini")).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("/etc/xtools.ini"));
        assert!(msg.contains("unterminated section header"));
    }
}

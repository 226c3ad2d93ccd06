//! Support for Apple `.strings` localization format.
//!
//! A `.strings` file is a sequence of blocks like
//!
//! ```text
//! /* Title of the settings screen */
//! "settings.title" = "Settings";
//! ```
//!
//! Parsing is line oriented and best-effort: every line is classified into a
//! [`LineKind`], comments are held until the next key/value line claims them,
//! and anything that cannot be understood is reported as a diagnostic and
//! skipped.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    diagnostics::{DiagnosticKind, Diagnostics},
    error::Error,
    traits::Parser,
    types::{Document, Entry, Parsed},
};

lazy_static! {
    /// `/* ... */` (a `*` may appear inside when not followed by `/`) or `// ...`.
    static ref COMMENT_REGEX: Regex =
        Regex::new(r"^(?:/\*(?:[^*]|\*+[^*/])*\*+/|//.*)").unwrap();
    /// `"key" =`, the start of a key/value line.
    static ref KEY_REGEX: Regex = Regex::new(r#"^"((?:[^"\\]|\\.)+)"\s*="#).unwrap();
    /// The first quoted token anywhere in the rest of the line.
    static ref VALUE_REGEX: Regex = Regex::new(r#""((?:[^"\\]|\\.)*)""#).unwrap();
    static ref NEWLINE_REGEX: Regex = Regex::new(r"\r\n|\n|\r").unwrap();
}

/// Classification of one trimmed line of `.strings` text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// A block or line comment, delimiters included.
    Comment(&'a str),
    /// A quoted key followed by `=`. `value` is the first quoted token after
    /// the `=`, or `None` when there is none.
    KeyValue { key: &'a str, value: Option<&'a str> },
    Blank,
    Unrecognized,
}

impl<'a> LineKind<'a> {
    /// Classifies an already trimmed line. Comments take priority over
    /// key/value pairs.
    pub fn classify(line: &'a str) -> Self {
        if let Some(comment) = COMMENT_REGEX.find(line) {
            return LineKind::Comment(comment.as_str());
        }

        if let Some(captures) = KEY_REGEX.captures(line) {
            // Group 0 and 1 are mandatory for the regex to match at all.
            let key = captures.get(1).map_or("", |m| m.as_str());
            let rest = captures.get(0).map_or("", |m| &line[m.end()..]);
            let value = VALUE_REGEX
                .captures(rest)
                .and_then(|value| value.get(1))
                .map(|m| m.as_str());
            return LineKind::KeyValue { key, value };
        }

        if line.is_empty() {
            LineKind::Blank
        } else {
            LineKind::Unrecognized
        }
    }
}

/// The Apple `.strings` format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Format;

impl Parser for Format {
    fn parse(text: &str) -> Result<Parsed, Error> {
        Ok(parse(text))
    }

    fn serialize(document: &Document) -> String {
        serialize(document)
    }
}

/// Parses `.strings` text into a document.
///
/// Never fails: lines that cannot be used are reported in the returned
/// diagnostics and parsing continues with the next line.
///
/// ```rust
/// let parsed = csv2strings::formats::strings::parse("/* greeting */\n\"hi\" = \"hello\";\n");
/// let entry = &parsed.document.entries[0];
/// assert_eq!(entry.key, "hi");
/// assert_eq!(entry.value, "hello");
/// assert_eq!(entry.comment.as_deref(), Some("/* greeting */"));
/// assert!(parsed.diagnostics.is_empty());
/// ```
pub fn parse(text: &str) -> Parsed {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut document = Document::new();
    let mut diagnostics = Diagnostics::new();
    let mut pending_comment: Option<String> = None;

    for (index, raw_line) in NEWLINE_REGEX.split(text).enumerate() {
        let line_number = index + 1;
        let line = raw_line.trim();

        match LineKind::classify(line) {
            LineKind::Comment(comment) => {
                let trailing = line[comment.len()..].trim();
                if !trailing.is_empty() {
                    diagnostics.warn(
                        line_number,
                        DiagnosticKind::UnrecognizedLine(trailing.to_string()),
                    );
                }
                if let Some(orphan) = pending_comment.replace(comment.to_string()) {
                    diagnostics.warn(line_number, DiagnosticKind::OrphanedComment(orphan));
                }
            }
            LineKind::KeyValue { key, value } => {
                let value = match value {
                    Some(value) => value.to_string(),
                    None => {
                        diagnostics
                            .warn(line_number, DiagnosticKind::MissingValue(key.to_string()));
                        String::new()
                    }
                };
                document.push(Entry {
                    key: key.to_string(),
                    value,
                    comment: pending_comment.take(),
                });
            }
            LineKind::Blank => {}
            LineKind::Unrecognized => {
                diagnostics.warn(
                    line_number,
                    DiagnosticKind::UnrecognizedLine(line.to_string()),
                );
            }
        }
    }

    if let Some(comment) = pending_comment {
        log::debug!("dropping trailing comment '{}' with no translation", comment);
    }

    Parsed {
        document,
        diagnostics,
    }
}

/// Renders a document as `.strings` text.
///
/// Each entry becomes its comment (if any) on its own line, then
/// `"key" = "value";`, then one blank line.
pub fn serialize(document: &Document) -> String {
    let mut content = String::new();

    for entry in document {
        if let Some(comment) = &entry.comment {
            content.push_str(comment);
            if !comment.ends_with('\n') {
                content.push('\n');
            }
        }
        content.push_str(&format!("\"{}\" = \"{}\";\n\n", entry.key, entry.value));
    }

    content
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    #[test]
    fn test_classify_lines() {
        assert_eq!(
            LineKind::classify("/* note */"),
            LineKind::Comment("/* note */")
        );
        assert_eq!(
            LineKind::classify("// note"),
            LineKind::Comment("// note")
        );
        assert_eq!(
            LineKind::classify(r#""a" = "b";"#),
            LineKind::KeyValue {
                key: "a",
                value: Some("b")
            }
        );
        assert_eq!(
            LineKind::classify(r#""a"="b";"#),
            LineKind::KeyValue {
                key: "a",
                value: Some("b")
            }
        );
        assert_eq!(
            LineKind::classify(r#""a" ="#),
            LineKind::KeyValue {
                key: "a",
                value: None
            }
        );
        assert_eq!(LineKind::classify(""), LineKind::Blank);
        assert_eq!(LineKind::classify("garbage"), LineKind::Unrecognized);
        assert_eq!(LineKind::classify(r#""no equals";"#), LineKind::Unrecognized);
    }

    #[test]
    fn test_block_comment_with_inner_stars() {
        assert_eq!(
            LineKind::classify("/* 2 * 3 = 6 **/"),
            LineKind::Comment("/* 2 * 3 = 6 **/")
        );
    }

    #[test]
    fn test_url_in_value_is_not_a_comment() {
        assert_eq!(
            LineKind::classify(r#""help" = "https://example.com/help";"#),
            LineKind::KeyValue {
                key: "help",
                value: Some("https://example.com/help")
            }
        );
    }

    #[test]
    fn test_parse_greeting() {
        let parsed = parse("/* greeting */\n\"hi\" = \"hello\";\n\n");
        assert_eq!(
            parsed.document.entries,
            vec![Entry::new("hi", "hello").with_comment("/* greeting */")]
        );
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn test_serialize_greeting_is_exact() {
        let doc = Document::from(vec![Entry::new("hi", "hello").with_comment("/* greeting */")]);
        assert_eq!(serialize(&doc), "/* greeting */\n\"hi\" = \"hello\";\n\n");
    }

    #[test]
    fn test_serialize_without_comment() {
        let doc = Document::from(vec![Entry::new("a", "1"), Entry::new("b", "2")]);
        assert_eq!(serialize(&doc), "\"a\" = \"1\";\n\n\"b\" = \"2\";\n\n");
    }

    #[test]
    fn test_serialize_comment_already_terminated() {
        let doc = Document::from(vec![Entry::new("a", "1").with_comment("// note\n")]);
        assert_eq!(serialize(&doc), "// note\n\"a\" = \"1\";\n\n");
    }

    #[test]
    fn test_orphaned_comment_keeps_second() {
        let content = indoc! {r#"
            /* first */
            /* second */
            "key" = "value";
        "#};
        let parsed = parse(content);
        assert_eq!(parsed.document.len(), 1);
        assert_eq!(
            parsed.document.entries[0].comment.as_deref(),
            Some("/* second */")
        );
        let diagnostics = parsed.diagnostics.into_vec();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 2);
        assert_eq!(
            diagnostics[0].kind,
            DiagnosticKind::OrphanedComment("/* first */".to_string())
        );
    }

    #[test]
    fn test_missing_value() {
        let content = indoc! {r#"
            // Title
            "key" =
        "#};
        let parsed = parse(content);
        assert_eq!(
            parsed.document.entries,
            vec![Entry::new("key", "").with_comment("// Title")]
        );
        let diagnostics = parsed.diagnostics.into_vec();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].kind,
            DiagnosticKind::MissingValue("key".to_string())
        );
    }

    #[test]
    fn test_value_found_later_on_the_line() {
        let parsed = parse("\"a\" = x \"b\";\n");
        assert_eq!(parsed.document.entries, vec![Entry::new("a", "b")]);
        assert!(parsed.diagnostics.is_empty());

        assert_eq!(
            LineKind::classify(r#""a" = NSLocalizedString("b \"quoted\"");"#),
            LineKind::KeyValue {
                key: "a",
                value: Some(r#"b \"quoted\""#)
            }
        );
    }

    #[test]
    fn test_text_after_comment_is_reported() {
        let parsed = parse("/* note */ \"a\" = \"b\";\n\"c\" = \"d\";\n");
        assert_eq!(
            parsed.document.entries,
            vec![Entry::new("c", "d").with_comment("/* note */")]
        );
        let diagnostics = parsed.diagnostics.into_vec();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 1);
        assert_eq!(
            diagnostics[0].kind,
            DiagnosticKind::UnrecognizedLine(r#""a" = "b";"#.to_string())
        );
    }

    #[test]
    fn test_comment_only_binds_to_next_pair() {
        let content = indoc! {r#"
            /* for a */
            "a" =
            "b" = "2";
        "#};
        let parsed = parse(content);
        assert_eq!(parsed.document.entries[0].comment.as_deref(), Some("/* for a */"));
        assert_eq!(parsed.document.entries[1].comment, None);
    }

    #[test]
    fn test_blank_lines_are_silent() {
        let content = "\n\n\"a\" = \"1\";\n\n\n\n   \n\t\n\"b\" = \"2\";\n\n\n";
        let parsed = parse(content);
        assert_eq!(parsed.document.len(), 2);
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn test_unrecognized_line_is_skipped() {
        let content = indoc! {r#"
            "good" = "yes";
            bad line without quotes
            "another" = "ok";
        "#};
        let parsed = parse(content);
        let keys: Vec<&str> = parsed.document.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, ["good", "another"]);
        let diagnostics = parsed.diagnostics.into_vec();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 2);
        assert_eq!(
            diagnostics[0].kind,
            DiagnosticKind::UnrecognizedLine("bad line without quotes".to_string())
        );
    }

    #[test]
    fn test_unrecognized_line_keeps_pending_comment() {
        let content = indoc! {r#"
            /* kept */
            ???
            "a" = "1";
        "#};
        let parsed = parse(content);
        assert_eq!(parsed.document.entries[0].comment.as_deref(), Some("/* kept */"));
        assert_eq!(parsed.diagnostics.len(), 1);
    }

    #[test]
    fn test_trailing_comment_is_dropped_silently() {
        let parsed = parse("\"a\" = \"1\";\n/* dangling */\n");
        assert_eq!(parsed.document.entries, vec![Entry::new("a", "1")]);
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn test_whitespace_inside_quotes_is_preserved() {
        let parsed = parse("   \"  padded key \"   =   \" spaced  value \" ;   ");
        let entry = &parsed.document.entries[0];
        assert_eq!(entry.key, "  padded key ");
        assert_eq!(entry.value, " spaced  value ");
    }

    #[test]
    fn test_escaped_quotes_stay_verbatim() {
        let parsed = parse(r#""quote" = "She said \"hi\"";"#);
        assert_eq!(parsed.document.entries[0].value, r#"She said \"hi\""#);
    }

    #[test]
    fn test_empty_value_is_not_missing() {
        let parsed = parse(r#""empty" = "";"#);
        assert_eq!(parsed.document.entries, vec![Entry::new("empty", "")]);
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn test_crlf_and_bom() {
        let parsed = parse("\u{feff}/* c */\r\n\"a\" = \"1\";\r\n\r\n\"b\" = \"2\";\r\n");
        assert_eq!(parsed.document.len(), 2);
        assert_eq!(parsed.document.entries[0].comment.as_deref(), Some("/* c */"));
        assert!(parsed.diagnostics.is_empty());
    }

    #[test]
    fn test_lone_carriage_returns_split_lines() {
        let parsed = parse("/* c */\r\"a\" = \"1\";\r\rjunk\r");
        assert_eq!(
            parsed.document.entries,
            vec![Entry::new("a", "1").with_comment("/* c */")]
        );
        let diagnostics = parsed.diagnostics.into_vec();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].line, 4);
    }

    #[test]
    fn test_unicode_values_round_trip() {
        let content = indoc! {r#"
            /* About settings section title */
            "About" = "रो संबंध में";

            /* Button to dismiss the 'Add Pass Failed' alert. */
            "AddPass.Error.Dismiss" = "ठीक";

        "#};
        let parsed = parse(content);
        assert_eq!(parsed.document.len(), 2);
        assert_eq!(serialize(&parsed.document), content);
    }
}

//! Pattern rules for tokenizing
//!
//! This module defines the rule types used to match and classify
//! source text.

use regex::Regex;

use super::tokens::TokenKind;

/// A single-match pattern rule
///
/// Matches a regex pattern and assigns a token kind to the match.
/// Rules are tried in priority order (highest first).
#[derive(Debug)]
pub struct PatternRule {
    /// Name for debugging
    pub name: String,
    /// Compiled regex pattern
    pub pattern: Regex,
    /// Token kind to assign to matches
    pub kind: TokenKind,
    /// Priority (higher = matched first)
    pub priority: i32,
}

impl PatternRule {
    /// Create a new pattern rule
    pub fn new(name: &str, pattern: &str, kind: TokenKind, priority: i32) -> Option<Self> {
        Regex::new(pattern).ok().map(|regex| Self {
            name: name.to_string(),
            pattern: regex,
            kind,
            priority,
        })
    }

    /// Find the first non-empty match at or after `start`
    pub fn find_at(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        find_non_empty(&self.pattern, text, start)
    }
}

/// First non-empty match of `regex` at or after `start`
fn find_non_empty(regex: &Regex, text: &str, start: usize) -> Option<(usize, usize)> {
    let mut from = start;
    while from <= text.len() {
        let m = regex.find_at(text, from)?;
        if m.end() > m.start() {
            return Some((m.start(), m.end()));
        }
        // Step over empty matches to the next char boundary
        from = m.end() + 1;
        while from < text.len() && !text.is_char_boundary(from) {
            from += 1;
        }
    }
    None
}

/// A delimited region rule (block comments, strings)
///
/// A region opens on `start` and runs until `end`. Regions may span
/// lines unless marked single-line, in which case an unterminated
/// region stops at the end of its line.
#[derive(Debug)]
pub struct RegionRule {
    /// Name for debugging
    pub name: String,
    /// Pattern that opens the region
    pub start: Regex,
    /// Pattern that closes the region
    pub end: Regex,
    /// Token kind for the whole region
    pub kind: TokenKind,
    /// Escape character that suppresses a closing match
    pub escape: Option<char>,
    /// Whether the region is confined to one line
    pub single_line: bool,
}

impl RegionRule {
    /// Create a new region rule
    pub fn new(name: &str, start_pattern: &str, end_pattern: &str, kind: TokenKind) -> Option<Self> {
        let start = Regex::new(start_pattern).ok()?;
        let end = Regex::new(end_pattern).ok()?;
        Some(Self {
            name: name.to_string(),
            start,
            end,
            kind,
            escape: None,
            single_line: false,
        })
    }

    /// Builder: closing matches preceded by an odd run of `escape` are skipped
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = Some(escape);
        self
    }

    /// Builder: confine the region to one line
    pub fn single_line(mut self) -> Self {
        self.single_line = true;
        self
    }

    /// Find the first non-empty opening match at or after `start`
    pub fn find_start(&self, text: &str, start: usize) -> Option<(usize, usize)> {
        if start >= text.len() {
            return None;
        }
        find_non_empty(&self.start, text, start)
    }

    /// Find where a region whose body begins at `from` closes
    ///
    /// Returns the offset just past the closing delimiter. An
    /// unterminated region closes at the end of the text, or at the end
    /// of the line for single-line regions.
    pub fn find_end(&self, text: &str, from: usize) -> usize {
        let limit = if self.single_line {
            text[from..].find('\n').map_or(text.len(), |i| from + i)
        } else {
            text.len()
        };
        let haystack = &text[..limit];

        let mut pos = from;
        while pos <= limit {
            let Some(m) = self.end.find_at(haystack, pos) else {
                break;
            };
            if let Some(escape) = self.escape {
                let escapes = haystack[from..m.start()]
                    .chars()
                    .rev()
                    .take_while(|&c| c == escape)
                    .count();
                if escapes % 2 == 1 {
                    // Odd number of escapes = escaped
                    pos = m.end().max(m.start() + 1);
                    continue;
                }
            }
            return m.end();
        }
        limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_rule() {
        let rule = PatternRule::new("number", r"\d+", TokenKind::from_static("Number"), 50).unwrap();
        assert_eq!(rule.find_at("abc 123 def", 0), Some((4, 7)));
        assert_eq!(rule.find_at("abc 123 def", 5), Some((5, 7)));
        assert_eq!(rule.find_at("no numbers", 0), None);
    }

    #[test]
    fn test_pattern_rule_keeps_word_boundary_context() {
        let rule = PatternRule::new("kw", r"\bdef\b", TokenKind::from_static("Keyword"), 80).unwrap();
        // Searching from inside `undef` must not match its tail
        assert_eq!(rule.find_at("undef def", 2), Some((6, 9)));
    }

    #[test]
    fn test_pattern_rule_skips_empty_matches() {
        let rule = PatternRule::new("maybe", r"x*", TokenKind::TEXT, 1).unwrap();
        assert_eq!(rule.find_at("abxx", 0), Some((2, 4)));
        assert_eq!(rule.find_at("abc", 0), None);
    }

    #[test]
    fn test_region_rule() {
        let rule = RegionRule::new("block_comment", r"/\*", r"\*/", TokenKind::from_static("Comment")).unwrap();

        assert_eq!(rule.find_start("/* comment */", 0), Some((0, 2)));
        assert_eq!(rule.find_end("/* comment */", 2), 13);
        // Unterminated runs to the end of the text, across lines
        assert_eq!(rule.find_end("/* open\nstill", 2), 13);
    }

    #[test]
    fn test_region_start_skips_empty_matches() {
        let rule = RegionRule::new("dashes", r"(?:--)?", r"\n", TokenKind::from_static("Comment")).unwrap();
        assert_eq!(rule.find_start("a -- b\n", 0), Some((2, 4)));
        assert_eq!(rule.find_start("é -- b", 0), Some((3, 5)));
        assert_eq!(rule.find_start("plain", 0), None);
    }

    #[test]
    fn test_region_with_escape() {
        let rule = RegionRule::new("string", r#"""#, r#"""#, TokenKind::from_static("String"))
            .unwrap()
            .with_escape('\\');

        // Regular end
        assert_eq!(rule.find_end(r#"hello""#, 0), 6);
        // Escaped quote
        assert_eq!(rule.find_end(r#"hello\"world""#, 0), 13);
        // Escaped backslash does not escape the quote
        assert_eq!(rule.find_end(r#"a\\"b"#, 0), 4);
    }

    #[test]
    fn test_single_line_region_stops_at_newline() {
        let rule = RegionRule::new("string", r#"""#, r#"""#, TokenKind::from_static("String"))
            .unwrap()
            .single_line();
        let text = "\"open\nx = \"y\"";
        assert_eq!(rule.find_end(text, 1), 5);
    }
}

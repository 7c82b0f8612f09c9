//! Tokenizers
//!
//! A tokenizer turns a string into a lazy sequence of classified
//! lexemes. Whatever the grammar, the lexemes always cover the input:
//! concatenating them reproduces the text exactly.

use log::warn;

use super::rules::{PatternRule, RegionRule};
use super::tokens::{Token, TokenKind};

/// Lazy token stream borrowed from a tokenizer and its input
pub type Tokens<'a> = Box<dyn Iterator<Item = Token<'a>> + 'a>;

/// A stateless lexer for one language
pub trait Tokenizer: Send + Sync {
    /// Display name of the language
    fn name(&self) -> &str;

    /// Lex `text` into classified lexemes covering all of it
    fn lex<'a>(&'a self, text: &'a str) -> Tokens<'a>;
}

/// Tokenizer for text without a grammar
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainText;

impl Tokenizer for PlainText {
    fn name(&self) -> &str {
        "Plain Text"
    }

    fn lex<'a>(&'a self, text: &'a str) -> Tokens<'a> {
        Box::new((!text.is_empty()).then(|| Token::new(TokenKind::TEXT, text)).into_iter())
    }
}

/// A rule-driven tokenizer
///
/// At each offset the region rules are tried first (in insertion
/// order), then the pattern rules by descending priority. The first
/// rule that matches exactly at the offset produces the next token.
/// Text no rule claims is emitted as `Text` up to the next match.
#[derive(Debug)]
pub struct RegexTokenizer {
    /// Language name (e.g., "Rust", "Python")
    pub name: String,
    /// Region rules for comments, strings, etc.
    pub regions: Vec<RegionRule>,
    /// Pattern rules, sorted by priority (highest first)
    pub patterns: Vec<PatternRule>,
    rejected: usize,
}

impl RegexTokenizer {
    /// Create a new empty tokenizer
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            regions: Vec::new(),
            patterns: Vec::new(),
            rejected: 0,
        }
    }

    /// Add a pattern rule
    pub fn add_pattern(&mut self, rule: PatternRule) {
        self.patterns.push(rule);
        // Keep sorted by priority (highest first); sort is stable
        self.patterns.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Add a region rule
    pub fn add_region(&mut self, rule: RegionRule) {
        self.regions.push(rule);
    }

    /// Compile and add a pattern rule
    pub fn pattern(&mut self, name: &str, pattern: &str, kind: &'static str, priority: i32) -> &mut Self {
        match PatternRule::new(name, pattern, TokenKind::from_static(kind), priority) {
            Some(rule) => self.add_pattern(rule),
            None => self.reject(name),
        }
        self
    }

    /// Compile and add a multi-line region rule
    pub fn region(&mut self, name: &str, start: &str, end: &str, kind: &'static str) -> &mut Self {
        match RegionRule::new(name, start, end, TokenKind::from_static(kind)) {
            Some(rule) => self.add_region(rule),
            None => self.reject(name),
        }
        self
    }

    /// Compile and add a single-line string region with backslash escapes
    pub fn string(&mut self, name: &str, delimiter: &str, kind: &'static str) -> &mut Self {
        match RegionRule::new(name, delimiter, delimiter, TokenKind::from_static(kind)) {
            Some(rule) => self.add_region(rule.with_escape('\\').single_line()),
            None => self.reject(name),
        }
        self
    }

    /// Number of rules dropped because their regex did not compile
    pub fn rejected_rules(&self) -> usize {
        self.rejected
    }

    fn reject(&mut self, name: &str) {
        warn!("{}: dropping rule `{}` with invalid pattern", self.name, name);
        self.rejected += 1;
    }
}

impl Tokenizer for RegexTokenizer {
    fn name(&self) -> &str {
        &self.name
    }

    fn lex<'a>(&'a self, text: &'a str) -> Tokens<'a> {
        Box::new(RegexTokens {
            lexer: self,
            text,
            pos: 0,
            region_hits: vec![Hit::Unknown; self.regions.len()],
            pattern_hits: vec![Hit::Unknown; self.patterns.len()],
        })
    }
}

/// Cached next match of one rule
#[derive(Debug, Clone, Copy)]
enum Hit {
    Unknown,
    At(usize, usize),
    Exhausted,
}

struct RegexTokens<'a> {
    lexer: &'a RegexTokenizer,
    text: &'a str,
    pos: usize,
    region_hits: Vec<Hit>,
    pattern_hits: Vec<Hit>,
}

impl<'a> RegexTokens<'a> {
    /// Refresh a cached hit so it lies at or after the cursor
    fn refresh(hit: &mut Hit, pos: usize, find: impl FnOnce() -> Option<(usize, usize)>) -> Option<(usize, usize)> {
        match *hit {
            Hit::At(start, end) if start >= pos => return Some((start, end)),
            Hit::Exhausted => return None,
            _ => {}
        }
        *hit = find().map_or(Hit::Exhausted, |(start, end)| Hit::At(start, end));
        match *hit {
            Hit::At(start, end) => Some((start, end)),
            _ => None,
        }
    }

    fn emit(&mut self, kind: TokenKind, end: usize) -> Token<'a> {
        let token = Token::new(kind, &self.text[self.pos..end]);
        self.pos = end;
        token
    }
}

impl<'a> Iterator for RegexTokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        let (text, pos, lexer) = (self.text, self.pos, self.lexer);
        if pos >= text.len() {
            return None;
        }
        let mut nearest = text.len();
        let mut found: Option<(&'a TokenKind, usize)> = None;

        for (rule, hit) in lexer.regions.iter().zip(self.region_hits.iter_mut()) {
            if let Some((start, body)) = Self::refresh(hit, pos, || rule.find_start(text, pos)) {
                if start == pos {
                    found = Some((&rule.kind, rule.find_end(text, body)));
                    break;
                }
                nearest = nearest.min(start);
            }
        }

        if found.is_none() {
            for (rule, hit) in lexer.patterns.iter().zip(self.pattern_hits.iter_mut()) {
                if let Some((start, end)) = Self::refresh(hit, pos, || rule.find_at(text, pos)) {
                    if start == pos {
                        found = Some((&rule.kind, end));
                        break;
                    }
                    nearest = nearest.min(start);
                }
            }
        }

        Some(match found {
            Some((kind, end)) => self.emit(kind.clone(), end),
            // Nothing starts here: the gap up to the nearest match is plain text
            None => self.emit(TokenKind::TEXT, nearest),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_language() -> RegexTokenizer {
        let mut lang = RegexTokenizer::new("Test");
        lang.region("block_comment", r"/\*", r"\*/", "Comment.Multiline")
            .string("string", r#"""#, "Literal.String.Double")
            .pattern("line_comment", r"//.*", "Comment.Single", 100)
            .pattern("keyword", r"\b(let|fn)\b", "Keyword", 80)
            .pattern("number", r"\b\d+\b", "Literal.Number.Integer", 50)
            .pattern("name", r"[A-Za-z_]\w*", "Name", 10)
            .pattern("whitespace", r"\s+", "Text.Whitespace", 5);
        lang
    }

    fn lexed<'a>(lang: &'a RegexTokenizer, text: &'a str) -> Vec<(String, &'a str)> {
        lang.lex(text).map(|t| (t.kind.to_string(), t.text)).collect()
    }

    #[test]
    fn test_simple_lexing() {
        let lang = create_test_language();
        let tokens = lexed(&lang, "let x = 42;");

        assert_eq!(
            tokens,
            vec![
                ("Keyword".to_string(), "let"),
                ("Text.Whitespace".to_string(), " "),
                ("Name".to_string(), "x"),
                ("Text.Whitespace".to_string(), " "),
                ("Text".to_string(), "="),
                ("Text.Whitespace".to_string(), " "),
                ("Literal.Number.Integer".to_string(), "42"),
                ("Text".to_string(), ";"),
            ]
        );
        assert_eq!(lang.rejected_rules(), 0);
    }

    #[test]
    fn test_line_comment() {
        let lang = create_test_language();
        let tokens = lexed(&lang, "code // comment \"quoted\"\nnext");
        assert!(tokens.contains(&("Comment.Single".to_string(), "// comment \"quoted\"")));
        assert_eq!(tokens.last(), Some(&("Name".to_string(), "next")));
    }

    #[test]
    fn test_block_comment_spans_lines() {
        let lang = create_test_language();
        let tokens = lexed(&lang, "x /* a\nb */ y");
        assert!(tokens.contains(&("Comment.Multiline".to_string(), "/* a\nb */")));
    }

    #[test]
    fn test_unterminated_region_runs_to_end() {
        let lang = create_test_language();
        let tokens = lexed(&lang, "x /* open");
        assert_eq!(tokens.last(), Some(&("Comment.Multiline".to_string(), "/* open")));
    }

    #[test]
    fn test_string_with_escape() {
        let lang = create_test_language();
        let tokens = lexed(&lang, r#"s = "a\"b" + 1"#);
        assert!(tokens.contains(&("Literal.String.Double".to_string(), r#""a\"b""#)));
    }

    #[test]
    fn test_coverage_with_multibyte_text() {
        let lang = create_test_language();
        let input = "let π = \"héllo\" // ünïcode\n§ 12 /* ✓ */";
        let rebuilt: String = lang.lex(input).map(|t| t.text).collect();
        assert_eq!(rebuilt, input);
    }

    #[test]
    fn test_region_with_optional_start_still_matches() {
        let mut lang = RegexTokenizer::new("Test");
        lang.region("dashes", r"(?:--)?", r"\n", "Comment.Single")
            .pattern("name", r"[A-Za-z_]\w*", "Name", 10);
        let tokens = lexed(&lang, "a b -- c\nd");
        assert!(tokens.contains(&("Comment.Single".to_string(), "-- c\n")));
        assert_eq!(tokens.last(), Some(&("Name".to_string(), "d")));
    }

    #[test]
    fn test_lex_is_restartable() {
        let lang = create_test_language();
        let first = lexed(&lang, "fn f() { 1 }");
        let second = lexed(&lang, "fn f() { 1 }");
        assert_eq!(first, second);
    }

    #[test]
    fn test_invalid_rule_is_rejected() {
        let mut lang = RegexTokenizer::new("Broken");
        lang.pattern("lookahead", r"\w+(?=\()", "Name.Function", 10);
        assert_eq!(lang.rejected_rules(), 1);
        assert!(lang.patterns.is_empty());
    }

    #[test]
    fn test_plain_text() {
        let tokens: Vec<_> = PlainText.lex("anything\ngoes").collect();
        assert_eq!(tokens, vec![Token::new(TokenKind::TEXT, "anything\ngoes")]);
        assert_eq!(PlainText.lex("").count(), 0);
    }
}

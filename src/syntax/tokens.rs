//! Token kinds for syntax highlighting
//!
//! A token kind is a dot-delimited hierarchical name such as
//! `Literal.String.Double`. The kind doubles as the tag name on the
//! display surface.

use std::borrow::Cow;
use std::fmt;

/// Hierarchical token classification
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenKind(Cow<'static, str>);

impl TokenKind {
    /// Unclassified text
    pub const TEXT: TokenKind = TokenKind::from_static("Text");
    /// Runs of whitespace
    pub const WHITESPACE: TokenKind = TokenKind::from_static("Text.Whitespace");

    /// Create a kind from a static name (used by built-in grammars)
    pub const fn from_static(name: &'static str) -> Self {
        TokenKind(Cow::Borrowed(name))
    }

    /// Create a kind from an owned name
    pub fn new(name: impl Into<String>) -> Self {
        TokenKind(Cow::Owned(name.into()))
    }

    /// Get the full name of this kind
    pub fn name(&self) -> &str {
        &self.0
    }

    /// The enclosing kind, `Keyword` for `Keyword.Type`
    pub fn parent(&self) -> Option<TokenKind> {
        self.0
            .rsplit_once('.')
            .map(|(parent, _)| TokenKind::new(parent))
    }

    /// Enclosing kind names, nearest first, excluding this kind
    pub fn ancestors(&self) -> impl Iterator<Item = &str> {
        let name: &str = &self.0;
        name.char_indices()
            .rev()
            .filter(|&(_, c)| c == '.')
            .map(move |(i, _)| &name[..i])
    }

    /// Check whether this kind is `other` or nested below it
    pub fn is_within(&self, other: &str) -> bool {
        self.0 == other
            || (self.0.len() > other.len()
                && self.0.starts_with(other)
                && self.0.as_bytes()[other.len()] == b'.')
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for TokenKind {
    fn from(name: &'static str) -> Self {
        TokenKind::from_static(name)
    }
}

/// A single lexeme and its classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// Create a new token
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Self { kind, text }
    }
}

//! Span mapping
//!
//! Turns a flat token stream into buffer-addressed spans by walking a
//! cursor forward over each lexeme.

use log::error;

use super::span::{Position, Span};
use super::tokens::Token;

/// Result of mapping a token stream against its source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mapping {
    /// Spans in buffer order
    pub spans: Vec<Span>,
    /// Cursor after the last mapped lexeme
    pub end: Position,
    /// False when the tokenizer stopped matching its input
    pub complete: bool,
}

/// Map tokens to spans starting at `origin`
///
/// Empty lexemes are skipped. The returned spans are ordered, never
/// overlap, and the last one ends at `origin` advanced by the
/// concatenated lexemes.
pub fn map<'a, I>(tokens: I, origin: Position) -> Vec<Span>
where
    I: IntoIterator<Item = Token<'a>>,
{
    let mut cursor = origin;
    let mut spans = Vec::new();
    for token in tokens {
        if token.text.is_empty() {
            continue;
        }
        let end = cursor.advanced_by(token.text);
        spans.push(Span::new(cursor, end, token.kind));
        cursor = end;
    }
    spans
}

/// Map tokens to spans, checking each lexeme against `source`
///
/// A tokenizer must reproduce its input exactly. If a lexeme does not
/// match the source at the running offset, or the stream stops short,
/// debug builds panic; release builds log the divergence and keep the
/// spans mapped so far, leaving the rest unstyled.
pub fn map_checked<'a, I>(tokens: I, origin: Position, source: &str) -> Mapping
where
    I: IntoIterator<Item = Token<'a>>,
{
    let mut cursor = origin;
    let mut offset = 0;
    let mut spans = Vec::new();

    for token in tokens {
        if token.text.is_empty() {
            continue;
        }
        if !source[offset..].starts_with(token.text) {
            return diverged(spans, cursor, offset, source.len());
        }
        let end = cursor.advanced_by(token.text);
        spans.push(Span::new(cursor, end, token.kind));
        cursor = end;
        offset += token.text.len();
    }

    if offset != source.len() {
        return diverged(spans, cursor, offset, source.len());
    }
    Mapping {
        spans,
        end: cursor,
        complete: true,
    }
}

fn diverged(spans: Vec<Span>, end: Position, offset: usize, len: usize) -> Mapping {
    error!(
        "tokenizer output diverged from its input at byte {} of {} (position {})",
        offset, len, end
    );
    debug_assert!(false, "tokenizer output does not cover its input");
    Mapping {
        spans,
        end,
        complete: false,
    }
}

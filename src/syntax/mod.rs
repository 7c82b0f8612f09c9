//! Syntax module
//!
//! This module provides the lexing side of highlighting:
//! - Tokenizers and the registry that selects them
//! - Token kinds and style directives
//! - Mapping token streams onto buffer positions

mod builtin;
mod language;
pub mod mapper;
mod registry;
mod rules;
mod span;
mod style;
mod tokens;

pub use language::{PlainText, RegexTokenizer, Tokenizer, Tokens};
pub use mapper::Mapping;
pub use registry::{TokenizerRegistry, PLAIN_TEXT};
pub use rules::{PatternRule, RegionRule};
pub use span::{Position, Span};
pub use style::{Color, FontVariant, StyleDirective};
pub use tokens::{Token, TokenKind};

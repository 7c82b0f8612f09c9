//! Markdown language definition

use crate::syntax::language::RegexTokenizer;

/// Create Markdown tokenizer
pub fn markdown_language() -> RegexTokenizer {
    let mut lang = RegexTokenizer::new("Markdown");

    lang.region("fenced_code", r"```", r"```", "Literal.String.Backtick");

    lang.pattern("subheading", r"(?m)^#{2,6}[ \t].*", "Generic.Subheading", 100)
        .pattern("heading", r"(?m)^#[ \t].*", "Generic.Heading", 100)
        .pattern("quote", r"(?m)^>.*", "Generic.Emph", 95)
        .pattern("list_marker", r"(?m)^[ \t]*(?:[-*+]|\d+\.)[ \t]", "Keyword", 90)
        .pattern("rule", r"(?m)^(?:-{3,}|\*{3,}|_{3,})[ \t]*$", "Keyword", 91)
        .pattern("inline_code", r"`[^`\n]+`", "Literal.String.Backtick", 85)
        .pattern("strong", r"\*\*[^*\n]+\*\*|__[^_\n]+__", "Generic.Strong", 80)
        .pattern("emphasis", r"\*[^*\n]+\*|\b_[^_\n]+_\b", "Generic.Emph", 75)
        .pattern("link", r"!?\[[^\]\n]*\]\([^)\n]*\)", "Name.Tag", 70)
        .pattern("word", r"[\p{L}\p{N}]+", "Text", 10)
        .pattern("whitespace", r"\s+", "Text.Whitespace", 5);

    lang
}

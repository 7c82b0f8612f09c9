//! Rust language definition

use crate::syntax::language::RegexTokenizer;
use crate::syntax::rules::RegionRule;
use crate::syntax::tokens::TokenKind;

/// Create Rust tokenizer
pub fn rust_language() -> RegexTokenizer {
    let mut lang = RegexTokenizer::new("Rust");

    lang.region("block_comment", r"/\*", r"\*/", "Comment.Multiline")
        .region("raw_string_hashed", r##"\br#+""##, r##""#+"##, "Literal.String")
        .region("raw_string", r#"\br""#, r#"""#, "Literal.String");

    // Ordinary and byte strings may span lines and escape their quote
    for (name, start) in [("byte_string", r#"\bb""#), ("string", r#"""#)] {
        if let Some(rule) = RegionRule::new(name, start, r#"""#, TokenKind::from_static("Literal.String.Double")) {
            lang.add_region(rule.with_escape('\\'));
        }
    }

    lang.pattern("doc_comment", r"//[/!].*", "Literal.String.Doc", 101)
        .pattern("line_comment", r"//.*", "Comment.Single", 100)
        .pattern("attribute", r"#!?\[[^\]]*\]", "Name.Decorator", 95)
        .pattern("char", r"'(?:\\.|\\u\{[0-9a-fA-F]+\}|[^'\\])'", "Literal.String.Char", 90)
        .pattern("lifetime", r"'\w+", "Name.Label", 85)
        .pattern("macro", r"\b\w+!", "Name.Function.Magic", 82)
        .pattern("namespace", r"\b(use|mod|crate|extern)\b", "Keyword.Namespace", 81)
        .pattern("constant", r"\b(true|false)\b", "Keyword.Constant", 81)
        .pattern(
            "declaration",
            r"\b(fn|let|const|static|struct|enum|trait|type|impl|union)\b",
            "Keyword.Declaration",
            80,
        )
        .pattern(
            "keyword",
            r"\b(as|async|await|break|continue|dyn|else|for|if|in|loop|match|move|mut|pub|ref|return|unsafe|where|while|yield)\b",
            "Keyword",
            80,
        )
        .pattern("self", r"\b(self|Self|super)\b", "Name.Builtin.Pseudo", 78)
        .pattern(
            "primitive",
            r"\b(bool|char|str|u8|u16|u32|u64|u128|usize|i8|i16|i32|i64|i128|isize|f32|f64)\b",
            "Keyword.Type",
            77,
        )
        .pattern(
            "prelude",
            r"\b(Option|Some|None|Result|Ok|Err|String|Vec|Box)\b",
            "Name.Builtin",
            75,
        )
        .pattern("type_name", r"\b[A-Z][A-Za-z0-9_]*\b", "Name.Class", 70)
        .pattern("hex", r"\b0x[0-9a-fA-F_]+(?:[ui](?:8|16|32|64|128|size))?\b", "Literal.Number.Hex", 65)
        .pattern("binary", r"\b0b[01_]+(?:[ui](?:8|16|32|64|128|size))?\b", "Literal.Number.Bin", 65)
        .pattern("octal", r"\b0o[0-7_]+(?:[ui](?:8|16|32|64|128|size))?\b", "Literal.Number.Oct", 65)
        .pattern("float", r"\b\d[\d_]*\.\d[\d_]*(?:[eE][+-]?\d+)?(?:f32|f64)?\b", "Literal.Number.Float", 64)
        .pattern(
            "integer",
            r"\b\d[\d_]*(?:[ui](?:8|16|32|64|128|size)|f32|f64)?\b",
            "Literal.Number.Integer",
            63,
        )
        .pattern("operator", r"[+\-*/%&|^!<>=@?]+", "Operator", 40)
        .pattern("punctuation", r"[()\[\]{},;:.#]", "Punctuation", 30)
        .pattern("name", r"[\p{L}_][\p{L}\p{N}_]*", "Name", 10)
        .pattern("whitespace", r"\s+", "Text.Whitespace", 5);

    lang
}

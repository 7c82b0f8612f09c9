//! Go language definition

use crate::syntax::language::RegexTokenizer;

use super::add_common_rules;

/// Create Go tokenizer
pub fn go_language() -> RegexTokenizer {
    let mut lang = RegexTokenizer::new("Go");

    lang.region("block_comment", r"/\*", r"\*/", "Comment.Multiline")
        .region("raw_string", r"`", r"`", "Literal.String")
        .string("string", r#"""#, "Literal.String.Double");

    lang.pattern("line_comment", r"//.*", "Comment.Single", 100)
        .pattern("rune", r"'(?:\\.|[^'\\])+'", "Literal.String.Char", 90)
        .pattern("namespace", r"\b(package|import)\b", "Keyword.Namespace", 86)
        .pattern("constant", r"\b(true|false|nil|iota)\b", "Keyword.Constant", 85)
        .pattern("declaration", r"\b(var|const|type|func|struct|interface|map|chan)\b", "Keyword.Declaration", 81)
        .pattern(
            "keyword",
            r"\b(break|case|continue|default|defer|else|fallthrough|for|go|goto|if|range|return|select|switch)\b",
            "Keyword",
            80,
        )
        .pattern(
            "type",
            r"\b(bool|byte|complex64|complex128|error|float32|float64|int|int8|int16|int32|int64|rune|string|uint|uint8|uint16|uint32|uint64|uintptr|any)\b",
            "Keyword.Type",
            78,
        )
        .pattern(
            "builtin",
            r"\b(append|cap|close|copy|delete|len|make|new|panic|print|println|recover)\b",
            "Name.Builtin",
            75,
        )
        .pattern("short_assign", r":=", "Operator", 41);

    add_common_rules(&mut lang);
    lang
}

//! YAML language definition

use crate::syntax::language::RegexTokenizer;

/// Create YAML tokenizer
pub fn yaml_language() -> RegexTokenizer {
    let mut lang = RegexTokenizer::new("YAML");

    lang.string("double_string", r#"""#, "Literal.String.Double")
        .string("single_string", r"'", "Literal.String.Single");

    lang.pattern("comment", r"#.*", "Comment.Single", 100)
        .pattern("document", r"(?m)^(?:---|\.\.\.)", "Name.Namespace", 98)
        .pattern("key", r"[\w.\-/]+[ \t]*:", "Name.Tag", 90)
        .pattern("anchor", r"[&*][\w-]+", "Name.Label", 85)
        .pattern("tag", r"!!?[\w-]*", "Keyword.Type", 85)
        .pattern("constant", r"\b(?:true|false|yes|no|on|off|null)\b|~", "Keyword.Constant", 80)
        .pattern("scalar_number", r"-?\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b", "Literal.Scalar.Plain", 70)
        .pattern("block_indicator", r"[|>][-+]?", "Punctuation.Indicator", 60)
        .pattern("indicator", r"-[ \t]|[\[\]{},?]", "Punctuation.Indicator", 60)
        .pattern("word", r"[^\s#:'\x22\[\]{},]+", "Text", 10)
        .pattern("whitespace", r"\s+", "Text.Whitespace", 5);

    lang
}

//! CSS language definition

use crate::syntax::language::RegexTokenizer;

/// Create CSS tokenizer
pub fn css_language() -> RegexTokenizer {
    let mut lang = RegexTokenizer::new("CSS");

    lang.region("comment", r"/\*", r"\*/", "Comment.Multiline")
        .string("double_string", r#"""#, "Literal.String.Double")
        .string("single_string", r"'", "Literal.String.Single");

    // Indented `name:` is a declaration; selectors start at column 0
    lang.pattern("property", r"(?m)^[ \t]+-?[a-zA-Z][\w-]*\s*:", "Keyword", 100)
        .pattern("at_rule", r"@[\w-]+", "Keyword.Namespace", 95)
        .pattern("important", r"!\s*important\b", "Keyword.Constant", 95)
        .pattern("color", r"#[0-9a-fA-F]{3,8}\b", "Literal.Number.Hex", 90)
        .pattern("id", r"#[\w-]+", "Name.Namespace", 85)
        .pattern("class", r"\.[a-zA-Z_][\w-]*", "Name.Class", 85)
        .pattern("pseudo", r"::?[a-zA-Z][\w-]*", "Name.Decorator", 84)
        .pattern("function", r"\b[a-zA-Z][\w-]*\(", "Name.Function", 80)
        .pattern("dimension", r"-?\b\d+\.\d+(?:[a-zA-Z]+|%)?", "Literal.Number.Float", 65)
        .pattern("number", r"-?\b\d+(?:[a-zA-Z]+|%)?", "Literal.Number.Integer", 64)
        .pattern("tag", r"\b[a-zA-Z][\w-]*", "Name.Tag", 20)
        .pattern("operator", r"[>+~*=|^$]", "Operator", 40)
        .pattern("punctuation", r"[{}();:,\[\]]", "Punctuation", 30)
        // Newlines stand alone so indentation stays with the declaration
        .pattern("whitespace", r"\n|[^\S\n]+", "Text.Whitespace", 5);

    lang
}

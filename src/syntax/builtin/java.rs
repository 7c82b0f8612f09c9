//! Java language definition

use crate::syntax::language::RegexTokenizer;

use super::add_common_rules;

/// Create Java tokenizer
pub fn java_language() -> RegexTokenizer {
    let mut lang = RegexTokenizer::new("Java");

    lang.region("javadoc", r"/\*\*", r"\*/", "Literal.String.Doc")
        .region("block_comment", r"/\*", r"\*/", "Comment.Multiline")
        .region("text_block", r#"""""#, r#"""""#, "Literal.String")
        .string("string", r#"""#, "Literal.String.Double");

    lang.pattern("line_comment", r"//.*", "Comment.Single", 100)
        .pattern("annotation", r"@\w+", "Name.Decorator", 95)
        .pattern("char", r"'(?:\\.|[^'\\])'", "Literal.String.Char", 90)
        .pattern("namespace", r"\b(package|import)\b", "Keyword.Namespace", 86)
        .pattern("constant", r"\b(true|false|null)\b", "Keyword.Constant", 85)
        .pattern(
            "declaration",
            r"\b(class|interface|enum|record|extends|implements|abstract|final|static|public|private|protected|synchronized|transient|volatile|native)\b",
            "Keyword.Declaration",
            81,
        )
        .pattern(
            "keyword",
            r"\b(assert|break|case|catch|continue|default|do|else|finally|for|if|instanceof|new|return|switch|throw|throws|try|while|var|yield)\b",
            "Keyword",
            80,
        )
        .pattern("this", r"\b(this|super)\b", "Name.Builtin.Pseudo", 79)
        .pattern("type", r"\b(boolean|byte|char|double|float|int|long|short|void)\b", "Keyword.Type", 78)
        .pattern("class_name", r"\b[A-Z][A-Za-z0-9_]*\b", "Name.Class", 70);

    add_common_rules(&mut lang);
    lang
}

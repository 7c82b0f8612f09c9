//! HTML language definition, with Django/Jinja template delimiters

use crate::syntax::language::RegexTokenizer;

/// Create HTML tokenizer
pub fn html_language() -> RegexTokenizer {
    let mut lang = RegexTokenizer::new("HTML");

    lang.region("comment", r"<!--", r"-->", "Comment.Multiline")
        .region("template_comment", r"\{#", r"#\}", "Comment");

    lang.pattern("doctype", r"(?i)<!DOCTYPE[^>]*>", "Comment.Preproc", 100)
        .pattern("open_tag", r"</?[a-zA-Z][\w:-]*", "Name.Tag", 90)
        .pattern("tag_end", r"/?>", "Name.Tag", 85)
        .pattern("template_tag", r"\{%-?|-?%\}|\{\{-?|-?\}\}", "Comment.Preproc", 80)
        .pattern("attribute", r"[a-zA-Z_:][\w:.-]*\s*=", "Name.Attribute", 70)
        // Quoted values must close on the same line, so a stray
        // apostrophe in body text stays plain
        .pattern("double_string", r#""[^"\n]*""#, "Literal.String.Double", 60)
        .pattern("single_string", r"'[^'\n]*'", "Literal.String.Single", 60)
        .pattern("entity", r"&(?:#\d+|#[xX][0-9a-fA-F]+|\w+);", "Name.Entity", 50)
        .pattern("whitespace", r"\s+", "Text.Whitespace", 5);

    lang
}

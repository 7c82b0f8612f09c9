//! Dockerfile language definition

use crate::syntax::language::RegexTokenizer;

/// Create Dockerfile tokenizer
pub fn docker_language() -> RegexTokenizer {
    let mut lang = RegexTokenizer::new("Docker");

    lang.string("double_string", r#"""#, "Literal.String.Double")
        .string("single_string", r"'", "Literal.String.Single");

    lang.pattern("comment", r"(?m)^[ \t]*#.*", "Comment.Single", 100)
        .pattern(
            "instruction",
            r"(?mi)^[ \t]*(?:FROM|RUN|CMD|LABEL|MAINTAINER|EXPOSE|ENV|ADD|COPY|ENTRYPOINT|VOLUME|USER|WORKDIR|ARG|ONBUILD|STOPSIGNAL|HEALTHCHECK|SHELL)\b",
            "Keyword",
            95,
        )
        .pattern("stage", r"(?i)\bAS\b", "Keyword", 90)
        .pattern("variable", r"\$\{[^}\n]*\}|\$\w+", "Name.Variable", 85)
        .pattern("continuation", r"(?m)\\$", "Punctuation", 80)
        .pattern("number", r"\b\d+\b", "Literal.Number.Integer", 60)
        .pattern("operator", r"&&|\|\||[|;=]", "Operator", 40)
        .pattern("word", r#"[^\s"'$\\&|;=]+"#, "Text", 10)
        .pattern("whitespace", r"\s+", "Text.Whitespace", 5);

    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::language::Tokenizer;

    #[test]
    fn test_dockerfile() {
        let lang = docker_language();
        let text = "# base\nFROM rust:1.75 AS build\nRUN cargo build && echo $HOME";
        let tokens: Vec<_> = lang.lex(text).map(|t| (t.kind.name().to_string(), t.text)).collect();
        assert_eq!(tokens[0], ("Comment.Single".to_string(), "# base"));
        assert!(tokens.contains(&("Keyword".to_string(), "FROM")));
        assert!(tokens.contains(&("Keyword".to_string(), "AS")));
        assert!(tokens.contains(&("Name.Variable".to_string(), "$HOME")));
        assert!(tokens.contains(&("Operator".to_string(), "&&")));
    }
}

//! Markdown to HTML via pulldown-cmark.

use pulldown_cmark::{Options, Parser, html};

use crate::error::Result;

use super::Compiler;

/// Markdown compiler.
///
/// Every byte sequence is valid markdown, so this compiler never rejects.
pub struct Markdown;

impl Compiler for Markdown {
    fn compile(&self, source: &str) -> Result<String> {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let parser = Parser::new_ext(source, options);
        let mut output = String::with_capacity(source.len() * 2);
        html::push_html(&mut output, parser);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_becomes_h1() {
        let output = Markdown.compile("# Hi").unwrap();
        assert!(output.contains("<h1>Hi</h1>"), "got: {output:?}");
    }

    #[test]
    fn tables_are_enabled() {
        let output = Markdown.compile("| a | b |\n|---|---|\n| 1 | 2 |").unwrap();
        assert!(output.contains("<table>"), "got: {output:?}");
    }

    #[test]
    fn broken_emphasis_never_rejects() {
        assert!(Markdown.compile("*unclosed emphasis").is_ok());
    }

    #[test]
    fn empty_source_produces_empty_output() {
        assert_eq!(Markdown.compile("").unwrap(), "");
    }
}

//! Static lookup tables for file extensions and canonical languages.
//!
//! Pure data, no state. The tables deliberately cover more dialects than
//! the compiler set: a canonical key with an output kind but no registered
//! compiler is served through the dispatcher's silent empty-output path.

use crate::language::Language;

/// Output format class a canonical language compiles to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputKind {
    Html,
    Javascript,
    Css,
}

impl OutputKind {
    /// MIME type of the produced output.
    pub fn mime(&self) -> &'static str {
        match self {
            OutputKind::Html => "text/html",
            OutputKind::Javascript => "application/javascript",
            OutputKind::Css => "text/css",
        }
    }
}

/// MIME type served for a file extension.
///
/// Unregistered extensions fall back to `text/plain`.
pub fn mime_for_extension(ext: &str) -> &'static str {
    match ext {
        "js" | "ts" => "application/javascript",
        "json" => "application/json",
        "css" | "scss" | "sass" | "less" | "styl" => "text/css",
        "html" | "htm" | "jinja" | "j2" => "text/html",
        "md" | "mdown" | "markdown" => "text/x-markdown",
        _ => "text/plain",
    }
}

/// Canonical language name for a file extension.
///
/// Extensions with no alias map to themselves.
pub fn canonical_language(ext: &str) -> &str {
    match ext {
        "md" | "mdown" => "markdown",
        "js" => "javascript",
        "j2" => "jinja",
        "ts" => "typescript",
        "styl" => "stylus",
        other => other,
    }
}

/// Output kind a canonical language compiles to.
///
/// `None` means the content is already browser-native, or unknown, and
/// needs no further processing.
pub fn output_kind(language: &str) -> Option<OutputKind> {
    if let Some(language) = Language::from_key(language) {
        return Some(language.output_kind());
    }
    match language {
        "typescript" => Some(OutputKind::Javascript),
        "sass" | "less" | "stylus" => Some(OutputKind::Css),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unregistered_extension_defaults_to_text_plain() {
        assert_eq!(mime_for_extension("xyz"), "text/plain");
        assert_eq!(mime_for_extension(""), "text/plain");
    }

    #[test]
    fn markdown_extensions_share_a_mime() {
        for ext in ["md", "mdown", "markdown"] {
            assert_eq!(mime_for_extension(ext), "text/x-markdown");
        }
    }

    #[test]
    fn aliases_resolve_to_canonical_keys() {
        assert_eq!(canonical_language("md"), "markdown");
        assert_eq!(canonical_language("mdown"), "markdown");
        assert_eq!(canonical_language("j2"), "jinja");
        assert_eq!(canonical_language("ts"), "typescript");
        assert_eq!(canonical_language("styl"), "stylus");
        // Identity fallback.
        assert_eq!(canonical_language("scss"), "scss");
        assert_eq!(canonical_language("html"), "html");
    }

    #[test]
    fn output_kinds_cover_table_only_dialects() {
        assert_eq!(output_kind("markdown"), Some(OutputKind::Html));
        assert_eq!(output_kind("scss"), Some(OutputKind::Css));
        assert_eq!(output_kind("typescript"), Some(OutputKind::Javascript));
        assert_eq!(output_kind("less"), Some(OutputKind::Css));
        assert_eq!(output_kind("stylus"), Some(OutputKind::Css));
        assert_eq!(output_kind("html"), None);
        assert_eq!(output_kind("doesNotExist"), None);
    }

    #[test]
    fn output_kinds_map_to_their_mime() {
        assert_eq!(OutputKind::Html.mime(), "text/html");
        assert_eq!(OutputKind::Javascript.mime(), "application/javascript");
        assert_eq!(OutputKind::Css.mime(), "text/css");
    }

    #[test]
    fn every_compiled_language_has_a_kind() {
        for language in Language::ALL {
            assert_eq!(output_kind(language.key()), Some(language.output_kind()));
        }
    }
}

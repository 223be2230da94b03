//! Language capabilities.
//!
//! Each supported dialect wraps a third-party compiler crate behind the
//! [`Compiler`] trait: one operation, source text in, browser-native
//! output out. This is the direct, in-process entry point; the worker
//! process resolves jobs through the same table, so the isolated and
//! direct paths always produce identical output for valid input.

mod javascript;
mod jinja;
mod markdown;
mod scss;

use crate::error::Result;
use crate::registry::OutputKind;

/// A compiler for one source dialect.
///
/// Implementations are stateless; `compile` is a pure function of the
/// source text.
pub trait Compiler: Send + Sync {
    /// Transform `source` into browser-native output.
    fn compile(&self, source: &str) -> Result<String>;
}

/// Canonical tags for the dialects with a registered compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Markdown,
    Jinja,
    Scss,
    Javascript,
}

impl Language {
    /// Every language with a registered compiler.
    pub const ALL: [Language; 4] = [
        Language::Markdown,
        Language::Jinja,
        Language::Scss,
        Language::Javascript,
    ];

    /// Resolve a canonical language key.
    ///
    /// Exact match only; alias resolution is the registry's job. Keys in
    /// the registry tables without a compiler (`typescript`, `less`,
    /// `stylus`, `sass`) resolve to `None` here, which is what routes
    /// them onto the silent empty-output path.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "markdown" => Some(Self::Markdown),
            "jinja" => Some(Self::Jinja),
            "scss" => Some(Self::Scss),
            "javascript" => Some(Self::Javascript),
            _ => None,
        }
    }

    /// Canonical key for this language.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Jinja => "jinja",
            Self::Scss => "scss",
            Self::Javascript => "javascript",
        }
    }

    /// Output format class this language compiles to.
    pub fn output_kind(&self) -> OutputKind {
        match self {
            Self::Markdown | Self::Jinja => OutputKind::Html,
            Self::Scss => OutputKind::Css,
            Self::Javascript => OutputKind::Javascript,
        }
    }

    /// The compiler for this language.
    pub fn compiler(&self) -> &'static dyn Compiler {
        match self {
            Self::Markdown => &markdown::Markdown,
            Self::Jinja => &jinja::Jinja,
            Self::Scss => &scss::Scss,
            Self::Javascript => &javascript::Javascript,
        }
    }

    /// Compile `source` in-process, without worker isolation.
    ///
    /// Failure-transparent: malformed source returns the compiler's
    /// rejection. The dispatcher wraps these same compilers in a worker
    /// process and folds every failure into its string outcome instead.
    pub fn compile(&self, source: &str) -> Result<String> {
        self.compiler().compile(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_roundtrip() {
        for language in Language::ALL {
            assert_eq!(Language::from_key(language.key()), Some(language));
        }
    }

    #[test]
    fn from_key_is_exact() {
        // Aliases and table-only dialects do not resolve.
        assert_eq!(Language::from_key("md"), None);
        assert_eq!(Language::from_key("ts"), None);
        assert_eq!(Language::from_key("typescript"), None);
        assert_eq!(Language::from_key("less"), None);
        assert_eq!(Language::from_key("doesNotExist"), None);
    }

    #[test]
    fn every_language_compiles_something() {
        let sources = [
            (Language::Markdown, "# Hi"),
            (Language::Jinja, "<p>{{ 1 + 2 }}</p>"),
            (Language::Scss, "a { color: red; }"),
            (Language::Javascript, "var answer = 42;"),
        ];
        for (language, source) in sources {
            let output = language.compile(source).unwrap();
            assert!(!output.is_empty(), "{} produced nothing", language.key());
        }
    }
}

//! Template dialect to HTML via minijinja.

use minijinja::Environment;

use crate::error::{Error, Result};

use super::Compiler;

/// Template compiler.
///
/// Snippets are rendered against an empty context; undefined variables
/// render as empty strings. Malformed template syntax rejects with the
/// engine's diagnostic, which carries the offending line.
pub struct Jinja;

impl Compiler for Jinja {
    fn compile(&self, source: &str) -> Result<String> {
        let env = Environment::new();
        env.render_str(source, minijinja::context! {})
            .map_err(|e| Error::Compile {
                language: "jinja",
                message: e.to_string(),
            })
    }
}

//! JavaScript normalization via minifier.

use crate::error::Result;

use super::Compiler;

/// JavaScript compiler.
///
/// Browsers run the input as-is; this pass strips comments and collapses
/// whitespace so the service emits one consistent form for every dialect.
/// The minifier is token-based and accepts any input, so this compiler
/// never rejects.
pub struct Javascript;

impl Compiler for Javascript {
    fn compile(&self, source: &str) -> Result<String> {
        Ok(minifier::js::minify(source).to_string())
    }
}

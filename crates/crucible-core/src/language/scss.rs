//! SCSS to CSS via grass.

use crate::error::{Error, Result};

use super::Compiler;

/// SCSS compiler.
pub struct Scss;

impl Compiler for Scss {
    fn compile(&self, source: &str) -> Result<String> {
        grass::from_string(source.to_owned(), &grass::Options::default())
            .map(|css| css.trim().to_owned())
            .map_err(|e| Error::Compile {
                language: "scss",
                message: e.to_string(),
            })
    }
}

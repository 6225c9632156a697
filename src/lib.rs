//! # py2basic
//!
//! Translates Python syntax trees into structured BASIC source.
//!
//! The tree comes from an external front-end as JSON, one object per node
//! with a `_type` tag and the fields the Python `ast` module uses:
//!
//! ```
//! let tree = r#"{"_type": "Module", "body": [{
//!     "_type": "Assign", "lineno": 1, "col_offset": 0,
//!     "targets": [{"_type": "Name", "id": "x", "lineno": 1, "col_offset": 0}],
//!     "value": {"_type": "BinOp", "lineno": 1, "col_offset": 4,
//!               "left": {"_type": "Constant", "value": 1, "lineno": 1, "col_offset": 4},
//!               "op": {"_type": "Add"},
//!               "right": {"_type": "Constant", "value": 2, "lineno": 1, "col_offset": 8}}
//! }]}"#;
//!
//! let translation = py2basic::translate_json(tree, &py2basic::TranslateOptions::default()).unwrap();
//! assert_eq!(translation.text, "x = (1 + 2)\n");
//! ```

pub mod error;
pub mod parser;
pub mod renderer;

pub use error::{Construct, TranslateError};
pub use parser::*;
pub use renderer::*;

/// Load a JSON tree and translate it in one go.
pub fn translate_json(source: &str, options: &TranslateOptions) -> anyhow::Result<Translation> {
    let module = TreeParser::new().parse_str(source)?;
    let translation = ProgramRenderer::new(options.clone()).render(&module)?;
    Ok(translation)
}

/// Translate an already loaded tree with default options.
pub fn translate(module: &Module) -> Result<String, TranslateError> {
    ProgramRenderer::default()
        .render(module)
        .map(|translation| translation.text)
}

#[cfg(test)]
mod tests;

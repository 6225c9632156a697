use std::io::Write;

use crate::error::Result;
use crate::parser::*;
use crate::renderer::traits::*;

/// Output of a completed translation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub text: String,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct ProgramRenderer {
    options: TranslateOptions,
}

impl ProgramRenderer {
    pub fn new(options: TranslateOptions) -> Self {
        Self { options }
    }

    pub fn render(&self, module: &Module) -> Result<Translation> {
        let mut context = RenderContext::new(self.options.clone());
        let text = module.render(&mut context)?;

        Ok(Translation {
            text,
            diagnostics: context.take_diagnostics(),
        })
    }

    /// Write each top-level statement to `sink` as soon as it is rendered.
    ///
    /// On error, statements rendered before the failing one have already
    /// been written.
    pub fn render_to<W: Write>(&self, module: &Module, sink: &mut W) -> Result<Vec<Diagnostic>> {
        let mut context = RenderContext::new(self.options.clone());

        for stmt in &module.body {
            let text = stmt.render(&mut context)?;
            tracing::debug!(
                position = ?stmt.position(),
                bytes = text.len(),
                "rendered top-level statement"
            );
            sink.write_all(text.as_bytes())?;
        }
        sink.flush()?;

        Ok(context.take_diagnostics())
    }
}

impl Default for ProgramRenderer {
    fn default() -> Self {
        Self::new(TranslateOptions::default())
    }
}

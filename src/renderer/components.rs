use crate::parser::Literal;
use crate::renderer::traits::*;

/// Line-level writer for statement output at a fixed indentation.
pub struct LineWriter {
    output: String,
    indent: String,
    at_line_start: bool,
}

impl LineWriter {
    pub fn new(context: &RenderContext) -> Self {
        Self {
            output: String::new(),
            indent: context.indent(),
            at_line_start: true,
        }
    }

    /// Emit the indentation prefix once at the start of a logical line.
    pub fn start_line(&mut self) {
        if self.at_line_start {
            self.output.push_str(&self.indent);
            self.at_line_start = false;
        }
    }

    pub fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub fn end_line(&mut self) {
        self.output.push('\n');
        self.at_line_start = true;
    }

    pub fn line(&mut self, text: &str) {
        self.start_line();
        self.write(text);
        self.end_line();
    }

    /// Append lines that already carry their own indentation.
    pub fn push_block(&mut self, block: &str) {
        debug_assert!(self.at_line_start, "block spliced into an open line");
        self.output.push_str(block);
    }

    pub fn finish(self) -> String {
        self.output
    }
}

/// Helper for rendering literal values
pub struct LiteralRenderer;

impl LiteralRenderer {
    /// Double-quoted string; quotes are doubled and control characters
    /// become `Chr(n)` pieces joined with `+`.
    pub fn render_string(&self, value: &str) -> String {
        let mut pieces: Vec<String> = Vec::new();
        let mut run = String::new();

        for c in value.chars() {
            if c.is_control() {
                if !run.is_empty() {
                    pieces.push(format!("\"{}\"", run));
                    run.clear();
                }
                pieces.push(format!("Chr({})", c as u32));
            } else if c == '"' {
                run.push_str("\"\"");
            } else {
                run.push(c);
            }
        }

        if !run.is_empty() || pieces.is_empty() {
            pieces.push(format!("\"{}\"", run));
        }

        if pieces.len() == 1 {
            pieces.remove(0)
        } else {
            format!("({})", pieces.join(" + "))
        }
    }

    pub fn render_number(&self, value: &serde_json::Number) -> String {
        value.to_string()
    }

    pub fn render_bool(&self, value: bool) -> String {
        let text = if value { "true" } else { "false" };
        text.to_string()
    }

    pub fn render_none(&self) -> String {
        "invalid".to_string()
    }

    pub fn render_literal(&self, literal: &Literal) -> String {
        match literal {
            Literal::Str(s) => self.render_string(s),
            Literal::Num(n) => self.render_number(n),
            Literal::Bool(b) => self.render_bool(*b),
            Literal::None => self.render_none(),
        }
    }

    /// Names with a fixed spelling in the target dialect.
    pub fn render_name(&self, id: &str) -> String {
        match id {
            "True" => self.render_bool(true),
            "False" => self.render_bool(false),
            "None" => self.render_none(),
            _ => id.to_string(),
        }
    }
}

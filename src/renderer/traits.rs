use std::fmt;

use crate::error::{Result, TranslateError};
use crate::parser::{Position, UnknownNode};

/// What to do when the tree contains a node kind with no translation rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownNodePolicy {
    /// Record a diagnostic, emit nothing for the node and keep going.
    #[default]
    Diagnose,
    /// Fail the run with `TranslateError::UnknownNodeKind`.
    Abort,
}

/// Options for a translation run
#[derive(Debug, Clone)]
pub struct TranslateOptions {
    pub indent_width: usize,
    pub unknown_nodes: UnknownNodePolicy,
}

impl TranslateOptions {
    pub fn new() -> Self {
        Self {
            indent_width: 4,
            unknown_nodes: UnknownNodePolicy::Diagnose,
        }
    }

    pub fn with_indent_width(mut self, indent_width: usize) -> Self {
        self.indent_width = indent_width;
        self
    }

    pub fn with_unknown_nodes(mut self, policy: UnknownNodePolicy) -> Self {
        self.unknown_nodes = policy;
        self
    }

    pub fn strict(self) -> Self {
        self.with_unknown_nodes(UnknownNodePolicy::Abort)
    }
}

impl Default for TranslateOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// A node the translator skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: String,
    pub fields: Vec<String>,
    pub position: Option<Position>,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Don't know what to do with a {} node", self.kind)?;
        if let Some(position) = self.position {
            write!(f, " at {}", position)?;
        }
        write!(f, "; it has these fields: [{}]", self.fields.join(", "))
    }
}

/// Kind of loop a `break` would leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopKind {
    While,
    For,
}

/// State threaded through every render call of one translation run.
#[derive(Debug)]
pub struct RenderContext {
    pub depth: usize,
    pub options: TranslateOptions,
    diagnostics: Vec<Diagnostic>,
    loops: Vec<LoopKind>,
}

impl RenderContext {
    pub fn new(options: TranslateOptions) -> Self {
        Self {
            depth: 0,
            options,
            diagnostics: Vec::new(),
            loops: Vec::new(),
        }
    }

    pub fn indent(&self) -> String {
        " ".repeat(self.depth.saturating_mul(self.options.indent_width))
    }

    pub fn indent_in(&mut self) {
        self.depth += 1;
    }

    pub fn indent_out(&mut self) {
        debug_assert!(self.depth > 0, "unbalanced indent_out");
        self.depth = self.depth.saturating_sub(1);
    }

    /// Run `f` one level deeper; the depth is restored even when `f` fails.
    pub fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.indent_in();
        let result = f(self);
        self.indent_out();
        result
    }

    /// Run `f` as the body of a loop of the given kind.
    pub fn in_loop<T>(&mut self, kind: LoopKind, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.loops.push(kind);
        let result = f(self);
        self.loops.pop();
        result
    }

    /// Run `f` as a function body, where enclosing loops are out of reach.
    pub fn in_function<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let outer = std::mem::take(&mut self.loops);
        let result = f(self);
        self.loops = outer;
        result
    }

    pub fn innermost_loop(&self) -> Option<LoopKind> {
        self.loops.last().copied()
    }

    /// Rendering of `node` as a value the caller can splice or join.
    pub fn captured<R: Render + ?Sized>(&mut self, node: &R) -> Result<String> {
        let depth = self.depth;
        let text = node.render(self)?;
        debug_assert_eq!(depth, self.depth, "capture changed the indentation depth");
        Ok(text)
    }

    pub fn captured_all<R: Render>(&mut self, nodes: &[R]) -> Result<Vec<String>> {
        nodes.iter().map(|node| self.captured(node)).collect()
    }

    /// Fallback for node kinds without a translation rule.
    pub fn unknown_node(&mut self, node: &UnknownNode) -> Result<String> {
        match self.options.unknown_nodes {
            UnknownNodePolicy::Abort => Err(TranslateError::UnknownNodeKind {
                kind: node.kind.clone(),
                fields: node.fields.clone(),
                position: node.position,
            }),
            UnknownNodePolicy::Diagnose => {
                let diagnostic = Diagnostic {
                    kind: node.kind.clone(),
                    fields: node.fields.clone(),
                    position: node.position,
                };
                tracing::debug!(kind = %diagnostic.kind, "skipping node without a translation rule");
                self.diagnostics.push(diagnostic);
                Ok(String::new())
            }
        }
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn take_diagnostics(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::new(TranslateOptions::default())
    }
}

/// Core rendering trait for all tree nodes
///
/// Statements render to complete, indented lines; expressions and operators
/// render to inline text.
pub trait Render {
    fn render(&self, context: &mut RenderContext) -> Result<String>;
}

use std::fmt;

use thiserror::Error;

use crate::parser::Position;

/// Source constructs the translator rejects on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    Decorators,
    KeywordArguments,
    StarArguments,
    DoubleStarArguments,
    DestructuringAssignment,
    ComplexAssignmentTarget,
    ElifChain,
    ChainedComparison,
    LoopElse,
    Slice,
    ParameterDefaults,
    VariadicParameters,
    KeywordOnlyParameters,
    DictUnpacking,
    StarredExpression,
    PrintRedirection,
    BreakOutsideLoop,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Construct::Decorators => "Decorators are",
            Construct::KeywordArguments => "Keyword args are",
            Construct::StarArguments => "*args is",
            Construct::DoubleStarArguments => "**kwargs is",
            Construct::DestructuringAssignment => "Assigning to a tuple or list is",
            Construct::ComplexAssignmentTarget => "Assigning to anything but a plain name is",
            Construct::ElifChain => "elif chains are",
            Construct::ChainedComparison => "Chained comparisons are",
            Construct::LoopElse => "else-clauses on loops are",
            Construct::Slice => "Slices are",
            Construct::ParameterDefaults => "Default parameter values are",
            Construct::VariadicParameters => "Variadic parameters are",
            Construct::KeywordOnlyParameters => "Keyword-only parameters are",
            Construct::DictUnpacking => "Dictionary unpacking is",
            Construct::StarredExpression => "Starred expressions are",
            Construct::PrintRedirection => "Print redirection is",
            Construct::BreakOutsideLoop => "'break' outside of a loop is",
        };
        write!(f, "{}", text)
    }
}

/// Errors that abort a translation run.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("{construct} not supported at {position}")]
    Unsupported {
        construct: Construct,
        position: Position,
    },

    #[error("{detail} at {position}")]
    Structural {
        detail: &'static str,
        position: Position,
    },

    #[error("Don't know what to do with a {kind} node{}", describe_position(.position))]
    UnknownNodeKind {
        kind: String,
        fields: Vec<String>,
        position: Option<Position>,
    },

    #[error("failed to write translated output")]
    Io(#[from] std::io::Error),
}

impl TranslateError {
    pub fn unsupported(construct: Construct, position: Position) -> Self {
        TranslateError::Unsupported {
            construct,
            position,
        }
    }

    /// Source position the error points at, when there is one.
    pub fn position(&self) -> Option<Position> {
        match self {
            TranslateError::Unsupported { position, .. }
            | TranslateError::Structural { position, .. } => Some(*position),
            TranslateError::UnknownNodeKind { position, .. } => *position,
            TranslateError::Io(_) => None,
        }
    }
}

fn describe_position(position: &Option<Position>) -> String {
    match position {
        Some(position) => format!(" at {}", position),
        None => String::new(),
    }
}

pub type Result<T, E = TranslateError> = std::result::Result<T, E>;

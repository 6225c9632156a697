use serde::{Deserialize, Deserializer};
use std::fmt;

/// Location of a node in the original source, as reported by the front-end.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Position {
    /// 1-based line number (`lineno`).
    #[serde(rename = "lineno", default, deserialize_with = "offset_or_zero")]
    pub line: u32,
    /// 0-based column offset (`col_offset`).
    #[serde(rename = "col_offset", default, deserialize_with = "offset_or_zero")]
    pub column: u32,
}

// Older front-ends report `col_offset: -1` for some nodes; such a value
// must not discard the other half of the position
fn offset_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_u64()
        .and_then(|offset| u32::try_from(offset).ok())
        .unwrap_or_default())
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

/// A node kind with no translation rule, kept around for diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownNode {
    pub kind: String,
    pub fields: Vec<String>,
    pub position: Option<Position>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    pub body: Vec<Stmt>,
}

/// Parameter list of a function definition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    pub params: Vec<String>,
    pub has_vararg: bool,
    pub has_kwarg: bool,
    pub kwonly_count: usize,
    pub default_count: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    FunctionDef {
        name: String,
        args: Arguments,
        body: Vec<Stmt>,
        decorators: Vec<Expr>,
        position: Position,
    },
    /// The dedicated print statement of older language versions.
    Print {
        values: Vec<Expr>,
        newline: bool,
        has_dest: bool,
        position: Position,
    },
    Assign {
        targets: Vec<Expr>,
        value: Expr,
        position: Position,
    },
    AugAssign {
        target: Expr,
        op: Operator,
        value: Expr,
        position: Position,
    },
    Expr {
        value: Expr,
        position: Position,
    },
    While {
        test: Expr,
        body: Vec<Stmt>,
        orelse: Vec<Stmt>,
        position: Position,
    },
    If {
        test: Expr,
        body: Vec<Stmt>,
        orelse: Vec<Stmt>,
        position: Position,
    },
    For {
        target: Expr,
        iter: Expr,
        body: Vec<Stmt>,
        orelse: Vec<Stmt>,
        position: Position,
    },
    Return {
        value: Option<Expr>,
        position: Position,
    },
    Pass {
        position: Position,
    },
    Break {
        position: Position,
    },
    Unknown(UnknownNode),
}

impl Stmt {
    pub fn position(&self) -> Option<Position> {
        match self {
            Stmt::FunctionDef { position, .. }
            | Stmt::Print { position, .. }
            | Stmt::Assign { position, .. }
            | Stmt::AugAssign { position, .. }
            | Stmt::Expr { position, .. }
            | Stmt::While { position, .. }
            | Stmt::If { position, .. }
            | Stmt::For { position, .. }
            | Stmt::Return { position, .. }
            | Stmt::Pass { position }
            | Stmt::Break { position } => Some(*position),
            Stmt::Unknown(node) => node.position,
        }
    }
}

/// Literal payload of a `Constant` node.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Str(String),
    Num(serde_json::Number),
    Bool(bool),
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Keyword {
    /// `None` for `**mapping` entries.
    pub arg: Option<String>,
    pub value: Expr,
}

/// Index part of a subscript.
#[derive(Debug, Clone, PartialEq)]
pub enum Slice {
    Index(Box<Expr>),
    /// `a[lower:upper:step]`
    Range,
    /// `a[i, j]` or `a[i:j, k]`
    Extended,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Str {
        value: String,
        position: Position,
    },
    Num {
        value: serde_json::Number,
        position: Position,
    },
    Constant {
        value: Literal,
        position: Position,
    },
    Name {
        id: String,
        position: Position,
    },
    BinOp {
        left: Box<Expr>,
        op: Operator,
        right: Box<Expr>,
        position: Position,
    },
    UnaryOp {
        op: Operator,
        operand: Box<Expr>,
        position: Position,
    },
    BoolOp {
        op: Operator,
        values: Vec<Expr>,
        position: Position,
    },
    Compare {
        left: Box<Expr>,
        ops: Vec<Operator>,
        comparators: Vec<Expr>,
        position: Position,
    },
    Attribute {
        value: Box<Expr>,
        attr: String,
        position: Position,
    },
    Call {
        func: Box<Expr>,
        args: Vec<Expr>,
        keywords: Vec<Keyword>,
        starargs: Option<Box<Expr>>,
        kwargs: Option<Box<Expr>>,
        position: Position,
    },
    Subscript {
        value: Box<Expr>,
        slice: Slice,
        position: Position,
    },
    List {
        elts: Vec<Expr>,
        position: Position,
    },
    Tuple {
        elts: Vec<Expr>,
        position: Position,
    },
    Dict {
        keys: Vec<Option<Expr>>,
        values: Vec<Expr>,
        position: Position,
    },
    Starred {
        value: Box<Expr>,
        position: Position,
    },
    Unknown(UnknownNode),
}

impl Expr {
    pub fn position(&self) -> Option<Position> {
        match self {
            Expr::Str { position, .. }
            | Expr::Num { position, .. }
            | Expr::Constant { position, .. }
            | Expr::Name { position, .. }
            | Expr::BinOp { position, .. }
            | Expr::UnaryOp { position, .. }
            | Expr::BoolOp { position, .. }
            | Expr::Compare { position, .. }
            | Expr::Attribute { position, .. }
            | Expr::Call { position, .. }
            | Expr::Subscript { position, .. }
            | Expr::List { position, .. }
            | Expr::Tuple { position, .. }
            | Expr::Dict { position, .. }
            | Expr::Starred { position, .. } => Some(*position),
            Expr::Unknown(node) => node.position,
        }
    }

    /// Identifier of a plain `Name` node.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Expr::Name { id, .. } => Some(id),
            _ => None,
        }
    }
}

/// Operator leaves shared by binary, unary, boolean and comparison nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mult,
    Div,
    Mod,
    Pow,
    FloorDiv,
    Eq,
    NotEq,
    Lt,
    LtE,
    Gt,
    GtE,
    And,
    Or,
    Not,
    UAdd,
    USub,
    Unknown { kind: String, fields: Vec<String> },
}

impl Operator {
    pub fn from_kind(kind: &str) -> Option<Self> {
        let op = match kind {
            "Add" => Operator::Add,
            "Sub" => Operator::Sub,
            "Mult" => Operator::Mult,
            "Div" => Operator::Div,
            "Mod" => Operator::Mod,
            "Pow" => Operator::Pow,
            "FloorDiv" => Operator::FloorDiv,
            "Eq" => Operator::Eq,
            "NotEq" => Operator::NotEq,
            "Lt" => Operator::Lt,
            "LtE" => Operator::LtE,
            "Gt" => Operator::Gt,
            "GtE" => Operator::GtE,
            "And" => Operator::And,
            "Or" => Operator::Or,
            "Not" => Operator::Not,
            "UAdd" => Operator::UAdd,
            "USub" => Operator::USub,
            _ => return None,
        };
        Some(op)
    }

    /// Target-dialect spelling, `None` for kinds without a translation.
    pub fn symbol(&self) -> Option<&'static str> {
        let symbol = match self {
            Operator::Add | Operator::UAdd => "+",
            Operator::Sub | Operator::USub => "-",
            Operator::Mult => "*",
            Operator::Div => "/",
            Operator::Mod => "MOD",
            Operator::Pow => "^",
            Operator::FloorDiv => "\\",
            Operator::Eq => "=",
            Operator::NotEq => "<>",
            Operator::Lt => "<",
            Operator::LtE => "<=",
            Operator::Gt => ">",
            Operator::GtE => ">=",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Not => "NOT",
            Operator::Unknown { .. } => return None,
        };
        Some(symbol)
    }
}

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::parser::types::*;

// Converts the front-end's JSON tree into typed nodes
pub struct TreeParser;

impl TreeParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse a whole JSON document whose root is a `Module` node.
    pub fn parse_str(&self, source: &str) -> Result<Module> {
        let root: Value = serde_json::from_str(source).context("input is not valid JSON")?;
        self.parse_module(&root)
    }

    pub fn parse_module(&self, node: &Value) -> Result<Module> {
        let kind = kind_of(node)?;
        if kind != "Module" {
            bail!("expected a Module node at the root, found {}", kind);
        }

        Ok(Module {
            body: self.parse_stmts(node, "body")?,
        })
    }

    fn parse_stmts(&self, node: &Value, field: &str) -> Result<Vec<Stmt>> {
        list(node, field)?
            .iter()
            .map(|child| self.parse_stmt(child))
            .collect()
    }

    fn parse_exprs(&self, node: &Value, field: &str) -> Result<Vec<Expr>> {
        list(node, field)?
            .iter()
            .map(|child| self.parse_expr(child))
            .collect()
    }

    fn parse_child(&self, node: &Value, field: &str) -> Result<Expr> {
        self.parse_expr(required(node, field)?)
    }

    fn parse_optional(&self, node: &Value, field: &str) -> Result<Option<Expr>> {
        match node.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(child) => self.parse_expr(child).map(Some),
        }
    }

    pub fn parse_stmt(&self, node: &Value) -> Result<Stmt> {
        let kind = kind_of(node)?;
        let position = position_of(node);

        let stmt = match kind {
            "FunctionDef" => Stmt::FunctionDef {
                name: node
                    .get("name")
                    .and_then(|n| n.as_str())
                    .unwrap_or_default()
                    .to_string(),
                args: match node.get("args") {
                    Some(args) if !args.is_null() => self.parse_arguments(args)?,
                    _ => Arguments::default(),
                },
                body: self.parse_stmts(node, "body")?,
                decorators: self.parse_exprs(node, "decorator_list")?,
                position,
            },
            "Print" => Stmt::Print {
                values: self.parse_exprs(node, "values")?,
                newline: node.get("nl").and_then(|nl| nl.as_bool()).unwrap_or(true),
                has_dest: node.get("dest").is_some_and(|dest| !dest.is_null()),
                position,
            },
            "Assign" => Stmt::Assign {
                targets: self.parse_exprs(node, "targets")?,
                value: self.parse_child(node, "value")?,
                position,
            },
            "AugAssign" => Stmt::AugAssign {
                target: self.parse_child(node, "target")?,
                op: self.parse_operator(required(node, "op")?)?,
                value: self.parse_child(node, "value")?,
                position,
            },
            "Expr" => Stmt::Expr {
                value: self.parse_child(node, "value")?,
                position,
            },
            "While" => Stmt::While {
                test: self.parse_child(node, "test")?,
                body: self.parse_stmts(node, "body")?,
                orelse: self.parse_stmts(node, "orelse")?,
                position,
            },
            "If" => Stmt::If {
                test: self.parse_child(node, "test")?,
                body: self.parse_stmts(node, "body")?,
                orelse: self.parse_stmts(node, "orelse")?,
                position,
            },
            "For" => Stmt::For {
                target: self.parse_child(node, "target")?,
                iter: self.parse_child(node, "iter")?,
                body: self.parse_stmts(node, "body")?,
                orelse: self.parse_stmts(node, "orelse")?,
                position,
            },
            "Return" => Stmt::Return {
                value: self.parse_optional(node, "value")?,
                position,
            },
            "Pass" => Stmt::Pass { position },
            "Break" => Stmt::Break { position },
            _ => Stmt::Unknown(unknown_node(kind, node)),
        };

        Ok(stmt)
    }

    fn parse_arguments(&self, node: &Value) -> Result<Arguments> {
        let mut params = Vec::new();
        for field in ["posonlyargs", "args"] {
            for param in list(node, field)? {
                params.push(param_name(param)?);
            }
        }

        let present = |field: &str| node.get(field).is_some_and(|v| !v.is_null());
        let kw_defaults = list(node, "kw_defaults")?
            .iter()
            .filter(|d| !d.is_null())
            .count();

        Ok(Arguments {
            params,
            has_vararg: present("vararg"),
            has_kwarg: present("kwarg"),
            kwonly_count: list(node, "kwonlyargs")?.len(),
            default_count: list(node, "defaults")?.len() + kw_defaults,
        })
    }

    pub fn parse_expr(&self, node: &Value) -> Result<Expr> {
        let kind = kind_of(node)?;
        let position = position_of(node);

        let expr = match kind {
            "Str" => Expr::Str {
                value: string_field(node, "s")?,
                position,
            },
            "Num" => Expr::Num {
                value: match required(node, "n")? {
                    Value::Number(n) => n.clone(),
                    other => bail!("Num node at {} holds a non-numeric value: {}", position, other),
                },
                position,
            },
            "Constant" | "NameConstant" => Expr::Constant {
                value: parse_literal(node.get("value").unwrap_or(&Value::Null))
                    .with_context(|| format!("in {} node at {}", kind, position))?,
                position,
            },
            "Name" => Expr::Name {
                id: string_field(node, "id")?,
                position,
            },
            "BinOp" => Expr::BinOp {
                left: Box::new(self.parse_child(node, "left")?),
                op: self.parse_operator(required(node, "op")?)?,
                right: Box::new(self.parse_child(node, "right")?),
                position,
            },
            "UnaryOp" => Expr::UnaryOp {
                op: self.parse_operator(required(node, "op")?)?,
                operand: Box::new(self.parse_child(node, "operand")?),
                position,
            },
            "BoolOp" => Expr::BoolOp {
                op: self.parse_operator(required(node, "op")?)?,
                values: self.parse_exprs(node, "values")?,
                position,
            },
            "Compare" => Expr::Compare {
                left: Box::new(self.parse_child(node, "left")?),
                ops: list(node, "ops")?
                    .iter()
                    .map(|op| self.parse_operator(op))
                    .collect::<Result<_>>()?,
                comparators: self.parse_exprs(node, "comparators")?,
                position,
            },
            "Attribute" => Expr::Attribute {
                value: Box::new(self.parse_child(node, "value")?),
                attr: string_field(node, "attr")?,
                position,
            },
            "Call" => Expr::Call {
                func: Box::new(self.parse_child(node, "func")?),
                args: self.parse_exprs(node, "args")?,
                keywords: list(node, "keywords")?
                    .iter()
                    .map(|kw| self.parse_keyword(kw))
                    .collect::<Result<_>>()?,
                starargs: self.parse_optional(node, "starargs")?.map(Box::new),
                kwargs: self.parse_optional(node, "kwargs")?.map(Box::new),
                position,
            },
            "Subscript" => Expr::Subscript {
                value: Box::new(self.parse_child(node, "value")?),
                slice: self.parse_slice(required(node, "slice")?)?,
                position,
            },
            "List" => Expr::List {
                elts: self.parse_exprs(node, "elts")?,
                position,
            },
            "Tuple" => Expr::Tuple {
                elts: self.parse_exprs(node, "elts")?,
                position,
            },
            "Dict" => Expr::Dict {
                keys: list(node, "keys")?
                    .iter()
                    .map(|key| match key {
                        Value::Null => Ok(None),
                        key => self.parse_expr(key).map(Some),
                    })
                    .collect::<Result<_>>()?,
                values: self.parse_exprs(node, "values")?,
                position,
            },
            "Starred" => Expr::Starred {
                value: Box::new(self.parse_child(node, "value")?),
                position,
            },
            _ => Expr::Unknown(unknown_node(kind, node)),
        };

        Ok(expr)
    }

    fn parse_keyword(&self, node: &Value) -> Result<Keyword> {
        Ok(Keyword {
            arg: node.get("arg").and_then(|a| a.as_str()).map(str::to_string),
            value: self.parse_child(node, "value")?,
        })
    }

    fn parse_slice(&self, node: &Value) -> Result<Slice> {
        let slice = match kind_of(node)? {
            "Index" => Slice::Index(Box::new(self.parse_child(node, "value")?)),
            "Slice" => Slice::Range,
            "ExtSlice" | "Tuple" => Slice::Extended,
            _ => Slice::Index(Box::new(self.parse_expr(node)?)),
        };
        Ok(slice)
    }

    pub fn parse_operator(&self, node: &Value) -> Result<Operator> {
        let kind = kind_of(node)?;
        Ok(Operator::from_kind(kind).unwrap_or_else(|| {
            let UnknownNode { kind, fields, .. } = unknown_node(kind, node);
            Operator::Unknown { kind, fields }
        }))
    }
}

impl Default for TreeParser {
    fn default() -> Self {
        Self::new()
    }
}

fn kind_of(node: &Value) -> Result<&str> {
    node.get("_type")
        .and_then(|kind| kind.as_str())
        .ok_or_else(|| anyhow!("node has no `_type` tag: {}", abbreviate(node)))
}

fn position_of(node: &Value) -> Position {
    Position::deserialize(node).unwrap_or_default()
}

fn required<'v>(node: &'v Value, field: &str) -> Result<&'v Value> {
    match node.get(field) {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(anyhow!(
            "{} node at {} is missing field `{}`",
            kind_of(node).unwrap_or("untagged"),
            position_of(node),
            field
        )),
    }
}

fn list<'v>(node: &'v Value, field: &str) -> Result<&'v [Value]> {
    match node.get(field) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => bail!(
            "field `{}` of {} node at {} is not a list",
            field,
            kind_of(node).unwrap_or("untagged"),
            position_of(node)
        ),
    }
}

fn string_field(node: &Value, field: &str) -> Result<String> {
    required(node, field)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("field `{}` at {} is not a string", field, position_of(node)))
}

fn parse_literal(value: &Value) -> Result<Literal> {
    let literal = match value {
        Value::String(s) => Literal::Str(s.clone()),
        Value::Number(n) => Literal::Num(n.clone()),
        Value::Bool(b) => Literal::Bool(*b),
        Value::Null => Literal::None,
        other => bail!("unsupported constant value: {}", abbreviate(other)),
    };
    Ok(literal)
}

// Accepts both `arg` nodes and the older `Name` parameter nodes
fn param_name(node: &Value) -> Result<String> {
    node.get("arg")
        .or_else(|| node.get("id"))
        .and_then(|name| name.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            anyhow!(
                "unsupported parameter {} at {}",
                kind_of(node).unwrap_or("untagged"),
                position_of(node)
            )
        })
}

fn unknown_node(kind: &str, node: &Value) -> UnknownNode {
    let fields = node
        .as_object()
        .map(|obj| {
            obj.keys()
                .filter(|key| key.as_str() != "_type")
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    UnknownNode {
        kind: kind.to_string(),
        fields,
        position: node.get("lineno").map(|_| position_of(node)),
    }
}

fn abbreviate(node: &Value) -> String {
    let text = node.to_string();
    match text.char_indices().nth(60) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text,
    }
}

use crate::error::{Construct, Result, TranslateError};
use crate::parser::*;
use crate::renderer::components::*;
use crate::renderer::traits::*;

impl Render for Module {
    fn render(&self, context: &mut RenderContext) -> Result<String> {
        render_body(&self.body, context)
    }
}

impl Render for Stmt {
    fn render(&self, context: &mut RenderContext) -> Result<String> {
        match self {
            Stmt::FunctionDef {
                name,
                args,
                body,
                decorators,
                position,
            } => render_function(name, args, body, decorators, *position, context),
            Stmt::Print {
                values,
                newline,
                has_dest,
                position,
            } => {
                if *has_dest {
                    return Err(TranslateError::unsupported(
                        Construct::PrintRedirection,
                        *position,
                    ));
                }
                render_print(values, *newline, context)
            }
            Stmt::Assign {
                targets,
                value,
                position,
            } => render_assign(targets, value, *position, context),
            Stmt::AugAssign {
                target,
                op,
                value,
                position,
            } => render_aug_assign(target, op, value, *position, context),
            Stmt::Expr { value, .. } => render_expr_stmt(value, context),
            Stmt::While {
                test,
                body,
                orelse,
                position,
            } => render_while(test, body, orelse, *position, context),
            Stmt::If {
                test,
                body,
                orelse,
                position,
            } => render_if(test, body, orelse, *position, context),
            Stmt::For {
                target,
                iter,
                body,
                orelse,
                position,
            } => render_for(target, iter, body, orelse, *position, context),
            Stmt::Return { value, .. } => {
                let mut writer = LineWriter::new(context);
                match value {
                    Some(value) => {
                        let value = context.captured(value)?;
                        writer.line(&format!("Return {}", value));
                    }
                    None => writer.line("Return"),
                }
                Ok(writer.finish())
            }
            Stmt::Pass { .. } => Ok(String::new()),
            Stmt::Break { position } => {
                let line = match context.innermost_loop() {
                    Some(LoopKind::While) => "Exit While",
                    Some(LoopKind::For) => "Exit For",
                    None => {
                        return Err(TranslateError::unsupported(
                            Construct::BreakOutsideLoop,
                            *position,
                        ))
                    }
                };
                let mut writer = LineWriter::new(context);
                writer.line(line);
                Ok(writer.finish())
            }
            Stmt::Unknown(node) => context.unknown_node(node),
        }
    }
}

fn render_body(body: &[Stmt], context: &mut RenderContext) -> Result<String> {
    let mut output = String::new();
    for stmt in body {
        output.push_str(&stmt.render(context)?);
    }
    Ok(output)
}

fn render_function(
    name: &str,
    args: &Arguments,
    body: &[Stmt],
    decorators: &[Expr],
    position: Position,
    context: &mut RenderContext,
) -> Result<String> {
    if !decorators.is_empty() {
        return Err(TranslateError::unsupported(Construct::Decorators, position));
    }
    if args.has_vararg || args.has_kwarg {
        return Err(TranslateError::unsupported(
            Construct::VariadicParameters,
            position,
        ));
    }
    if args.kwonly_count > 0 {
        return Err(TranslateError::unsupported(
            Construct::KeywordOnlyParameters,
            position,
        ));
    }
    if args.default_count > 0 {
        return Err(TranslateError::unsupported(
            Construct::ParameterDefaults,
            position,
        ));
    }

    let mut writer = LineWriter::new(context);
    writer.line(&format!("Function {}({})", name, args.params.join(", ")));

    let inner = context.in_function(|cx| cx.nested(|cx| render_body(body, cx)))?;
    writer.push_block(&inner);

    writer.line("End Function");
    Ok(writer.finish())
}

fn render_print(values: &[Expr], newline: bool, context: &mut RenderContext) -> Result<String> {
    let values = context.captured_all(values)?;

    let mut writer = LineWriter::new(context);
    writer.start_line();
    writer.write("Print");
    if !values.is_empty() {
        writer.write(" ");
        writer.write(&values.join(", "));
    }
    if !newline {
        writer.write(";");
    }
    writer.end_line();
    Ok(writer.finish())
}

fn render_assign(
    targets: &[Expr],
    value: &Expr,
    position: Position,
    context: &mut RenderContext,
) -> Result<String> {
    let [target] = targets else {
        return Err(TranslateError::Structural {
            detail: "Only one lvalue allowed in assignment",
            position,
        });
    };
    let name = assignment_target(target, position)?;
    let value = context.captured(value)?;

    let mut writer = LineWriter::new(context);
    writer.line(&format!("{} = {}", name, value));
    Ok(writer.finish())
}

fn render_aug_assign(
    target: &Expr,
    op: &Operator,
    value: &Expr,
    position: Position,
    context: &mut RenderContext,
) -> Result<String> {
    let name = assignment_target(target, position)?;
    let op = context.captured(op)?;
    let value = context.captured(value)?;

    let mut writer = LineWriter::new(context);
    writer.line(&format!("{} = ({} {} {})", name, name, op, value));
    Ok(writer.finish())
}

/// Name bound by an assignment or loop target.
fn assignment_target(target: &Expr, position: Position) -> Result<&str> {
    match target {
        Expr::Name { id, .. } => Ok(id),
        Expr::Tuple { .. } | Expr::List { .. } | Expr::Starred { .. } => Err(
            TranslateError::unsupported(Construct::DestructuringAssignment, position),
        ),
        _ => Err(TranslateError::unsupported(
            Construct::ComplexAssignmentTarget,
            position,
        )),
    }
}

fn render_expr_stmt(value: &Expr, context: &mut RenderContext) -> Result<String> {
    // print(...) written as a call is still a print statement
    if let Expr::Call {
        func,
        args,
        keywords,
        starargs,
        kwargs,
        position,
    } = value
    {
        if func.as_name() == Some("print") {
            check_call_arguments(args, keywords, starargs, kwargs, *position)?;
            return render_print(args, true, context);
        }
    }

    let text = context.captured(value)?;
    let mut writer = LineWriter::new(context);
    writer.line(&text);
    Ok(writer.finish())
}

fn render_while(
    test: &Expr,
    body: &[Stmt],
    orelse: &[Stmt],
    position: Position,
    context: &mut RenderContext,
) -> Result<String> {
    if !orelse.is_empty() {
        return Err(TranslateError::unsupported(Construct::LoopElse, position));
    }

    let condition = context.captured(test)?;
    let mut writer = LineWriter::new(context);
    writer.line(&format!("While {}", condition));

    let inner = context.in_loop(LoopKind::While, |cx| {
        cx.nested(|cx| render_body(body, cx))
    })?;
    writer.push_block(&inner);

    writer.line("End While");
    Ok(writer.finish())
}

fn render_if(
    test: &Expr,
    body: &[Stmt],
    orelse: &[Stmt],
    position: Position,
    context: &mut RenderContext,
) -> Result<String> {
    // An elif's If starts at the column of its parent; an if nested under
    // `else:` is indented deeper
    if let [Stmt::If {
        position: inner, ..
    }] = orelse
    {
        if inner.column == position.column {
            return Err(TranslateError::unsupported(Construct::ElifChain, *inner));
        }
    }

    let condition = context.captured(test)?;
    let mut writer = LineWriter::new(context);
    writer.line(&format!("If {}", condition));
    writer.push_block(&context.nested(|cx| render_body(body, cx))?);

    if !orelse.is_empty() {
        writer.line("Else");
        writer.push_block(&context.nested(|cx| render_body(orelse, cx))?);
    }

    writer.line("End If");
    Ok(writer.finish())
}

fn render_for(
    target: &Expr,
    iter: &Expr,
    body: &[Stmt],
    orelse: &[Stmt],
    position: Position,
    context: &mut RenderContext,
) -> Result<String> {
    if !orelse.is_empty() {
        return Err(TranslateError::unsupported(Construct::LoopElse, position));
    }

    let name = assignment_target(target, position)?;
    let iterable = context.captured(iter)?;
    let mut writer = LineWriter::new(context);
    writer.line(&format!("For {} In {}", name, iterable));

    let inner = context.in_loop(LoopKind::For, |cx| cx.nested(|cx| render_body(body, cx)))?;
    writer.push_block(&inner);

    writer.line("Next");
    Ok(writer.finish())
}

impl Render for Expr {
    fn render(&self, context: &mut RenderContext) -> Result<String> {
        let literals = LiteralRenderer;

        match self {
            Expr::Str { value, .. } => Ok(literals.render_string(value)),
            Expr::Num { value, .. } => Ok(literals.render_number(value)),
            Expr::Constant { value, .. } => Ok(literals.render_literal(value)),
            Expr::Name { id, .. } => Ok(literals.render_name(id)),
            Expr::BinOp {
                left, op, right, ..
            } => {
                let left = context.captured(left.as_ref())?;
                let op = context.captured(op)?;
                let right = context.captured(right.as_ref())?;
                Ok(format!("({} {} {})", left, op, right))
            }
            Expr::UnaryOp { op, operand, .. } => {
                let op = context.captured(op)?;
                let operand = context.captured(operand.as_ref())?;
                Ok(format!("{} {}", op, operand))
            }
            Expr::BoolOp { op, values, .. } => {
                let op = context.captured(op)?;
                let values = context.captured_all(values)?;
                Ok(format!("({})", values.join(&format!(" {} ", op))))
            }
            Expr::Compare {
                left,
                ops,
                comparators,
                position,
            } => {
                let ([op], [right]) = (ops.as_slice(), comparators.as_slice()) else {
                    return Err(TranslateError::unsupported(
                        Construct::ChainedComparison,
                        *position,
                    ));
                };
                let left = context.captured(left.as_ref())?;
                let op = context.captured(op)?;
                let right = context.captured(right)?;
                Ok(format!("({} {} {})", left, op, right))
            }
            Expr::Attribute { value, attr, .. } => {
                let value = context.captured(value.as_ref())?;
                Ok(format!("{}.{}", value, attr))
            }
            Expr::Call {
                func,
                args,
                keywords,
                starargs,
                kwargs,
                position,
            } => {
                check_call_arguments(args, keywords, starargs, kwargs, *position)?;
                let func = context.captured(func.as_ref())?;
                let args = context.captured_all(args)?;
                Ok(format!("{}({})", func, args.join(", ")))
            }
            Expr::Subscript {
                value,
                slice,
                position,
            } => {
                let Slice::Index(index) = slice else {
                    return Err(TranslateError::unsupported(Construct::Slice, *position));
                };
                let value = context.captured(value.as_ref())?;
                let index = context.captured(index.as_ref())?;
                Ok(format!("{}[{}]", value, index))
            }
            Expr::List { elts, .. } | Expr::Tuple { elts, .. } => {
                let elements = context.captured_all(elts)?;
                Ok(format!("[{}]", elements.join(", ")))
            }
            Expr::Dict {
                keys,
                values,
                position,
            } => {
                let mut entries = Vec::with_capacity(values.len());
                for (key, value) in keys.iter().zip(values) {
                    let Some(key) = key else {
                        return Err(TranslateError::unsupported(
                            Construct::DictUnpacking,
                            *position,
                        ));
                    };
                    let key = context.captured(key)?;
                    let value = context.captured(value)?;
                    entries.push(format!("{}: {}", key, value));
                }
                Ok(format!("{{{}}}", entries.join(", ")))
            }
            Expr::Starred { position, .. } => Err(TranslateError::unsupported(
                Construct::StarredExpression,
                *position,
            )),
            Expr::Unknown(node) => context.unknown_node(node),
        }
    }
}

fn check_call_arguments(
    args: &[Expr],
    keywords: &[Keyword],
    starargs: &Option<Box<Expr>>,
    kwargs: &Option<Box<Expr>>,
    position: Position,
) -> Result<()> {
    if keywords.iter().any(|kw| kw.arg.is_some()) {
        return Err(TranslateError::unsupported(
            Construct::KeywordArguments,
            position,
        ));
    }
    if starargs.is_some() || args.iter().any(|arg| matches!(arg, Expr::Starred { .. })) {
        return Err(TranslateError::unsupported(Construct::StarArguments, position));
    }
    if kwargs.is_some() || !keywords.is_empty() {
        return Err(TranslateError::unsupported(
            Construct::DoubleStarArguments,
            position,
        ));
    }
    Ok(())
}

impl Render for Operator {
    fn render(&self, context: &mut RenderContext) -> Result<String> {
        let Operator::Unknown { kind, fields } = self else {
            return Ok(self.symbol().unwrap_or_default().to_string());
        };
        context.unknown_node(&UnknownNode {
            kind: kind.clone(),
            fields: fields.clone(),
            position: None,
        })
    }
}

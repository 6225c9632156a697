#[cfg(test)]
mod translation_tests {
    use crate::{
        Arguments, Construct, Expr, Keyword, Literal, Module, Operator, Position, ProgramRenderer,
        Render, RenderContext, Slice, Stmt, TranslateError, TranslateOptions, UnknownNode,
        UnknownNodePolicy,
    };

    // Helpers for building trees by hand
    fn at(line: u32, column: u32) -> Position {
        Position::new(line, column)
    }

    fn name(id: &str) -> Expr {
        Expr::Name {
            id: id.to_string(),
            position: at(1, 0),
        }
    }

    fn int(value: i64) -> Expr {
        Expr::Constant {
            value: Literal::Num(value.into()),
            position: at(1, 0),
        }
    }

    fn string(value: &str) -> Expr {
        Expr::Constant {
            value: Literal::Str(value.to_string()),
            position: at(1, 0),
        }
    }

    fn binop(left: Expr, op: Operator, right: Expr) -> Expr {
        Expr::BinOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
            position: at(1, 0),
        }
    }

    fn compare(left: Expr, op: Operator, right: Expr) -> Expr {
        Expr::Compare {
            left: Box::new(left),
            ops: vec![op],
            comparators: vec![right],
            position: at(1, 0),
        }
    }

    fn call(func: Expr, args: Vec<Expr>) -> Expr {
        Expr::Call {
            func: Box::new(func),
            args,
            keywords: vec![],
            starargs: None,
            kwargs: None,
            position: at(1, 0),
        }
    }

    fn expr_stmt(value: Expr) -> Stmt {
        Stmt::Expr {
            value,
            position: at(1, 0),
        }
    }

    fn print(args: Vec<Expr>) -> Stmt {
        expr_stmt(call(name("print"), args))
    }

    fn assign(target: Expr, value: Expr) -> Stmt {
        Stmt::Assign {
            targets: vec![target],
            value,
            position: at(1, 0),
        }
    }

    fn function(fn_name: &str, params: &[&str], body: Vec<Stmt>) -> Stmt {
        Stmt::FunctionDef {
            name: fn_name.to_string(),
            args: Arguments {
                params: params.iter().map(|p| p.to_string()).collect(),
                ..Arguments::default()
            },
            body,
            decorators: vec![],
            position: at(1, 0),
        }
    }

    fn module(body: Vec<Stmt>) -> Module {
        Module { body }
    }

    fn translate(body: Vec<Stmt>) -> Result<String, TranslateError> {
        crate::translate(&module(body))
    }

    fn render_expr(expr: &Expr) -> String {
        let mut context = RenderContext::default();
        expr.render(&mut context).unwrap()
    }

    #[test]
    fn test_assignment_of_binary_operation() {
        let output = translate(vec![assign(name("x"), binop(int(1), Operator::Add, int(2)))]).unwrap();
        assert_eq!(output, "x = (1 + 2)\n");
    }

    #[test]
    fn test_function_with_print() {
        let output = translate(vec![function("f", &["a", "b"], vec![print(vec![name("a")])])]).unwrap();
        assert_eq!(output, "Function f(a, b)\n    Print a\nEnd Function\n");
    }

    #[test]
    fn test_anonymous_function_name_is_empty() {
        let output = translate(vec![function("", &[], vec![Stmt::Pass { position: at(2, 4) }])]).unwrap();
        assert_eq!(output, "Function ()\nEnd Function\n");
    }

    #[test]
    fn test_name_remapping() {
        assert_eq!(render_expr(&name("True")), "true");
        assert_eq!(render_expr(&name("False")), "false");
        assert_eq!(render_expr(&name("None")), "invalid");
        assert_eq!(render_expr(&name("total")), "total");

        let constant = |value| Expr::Constant {
            value,
            position: at(1, 0),
        };
        assert_eq!(render_expr(&constant(Literal::Bool(true))), "true");
        assert_eq!(render_expr(&constant(Literal::Bool(false))), "false");
        assert_eq!(render_expr(&constant(Literal::None)), "invalid");
    }

    #[test]
    fn test_decorator_is_rejected_with_position() {
        let decorated = Stmt::FunctionDef {
            name: "cached".to_string(),
            args: Arguments::default(),
            body: vec![Stmt::Pass { position: at(4, 4) }],
            decorators: vec![name("memoize")],
            position: at(3, 0),
        };

        let err = translate(vec![decorated]).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Unsupported {
                construct: Construct::Decorators,
                position,
            } if position == at(3, 0)
        ));
        assert_eq!(err.to_string(), "Decorators are not supported at line 3, column 0");
    }

    #[test]
    fn test_keyword_argument_is_rejected() {
        let call = Expr::Call {
            func: Box::new(name("open")),
            args: vec![string("data.txt")],
            keywords: vec![Keyword {
                arg: Some("mode".to_string()),
                value: string("r"),
            }],
            starargs: None,
            kwargs: None,
            position: at(7, 4),
        };

        let err = translate(vec![expr_stmt(call)]).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Unsupported {
                construct: Construct::KeywordArguments,
                ..
            }
        ));
        assert_eq!(err.position(), Some(at(7, 4)));
    }

    #[test]
    fn test_star_arguments_are_rejected() {
        let starred = Expr::Call {
            func: Box::new(name("f")),
            args: vec![Expr::Starred {
                value: Box::new(name("rest")),
                position: at(1, 2),
            }],
            keywords: vec![],
            starargs: None,
            kwargs: None,
            position: at(1, 0),
        };
        let err = translate(vec![expr_stmt(starred)]).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Unsupported {
                construct: Construct::StarArguments,
                ..
            }
        ));

        let double_star = Expr::Call {
            func: Box::new(name("f")),
            args: vec![],
            keywords: vec![Keyword {
                arg: None,
                value: name("options"),
            }],
            starargs: None,
            kwargs: None,
            position: at(1, 0),
        };
        let err = translate(vec![expr_stmt(double_star)]).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Unsupported {
                construct: Construct::DoubleStarArguments,
                ..
            }
        ));

        let old_style = Expr::Call {
            func: Box::new(name("f")),
            args: vec![],
            keywords: vec![],
            starargs: None,
            kwargs: Some(Box::new(name("options"))),
            position: at(1, 0),
        };
        assert!(translate(vec![expr_stmt(old_style)]).is_err());
    }

    #[test]
    fn test_print_captures_are_independent() {
        let output = translate(vec![print(vec![
            name("a"),
            binop(name("b"), Operator::Add, name("c")),
        ])])
        .unwrap();
        assert_eq!(output, "Print a, (b + c)\n");
    }

    #[test]
    fn test_print_statement_forms() {
        let bare = Stmt::Print {
            values: vec![],
            newline: true,
            has_dest: false,
            position: at(1, 0),
        };
        let trailing_comma = Stmt::Print {
            values: vec![string("Loading"), name("dots")],
            newline: false,
            has_dest: false,
            position: at(2, 0),
        };
        let output = translate(vec![bare, trailing_comma]).unwrap();
        assert_eq!(output, "Print\nPrint \"Loading\", dots;\n");

        let redirected = Stmt::Print {
            values: vec![name("x")],
            newline: true,
            has_dest: true,
            position: at(3, 0),
        };
        let err = translate(vec![redirected]).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Unsupported {
                construct: Construct::PrintRedirection,
                ..
            }
        ));
    }

    #[test]
    fn test_nested_blocks_indentation() {
        let body = vec![function(
            "main",
            &[],
            vec![Stmt::While {
                test: compare(name("n"), Operator::Gt, int(0)),
                body: vec![
                    Stmt::If {
                        test: compare(binop(name("n"), Operator::Mod, int(2)), Operator::Eq, int(0)),
                        body: vec![print(vec![name("n")])],
                        orelse: vec![print(vec![string("odd")])],
                        position: at(3, 8),
                    },
                    assign(name("n"), binop(name("n"), Operator::Sub, int(1))),
                ],
                orelse: vec![],
                position: at(2, 4),
            }],
        )];

        let output = translate(body).unwrap();
        let expected = "\
Function main()
    While (n > 0)
        If ((n MOD 2) = 0)
            Print n
        Else
            Print \"odd\"
        End If
        n = (n - 1)
    End While
End Function
";
        assert_eq!(output, expected);

        let print_line = output.lines().find(|line| line.contains("Print n")).unwrap();
        assert!(print_line.starts_with(&" ".repeat(12)));
        assert!(!print_line.starts_with(&" ".repeat(13)));
    }

    #[test]
    fn test_assignment_shape_errors() {
        let chained = Stmt::Assign {
            targets: vec![name("a"), name("b")],
            value: int(1),
            position: at(5, 0),
        };
        let err = translate(vec![chained]).unwrap_err();
        assert!(matches!(err, TranslateError::Structural { .. }));
        assert_eq!(err.position(), Some(at(5, 0)));

        let destructuring = assign(
            Expr::Tuple {
                elts: vec![name("a"), name("b")],
                position: at(6, 0),
            },
            name("c"),
        );
        let err = translate(vec![destructuring]).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Unsupported {
                construct: Construct::DestructuringAssignment,
                ..
            }
        ));

        let attribute = assign(
            Expr::Attribute {
                value: Box::new(name("self")),
                attr: "x".to_string(),
                position: at(7, 0),
            },
            int(1),
        );
        let err = translate(vec![attribute]).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Unsupported {
                construct: Construct::ComplexAssignmentTarget,
                ..
            }
        ));
    }

    #[test]
    fn test_comparisons() {
        assert_eq!(render_expr(&compare(name("a"), Operator::LtE, name("b"))), "(a <= b)");
        assert_eq!(render_expr(&compare(name("a"), Operator::NotEq, name("b"))), "(a <> b)");

        let chained = Expr::Compare {
            left: Box::new(name("a")),
            ops: vec![Operator::Lt, Operator::Lt],
            comparators: vec![name("b"), name("c")],
            position: at(9, 3),
        };
        let mut context = RenderContext::default();
        let err = chained.render(&mut context).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Unsupported {
                construct: Construct::ChainedComparison,
                ..
            }
        ));
        assert_eq!(err.position(), Some(at(9, 3)));
    }

    #[test]
    fn test_boolean_and_unary_operations() {
        let chain = Expr::BoolOp {
            op: Operator::And,
            values: vec![name("a"), name("b"), name("c")],
            position: at(1, 0),
        };
        assert_eq!(render_expr(&chain), "(a AND b AND c)");

        let either = Expr::BoolOp {
            op: Operator::Or,
            values: vec![name("x"), compare(name("y"), Operator::Gt, int(1))],
            position: at(1, 0),
        };
        assert_eq!(render_expr(&either), "(x OR (y > 1))");

        let negation = Expr::UnaryOp {
            op: Operator::Not,
            operand: Box::new(name("done")),
            position: at(1, 0),
        };
        assert_eq!(render_expr(&negation), "NOT done");

        let minus = Expr::UnaryOp {
            op: Operator::USub,
            operand: Box::new(int(5)),
            position: at(1, 0),
        };
        assert_eq!(render_expr(&minus), "- 5");
    }

    #[test]
    fn test_collections_and_access() {
        let list = Expr::List {
            elts: vec![int(1), int(2)],
            position: at(1, 0),
        };
        let tuple = Expr::Tuple {
            elts: vec![int(1), int(2)],
            position: at(1, 0),
        };
        assert_eq!(render_expr(&list), "[1, 2]");
        assert_eq!(render_expr(&tuple), render_expr(&list));
        assert_eq!(
            render_expr(&Expr::List {
                elts: vec![],
                position: at(1, 0)
            }),
            "[]"
        );

        let dict = Expr::Dict {
            keys: vec![Some(string("b")), Some(string("a"))],
            values: vec![int(2), name("one")],
            position: at(1, 0),
        };
        assert_eq!(render_expr(&dict), "{\"b\": 2, \"a\": one}");

        let subscript = Expr::Subscript {
            value: Box::new(name("items")),
            slice: Slice::Index(Box::new(binop(name("i"), Operator::Add, int(1)))),
            position: at(1, 0),
        };
        assert_eq!(render_expr(&subscript), "items[(i + 1)]");

        let method = call(
            Expr::Attribute {
                value: Box::new(name("screen")),
                attr: "show".to_string(),
                position: at(1, 0),
            },
            vec![list.clone(), string("title")],
        );
        assert_eq!(render_expr(&method), "screen.show([1, 2], \"title\")");
    }

    #[test]
    fn test_slices_and_unpacking_are_rejected() {
        let slice = Expr::Subscript {
            value: Box::new(name("items")),
            slice: Slice::Range,
            position: at(2, 6),
        };
        let mut context = RenderContext::default();
        assert!(matches!(
            slice.render(&mut context),
            Err(TranslateError::Unsupported {
                construct: Construct::Slice,
                ..
            })
        ));

        let unpacking = Expr::Dict {
            keys: vec![None],
            values: vec![name("defaults")],
            position: at(2, 6),
        };
        assert!(matches!(
            unpacking.render(&mut context),
            Err(TranslateError::Unsupported {
                construct: Construct::DictUnpacking,
                ..
            })
        ));
    }

    #[test]
    fn test_string_literals() {
        assert_eq!(render_expr(&string("hello")), "\"hello\"");
        assert_eq!(render_expr(&string("")), "\"\"");
        assert_eq!(render_expr(&string("say \"hi\"")), "\"say \"\"hi\"\"\"");
        assert_eq!(render_expr(&string("a\nb")), "(\"a\" + Chr(10) + \"b\")");
        assert_eq!(render_expr(&string("\t")), "Chr(9)");
    }

    #[test]
    fn test_bare_string_statement_keeps_its_text() {
        let output = translate(vec![expr_stmt(string("  keep  me "))]).unwrap();
        assert_eq!(output, "\"  keep  me \"\n");
    }

    #[test]
    fn test_wide_integer_literal() {
        let wide: serde_json::Number = serde_json::from_str("123456789012345678901234567890").unwrap();
        let body = vec![assign(
            name("x"),
            Expr::Constant {
                value: Literal::Num(wide),
                position: at(1, 4),
            },
        )];
        assert_eq!(translate(body).unwrap(), "x = 123456789012345678901234567890\n");
    }

    #[test]
    fn test_unknown_statement_is_skipped_with_diagnostic() {
        let lambda = Stmt::Unknown(UnknownNode {
            kind: "With".to_string(),
            fields: vec!["body".to_string(), "items".to_string()],
            position: Some(at(2, 0)),
        });
        let body = module(vec![
            assign(name("a"), int(1)),
            lambda,
            assign(name("b"), int(2)),
        ]);

        let translation = ProgramRenderer::default().render(&body).unwrap();
        assert_eq!(translation.text, "a = 1\nb = 2\n");
        assert_eq!(translation.diagnostics.len(), 1);

        let diagnostic = &translation.diagnostics[0];
        assert_eq!(diagnostic.kind, "With");
        assert_eq!(diagnostic.position, Some(at(2, 0)));
        assert_eq!(
            diagnostic.to_string(),
            "Don't know what to do with a With node at line 2, column 0; it has these fields: [body, items]"
        );
    }

    #[test]
    fn test_unknown_kind_aborts_in_strict_mode() {
        let body = module(vec![Stmt::Unknown(UnknownNode {
            kind: "Try".to_string(),
            fields: vec!["body".to_string()],
            position: Some(at(8, 4)),
        })]);

        let options = TranslateOptions::new().with_unknown_nodes(UnknownNodePolicy::Abort);
        let err = ProgramRenderer::new(options).render(&body).unwrap_err();
        match err {
            TranslateError::UnknownNodeKind { kind, fields, position } => {
                assert_eq!(kind, "Try");
                assert_eq!(fields, vec!["body".to_string()]);
                assert_eq!(position, Some(at(8, 4)));
            }
            other => panic!("expected unknown node error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_operator_renders_empty() {
        let shifted = binop(
            name("a"),
            Operator::Unknown {
                kind: "LShift".to_string(),
                fields: vec![],
            },
            int(2),
        );
        let mut context = RenderContext::default();
        assert_eq!(shifted.render(&mut context).unwrap(), "(a  2)");
        assert_eq!(context.diagnostics().len(), 1);
        assert_eq!(context.diagnostics()[0].kind, "LShift");
    }

    #[test]
    fn test_if_else_and_elif() {
        let plain = Stmt::If {
            test: name("ready"),
            body: vec![print(vec![string("go")])],
            orelse: vec![],
            position: at(1, 0),
        };
        assert_eq!(translate(vec![plain]).unwrap(), "If ready\n    Print \"go\"\nEnd If\n");

        // `elif b:` yields an If at the column of the enclosing `if`
        let elif = Stmt::If {
            test: name("a"),
            body: vec![Stmt::Pass { position: at(2, 4) }],
            orelse: vec![Stmt::If {
                test: name("b"),
                body: vec![Stmt::Pass { position: at(4, 4) }],
                orelse: vec![],
                position: at(3, 0),
            }],
            position: at(1, 0),
        };
        let err = translate(vec![elif]).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Unsupported {
                construct: Construct::ElifChain,
                ..
            }
        ));
        assert_eq!(err.position(), Some(at(3, 0)));
    }

    #[test]
    fn test_if_nested_under_else() {
        let else_if = Stmt::If {
            test: name("a"),
            body: vec![assign(name("x"), int(1))],
            orelse: vec![Stmt::If {
                test: name("b"),
                body: vec![assign(name("y"), int(2))],
                orelse: vec![],
                position: at(4, 4),
            }],
            position: at(1, 0),
        };

        let expected = "\
If a
    x = 1
Else
    If b
        y = 2
    End If
End If
";
        assert_eq!(translate(vec![else_if]).unwrap(), expected);
    }

    #[test]
    fn test_for_loop_and_break() {
        let body = vec![Stmt::For {
            target: name("item"),
            iter: name("items"),
            body: vec![
                Stmt::If {
                    test: compare(name("item"), Operator::Eq, Expr::Constant {
                        value: Literal::None,
                        position: at(2, 15),
                    }),
                    body: vec![Stmt::Break { position: at(3, 12) }],
                    orelse: vec![],
                    position: at(2, 4),
                },
                print(vec![name("item")]),
            ],
            orelse: vec![],
            position: at(1, 0),
        }];

        let expected = "\
For item In items
    If (item = invalid)
        Exit For
    End If
    Print item
Next
";
        assert_eq!(translate(body).unwrap(), expected);

        let while_break = Stmt::While {
            test: name("True"),
            body: vec![Stmt::Break { position: at(2, 4) }],
            orelse: vec![],
            position: at(1, 0),
        };
        assert_eq!(translate(vec![while_break]).unwrap(), "While true\n    Exit While\nEnd While\n");
    }

    #[test]
    fn test_break_outside_loop() {
        let err = translate(vec![Stmt::Break { position: at(1, 0) }]).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::Unsupported {
                construct: Construct::BreakOutsideLoop,
                ..
            }
        ));

        // A function body does not see the loop around its definition
        let nested = Stmt::While {
            test: name("running"),
            body: vec![function("inner", &[], vec![Stmt::Break { position: at(3, 8) }])],
            orelse: vec![],
            position: at(1, 0),
        };
        let err = translate(vec![nested]).unwrap_err();
        assert_eq!(err.position(), Some(at(3, 8)));
    }

    #[test]
    fn test_loop_else_is_rejected() {
        let while_else = Stmt::While {
            test: name("x"),
            body: vec![Stmt::Pass { position: at(2, 4) }],
            orelse: vec![Stmt::Pass { position: at(4, 4) }],
            position: at(1, 0),
        };
        let for_else = Stmt::For {
            target: name("x"),
            iter: name("xs"),
            body: vec![Stmt::Pass { position: at(2, 4) }],
            orelse: vec![Stmt::Pass { position: at(4, 4) }],
            position: at(1, 0),
        };
        for stmt in [while_else, for_else] {
            assert!(matches!(
                translate(vec![stmt]),
                Err(TranslateError::Unsupported {
                    construct: Construct::LoopElse,
                    ..
                })
            ));
        }

        let destructuring_for = Stmt::For {
            target: Expr::Tuple {
                elts: vec![name("k"), name("v")],
                position: at(1, 4),
            },
            iter: name("pairs"),
            body: vec![Stmt::Pass { position: at(2, 4) }],
            orelse: vec![],
            position: at(1, 0),
        };
        assert!(matches!(
            translate(vec![destructuring_for]),
            Err(TranslateError::Unsupported {
                construct: Construct::DestructuringAssignment,
                ..
            })
        ));
    }

    #[test]
    fn test_function_extras() {
        let body = vec![function(
            "bump",
            &["count"],
            vec![
                expr_stmt(string("Increment and return the count.")),
                Stmt::AugAssign {
                    target: name("count"),
                    op: Operator::Add,
                    value: int(1),
                    position: at(3, 4),
                },
                Stmt::Return {
                    value: Some(name("count")),
                    position: at(4, 4),
                },
            ],
        )];

        let expected = "\
Function bump(count)
    \"Increment and return the count.\"
    count = (count + 1)
    Return count
End Function
";
        assert_eq!(translate(body).unwrap(), expected);

        let with_default = Stmt::FunctionDef {
            name: "greet".to_string(),
            args: Arguments {
                params: vec!["name".to_string()],
                default_count: 1,
                ..Arguments::default()
            },
            body: vec![Stmt::Return {
                value: None,
                position: at(2, 4),
            }],
            decorators: vec![],
            position: at(1, 0),
        };
        assert!(matches!(
            translate(vec![with_default]),
            Err(TranslateError::Unsupported {
                construct: Construct::ParameterDefaults,
                ..
            })
        ));
    }

    #[test]
    fn test_indent_width_option() {
        let body = module(vec![function("f", &[], vec![print(vec![int(1)])])]);
        let options = TranslateOptions::new().with_indent_width(2);
        let translation = ProgramRenderer::new(options).render(&body).unwrap();
        assert_eq!(translation.text, "Function f()\n  Print 1\nEnd Function\n");
    }

    #[test]
    fn test_depth_restored_after_error() {
        let failing = function(
            "f",
            &[],
            vec![Stmt::While {
                test: name("x"),
                body: vec![Stmt::Assign {
                    targets: vec![],
                    value: int(1),
                    position: at(3, 8),
                }],
                orelse: vec![],
                position: at(2, 4),
            }],
        );

        let mut context = RenderContext::default();
        assert!(failing.render(&mut context).is_err());
        assert_eq!(context.depth, 0);
        assert_eq!(context.innermost_loop(), None);
    }

    #[test]
    fn test_captured_all_preserves_order() {
        let mut context = RenderContext::default();
        context.indent_in();
        let values = context
            .captured_all(&[name("first"), int(2), string("third")])
            .unwrap();
        assert_eq!(values, vec!["first", "2", "\"third\""]);
        assert_eq!(context.depth, 1);
    }

    #[test]
    fn test_rendered_expressions_are_balanced() {
        let nested = call(
            name("f"),
            vec![
                Expr::Dict {
                    keys: vec![Some(int(1))],
                    values: vec![Expr::List {
                        elts: vec![binop(int(1), Operator::Mult, compare(name("a"), Operator::Lt, int(2)))],
                        position: at(1, 0),
                    }],
                    position: at(1, 0),
                },
                Expr::Subscript {
                    value: Box::new(name("grid")),
                    slice: Slice::Index(Box::new(Expr::UnaryOp {
                        op: Operator::USub,
                        operand: Box::new(int(1)),
                        position: at(1, 0),
                    })),
                    position: at(1, 0),
                },
            ],
        );

        let text = render_expr(&nested);
        for (open, close) in [('(', ')'), ('[', ']'), ('{', '}')] {
            let mut depth = 0i32;
            for c in text.chars() {
                if c == open {
                    depth += 1;
                } else if c == close {
                    depth -= 1;
                }
                assert!(depth >= 0, "unbalanced {} in {}", close, text);
            }
            assert_eq!(depth, 0, "unbalanced {} in {}", open, text);
        }
        assert_eq!(text, "f({1: [(1 * (a < 2))]}, grid[- 1])");
    }

    #[test]
    fn test_render_to_writes_completed_statements() {
        let body = module(vec![
            assign(name("a"), int(1)),
            Stmt::Assign {
                targets: vec![name("b"), name("c")],
                value: int(2),
                position: at(2, 0),
            },
        ]);

        let mut sink = Vec::new();
        let err = ProgramRenderer::default().render_to(&body, &mut sink).unwrap_err();
        assert!(matches!(err, TranslateError::Structural { .. }));
        assert_eq!(String::from_utf8(sink).unwrap(), "a = 1\n");
    }
}

//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language's constructs:
//! - Individual precedence levels fed directly with token fragments
//! - Statements: empty, declarations, assignments, control flow, blocks
//! - Type annotations
//! - Precedence and associativity of the full expression grammar
//! - Error reporting

use crate::{
    ast::{
        ast::Node,
        expressions::{BinaryOp, Expr, UnaryOp},
        statements::Stmt,
        types::{Primitive, Type},
    },
    errors::errors::{Error, ErrorImpl, ErrorKind},
    lexer::lexer::tokenize,
};

use super::{
    expr::{parse_comparison_expr, parse_expr, parse_product_expr, parse_subscript_expr, parse_terminal_expr},
    parser::{parse, Parser, MAX_NESTING},
    stmt::parse_stmt,
    types::parse_type,
};

fn parse_source(source: &str) -> Result<Vec<Stmt>, Error> {
    let tokens = tokenize(source, "test.src").unwrap();
    parse(&tokens)
}

fn render(source: &str) -> Vec<String> {
    parse_source(source)
        .unwrap()
        .iter()
        .map(|stmt| stmt.to_string())
        .collect()
}

fn render_expr(source: &str) -> String {
    let tokens = tokenize(source, "test.src").unwrap();
    let mut parser = Parser::new(&tokens);
    let expr = parse_expr(&mut parser).unwrap();
    assert!(!parser.has_tokens(), "expression did not consume all tokens");
    expr.to_string()
}

fn parse_error(source: &str) -> Error {
    parse_source(source).unwrap_err()
}

#[test]
fn test_terminal_integer() {
    let tokens = tokenize("123", "test.src").unwrap();
    let mut parser = Parser::new(&tokens);

    match parse_terminal_expr(&mut parser).unwrap() {
        Expr::IntegerLiteral(expr) => assert_eq!(expr.value, "123"),
        other => panic!("expected integer, got {}", other),
    }
}

#[test]
fn test_terminal_variable() {
    let tokens = tokenize("abc", "test.src").unwrap();
    let mut parser = Parser::new(&tokens);

    match parse_terminal_expr(&mut parser).unwrap() {
        Expr::VariableReference(expr) => assert_eq!(expr.value, "abc"),
        other => panic!("expected variable, got {}", other),
    }
}

#[test]
fn test_terminal_brackets() {
    let tokens = tokenize("(123)", "test.src").unwrap();
    let mut parser = Parser::new(&tokens);

    assert!(matches!(
        parse_terminal_expr(&mut parser).unwrap(),
        Expr::IntegerLiteral(_)
    ));
    assert!(!parser.has_tokens());
}

#[test]
fn test_product_times_and_divide() {
    for (source, expected) in [("123 * 456", BinaryOp::Mul), ("123 / 456", BinaryOp::Div)] {
        let tokens = tokenize(source, "test.src").unwrap();
        let mut parser = Parser::new(&tokens);

        match parse_product_expr(&mut parser).unwrap() {
            Expr::BinaryOperator(expr) => assert_eq!(expr.operator, expected),
            other => panic!("expected binary operator for {}, got {}", source, other),
        }
    }
}

#[test]
fn test_subscript_fragment() {
    let tokens = tokenize("abc[123]", "test.src").unwrap();
    let mut parser = Parser::new(&tokens);

    let Expr::Subscript(subscript) = parse_subscript_expr(&mut parser).unwrap() else {
        panic!("expected subscript");
    };
    assert!(matches!(&*subscript.base, Expr::VariableReference(base) if base.value == "abc"));
    assert!(matches!(&*subscript.index, Expr::IntegerLiteral(index) if index.value == "123"));
}

#[test]
fn test_comparison_fragment() {
    let tokens = tokenize("a < b", "test.src").unwrap();
    let mut parser = Parser::new(&tokens);

    let expr = parse_comparison_expr(&mut parser).unwrap();
    assert_eq!(expr.to_string(), "BinaryOperator[LessThan, a, b]");
}

#[test]
fn test_assignment_statement() {
    let stmts = parse_source("abc = 123;").unwrap();
    assert_eq!(stmts.len(), 1);

    let Stmt::Assignment(assignment) = &stmts[0] else {
        panic!("expected assignment, got {}", stmts[0]);
    };
    assert!(matches!(&assignment.assignee, Expr::VariableReference(var) if var.value == "abc"));
    assert!(matches!(&assignment.value, Expr::IntegerLiteral(int) if int.value == "123"));
}

#[test]
fn test_assignment_location_is_the_operator() {
    let stmts = parse_source("abc\n=\n123;").unwrap();
    assert_eq!(stmts[0].get_location().line, 2);
}

#[test]
fn test_assignment_to_complex_lvalues() {
    assert_eq!(
        render("*p = xs[i + 1];"),
        vec!["Assignment[UnaryOperator[Dereference, p], Subscript[xs, BinaryOperator[Add, i, 1]]]"]
    );
}

#[test]
fn test_expression_statement() {
    assert_eq!(
        render("f;\n1 + 2;"),
        vec![
            "ExpressionStatement[f]",
            "ExpressionStatement[BinaryOperator[Add, 1, 2]]"
        ]
    );
}

#[test]
fn test_empty_statement() {
    let stmts = parse_source(";\n;").unwrap();

    assert_eq!(stmts.len(), 2);
    assert!(matches!(stmts[0], Stmt::Empty(_)));
    assert_eq!(stmts[1].get_location().line, 2);
}

#[test]
fn test_parse_empty_input() {
    assert!(parse_source("").unwrap().is_empty());
    assert!(parse(&[]).unwrap().is_empty());
}

#[test]
fn test_declarations() {
    assert_eq!(
        render("var x int; var c char; var xs array(10) of int; var p ptr to char;"),
        vec![
            "Declaration[x, int]",
            "Declaration[c, char]",
            "Declaration[xs, Array[10, int]]",
            "Declaration[p, Pointer[char]]",
        ]
    );
}

#[test]
fn test_nested_and_grouped_types() {
    assert_eq!(
        render("var m array(3) of (array(4) of ptr to ptr to int);"),
        vec!["Declaration[m, Array[3, Array[4, Pointer[Pointer[int]]]]]"]
    );
}

#[test]
fn test_declaration_fields_and_size() {
    let stmts = parse_source("\nvar grid array(4) of array(2) of char;").unwrap();

    let Stmt::Declaration(decl) = &stmts[0] else {
        panic!("expected declaration");
    };
    assert_eq!(decl.identifier, "grid");
    assert_eq!(decl.location.line, 2);
    assert_eq!(decl.explicit_type.size(), 8);

    let Type::Array(array) = &decl.explicit_type else {
        panic!("expected array type");
    };
    assert_eq!(array.length, 4);
}

#[test]
fn test_parse_type_directly() {
    let tokens = tokenize("(char)", "test.src").unwrap();
    let mut parser = Parser::new(&tokens);

    let ty = parse_type(&mut parser).unwrap();
    assert!(matches!(ty, Type::Primitive(ref p) if p.primitive == Primitive::Char));
    assert_eq!(ty.size(), 1);
}

#[test]
fn test_if_without_else_gets_empty_else() {
    let stmts = parse_source("if x y = 1;").unwrap();

    let Stmt::If(if_stmt) = &stmts[0] else {
        panic!("expected if");
    };
    assert!(matches!(*if_stmt.else_body, Stmt::Empty(_)));
    assert_eq!(stmts[0].to_string(), "If[x, Assignment[y, 1], Empty[]]");
}

#[test]
fn test_if_else() {
    assert_eq!(
        render("if a == b { x = 1; } else x = 2;"),
        vec!["If[BinaryOperator[Equal, a, b], Block[Assignment[x, 1]], Assignment[x, 2]]"]
    );
}

#[test]
fn test_dangling_else_binds_to_nearest_if() {
    let stmts = parse_source("if a if b s1; else s2;").unwrap();
    assert_eq!(stmts.len(), 1);

    let Stmt::If(outer) = &stmts[0] else {
        panic!("expected if");
    };
    assert!(matches!(*outer.else_body, Stmt::Empty(_)));

    let Stmt::If(inner) = &*outer.then_body else {
        panic!("expected nested if");
    };
    assert_eq!(inner.else_body.to_string(), "ExpressionStatement[s2]");
}

#[test]
fn test_while() {
    assert_eq!(
        render("while i < 10 { i = i + 1; }"),
        vec!["While[BinaryOperator[LessThan, i, 10], Block[Assignment[i, BinaryOperator[Add, i, 1]]]]"]
    );
    assert_eq!(render("while x;"), vec!["While[x, Empty[]]"]);
}

#[test]
fn test_blocks() {
    assert_eq!(render("{}"), vec!["Block[]"]);
    assert_eq!(
        render("{ var x int; { x = 1; } ; }"),
        vec!["Block[Declaration[x, int], Block[Assignment[x, 1]], Empty[]]"]
    );
}

#[test]
fn test_statement_locations() {
    let stmts = parse_source("if x\n;\nwhile y\n;\n{\n}").unwrap();

    assert_eq!(stmts[0].get_location().line, 1);
    assert_eq!(stmts[1].get_location().line, 3);
    assert_eq!(stmts[2].get_location().line, 5);
}

#[test]
fn test_precedence_product_over_sum() {
    assert_eq!(render_expr("1 + 2 * 3"), "BinaryOperator[Add, 1, BinaryOperator[Mul, 2, 3]]");
    assert_eq!(render_expr("1 * 2 + 3"), "BinaryOperator[Add, BinaryOperator[Mul, 1, 2], 3]");
}

#[test]
fn test_left_associativity() {
    assert_eq!(render_expr("1 - 2 - 3"), "BinaryOperator[Sub, BinaryOperator[Sub, 1, 2], 3]");
    assert_eq!(render_expr("8 / 4 / 2"), "BinaryOperator[Div, BinaryOperator[Div, 8, 4], 2]");
    assert_eq!(
        render_expr("a == b != c"),
        "BinaryOperator[NotEqual, BinaryOperator[Equal, a, b], c]"
    );
}

#[test]
fn test_comparison_binds_tighter_than_equality() {
    assert_eq!(
        render_expr("a < b == c > d"),
        "BinaryOperator[Equal, BinaryOperator[LessThan, a, b], BinaryOperator[GreaterThan, c, d]]"
    );
    assert_eq!(
        render_expr("a + 1 > b * 2"),
        "BinaryOperator[GreaterThan, BinaryOperator[Add, a, 1], BinaryOperator[Mul, b, 2]]"
    );
}

#[test]
fn test_chained_comparison_is_rejected() {
    let error = parse_error("a < b < c;");
    assert_eq!(error.to_string(), "[test.src:1] expected ';', got '<'");
}

#[test]
fn test_chained_subscripts() {
    assert_eq!(render_expr("m[1][2]"), "Subscript[Subscript[m, 1], 2]");
    assert_eq!(render_expr("a[b[0]]"), "Subscript[a, Subscript[b, 0]]");
}

#[test]
fn test_subscript_binds_tighter_than_product() {
    assert_eq!(
        render_expr("a[0] * b[1]"),
        "BinaryOperator[Mul, Subscript[a, 0], Subscript[b, 1]]"
    );
}

#[test]
fn test_unary_operators_stack() {
    assert_eq!(render_expr("&*x"), "UnaryOperator[AddressOf, UnaryOperator[Dereference, x]]");
    assert_eq!(render_expr("--1"), "UnaryOperator[Negate, UnaryOperator[Negate, 1]]");
}

#[test]
fn test_unary_binds_tighter_than_binary() {
    assert_eq!(
        render_expr("-a * b"),
        "BinaryOperator[Mul, UnaryOperator[Negate, a], b]"
    );
    assert_eq!(
        render_expr("a - -b"),
        "BinaryOperator[Sub, a, UnaryOperator[Negate, b]]"
    );
    assert_eq!(
        render_expr("*p + 1"),
        "BinaryOperator[Add, UnaryOperator[Dereference, p], 1]"
    );
}

#[test]
fn test_subscript_applies_to_prefixed_terminal() {
    // The indexing loop lives in `subscript`, above `terminal`, so it wraps
    // whatever terminal was parsed, prefixed or not.
    assert_eq!(render_expr("&x[0]"), "Subscript[UnaryOperator[AddressOf, x], 0]");
    assert_eq!(render_expr("&(x[0])"), "UnaryOperator[AddressOf, Subscript[x, 0]]");
}

#[test]
fn test_unary_operator_kinds() {
    let tokens = tokenize("-x", "test.src").unwrap();
    let mut parser = Parser::new(&tokens);

    let Expr::UnaryOperator(prefix) = parse_expr(&mut parser).unwrap() else {
        panic!("expected unary operator");
    };
    assert_eq!(prefix.operator, UnaryOp::Negate);
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(render_expr("(1 + 2) * 3"), "BinaryOperator[Mul, BinaryOperator[Add, 1, 2], 3]");
    assert_eq!(render_expr("((a))"), "a");
}

#[test]
fn test_binary_location_is_left_operand() {
    let tokens = tokenize("a\n+\nb", "test.src").unwrap();
    let mut parser = Parser::new(&tokens);

    let expr = parse_expr(&mut parser).unwrap();
    assert_eq!(expr.get_location().line, 1);
}

#[test]
fn test_missing_type_error() {
    let error = parse_error("var x ;");

    assert_eq!(error.get_kind(), ErrorKind::Parse);
    assert_eq!(error.get_location().line, 1);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedToken {
            token: "';'".to_string()
        }
    );
    assert_eq!(error.to_string(), "[test.src:1] unexpected ';'");
}

#[test]
fn test_missing_type_error_location() {
    let error = parse_error("var x\n\n;");
    assert_eq!(error.get_location().line, 3);
}

#[test]
fn test_expected_token_error() {
    let error = parse_error("var 1 int;");
    assert_eq!(error.to_string(), "[test.src:1] expected identifier, got '1'");

    let error = parse_error("var p ptr char;");
    assert_eq!(error.to_string(), "[test.src:1] expected 'to', got 'char'");

    let error = parse_error("x = 1 }");
    assert_eq!(error.to_string(), "[test.src:1] expected ';', got '}'");
}

#[test]
fn test_unexpected_end_of_input() {
    let error = parse_error("x = 1");
    assert_eq!(
        error.to_string(),
        "[test.src:1] unexpected end of input after '1', expected ';'"
    );

    let error = parse_error("abc");
    assert_eq!(error.to_string(), "[test.src:1] unexpected end of input after 'abc'");

    let error = parse_error("if x");
    assert_eq!(error.to_string(), "[test.src:1] unexpected end of input after 'x'");

    let error = parse_error("x = \n 1 +");
    assert_eq!(error.to_string(), "[test.src:2] unexpected end of input after '+'");

    let error = parse_error("{ x;");
    assert_eq!(
        error.to_string(),
        "[test.src:1] unexpected end of input after ';', expected '}'"
    );
}

#[test]
fn test_unexpected_token() {
    let error = parse_error("} ");
    assert_eq!(error.to_string(), "[test.src:1] unexpected '}'");

    let error = parse_error("x = !y;");
    assert_eq!(error.to_string(), "[test.src:1] unexpected '!'");

    let error = parse_error("else;");
    assert_eq!(error.to_string(), "[test.src:1] unexpected 'else'");
}

#[test]
fn test_invalid_array_length() {
    let error = parse_error("var xs array(99999999999) of int;");

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::InvalidArrayLength {
            token: "99999999999".to_string()
        }
    );
    assert_eq!(
        error.to_string(),
        "[test.src:1] invalid static array size '99999999999'"
    );
}

#[test]
fn test_array_length_bounds() {
    assert_eq!(
        render("var xs array(0) of int; var ys array(4294967295) of char;"),
        vec!["Declaration[xs, Array[0, int]]", "Declaration[ys, Array[4294967295, char]]"]
    );
}

#[test]
fn test_error_stops_at_first_failure() {
    let error = parse_error("x = 1;\n} ;\ny = ;");
    assert_eq!(error.get_location().line, 2);
}

#[test]
fn test_stmt_on_empty_tokens() {
    let mut parser = Parser::new(&[]);
    let error = parse_stmt(&mut parser).unwrap_err();

    assert_eq!(
        error.get_impl(),
        &ErrorImpl::UnexpectedEndOfInput {
            after: "start of input".to_string()
        }
    );
}

fn assert_nesting_error(source: &str) {
    let error = parse_error(source);
    assert_eq!(
        error.get_impl(),
        &ErrorImpl::NestingTooDeep { limit: MAX_NESTING }
    );
    assert_eq!(error.get_kind(), ErrorKind::Parse);
}

#[test]
fn test_deep_parentheses_are_an_error() {
    assert_nesting_error(&"(".repeat(100_000));
    assert_nesting_error(&format!("{}x{};", "(".repeat(100_000), ")".repeat(100_000)));
}

#[test]
fn test_parentheses_up_to_the_limit() {
    // The statement and the outer expression take two levels.
    let depth = MAX_NESTING - 2;
    assert_eq!(
        render(&format!("{}x{};", "(".repeat(depth), ")".repeat(depth))),
        vec!["ExpressionStatement[x]"]
    );
    assert_nesting_error(&format!("{}x{};", "(".repeat(depth + 1), ")".repeat(depth + 1)));
}

#[test]
fn test_deep_prefix_operators_are_an_error() {
    assert_nesting_error(&format!("{}x;", "-".repeat(20_000)));
    assert_nesting_error(&format!("{}p;", "*&".repeat(20_000)));
}

#[test]
fn test_deep_statements_are_an_error() {
    assert_nesting_error(&"{".repeat(100_000));
    assert_nesting_error(&format!("{}x;", "if x ".repeat(100_000)));
    assert_nesting_error(&format!("{}x;", "while x ".repeat(100_000)));
}

#[test]
fn test_deep_types_are_an_error() {
    assert_nesting_error(&format!("var p {}int;", "ptr to ".repeat(100_000)));
    assert_nesting_error(&format!("var p {}int;", "(".repeat(100_000)));
}

#[test]
fn test_long_operator_chains_are_bounded() {
    let sum = |terms: usize| format!("{};", vec!["1"; terms].join(" + "));

    assert_eq!(parse_source(&sum(MAX_NESTING - 2)).unwrap().len(), 1);
    assert_nesting_error(&sum(100_000));
    assert_nesting_error(&format!("m{};", "[0]".repeat(100_000)));
}

#[test]
fn test_nesting_resets_between_statements() {
    let nested = format!("{}x{};", "(".repeat(100), ")".repeat(100));
    let source = nested.repeat(50);

    assert_eq!(parse_source(&source).unwrap().len(), 50);
}

#[test]
fn test_nesting_error_location() {
    let error = parse_error(&format!("x;\n{}", "(".repeat(1_000)));
    assert_eq!(error.get_location().line, 2);
}

use super::*;

fn parse(source: &str) -> (Expr, Diagnostics) {
    let mut parser = Parser::new(Lexer::new(source));
    let expr = parser.parse();
    (expr, parser.into_diagnostics())
}

fn parse_ok(source: &str) -> String {
    let (expr, diagnostics) = parse(source);
    assert!(diagnostics.is_empty(), "unexpected diagnostics: {}", diagnostics);
    format!("{:?}", expr)
}

mod precedence {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    pub fn test_factor_binds_tighter_than_term() {
        assert_eq!(parse_ok("1 + 2 * 3"), "(1 + (2 * 3))");
        assert_eq!(parse_ok("1 * 2 - 3 / 4"), "((1 * 2) - (3 / 4))");
    }

    #[test]
    pub fn test_left_associative() {
        assert_eq!(parse_ok("1 - 2 - 3"), "((1 - 2) - 3)");
        assert_eq!(parse_ok("8 / 4 / 2"), "((8 / 4) / 2)");
    }

    #[test]
    pub fn test_unary() {
        assert_eq!(parse_ok("-5 * 2"), "((-5) * 2)");
        assert_eq!(parse_ok("- + -1"), "(-(+(-1)))");
        assert_eq!(parse_ok("1 - -1"), "(1 - (-1))");
    }

    #[test]
    pub fn test_parentheses_produce_no_node() {
        assert_eq!(parse_ok("((1))"), "1");
        assert_eq!(parse_ok("(1 + 2) * 3"), "((1 + 2) * 3)");
    }
}

mod literals {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    pub fn test_literal_tokens_carry_values() {
        let (expr, _) = parse("true");

        match expr {
            Expr::Literal(token) => assert_eq!(token.value(), Some(crate::compiler::value::Value::Boolean(true))),
            other => panic!("expected literal, got {:?}", other),
        }
    }

    #[test]
    pub fn test_out_of_range_number() {
        let (expr, diagnostics) = parse("4294967296");

        assert_eq!(expr.kind(), crate::compiler::ast::syntax::SyntaxKind::Literal);
        assert_eq!(diagnostics.messages(), &[String::from("[1:1] Error at '4294967296': Number literal '4294967296' is not a valid int")]);
    }

    #[test]
    pub fn test_minimum_int_literal() {
        let (expr, diagnostics) = parse("-2147483648");

        assert!(diagnostics.is_empty(), "unexpected diagnostics: {}", diagnostics);
        match expr {
            Expr::Literal(token) => {
                assert_eq!(token.source(), "-2147483648");
                assert_eq!(token.value(), Some(crate::compiler::value::Value::Int(i32::MIN)));
            },
            other => panic!("expected literal, got {:?}", other),
        }
    }

    #[test]
    pub fn test_minus_only_folds_out_of_range_numbers() {
        assert_eq!(parse_ok("-5"), "(-5)");
        assert_eq!(parse_ok("--2147483648"), "(--2147483648)");
        assert_eq!(parse_ok("1 - -2147483648"), "(1 - -2147483648)");
    }

    #[test]
    pub fn test_below_minimum_int_literal() {
        let (_, diagnostics) = parse("-2147483649");
        assert_eq!(diagnostics.messages(), &[String::from("[1:2] Error at '2147483649': Number literal '2147483649' is not a valid int")]);

        let (_, diagnostics) = parse("1 - 2147483648");
        assert_eq!(diagnostics.len(), 1);
    }
}

mod errors {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    pub fn test_missing_operand() {
        let (expr, diagnostics) = parse("1 +");

        assert_eq!(format!("{:?}", expr), "(1 + Error)");
        assert_eq!(diagnostics.messages(), &[String::from("[1:4] Error at end of input: Expected expression")]);
    }

    #[test]
    pub fn test_unclosed_parenthesis() {
        let (_, diagnostics) = parse("(1 + 2");
        assert_eq!(diagnostics.messages(), &[String::from("[1:7] Error at end of input: Expected ')' after expression")]);
    }

    #[test]
    pub fn test_trailing_input() {
        let (_, diagnostics) = parse("1 2");
        assert_eq!(diagnostics.messages(), &[String::from("[1:3] Error at '2': Expected end of input")]);
    }

    #[test]
    pub fn test_identifiers_are_not_expressions() {
        let (expr, diagnostics) = parse("x");

        assert_eq!(expr, Expr::Error);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    pub fn test_panic_mode_reports_once() {
        let (_, diagnostics) = parse("(((");
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    pub fn test_lexer_error() {
        let (_, diagnostics) = parse("1 # 2");

        assert_eq!(diagnostics.messages()[0], "[1:3] Unexpected character '#'");
        assert!(!diagnostics.is_empty());
    }
}

mod nesting {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assert_too_deep(source: &str, expected: &str) {
        let (_, diagnostics) = parse(source);
        assert_eq!(diagnostics.messages(), &[String::from(expected)]);
    }

    #[test]
    pub fn test_deep_unary_chain() {
        let source = format!("{}1", "-".repeat(10_000));
        assert_too_deep(&source, "[1:258] Error at '-': Expression is nested too deeply");
    }

    #[test]
    pub fn test_deep_parentheses() {
        let source = format!("{}1{}", "(".repeat(300), ")".repeat(300));
        assert_too_deep(&source, "[1:258] Error at '(': Expression is nested too deeply");
    }

    #[test]
    pub fn test_long_operator_chain() {
        let source = format!("1{}", "+1".repeat(10_000));
        assert_too_deep(&source, "[1:515] Error at '1': Expression is nested too deeply");
    }

    #[test]
    pub fn test_nesting_within_limit() {
        let (_, diagnostics) = parse(&format!("{}1", "-".repeat(200)));
        assert!(diagnostics.is_empty(), "unexpected diagnostics: {}", diagnostics);

        let (expr, diagnostics) = parse(&format!("{}1{}", "(".repeat(200), ")".repeat(200)));
        assert!(diagnostics.is_empty(), "unexpected diagnostics: {}", diagnostics);
        assert_eq!(format!("{:?}", expr), "1");
    }
}

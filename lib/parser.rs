use std::rc::Rc;

use crate::{
    ast::{Block, Expression, Identifier, InfixOperator, PrefixOperator, Program, Statement},
    binding_power::BindingPower,
    error::SyntaxError,
    position::Range,
    token::{Token, TokenKind, TokenSource, BRANCH, ELSE, FALSE, FUNCTION, RETURN, TABLE_MARKER, TRUE},
};

type Result<T> = std::result::Result<T, SyntaxError>;

pub struct Parser<S: TokenSource> {
    source: S,
}

impl<S: TokenSource> Parser<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Consumes the whole token stream. Fails on the first syntax error.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn parse_source(&mut self) -> Result<Program> {
        let mut statements: Vec<Statement> = Vec::new();
        while !self.source.is_end() {
            statements.push(self.parse_statement()?);
        }

        let range = match (statements.first(), statements.last()) {
            (Some(first), Some(last)) => Range::span(first.range(), last.range()),
            _ => self.current().range,
        };
        tracing::trace!(statements = statements.len(), "parsed program");

        Ok(Program { statements, range })
    }

    fn current(&self) -> &Token {
        self.source.read()
    }

    fn advance(&mut self) -> &mut Self {
        self.source.advance();
        self
    }

    fn parse_statement(&mut self) -> Result<Statement> {
        let token = self.current().clone();
        let statement = match token.kind {
            TokenKind::Keyword if token.value == BRANCH => self.parse_branch_statement()?,
            TokenKind::Keyword if token.value == RETURN => self.parse_return_statement()?,
            TokenKind::Keyword if token.value == ELSE => {
                return Err(SyntaxError::BadKeyword {
                    received: token.value,
                    expected: "statement".to_string(),
                    range: token.range,
                })
            }
            _ => Statement::Expression(self.parse_expression(BindingPower::LOWEST)?),
        };

        if self.current().is(TokenKind::Separator, ";") {
            self.advance();
        }

        Ok(statement)
    }

    fn parse_branch_statement(&mut self) -> Result<Statement> {
        let keyword = self.current().range;
        self.advance();

        let predicate = self.parse_expression(BindingPower::LOWEST)?;
        let consequence = self.parse_block()?;

        let alternative = if self.current().is(TokenKind::Keyword, ELSE) {
            self.advance();
            Some(self.parse_block()?)
        } else {
            None
        };

        let last = alternative.as_ref().unwrap_or(&consequence).range;

        Ok(Statement::Branch {
            predicate,
            consequence,
            alternative,
            range: Range::span(keyword, last),
        })
    }

    fn parse_return_statement(&mut self) -> Result<Statement> {
        let keyword = self.current().range;
        self.advance();

        let expression = self.parse_expression(BindingPower::LOWEST)?;
        let range = Range::span(keyword, expression.range());

        Ok(Statement::Return { expression, range })
    }

    fn parse_block(&mut self) -> Result<Block> {
        let open = self.expect(TokenKind::BlockDelimiter, "{")?;

        let mut statements: Vec<Statement> = Vec::new();
        while !self.current().is(TokenKind::BlockDelimiter, "}") {
            if self.source.is_end() {
                return Err(self.delimiter_error(TokenKind::BlockDelimiter, "}"));
            }
            statements.push(self.parse_statement()?);
        }
        let close = self.current().range;
        self.advance();

        Ok(Block {
            statements,
            range: Range::span(open.range, close),
        })
    }

    /// Pratt loop: keep extending the accumulated expression while the
    /// current token binds tighter than `threshold` allows.
    fn parse_expression(&mut self, threshold: BindingPower) -> Result<Expression> {
        let mut expression = self.parse_start()?;

        loop {
            let token = self.current().clone();
            if BindingPower::of(&token).left <= threshold.right {
                break;
            }

            expression = match (token.kind, token.value.as_str()) {
                (TokenKind::GroupDelimiter, "(") if expression.is_callable() => {
                    self.parse_call_expression(expression)?
                }
                (TokenKind::GroupDelimiter, _) => break,
                (TokenKind::Operator, "=") => self.parse_assignment_expression(expression)?,
                _ => self.parse_infix_expression(expression)?,
            };
        }

        Ok(expression)
    }

    fn parse_start(&mut self) -> Result<Expression> {
        let token = self.current().clone();

        match token.kind {
            TokenKind::Number => {
                self.advance();
                self.parse_number_literal(token)
            }
            TokenKind::Boolean => {
                self.advance();
                self.parse_boolean_literal(token)
            }
            TokenKind::String => {
                self.advance();
                Ok(Expression::String {
                    value: token.value,
                    range: token.range,
                })
            }
            TokenKind::Identifier => {
                self.advance();
                Ok(Expression::Identifier(Identifier::new(token.value, token.range)))
            }
            TokenKind::Operator => self.parse_prefix_expression(token),
            TokenKind::Keyword if token.value == FUNCTION => self.parse_function_literal(),
            TokenKind::GroupDelimiter if token.value == "(" => self.parse_grouped_expression(),
            TokenKind::ListDelimiter if token.value == "[" => self.parse_list_or_table(),
            kind => Err(SyntaxError::BadExpression {
                received: kind.to_string(),
                expected: "expression".to_string(),
                range: token.range,
            }),
        }
    }

    fn parse_number_literal(&mut self, token: Token) -> Result<Expression> {
        match token.value.parse::<f64>() {
            Ok(value) => Ok(Expression::Number {
                value,
                range: token.range,
            }),
            Err(_) => Err(SyntaxError::BadNumberLiteral {
                received: token.value,
                expected: "number".to_string(),
                range: token.range,
            }),
        }
    }

    fn parse_boolean_literal(&mut self, token: Token) -> Result<Expression> {
        let value = match token.value.as_str() {
            TRUE => true,
            FALSE => false,
            _ => {
                return Err(SyntaxError::BadBooleanLiteral {
                    received: token.value.clone(),
                    expected: format!("`{TRUE}` or `{FALSE}`"),
                    range: token.range,
                })
            }
        };
        Ok(Expression::Boolean {
            value,
            range: token.range,
        })
    }

    fn parse_prefix_expression(&mut self, token: Token) -> Result<Expression> {
        let operator =
            PrefixOperator::from_lexeme(&token.value).ok_or_else(|| SyntaxError::BadPrefix {
                received: token.value.clone(),
                expected: "`+`, `-` or `!`".to_string(),
                range: token.range,
            })?;
        self.advance();

        let operand = self.parse_expression(BindingPower::PREFIX)?;
        let range = Range::span(token.range, operand.range());

        Ok(Expression::Prefix {
            operator,
            operand: Box::new(operand),
            range,
        })
    }

    fn parse_infix_expression(&mut self, left: Expression) -> Result<Expression> {
        let token = self.current().clone();
        let operator =
            InfixOperator::from_lexeme(&token.value).ok_or_else(|| SyntaxError::BadInfix {
                received: token.value.clone(),
                expected: "infix operator".to_string(),
                range: token.range,
            })?;
        self.advance();

        let right = self.parse_expression(BindingPower::of(&token))?;
        let range = Range::span(left.range(), right.range());

        Ok(Expression::Infix {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            range,
        })
    }

    fn parse_assignment_expression(&mut self, left: Expression) -> Result<Expression> {
        let left = match left {
            Expression::Identifier(identifier) => identifier,
            other => {
                return Err(SyntaxError::BadAssignmentTarget {
                    received: other.to_string(),
                    expected: "identifier".to_string(),
                    range: other.range(),
                })
            }
        };
        self.advance();

        let right = self.parse_expression(BindingPower::ASSIGNMENT)?;
        let range = Range::span(left.range, right.range());

        Ok(Expression::Assignment {
            left,
            right: Box::new(right),
            range,
        })
    }

    fn parse_call_expression(&mut self, function: Expression) -> Result<Expression> {
        self.advance();

        let (arguments, close) = self.parse_sequence(TokenKind::GroupDelimiter, ")", |parser| {
            parser.parse_expression(BindingPower::LOWEST)
        })?;
        let range = Range::span(function.range(), close);

        Ok(Expression::Call {
            function: Box::new(function),
            arguments,
            range,
        })
    }

    fn parse_grouped_expression(&mut self) -> Result<Expression> {
        let open = self.current().range;
        self.advance();

        let expression = self.parse_expression(BindingPower::LOWEST)?;
        let close = self.expect(TokenKind::GroupDelimiter, ")")?;

        Ok(expression.with_range(Range::span(open, close.range)))
    }

    fn parse_function_literal(&mut self) -> Result<Expression> {
        let keyword = self.current().range;
        self.advance();

        self.expect(TokenKind::GroupDelimiter, "(")?;
        let (parameters, _) =
            self.parse_sequence(TokenKind::GroupDelimiter, ")", Self::parse_parameter)?;

        let body = self.parse_block()?;
        let range = Range::span(keyword, body.range);

        Ok(Expression::Function {
            parameters,
            body: Rc::new(body),
            range,
        })
    }

    fn parse_parameter(&mut self) -> Result<Identifier> {
        let token = self.current().clone();
        if token.kind != TokenKind::Identifier {
            return Err(SyntaxError::BadIdentifier {
                received: token.to_string(),
                expected: "identifier".to_string(),
                range: token.range,
            });
        }
        self.advance();
        Ok(Identifier::new(token.value, token.range))
    }

    fn parse_list_or_table(&mut self) -> Result<Expression> {
        let open = self.current().range;
        self.advance();

        if self.current().is(TokenKind::ListDelimiter, TABLE_MARKER) {
            self.advance();
            let (pairs, close) =
                self.parse_sequence(TokenKind::ListDelimiter, "]", Self::parse_table_pair)?;
            return Ok(Expression::Table {
                pairs,
                range: Range::span(open, close),
            });
        }

        let (elements, close) = self.parse_sequence(TokenKind::ListDelimiter, "]", |parser| {
            parser.parse_expression(BindingPower::LOWEST)
        })?;

        Ok(Expression::List {
            elements,
            range: Range::span(open, close),
        })
    }

    fn parse_table_pair(&mut self) -> Result<(Expression, Expression)> {
        let key = self.parse_expression(BindingPower::LOWEST)?;
        self.expect(TokenKind::Separator, ":")?;
        let value = self.parse_expression(BindingPower::LOWEST)?;
        Ok((key, value))
    }

    /// Parses `item (, item)*` up to and including the closing delimiter,
    /// returning the items and the closing delimiter's range.
    fn parse_sequence<T>(
        &mut self,
        kind: TokenKind,
        closing: &str,
        mut parse_item: impl FnMut(&mut Self) -> Result<T>,
    ) -> Result<(Vec<T>, Range)> {
        let mut items: Vec<T> = Vec::new();

        loop {
            if items.is_empty() && self.current().is(kind, closing) {
                break;
            }

            items.push(parse_item(self)?);

            if self.current().is(kind, closing) {
                break;
            }
            if !self.current().is(TokenKind::Separator, ",") {
                return Err(self.delimiter_error(kind, closing));
            }
            self.advance();
        }

        let close = self.current().range;
        self.advance();

        Ok((items, close))
    }

    fn expect(&mut self, kind: TokenKind, value: &str) -> Result<Token> {
        let token = self.current().clone();
        if token.is(kind, value) {
            self.advance();
            Ok(token)
        } else {
            Err(self.delimiter_error(kind, value))
        }
    }

    /// Error for the current token when `expected` of `kind` was required.
    /// A stray separator is reported as such rather than as a delimiter.
    fn delimiter_error(&self, kind: TokenKind, expected: &str) -> SyntaxError {
        let token = self.current();
        let received = token.to_string();
        let range = token.range;
        let expected = format!("`{expected}`");

        if token.kind == TokenKind::Separator || kind == TokenKind::Separator {
            return SyntaxError::BadSeparator {
                received,
                expected,
                range,
            };
        }

        match kind {
            TokenKind::GroupDelimiter => SyntaxError::BadGroupDelimiter {
                received,
                expected,
                range,
            },
            TokenKind::BlockDelimiter => SyntaxError::BadBlockDelimiter {
                received,
                expected,
                range,
            },
            _ => SyntaxError::BadListDelimiter {
                received,
                expected,
                range,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ops::Deref;

    use super::*;
    use crate::lexer::Lexer;

    #[test]
    fn identifier_expression() {
        let program = get_program("foobar;");
        assert_eq!(program.statements.len(), 1);
        let expr = expression_statement(&program.statements[0]);
        assert_identifier_expression(expr, "foobar");
    }

    #[test]
    fn number_literal_expression() {
        let cases = vec![("5", 5.0), ("2.5", 2.5), ("0.125", 0.125)];
        for (input, expected) in cases {
            let program = get_program(input);
            let expr = expression_statement(&program.statements[0]);
            assert_number_literal(expr, expected);
        }
    }

    #[test]
    fn bool_expression() {
        let program = get_program(
            r#"
            참;
            거짓
        "#,
        );
        assert_eq!(program.statements.len(), 2);
        let cases = vec![true, false];
        for (statement, expected) in program.statements.iter().zip(cases) {
            match expression_statement(statement) {
                Expression::Boolean { value, .. } => assert_eq!(*value, expected),
                expr => panic!("expected boolean literal, found {expr}"),
            }
        }
    }

    #[test]
    fn string_literals() {
        let program = get_program("'hello world'");
        match expression_statement(&program.statements[0]) {
            Expression::String { value, .. } => assert_eq!(value, "hello world"),
            expr => panic!("expected string literal, found {expr}"),
        }
    }

    #[test]
    fn prefix_operators() {
        let cases = vec![
            ("!참", PrefixOperator::Bang),
            ("-15", PrefixOperator::Minus),
            ("+15", PrefixOperator::Plus),
        ];
        for (input, expected_operator) in cases {
            let program = get_program(input);
            match expression_statement(&program.statements[0]) {
                Expression::Prefix { operator, .. } => assert_eq!(*operator, expected_operator),
                expr => panic!("expected prefix expression, found {expr}"),
            }
        }
    }

    #[test]
    fn infix_operators() {
        let cases = vec![
            ("5 + 5", InfixOperator::Plus),
            ("5 - 5", InfixOperator::Minus),
            ("5 * 5", InfixOperator::Asterisk),
            ("5 / 5", InfixOperator::Slash),
            ("5 > 5", InfixOperator::Gt),
            ("5 < 5", InfixOperator::Lt),
            ("5 >= 5", InfixOperator::GtEq),
            ("5 <= 5", InfixOperator::LtEq),
            ("5 == 5", InfixOperator::Eq),
            ("5 != 5", InfixOperator::NotEq),
        ];
        for (input, expected_operator) in cases {
            let program = get_program(input);
            match expression_statement(&program.statements[0]) {
                Expression::Infix {
                    operator,
                    left,
                    right,
                    ..
                } => {
                    assert_eq!(*operator, expected_operator);
                    assert_number_literal(left.deref(), 5.0);
                    assert_number_literal(right.deref(), 5.0);
                }
                expr => panic!("expected infix expression, found {expr}"),
            }
        }
    }

    #[test]
    fn operator_precedence() {
        let cases = vec![
            ("11+22*33/44-55", "((11 + ((22 * 33) / 44)) - 55)"),
            ("-a * b", "((-a) * b)"),
            ("!-a", "(!(-a))"),
            ("a + b + c", "((a + b) + c)"),
            ("a + b - c", "((a + b) - c)"),
            ("a * b * c", "((a * b) * c)"),
            ("a * b / c", "((a * b) / c)"),
            ("a + b / c", "(a + (b / c))"),
            ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
            ("3 + 4; -5 * 5", "(3 + 4)\n((-5) * 5)"),
            ("5 > 4 == 3 < 4", "(5 > (4 == (3 < 4)))"),
            ("foo == bar == baz", "(foo == (bar == baz))"),
            ("x = y = 42", "(x = (y = 42))"),
            ("x = 1 + 2 * 3", "(x = (1 + (2 * 3)))"),
            ("x = a == b", "(x = (a == b))"),
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("2 / (5 + 5)", "(2 / (5 + 5))"),
            ("-(5 + 5)", "(-(5 + 5))"),
            ("!(참 == 참)", "(!(참 == 참))"),
            ("-f(1)", "(-f(1))"),
            ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
            (
                "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
            ),
            ("f(1)(2)", "f(1)(2)"),
            ("함수(a) { a }(1)", "함수(a) { a }(1)"),
        ];
        for (input, expected) in cases {
            let program = get_program(input);
            assert_eq!(program.to_string(), expected, "input: {input}");
        }
    }

    #[test]
    fn parenthesized_expression_range_covers_delimiters() {
        let program = get_program("(11 + 22)");
        let expr = expression_statement(&program.statements[0]);
        assert_eq!(expr.range(), Range::from_coords((0, 0), (0, 8)));
        match expr {
            Expression::Infix { left, right, .. } => {
                assert_eq!(left.range(), Range::from_coords((0, 1), (0, 2)));
                assert_eq!(right.range(), Range::from_coords((0, 6), (0, 7)));
            }
            _ => panic!("expected infix expression, found {expr}"),
        }
    }

    #[test]
    fn node_ranges_span_their_children() {
        let program = get_program("만약 참 {\n  리턴 f(1, 2)\n} 아니면 { }");
        let statement = &program.statements[0];
        assert_eq!(statement.range(), Range::from_coords((0, 0), (2, 8)));
        match statement {
            Statement::Branch {
                consequence,
                alternative,
                ..
            } => {
                assert_eq!(consequence.range, Range::from_coords((0, 5), (2, 0)));
                assert_eq!(
                    consequence.statements[0].range(),
                    Range::from_coords((1, 2), (1, 11))
                );
                let alternative = alternative.as_ref().unwrap();
                assert_eq!(alternative.range, Range::from_coords((2, 6), (2, 8)));
            }
            _ => panic!("expected branch statement, found {statement}"),
        }
    }

    #[test]
    fn branch_statements() {
        let cases = vec![
            ("만약 x < y { x }", "만약 (x < y) { x }"),
            ("만약 x < y { x } 아니면 { y }", "만약 (x < y) { x } 아니면 { y }"),
            ("만약 참 { }", "만약 참 { }"),
        ];
        for (input, expected) in cases {
            let program = get_program(input);
            assert_eq!(program.statements.len(), 1);
            assert!(matches!(program.statements[0], Statement::Branch { .. }));
            assert_eq!(program.to_string(), expected);
        }
    }

    #[test]
    fn return_statements() {
        let program = get_program("리턴 5; 리턴 a + b");
        assert_eq!(program.statements.len(), 2);
        match &program.statements[0] {
            Statement::Return { expression, range } => {
                assert_number_literal(expression, 5.0);
                assert_eq!(*range, Range::from_coords((0, 0), (0, 3)));
            }
            statement => panic!("expected return statement, found {statement}"),
        }
        assert_eq!(program.statements[1].to_string(), "리턴 (a + b)");
    }

    #[test]
    fn function_literals() {
        let cases = vec![
            ("함수() {}", vec![], "{ }"),
            ("함수(x) {}", vec!["x"], "{ }"),
            ("함수(x, y) { x + y }", vec!["x", "y"], "{ (x + y) }"),
        ];
        for (input, expected_parameters, expected_body) in cases {
            let program = get_program(input);
            match expression_statement(&program.statements[0]) {
                Expression::Function {
                    parameters, body, ..
                } => {
                    let names: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
                    assert_eq!(names, expected_parameters);
                    assert_eq!(body.to_string(), expected_body);
                }
                expr => panic!("expected function literal, found {expr}"),
            }
        }
    }

    #[test]
    fn call_expressions() {
        let program = get_program("add(1, 2 * 3, 4 + 5)");
        match expression_statement(&program.statements[0]) {
            Expression::Call {
                function,
                arguments,
                range,
            } => {
                assert_identifier_expression(function.deref(), "add");
                assert_eq!(arguments.len(), 3);
                assert_number_literal(&arguments[0], 1.0);
                assert_eq!(arguments[1].to_string(), "(2 * 3)");
                assert_eq!(arguments[2].to_string(), "(4 + 5)");
                assert_eq!(*range, Range::from_coords((0, 0), (0, 19)));
            }
            expr => panic!("expected call expression, found {expr}"),
        }
    }

    #[test]
    fn non_callable_followed_by_group_starts_a_new_statement() {
        let program = get_program("1 (2)");
        assert_eq!(program.statements.len(), 2);
        assert_eq!(program.to_string(), "1\n2");
    }

    #[test]
    fn list_literals() {
        let program = get_program("[1, 2 * 2, '셋', [], 함수(x) { x }]");
        match expression_statement(&program.statements[0]) {
            Expression::List { elements, range } => {
                assert_eq!(elements.len(), 5);
                assert_eq!(*range, Range::from_coords((0, 0), (0, 31)));
            }
            expr => panic!("expected list literal, found {expr}"),
        }
        match expression_statement(&get_program("[]").statements[0]) {
            Expression::List { elements, .. } => assert!(elements.is_empty()),
            expr => panic!("expected list literal, found {expr}"),
        }
    }

    #[test]
    fn table_literals() {
        let program = get_program("[!'one': 1, 참: '2', 'three': 1 + 2]");
        assert_eq!(program.to_string(), "[!'one': 1, 참: '2', 'three': (1 + 2)]");
        match expression_statement(&program.statements[0]) {
            Expression::Table { pairs, .. } => assert_eq!(pairs.len(), 3),
            expr => panic!("expected table literal, found {expr}"),
        }
        match expression_statement(&get_program("[!]").statements[0]) {
            Expression::Table { pairs, .. } => assert!(pairs.is_empty()),
            expr => panic!("expected table literal, found {expr}"),
        }
    }

    #[test]
    fn syntax_errors() {
        let cases: Vec<(&str, fn(&SyntaxError) -> bool)> = vec![
            ("1.2.3", |e| matches!(e, SyntaxError::BadNumberLiteral { .. })),
            ("* 3", |e| matches!(e, SyntaxError::BadPrefix { .. })),
            (")", |e| matches!(e, SyntaxError::BadExpression { .. })),
            ("'open", |e| matches!(e, SyntaxError::BadExpression { .. })),
            ("(1 + 2", |e| matches!(e, SyntaxError::BadGroupDelimiter { .. })),
            ("f(1 2)", |e| matches!(e, SyntaxError::BadGroupDelimiter { .. })),
            ("만약 참 1", |e| matches!(e, SyntaxError::BadBlockDelimiter { .. })),
            ("함수() { 1", |e| matches!(e, SyntaxError::BadBlockDelimiter { .. })),
            ("[1, 2", |e| matches!(e, SyntaxError::BadListDelimiter { .. })),
            ("1 = 2", |e| matches!(e, SyntaxError::BadAssignmentTarget { .. })),
            ("f(x) = 2", |e| matches!(e, SyntaxError::BadAssignmentTarget { .. })),
            ("함수(1) {}", |e| matches!(e, SyntaxError::BadIdentifier { .. })),
            ("[1: 2]", |e| matches!(e, SyntaxError::BadSeparator { .. })),
            ("[!'a' 1]", |e| matches!(e, SyntaxError::BadSeparator { .. })),
            ("아니면 { }", |e| matches!(e, SyntaxError::BadKeyword { .. })),
        ];
        for (input, is_expected) in cases {
            let error = parse(input).expect_err(input);
            assert!(is_expected(&error), "input: {input}, error: {error:?}");
        }
    }

    /// Replays prepared tokens, then a sticky `End`.
    struct TokenList {
        tokens: Vec<Token>,
        end: Token,
    }

    impl TokenList {
        fn new(mut tokens: Vec<Token>) -> Self {
            tokens.reverse();
            Self {
                tokens,
                end: Token::new(TokenKind::End, "", Range::default()),
            }
        }
    }

    impl TokenSource for TokenList {
        fn read(&self) -> &Token {
            self.tokens.last().unwrap_or(&self.end)
        }

        fn advance(&mut self) {
            self.tokens.pop();
        }
    }

    #[test]
    fn foreign_token_source() {
        let range = Range::from_coords((0, 0), (0, 2));
        let tokens = vec![
            Token::new(TokenKind::Identifier, "x", range),
            Token::new(TokenKind::Operator, "=", range),
            Token::new(TokenKind::Boolean, "참", range),
        ];
        let program = Parser::new(TokenList::new(tokens)).parse_source().unwrap();
        assert_eq!(program.to_string(), "(x = 참)");

        let tokens = vec![Token::new(TokenKind::Boolean, "yes", range)];
        let error = Parser::new(TokenList::new(tokens)).parse_source().unwrap_err();
        assert_eq!(
            error,
            SyntaxError::BadBooleanLiteral {
                received: "yes".to_string(),
                expected: format!("`{TRUE}` or `{FALSE}`"),
                range,
            }
        );
    }

    #[test]
    fn bad_expression_reports_token_kind() {
        let error = parse("x = }").unwrap_err();
        assert_eq!(
            error,
            SyntaxError::BadExpression {
                received: "block delimiter".to_string(),
                expected: "expression".to_string(),
                range: Range::from_coords((0, 4), (0, 4)),
            }
        );
    }

    fn parse(input: &str) -> Result<Program> {
        Parser::new(Lexer::new(input)).parse_source()
    }

    fn get_program(input: &str) -> Program {
        match parse(input) {
            Ok(program) => program,
            Err(err) => panic!("parse_source() returned an error: {}", err),
        }
    }

    fn expression_statement(statement: &Statement) -> &Expression {
        match statement {
            Statement::Expression(expression) => expression,
            _ => panic!("expected expression statement, found {statement}"),
        }
    }

    fn assert_identifier_expression(expression: &Expression, expected_value: &str) {
        match expression {
            Expression::Identifier(identifier) => assert_eq!(identifier.name, expected_value),
            _ => panic!("expected identifier, found {expression}"),
        }
    }

    fn assert_number_literal(expression: &Expression, expected_value: f64) {
        match expression {
            Expression::Number { value, .. } => assert_eq!(*value, expected_value),
            _ => panic!("expected number literal, found {expression}"),
        }
    }
}

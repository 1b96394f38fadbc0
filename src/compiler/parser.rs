use lazy_static::lazy_static;
use crate::compiler::ast::syntax::Expr;
use crate::compiler::diagnostics::Diagnostics;
use crate::compiler::lexer::{Lexer, LexerError, Token, TokenPos, TokenType};
use crate::compiler::value::Value;

#[cfg(test)]
mod tests;

lazy_static! {
    static ref TERM_OPERATORS: [TokenType; 2] = [TokenType::Plus, TokenType::Minus];
    static ref FACTOR_OPERATORS: [TokenType; 2] = [TokenType::Multiply, TokenType::Divide];
    static ref UNARY_OPERATORS: [TokenType; 2] = [TokenType::Plus, TokenType::Minus];
}

/// Deepest expression tree the parser builds. Later stages walk the tree recursively.
pub const MAX_NESTING_DEPTH: usize = 256;

pub struct Parser<'source> {
    lexer: Lexer<'source>,
    previous: Token, current: Token,

    diagnostics: Diagnostics,
    had_error: bool,
    panic_mode: bool,
    depth: usize,
}

impl<'source> Parser<'source> {
    pub fn new(lexer: Lexer<'source>) -> Parser<'source> {
        Parser {
            lexer,
            previous: Token::empty(), current: Token::empty(),
            diagnostics: Diagnostics::new(),
            had_error: false, panic_mode: false,
            depth: 0,
        }
    }

    pub fn had_error(&self) -> bool {
        self.had_error
    }

    pub fn into_diagnostics(self) -> Diagnostics {
        self.diagnostics
    }

    /// Parses a single expression spanning the whole input.
    pub fn parse(&mut self) -> Expr {
        self.consume();

        let expr = self.parse_expression();

        if !self.is_eof() {
            self.error_at_current("Expected end of input", true);
        }

        expr
    }

    // Expression parsing

    fn parse_expression(&mut self) -> Expr {
        self.parse_term()
    }

    fn parse_term(&mut self) -> Expr {
        let depth = self.depth;
        let mut expr = self.parse_factor();

        // Every operator in the chain adds a level on the left side of the tree
        while self.matches_any(&*TERM_OPERATORS) {
            let operator = self.previous.clone();

            if !self.nest() {
                break;
            }

            let right = self.parse_factor();
            expr = Expr::BinaryOperator { left: Box::new(expr), operator, right: Box::new(right) };
        }

        self.depth = depth;
        expr
    }

    fn parse_factor(&mut self) -> Expr {
        let depth = self.depth;
        let mut expr = self.parse_unary();

        while self.matches_any(&*FACTOR_OPERATORS) {
            let operator = self.previous.clone();

            if !self.nest() {
                break;
            }

            let right = self.parse_unary();
            expr = Expr::BinaryOperator { left: Box::new(expr), operator, right: Box::new(right) };
        }

        self.depth = depth;
        expr
    }

    fn parse_unary(&mut self) -> Expr {
        if self.matches_any(&*UNARY_OPERATORS) {
            let operator = self.previous.clone();

            if let Some(literal) = self.parse_negative_literal(&operator) {
                return literal;
            }

            let depth = self.depth;
            let right = if self.nest() { self.parse_unary() } else { Expr::Error };
            self.depth = depth;

            return Expr::UnaryOperator { operator, expr: Box::new(right) };
        }

        self.parse_primary()
    }

    /// `-2147483648` only fits an int with its sign, so a minus directly in front of a number
    /// that is out of range on its own is folded into the literal.
    fn parse_negative_literal(&mut self, operator: &Token) -> Option<Expr> {
        if operator.token_type() != TokenType::Minus || !self.check(TokenType::Number) || self.current.value().is_some() {
            return None;
        }

        let source = format!("-{}", self.current.source());
        let value = source.parse::<i32>().ok()?;
        self.consume();

        Some(Expr::Literal(Token::new(TokenType::Number, source, *operator.start())
            .with_value(Some(Value::Int(value)))))
    }

    fn parse_primary(&mut self) -> Expr {
        if self.matches(TokenType::Number) {
            let number = self.previous.clone();

            if number.value().is_none() {
                self.error(&format!("Number literal '{}' is not a valid int", number.source()), false);
            }

            return Expr::Literal(number);
        } else if self.matches(TokenType::True) || self.matches(TokenType::False) {
            return Expr::Literal(self.previous.clone());
        } else if self.matches(TokenType::ParenthesisLeft) {
            let depth = self.depth;

            if !self.nest() {
                self.depth = depth;
                return Expr::Error;
            }

            let expr = self.parse_expression();
            self.depth = depth;
            self.expect(TokenType::ParenthesisRight, "Expected ')' after expression");

            return expr;
        }

        self.error_at_current("Expected expression", true);

        if !self.is_eof() {
            self.consume();
        }

        Expr::Error
    }

    fn consume(&mut self) {
        std::mem::swap(&mut self.previous, &mut self.current); // self.previous = self.current; self.current gets replaced below

        loop {
            match self.lexer.scan_token() {
                Ok(token) => {
                    self.current = token;
                    break;
                },
                Err(LexerError::UnexpectedEof) => {
                    self.current = Token::new(TokenType::Eof, String::new(), TokenPos::begin());
                    break
                },

                Err(err) => self.error_from_lexer(&err),
            }
        }
    }

    fn expect(&mut self, token_type: TokenType, message: &str) {
        if self.current.token_type() == token_type {
            self.consume();
            return;
        }

        self.error_at_current(message, true);
    }

    fn matches(&mut self, token_type: TokenType) -> bool { // Should be called "match", but that's a keyword
        if !self.check(token_type) {
            return false;
        }

        self.consume();
        true
    }

    fn matches_any(&mut self, token_types: &[TokenType]) -> bool {
        for token_type in token_types {
            if self.check(*token_type) {
                self.consume();
                return true;
            }
        }

        false
    }

    #[inline]
    fn check(&self, token_type: TokenType) -> bool {
        self.current.token_type() == token_type
    }

    fn is_eof(&self) -> bool {
        self.current.token_type() == TokenType::Eof
    }

    fn nest(&mut self) -> bool {
        self.depth += 1;

        if self.depth > MAX_NESTING_DEPTH {
            self.error_at_current("Expression is nested too deeply", true);
            return false;
        }

        true
    }

    // Error handling

    fn error_at_current(&mut self, message: &str, panic: bool) {
        let token = self.current.clone();
        self.error_at(&token, message, panic);
    }

    fn error(&mut self, message: &str, panic: bool) {
        let token = self.previous.clone();
        self.error_at(&token, message, panic);
    }

    fn error_from_lexer(&mut self, error: &LexerError) {
        // Lexer errors are always reported, even in panic mode
        self.diagnostics.report(error.to_string());
        self.had_error = true;
    }

    fn error_at(&mut self, token: &Token, message: &str, panic: bool) {
        if self.panic_mode {
            return;
        } else if panic {
            self.panic_mode = true;
        }

        let message = if token.token_type() == TokenType::Eof {
            format!("{} Error at end of input: {}", token.start(), message)
        } else {
            format!("{} Error at '{}': {}", token.start(), token.source(), message)
        };

        self.diagnostics.report(message);
        self.had_error = true;
    }
}

use lazy_static::lazy_static;
use thiserror::Error;
use crate::compiler::ast::bound::{BoundBinaryOperatorKind, BoundExpr, BoundUnaryOperatorKind, ExprType};
use crate::compiler::ast::syntax::{Expr, SyntaxKind};
use crate::compiler::diagnostics::Diagnostics;
use crate::compiler::lexer::{Token, TokenType};


#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundUnaryOperator {
    pub token_type: TokenType,
    pub kind: BoundUnaryOperatorKind,
    pub operand_type: ExprType,
}

impl BoundUnaryOperator {
    pub fn resolve(token_type: TokenType, operand_type: ExprType) -> Option<&'static BoundUnaryOperator> {
        UNARY_OPERATORS.iter().find(|operator| operator.token_type == token_type
            && operator.operand_type == operand_type)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundBinaryOperator {
    pub token_type: TokenType,
    pub kind: BoundBinaryOperatorKind,
    pub left_type: ExprType,
    pub right_type: ExprType,
}

impl BoundBinaryOperator {
    pub fn resolve(token_type: TokenType, left_type: ExprType, right_type: ExprType) -> Option<&'static BoundBinaryOperator> {
        BINARY_OPERATORS.iter().find(|operator| operator.token_type == token_type
            && operator.left_type == left_type
            && operator.right_type == right_type)
    }
}

lazy_static! {
    // Every (operator, operand types) combination that type-checks. Anything missing here is reported.
    static ref UNARY_OPERATORS: [BoundUnaryOperator; 2] = [
        BoundUnaryOperator { token_type: TokenType::Plus, kind: BoundUnaryOperatorKind::Identity, operand_type: ExprType::Int },
        BoundUnaryOperator { token_type: TokenType::Minus, kind: BoundUnaryOperatorKind::Negation, operand_type: ExprType::Int },
    ];

    static ref BINARY_OPERATORS: [BoundBinaryOperator; 4] = [
        BoundBinaryOperator { token_type: TokenType::Plus, kind: BoundBinaryOperatorKind::Addition, left_type: ExprType::Int, right_type: ExprType::Int },
        BoundBinaryOperator { token_type: TokenType::Minus, kind: BoundBinaryOperatorKind::Subtraction, left_type: ExprType::Int, right_type: ExprType::Int },
        BoundBinaryOperator { token_type: TokenType::Multiply, kind: BoundBinaryOperatorKind::Multiplication, left_type: ExprType::Int, right_type: ExprType::Int },
        BoundBinaryOperator { token_type: TokenType::Divide, kind: BoundBinaryOperatorKind::Division, left_type: ExprType::Int, right_type: ExprType::Int },
    ];
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("Unexpected syntax: {0}")]
    UnexpectedSyntax(SyntaxKind),
}

#[derive(Debug, PartialEq)]
pub struct BindOutput {
    pub expr: BoundExpr,
    pub diagnostics: Diagnostics,
}

/// Binds `expr` with a fresh binder.
pub fn bind(expr: &Expr) -> Result<BindOutput, BindError> {
    Binder::new().bind(expr)
}

pub struct Binder {
    diagnostics: Diagnostics,
}

impl Binder {
    pub fn new() -> Binder {
        Binder {
            diagnostics: Diagnostics::new(),
        }
    }

    /// Binds a whole tree and hands back the diagnostics collected on the way.
    ///
    /// Takes `self` so that diagnostics from one input can never leak into the next.
    pub fn bind(mut self, expr: &Expr) -> Result<BindOutput, BindError> {
        let expr = self.bind_expression(expr)?;

        Ok(BindOutput { expr, diagnostics: self.diagnostics })
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    /// Binds `expr`, reporting operators that don't apply to their operand types.
    ///
    /// An unresolved operator is dropped from the tree: its operand (or left operand) is
    /// returned in its place. The only hard error is a syntax node that isn't an expression.
    pub fn bind_expression(&mut self, expr: &Expr) -> Result<BoundExpr, BindError> {
        match expr {
            Expr::Literal(token) => Ok(self.bind_literal(token)),
            Expr::UnaryOperator { operator, expr } => self.bind_unary(operator, expr),
            Expr::BinaryOperator { left, operator, right } => self.bind_binary(left, operator, right),
            Expr::Error => Err(BindError::UnexpectedSyntax(expr.kind())),
        }
    }

    fn bind_literal(&self, token: &Token) -> BoundExpr {
        let expected_type = match token.token_type() {
            TokenType::True | TokenType::False => ExprType::Boolean,
            _ => ExprType::Int,
        };

        let value = token.value()
            .filter(|value| value.get_type() == expected_type)
            .unwrap_or_else(|| expected_type.default_value());

        BoundExpr::Literal(value)
    }

    fn bind_unary(&mut self, operator: &Token, operand: &Expr) -> Result<BoundExpr, BindError> {
        let operand = self.bind_expression(operand)?;
        let operand_type = operand.get_type();

        match BoundUnaryOperator::resolve(operator.token_type(), operand_type) {
            Some(resolved) => {
                tracing::trace!(operator = operator.source(), kind = ?resolved.kind, "resolved unary operator");
                Ok(BoundExpr::UnaryOperator { operator: resolved.kind, expr: Box::new(operand) })
            },
            None => {
                self.error(format!("Unary operator '{}' is not defined for type {}",
                    operator.source(), operand_type));
                Ok(operand)
            },
        }
    }

    fn bind_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> Result<BoundExpr, BindError> {
        let left = self.bind_expression(left)?;
        let right = self.bind_expression(right)?;
        let (left_type, right_type) = (left.get_type(), right.get_type());

        match BoundBinaryOperator::resolve(operator.token_type(), left_type, right_type) {
            Some(resolved) => {
                tracing::trace!(operator = operator.source(), kind = ?resolved.kind, "resolved binary operator");
                Ok(BoundExpr::BinaryOperator { left: Box::new(left), operator: resolved.kind, right: Box::new(right) })
            },
            None => {
                self.error(format!("Binary operator '{}' is not defined for type {} and {}",
                    operator.source(), left_type, right_type));
                Ok(left)
            },
        }
    }

    // Error handling

    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    fn error(&mut self, message: String) {
        self.diagnostics.report(message);
    }
}

impl Default for Binder {
    fn default() -> Self {
        Binder::new()
    }
}

use std::fmt::{Debug, Display, Formatter};
use crate::compiler::lexer::Token;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyntaxKind {
    Literal,
    Unary,
    Binary,
    Error,
}

impl Display for SyntaxKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SyntaxKind::Literal => write!(f, "literal expression"),
            SyntaxKind::Unary => write!(f, "unary expression"),
            SyntaxKind::Binary => write!(f, "binary expression"),
            SyntaxKind::Error => write!(f, "error expression"),
        }
    }
}

/// Untyped expression tree as produced by the parser.
///
/// Parentheses never show up here: the parser returns the inner expression directly,
/// so grouping is encoded purely by the shape of the tree.
#[derive(Clone, PartialEq)]
pub enum Expr {
    /// A number or `true`/`false` token. The token carries the parsed value, if any.
    Literal(Token),

    UnaryOperator {
        operator: Token,
        expr: Box<Expr>,
    },
    BinaryOperator {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },

    /// Left behind by the parser after it has reported a syntax error.
    Error,
}

impl Expr {
    pub fn kind(&self) -> SyntaxKind {
        match self {
            Expr::Literal(_) => SyntaxKind::Literal,
            Expr::UnaryOperator { .. } => SyntaxKind::Unary,
            Expr::BinaryOperator { .. } => SyntaxKind::Binary,
            Expr::Error => SyntaxKind::Error,
        }
    }
}

impl Debug for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Literal(token) => write!(f, "{}", token.source()),
            Expr::UnaryOperator { operator, expr } => write!(f, "({}{:?})", operator.source(), expr),
            Expr::BinaryOperator { left, operator, right } => write!(f, "({:?} {} {:?})", left, operator.source(), right),
            Expr::Error => write!(f, "Error"),
        }
    }
}

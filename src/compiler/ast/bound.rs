use std::fmt::{Debug, Display, Formatter};
use crate::compiler::value::Value;

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprType {
    // @formatter:off
    Int, Boolean,
    // @formatter:on
}

impl ExprType {
    /// Value substituted for a literal whose token carries no usable value.
    pub fn default_value(&self) -> Value {
        match self {
            ExprType::Int => Value::Int(0),
            ExprType::Boolean => Value::Boolean(false),
        }
    }
}

impl Display for ExprType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ExprType::Int => write!(f, "int"),
            ExprType::Boolean => write!(f, "boolean"),
        }
    }
}

impl Debug for ExprType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundUnaryOperatorKind {
    Identity,
    Negation,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundBinaryOperatorKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
}

/// Type-checked expression tree. Every operator in it has been resolved.
#[derive(Clone, PartialEq, Eq)]
pub enum BoundExpr {
    Literal(Value),

    UnaryOperator {
        operator: BoundUnaryOperatorKind,
        expr: Box<BoundExpr>,
    },
    BinaryOperator {
        left: Box<BoundExpr>,
        operator: BoundBinaryOperatorKind,
        right: Box<BoundExpr>,
    },
}

impl BoundExpr {
    /// Binary operators are only bound when both sides already agree, so the left type is the result type.
    pub fn get_type(&self) -> ExprType {
        match self {
            BoundExpr::Literal(value) => value.get_type(),
            BoundExpr::UnaryOperator { expr, .. } => expr.get_type(),
            BoundExpr::BinaryOperator { left, .. } => left.get_type(),
        }
    }
}

impl Debug for BoundExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundExpr::Literal(value) => write!(f, "{}", value),
            BoundExpr::UnaryOperator { operator, expr } => write!(f, "({:?} {:?})", operator, expr),
            BoundExpr::BinaryOperator { left, operator, right } => write!(f, "({:?} {:?} {:?})", operator, left, right),
        }
    }
}

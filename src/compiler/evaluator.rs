use thiserror::Error;
use crate::compiler::ast::bound::{BoundBinaryOperatorKind, BoundExpr, BoundUnaryOperatorKind, ExprType};
use crate::compiler::value::Value;


/// Errors that abort an evaluation. None of them can be recovered from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Integer overflow in {operator}")]
    Overflow { operator: String },

    /// Only reachable when a tree bound with diagnostics is evaluated anyway.
    #[error("Invalid operand for {operator}: expected {expected}, got {actual}")]
    InvalidOperand {
        operator: String,
        expected: ExprType,
        actual: ExprType,
    },
}

type EvaluationResult<T> = Result<T, EvaluationError>;

pub struct Evaluator<'tree> {
    root: &'tree BoundExpr,
}

impl<'tree> Evaluator<'tree> {
    pub fn new(root: &'tree BoundExpr) -> Evaluator<'tree> {
        Evaluator { root }
    }

    pub fn evaluate(&self) -> EvaluationResult<Value> {
        let result = self.evaluate_expr(self.root);

        if let Err(err) = &result {
            tracing::debug!(error = %err, "evaluation failed");
        }

        result
    }

    fn evaluate_expr(&self, expr: &BoundExpr) -> EvaluationResult<Value> {
        match expr {
            BoundExpr::Literal(value) => Ok(*value),
            BoundExpr::UnaryOperator { operator, expr } => {
                let name = format!("{:?}", operator);
                let operand = Self::expect_int(&name, self.evaluate_expr(expr)?)?;

                let result = match operator {
                    BoundUnaryOperatorKind::Identity => Some(operand),
                    BoundUnaryOperatorKind::Negation => operand.checked_neg(),
                };

                result.map(Value::Int).ok_or(EvaluationError::Overflow { operator: name })
            },
            BoundExpr::BinaryOperator { left, operator, right } => {
                let name = format!("{:?}", operator);
                let left = Self::expect_int(&name, self.evaluate_expr(left)?)?;
                let right = Self::expect_int(&name, self.evaluate_expr(right)?)?;

                let result = match operator {
                    BoundBinaryOperatorKind::Addition => left.checked_add(right),
                    BoundBinaryOperatorKind::Subtraction => left.checked_sub(right),
                    BoundBinaryOperatorKind::Multiplication => left.checked_mul(right),
                    BoundBinaryOperatorKind::Division => {
                        if right == 0 {
                            return Err(EvaluationError::DivisionByZero);
                        }

                        left.checked_div(right)
                    },
                };

                result.map(Value::Int).ok_or(EvaluationError::Overflow { operator: name })
            },
        }
    }

    fn expect_int(operator: &str, value: Value) -> EvaluationResult<i32> {
        match value {
            Value::Int(value) => Ok(value),
            other => Err(EvaluationError::InvalidOperand {
                operator: operator.to_owned(),
                expected: ExprType::Int,
                actual: other.get_type(),
            }),
        }
    }
}

use std::fmt::{Debug, Display, Formatter};
use crate::compiler::ast::bound::ExprType;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Int(i32),
    Boolean(bool),
}

impl Value {
    pub fn get_type(&self) -> ExprType {
        match self {
            Value::Int(_) => ExprType::Int,
            Value::Boolean(_) => ExprType::Boolean,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Boolean(value) => write!(f, "{}", value),
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self)
    }
}

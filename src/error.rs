use thiserror::Error;
use crate::compiler::binder::BindError;
use crate::compiler::evaluator::EvaluationError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Bind(#[from] BindError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

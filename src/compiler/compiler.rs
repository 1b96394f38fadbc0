use crate::compiler::ast::bound::BoundExpr;
use crate::compiler::ast::syntax::Expr;
use crate::compiler::binder::{BindError, Binder, BindOutput};
use crate::compiler::diagnostics::Diagnostics;
use crate::compiler::evaluator::{EvaluationError, Evaluator};
use crate::compiler::lexer::Lexer;
use crate::compiler::parser::Parser;
use crate::compiler::value::Value;

/// Everything produced for one line of input.
#[derive(Debug)]
pub struct Compilation {
    pub syntax: Expr,
    /// `None` if parsing failed; binding is skipped in that case.
    pub bound: Option<BoundExpr>,
    pub diagnostics: Diagnostics,
}

impl Compilation {
    pub fn had_error(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Evaluates the bound tree, or returns `None` without evaluating if anything was reported.
    pub fn evaluate(&self) -> Result<Option<Value>, EvaluationError> {
        match &self.bound {
            Some(bound) if !self.had_error() => Evaluator::new(bound).evaluate().map(Some),
            _ => {
                tracing::debug!(diagnostics = self.diagnostics.len(), "skipping evaluation");
                Ok(None)
            },
        }
    }
}

/// Lexes, parses and binds `source`.
pub fn compile(source: &str) -> Result<Compilation, BindError> {
    let lexer = Lexer::new(source);
    let mut parser = Parser::new(lexer);
    let syntax = parser.parse();

    if parser.had_error() {
        return Ok(Compilation { syntax, bound: None, diagnostics: parser.into_diagnostics() });
    }

    let BindOutput { expr, diagnostics } = Binder::new().bind(&syntax)?;
    Ok(Compilation { syntax, bound: Some(expr), diagnostics })
}

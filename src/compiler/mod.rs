pub mod ast;
pub mod value;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod binder;
pub mod evaluator;
#[allow(clippy::module_inception)]
pub mod compiler;

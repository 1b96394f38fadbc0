pub mod util;
pub mod compiler;
pub mod error;
pub mod repl;

use std::io::IsTerminal;
use clap::Parser as ClapParser;
use crate::compiler::diagnostics::Diagnostics;
use crate::compiler::value::Value;
use crate::repl::Repl;

pub use crate::error::{Error, Result};

#[derive(ClapParser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Config {
    #[clap(help = "Expression to evaluate; starts a REPL on stdin if omitted")]
    pub expression: Option<String>,

    #[clap(long, help = "Print the parse tree of each expression")]
    pub show_tree: bool,
    #[clap(long, help = "Print the bound tree of each expression")]
    pub show_bound_tree: bool,

    #[clap(short, long, help = "Print verbose log output")]
    pub verbose: bool,
}

#[derive(Debug, PartialEq)]
pub struct EvaluationResult {
    pub diagnostics: Diagnostics,
    /// `None` whenever `diagnostics` is non-empty.
    pub value: Option<Value>,
}

/// Runs the whole pipeline on `source`. Evaluation only happens if nothing was reported.
pub fn evaluate(source: &str) -> Result<EvaluationResult> {
    let compilation = compiler::compiler::compile(source)?;
    let value = compilation.evaluate()?;

    Ok(EvaluationResult { diagnostics: compilation.diagnostics, value })
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Returns whether every evaluated expression succeeded.
pub fn run(config: Config) -> Result<bool> {
    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();

    if let Some(expression) = &config.expression {
        let repl = Repl::new(config.show_tree, config.show_bound_tree, false);
        return repl.process_line(expression, &mut stdout, &mut stderr);
    }

    let stdin = std::io::stdin();
    let interactive = stdin.is_terminal();
    tracing::debug!(interactive, "starting REPL");

    let mut repl = Repl::new(config.show_tree, config.show_bound_tree, interactive);
    repl.run(stdin.lock(), &mut stdout, &mut stderr)?;

    Ok(true)
}

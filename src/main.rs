use std::process::ExitCode;
use clap::Parser as ClapParser;
use arith_lang::Config;

fn main() -> ExitCode {
    let config: Config = Config::parse();
    arith_lang::init_logging(config.verbose);

    match arith_lang::run(config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        },
    }
}

use std::process::ExitCode;

use wif_convert::commands::{execute, parse_args, usage};
use wif_convert::error::WifError;
use wif_convert::utils::init_logging;

fn main() -> ExitCode {
    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(WifError::InvalidArgumentCount) => {
            println!("{}", usage());
            return ExitCode::from(1);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(1);
        }
    };
    init_logging(cli.verbose);
    match execute(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("Conversion failed: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

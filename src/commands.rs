use clap::{CommandFactory, Parser};
use std::ffi::OsString;

use crate::convert::run_convert;
use crate::error::{Result, WifError};
use crate::utils::parse_version;

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
    /// WIF-encoded private key to convert
    pub wif: String,
    /// Target version byte as two hex digits, e.g. 80 (mainnet) or ef (testnet)
    #[arg(value_name = "VERSION")]
    pub target_version: String,
    #[arg(long, help = "Print the result as JSON")]
    pub json: bool,
    #[arg(long, help = "Display a QR code for the converted key")]
    pub qr: bool,
    #[arg(short, long, help = "Enable debug logging")]
    pub verbose: bool,
}

/// Parse command-line arguments. Any usage problem, `--help` included, is
/// `InvalidArgumentCount`: the caller prints `usage()` and exits with 1.
pub fn parse_args<I, T>(args: I) -> Result<Cli>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(|_| WifError::InvalidArgumentCount)
}

pub fn usage() -> String {
    let mut command = Cli::command();
    format!("{}\nExample: {} KwDi... ef", command.render_help(), env!("CARGO_PKG_NAME"))
}

pub fn execute(cli: Cli) -> Result<()> {
    let target_version = parse_version(&cli.target_version)?;
    run_convert(&cli.wif, target_version, cli.json, cli.qr)
}

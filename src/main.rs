use std::ffi::OsString;
use std::process::ExitCode;

use truffula::core::parse_options;
use truffula::error::OptionsError;
use truffula::fs::RealFileSystem;

const USAGE: &str = "usage: truffula [-h] [-nc] <directory>";

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    let options = match parse_options(&RealFileSystem, &args).await {
        Ok(options) => options,
        Err(err @ OptionsError::InvalidArgument(_)) => {
            eprintln!("truffula: {err}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
        Err(err) => {
            eprintln!("truffula: {err}");
            return ExitCode::from(1);
        }
    };

    // The tree body is rendered by the downstream renderer; the root line is
    // the first line of its output.
    println!("{}", options.root.display());
    ExitCode::SUCCESS
}

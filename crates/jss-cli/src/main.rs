mod args;
mod run;
mod tracing_config;

use args::CliArgs;
use clap::Parser;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_config::init_tracing();
    let args = CliArgs::parse();
    match run::run(args).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("jsstrip: {err:#}");
            ExitCode::FAILURE
        }
    }
}

use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use storefront::{execute, init_logging, Cli, LogConfig, RealEnv};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_config = LogConfig::from_verbosity(cli.verbose)
        .with_format(cli.log_format)
        .with_ansi(io::stderr().is_terminal());
    if let Err(e) = init_logging(&log_config) {
        eprintln!("warning: logging disabled: {}", e);
    }

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("error: failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(execute(cli, &RealEnv)) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            if stdout.write_all(output.as_bytes()).and_then(|_| stdout.flush()).is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

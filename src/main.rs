use std::process::ExitCode;

use clap::Parser;

use gq::cli::Cli;
use gq::logging::init_logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let config = cli.into_config();
    // Unlocked handles: the log subscriber writes to stderr from resolver threads.
    let result = gq::run(&config, &mut std::io::stdout(), &mut std::io::stderr()).await;

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("run failed: {err:?}");
            eprintln!("gq: {err}");
            err.exit_code()
        }
    }
}

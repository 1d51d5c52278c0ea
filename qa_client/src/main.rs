use clap::Parser;
use qa_client::frameworks::{app, cli::Cli};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    app::init_runtime();

    match app::run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed.");
            ExitCode::FAILURE
        }
    }
}

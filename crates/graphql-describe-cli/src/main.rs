mod cli;
mod command;
mod commands;
mod logging;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::CommandResult;
pub(crate) use command::RunnableCommand;

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    logging::setup_logger(cli.verbose);

    let result = match cli.cmd.take() {
        Some(command) => command.run(cli).await,
        None => match cli.run_default().await {
            Ok(()) => return std::process::ExitCode::SUCCESS,
            Err(err) => CommandResult::failure("Unable to print help", &err),
        },
    };

    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}")
    }
    result.exit_code
}

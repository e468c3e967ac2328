use clap::Parser;
use pixel_runner::{execute_check, execute_validate, init_tracing, Cli, Commands};

const EXIT_REJECTED: i32 = 2;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let result = match &cli.command {
        Commands::Check(command) => execute_check(command),
        Commands::Validate(command) => execute_validate(command),
    };

    match result {
        Ok(output) => {
            println!("{}", output.rendered);
            if !output.passed {
                std::process::exit(EXIT_REJECTED);
            }
        }
        Err(error) => {
            tracing::error!(%error, "pixel review run failed");
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

use clap::Parser;
use std::process::ExitCode;
use tracing::error;

use shortener::cli::{Cli, Commands};
use shortener::config::{StaticConfig, init_config};
use shortener::runtime::run_server;
use shortener::system::{init_logging, install_panic_hook};

#[actix_web::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::GenerateConfig { output }) => generate_config(output.as_deref()),
        Some(Commands::Serve) | None => serve(cli.config.as_deref()).await,
    }
}

async fn serve(config_path: Option<&str>) -> ExitCode {
    let config = match init_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            return ExitCode::FAILURE;
        }
    };

    let guard = match init_logging(&config.logging) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            return ExitCode::FAILURE;
        }
    };

    install_panic_hook();

    let code = match run_server(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Server failed: {:#}", e);
            ExitCode::FAILURE
        }
    };

    // flush buffered log lines before exit
    drop(guard);
    code
}

fn generate_config(output: Option<&str>) -> ExitCode {
    let result = match output {
        Some(path) => StaticConfig::default()
            .save_to_file(path)
            .map(|_| println!("Sample configuration written to {}", path)),
        None => StaticConfig::generate_sample_config().map(|sample| print!("{}", sample)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.format_colored());
            ExitCode::FAILURE
        }
    }
}

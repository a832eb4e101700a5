mod auth_url;
mod call;
mod classify;
mod cli;
mod error;
mod logger;
mod ui;

use call::CallArgs;
use clap::Parser;
use cli::{Cli, Commands};
use colored::Colorize;
use std::process;

fn main() {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(err) = logger::init(cli.verbose) {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }

    let result = match cli.command {
        Commands::Call {
            path,
            method,
            data,
            query,
            token,
            timeout,
            operation,
            resource,
            silent,
        } => call::execute(CallArgs {
            config_path: cli.config,
            path,
            method,
            data,
            query,
            token,
            timeout,
            operation,
            resource,
            silent,
        })
        .map(|succeeded| if succeeded { 0 } else { 2 }),
        Commands::Classify { value } => classify::execute(value).map(|_| 0),
        Commands::AuthUrl => auth_url::execute(cli.config).map(|_| 0),
    };

    match result {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(err) => {
            eprintln!("{} {}", "Error:".bold().red(), err.user_message());
            process::exit(1);
        }
    }
}

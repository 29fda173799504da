//! strut CLI — convention enforcement for layered architectures.
//!
//! This binary provides the `strut` command with subcommands for
//! initialization and snapshot checking. See `strut --help` for usage.

use clap::Parser;

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let formatter: Box<dyn strut_output::OutputFormatter> = if cli.json {
        Box::new(strut_output::json::JsonFormatter)
    } else {
        Box::new(strut_output::human::HumanFormatter)
    };

    let exit_code = match cli.command {
        Commands::Init { config_dir } => commands::init::run(config_dir),
        Commands::Check {
            snapshot,
            strict,
            config_dir,
        } => commands::check::run(&*formatter, cli.verbose, snapshot, strict, config_dir),
    };

    std::process::exit(exit_code);
}

//! Lab synonym finder CLI.

use clap::Parser;

use labsyn_cli::cli::{Cli, Command};
use labsyn_cli::commands::{run_scan, run_show};
use labsyn_cli::logging::init_logging;
use labsyn_cli::summary::{print_summary, render_json};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    if let Err(error) = init_logging(&cli.log_config()) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let outcome = match &cli.command {
        Command::Scan(args) => run_scan(args).map(|result| print_summary(&result)),
        Command::Show(args) => run_show(args).and_then(|result| {
            if args.json {
                println!("{}", render_json(&result)?);
            } else {
                print_summary(&result);
            }
            Ok(())
        }),
    };
    let exit_code = match outcome {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

use clap::Parser;

use bslint::cli::{Cli, Commands};
use bslint::commands::{run_check, run_config, run_init, run_tokens};

fn main() {
    let cli = Cli::parse();
    bslint::init_tracing(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Tokens(args) => run_tokens(args, &cli),
        Commands::Init(args) => run_init(args),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}

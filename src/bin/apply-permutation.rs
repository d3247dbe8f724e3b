use std::process::ExitCode;

use ::algo_drills::error::Error;
use ::algo_drills::permutation::apply_permutation;
use ::algo_drills::utils::{format_sequence, init_tracing, parse_list};
use clap::Parser;
use colored::Colorize;

use tracing::info;

/// Apply a permutation in place: values[i] goes to position permutation[i]
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// e.g. "a,b,c,d"
    values: String,

    /// e.g. "2,0,1,3"
    permutation: String,
}

fn run(cli: &Cli) -> Result<(), Error> {
    let mut values: Vec<String> = parse_list(&cli.values)?;
    let mut permutation: Vec<usize> = parse_list(&cli.permutation)?;

    println!("values:      {}", format_sequence(&values));
    println!("permutation: {}", format_sequence(&permutation));

    apply_permutation(&mut values, &mut permutation)?;
    info!("applied permutation of {} values", values.len());

    println!("values:      {}", format_sequence(&values));
    // handed back unchanged
    println!("permutation: {}", format_sequence(&permutation));
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", Colorize::red(e.to_string().as_str()));
            ExitCode::FAILURE
        }
    }
}

// one exercise per run:
// - parse the input,
// - print it, run the routine, print the result.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use colored::Colorize;
use rand::SeedableRng;
use rand::rngs::StdRng;

use algo_drills::arrays::digits::{increment_digits, multiply_digits};
use algo_drills::arrays::stock::{max_profit_once, max_profit_twice};
use algo_drills::arrays::{can_reach_end, dedup_sorted, dutch_flag_partition};
use algo_drills::bits::{parity, reverse_bits, swap_bits};
use algo_drills::error::Error;
use algo_drills::permutation::{apply_permutation, next_permutation};
use algo_drills::primes::primes_up_to;
use algo_drills::primitive::{Rectangle, is_palindrome_number, power, reverse_digits};
use algo_drills::sampling::{random_subset, reservoir_sample};
use algo_drills::utils::{format_sequence, parse_list};

use tracing::debug;

/// Run one exercise and show its input and output
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    verbosity: clap_verbosity_flag::Verbosity,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Move values[i] to position permutation[i], in place
    Permute {
        /// e.g. "a,b,c,d"
        values: String,
        /// e.g. "2,0,1,3"
        permutation: String,
    },
    /// 1 if the number of set bits is odd
    Parity { number: u64 },
    SwapBits { number: u64, i: u32, j: u32 },
    ReverseBits { number: u64 },
    /// base^exponent by squaring
    Power {
        #[arg(allow_negative_numbers = true)]
        base: f64,
        #[arg(allow_negative_numbers = true)]
        exponent: i32,
    },
    /// Reverse the decimal digits
    Reverse {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },
    Palindrome {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },
    /// Intersect two rectangles given as "x,y,width,height"
    Rectangle {
        #[arg(allow_hyphen_values = true)]
        first: String,
        #[arg(allow_hyphen_values = true)]
        second: String,
    },
    /// Dutch national flag partition around values[pivot]
    Partition {
        #[arg(allow_hyphen_values = true)]
        values: String,
        pivot: usize,
    },
    /// Add one to a number given as decimal digits
    Increment { digits: String },
    /// Multiply two numbers given as decimal digits, sign on the leading one
    Multiply {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Can the last index be reached, advancing at most steps[i] from i?
    Reach { steps: String },
    /// Remove duplicates from a sorted list
    Dedup {
        #[arg(allow_hyphen_values = true)]
        values: String,
    },
    /// Best profit from buying and selling
    Profit {
        #[arg(allow_hyphen_values = true)]
        prices: String,
        /// allow a second trade
        #[arg(long, short = 't')]
        twice: bool,
    },
    /// All primes up to n
    Primes { n: usize },
    /// Next permutation in lexicographic order
    Next {
        #[arg(allow_hyphen_values = true)]
        values: String,
    },
    /// Pick k values at random
    Sample {
        #[arg(allow_hyphen_values = true)]
        values: String,
        k: usize,
        /// sample as if reading a stream
        #[arg(long, short = 'o')]
        online: bool,
        #[arg(long, short = 's')]
        seed: Option<u64>,
    },
}

fn rectangle(input: &str) -> Result<Rectangle, Error> {
    match parse_list::<i64>(input)?.as_slice() {
        &[x, y, width, height] => Ok(Rectangle::new(x, y, width, height)),
        _ => Err(Error::Parse(input.to_owned())),
    }
}

fn run(command: Commands) -> Result<(), Error> {
    debug!("running {:?}", command);
    match command {
        Commands::Permute {
            values,
            permutation,
        } => {
            let mut values: Vec<String> = parse_list(&values)?;
            let mut permutation: Vec<usize> = parse_list(&permutation)?;
            println!("{} by {}", format_sequence(&values), format_sequence(&permutation));
            apply_permutation(&mut values, &mut permutation)?;
            println!("{}", format_sequence(&values));
        }
        Commands::Parity { number } => {
            println!("{:b}: {}", number, parity(number));
        }
        Commands::SwapBits { number, i, j } => {
            if i >= u64::BITS || j >= u64::BITS {
                return Err(Error::Parse(format!("bit {} or {}", i, j)));
            }
            let swapped = swap_bits(number, i, j);
            println!("{:b} -> {:b} ({})", number, swapped, swapped);
        }
        Commands::ReverseBits { number } => {
            let reversed = reverse_bits(number);
            println!("{:064b}\n{:064b} ({})", number, reversed, reversed);
        }
        Commands::Power { base, exponent } => {
            println!("{}^{} = {}", base, exponent, power(base, exponent));
        }
        Commands::Reverse { number } => match reverse_digits(number) {
            Some(reversed) => println!("{} -> {}", number, reversed),
            None => return Err(algo_drills::InputError::Overflow.into()),
        },
        Commands::Palindrome { number } => {
            println!("{}: {}", number, is_palindrome_number(number));
        }
        Commands::Rectangle { first, second } => {
            let first = rectangle(&first)?;
            let second = rectangle(&second)?;
            match first.intersection(&second) {
                Some(r) => println!("{},{},{},{}", r.x, r.y, r.width, r.height),
                None => println!("no intersection"),
            }
        }
        Commands::Partition { values, pivot } => {
            let mut values: Vec<i64> = parse_list(&values)?;
            println!("{} around index {}", format_sequence(&values), pivot);
            dutch_flag_partition(&mut values, pivot)?;
            println!("{}", format_sequence(&values));
        }
        Commands::Increment { digits } => {
            let mut digits: Vec<u8> = parse_list(&digits)?;
            println!("{}", format_sequence(&digits));
            increment_digits(&mut digits)?;
            println!("{}", format_sequence(&digits));
        }
        Commands::Multiply { a, b } => {
            let a: Vec<i8> = parse_list(&a)?;
            let b: Vec<i8> = parse_list(&b)?;
            let product = multiply_digits(&a, &b)?;
            println!("{} * {} = {}", format_sequence(&a), format_sequence(&b), format_sequence(&product));
        }
        Commands::Reach { steps } => {
            let steps: Vec<usize> = parse_list(&steps)?;
            println!("{}: {}", format_sequence(&steps), can_reach_end(&steps));
        }
        Commands::Dedup { values } => {
            let mut values: Vec<i64> = parse_list(&values)?;
            println!("{}", format_sequence(&values));
            let count = dedup_sorted(&mut values);
            println!("{} ({} unique)", format_sequence(&values), count);
        }
        Commands::Profit { prices, twice } => {
            let prices: Vec<i64> = parse_list(&prices)?;
            let profit = if twice {
                max_profit_twice(&prices)
            } else {
                max_profit_once(&prices)
            };
            println!("{}: {}", format_sequence(&prices), profit);
        }
        Commands::Primes { n } => {
            println!("{}", format_sequence(&primes_up_to(n)?));
        }
        Commands::Next { values } => {
            let mut values: Vec<i64> = parse_list(&values)?;
            println!("{}", format_sequence(&values));
            if next_permutation(&mut values) {
                println!("{}", format_sequence(&values));
            } else {
                println!("already the last permutation");
            }
        }
        Commands::Sample {
            values,
            k,
            online,
            seed,
        } => {
            let mut values: Vec<String> = parse_list(&values)?;
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            println!("{}", format_sequence(&values));
            if online {
                let sample = reservoir_sample(values, k, &mut rng);
                println!("{}", format_sequence(&sample));
            } else {
                let sample = random_subset(&mut values, k, &mut rng)?;
                println!("{}", format_sequence(sample));
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity.tracing_level_filter())
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.to_string().red());
            ExitCode::FAILURE
        }
    }
}

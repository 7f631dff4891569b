//! Command-line interface for the bijective term codec.
//!
//! Wraps the [`goedel_terms`] library in three small commands: `encode`
//! turns a textual term into its natural-number code, `decode` turns a
//! decimal code back into a term, and `enumerate` prints the first codes of
//! the enumeration side by side with their terms.

mod error;
mod parser;
mod token;

use clap::{Parser, Subcommand};
use error::CliError;
use goedel_terms::Term;
use num_bigint::BigUint;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode a term written as `v<i>`, `F<f>` or `F<f>(t1,...,tn)`
    Encode {
        /// The term text, e.g. "F1(v0,F2)"
        term: String,
    },
    /// Decode a natural number (decimal) into its term
    Decode {
        /// The code, e.g. "1166589096937670191"
        code: String,
    },
    /// Print the first codes of the enumeration with their terms
    Enumerate {
        /// How many codes to print, starting from 0
        #[arg(short, long, default_value_t = 32)]
        count: u64,
    },
}

fn main() -> Result<(), CliError> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Encode { term } => {
            let term = parser::parse_term(&term)?;
            log::debug!("parsed {term:?}");
            println!("{}", term.to_code());
        }
        Commands::Decode { code } => {
            let code: BigUint = code.parse()?;
            println!("{}", Term::from_code(&code));
        }
        Commands::Enumerate { count } => {
            for n in 0..count {
                let code = BigUint::from(n);
                println!("{n:>8}  {}", Term::from_code(&code));
            }
        }
    }

    Ok(())
}

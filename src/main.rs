use std::fs;

use clap::Parser;
use numera::evaluate_source;

/// numera is an easy to use evaluator for simple arithmetic expressions.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells numera to look at a file instead of an inline expression.
    #[arg(short, long)]
    file: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let expression = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match evaluate_source(&expression) {
        Ok(value) => println!("{value}"),
        Err(e) => eprintln!("{e}"),
    }
}

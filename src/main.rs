use std::fs;

use clap::Parser;
use veritab::{Analysis, analyze};

/// veritab builds the full truth table of a propositional-logic formula
/// written with the connectives ¬, ∧, ∨, and →.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells veritab to read the formula from a file instead of the
    /// command line.
    #[arg(short, long)]
    file: bool,

    /// Prints the parsed expression tree as JSON before the table.
    #[arg(short, long)]
    ast: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let formula = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                      &args.contents);
            std::process::exit(1);
        })
    } else {
        args.contents
    };

    match analyze(&formula) {
        Ok(analysis) => print_analysis(&analysis, args.ast),
        Err(e) => eprintln!("{e}"),
    }
}

fn print_analysis(analysis: &Analysis, with_ast: bool) {
    if with_ast {
        match serde_json::to_string_pretty(&analysis.ast) {
            Ok(json) => println!("{json}"),
            Err(e) => eprintln!("{e}"),
        }
    }

    for row in &analysis.table.rows {
        let result = if row.result { "T" } else { "F" };
        println!("{}  =>  {result}", row.describe());
    }
}

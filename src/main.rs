//! Reads a mode-plus-formula file and prints one classification/verdict line
//! per formula, colouring verdict lines by outcome.

use tableau_sat::driver;

use clap::builder::PossibleValuesParser;
use clap::Parser;

use log::LevelFilter;
use simple_logger::SimpleLogger;

use std::io::{self, IsTerminal, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Structure to collect CLI arguments.
#[derive(Parser)]
#[clap(
    version,
    about = "Analytic tableau decision procedure for a small propositional/first-order logic."
)]
struct Arguments {
    /// Path to a file with a mode line (containing `PARSE` and/or `SAT`)
    /// followed by one formula per line.
    input_path: String,

    /// When to colour verdict lines written to stdout.
    #[clap(long, default_value = "auto", value_parser = PossibleValuesParser::new(["auto", "always", "never"]))]
    color: String,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace).
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Arguments::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::new().with_level(level).init().unwrap();

    let path = Path::new(args.input_path.as_str());
    if !path.is_file() {
        println!("{} is not a valid file", args.input_path);
        return;
    }

    let lines = match driver::run(path) {
        Ok(lines) => lines,
        Err(e) => {
            println!("{e}");
            return;
        }
    };

    let color_choice = match args.color.as_str() {
        "always" => ColorChoice::Always,
        "never" => ColorChoice::Never,
        // "auto" is the only remaining possible value.
        _ => {
            if io::stdout().is_terminal() {
                ColorChoice::Auto
            } else {
                ColorChoice::Never
            }
        }
    };

    let mut stdout = StandardStream::stdout(color_choice);
    for line in lines {
        print_line(&mut stdout, &line);
    }
}

/// Print one driver output line, colouring it by verdict if it ends in one
/// of the three fixed verdict phrases (green/red/yellow for open/closed/
/// exhausted); `PARSE`-mode lines print uncoloured.
fn print_line(stdout: &mut StandardStream, line: &str) {
    let color = if line.ends_with("is not satisfiable.") {
        Some(Color::Red)
    } else if line.ends_with("is satisfiable.") {
        Some(Color::Green)
    } else if line.ends_with("may or may not be satisfiable.") {
        Some(Color::Yellow)
    } else {
        None
    };

    match color {
        Some(color) => {
            stdout
                .set_color(ColorSpec::new().set_fg(Some(color)))
                .unwrap();
            writeln!(stdout, "{line}").unwrap();
            stdout.reset().unwrap();
        }
        None => writeln!(stdout, "{line}").unwrap(),
    }
}

//! Reads a mode-plus-formula input file and renders `PARSE`/`SAT` output
//! lines. This is the one real I/O boundary in the crate; everything
//! else (`classify`, `expand`, `decide`) is total.

use std::fmt;
use std::fs::read_to_string;
use std::io;
use std::path::Path;

use log::{debug, warn};

use crate::decide::decide;
use crate::preprocessing::{classify, connective, lhs, rhs, Category};
use crate::tableau::Verdict;

/// The one fallible boundary this crate exposes.
#[derive(Debug)]
pub enum DriverError {
    /// The input file could not be opened or read.
    Io(io::Error),
    /// The input file existed but contained no lines at all, not even a
    /// mode line.
    EmptyInput,
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DriverError::Io(e) => write!(f, "could not read input file: {e}"),
            DriverError::EmptyInput => write!(f, "input file contained no lines"),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::Io(e) => Some(e),
            DriverError::EmptyInput => None,
        }
    }
}

impl From<io::Error> for DriverError {
    fn from(e: io::Error) -> Self {
        DriverError::Io(e)
    }
}

/// Which driver modes the first line selects, by substring match.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct Modes {
    parse: bool,
    sat: bool,
}

/// Run the driver against the file at `path`, returning one rendered line of
/// output per enabled mode per non-blank formula line that follows the mode
/// line, in file order.
pub fn run(path: &Path) -> Result<Vec<String>, DriverError> {
    let contents = read_to_string(path)?;
    let mut lines = contents.lines();

    let first_line = lines.next().ok_or(DriverError::EmptyInput)?;
    let modes = Modes {
        parse: first_line.contains("PARSE"),
        sat: first_line.contains("SAT"),
    };
    debug!(
        "driver modes for {}: parse={}, sat={}",
        path.display(),
        modes.parse,
        modes.sat
    );

    let mut output = Vec::new();
    for line in lines {
        let formula = line.trim();
        if formula.is_empty() {
            continue;
        }
        let category = classify(formula);

        if modes.parse {
            output.push(render_parse_line(formula, category));
        }
        if modes.sat {
            output.push(render_sat_line(formula, category));
        }
    }
    Ok(output)
}

fn render_parse_line(formula: &str, category: Category) -> String {
    let mut line = format!("{formula} is {category}.");
    if matches!(
        category,
        Category::BinaryFirstOrder | Category::BinaryPropositional
    ) {
        let l = lhs(formula).expect("a binary-classified formula always splits");
        let c = connective(formula).expect("a binary-classified formula always splits");
        let r = rhs(formula).expect("a binary-classified formula always splits");
        line.push_str(&format!(
            " Its left hand side is {l}, its connective is {c}, and its right hand side is {r}."
        ));
    }
    line
}

fn render_sat_line(formula: &str, category: Category) -> String {
    if category == Category::NotAFormula {
        return format!("{formula} is not a formula.");
    }
    let verdict = decide(formula);
    if verdict == Verdict::Exhausted {
        warn!("{formula} exhausted the witness budget before reaching a verdict");
    }
    format!("{formula} {verdict}.")
}

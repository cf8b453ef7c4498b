//! Solve command - evaluate the worksheet and print both totals.

use anyhow::{Context, Result};
use std::path::Path;

use crate::evaluate::{Totals, evaluate_file};
use crate::log_event;

/// Load the worksheet at `input` and compute its totals.
pub fn solve(input: &Path) -> Result<Totals> {
    log_event!("solve", "input", "{}", input.display());

    let totals =
        evaluate_file(input).with_context(|| format!("failed to evaluate {}", input.display()))?;
    log_event!("solve", "done", "{} / {}", totals.part1, totals.part2);
    Ok(totals)
}

/// Run solve command - print the two-line report to stdout.
pub fn run(input: &Path) -> Result<()> {
    let totals = solve(input)?;
    println!("{totals}");
    Ok(())
}

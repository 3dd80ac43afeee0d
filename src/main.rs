//! Command line entry point: reads a load list, dispatches it, and prints one
//! route per driver.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::error::ErrorKind;
use clap::Parser;
use u_dispatch::constructive::clarke_wright_savings;
use u_dispatch::evaluation::RouteEvaluator;
use u_dispatch::io::{read_loads_from_path, write_routes};
use u_dispatch::models::DispatchProblem;

const USAGE: &str = "Usage: vrp <input.csv>";

#[derive(Debug, Parser)]
#[command(name = "vrp", version, about = "Dispatches pickup-and-delivery loads to drivers")]
struct Args {
    /// Load list: a header line, then `id (x,y) (x,y)` per line
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let start = Instant::now();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(());
        }
        Err(_) => {
            println!("{USAGE}");
            return Ok(());
        }
    };

    let loads = match read_loads_from_path(&args.input) {
        Ok(loads) => loads,
        Err(err) => {
            println!("Error loading problem: {err}");
            return Ok(());
        }
    };

    let problem = DispatchProblem::new(loads);
    let solution = clarke_wright_savings(&problem);

    let mut out = std::io::stdout().lock();
    write_routes(&mut out, &solution)
        .with_context(|| format!("writing routes for {}", args.input.display()))?;

    // No logger is installed here; violations go straight to stderr.
    for violation in RouteEvaluator::new(&problem).validate(&solution) {
        eprintln!("warning: {violation}");
    }
    eprintln!("total cost: {}", solution.total_cost());
    eprintln!("time taken: {}", start.elapsed().as_millis());
    Ok(())
}

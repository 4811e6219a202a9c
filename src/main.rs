use knapsack_bnb::ioutils::{format_report, InstanceFromFile, ReportFromFile};
use knapsack_bnb::solvers::{Methods, Solver, SolverTrait};
use knapsack_bnb::{Error, Solution};

use log::{info, warn, LevelFilter};
use std::process;
use std::time::Instant;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "knapsack", author = "Martin Quarda <martin@quarda.cz>")]
pub struct Opts {
    /// Instance file: `N K` on the first line, then N lines `value weight`
    input_task: InstanceFromFile,
    /// Reference report (`value flag` and optional 0/1 line) to compare with
    solution: Option<ReportFromFile>,
    /// branch-and-bound (bb) or dynamic (dp)
    #[structopt(long, default_value = "branch-and-bound")]
    method: Methods,
    /// Recover the selected items with branch and bound too
    #[structopt(long)]
    track_selection: bool,
    /// Decision version: only report whether this value is reachable
    #[structopt(long)]
    min_value: Option<u64>,
    /// Solve with the other method as well and fail if the values differ
    #[structopt(long)]
    cross_check: bool,
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    builder.init();
}

fn check_reference(reference: &Solution, solution: &Solution) -> Result<(), Error> {
    if reference.value != solution.value {
        return Err(Error::ReferenceMismatch {
            expected: reference.value,
            found: solution.value,
        });
    }
    if let (Some(expected), Some(found)) = (&reference.items, &solution.items) {
        if expected != found {
            warn!("Same value, but different selection!");
        }
    }
    Ok(())
}

fn run(opts: Opts) -> Result<(), Error> {
    let problem = &opts.input_task.0;
    let solver = Solver::from_method(opts.method, opts.track_selection);

    let start = Instant::now();
    let solution = match opts.min_value {
        Some(min_value) => solver.decision(problem, min_value),
        None => Some(solver.construction(problem)),
    };
    info!(
        "{:?} on {} items, capacity {}: {:?}",
        opts.method,
        problem.len(),
        problem.capacity(),
        start.elapsed()
    );

    let solution = match solution {
        Some(solution) => solution,
        None => {
            println!("none");
            return Ok(());
        }
    };

    if opts.cross_check {
        let other_method = match opts.method {
            Methods::BranchAndBound => Methods::DynamicProgramming,
            Methods::DynamicProgramming => Methods::BranchAndBound,
        };
        let start = Instant::now();
        let other = Solver::from_method(other_method, false).construction(problem);
        info!("{:?} cross check: {:?}", other_method, start.elapsed());
        check_reference(&other, &solution)?;
    }

    if let Some(reference) = &opts.solution {
        check_reference(&reference.0, &solution)?;
    }

    if solution.items.is_some() && !solution.is_consistent(problem) {
        warn!("Selection does not add up to the reported value!");
    }

    println!("{}", format_report(&solution, solver.report_flag()));
    Ok(())
}

fn main() {
    let opts = Opts::from_args();
    init_logger(opts.verbose);
    if let Err(e) = run(opts) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

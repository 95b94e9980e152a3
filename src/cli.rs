use std::io::{self, BufRead, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use num_rational::BigRational;
use solve24::solver::constants::DEFAULT_TARGET;
use solve24::utils::{parse_operand, parse_operator_set};
use solve24::{Operator, SearchMode, SearchOutcome, SearchRequest, Solver, parse_target};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// solve24 - Combine numbers with arithmetic operators to reach a target
#[derive(Parser, Debug)]
#[command(name = "solve24")]
#[command(
    about = "Find every arithmetic expression over the given numbers that evaluates to a target value"
)]
#[command(version)]
pub struct CliArgs {
    /// Numbers to combine; omit them to enter numbers interactively
    #[arg(allow_negative_numbers = true)]
    pub numbers: Vec<i64>,

    /// Target value, an integer or a fraction such as 7/2 (default: 24)
    #[arg(short, long, allow_hyphen_values = true)]
    pub target: Option<String>,

    /// Stop at the first solution found
    #[arg(short, long)]
    pub quick: bool,

    /// Operators to use, comma separated symbols or names (+,-,*,/ or add,sub,mul,div,pow)
    #[arg(short, long, default_value = "+,-,*,/")]
    pub operators: String,

    /// Print solutions in postfix notation instead of infix
    #[arg(long)]
    pub postfix: bool,

    /// Split the search across all CPU cores
    #[arg(long)]
    pub parallel: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub numbers: Vec<i64>,
    pub target: BigRational,
    pub mode: SearchMode,
    pub operators: Vec<Operator>,
    pub postfix: bool,
    pub parallel: bool,
    pub log_level: LogLevel,
}

/// Validate parsed arguments into a configuration
pub fn config_from_args(args: CliArgs) -> Result<CliConfig> {
    let target = match args.target.as_deref() {
        Some(raw) => parse_target(raw).context("Invalid target")?,
        None => BigRational::from_integer(DEFAULT_TARGET.into()),
    };
    let operators = parse_operator_set(&args.operators).context("Invalid operator set")?;
    let mode = if args.quick {
        SearchMode::FirstMatch
    } else {
        SearchMode::Exhaustive
    };

    Ok(CliConfig {
        numbers: args.numbers,
        target,
        mode,
        operators,
        postfix: args.postfix,
        parallel: args.parallel,
        log_level: args.log_level,
    })
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    config_from_args(CliArgs::parse())
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Print the solutions of one search followed by its summary line
pub fn report<W: Write>(out: &mut W, outcome: &SearchOutcome, postfix: bool) -> io::Result<()> {
    writeln!(out)?;
    for solution in outcome.solutions() {
        if postfix {
            writeln!(out, "{}", solution.to_postfix_string())?;
        } else {
            writeln!(out, "{}", solution)?;
        }
    }

    match outcome.mode() {
        SearchMode::Exhaustive => writeln!(out, "=== {} ===", outcome.summary()),
        SearchMode::FirstMatch if outcome.is_empty() => {
            writeln!(out, "No solution for {:?}", outcome.sorted_operands())
        }
        SearchMode::FirstMatch => Ok(()),
    }
}

/// Solve one batch of numbers and print the result
pub fn run_batch<W: Write>(
    solver: &Solver,
    config: &CliConfig,
    numbers: Vec<i64>,
    out: &mut W,
) -> Result<()> {
    let request = SearchRequest::new(numbers, config.target.clone(), config.mode)
        .context("Invalid search request")?;

    let start = Instant::now();
    let outcome = if config.parallel {
        solver.solve_parallel(&request)
    } else {
        solver.solve(&request)
    };
    let elapsed = start.elapsed();

    report(out, &outcome, config.postfix).context("Failed to write solutions")?;
    writeln!(out, "Execution time: {:.6}s", elapsed.as_secs_f64())?;
    Ok(())
}

/// Collect numbers line by line; any non-integer line (or end of input)
/// submits the numbers gathered so far as one search.
pub fn run_interactive<R: BufRead, W: Write>(
    solver: &Solver,
    config: &CliConfig,
    input: R,
    out: &mut W,
) -> Result<()> {
    let mut batch: Vec<i64> = Vec::new();
    let mut lines = input.lines();

    loop {
        write!(out, "Number please: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read input")?;

        match parse_operand(&line) {
            Ok(number) => batch.push(number),
            Err(_) if batch.is_empty() => warn!("No numbers entered yet, nothing to solve"),
            Err(_) => {
                run_batch(solver, config, std::mem::take(&mut batch), out)?;
                writeln!(out)?;
            }
        }
    }

    writeln!(out)?;
    if !batch.is_empty() {
        run_batch(solver, config, batch, out)?;
    }
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let solver = Solver::with_operators(config.operators.clone());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.numbers.is_empty() {
        info!("No numbers on the command line, reading them interactively");
        let stdin = io::stdin();
        run_interactive(&solver, &config, stdin.lock(), &mut out)
    } else {
        run_batch(&solver, &config, config.numbers.clone(), &mut out)
    }
}

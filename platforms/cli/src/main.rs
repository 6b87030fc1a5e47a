use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;
use tapesim::programs::{self, Comparison, PROGRAMS};
use tapesim::{Outcome, Snapshot, Step, DEFAULT_MAX_STEPS};

#[derive(Parser)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
struct Cli {
    /// Maximum number of steps a single run may execute
    #[clap(long, global = true, env = "TAPESIM_MAX_STEPS", default_value_t = DEFAULT_MAX_STEPS)]
    max_steps: usize,

    /// Print each step of the execution
    #[clap(short = 'd', long, global = true)]
    debug: bool,

    /// Print results as JSON
    #[clap(long, global = true)]
    json: bool,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Add one to a binary number on a single tape
    Increment {
        /// The binary number, e.g. 1011
        binary: String,
    },
    /// Decide whether a word over `abcd` is a palindrome using two tapes
    Palindrome {
        /// The word to check
        word: String,
    },
    /// Compare step counts of the single-tape and two-tape copy programs
    Compare {
        /// Input lengths to measure
        #[clap(long, value_delimiter = ',', default_values_t = vec![4, 8, 12])]
        sizes: Vec<usize>,
    },
    /// Run every demonstration with its default input
    All,
    /// List the bundled programs
    List,
}

/// The final configuration of one program run.
#[derive(Debug, Serialize)]
struct Report {
    program: &'static str,
    input: String,
    outcome: Outcome,
    state: String,
    /// Trimmed content of each tape.
    tapes: Vec<String>,
    steps: usize,
}

impl Report {
    fn print(&self) {
        println!("Program: {} ({})", self.program, self.input);
        for (i, tape) in self.tapes.iter().enumerate() {
            println!("  Tape {}: {}", i + 1, tape);
        }
        println!("  Final state: {}", self.state);
        println!("  Total steps taken: {}", self.steps);
        if self.outcome == Outcome::BudgetExhausted {
            println!("  Warning: maximum steps reached!");
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    info!("step budget: {}", cli.max_steps);

    match &cli.command {
        Command::Increment { binary } => {
            let report = increment(&cli, binary)?;
            emit(&cli, &report, Report::print)?;
        }
        Command::Palindrome { word } => {
            let report = palindrome(&cli, word)?;
            emit(&cli, &report, print_palindrome)?;
        }
        Command::Compare { sizes } => {
            let rows = programs::compare_efficiency(sizes, cli.max_steps)?;
            emit(&cli, &rows, |rows| print_comparison(rows))?;
        }
        Command::All => {
            let reports = vec![
                increment(&cli, "1011")?,
                palindrome(&cli, "abba")?,
                palindrome(&cli, "abc")?,
            ];
            let rows = programs::compare_efficiency(&[4, 8, 12], cli.max_steps)?;

            if cli.json {
                let value = serde_json::json!({ "runs": reports, "comparison": rows });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                for report in &reports {
                    report.print();
                    println!();
                }
                print_comparison(&rows);
            }
        }
        Command::List => emit(&cli, &PROGRAMS, |catalog| {
            for program in catalog {
                println!(
                    "{:<18} {} tape(s), alphabet '{}'\n{:<18} {}",
                    program.name, program.tapes, program.alphabet, "", program.description
                );
            }
        })?,
    }

    Ok(())
}

/// Prints `value` as JSON or through `print`, depending on `--json`.
fn emit<T: Serialize + ?Sized>(cli: &Cli, value: &T, print: impl FnOnce(&T)) -> Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print(value);
    }
    Ok(())
}

/// Builds the per-step observer used for `--debug`.
fn tracer(cli: &Cli) -> impl FnMut(&Step, &Snapshot) + '_ {
    move |step: &Step, snapshot: &Snapshot| {
        if !cli.debug || cli.json {
            return;
        }
        match step {
            Step::Executed => println!("{snapshot}"),
            Step::Halted => println!("Machine halted!"),
            Step::Stuck(missing) => println!("{missing}"),
        }
    }
}

fn increment(cli: &Cli, binary: &str) -> Result<Report> {
    let mut machine = programs::binary_increment(binary)
        .with_context(|| format!("cannot increment '{binary}'"))?;

    if cli.debug && !cli.json {
        println!("Initial configuration:\n{machine}");
    }
    let outcome = machine.run_with(cli.max_steps, tracer(cli));

    Ok(Report {
        program: "binary-increment",
        input: binary.to_string(),
        outcome,
        state: machine.state().to_string(),
        tapes: vec![machine.tape_content()],
        steps: machine.step_count(),
    })
}

fn palindrome(cli: &Cli, word: &str) -> Result<Report> {
    let mut machine =
        programs::palindrome(word).with_context(|| format!("cannot check '{word}'"))?;

    if cli.debug && !cli.json {
        println!("Initial configuration:\n{machine}");
    }
    let outcome = machine.run_with(cli.max_steps, tracer(cli));

    Ok(Report {
        program: "palindrome",
        input: word.to_string(),
        outcome,
        state: machine.state().to_string(),
        tapes: machine.tape_contents().to_vec(),
        steps: machine.step_count(),
    })
}

fn print_palindrome(report: &Report) {
    report.print();
    match report.state.as_str() {
        "accept" => println!("Result: '{}' IS a palindrome!", report.input),
        "reject" => println!("Result: '{}' is NOT a palindrome.", report.input),
        _ => println!("Result: undecided for '{}'", report.input),
    }
}

fn print_comparison(rows: &[Comparison]) {
    println!("Problem: copy a string of length n");
    println!("  Single-Tape: O(n^2), walks back and forth for each symbol");
    println!("  Two-Tape: O(n), copies directly onto the second tape");
    println!();
    println!(
        "{:<12} {:<20} {:<20} {:<10}",
        "Input Size", "Single-Tape Steps", "Two-Tape Steps", "Speedup"
    );
    for row in rows {
        println!(
            "{:<12} {:<20} {:<20} {:.1}x",
            row.size,
            row.single_tape_steps,
            row.two_tape_steps,
            row.speedup()
        );
        if row.single_tape_outcome == Outcome::BudgetExhausted {
            println!("  (single-tape run hit the step budget)");
        }
    }
}

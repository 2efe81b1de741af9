//! CLI entrypoint for the Walrus runtime conformance harness.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use walrus_rt_harness::report::render_markdown;
use walrus_rt_harness::{FixtureSet, HarnessError, TestRunner};

/// Conformance tooling for the Walrus runtime.
#[derive(Debug, Parser)]
#[command(name = "walrus-rt-harness")]
#[command(about = "Conformance testing harness for the Walrus runtime")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the runtime implementation against a fixture file.
    Verify {
        /// Fixture JSON file.
        #[arg(long)]
        fixture: PathBuf,
        /// Optional output report path (markdown). Printed to stdout when
        /// omitted.
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Print an example fixture set illustrating the schema.
    Schema,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(all_passed) => {
            if all_passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool, HarnessError> {
    match cli.command {
        Command::Verify { fixture, report } => {
            let set = FixtureSet::from_file(&fixture)?;
            let runner = TestRunner::new(set.suite.clone());
            let results = runner.run(&set);
            let (summary, md) = render_markdown(&runner.campaign, &results);

            match report {
                Some(path) => {
                    std::fs::write(&path, &md).map_err(|source| HarnessError::ReportWrite {
                        path: path.clone(),
                        source,
                    })?;
                    println!(
                        "{} / {} cases passed; report written to {}",
                        summary.passed,
                        summary.total,
                        path.display()
                    );
                }
                None => print!("{md}"),
            }
            Ok(summary.all_passed())
        }
        Command::Schema => {
            let example = example_fixture_set();
            println!("{}", example.to_json()?);
            Ok(true)
        }
    }
}

fn example_fixture_set() -> FixtureSet {
    use walrus_rt_harness::{FixtureCase, Op};

    FixtureSet {
        version: walrus_rt_harness::fixtures::SCHEMA_VERSION.to_string(),
        suite: "example".to_string(),
        cases: vec![FixtureCase {
            name: "print_and_read".to_string(),
            ops: vec![Op::PrintInt(1), Op::PrintStr("x".to_string()), Op::GetsInt],
            stdin: "9".to_string(),
            expected_stdout: "Out: 1\nOut: x\n".to_string(),
            expected_returns: vec![0, 0, 9],
        }],
    }
}

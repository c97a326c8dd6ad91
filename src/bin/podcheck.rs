//! Command-line front end: read manifest files, validate, report.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

/// Validate Pod workload manifests against the built-in schema.
#[derive(Debug, Parser)]
#[command(
    name = "podcheck",
    version,
    about = "Validate Pod workload manifests against the built-in schema."
)]
struct Args {
    /// Manifest files to validate.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Emit violations as JSON instead of plain text.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    let mut failed = false;

    for file in &args.files {
        let display = file.display().to_string();

        let content = match fs::read_to_string(file) {
            Ok(content) => content,
            Err(err) => {
                eprintln!("{display}: {err}");
                failed = true;
                continue;
            }
        };

        let errors = match podcheck::check(&content, &display) {
            Ok(errors) => errors,
            Err(err) => {
                eprintln!("{display}: {err}");
                failed = true;
                continue;
            }
        };

        if !errors.is_empty() {
            failed = true;
        }

        if args.json {
            match serde_json::to_string_pretty(&errors) {
                Ok(rendered) => println!("{rendered}"),
                Err(err) => {
                    eprintln!("{display}: {err}");
                    failed = true;
                }
            }
        } else if errors.is_empty() {
            println!("{display} is valid");
        } else {
            for error in &errors {
                println!("{error}");
            }
        }
    }

    if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

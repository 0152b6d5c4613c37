use clap::Parser;
use std::path::Path;
use std::process::ExitCode;

use duesort::patcher::patch_file;
use duesort::rules::due_date_rules;

/// The file this migration rewrites, fixed at authoring time.
const TARGET_FILE: &str = r"c:\Projects\nHabit_traker-main\lib\services\Activtity\Activity Instance Service\activity_instance_utility_service.dart";

#[derive(Parser)]
#[command(name = "duesort")]
#[command(
	author,
	version,
	about = "One-shot codemod that replaces a Firestore dueDate ordering clause with an in-memory null-first sort"
)]
struct Cli {}

fn main() -> ExitCode {
	let _cli = Cli::parse();

	// Failures are reported on stdout; the exit status stays 0 either way.
	match run() {
		Ok(()) => println!("Done"),
		Err(e) => println!("{e:#}"),
	}
	ExitCode::SUCCESS
}

fn run() -> anyhow::Result<()> {
	let rules = due_date_rules()?;
	patch_file(Path::new(TARGET_FILE), &rules)?;
	Ok(())
}

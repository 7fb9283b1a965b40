// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Unless --no-checkout: wipe the working copy and clone it fresh
// 3. Change into the repository and run the mdbook HTML build once
// 4. Print a run summary and exit with proper code (0 = success, 2 = error)
//
// The flow is strictly sequential with no state carried between steps:
// parsed options -> directory side effects -> one external build call.
//
// Rust concepts used:
// - async/await: The one git subprocess is awaited via tokio
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Option<T>: For data that only exists on some runs (the clone URL)
// =============================================================================

// Module declarations - tells Rust about our other source files
mod build; // src/build/ - the mdbook build call
mod checkout; // src/checkout/ - working-copy reset and git clone
mod cli; // src/cli.rs - command-line parsing

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::Instant;

// Summary of what a single publish run did
//
// Printed at the end of every run, as a short table or (with --json)
// as a JSON document for scripts to consume.
#[derive(Debug, Serialize)]
struct PublishReport {
    /// GitHub account the sources came from
    account: String,
    /// Branch that was built
    branch: String,
    /// Whether this run performed the delete + clone step
    checked_out: bool,
    /// URL that was cloned (absent when --no-checkout was given)
    #[serde(skip_serializing_if = "Option::is_none")]
    clone_url: Option<String>,
    /// Repository directory the build ran in
    book_dir: PathBuf,
    /// Book source directory inside the repository
    source: PathBuf,
    /// Output directory of the rendered site
    target: PathBuf,
    /// Wall-clock time for the whole run, in seconds
    elapsed_secs: f64,
}

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Run our application logic and capture the exit code
    // std::process::exit() terminates the program with the given code
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an error occurred anywhere, print it and exit with code 2
            // The {:#} format includes the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = site built successfully
//   Err   = checkout or build failed (main turns this into exit code 2)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();
    let started = Instant::now();

    // Where the clone lands (and where the build runs): <work-dir>/qc-workbook
    let book_dir = checkout::book_dir(&cli.work_dir);

    // Step 1: checkout, unless the user asked to reuse what's already there.
    // ensure_fresh_clone honors --no-checkout and handles the wipe + clone
    // ordering; it hands back the URL it cloned (or None).
    let url = checkout::repo_url(&cli.account);
    let clone_url = checkout::ensure_fresh_clone(&cli, &url).await?;

    // Step 2: build. We change into the repository first, the same way the
    // publish job has always run, so the source path stays relative.
    std::env::set_current_dir(&book_dir)
        .with_context(|| format!("failed to change into {}", book_dir.display()))?;

    println!(
        "🔨 Building HTML site from {} into {}",
        cli.source.display(),
        cli.target.display()
    );
    build::build_site(Path::new("."), &cli.source, &cli.target)?;

    // Step 3: report what we did
    let report = PublishReport {
        account: cli.account,
        branch: cli.branch,
        checked_out: clone_url.is_some(),
        clone_url,
        book_dir,
        source: cli.source,
        target: cli.target,
        elapsed_secs: started.elapsed().as_secs_f64(),
    };
    print_report(&report, cli.json)?;

    Ok(0)
}

// Prints the run summary either as a short table or JSON
// Parameters:
//   report: what this run did
//   json: whether to output JSON format
fn print_report(report: &PublishReport, json: bool) -> Result<()> {
    if json {
        // Serialize the report to JSON and print
        let json_output = serde_json::to_string_pretty(report)?;
        println!("{}", json_output);
    } else {
        println!();
        println!("✅ Site published");
        println!("   📦 Source: {}/{}", report.account, report.branch);
        if let Some(url) = &report.clone_url {
            println!("   ⬇️  Cloned: {}", url);
        } else {
            println!("   ⏭️  Checkout skipped");
        }
        println!(
            "   🔨 Built:  {} -> {}",
            report.source.display(),
            report.target.display()
        );
        println!("   ⏱️  Took:   {:.1}s", report.elapsed_secs);
    }
    Ok(())
}

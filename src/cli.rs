// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Every flag has a documented default, so running the tool with no arguments
// checks out UTokyo-ICEPP/qc-workbook at master under /tmp and builds the
// `source/jp` book into /build. There is no cross-field validation; anything
// malformed is rejected by clap itself (usage message, non-zero exit).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - PathBuf: An owned filesystem path (the String of paths)
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "workbook-publish",
    version = "0.1.0",
    about = "Check out the qc-workbook repository and build its HTML site",
    long_about = "workbook-publish clones the qc-workbook source repository from GitHub \
                  (unless told not to) and runs the mdbook HTML builder over it. \
                  It's meant to run unattended, e.g. from a cron job or CI pipeline."
)]
pub struct Cli {
    /// GitHub account of the source repository
    ///
    /// The repository name itself is fixed (qc-workbook); only the
    /// account half of the clone URL is configurable.
    #[arg(long, short = 'a', default_value = "UTokyo-ICEPP")]
    pub account: String,

    /// Branch from which to build the website
    #[arg(long, short = 'b', default_value = "master")]
    pub branch: String,

    /// Don't check out from GitHub
    ///
    /// Skips the delete + clone step entirely and builds whatever is
    /// already sitting in the working area.
    #[arg(long, short = 'n')]
    pub no_checkout: bool,

    /// Working area that holds (or will hold) the qc-workbook clone
    #[arg(long, short = 'w', value_name = "PATH", default_value = "/tmp")]
    pub work_dir: PathBuf,

    /// Book source directory, relative to the repository root
    #[arg(long, short = 'i', value_name = "PATH", default_value = "source/jp")]
    pub source: PathBuf,

    /// Output directory for the rendered HTML site
    #[arg(long, short = 'o', value_name = "PATH", default_value = "/build")]
    pub target: PathBuf,

    /// Output the run summary in JSON format instead of a table
    #[arg(long)]
    pub json: bool,

    /// Print extra progress output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why no subcommands?
//    - The tool does exactly one thing per run, so a flat set of flags
//      is simpler than a Commands enum
//    - clap still generates --help and --version for free
//
// 2. Why PathBuf instead of String for paths?
//    - PathBuf is the owned path type; clap parses into it directly
//    - Path methods like .join() then work without conversions
//    - It also handles non-UTF-8 paths, which String cannot
//
// 3. What does default_value do?
//    - If the user omits the flag, clap fills in the documented default
//    - The defaults here mirror how the production publish job runs
//
// 4. Why 'pub' on every field?
//    - main.rs reads the parsed options directly
//    - The struct is created once at startup and never mutated after
// -----------------------------------------------------------------------------

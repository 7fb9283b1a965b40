// src/checkout/clone.rs
// =============================================================================
// This module materializes a fresh qc-workbook working copy.
//
// Strategy:
// - Delete the previous working copy (ignoring "it wasn't there")
// - Shell out to the system `git` binary for the actual clone
// - Let git's own progress output go straight to the terminal
//
// Why not a git library?
// - A one-shot `git clone` is exactly what the CLI is for
// - The system git handles credentials, protocols, and progress for us
// - Pulling in a full git implementation would dwarf the rest of the tool
//
// Rust concepts:
// - async functions: The clone is awaited via tokio's process support
// - Result: For error handling
// - Option: "did a checkout happen" is data, not a side channel
// - Pattern matching on io::ErrorKind: To ignore only one specific error
// =============================================================================

use anyhow::{bail, Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tokio::process::Command;

use crate::cli::Cli;

/// Name of the source repository on GitHub. Only the account that hosts it
/// is configurable; the repository itself is always qc-workbook.
pub const REPO_NAME: &str = "qc-workbook";

// Builds the HTTPS clone URL for the given GitHub account
//
// Example:
//   repo_url("UTokyo-ICEPP") -> "https://github.com/UTokyo-ICEPP/qc-workbook"
pub fn repo_url(account: &str) -> String {
    format!("https://github.com/{}/{}", account, REPO_NAME)
}

// Returns the directory the clone lands in: <work_dir>/qc-workbook
//
// git names the clone after the repository, so this is where both the
// checkout step and the build step expect the sources to live.
pub fn book_dir(work_dir: &Path) -> PathBuf {
    work_dir.join(REPO_NAME)
}

// Runs the whole checkout step for one publish run
//
// Honors the --no-checkout toggle: when it is set, nothing on disk is
// touched and the function returns Ok(None). Otherwise the old working
// copy is removed FIRST, then the clone runs, and the URL that was cloned
// comes back as Ok(Some(url)).
//
// The clone URL is built by the caller (see repo_url); everything else
// comes from the parsed options.
pub async fn ensure_fresh_clone(options: &Cli, url: &str) -> Result<Option<String>> {
    if options.no_checkout {
        println!(
            "⏭️  Skipping checkout, using {}",
            book_dir(&options.work_dir).display()
        );
        return Ok(None);
    }

    if options.verbose {
        println!(
            "🧹 Removing old working copy at {}",
            book_dir(&options.work_dir).display()
        );
    }
    reset_workdir(&book_dir(&options.work_dir))?;

    println!("⬇️  Cloning {} (branch {})", url, options.branch);
    clone_repo(url, &options.branch, &options.work_dir).await?;

    Ok(Some(url.to_string()))
}

// Removes a previous working copy so the clone starts from a clean slate
//
// A missing directory is fine (first run, or someone cleaned up /tmp);
// any other I/O error (permissions, open files, ...) is a real problem
// and propagates to the caller.
pub fn reset_workdir(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => {
            Err(e).with_context(|| format!("failed to remove old working copy {}", dir.display()))
        }
    }
}

// Runs `git clone -b <branch> <url>` inside the working area and waits for it
//
// stdout/stderr are inherited so the user sees git's normal progress output.
// The exit status IS checked: an earlier version of this tool ignored it and
// would happily build a stale or missing tree after a failed clone.
//
// GIT_TERMINAL_PROMPT=0 makes git fail fast instead of prompting for
// credentials when the repository isn't reachable anonymously.
pub async fn clone_repo(url: &str, branch: &str, work_dir: &Path) -> Result<()> {
    let status = Command::new("git")
        .arg("clone")
        .arg("-b")
        .arg(branch)
        .arg(url)
        .current_dir(work_dir)
        .env("GIT_TERMINAL_PROMPT", "0")
        .status()
        .await
        .with_context(|| format!("failed to spawn git clone for {}", url))?;

    if !status.success() {
        bail!("git clone of {} (branch {}) failed: {}", url, branch, status);
    }

    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is tokio::process::Command?
//    - The async twin of std::process::Command
//    - .status().await spawns the child and waits without blocking the
//      runtime thread
//    - stdout/stderr default to "inherit", i.e. the child shares our terminal
//
// 2. What does bail! do?
//    - Shorthand for `return Err(anyhow!(...))`
//    - Great for "this condition means we're done, with an error"
//
// 3. Why with_context instead of context?
//    - with_context takes a closure, so the message String is only built
//      if there actually is an error
//
// 4. Why ErrorKind::NotFound specifically?
//    - remove_dir_all on a missing path is the expected first-run case
//    - Matching just that kind keeps every other failure loud
//
// 5. Why does ensure_fresh_clone return Option<String>?
//    - Some(url) = a checkout happened, and this is where it came from
//    - None = --no-checkout, nothing on disk was touched
//    - The caller puts this straight into the run summary
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    // Runs one git command in a directory and insists it succeeded.
    // The -c flags pin an identity so commits work on a bare CI machine.
    fn git(work_dir: &Path, args: &[&str]) {
        let status = std::process::Command::new("git")
            .args(["-c", "user.name=tester", "-c", "user.email=tester@example.com"])
            .args(args)
            .current_dir(work_dir)
            .env("GIT_TERMINAL_PROMPT", "0")
            .status()
            .unwrap();
        assert!(status.success(), "git {:?} failed", args);
    }

    // Creates a local qc-workbook repository with one commit on `master`
    // and returns its file:// clone URL. Cloning from a local path keeps
    // these tests off the network entirely.
    fn init_fixture_repo(parent: &Path) -> String {
        let origin = parent.join(REPO_NAME);
        fs::create_dir_all(origin.join("source/jp")).unwrap();
        fs::write(origin.join("source/jp/index.md"), "# fresh\n").unwrap();
        git(&origin, &["init"]);
        git(&origin, &["add", "."]);
        git(&origin, &["commit", "-m", "initial"]);
        git(&origin, &["branch", "-M", "master"]);
        format!("file://{}", origin.display())
    }

    #[test]
    fn test_repo_url_templates_account() {
        assert_eq!(
            repo_url("UTokyo-ICEPP"),
            "https://github.com/UTokyo-ICEPP/qc-workbook"
        );
        assert_eq!(repo_url("Org"), "https://github.com/Org/qc-workbook");
    }

    #[test]
    fn test_book_dir_joins_repo_name() {
        assert_eq!(
            book_dir(Path::new("/tmp")),
            PathBuf::from("/tmp/qc-workbook")
        );
    }

    #[test]
    fn test_reset_workdir_ignores_missing_directory() {
        let scratch = tempfile::tempdir().unwrap();
        let missing = scratch.path().join("never-created");
        assert!(reset_workdir(&missing).is_ok());
    }

    #[test]
    fn test_reset_workdir_removes_existing_tree() {
        let scratch = tempfile::tempdir().unwrap();
        let old = scratch.path().join(REPO_NAME);
        fs::create_dir_all(old.join("source/jp")).unwrap();
        fs::write(old.join("source/jp/index.md"), "# stale").unwrap();

        reset_workdir(&old).unwrap();
        assert!(!old.exists());
    }

    #[tokio::test]
    async fn test_checkout_replaces_stale_working_copy() {
        let scratch = tempfile::tempdir().unwrap();
        let url = init_fixture_repo(&scratch.path().join("origin"));

        // A leftover working copy from an earlier run, with content the
        // fixture repository doesn't have
        let work = scratch.path().join("work");
        let book = book_dir(&work);
        fs::create_dir_all(&book).unwrap();
        fs::write(book.join("stale.txt"), "old run").unwrap();

        let cli =
            Cli::try_parse_from(["workbook-publish", "-w", work.to_str().unwrap()]).unwrap();
        let cloned = ensure_fresh_clone(&cli, &url).await.unwrap();

        // The old tree was removed before the clone ran, so nothing of it
        // survives next to the freshly cloned sources
        assert_eq!(cloned.as_deref(), Some(url.as_str()));
        assert!(!book.join("stale.txt").exists());
        assert!(book.join("source/jp/index.md").exists());
    }

    #[tokio::test]
    async fn test_no_checkout_leaves_working_copy_alone() {
        let scratch = tempfile::tempdir().unwrap();
        let work = scratch.path().join("work");
        let book = book_dir(&work);
        fs::create_dir_all(&book).unwrap();
        fs::write(book.join("stale.txt"), "still here").unwrap();

        // The URL points at nothing, so any attempted clone would error;
        // getting Ok(None) back proves no clone was even tried
        let cli =
            Cli::try_parse_from(["workbook-publish", "-n", "-w", work.to_str().unwrap()])
                .unwrap();
        let cloned = ensure_fresh_clone(&cli, "file:///no/such/repo").await.unwrap();

        assert_eq!(cloned, None);
        assert!(book.join("stale.txt").exists());
    }

    #[tokio::test]
    async fn test_clone_repo_reports_git_failure() {
        let scratch = tempfile::tempdir().unwrap();
        let work = scratch.path().join("work");
        fs::create_dir_all(&work).unwrap();

        // A local path with no repository behind it makes git exit non-zero
        // without touching the network; before the status check this would
        // have passed silently.
        let url = format!("file://{}", scratch.path().join("no-such-repo").display());
        let result = clone_repo(&url, "master", &work).await;
        assert!(result.is_err());
    }
}

// src/checkout/mod.rs
// =============================================================================
// This module handles getting a fresh copy of the qc-workbook sources.
//
// Submodules:
// - clone: Wipes the old working copy and runs `git clone`
//
// This file (mod.rs) is the module root - it re-exports the public API so
// the rest of the application can write `checkout::clone_repo()` instead of
// `checkout::clone::clone_repo()`.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod clone;

// Re-export public items from submodules
pub use clone::{book_dir, clone_repo, ensure_fresh_clone, repo_url, reset_workdir, REPO_NAME};

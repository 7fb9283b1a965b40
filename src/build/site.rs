// src/build/site.rs
// =============================================================================
// This module runs the actual site build by calling into mdbook as a library.
//
// Key points:
// - The configuration is FIXED: HTML builder, conservative defaults for every
//   tuning knob, regardless of what other CLI flags were given
// - The build runs exactly once per invocation; there is no retry, no
//   incremental mode, no watching
// - Any failure inside mdbook propagates to the caller as an error
//
// Rust concepts:
// - Calling another crate's API and converting its paths/configs
// - anyhow's Context trait to label errors at the boundary
// =============================================================================

use anyhow::{Context, Result};
use mdbook::config::{Config, HtmlConfig};
use mdbook::MDBook;
use std::path::Path;

// Builds the fixed mdbook configuration for one publish run
//
// Only the source and output directories vary; everything else is pinned:
//   - book.src:            where the chapters live inside the repository
//   - build.build-dir:     where the rendered site goes
//   - build.create-missing: off, so a build never edits the source tree
//   - output.html:         the HTML renderer with all defaults
//
// Declaring `output.html` explicitly is what fixes the builder to HTML;
// mdbook renders one output per `output.*` table in its config.
pub fn build_config(source: &Path, target: &Path) -> Result<Config> {
    let mut config = Config::default();
    config.book.src = source.to_path_buf();
    config.build.build_dir = target.to_path_buf();
    config.build.create_missing = false;
    config.set("output.html", HtmlConfig::default())?;
    Ok(config)
}

// Loads the book under `book_root` and renders it once
//
// `book_root` is the repository root (the process has already changed
// directory into it, so this is usually "."). `source` and `target` are
// passed through to the fixed configuration above.
pub fn build_site(book_root: &Path, source: &Path, target: &Path) -> Result<()> {
    let config = build_config(source, target)?;

    let book = MDBook::load_with_config(book_root, config)
        .with_context(|| format!("failed to load book at {}", book_root.display()))?;

    book.build()
        .with_context(|| format!("HTML build into {} failed", target.display()))?;

    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why load_with_config instead of load?
//    - MDBook::load reads book.toml from the repository
//    - load_with_config ignores it and uses OUR configuration, which is the
//      whole point: the publish job always builds the same way
//
// 2. What is to_path_buf()?
//    - Converts a borrowed &Path into an owned PathBuf
//    - The Config outlives this function call, so it needs owned paths
//
// 3. Why does `?` work on mdbook's Results here?
//    - mdbook's error type is anyhow::Error, the same one we use
//    - So its Results flow straight into ours with no conversion
// -----------------------------------------------------------------------------

// src/build/mod.rs
// =============================================================================
// This module wraps the external documentation builder (the mdbook crate).
//
// Submodules:
// - site: Builds the fixed configuration and runs the one-shot HTML build
//
// Everything interesting about rendering - parsing, cross-references,
// templates, assets - happens inside mdbook. We only hand it a source
// directory, an output directory, and a fixed set of knobs.
// =============================================================================

mod site;

pub use site::{build_config, build_site};

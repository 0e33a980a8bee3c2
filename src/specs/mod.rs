// src/specs/mod.rs
//! # Sheet "specs" module
//!
//! Each spec knows the layout of one spreadsheet tab and turns its raw grid
//! (as produced by `fetch::fetch_grid`) into typed records.
//!
//! ## What lives here
//! - **Pure grid parsing**: no network, no files, no rendering.
//! - **Column positions** as named constants, read through bounds-checked
//!   helpers so a shifted or short row degrades to empty cells.
//!
//! ## What does **not** live here
//! - Fetching and CSV splitting (`fetch`, `csv`).
//! - Status classification and page partitioning (`teams`).
//! - HTML output (`html`, `file`).
//!
//! ## Typical call chain
//! ```text
//! runner → fetch::fetch_grid → specs::teams::parse_teams → html::render_*
//! ```
pub mod teams;

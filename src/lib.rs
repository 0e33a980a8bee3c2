// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod fetch;
pub mod file;
pub mod html;
pub mod logging;
pub mod runner;
pub mod specs;
pub mod teams;

pub use error::{Error, FetchError, Result};

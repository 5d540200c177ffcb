// src/lib.rs
//! Reconstruction of fencing competition results from captured result tables:
//! the elimination tableau (matches, roster) and the pool round (bouts,
//! ranked summary).

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod file;
pub mod pools;
pub mod progress;
pub mod runner;
pub mod tableau;

#[cfg(feature = "cli")]
pub mod cli;

//! Core library for puzzles
//!
//! This crate implements the **Functional Core** of the puzzles application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! - **`puzzles_core`** (this crate): Pure solver functions with zero I/O
//! - **`puzzles`**: Input loading, example checks and output (the Imperative Shell)
//!
//! Every solver here is deterministic: the same input text always produces the
//! same answers, and nothing is read from or written to the outside world.
//!
//! # Module Organization
//!
//! - [`dial`]: Tracks a 100-position dial turned by `L<n>` / `R<n>` commands
//! - [`repeats`]: Sums numbers made of a repeated digit block within ranges
//! - [`error`]: Errors raised while tokenizing puzzle input
//!
//! Each puzzle module exposes a tokenizer, the two counting rules, a `solve`
//! entry point and the embedded `EXAMPLE` with its `EXAMPLE_ANSWERS`.
//!
//! # Example Usage
//!
//! ```rust
//! use puzzles_core::dial;
//!
//! let commands = dial::parse_commands("L50 R150").unwrap();
//! assert_eq!(dial::count_zero_landings(&commands), 1);
//! assert_eq!(dial::count_zero_passes(&commands), 2);
//! ```

pub mod dial;
pub mod error;
pub mod repeats;

pub use error::{Error, Result};

//! iterbench: wall-clock comparison of lazy and eager iteration idioms
//!
//! Measures four passes over a fixed ten-million-element integer
//! sequence: a lazy filter (iterator adapter drained into a `Vec`), an
//! eager filter (imperative loop plus a mirroring traversal), and the
//! same pair for a `+ 2` map. Prints the four elapsed durations.
//!
//! The crate also provides [`Circle`], a cursor-based circular list
//! with optional oldest-first eviction.
//!
//! # Example
//!
//! ```ignore
//! use iterbench::{format_report, run_passes};
//!
//! let timings = run_passes(10_000_000);
//! print!("{}", format_report(&timings));
//! ```

pub mod circle;
pub mod cli;
pub mod error;
pub mod passes;
pub mod report;
pub mod runner;
pub mod timing;

// Re-export commonly used types
pub use circle::Circle;
pub use cli::Cli;
pub use error::{IterBenchError, Result};
pub use passes::{build_input, filter_eager, filter_lazy, is_even, map_eager, map_lazy, INPUT_LEN};
pub use report::format_report;
pub use runner::run_passes;
pub use timing::{time_pass, PassTimings};

//! Benchmark runner: builds the input sequence and times the four passes
//!
//! Control flow is strictly sequential. The input is built once and
//! borrowed by every pass; each pass runs to completion and is timed
//! independently before the next begins. The realized outputs exist
//! only to force evaluation and are dropped as soon as the pass is
//! measured.

use tracing::debug;

use crate::passes::{self, INPUT_LEN};
use crate::timing::{time_pass, PassTimings};

/// Run all four passes over a freshly built input of `len` elements.
pub fn run_passes(len: u64) -> PassTimings {
    let input = passes::build_input(len);
    debug!(len = input.len(), "input sequence built");

    let (out, filter_lazy) = time_pass(|| passes::filter_lazy(&input));
    debug!(
        elements = out.len(),
        secs = filter_lazy.as_secs_f64(),
        "filter pass (lazy) done"
    );
    drop(out);

    let (out, filter_eager) = time_pass(|| passes::filter_eager(&input));
    debug!(
        elements = out.len(),
        secs = filter_eager.as_secs_f64(),
        "filter pass (eager) done"
    );
    drop(out);

    let (out, map_lazy) = time_pass(|| passes::map_lazy(&input));
    debug!(
        elements = out.len(),
        secs = map_lazy.as_secs_f64(),
        "map pass (lazy) done"
    );
    drop(out);

    let (out, map_eager) = time_pass(|| passes::map_eager(&input));
    debug!(
        elements = out.len(),
        secs = map_eager.as_secs_f64(),
        "map pass (eager) done"
    );
    drop(out);

    PassTimings {
        filter_lazy,
        filter_eager,
        map_lazy,
        map_eager,
    }
}

/// Run the fixed ten-million-element benchmark the CLI executes.
pub fn run() -> PassTimings {
    run_passes(INPUT_LEN)
}

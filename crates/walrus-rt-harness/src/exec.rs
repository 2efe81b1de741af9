//! In-process fixture execution.
//!
//! Runs a fixture case's call sequence against the `walrus-rt-core`
//! renderers and scanner — the same code the ABI symbols delegate to —
//! capturing stdout bytes in a buffer and serving stdin from the case's
//! input bytes. One scanner instance lives for the whole case, so pushback
//! behaves exactly like the process-global scanner in the real runtime.

use walrus_rt_core::render::{render_char, render_float, render_int, render_str};
use walrus_rt_core::scan::{IntScanner, ScanOutcome, SliceSource};

use crate::fixtures::{FixtureCase, Op};

/// Observed behavior of one executed case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Execution {
    /// Bytes the case wrote to (captured) standard output.
    pub stdout: Vec<u8>,
    /// Return value of each op, in call order.
    pub returns: Vec<i64>,
}

/// Execute a fixture case and collect its observable behavior.
pub fn execute_case(case: &FixtureCase) -> Execution {
    let mut stdout = Vec::new();
    let mut returns = Vec::with_capacity(case.ops.len());
    let mut scanner = IntScanner::new(SliceSource::new(case.stdin.as_bytes()));

    for op in &case.ops {
        let ret = match op {
            Op::PrintInt(v) => {
                render_int(*v, &mut stdout);
                0
            }
            Op::PrintFloat(v) => {
                render_float(*v, &mut stdout);
                0
            }
            Op::PrintChar(v) => {
                render_char(*v, &mut stdout);
                0
            }
            Op::PrintStr(s) => {
                render_str(s.as_bytes(), &mut stdout);
                0
            }
            // Parse failures are masked as zero; that silence is the
            // contract under test, not a harness convenience.
            Op::GetsInt => match scanner.scan_int() {
                ScanOutcome::Matched(v) => v,
                ScanOutcome::Mismatch | ScanOutcome::Eof => 0,
            },
        };
        returns.push(ret);
    }

    Execution { stdout, returns }
}

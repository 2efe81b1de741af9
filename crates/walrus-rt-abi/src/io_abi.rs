//! The five runtime entry points Walrus generated code links against.
//!
//! Output format (byte-exact, matching the reference runtime):
//! - `_print_int`:   `Out: <decimal>\n`
//! - `_print_float`: `Out: <%g>\n`
//! - `_print_char`:  the single byte, no label, no newline
//! - `_print_str`:   `Out: <raw bytes>\n`
//!
//! `_print_str` requires a valid NUL-terminated pointer; that contract is
//! the caller's to uphold and is not checked here beyond a null guard.
//! `_gets_int` parses one decimal token from fd 0 and silently returns 0 on
//! any failure — compiled Walrus programs rely on that exact masking.
//!
//! Writes go straight to fd 1 with no buffering of our own, so interleaving
//! under concurrent callers follows the host's `write(2)` semantics (one
//! write per operation in practice, but per-call atomicity is not part of
//! the contract).

use std::ffi::{CStr, c_char, c_double, c_int};

use walrus_rt_core::render::{render_char, render_float, render_int, render_str};
use walrus_rt_core::scan::ScanOutcome;

use crate::stdin_state::stdin_scanner;

/// Status returned by every print operation. Kept for calling-convention
/// symmetry only; generated code never inspects it.
const STATUS_OK: c_int = 0;

/// Write all of `bytes` to fd 1, retrying short writes and `EINTR`.
/// Unrecoverable errors are dropped: the runtime contract has no failure
/// channel for broken output streams.
fn write_stdout(bytes: &[u8]) {
    let mut rest = bytes;
    while !rest.is_empty() {
        // SAFETY: writing from a live slice; fd 1 is process-owned.
        let rc = unsafe { libc::write(libc::STDOUT_FILENO, rest.as_ptr().cast(), rest.len()) };
        if rc > 0 {
            rest = &rest[rc as usize..];
        } else if rc < 0 && std::io::Error::last_os_error().raw_os_error() == Some(libc::EINTR) {
            continue;
        } else {
            return;
        }
    }
}

/// Runtime `_print_int`: write `Out: <decimal>\n`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _print_int(x: c_int) -> c_int {
    let mut buf = Vec::with_capacity(24);
    render_int(x as i64, &mut buf);
    write_stdout(&buf);
    STATUS_OK
}

/// Runtime `_print_float`: write `Out: <%g>\n`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _print_float(x: c_double) -> c_int {
    let mut buf = Vec::with_capacity(32);
    render_float(x, &mut buf);
    write_stdout(&buf);
    STATUS_OK
}

/// Runtime `_print_char`: write the single byte, unlabelled.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _print_char(x: c_int) -> c_int {
    let mut buf = Vec::with_capacity(1);
    render_char(x as i64, &mut buf);
    write_stdout(&buf);
    STATUS_OK
}

/// Runtime `_print_str`: write `Out: <bytes>\n`.
///
/// `s` must point to a NUL-terminated string. A null pointer is tolerated
/// as a no-write (the reference runtime would crash; crashing is not a
/// behavior worth preserving and generated code never passes null).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _print_str(s: *const c_char) -> c_int {
    if s.is_null() {
        return STATUS_OK;
    }
    // SAFETY: caller guarantees a valid NUL-terminated string.
    let bytes = unsafe { CStr::from_ptr(s) }.to_bytes();
    let mut buf = Vec::with_capacity(bytes.len() + 6);
    render_str(bytes, &mut buf);
    write_stdout(&buf);
    STATUS_OK
}

/// Runtime `_gets_int`: scan one decimal integer from fd 0.
///
/// Returns the parsed value, or 0 on end of input or a non-numeric token.
/// The failure is silent and the offending byte stays pushed back, exactly
/// as `scanf("%d")` leaves the stream.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn _gets_int() -> c_int {
    let mut scanner = stdin_scanner()
        .lock()
        .unwrap_or_else(|e| e.into_inner());
    match scanner.scan_int() {
        ScanOutcome::Matched(v) => v as c_int,
        ScanOutcome::Mismatch | ScanOutcome::Eof => 0,
    }
}

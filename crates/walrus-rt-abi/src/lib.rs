// All extern "C" exports accept values and raw pointers from generated code;
// the caller contract (valid NUL-terminated strings) is documented on the
// module, so per-function safety docs would be redundant boilerplate.
#![allow(clippy::missing_safety_doc)]
//! # walrus-rt-abi
//!
//! ABI boundary for the Walrus runtime.
//!
//! This crate produces the linkable runtime library (`libwalrus_rt.a` /
//! `libwalrus_rt.so`) that exposes the five symbols Walrus generated code
//! declares: `_print_int`, `_print_float`, `_print_char`, `_print_str`, and
//! `_gets_int`. Each entry point delegates formatting and token scanning to
//! the safe implementations in `walrus-rt-core` and touches the process
//! streams (fd 0 and fd 1) directly.
//!
//! # Architecture
//!
//! ```text
//! generated code -> ABI entry (this crate) -> walrus-rt-core render/scan -> fd 0/1
//! ```
//!
//! No entry point panics, and none reports stream failure: the print
//! operations return 0 unconditionally and `_gets_int` masks every parse
//! failure as 0. Generated code has no error-handling paths to hand a
//! richer status to.

pub mod io_abi;
mod stdin_state;
